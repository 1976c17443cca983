//! Case-insensitive substring search over the lines of a [`LineFile`].
//!
//! A line matches a key when it is not blank and its lowercase form contains
//! the lowercase key. Blank or whitespace-only lines never match, not even
//! the empty key, which otherwise matches every line.
//!
//! # Usage
//!
//! ```rust,no_run
//! use linefile::file::LineFile;
//! use linefile::search::LineQuery;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let file = LineFile::new("notes.txt")?;
//! let query = LineQuery::new(&file);
//!
//! let first = query.first(Some("todo"))?;
//! let all = query.all(Some("todo"))?.unwrap_or_default();
//! # Ok(())
//! # }
//! ```

use crate::file::{LineFile, LineFileError};
use log::trace;

/// A search over one file. Re-reads the file on every call.
pub struct LineQuery<'a> {
    file: &'a LineFile,
}

impl<'a> LineQuery<'a> {
    pub fn new(file: &'a LineFile) -> Self {
        Self { file }
    }

    /// First matching line in document order.
    ///
    /// Returns `Ok(None)` both for an absent key and when nothing matched.
    pub fn first(&self, key: Option<&str>) -> Result<Option<String>, LineFileError> {
        let Some(key) = key else {
            trace!("no search key for {}", self.file.path().display());
            return Ok(None);
        };

        let key = key.to_lowercase();
        Ok(self
            .file
            .read_lines()?
            .into_iter()
            .find(|line| matches_lowercase(line, &key)))
    }

    /// Every matching line in document order.
    ///
    /// `Ok(None)` when `key` is absent and no search was run; otherwise the
    /// matches, which may be empty.
    pub fn all(&self, key: Option<&str>) -> Result<Option<Vec<String>>, LineFileError> {
        let Some(key) = key else {
            trace!("no search key for {}", self.file.path().display());
            return Ok(None);
        };

        let key = key.to_lowercase();
        let found = self
            .file
            .read_lines()?
            .into_iter()
            .filter(|line| matches_lowercase(line, &key))
            .collect();
        Ok(Some(found))
    }
}

/// Whether `line` matches `key` under the search rules above.
pub fn matches(line: &str, key: &str) -> bool {
    matches_lowercase(line, &key.to_lowercase())
}

fn matches_lowercase(line: &str, lowered_key: &str) -> bool {
    !line.trim().is_empty() && line.to_lowercase().contains(lowered_key)
}

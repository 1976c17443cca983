//! # linefile
//!
//! A small Rust library for editing plain text files line by line: random-access
//! reads, in-place line replacement, deletion and case-insensitive search, with
//! every change written straight back to disk.
//!
//! ## Features
//!
//! - **Line addressing**: Read, replace, and delete lines by zero-based index
//! - **Search**: Case-insensitive substring search that skips blank lines
//! - **Configurable terminators**: `\n`, `\r\n`, or the platform default, used
//!   consistently for splitting and rewriting
//! - **Optional atomic writes**: Temp file plus rename instead of in-place truncation
//! - **Entity storage**: A one-entity-per-line repository built on top of a file
//! - **Robust Error Handling**: Module error types with automatic conversions
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use linefile::file::LineFile;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Creates an empty file if nothing is there yet
//! let file = LineFile::new("todo.txt")?;
//!
//! file.write("buy milk\nwalk dog\nbuy bread", false)?;
//! assert_eq!(file.find_line(1)?, "walk dog");
//!
//! // Replace line 1 in place
//! file.insert_line("feed cat", 1)?;
//!
//! let first = file.find_line_containing(Some("BUY"))?;
//! assert_eq!(first.as_deref(), Some("buy milk"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **[`file`]**: The [`LineFile`](file::LineFile) component
//! - **[`options`]**: Line terminator and write strategy configuration
//! - **[`search`]**: Case-insensitive line search
//! - **[`repository`]**: Entity persistence backed by a `LineFile`
//! - **[`error`]**: Crate-wide error aggregation
//!
//! ## Value-keyed edits
//!
//! [`update_line`](file::LineFile::update_line) and
//! [`delete_line`](file::LineFile::delete_line) select their target by the
//! *text* of the indexed line, not its position:
//!
//! - `update_line` replaces the first occurrence of that text anywhere in the
//!   file, which may be an earlier duplicate
//! - `delete_line` removes every line with that text
//!
//! [`insert_line`](file::LineFile::insert_line) and
//! [`remove_line_at`](file::LineFile::remove_line_at) are the positional
//! counterparts.
//!
//! ```rust,no_run
//! use linefile::file::LineFile;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let file = LineFile::new("dupes.txt")?;
//! file.write("a\nb\na", false)?;
//!
//! file.update_line("Z", 2)?;
//! assert_eq!(file.read_lines()?, ["Z", "b", "a"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! Every call re-reads the file and closes it before returning. There is no
//! locking: two writers on the same path can lose each other's edits, so
//! callers that share a path must serialize access themselves.
//!
//! ## Error Handling
//!
//! `LineFile` operations return [`LineFileError`](file::LineFileError); the
//! repository returns [`RepositoryError`](repository::RepositoryError). Both
//! convert into [`LinesError`], so `?` works across modules:
//!
//! ```rust,no_run
//! use linefile::{LinesResult, file::LineFile};
//!
//! fn first_line(path: &str) -> LinesResult<String> {
//!     let file = LineFile::new(path)?;
//!     Ok(file.find_line(0)?)
//! }
//! ```

pub mod error;
pub mod file;
pub mod options;
pub mod repository;
pub mod search;

/// Re-exports the most commonly used types for convenience.
pub use error::{LinesError, LinesResult};
pub use file::{LineFile, LineFileError};
pub use options::{LineFileOptions, LineTerminator, WriteStrategy};

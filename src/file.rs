use crate::options::{LineFileOptions, WriteStrategy};
use crate::search::LineQuery;
use log::{debug, trace, warn};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LineFileError {
    #[error("line {line} is out of range for a file of {len} lines")]
    LineOutOfRange { line: usize, len: usize },

    #[error("line {line} is empty and cannot be substituted by value")]
    EmptySubstitution { line: usize },

    #[error(transparent)]
    FileError(#[from] std::io::Error),
}

/// A text file addressed by zero-based line index.
///
/// Holds only the path and options. Every operation opens the file, does its
/// work and closes it again before returning, so two calls never share a
/// handle and nothing is cached between them. Concurrent writers to the same
/// path are not coordinated; callers that need that must serialize access.
#[derive(Debug, Clone)]
pub struct LineFile {
    path: PathBuf,
    options: LineFileOptions,
}

impl LineFile {
    /// Binds a `LineFile` to `path` with default options (`\n`, direct writes).
    ///
    /// Creates an empty file when nothing exists at `path`. Missing parent
    /// directories are not created; that and any other filesystem failure is
    /// returned as `FileError`.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<LineFile, LineFileError> {
        Self::with_options(path, LineFileOptions::default())
    }

    /// Same as [`LineFile::new`] with explicit options.
    pub fn with_options<P: AsRef<Path>>(
        path: P,
        options: LineFileOptions,
    ) -> Result<LineFile, LineFileError> {
        let path = path.as_ref().to_path_buf();

        if !path.is_file() {
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(_) => debug!("created empty file {}", path.display()),
                // someone else created it between the check and the open
                Err(e) if e.kind() == ErrorKind::AlreadyExists && path.is_file() => {
                    warn!("{} appeared while being created", path.display())
                }
                Err(e) => return Err(LineFileError::FileError(e)),
            }
        }

        Ok(LineFile { path, options })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn options(&self) -> &LineFileOptions {
        &self.options
    }

    /// Reads the whole file verbatim.
    pub fn read_all(&self) -> Result<String, LineFileError> {
        let content = fs::read_to_string(&self.path)?;
        trace!("read {} bytes from {}", content.len(), self.path.display());
        Ok(content)
    }

    /// Reads the file split on the configured terminator.
    ///
    /// An empty file is one empty line; a trailing terminator adds a trailing
    /// empty line.
    pub fn read_lines(&self) -> Result<Vec<String>, LineFileError> {
        Ok(self.options.terminator.split(&self.read_all()?))
    }

    pub fn line_count(&self) -> Result<usize, LineFileError> {
        Ok(self.read_lines()?.len())
    }

    /// Returns the line at index `line`.
    ///
    /// # Errors
    /// [`LineFileError::LineOutOfRange`] when `line` is not below the line count.
    pub fn find_line(&self, line: usize) -> Result<String, LineFileError> {
        let mut lines = self.read_lines()?;
        check_line(&lines, line)?;
        Ok(lines.swap_remove(line))
    }

    /// Returns the first non-blank line containing `key`, ignoring case.
    ///
    /// An absent key searches nothing and yields `Ok(None)`.
    pub fn find_line_containing(&self, key: Option<&str>) -> Result<Option<String>, LineFileError> {
        LineQuery::new(self).first(key)
    }

    /// Returns every non-blank line containing `key`, ignoring case, in order.
    ///
    /// `Ok(None)` means no search was performed because `key` was absent;
    /// `Ok(Some(vec![]))` means the search ran and matched nothing.
    pub fn find_lines(&self, key: Option<&str>) -> Result<Option<Vec<String>>, LineFileError> {
        LineQuery::new(self).all(key)
    }

    /// Index of the first line exactly equal to `line`, if any.
    pub fn get_line_number(&self, line: &str) -> Result<Option<usize>, LineFileError> {
        Ok(self.read_lines()?.iter().position(|l| l == line))
    }

    /// Writes `text` verbatim, replacing the content or appending to it.
    ///
    /// Overwrites honour [`WriteStrategy`]; appends always go straight to the file.
    pub fn write(&self, text: &str, append: bool) -> Result<(), LineFileError> {
        if append {
            let mut file = OpenOptions::new()
                .append(true)
                .create(true)
                .open(&self.path)?;
            file.write_all(text.as_bytes())?;
        } else {
            match self.options.write_strategy {
                WriteStrategy::Direct => fs::write(&self.path, text)?,
                WriteStrategy::Atomic => self.write_atomic(text.as_bytes())?,
            }
        }

        debug!(
            "wrote {} bytes to {} (append: {append})",
            text.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Like [`LineFile::write`] followed by one terminator.
    pub fn write_line(&self, text: &str, append: bool) -> Result<(), LineFileError> {
        let mut record = String::with_capacity(text.len() + 2);
        record.push_str(text);
        record.push_str(self.options.terminator.as_str());
        self.write(&record, append)
    }

    /// Replaces the line at `line` with `text`.
    ///
    /// Despite the name the line count does not change: the target line is
    /// overwritten in place and the file is rewritten without a trailing
    /// terminator.
    pub fn insert_line(&self, text: &str, line: usize) -> Result<(), LineFileError> {
        let mut lines = self.read_lines()?;
        check_line(&lines, line)?;

        lines[line] = text.to_owned();
        debug!("replacing line {line} of {}", self.path.display());
        self.rewrite(&lines)
    }

    /// Replaces the first occurrence of line `line`'s current text anywhere in
    /// the file with `text`.
    ///
    /// This is a substitution keyed by value, not position: when the same
    /// text occurs earlier (as a duplicate line or inside another line) that
    /// earlier occurrence is the one replaced.
    ///
    /// # Errors
    /// - [`LineFileError::LineOutOfRange`] when `line` is not below the line count
    /// - [`LineFileError::EmptySubstitution`] when the targeted line is empty
    pub fn update_line(&self, text: &str, line: usize) -> Result<(), LineFileError> {
        let content = self.read_all()?;
        let lines = self.options.terminator.split(&content);
        check_line(&lines, line)?;

        let old = &lines[line];
        if old.is_empty() {
            return Err(LineFileError::EmptySubstitution { line });
        }

        debug!(
            "substituting first occurrence of line {line} in {}",
            self.path.display()
        );
        self.write(&content.replacen(old.as_str(), text, 1), false)
    }

    /// Removes every line whose text equals the text of line `line`.
    ///
    /// Duplicates elsewhere in the file go too. Use
    /// [`LineFile::remove_line_at`] to remove a single line by position.
    pub fn delete_line(&self, line: usize) -> Result<(), LineFileError> {
        let mut lines = self.read_lines()?;
        check_line(&lines, line)?;

        let target = lines[line].clone();
        let before = lines.len();
        lines.retain(|l| *l != target);

        debug!(
            "deleting {} line(s) matching line {line} of {}",
            before - lines.len(),
            self.path.display()
        );
        self.rewrite(&lines)
    }

    /// Removes exactly the line at `line`.
    pub fn remove_line_at(&self, line: usize) -> Result<(), LineFileError> {
        let mut lines = self.read_lines()?;
        check_line(&lines, line)?;

        lines.remove(line);
        debug!("removing line {line} of {}", self.path.display());
        self.rewrite(&lines)
    }

    fn rewrite(&self, lines: &[String]) -> Result<(), LineFileError> {
        self.write(&self.options.terminator.join(lines), false)
    }

    /// Writes `data` to a temporary file next to the target and renames it
    /// over the target, so readers see either the old or the new content.
    ///
    /// A symlinked path is written through to the file it points at, and the
    /// replacement keeps that file's permissions.
    fn write_atomic(&self, data: &[u8]) -> Result<(), LineFileError> {
        let target = match fs::canonicalize(&self.path) {
            Ok(target) => target,
            Err(e) if e.kind() == ErrorKind::NotFound => self.path.clone(),
            Err(e) => return Err(LineFileError::FileError(e)),
        };

        let dir = match target.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)?;
        match fs::metadata(&target) {
            Ok(metadata) => tmp.as_file().set_permissions(metadata.permissions())?,
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(LineFileError::FileError(e)),
        }

        tmp.write_all(data)?;
        tmp.persist(&target).map_err(|e| {
            warn!("failed to persist {}: {}", target.display(), e.error);
            LineFileError::FileError(e.error)
        })?;
        Ok(())
    }
}

fn check_line(lines: &[String], line: usize) -> Result<(), LineFileError> {
    if line >= lines.len() {
        return Err(LineFileError::LineOutOfRange {
            line,
            len: lines.len(),
        });
    }
    Ok(())
}

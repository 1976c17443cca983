//! Configuration injected into a [`LineFile`](crate::file::LineFile).
//!
//! Line splitting and joining both go through [`LineTerminator`], so a file
//! written by this crate is always read back with the same line boundaries.

/// The sequence that separates lines on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineTerminator {
    /// `"\n"`
    #[default]
    Lf,
    /// `"\r\n"`
    CrLf,
    /// Whatever the host platform uses: `"\r\n"` on Windows, `"\n"` elsewhere.
    Platform,
}

impl LineTerminator {
    /// Returns the terminator as a string slice, resolving `Platform`.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineTerminator::Lf => "\n",
            LineTerminator::CrLf => "\r\n",
            LineTerminator::Platform => {
                if cfg!(windows) {
                    "\r\n"
                } else {
                    "\n"
                }
            }
        }
    }

    /// Splits `content` into lines.
    ///
    /// Empty content yields a single empty line and a trailing terminator
    /// yields a trailing empty line.
    pub fn split(&self, content: &str) -> Vec<String> {
        content.split(self.as_str()).map(str::to_owned).collect()
    }

    /// Joins `lines` with the terminator. No terminator follows the last line.
    pub fn join<S: AsRef<str>>(&self, lines: &[S]) -> String {
        let mut out = String::new();
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                out.push_str(self.as_str());
            }
            out.push_str(line.as_ref());
        }
        out
    }
}

/// How overwrites reach the disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteStrategy {
    /// Truncate the target and write in place.
    #[default]
    Direct,
    /// Write to a temporary file beside the target, then rename it over the target.
    ///
    /// Appends are never atomic.
    Atomic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineFileOptions {
    pub terminator: LineTerminator,
    pub write_strategy: WriteStrategy,
}

impl LineFileOptions {
    pub fn with_terminator(mut self, terminator: LineTerminator) -> Self {
        self.terminator = terminator;
        self
    }

    pub fn with_write_strategy(mut self, write_strategy: WriteStrategy) -> Self {
        self.write_strategy = write_strategy;
        self
    }
}

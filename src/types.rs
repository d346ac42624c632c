use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One accepted file, ready to be appended to the output buffer.
#[derive(Debug)]
pub struct OutputRecord<'a> {
    /// Path relative to the scan root.
    pub path: &'a Path,
    /// Raw file bytes, passed through without re-encoding.
    pub content: &'a [u8],
}

/// Running counts reported after each processed file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanProgress {
    pub processed: usize,
    pub skipped: usize,
}

/// The result of a completed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Code2TxtSummary {
    /// Files whose content was written to the output.
    pub processed: usize,
    /// Files left out by a filter or a per-entry error.
    pub skipped: usize,
    /// Absolute path of the output file.
    pub output: PathBuf,
    /// Whether the output file was written.
    ///
    /// `false` when no file matched, in which case no file is created.
    pub written: bool,
}

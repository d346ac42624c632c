//! Inclusion and exclusion sets, and the per-entry filter pipeline.
//!
//! Checks run cheapest first and short-circuit: output-file guard, directory
//! exclusion, name/extension match, size threshold, and finally the binary
//! classifier on a leading sample of the file.

use crate::defaults::{DEFAULT_EXCLUDE_DIRS, DEFAULT_EXTENSIONS};
use crate::detect::{BinaryDetection, Classification};
use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// File extensions (with leading dot) and exact file names eligible for output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSet {
    entries: HashSet<String>,
}

impl Default for ExtensionSet {
    fn default() -> Self {
        Self {
            entries: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl ExtensionSet {
    /// An empty set; nothing matches until entries are added.
    pub fn empty() -> Self {
        Self {
            entries: HashSet::new(),
        }
    }

    /// Adds a user-supplied extension.
    ///
    /// Surrounding whitespace is trimmed and blank input is ignored. An entry
    /// without a leading `.` and without a `/` gets a dot prepended, unless the
    /// bare form is already registered (so `Makefile` stays an exact name).
    pub fn insert(&mut self, raw: &str) {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return;
        }
        if !trimmed.starts_with('.') && !trimmed.contains('/') && !self.entries.contains(trimmed) {
            self.entries.insert(format!(".{trimmed}"));
        } else {
            self.entries.insert(trimmed.to_string());
        }
    }

    /// Registers an exact file name such as `Jenkinsfile`, with no normalization.
    pub fn insert_name(&mut self, name: impl Into<String>) {
        self.entries.insert(name.into());
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.entries.contains(entry)
    }

    /// Matches a file name exactly, then by the suffix starting at its last `.`.
    pub fn matches(&self, file_name: &str) -> bool {
        if self.entries.contains(file_name) {
            return true;
        }
        extension_of(file_name).is_some_and(|ext| self.entries.contains(ext))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: AsRef<str>> Extend<S> for ExtensionSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for raw in iter {
            self.insert(raw.as_ref());
        }
    }
}

/// The suffix of `file_name` from its last `.`, dot included.
///
/// A dotfile is its own extension: `.env` yields `.env`.
pub fn extension_of(file_name: &str) -> Option<&str> {
    file_name.rfind('.').map(|idx| &file_name[idx..])
}

/// Directory base names whose subtrees are pruned from the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionSet {
    names: HashSet<String>,
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self {
            names: DEFAULT_EXCLUDE_DIRS.iter().map(|d| d.to_string()).collect(),
        }
    }
}

impl ExclusionSet {
    pub fn empty() -> Self {
        Self {
            names: HashSet::new(),
        }
    }

    pub fn insert(&mut self, raw: &str) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            self.names.insert(trimmed.to_string());
        }
    }

    pub fn contains(&self, name: &OsStr) -> bool {
        name.to_str().is_some_and(|n| self.names.contains(n))
    }
}

impl<S: AsRef<str>> Extend<S> for ExclusionSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for raw in iter {
            self.insert(raw.as_ref());
        }
    }
}

/// What to do with a directory met during the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirDecision {
    Descend,
    Prune,
}

/// Why a file was left out of the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    OutputFile,
    Unmatched,
    TooLarge { size: u64, limit: u64 },
    Binary,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::OutputFile => write!(f, "output file"),
            SkipReason::Unmatched => write!(f, "extension not included"),
            SkipReason::TooLarge { size, limit } => write!(f, "too large ({size} > {limit})"),
            SkipReason::Binary => write!(f, "binary content"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Include,
    Skip(SkipReason),
}

/// Per-run filter combining the sets, threshold, detection strategy and the
/// resolved output path.
#[derive(Debug, Clone)]
pub struct Filter {
    extensions: ExtensionSet,
    exclusions: ExclusionSet,
    size_threshold: Option<u64>,
    detection: BinaryDetection,
    output: PathBuf,
}

impl Filter {
    pub fn new(
        extensions: ExtensionSet,
        exclusions: ExclusionSet,
        size_threshold: Option<u64>,
        detection: BinaryDetection,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            extensions,
            exclusions,
            size_threshold: size_threshold.filter(|&limit| limit > 0),
            detection,
            output: output.into(),
        }
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn is_output(&self, path: &Path) -> bool {
        path == self.output
    }

    pub fn directory(&self, name: &OsStr) -> DirDecision {
        if self.exclusions.contains(name) {
            DirDecision::Prune
        } else {
            DirDecision::Descend
        }
    }

    /// Metadata-only checks for a file: output guard, name match, size.
    pub fn file(&self, path: &Path, size: u64) -> Decision {
        if self.is_output(path) {
            return Decision::Skip(SkipReason::OutputFile);
        }
        let name = match path.file_name() {
            Some(name) => name.to_string_lossy(),
            None => return Decision::Skip(SkipReason::Unmatched),
        };
        if !self.extensions.matches(&name) {
            return Decision::Skip(SkipReason::Unmatched);
        }
        if let Some(limit) = self.size_threshold {
            if size > limit {
                return Decision::Skip(SkipReason::TooLarge { size, limit });
            }
        }
        Decision::Include
    }

    /// Final check on the file's leading bytes.
    pub fn sample(&self, sample: &[u8]) -> Decision {
        match self.detection.classify(sample) {
            Classification::Binary => Decision::Skip(SkipReason::Binary),
            Classification::Text => Decision::Include,
        }
    }
}

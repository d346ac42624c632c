use crate::defaults::{DEFAULT_OUTPUT, DEFAULT_THRESHOLD_MIB};
use crate::detect::BinaryDetection;
use crate::filter::{ExclusionSet, ExtensionSet};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

/// Converts a threshold in mebibytes to bytes.
///
/// Non-positive, NaN, or sub-byte values disable the threshold.
pub fn threshold_from_mib(mib: f64) -> Option<u64> {
    if mib.is_nan() || mib <= 0.0 {
        return None;
    }
    let bytes = (mib * BYTES_PER_MIB) as u64;
    (bytes > 0).then_some(bytes)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Code2TxtOptions {
    pub root: PathBuf,
    pub output: PathBuf,
    pub size_threshold: Option<u64>,
    pub extensions: Vec<String>,
    pub exclude_dirs: Vec<String>,
    pub binary_detection: BinaryDetection,
}
impl Default for Code2TxtOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from(DEFAULT_OUTPUT),
            size_threshold: threshold_from_mib(DEFAULT_THRESHOLD_MIB),
            extensions: Vec::new(),
            exclude_dirs: Vec::new(),
            binary_detection: BinaryDetection::Heuristic,
        }
    }
}
impl Code2TxtOptions {
    /// The default extension set merged with the user-supplied entries.
    pub fn extension_set(&self) -> ExtensionSet {
        let mut set = ExtensionSet::default();
        set.extend(&self.extensions);
        set
    }
    /// The default exclusion set merged with the user-supplied names.
    pub fn exclusion_set(&self) -> ExclusionSet {
        let mut set = ExclusionSet::default();
        set.extend(&self.exclude_dirs);
        set
    }
}
#[derive(Debug, Default)]
pub struct Code2TxtBuilder {
    options: Code2TxtOptions,
}
impl Code2TxtBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: Code2TxtOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output = path.into();
        self
    }
    pub fn threshold_mib(mut self, mib: f64) -> Self {
        self.options.size_threshold = threshold_from_mib(mib);
        self
    }
    pub fn size_threshold(mut self, bytes: Option<u64>) -> Self {
        self.options.size_threshold = bytes;
        self
    }
    pub fn no_size_threshold(mut self) -> Self {
        self.options.size_threshold = None;
        self
    }
    pub fn extensions(mut self, extensions: Vec<String>) -> Self {
        self.options.extensions = extensions;
        self
    }
    pub fn exclude_dirs(mut self, dirs: Vec<String>) -> Self {
        self.options.exclude_dirs = dirs;
        self
    }
    pub fn binary_detection(mut self, method: BinaryDetection) -> Self {
        self.options.binary_detection = method;
        self
    }
    pub fn build(self) -> Code2TxtOptions {
        self.options
    }
}

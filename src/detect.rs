//! Binary-vs-text classification of a file's leading bytes.

use serde::{Deserialize, Serialize};

/// Number of leading bytes inspected when classifying a file.
pub const SAMPLE_SIZE: u64 = 1024;

/// Share of suspicious bytes above which a non-UTF-8 sample is binary.
const SUSPICIOUS_RATIO: f64 = 0.30;

/// Outcome of classifying a byte sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Text,
    Binary,
}

impl Classification {
    pub fn is_binary(self) -> bool {
        self == Classification::Binary
    }
}

/// Strategy used to decide whether a file is binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BinaryDetection {
    /// Null-byte veto, then UTF-8 validity, then the suspicious-byte ratio.
    #[default]
    Heuristic,
    /// Encoding-aware detection from `content_inspector`.
    Accurate,
    /// Every file is treated as text.
    None,
}

impl BinaryDetection {
    pub fn classify(self, sample: &[u8]) -> Classification {
        match self {
            BinaryDetection::Heuristic => classify(sample),
            BinaryDetection::Accurate => {
                if content_inspector::inspect(sample).is_binary() {
                    Classification::Binary
                } else {
                    Classification::Text
                }
            }
            BinaryDetection::None => Classification::Text,
        }
    }
}

/// Classifies a sample of at most [`SAMPLE_SIZE`] bytes.
///
/// An empty sample is text. Any null byte makes it binary. Valid UTF-8 is
/// text. Otherwise the sample is binary when more than 30% of its bytes are
/// control characters other than tab, newline and carriage return, or lie
/// above the 7-bit ASCII range.
pub fn classify(sample: &[u8]) -> Classification {
    if sample.is_empty() {
        return Classification::Text;
    }
    if sample.contains(&0) {
        return Classification::Binary;
    }
    if std::str::from_utf8(sample).is_ok() {
        return Classification::Text;
    }
    let suspicious = sample.iter().filter(|&&b| is_suspicious(b)).count();
    if suspicious as f64 / sample.len() as f64 > SUSPICIOUS_RATIO {
        Classification::Binary
    } else {
        Classification::Text
    }
}

fn is_suspicious(b: u8) -> bool {
    (b < 0x20 && !matches!(b, b'\t' | b'\n' | b'\r')) || b > 0x7f
}

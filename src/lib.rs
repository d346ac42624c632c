//! # code2txt
//!
//! `code2txt` walks a directory tree, selects text and code files by name, extension,
//! size, and a binary-content heuristic, and concatenates their contents into a single
//! annotated document, one banner-wrapped record per file.
//!
//! The walk is sequential and deterministic. Directories named in the exclusion set are
//! pruned, and the output file is never read back into its own content, even on re-runs.
//! Errors on individual entries are logged through `tracing` and counted as skips; only
//! path resolution and writing the output file can fail a run.
//!
//! # Example
//!
//! ```no_run
//! use code2txt::{Code2TxtBuilder, BinaryDetection, code2txt};
//!
//! let options = Code2TxtBuilder::new(".")
//!     .output("snapshot.txt")
//!     .threshold_mib(1.0)
//!     .extensions(vec!["txt".into()])
//!     .exclude_dirs(vec!["fixtures".into()])
//!     .binary_detection(BinaryDetection::Heuristic)
//!     .build();
//!
//! let summary = code2txt(options).expect("Failed to scan directory");
//!
//! println!("processed {} files, skipped {}", summary.processed, summary.skipped);
//! ```

pub mod defaults;
mod detect;
mod engine;
mod error;
mod filter;
mod options;
pub mod output;
mod types;

pub use detect::{BinaryDetection, Classification, SAMPLE_SIZE, classify};
pub use engine::{code2txt, code2txt_with_progress};
pub use error::Code2TxtError;
pub use filter::{
    Decision, DirDecision, ExclusionSet, ExtensionSet, Filter, SkipReason, extension_of,
};
pub use options::{Code2TxtBuilder, Code2TxtOptions, threshold_from_mib};
pub use types::{Code2TxtSummary, OutputRecord, ScanProgress};

use code2txt::{
    BinaryDetection, Classification, Code2TxtBuilder, Code2TxtOptions, Code2TxtSummary, Decision,
    DirDecision, ExclusionSet, ExtensionSet, Filter, OutputRecord, SkipReason, classify,
    extension_of, threshold_from_mib,
};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
#[test]
fn test_classify_empty_is_text() {
    assert_eq!(classify(b""), Classification::Text);
}
#[test]
fn test_classify_null_byte_is_binary() {
    assert_eq!(classify(b"\0"), Classification::Binary);
    assert_eq!(classify(b"fn main() {}\0"), Classification::Binary);
    assert_eq!(classify(b"\0fn main() {}"), Classification::Binary);
    assert_eq!(classify("héllo\0wörld".as_bytes()), Classification::Binary);
}
#[test]
fn test_classify_utf8_is_text() {
    assert_eq!(classify(b"package main\n\nfunc main() {}\n"), Classification::Text);
    assert_eq!(classify("日本語のコメント // ok".as_bytes()), Classification::Text);
    // Control bytes are fine as long as the sample is valid UTF-8.
    assert_eq!(classify(b"\x01\x02\x03\x1b[0m"), Classification::Text);
}
#[test]
fn test_classify_invalid_utf8_uses_ratio() {
    let mut latin1 = b"caf".to_vec();
    latin1.push(0xe9);
    latin1.extend_from_slice(b" au lait, s'il vous plait\n");
    assert_eq!(classify(&latin1), Classification::Text);
    let mut noisy = vec![0xff, 0xfe, 0x80, 0x81];
    noisy.extend_from_slice(b"abcdef");
    assert_eq!(classify(&noisy), Classification::Binary);
}
#[test]
fn test_classify_ratio_boundary() {
    // 3 of 10 bytes is exactly 30%, which is not above the limit.
    let mut at_limit = vec![0xff, 0xfe, 0x01];
    at_limit.extend_from_slice(b"abcdefg");
    assert_eq!(classify(&at_limit), Classification::Text);
    let mut over_limit = vec![0xff, 0xfe, 0x01, 0x02];
    over_limit.extend_from_slice(b"abcdef");
    assert_eq!(classify(&over_limit), Classification::Binary);
}
#[test]
fn test_classify_whitespace_controls_not_suspicious() {
    let mut sample = vec![0xff];
    sample.extend_from_slice(b"\t\t\r\n\r\n\t\n");
    assert_eq!(classify(&sample), Classification::Text);
}
#[test]
fn test_binary_detection_strategies() {
    assert_eq!(BinaryDetection::None.classify(b"\0\0\0"), Classification::Text);
    assert!(BinaryDetection::Accurate.classify(b"\0\x01\x02").is_binary());
    assert_eq!(BinaryDetection::Accurate.classify(b"plain text\n"), Classification::Text);
    assert!(BinaryDetection::Heuristic.classify(b"a\0b").is_binary());
    assert_eq!(BinaryDetection::default(), BinaryDetection::Heuristic);
}
#[test]
fn test_extension_of() {
    assert_eq!(extension_of("main.go"), Some(".go"));
    assert_eq!(extension_of("archive.tar.gz"), Some(".gz"));
    assert_eq!(extension_of(".env"), Some(".env"));
    assert_eq!(extension_of("trailing."), Some("."));
    assert_eq!(extension_of("Makefile"), None);
}
#[test]
fn test_default_extensions() {
    let set = ExtensionSet::default();
    assert!(set.matches("main.go"));
    assert!(set.matches("lib.rs"));
    assert!(set.matches("Makefile"));
    assert!(set.matches("Dockerfile"));
    assert!(set.matches(".env"));
    assert!(!set.matches("notes.txt"));
    assert!(!set.matches("Makefile.bak"));
    assert!(!set.matches("image.png"));
    assert!(!set.matches("README"));
}
#[test]
fn test_extension_normalization() {
    let mut bare = ExtensionSet::empty();
    bare.insert("go");
    let mut dotted = ExtensionSet::empty();
    dotted.insert(".go");
    assert_eq!(bare, dotted);
    assert!(bare.matches("main.go"));

    let mut set = ExtensionSet::empty();
    set.extend([" txt ", "", "   ", "docs/notes"]);
    assert!(set.contains(".txt"));
    assert!(set.contains("docs/notes"));
    assert_eq!(set.len(), 2);
}
#[test]
fn test_extension_bare_name_kept_when_registered() {
    let mut set = ExtensionSet::default();
    let before = set.len();
    set.insert("Makefile");
    assert_eq!(set.len(), before);
    assert!(!set.contains(".Makefile"));

    let mut empty = ExtensionSet::empty();
    empty.insert("Jenkinsfile");
    assert!(empty.contains(".Jenkinsfile"));
    assert!(!empty.matches("Jenkinsfile"));
    empty.insert_name("Jenkinsfile");
    assert!(empty.matches("Jenkinsfile"));
}
#[test]
fn test_exclusion_set() {
    let mut set = ExclusionSet::default();
    assert!(set.contains(OsStr::new("node_modules")));
    assert!(set.contains(OsStr::new(".git")));
    assert!(!set.contains(OsStr::new("src")));
    set.extend(["  fixtures ", ""]);
    assert!(set.contains(OsStr::new("fixtures")));
    assert!(!ExclusionSet::empty().contains(OsStr::new("node_modules")));
}
#[test]
fn test_threshold_from_mib() {
    assert_eq!(threshold_from_mib(0.5), Some(512 * 1024));
    assert_eq!(threshold_from_mib(1.0), Some(1024 * 1024));
    assert_eq!(threshold_from_mib(0.0), None);
    assert_eq!(threshold_from_mib(-1.0), None);
    assert_eq!(threshold_from_mib(f64::NAN), None);
    assert_eq!(threshold_from_mib(1e-9), None);
}
fn test_filter(limit: Option<u64>) -> Filter {
    Filter::new(
        ExtensionSet::default(),
        ExclusionSet::default(),
        limit,
        BinaryDetection::Heuristic,
        "/work/code_output.txt",
    )
}
#[test]
fn test_filter_directory() {
    let filter = test_filter(None);
    assert_eq!(filter.directory(OsStr::new("vendor")), DirDecision::Prune);
    assert_eq!(filter.directory(OsStr::new("src")), DirDecision::Descend);
}
#[test]
fn test_filter_file_checks() {
    let filter = test_filter(Some(100));
    assert_eq!(
        filter.file(Path::new("/work/code_output.txt"), 10),
        Decision::Skip(SkipReason::OutputFile)
    );
    assert_eq!(
        filter.file(Path::new("/work/image.png"), 10),
        Decision::Skip(SkipReason::Unmatched)
    );
    assert_eq!(
        filter.file(Path::new("/work/big.go"), 101),
        Decision::Skip(SkipReason::TooLarge {
            size: 101,
            limit: 100
        })
    );
    assert_eq!(filter.file(Path::new("/work/ok.go"), 100), Decision::Include);
    assert_eq!(filter.file(Path::new("/work/Makefile"), 0), Decision::Include);
}
#[test]
fn test_filter_without_threshold_ignores_size() {
    let filter = test_filter(None);
    assert_eq!(filter.file(Path::new("/work/huge.go"), u64::MAX), Decision::Include);
    let zero = test_filter(Some(0));
    assert_eq!(zero.file(Path::new("/work/huge.go"), u64::MAX), Decision::Include);
}
#[test]
fn test_filter_sample() {
    let filter = test_filter(None);
    assert_eq!(filter.sample(b"let x = 1;\n"), Decision::Include);
    assert_eq!(filter.sample(b"\x7fELF\0\0"), Decision::Skip(SkipReason::Binary));
}
#[test]
fn test_output_record_banner() {
    let mut buf = Vec::new();
    OutputRecord {
        path: Path::new("src/main.rs"),
        content: b"fn main() {}",
    }
    .write_to(&mut buf);
    let separator = "=".repeat(80);
    let expected = format!("\n{separator}\nFile: src/main.rs\n{separator}\n\nfn main() {{}}\n");
    assert_eq!(buf, expected.as_bytes());
}
#[cfg(unix)]
#[test]
fn test_output_record_keeps_raw_path_bytes() {
    use std::os::unix::ffi::OsStrExt;
    let name = OsStr::from_bytes(b"caf\xe9.rs");
    let mut buf = Vec::new();
    OutputRecord {
        path: Path::new(name),
        content: b"",
    }
    .write_to(&mut buf);
    assert!(buf.windows(14).any(|w| w == &b"File: caf\xe9.rs\n"[..]));
}
#[test]
fn test_summary_serde_round_trip() {
    let summary = Code2TxtSummary {
        processed: 3,
        skipped: 7,
        output: PathBuf::from("/work/code_output.txt"),
        written: true,
    };
    let json = serde_json::to_string(&summary).unwrap();
    assert!(json.contains("\"processed\":3"));
    let back: Code2TxtSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(back, summary);
}
#[test]
fn test_options_serde_round_trip() {
    let options = Code2TxtBuilder::new("/work")
        .output("snapshot.txt")
        .threshold_mib(1.0)
        .extensions(vec!["txt".into()])
        .exclude_dirs(vec!["fixtures".into()])
        .binary_detection(BinaryDetection::Accurate)
        .build();
    let json = serde_json::to_string_pretty(&options).unwrap();
    let back: Code2TxtOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(back.root, options.root);
    assert_eq!(back.output, options.output);
    assert_eq!(back.size_threshold, Some(1024 * 1024));
    assert_eq!(back.extensions, vec!["txt".to_string()]);
    assert_eq!(back.exclude_dirs, vec!["fixtures".to_string()]);
    assert_eq!(back.binary_detection, BinaryDetection::Accurate);
    assert!(back.extension_set().matches("notes.txt"));
}

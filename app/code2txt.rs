//! Command-line interface for code2txt.
//!
//! Scans a directory (the working directory by default), applies the extension,
//! size, and binary filters, and concatenates the results into a single text file.

use clap::{ArgAction, Parser};
use code2txt::defaults::{DEFAULT_OUTPUT, DEFAULT_THRESHOLD_MIB};
use code2txt::{
    BinaryDetection, Code2TxtBuilder, Code2TxtOptions, Code2TxtSummary, code2txt_with_progress,
};
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

const EXAMPLES: &str = "\
Examples:
  code2txt
  code2txt -o project_src.txt
  code2txt -t 1 --extensions .config,.script
  code2txt --exclude-dirs test_data,temp_files";

/// code2txt — concatenates code files into a single text file
#[derive(Parser)]
#[command(
    name = "code2txt",
    version,
    about,
    long_about = None,
    after_help = EXAMPLES
)]
struct Cli {
    /// Root directory (default current dir)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Output file path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// File size threshold in MB (0 or negative to disable)
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD_MIB, allow_negative_numbers = true)]
    threshold: f64,

    /// Comma-separated list of additional extensions to include (e.g. .txt,log)
    #[arg(long, value_delimiter = ',')]
    extensions: Vec<String>,

    /// Comma-separated list of additional directory names to exclude
    #[arg(long = "exclude-dirs", value_delimiter = ',')]
    exclude_dirs: Vec<String>,

    /// Binary detection strategy
    #[arg(long, default_value = "heuristic", value_parser = parse_binary_detection)]
    binary_detection: BinaryDetection,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Parse string into BinaryDetection enum.
fn parse_binary_detection(s: &str) -> Result<BinaryDetection, String> {
    match s {
        "heuristic" => Ok(BinaryDetection::Heuristic),
        "accurate" => Ok(BinaryDetection::Accurate),
        "none" => Ok(BinaryDetection::None),
        _ => Err(format!("invalid binary detection method: {}", s)),
    }
}

impl Cli {
    fn into_options(self) -> Code2TxtOptions {
        Code2TxtBuilder::new(self.root)
            .output(self.output)
            .threshold_mib(self.threshold)
            .extensions(self.extensions)
            .exclude_dirs(self.exclude_dirs)
            .binary_detection(self.binary_detection)
            .build()
    }
}

fn setup_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("info,ignore=warn"),
        1 => EnvFilter::new("debug,ignore=warn"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stdout)
        .with_ansi(io::stdout().is_terminal())
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    let options = cli.into_options();

    let result = code2txt_with_progress(options, |progress| {
        print!(
            "\rProcessed: {}, Skipped: {}",
            progress.processed, progress.skipped
        );
        let _ = io::stdout().flush();
    });
    println!();

    match result {
        Ok(summary) => {
            report(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn report(summary: &Code2TxtSummary) {
    if !summary.written {
        info!("No content was generated.");
        info!(
            processed = summary.processed,
            skipped = summary.skipped,
            "File processing summary"
        );
        if summary.skipped > 0 {
            info!("Try adjusting filters or checking file permissions.");
        }
        return;
    }
    info!(
        processed = summary.processed,
        skipped = summary.skipped,
        "Processing complete"
    );
    info!(path = %summary.output.display(), "Output saved");
}

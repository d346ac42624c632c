use crate::detect::SAMPLE_SIZE;
use crate::error::Code2TxtError;
use crate::filter::{Decision, DirDecision, Filter};
use crate::options::Code2TxtOptions;
use crate::output::write_output;
use crate::types::{Code2TxtSummary, OutputRecord, ScanProgress};
use ignore::{DirEntry, WalkBuilder};
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(root: &Path, filter: &Filter) -> Self {
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b));
        let dirs = filter.clone();
        builder.filter_entry(move |entry| {
            if !is_dir(entry) {
                return true;
            }
            match dirs.directory(entry.file_name()) {
                DirDecision::Descend => true,
                DirDecision::Prune => {
                    debug!(path = %entry.path().display(), "Excluded directory, not descending");
                    false
                }
            }
        });
        Self {
            inner: builder.build(),
        }
    }
    fn into_iter(self) -> impl Iterator<Item = Result<DirEntry, Code2TxtError>> {
        self.inner
            .map(|result| result.map_err(|e| Code2TxtError::Walk(e.to_string())))
    }
}
fn is_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_some_and(|t| t.is_dir())
}
#[derive(Default)]
struct ScanState {
    progress: ScanProgress,
    buffer: Vec<u8>,
}
impl ScanState {
    fn skip(&mut self) {
        self.progress.skipped += 1;
    }
    fn accept(&mut self, record: OutputRecord<'_>) {
        record.write_to(&mut self.buffer);
        self.progress.processed += 1;
    }
}
fn resolve_root(cwd: &Path, root: &Path) -> Result<PathBuf, Code2TxtError> {
    let joined = cwd.join(root);
    fs::canonicalize(&joined).map_err(|e| Code2TxtError::invalid_path(joined, e))
}
fn resolve_output(cwd: &Path, output: &Path) -> Result<PathBuf, Code2TxtError> {
    let absolute =
        std::path::absolute(cwd.join(output)).map_err(|e| Code2TxtError::invalid_path(output, e))?;
    // Walked paths are canonical; canonicalize the parent so `..` and symlinks compare equal.
    if let (Some(parent), Some(name)) = (absolute.parent(), absolute.file_name()) {
        if let Ok(parent) = fs::canonicalize(parent) {
            return Ok(parent.join(name));
        }
    }
    Ok(absolute)
}
/// Samples the file, and reads the rest through the same handle if it is text.
///
/// Returns `Ok(None)` when the sample is classified as binary.
fn read_text(path: &Path, filter: &Filter) -> Result<Option<Vec<u8>>, Code2TxtError> {
    let file = File::open(path).map_err(|e| Code2TxtError::classify(path, e))?;
    let mut reader = BufReader::new(file);
    let mut content = Vec::new();
    reader
        .by_ref()
        .take(SAMPLE_SIZE)
        .read_to_end(&mut content)
        .map_err(|e| Code2TxtError::classify(path, e))?;
    if let Decision::Skip(reason) = filter.sample(&content) {
        debug!(path = %path.display(), %reason, "Skipping file");
        return Ok(None);
    }
    reader
        .read_to_end(&mut content)
        .map_err(|e| Code2TxtError::read(path, e))?;
    Ok(Some(content))
}
/// Runs the filter pipeline on one non-directory entry. Returns whether it was included.
fn visit_file(entry: &DirEntry, root: &Path, filter: &Filter, state: &mut ScanState) -> bool {
    let path = entry.path();
    let size = match entry.metadata() {
        Ok(metadata) => metadata.len(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Error getting file info, skipping");
            state.skip();
            return false;
        }
    };
    if let Decision::Skip(reason) = filter.file(path, size) {
        debug!(path = %path.display(), %reason, "Skipping file");
        state.skip();
        return false;
    }
    let content = match read_text(path, filter) {
        Ok(Some(content)) => content,
        Ok(None) => {
            state.skip();
            return false;
        }
        Err(e @ Code2TxtError::Classify { .. }) => {
            warn!(
                path = %path.display(),
                error = %e,
                "Could not check if file is binary, skipping"
            );
            state.skip();
            return false;
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Error reading file, skipping");
            state.skip();
            return false;
        }
    };
    let relative = path.strip_prefix(root).unwrap_or(path);
    state.accept(OutputRecord {
        path: relative,
        content: &content,
    });
    true
}
/// Scans `options.root` and writes every accepted file to `options.output`.
pub fn code2txt(options: Code2TxtOptions) -> Result<Code2TxtSummary, Code2TxtError> {
    code2txt_with_progress(options, |_| {})
}
/// Like [`code2txt`], calling `on_progress` after each processed file.
///
/// Only setup failures and output-file failures are returned as errors.
/// Problems with individual entries are logged and counted as skips.
pub fn code2txt_with_progress<F>(
    options: Code2TxtOptions,
    mut on_progress: F,
) -> Result<Code2TxtSummary, Code2TxtError>
where
    F: FnMut(&ScanProgress),
{
    let cwd = std::env::current_dir().map_err(Code2TxtError::CurrentDir)?;
    let root = resolve_root(&cwd, &options.root)?;
    let output = resolve_output(&cwd, &options.output)?;
    debug!(root = %root.display(), output = %output.display(), "Starting code2txt");
    let filter = Filter::new(
        options.extension_set(),
        options.exclusion_set(),
        options.size_threshold,
        options.binary_detection,
        output,
    );
    let mut state = ScanState::default();
    for result in Walker::new(&root, &filter).into_iter() {
        let entry = match result {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "Error accessing path, skipping");
                state.skip();
                continue;
            }
        };
        if is_dir(&entry) {
            continue;
        }
        if visit_file(&entry, &root, &filter, &mut state) {
            on_progress(&state.progress);
        }
    }
    let ScanState { progress, buffer } = state;
    let written = !buffer.is_empty();
    if written {
        write_output(filter.output(), &buffer)?;
    }
    Ok(Code2TxtSummary {
        processed: progress.processed,
        skipped: progress.skipped,
        output: filter.output().to_path_buf(),
        written,
    })
}

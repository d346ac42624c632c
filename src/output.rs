//! Output record formatting and persistence.
//!
//! Each included file becomes a banner-wrapped block:
//!
//! ```text
//!
//! ================================================================================
//! File: src/main.rs
//! ================================================================================
//!
//! <raw content>
//! ```
//!
//! followed by a newline. Content bytes are copied verbatim.

use crate::Code2TxtError;
use crate::types::OutputRecord;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Width of the `=` separator lines around each header.
pub const SEPARATOR_WIDTH: usize = 80;

impl OutputRecord<'_> {
    /// Appends this record to `buf`.
    pub fn write_to(&self, buf: &mut Vec<u8>) {
        let separator = "=".repeat(SEPARATOR_WIDTH);
        buf.reserve(self.content.len() + 2 * SEPARATOR_WIDTH + 16);
        buf.push(b'\n');
        buf.extend_from_slice(separator.as_bytes());
        buf.push(b'\n');
        buf.extend_from_slice(b"File: ");
        push_path(buf, self.path);
        buf.push(b'\n');
        buf.extend_from_slice(separator.as_bytes());
        buf.extend_from_slice(b"\n\n");
        buf.extend_from_slice(self.content);
        buf.push(b'\n');
    }
}

/// Appends the path's raw bytes; non-Unix platforms fall back to a lossy conversion.
#[cfg(unix)]
fn push_path(buf: &mut Vec<u8>, path: &Path) {
    use std::os::unix::ffi::OsStrExt;
    buf.extend_from_slice(path.as_os_str().as_bytes());
}
#[cfg(not(unix))]
fn push_path(buf: &mut Vec<u8>, path: &Path) {
    buf.extend_from_slice(path.to_string_lossy().as_bytes());
}

/// Creates or truncates `path` and writes the whole buffer to it.
pub fn write_output(path: impl AsRef<Path>, buf: &[u8]) -> Result<(), Code2TxtError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| Code2TxtError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(buf)
        .and_then(|()| writer.flush())
        .map_err(|e| Code2TxtError::io(path, e))?;
    Ok(())
}

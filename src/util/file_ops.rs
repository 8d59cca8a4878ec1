// File Operations for cipher input and output
// Whole-file reads happen before any computation starts; handles close on return

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::config::ToolkitConfig;

/// Errors that can occur during file operations
#[derive(Error, Debug)]
pub enum FileError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{path} is {size} bytes, above the {limit} byte input limit")]
    FileTooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("{0} is not valid UTF-8 text")]
    InvalidUtf8(PathBuf),
}

/// Result type for file operations
pub type FileResult<T> = Result<T, FileError>;

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> FileError {
    let path = path.to_path_buf();
    move |source| FileError::Io { path, source }
}

/// Read an entire file into memory, refusing files above `config.max_input_bytes`
pub fn read_input(path: &Path, config: &ToolkitConfig) -> FileResult<Vec<u8>> {
    let size = fs::metadata(path).map_err(io_error(path))?.len();
    if size > config.max_input_bytes {
        return Err(FileError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            limit: config.max_input_bytes,
        });
    }

    let mut file = File::open(path).map_err(io_error(path))?;
    let mut data = Vec::with_capacity(size as usize);
    file.read_to_end(&mut data).map_err(io_error(path))?;

    debug!(path = %path.display(), size = %format_file_size(size), "input read");
    Ok(data)
}

/// Read an entire file as UTF-8 text
pub fn read_input_text(path: &Path, config: &ToolkitConfig) -> FileResult<String> {
    let data = read_input(path, config)?;
    String::from_utf8(data).map_err(|_| FileError::InvalidUtf8(path.to_path_buf()))
}

/// Write data to file, replacing any existing content
pub fn write_output(path: &Path, data: &[u8]) -> FileResult<()> {
    let mut file = File::create(path).map_err(io_error(path))?;
    file.write_all(data).map_err(io_error(path))?;
    Ok(())
}

/// Format file size for display
pub fn format_file_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

// crates/infra/src/persistence/file_reader.rs
use std::{fs::File, io::Read, path::Path};

use file_stats_ports::SourceReader;
use file_stats_shared_kernel::{InfraResult, InfrastructureError, Result};
use log::{debug, warn};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Read the entire file into memory.
    pub fn read_to_end(path: &Path) -> InfraResult<Vec<u8>> {
        let mut file = File::open(path).map_err(|source| file_read_error(path, source))?;
        let mut buf = Vec::new();
        file.read_to_end(&mut buf).map_err(|source| file_read_error(path, source))?;
        Ok(buf)
    }

    /// Read the entire file as text. Invalid UTF-8 sequences are replaced
    /// with U+FFFD instead of failing the read.
    pub fn read_to_string(path: &Path) -> InfraResult<String> {
        let bytes = Self::read_to_end(path)?;
        debug!("read {} bytes from {}", bytes.len(), path.display());
        Ok(match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => {
                warn!("{} is not valid UTF-8; decoding lossily", path.display());
                String::from_utf8_lossy(err.as_bytes()).into_owned()
            }
        })
    }
}

fn file_read_error(path: &Path, source: std::io::Error) -> InfrastructureError {
    InfrastructureError::FileRead { path: path.to_path_buf(), source }
}

/// [`SourceReader`] backed by the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSourceReader;

impl SourceReader for FsSourceReader {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        Ok(FileReader::read_to_string(path)?)
    }
}

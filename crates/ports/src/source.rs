// crates/ports/src/source.rs
use std::path::Path;

use file_stats_shared_kernel::Result;

/// Port for reading an input file fully into memory as text.
///
/// Implementations must surface a missing or unreadable path as
/// `InfrastructureError::FileRead`; they never retry.
pub trait SourceReader: Send + Sync {
    fn read_to_string(&self, path: &Path) -> Result<String>;
}

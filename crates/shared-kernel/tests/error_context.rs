// crates/shared-kernel/tests/error_context.rs
use std::io;

use file_stats_shared_kernel::{ErrorContext, FileStatsError, InfrastructureError};

fn boom() -> std::result::Result<(), io::Error> {
    Err(io::Error::other("root-io"))
}

#[test]
fn context_wraps_and_formats() {
    let err = boom()
        .map_err(FileStatsError::from)
        .context("writing report")
        .unwrap_err();

    let display = err.to_string();
    assert!(display.contains("writing report"));
    assert!(display.contains("Output error:"));
    assert!(!err.is_file_read());
}

#[test]
fn file_read_is_detected_through_context() {
    let read: std::result::Result<(), InfrastructureError> = Err(InfrastructureError::FileRead {
        path: "missing.txt".into(),
        source: io::Error::from(io::ErrorKind::NotFound),
    });

    let err = read.with_context(|| "analyzing missing.txt".to_string()).unwrap_err();
    assert!(err.is_file_read());
    assert!(err.to_string().contains("missing.txt"));
}

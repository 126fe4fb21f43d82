// tests/common/mod.rs
//! 共通テストユーティリティ

pub mod temp;

#[allow(unused_imports)]
pub use temp::TempWorkspace;

use std::path::PathBuf;

/// Path of a file shipped under `data/`.
#[allow(dead_code)]
pub fn sample(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

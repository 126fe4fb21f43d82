//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`source`]: whole-file text reads
//!
//! The use-case layer depends on these traits only, so the summarizers can be
//! driven from the filesystem adapter or from in-memory stubs in tests.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod source;

pub use source::SourceReader;

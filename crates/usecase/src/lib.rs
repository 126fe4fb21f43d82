//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate composes the read port with the domain summarizers:
//!
//! - [`orchestrator`]: `AnalyzeNumbers` / `AnalyzeText` (read → parse → aggregate)
//! - [`dto`]: report records handed to the presentation layer
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::{FileReport, ReportBody};
pub use orchestrator::{AnalyzeNumbers, AnalyzeText};

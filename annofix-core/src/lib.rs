//! Embeddable core library for annofix.
//!
//! Provides a clap-free, I/O-abstracted entry point suitable for linking
//! into a larger maintenance binary or other host process.
//!
//! # Port traits
//!
//! Process spawning is abstracted behind [`ports::AnalyzerSource`]; the
//! [`adapters`] module provides the real `flutter analyze` implementation
//! and a canned-output source for tests and embedding.
//!
//! # Entry points
//!
//! - [`run_scan`](pipeline::run_scan) — analyze and extract issues
//! - [`run_fix`](pipeline::run_fix) — analyze, plan, and patch (or preview)

pub mod adapters;
pub mod pipeline;
pub mod plan;
pub mod ports;
pub mod settings;

// Re-export the extractor so embedders don't need annofix-analyzer directly.
pub use annofix_analyzer::{MARKER, extract_issues};

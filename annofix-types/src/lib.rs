//! Shared DTOs (schemas-as-code) for the annofix workspace.
//!
//! # Design constraints
//! - These types may be serialized for tooling (`annofix scan --format json`).
//! - Be conservative with breaking changes.
//! - Prefer adding optional fields over changing semantics.

pub mod issue;
pub mod outcome;
pub mod plan;

/// The literal annotation text inserted to satisfy the lint.
pub const ANNOTATION: &str = "@override";

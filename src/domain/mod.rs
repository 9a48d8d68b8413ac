//! Shared data model layer (structs and errors only).
//!
//! ## Purpose
//! - Keep report/output structs in one place.
//! - Avoid cyclic imports and duplicated type definitions.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — integrity/comparison report structs, output envelope.
//! - `errors.rs` — analysis error taxonomy.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem or stdout side effects.

pub mod errors;
pub mod models;

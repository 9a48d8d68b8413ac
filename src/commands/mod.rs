//! Command handler layer.
//!
//! ## Files
//! - `analyze.rs` — single-capture, per-device integrity analysis.
//! - `compare.rs` — sender/receiver cross-stream comparison.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate statistics to `services/*`.
//! - Keep behavior and output schema stable.

pub mod analyze;
pub mod compare;

pub use analyze::handle_analyze;
pub use compare::handle_compare;

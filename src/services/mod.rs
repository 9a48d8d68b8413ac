//! Service layer containing the sequence-integrity engine.
//!
//! ## Service map
//! - `extract.rs` — raw log line → (device, sequence) extraction.
//! - `aggregate.rs` — per-device stream collection + capture file loading.
//! - `integrity.rs` — loss/duplicate/gap statistics for one stream.
//! - `compare.rs` — sender vs receiver set metrics.
//! - `output.rs` — JSON/text output helpers and report rendering.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod aggregate;
pub mod compare;
pub mod extract;
pub mod integrity;
pub mod output;

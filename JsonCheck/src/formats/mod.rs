//! File format handlers
//!
//! Only relaxed JSON (JSON with comments and trailing commas) for now.

pub mod relaxed_json;

pub use relaxed_json::{parse_relaxed_json, read_relaxed_json};

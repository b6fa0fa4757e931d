//! Rendering module for serializing simplified documents.

mod json;

pub use json::{to_json, JsonFormat};

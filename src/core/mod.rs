//! Decode checking functionality

pub mod decoder;

pub use decoder::{audit_bytes, audit_file, DecodeFailure};

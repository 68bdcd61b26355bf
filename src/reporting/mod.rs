//! Diagnostic output functionality

pub mod diagnostics;

pub use diagnostics::{diagnostic_line, write_diagnostic, write_summary, DIAGNOSTIC_LABEL};

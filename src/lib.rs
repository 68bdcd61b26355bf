//! UTF-8 Encoding Auditor Library
//!
//! Walks a directory tree and reports files whose contents are not valid UTF-8.

pub mod core;
pub mod reporting;
pub mod scanner;

pub use crate::core::decoder;
pub use crate::reporting::diagnostics;
pub use crate::scanner::file_scanner;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::core::decoder::{audit_bytes, audit_file, DecodeFailure};
    pub use crate::reporting::diagnostics::{
        diagnostic_line, write_diagnostic, write_summary, DIAGNOSTIC_LABEL,
    };
    pub use crate::scanner::file_scanner::{collect_matching_files, AuditRecord};
}

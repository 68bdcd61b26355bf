//! Diagnostic line and summary output

use anyhow::Result;
use std::io::Write;

use crate::scanner::file_scanner::AuditRecord;

/// Fixed label prefixing every diagnostic line
pub const DIAGNOSTIC_LABEL: &str = "decode error";

/// Render the diagnostic line for a record, if its file failed to decode
///
/// Clean records produce no line at all.
pub fn diagnostic_line(record: &AuditRecord) -> Option<String> {
    record.failure.as_ref().map(|failure| {
        format!(
            "{} {} {}",
            DIAGNOSTIC_LABEL,
            record.path.display(),
            failure
        )
    })
}

/// Write the diagnostic line for a single record
///
/// The scan loop points this at stdout so diagnostics stream out as
/// soon as a malformed file is found.
pub fn write_diagnostic<W: Write>(out: &mut W, record: &AuditRecord) -> Result<()> {
    if let Some(line) = diagnostic_line(record) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Write the completion summary
///
/// # Arguments
/// * `out` - Destination writer (the binary points this at stderr)
/// * `records` - Audit results to summarize
/// * `interrupted` - Whether the scan stopped before visiting every file
pub fn write_summary<W: Write>(
    out: &mut W,
    records: &[AuditRecord],
    interrupted: bool,
) -> Result<()> {
    let clean_count = records.iter().filter(|r| r.is_clean()).count();
    let malformed_count = records.len() - clean_count;

    writeln!(out, "==================================================")?;
    if interrupted {
        writeln!(out, "AUDIT INTERRUPTED")?;
    } else {
        writeln!(out, "AUDIT COMPLETE")?;
    }
    writeln!(out, "==================================================")?;
    writeln!(out, "Files checked: {}", records.len())?;
    writeln!(out, "Clean files: {}", clean_count)?;
    writeln!(out, "Malformed files: {}", malformed_count)?;

    Ok(())
}

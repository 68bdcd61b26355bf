use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use utf8_auditor_rs::prelude::*;

#[derive(Parser)]
#[command(name = "utf8_auditor_rs")]
#[command(about = "UTF-8 encoding auditor written in Rust", long_about = None)]
struct Cli {
    /// Target directory to scan for candidate files
    #[arg(default_value = ".")]
    directory: PathBuf,

    /// File extension to audit, without the leading dot
    #[arg(short, long, default_value = "vue")]
    extension: String,

    /// Only scan the top-level directory, not subdirectories
    #[arg(long)]
    no_recursive: bool,

    /// Run in batch mode (no progress bar, no status output)
    #[arg(long)]
    batch: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up graceful shutdown handler
    let shutdown_requested = Arc::new(AtomicBool::new(false));
    let shutdown_flag = shutdown_requested.clone();

    ctrlc::set_handler(move || {
        eprintln!("\n⚠️  Shutdown requested. Finishing current file...");
        shutdown_flag.store(true, Ordering::SeqCst);
    })
    .context("Error setting Ctrl-C handler")?;

    if !cli.batch {
        eprintln!("UTF-8 Auditor (Rust Edition)");
        eprintln!();
    }

    // Collect candidate files
    let files = collect_matching_files(&cli.directory, &cli.extension, !cli.no_recursive)?;
    let total_files = files.len();

    if total_files == 0 {
        if !cli.batch {
            eprintln!("No .{} files found in the specified directory.", cli.extension);
        }
        return Ok(());
    }

    if !cli.batch {
        eprintln!("Found {} file(s) to audit\n", total_files);
    }

    // Set up progress bar (skip in batch mode)
    let progress = if cli.batch {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(total_files as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        pb
    };

    // Audit files one at a time, streaming diagnostics to stdout as
    // malformed files turn up. Read errors propagate and end the scan.
    let mut records: Vec<AuditRecord> = Vec::with_capacity(total_files);
    let stdout = io::stdout();

    for path in files {
        // Check if shutdown was requested
        if shutdown_requested.load(Ordering::SeqCst) {
            break;
        }

        let failure = audit_file(&path)?;
        let record = AuditRecord { path, failure };

        if !record.is_clean() {
            let mut out = stdout.lock();
            progress.suspend(|| write_diagnostic(&mut out, &record))?;
            out.flush()?;
        }

        records.push(record);
        progress.inc(1);
    }

    let was_interrupted = shutdown_requested.load(Ordering::SeqCst);

    if !cli.batch {
        if was_interrupted {
            progress.finish_and_clear();
            eprintln!("\n⏹️  Graceful shutdown complete");
            eprintln!(
                "📊 Audited {}/{} files ({:.1}%)",
                records.len(),
                total_files,
                (records.len() as f64 / total_files as f64) * 100.0
            );
        } else {
            progress.finish_with_message("Audit complete!");
        }
        eprintln!();

        write_summary(&mut io::stderr().lock(), &records, was_interrupted)?;
    }

    Ok(())
}

//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Generation
//!
//! One line per asset as it finishes, then a summary:
//!
//! ```text
//! Created: public/assets/favicons/favicon-16x16.webp (16x16)
//! Error creating public/assets/favicons/favicon-32x32.webp: IO error: ...
//! Created maskable icon: public/images/icons/maskable-icon-192x192.webp
//! Created wide screenshot: public/images/screenshots/wide-dashboard.webp
//! All PWA assets generated successfully!
//! ```
//!
//! A procedure whose directories cannot be created is reported on stderr and
//! the next procedure still runs:
//!
//! ```text
//! Skipped favicons: Failed to create directory public/assets/favicons: ...
//! ```
//!
//! ## Plan
//!
//! ```text
//! favicons
//!     public/assets/favicons/favicon-16x16.webp  16x16  resize
//! PWA assets
//!     public/images/icons/maskable-icon-192x192.webp  192x192  maskable (70%)
//! ```
//!
//! # Architecture
//!
//! Each `format_*` function returns lines for testability and the matching
//! `print_*` wrapper writes them to stdout. Format functions are pure:
//! no I/O, no side effects.

use crate::generate::{
    AssetJob, AssetKind, AssetRecord, AssetStatus, GenerateError, GenerationReport, Procedure,
};

/// Single progress line for a finished asset.
pub fn format_record(record: &AssetRecord) -> String {
    let path = record.job.output.display();
    match (&record.status, record.job.kind) {
        (AssetStatus::Failed(msg), _) => format!("Error creating {path}: {msg}"),
        (AssetStatus::Created, AssetKind::Resize) => {
            format!("Created: {path} ({})", record.job.size)
        }
        (AssetStatus::Created, AssetKind::Maskable(_)) => {
            format!("Created maskable icon: {path}")
        }
        (AssetStatus::Created, AssetKind::Mockup) => format!("Created wide screenshot: {path}"),
    }
}

pub fn print_record(record: &AssetRecord) {
    println!("{}", format_record(record));
}

/// Closing line(s) for a procedure.
pub fn format_summary(report: &GenerationReport) -> Vec<String> {
    let failed = report.failed();
    if failed == 0 {
        return vec![format!("All {} generated successfully!", report.procedure)];
    }
    vec![format!(
        "Generated {} of {} {} ({} failed)",
        report.created(),
        report.records.len(),
        report.procedure,
        failed
    )]
}

pub fn print_summary(report: &GenerationReport) {
    for line in format_summary(report) {
        println!("{}", line);
    }
}

pub fn format_aborted(procedure: Procedure, error: &GenerateError) -> String {
    format!("Skipped {procedure}: {error}")
}

/// Summary for a finished procedure, or the reason it was skipped.
pub fn print_outcome(procedure: Procedure, outcome: &Result<GenerationReport, GenerateError>) {
    match outcome {
        Ok(report) => print_summary(report),
        Err(e) => eprintln!("{}", format_aborted(procedure, e)),
    }
}

fn kind_label(kind: AssetKind) -> String {
    match kind {
        AssetKind::Resize => "resize".to_string(),
        AssetKind::Maskable(zone) => format!("maskable ({:.0}%)", zone.value() * 100.0),
        AssetKind::Mockup => "mockup".to_string(),
    }
}

/// Planned jobs of one procedure, without touching the filesystem.
pub fn format_plan(procedure: Procedure, jobs: &[AssetJob]) -> Vec<String> {
    let mut lines = vec![procedure.to_string()];
    for job in jobs {
        lines.push(format!(
            "    {}  {}  {}",
            job.output.display(),
            job.size,
            kind_label(job.kind)
        ));
    }
    lines
}

pub fn print_plan(procedure: Procedure, jobs: &[AssetJob]) {
    for line in format_plan(procedure, jobs) {
        println!("{}", line);
    }
}

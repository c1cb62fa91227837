//! Plain-text report generator

use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;

/// Aligned code / status / reason table followed by a summary line
pub struct TextReporter;

impl TextReporter {
    /// Create a new text reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TextReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let rows: Vec<_> = ctx.rows().collect();
        let code_width = rows
            .iter()
            .map(|(course, _)| course.code.len())
            .chain(std::iter::once("Code".len()))
            .max()
            .unwrap_or_default();
        let status_width = rows
            .iter()
            .map(|(_, result)| result.status.label().len())
            .chain(std::iter::once("Status".len()))
            .max()
            .unwrap_or_default();

        let mut out = String::new();
        writeln!(
            out,
            "{} ({}) - {}, {:.1} credits",
            ctx.student.name,
            ctx.student.student_id,
            ctx.standing(),
            ctx.student.total_credits()
        )?;
        writeln!(out)?;
        writeln!(out, "{:<code_width$}  {:<status_width$}  Reason", "Code", "Status")?;
        writeln!(out, "{}", "-".repeat(code_width + status_width + 10))?;

        for (course, result) in &rows {
            writeln!(
                out,
                "{:<code_width$}  {:<status_width$}  {}",
                course.code,
                result.status.label(),
                result.reason
            )?;
        }

        let summary = ctx.summary();
        writeln!(out)?;
        writeln!(
            out,
            "{} eligible, {} completed, {} registered, {} advised, {} not eligible",
            summary.eligible,
            summary.completed,
            summary.registered,
            summary.advised,
            summary.not_eligible
        )?;
        Ok(out)
    }
}

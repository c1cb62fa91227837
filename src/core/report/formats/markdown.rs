//! Markdown report generator
//!
//! Fills the embedded eligibility template. Output renders well in GitHub,
//! GitLab and VS Code.

use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/eligibility.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let values = [
            ("student_name", ctx.student.name.clone()),
            ("student_id", ctx.student.student_id.clone()),
            ("major", ctx.catalog.major.clone()),
            ("standing", ctx.standing().as_str().to_string()),
            ("total_credits", format!("{:.1}", ctx.student.total_credits())),
            ("summary", Self::summary_list(ctx)),
            ("available_courses", Self::available_list(ctx)),
            ("eligibility_table", Self::eligibility_table(ctx)),
        ];
        fill_template(MARKDOWN_TEMPLATE, &values)
    }

    fn summary_list(ctx: &ReportContext) -> String {
        let summary = ctx.summary();
        let mut list = String::new();
        let _ = writeln!(list, "- Eligible: {}", summary.eligible);
        if summary.bypassed > 0 {
            let _ = writeln!(list, "  - through bypass: {}", summary.bypassed);
        }
        let _ = writeln!(list, "- Completed: {}", summary.completed);
        let _ = writeln!(list, "- Registered: {}", summary.registered);
        let _ = writeln!(list, "- Advised: {}", summary.advised);
        let _ = writeln!(list, "- Not Eligible: {}", summary.not_eligible);
        list
    }

    fn available_list(ctx: &ReportContext) -> String {
        let available = ctx.available();
        if available.is_empty() {
            return "_No courses available._\n".to_string();
        }

        let mut list = String::new();
        for course in available {
            let _ = writeln!(
                list,
                "- **{}** {} ({:.1} cr)",
                course.code, course.name, course.credits
            );
        }
        list
    }

    fn eligibility_table(ctx: &ReportContext) -> String {
        let mut table = String::new();
        table.push_str("| Course | Name | Credits | Status | Reason |\n");
        table.push_str("|---|---|---|---|---|\n");

        for (course, result) in ctx.rows() {
            let _ = writeln!(
                table,
                "| {} | {} | {:.1} | {} | {} |",
                course.code,
                escape_cell(&course.name),
                course.credits,
                result.status,
                escape_cell(&result.reason)
            );
        }
        table
    }
}

/// Replace `{{name}}` placeholders in one left-to-right pass
///
/// Substituted text is never rescanned, so values containing `{{...}}` come
/// out verbatim. Unknown placeholders are kept as written.
fn fill_template(template: &str, values: &[(&str, String)]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        output.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];
        let Some(end) = after_open.find("}}") else {
            rest = &rest[start..];
            break;
        };

        let name = &after_open[..end];
        match values.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => output.push_str(value),
            None => output.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after_open[end + 2..];
    }

    output.push_str(rest);
    output
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

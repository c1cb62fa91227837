//! Eligibility report generation
//!
//! Renders a sweep's verdicts for one student as a plain-text table,
//! a Markdown document built from an embedded template, or JSON.

pub mod formats;

use crate::core::eligibility::{
    available_courses, standing_of, EligibilityResult, EligibilitySummary,
};
use crate::core::models::{Catalog, Course, Standing, Student};
use std::error::Error;
use std::path::Path;

pub use formats::{JsonReporter, MarkdownReporter, ReportFormat, TextReporter};

/// Data context for report generation
///
/// Aggregates everything a report renders: the student, the catalog that was
/// swept and one result per catalog course in catalog order.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Student the sweep was run for
    pub student: &'a Student,
    /// Catalog that was swept
    pub catalog: &'a Catalog,
    /// One result per catalog course, in catalog order
    pub results: &'a [EligibilityResult],
    /// Only list eligible courses
    pub available_only: bool,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(
        student: &'a Student,
        catalog: &'a Catalog,
        results: &'a [EligibilityResult],
    ) -> Self {
        Self {
            student,
            catalog,
            results,
            available_only: false,
        }
    }

    /// Restrict listings to eligible courses
    #[must_use]
    pub const fn with_available_only(mut self, available_only: bool) -> Self {
        self.available_only = available_only;
        self
    }

    /// Standing derived from the student's credits
    #[must_use]
    pub fn standing(&self) -> Standing {
        standing_of(self.student.total_credits())
    }

    /// Verdict counts
    #[must_use]
    pub fn summary(&self) -> EligibilitySummary {
        EligibilitySummary::from_results(self.results)
    }

    /// Eligible courses, in catalog order
    #[must_use]
    pub fn available(&self) -> Vec<&'a Course> {
        available_courses(self.catalog, self.results)
    }

    /// Courses paired with their results, honoring `available_only`
    pub fn rows(&self) -> impl Iterator<Item = (&'a Course, &'a EligibilityResult)> {
        let available_only = self.available_only;
        self.catalog
            .courses()
            .iter()
            .zip(self.results)
            .filter(move |(_, result)| !available_only || result.is_eligible())
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(output_path, content)?;
        Ok(())
    }

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

/// Render a report in the given format
///
/// # Errors
/// Returns an error if rendering fails
pub fn render_report(format: ReportFormat, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
    match format {
        ReportFormat::Text => TextReporter::new().render(ctx),
        ReportFormat::Markdown => MarkdownReporter::new().render(ctx),
        ReportFormat::Json => JsonReporter::new().render(ctx),
    }
}

/// Write a report in the given format to a file
///
/// # Errors
/// Returns an error if rendering or writing fails
pub fn write_report(
    format: ReportFormat,
    ctx: &ReportContext,
    output_path: &Path,
) -> Result<(), Box<dyn Error>> {
    match format {
        ReportFormat::Text => TextReporter::new().generate(ctx, output_path),
        ReportFormat::Markdown => MarkdownReporter::new().generate(ctx, output_path),
        ReportFormat::Json => JsonReporter::new().generate(ctx, output_path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::eligibility::{evaluate_all, AdvisingContext, EvaluationOptions};

    fn fixture() -> (Student, Catalog) {
        let mut student = Student::new("202301234".to_string(), "Lina Haddad".to_string());
        student.credits_completed = 33.0;
        student.set_status("PBHL 101".to_string(), "a".to_string());

        let mut epi = Course::new("PBHL 305".to_string(), "Epidemiology".to_string(), 3.0);
        epi.add_prerequisite("STAT 210");
        let catalog = Catalog::from_courses(
            "Public Health".to_string(),
            [
                Course::new("PBHL 101".to_string(), "Intro | Overview".to_string(), 3.0),
                Course::new("PBHL 201".to_string(), "Health Policy".to_string(), 3.0),
                epi,
            ],
        );
        (student, catalog)
    }

    #[test]
    fn test_text_report() {
        let (student, catalog) = fixture();
        let results = evaluate_all(&student, &catalog, &AdvisingContext::new(), EvaluationOptions::new());
        let ctx = ReportContext::new(&student, &catalog, &results);

        let text = render_report(ReportFormat::Text, &ctx).expect("renders");
        assert!(text.contains("Lina Haddad (202301234) - Junior, 33.0 credits"));
        assert!(text.contains("PBHL 305  Not Eligible  Missing prerequisites: STAT 210"));
        assert!(text.contains("1 eligible, 1 completed, 0 registered, 0 advised, 1 not eligible"));
    }

    #[test]
    fn test_markdown_report() {
        let (student, catalog) = fixture();
        let results = evaluate_all(&student, &catalog, &AdvisingContext::new(), EvaluationOptions::new());
        let ctx = ReportContext::new(&student, &catalog, &results);

        let markdown = render_report(ReportFormat::Markdown, &ctx).expect("renders");
        assert!(markdown.starts_with("# Course Eligibility: Lina Haddad"));
        assert!(markdown.contains("| Standing | Junior |"));
        assert!(markdown.contains("- **PBHL 201** Health Policy (3.0 cr)"));
        assert!(markdown.contains("| PBHL 101 | Intro \\| Overview | 3.0 | Completed |"));
        assert!(!markdown.contains("{{"));
    }

    #[test]
    fn test_markdown_report_keeps_braces_in_student_data() {
        let (mut student, catalog) = fixture();
        student.name = "{{standing}}".to_string();
        let results = evaluate_all(&student, &catalog, &AdvisingContext::new(), EvaluationOptions::new());
        let ctx = ReportContext::new(&student, &catalog, &results);

        let markdown = render_report(ReportFormat::Markdown, &ctx).expect("renders");
        assert!(markdown.starts_with("# Course Eligibility: {{standing}}\n"));
        assert!(markdown.contains("| Standing | Junior |"));
    }

    #[test]
    fn test_json_report_available_only() {
        let (student, catalog) = fixture();
        let results = evaluate_all(&student, &catalog, &AdvisingContext::new(), EvaluationOptions::new());
        let ctx = ReportContext::new(&student, &catalog, &results).with_available_only(true);

        let json = render_report(ReportFormat::Json, &ctx).expect("renders");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["studentId"], "202301234");
        assert_eq!(value["standing"], "Junior");
        assert_eq!(value["courses"].as_array().map(Vec::len), Some(1));
        assert_eq!(value["courses"][0]["code"], "PBHL 201");
        assert_eq!(value["courses"][0]["status"], "Eligible");
        assert_eq!(value["summary"]["notEligible"], 1);
    }

    #[test]
    fn test_generate_creates_parent_dirs() {
        let (student, catalog) = fixture();
        let results = evaluate_all(&student, &catalog, &AdvisingContext::new(), EvaluationOptions::new());
        let ctx = ReportContext::new(&student, &catalog, &results);

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("reports").join("lina.md");
        write_report(ReportFormat::Markdown, &ctx, &path).expect("writes");
        assert!(path.exists());
    }
}

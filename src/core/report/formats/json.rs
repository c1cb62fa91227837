//! JSON report generator

use crate::core::eligibility::{EligibilityResult, EligibilitySummary};
use crate::core::models::Standing;
use crate::core::report::{ReportContext, ReportGenerator};
use serde::Serialize;
use std::error::Error;

/// Pretty-printed JSON with one entry per listed course
pub struct JsonReporter;

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    student_id: &'a str,
    student_name: &'a str,
    major: &'a str,
    standing: Standing,
    total_credits: f32,
    summary: EligibilitySummary,
    courses: Vec<CourseEntry<'a>>,
}

#[derive(Serialize)]
struct CourseEntry<'a> {
    code: &'a str,
    name: &'a str,
    #[serde(flatten)]
    result: &'a EligibilityResult,
}

impl ReportGenerator for JsonReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let report = JsonReport {
            student_id: &ctx.student.student_id,
            student_name: &ctx.student.name,
            major: &ctx.catalog.major,
            standing: ctx.standing(),
            total_credits: ctx.student.total_credits(),
            summary: ctx.summary(),
            courses: ctx
                .rows()
                .map(|(course, result)| CourseEntry {
                    code: &course.code,
                    name: &course.name,
                    result,
                })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}

//! Check command handler

use super::Inputs;
use advising::config::Config;
use advising::core::eligibility::{EligibilityResult, EligibilityStatus, Evaluator};
use advising::{error, info};
use std::error::Error;
use std::fmt::Write;
use std::path::Path;

/// Evaluate one course and print the verdict
pub fn run(
    catalog_path: &Path,
    session_path: &Path,
    course_code: &str,
    json: bool,
    simulate: &[String],
    config: &Config,
) {
    if let Err(e) = check(catalog_path, session_path, course_code, json, simulate, config) {
        error!("Check failed: {e}");
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
}

fn check(
    catalog_path: &Path,
    session_path: &Path,
    course_code: &str,
    json: bool,
    simulate: &[String],
    config: &Config,
) -> Result<(), Box<dyn Error>> {
    let inputs = Inputs::load(catalog_path, session_path)?;
    let context = inputs.context(simulate);
    let evaluator = Evaluator::new(&inputs.catalog, config.evaluation_options());

    let code = course_code.trim();
    let result = evaluator.evaluate(&inputs.session.student, code, &context);
    info!("{code}: {}", result.status);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        let name = inputs
            .catalog
            .get_course(code)
            .map(|course| course.name.as_str());
        print!("{}", format_result(code, name, &result));
    }
    Ok(())
}

/// Human-readable verdict block
fn format_result(code: &str, name: Option<&str>, result: &EligibilityResult) -> String {
    let mark = if result.status == EligibilityStatus::NotEligible {
        "✗"
    } else {
        "✓"
    };
    let title = name.map_or_else(|| code.to_string(), |n| format!("{code} ({n})"));

    let mut out = format!("{mark} {title}: {}\n  {}\n", result.status, result.reason);
    if let Some(bypass) = &result.bypass_info {
        if !bypass.advisor.is_empty() {
            let _ = writeln!(out, "  Advisor: {}", bypass.advisor);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use advising::core::eligibility::{evaluate, AdvisingContext, EvaluationOptions};
    use advising::core::models::{Bypass, Catalog, Course, Student};

    #[test]
    fn test_format_not_eligible() {
        let mut course = Course::new("PBHL 305".to_string(), "Epidemiology".to_string(), 3.0);
        course.add_prerequisite("STAT 210");
        let catalog = Catalog::from_courses("PH".to_string(), [course]);
        let student = Student::new("1".to_string(), "A".to_string());

        let result = evaluate(&student, "PBHL 305", &catalog, &AdvisingContext::new(), EvaluationOptions::new());
        assert_eq!(
            format_result("PBHL 305", Some("Epidemiology"), &result),
            "✗ PBHL 305 (Epidemiology): Not Eligible\n  Missing prerequisites: STAT 210\n"
        );
    }

    #[test]
    fn test_format_bypass() {
        let catalog = Catalog::from_courses(
            "PH".to_string(),
            [Course::new("PBHL 410".to_string(), "Capstone".to_string(), 3.0)],
        );
        let student = Student::new("1".to_string(), "A".to_string());
        let context = AdvisingContext::new()
            .with_bypass("PBHL 410", Bypass::new("Equivalent course".to_string(), "Dr. Saab".to_string()));

        let result = evaluate(&student, "PBHL 410", &catalog, &context, EvaluationOptions::new());
        let text = format_result("PBHL 410", None, &result);
        assert!(text.starts_with("✓ PBHL 410: Eligible"));
        assert!(text.contains("Advisor: Dr. Saab"));
    }
}

//! Per-course status classification from raw registrar codes

use crate::core::models::Student;
use std::fmt;
use std::str::FromStr;

/// Where a student stands with respect to one course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CourseStatus {
    /// Passed (letter grade, pass or satisfactory)
    Completed,
    /// Currently registered
    Registered,
    /// Failed
    Failed,
    /// Attempted but not completed
    NotCompleted,
    /// Not attempted yet, or an unrecognized code
    Remaining,
}

impl CourseStatus {
    /// Completed or registered: the course counts toward satisfying requirements
    #[must_use]
    pub const fn is_taken(self) -> bool {
        matches!(self, Self::Completed | Self::Registered)
    }
}

/// Which set of raw status codes the student records use
///
/// Records come in two shapes: letter grades (`a`..`d`, `p`, `s`) or a
/// reduced set where `c` alone means completed. The caller picks one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatusVocabulary {
    /// completed = {a, b, c, d, p, s}
    #[default]
    Grades,
    /// completed = {c}
    Simple,
}

impl StatusVocabulary {
    fn completed_codes(self) -> &'static [&'static str] {
        match self {
            Self::Grades => &["a", "b", "c", "d", "p", "s"],
            Self::Simple => &["c"],
        }
    }
}

impl FromStr for StatusVocabulary {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "grades" | "grade" | "letter" => Ok(Self::Grades),
            "simple" => Ok(Self::Simple),
            _ => Err(format!(
                "Unknown status vocabulary: '{s}' (expected 'grades' or 'simple')"
            )),
        }
    }
}

impl fmt::Display for StatusVocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grades => write!(f, "grades"),
            Self::Simple => write!(f, "simple"),
        }
    }
}

const REGISTERED_CODES: [&str; 2] = ["r", "cr"];
const FAILED_CODE: &str = "f";
const NOT_COMPLETED_CODE: &str = "nc";

/// Classify a raw status code
///
/// Missing, blank and "nan" codes (spreadsheet artifacts) mean not attempted.
#[must_use]
pub fn classify_code(raw: Option<&str>, vocabulary: StatusVocabulary) -> CourseStatus {
    let code = match raw.map(str::trim) {
        None | Some("") => return CourseStatus::Remaining,
        Some(code) => code.to_lowercase(),
    };

    if code == "nan" {
        CourseStatus::Remaining
    } else if vocabulary.completed_codes().contains(&code.as_str()) {
        CourseStatus::Completed
    } else if REGISTERED_CODES.contains(&code.as_str()) {
        CourseStatus::Registered
    } else if code == FAILED_CODE {
        CourseStatus::Failed
    } else if code == NOT_COMPLETED_CODE {
        CourseStatus::NotCompleted
    } else {
        CourseStatus::Remaining
    }
}

/// Classify a student's status for one course
#[must_use]
pub fn classify(student: &Student, course_code: &str, vocabulary: StatusVocabulary) -> CourseStatus {
    classify_code(student.raw_status(course_code), vocabulary)
}

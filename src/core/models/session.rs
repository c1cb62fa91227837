//! Advising session model: advised courses and advisor bypasses

use super::Student;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Advisor override letting a student take a course despite unmet requirements
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bypass {
    /// Justification recorded by the advisor
    #[serde(default)]
    pub note: String,
    /// Name of the granting advisor
    #[serde(default)]
    pub advisor: String,
}

impl Bypass {
    /// Create a bypass
    #[must_use]
    pub const fn new(note: String, advisor: String) -> Self {
        Self { note, advisor }
    }

    /// Reason text shown for a bypassed course
    #[must_use]
    pub fn describe(&self) -> String {
        if self.advisor.trim().is_empty() {
            format!("Bypass granted: {}", self.note)
        } else {
            format!("Bypass granted by {}: {}", self.advisor, self.note)
        }
    }
}

/// Courses approved by the advisor, by category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisedCourses {
    /// Required courses for next term
    #[serde(default)]
    pub required: Vec<String>,
    /// Optional courses the student may add
    #[serde(default)]
    pub optional: Vec<String>,
    /// Courses to repeat (failed or not completed)
    #[serde(default)]
    pub repeat: Vec<String>,
}

impl AdvisedCourses {
    /// All advised codes across categories
    #[must_use]
    pub fn merged(&self) -> BTreeSet<String> {
        self.required
            .iter()
            .chain(&self.optional)
            .chain(&self.repeat)
            .cloned()
            .collect()
    }

    /// True when nothing has been advised
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.required.is_empty() && self.optional.is_empty() && self.repeat.is_empty()
    }
}

/// One student's advising record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdvisingSession {
    /// Student snapshot
    pub student: Student,
    /// Advised courses
    #[serde(default)]
    pub advised: AdvisedCourses,
    /// Bypasses keyed by course code
    #[serde(default)]
    pub bypasses: BTreeMap<String, Bypass>,
    /// What-if codes treated as satisfied when checking requirements
    #[serde(default)]
    pub simulate: Vec<String>,
    /// Free-text advisor note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl AdvisingSession {
    /// Create an empty session for a student
    #[must_use]
    pub fn new(student: Student) -> Self {
        Self {
            student,
            ..Self::default()
        }
    }

    /// Advised courses merged across required, optional and repeat
    #[must_use]
    pub fn advised_courses(&self) -> BTreeSet<String> {
        self.advised.merged()
    }

    /// Record a bypass for a course, replacing any earlier one
    pub fn add_bypass(&mut self, course_code: String, bypass: Bypass) {
        self.bypasses.insert(course_code, bypass);
    }
}

//! Student model

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Snapshot of a student's record at advising time
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Storage id assigned by the persistence layer, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// University student id (e.g., "202301234")
    pub student_id: String,

    /// Full name
    pub name: String,

    /// Contact email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Standing as recorded by the registrar, informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standing: Option<String>,

    /// Credits earned
    #[serde(default)]
    pub credits_completed: f32,

    /// Credits currently registered
    #[serde(default)]
    pub credits_registered: f32,

    /// Credits left in the program
    #[serde(default)]
    pub credits_remaining: f32,

    /// Raw status code per course code (e.g., "PBHL 101" -> "a").
    /// Courses never attempted have no entry.
    #[serde(default)]
    pub course_statuses: BTreeMap<String, String>,
}

impl Student {
    /// Create a student with no credits and no course history
    #[must_use]
    pub fn new(student_id: String, name: String) -> Self {
        Self {
            student_id,
            name,
            ..Self::default()
        }
    }

    /// Credits counted toward standing: completed plus registered
    #[must_use]
    pub fn total_credits(&self) -> f32 {
        self.credits_completed + self.credits_registered
    }

    /// Raw status code recorded for a course, if any
    #[must_use]
    pub fn raw_status(&self, course_code: &str) -> Option<&str> {
        self.course_statuses.get(course_code).map(String::as_str)
    }

    /// Record a raw status code for a course
    pub fn set_status(&mut self, course_code: String, status: String) {
        self.course_statuses.insert(course_code, status);
    }
}

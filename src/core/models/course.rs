//! Course model

use super::requirement::{standing_text, Requirement, Standing};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a course counts toward the major
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseType {
    /// Required for the major
    #[default]
    Required,
    /// Writing/communication intensive
    Intensive,
    /// Free or major elective
    Elective,
}

impl FromStr for CourseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "required" => Ok(Self::Required),
            "intensive" => Ok(Self::Intensive),
            "elective" => Ok(Self::Elective),
            _ => Err(format!("Unknown course type: '{s}'")),
        }
    }
}

impl fmt::Display for CourseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => write!(f, "required"),
            Self::Intensive => write!(f, "intensive"),
            Self::Elective => write!(f, "elective"),
        }
    }
}

const fn default_offered() -> bool {
    true
}

/// Represents a course in a major's catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Storage id assigned by the persistence layer, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Course code, unique within a major (e.g., "PBHL 305")
    pub code: String,

    /// Course name (e.g., "Epidemiology")
    pub name: String,

    /// Credit count (can be fractional)
    #[serde(default)]
    pub credits: f32,

    /// Required, intensive or elective
    #[serde(rename = "type", default)]
    pub course_type: CourseType,

    /// Suggested semester number in the study plan
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semester: Option<u8>,

    /// Whether the course is offered this semester
    #[serde(default = "default_offered")]
    pub offered: bool,

    /// Prerequisites: course codes or standing text
    #[serde(default)]
    pub prerequisites: Vec<Requirement>,

    /// Corequisites by course code
    #[serde(default)]
    pub corequisites: Vec<String>,

    /// Courses that must be taken in the same term, by course code
    #[serde(default)]
    pub concurrent: Vec<String>,

    /// Minimum standing, resolved from text like "Junior standing"
    #[serde(
        default,
        with = "standing_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub standing_required: Option<Standing>,

    /// Catalog description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Course {
    /// Create a new, offered, required course with no requirements
    ///
    /// # Arguments
    /// * `code` - Course code
    /// * `name` - Course name
    /// * `credits` - Credit count
    #[must_use]
    pub const fn new(code: String, name: String, credits: f32) -> Self {
        Self {
            id: None,
            code,
            name,
            credits,
            course_type: CourseType::Required,
            semester: None,
            offered: true,
            prerequisites: Vec::new(),
            corequisites: Vec::new(),
            concurrent: Vec::new(),
            standing_required: None,
            description: None,
        }
    }

    /// Add a prerequisite (course code or standing text)
    pub fn add_prerequisite(&mut self, requirement: impl Into<Requirement>) {
        let requirement = requirement.into();
        if !self.prerequisites.contains(&requirement) {
            self.prerequisites.push(requirement);
        }
    }

    /// Add a corequisite by course code
    pub fn add_corequisite(&mut self, code: String) {
        if !self.corequisites.contains(&code) {
            self.corequisites.push(code);
        }
    }

    /// Add a concurrent requirement by course code
    pub fn add_concurrent(&mut self, code: String) {
        if !self.concurrent.contains(&code) {
            self.concurrent.push(code);
        }
    }

    /// Set the minimum standing
    pub fn set_standing_required(&mut self, standing: Standing) {
        self.standing_required = Some(standing);
    }

    /// Whether `code` appears in this course's concurrent list
    #[must_use]
    pub fn lists_concurrent(&self, code: &str) -> bool {
        self.concurrent.iter().any(|c| c == code)
    }

    /// Course codes among the prerequisites (standing entries excluded)
    pub fn prerequisite_codes(&self) -> impl Iterator<Item = &str> {
        self.prerequisites.iter().filter_map(Requirement::course_code)
    }

    /// True when the course has no requirements of any kind
    #[must_use]
    pub fn has_no_requirements(&self) -> bool {
        self.prerequisites.is_empty()
            && self.corequisites.is_empty()
            && self.concurrent.is_empty()
            && self.standing_required.is_none()
    }
}

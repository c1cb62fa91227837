//! Catalog model: the ordered course list of one major

use super::Course;
use crate::warn;
use std::collections::HashMap;

/// Courses of a major, kept in catalog order with a code index
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Major or program name (e.g., "Public Health")
    pub major: String,

    /// Courses in catalog order
    courses: Vec<Course>,

    /// Position of each course code in `courses`
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Create an empty catalog
    ///
    /// # Arguments
    /// * `major` - Major name
    #[must_use]
    pub fn new(major: String) -> Self {
        Self {
            major,
            courses: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Build a catalog from courses in order
    ///
    /// The first course with a given code wins; each later duplicate is
    /// dropped with a warning. Use [`add_course`](Catalog::add_course)
    /// directly to detect duplicates programmatically.
    #[must_use]
    pub fn from_courses(major: String, courses: impl IntoIterator<Item = Course>) -> Self {
        let mut catalog = Self::new(major);
        for course in courses {
            let code = course.code.clone();
            if !catalog.add_course(course) {
                warn!(
                    "Duplicate course code '{code}' dropped from catalog '{}'",
                    catalog.major
                );
            }
        }
        catalog
    }

    /// Append a course
    ///
    /// # Returns
    /// `true` if the course was added, `false` if its code is already present
    pub fn add_course(&mut self, course: Course) -> bool {
        if self.index.contains_key(&course.code) {
            return false;
        }
        self.index.insert(course.code.clone(), self.courses.len());
        self.courses.push(course);
        true
    }

    /// Get a course by code
    #[must_use]
    pub fn get_course(&self, code: &str) -> Option<&Course> {
        self.index.get(code).map(|&idx| &self.courses[idx])
    }

    /// Whether a course code is in the catalog
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// All courses in catalog order
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Number of courses
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// True when the catalog has no courses
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Total credits across the catalog
    #[must_use]
    pub fn total_credits(&self) -> f32 {
        self.courses.iter().map(|c| c.credits).sum()
    }

    /// List requirement codes that do not resolve to a catalog course
    ///
    /// Codes from other departments (e.g. "MATH 201") show up here. This is
    /// informational: eligibility still treats them as unmet until the
    /// student completes them.
    ///
    /// # Errors
    /// Returns `Err` with one message per unresolved reference
    pub fn validate_requirements(&self) -> Result<(), Vec<String>> {
        let mut unresolved = Vec::new();

        for course in &self.courses {
            let references = course
                .prerequisite_codes()
                .map(|code| ("prerequisite", code))
                .chain(course.corequisites.iter().map(|c| ("corequisite", c.as_str())))
                .chain(course.concurrent.iter().map(|c| ("concurrent", c.as_str())));

            for (kind, code) in references {
                if !self.contains(code) {
                    unresolved.push(format!(
                        "Course '{}': {kind} '{code}' not found",
                        course.code
                    ));
                }
            }
        }

        if unresolved.is_empty() {
            Ok(())
        } else {
            Err(unresolved)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(code: &str) -> Course {
        Course::new(code.to_string(), format!("{code} name"), 3.0)
    }

    #[test]
    fn test_catalog_creation() {
        let catalog = Catalog::new("Public Health".to_string());
        assert_eq!(catalog.major, "Public Health");
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_add_duplicate_course() {
        let mut catalog = Catalog::new("PH".to_string());
        assert!(catalog.add_course(course("PBHL 101")));
        assert!(!catalog.add_course(course("PBHL 101")));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_from_courses_keeps_first_duplicate() {
        let mut second = course("PBHL 201");
        second.name = "Renamed Policy".to_string();
        let catalog = Catalog::from_courses(
            "PH".to_string(),
            [course("PBHL 101"), course("PBHL 201"), second, course("PBHL 305")],
        );

        assert_eq!(catalog.len(), 3);
        assert_eq!(
            catalog.get_course("PBHL 201").map(|c| c.name.as_str()),
            Some("PBHL 201 name")
        );
        let codes: Vec<&str> = catalog.courses().iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, ["PBHL 101", "PBHL 201", "PBHL 305"]);
    }

    #[test]
    fn test_catalog_preserves_order() {
        let catalog = Catalog::from_courses(
            "PH".to_string(),
            ["PBHL 305", "PBHL 101", "PBHL 201"].map(course),
        );

        let codes: Vec<&str> = catalog.courses().iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["PBHL 305", "PBHL 101", "PBHL 201"]);
        assert_eq!(catalog.get_course("PBHL 201").map(|c| c.name.as_str()), Some("PBHL 201 name"));
        assert!(catalog.get_course("PBHL 999").is_none());
        assert!((catalog.total_credits() - 9.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_validate_requirements() {
        let mut advanced = course("PBHL 305");
        advanced.add_prerequisite("PBHL 101");
        advanced.add_prerequisite("MATH 201");
        advanced.add_prerequisite("Junior standing");
        advanced.add_concurrent("PBHL 305L".to_string());

        let catalog = Catalog::from_courses("PH".to_string(), [course("PBHL 101"), advanced]);

        let errors = catalog.validate_requirements().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("prerequisite 'MATH 201'"));
        assert!(errors[1].contains("concurrent 'PBHL 305L'"));
    }

    #[test]
    fn test_validate_requirements_success() {
        let mut second = course("PBHL 201");
        second.add_prerequisite("PBHL 101");
        let catalog = Catalog::from_courses("PH".to_string(), [course("PBHL 101"), second]);
        assert!(catalog.validate_requirements().is_ok());
    }
}

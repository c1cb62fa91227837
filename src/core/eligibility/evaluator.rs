//! Eligibility evaluation for one course or a whole catalog
//!
//! Checks run in a fixed precedence and the first one that fires decides
//! the verdict:
//!
//! 1. course not in catalog → Not Eligible
//! 2. completed → Completed
//! 3. registered → Registered
//! 4. already advised → Advised
//! 5. bypass granted → Eligible
//! 6. not offered (unless ignored) → Not Eligible
//! 7. requirement sweep: standing, prerequisites, concurrent, corequisites

use super::resolver::{mutual_concurrent_pairs, standing_of, MutualPairs};
use super::status::{classify, CourseStatus, StatusVocabulary};
use crate::core::models::{AdvisingSession, Bypass, Catalog, Course, Student};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Reason given when the requested code is not in the catalog
pub const NOT_FOUND_REASON: &str = "Course not found in catalog.";
/// Reason given when the course is flagged as not offered
pub const NOT_OFFERED_REASON: &str = "Course is not offered this semester.";
/// Reason given when every requirement is satisfied
pub const ALL_MET_REASON: &str = "All requirements met";

const COMPLETED_REASON: &str = "Course already completed";
const REGISTERED_REASON: &str = "Currently registered for this course";
const ADVISED_REASON: &str = "Course already advised for this session";

/// Verdict for one course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EligibilityStatus {
    /// The student may take the course
    Eligible,
    /// Already passed
    Completed,
    /// Currently registered
    Registered,
    /// Requirements unmet, not offered, or unknown course
    #[serde(rename = "Not Eligible")]
    NotEligible,
    /// Already approved by the advisor this session
    Advised,
}

impl EligibilityStatus {
    /// Display label, matching the serialized form
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Eligible => "Eligible",
            Self::Completed => "Completed",
            Self::Registered => "Registered",
            Self::NotEligible => "Not Eligible",
            Self::Advised => "Advised",
        }
    }
}

impl fmt::Display for EligibilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Structured verdict for one (student, course) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResult {
    /// Verdict
    pub status: EligibilityStatus,
    /// Human-readable explanation
    pub reason: String,
    /// Prerequisite codes not satisfied
    #[serde(default)]
    pub missing_prerequisites: Vec<String>,
    /// Concurrent codes not satisfied
    #[serde(default)]
    pub missing_concurrent: Vec<String>,
    /// Corequisite codes not satisfied
    #[serde(default)]
    pub missing_corequisites: Vec<String>,
    /// The student's standing is below the course minimum
    #[serde(default)]
    pub standing_issue: bool,
    /// Eligible because of an advisor bypass
    #[serde(default)]
    pub has_bypass: bool,
    /// The bypass applied, when `has_bypass` is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bypass_info: Option<Bypass>,
}

impl EligibilityResult {
    fn new(status: EligibilityStatus, reason: impl Into<String>) -> Self {
        Self {
            status,
            reason: reason.into(),
            missing_prerequisites: Vec::new(),
            missing_concurrent: Vec::new(),
            missing_corequisites: Vec::new(),
            standing_issue: false,
            has_bypass: false,
            bypass_info: None,
        }
    }

    fn bypassed(bypass: &Bypass) -> Self {
        Self {
            has_bypass: true,
            bypass_info: Some(bypass.clone()),
            ..Self::new(EligibilityStatus::Eligible, bypass.describe())
        }
    }

    /// Whether the verdict is `Eligible`
    #[must_use]
    pub fn is_eligible(&self) -> bool {
        self.status == EligibilityStatus::Eligible
    }

    /// All missing requirement codes, prerequisites first
    pub fn missing(&self) -> impl Iterator<Item = &str> {
        self.missing_prerequisites
            .iter()
            .chain(&self.missing_concurrent)
            .chain(&self.missing_corequisites)
            .map(String::as_str)
    }
}

/// Session inputs held constant across a sweep
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdvisingContext {
    /// Codes already advised this session (all categories merged)
    pub advised_courses: BTreeSet<String>,
    /// Advisor bypasses keyed by course code
    pub bypasses: BTreeMap<String, Bypass>,
    /// What-if codes counted as satisfied for requirement checks only
    pub simulate_courses: BTreeSet<String>,
}

impl AdvisingContext {
    /// Empty context: nothing advised, no bypasses
    #[must_use]
    pub const fn new() -> Self {
        Self {
            advised_courses: BTreeSet::new(),
            bypasses: BTreeMap::new(),
            simulate_courses: BTreeSet::new(),
        }
    }

    /// Add advised course codes
    #[must_use]
    pub fn with_advised<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.advised_courses.extend(codes.into_iter().map(Into::into));
        self
    }

    /// Add a bypass for a course
    #[must_use]
    pub fn with_bypass(mut self, code: impl Into<String>, bypass: Bypass) -> Self {
        self.bypasses.insert(code.into(), bypass);
        self
    }

    /// Add what-if course codes
    #[must_use]
    pub fn with_simulated<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.simulate_courses.extend(codes.into_iter().map(Into::into));
        self
    }

    /// Whether a code was advised this session
    #[must_use]
    pub fn is_advised(&self, code: &str) -> bool {
        self.advised_courses.contains(code)
    }

    /// Bypass for a code, if granted
    #[must_use]
    pub fn bypass_for(&self, code: &str) -> Option<&Bypass> {
        self.bypasses.get(code)
    }

    /// Whether a code is part of the what-if projection
    #[must_use]
    pub fn is_simulated(&self, code: &str) -> bool {
        self.simulate_courses.contains(code)
    }
}

impl From<&AdvisingSession> for AdvisingContext {
    fn from(session: &AdvisingSession) -> Self {
        Self {
            advised_courses: session.advised_courses(),
            bypasses: session.bypasses.clone(),
            simulate_courses: session.simulate.iter().cloned().collect(),
        }
    }
}

/// Evaluation switches chosen by the caller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvaluationOptions {
    /// Skip the offered-this-semester check
    pub ignore_offered: bool,
    /// Status code vocabulary of the student records
    pub vocabulary: StatusVocabulary,
}

impl EvaluationOptions {
    /// Defaults: offered flag enforced, letter-grade vocabulary
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ignore_offered: false,
            vocabulary: StatusVocabulary::Grades,
        }
    }

    /// Set the status vocabulary
    #[must_use]
    pub const fn with_vocabulary(mut self, vocabulary: StatusVocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    /// Set whether the offered flag is ignored
    #[must_use]
    pub const fn with_ignore_offered(mut self, ignore_offered: bool) -> Self {
        self.ignore_offered = ignore_offered;
        self
    }
}

/// Evaluator bound to one catalog snapshot
///
/// Mutual concurrent pairs are computed once here and reused for every
/// course evaluated through this value.
#[derive(Debug, Clone)]
pub struct Evaluator<'a> {
    catalog: &'a Catalog,
    mutual_pairs: MutualPairs,
    options: EvaluationOptions,
}

impl<'a> Evaluator<'a> {
    /// Bind an evaluator to a catalog
    #[must_use]
    pub fn new(catalog: &'a Catalog, options: EvaluationOptions) -> Self {
        Self {
            catalog,
            mutual_pairs: mutual_concurrent_pairs(catalog),
            options,
        }
    }

    /// The catalog this evaluator reads
    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Mutual concurrent pairs of the catalog
    #[must_use]
    pub const fn mutual_pairs(&self) -> &MutualPairs {
        &self.mutual_pairs
    }

    /// Evaluate one course for a student
    #[must_use]
    pub fn evaluate(
        &self,
        student: &Student,
        course_code: &str,
        context: &AdvisingContext,
    ) -> EligibilityResult {
        let Some(course) = self.catalog.get_course(course_code) else {
            return EligibilityResult::new(EligibilityStatus::NotEligible, NOT_FOUND_REASON);
        };
        self.evaluate_course(student, course, context)
    }

    /// Evaluate every catalog course, in catalog order
    #[must_use]
    pub fn evaluate_all(
        &self,
        student: &Student,
        context: &AdvisingContext,
    ) -> Vec<EligibilityResult> {
        self.catalog
            .courses()
            .iter()
            .map(|course| self.evaluate_course(student, course, context))
            .collect()
    }

    fn evaluate_course(
        &self,
        student: &Student,
        course: &Course,
        context: &AdvisingContext,
    ) -> EligibilityResult {
        match classify(student, &course.code, self.options.vocabulary) {
            CourseStatus::Completed => {
                return EligibilityResult::new(EligibilityStatus::Completed, COMPLETED_REASON)
            }
            CourseStatus::Registered => {
                return EligibilityResult::new(EligibilityStatus::Registered, REGISTERED_REASON)
            }
            CourseStatus::Failed | CourseStatus::NotCompleted | CourseStatus::Remaining => {}
        }

        if context.is_advised(&course.code) {
            return EligibilityResult::new(EligibilityStatus::Advised, ADVISED_REASON);
        }

        if let Some(bypass) = context.bypass_for(&course.code) {
            return EligibilityResult::bypassed(bypass);
        }

        if !course.offered && !self.options.ignore_offered {
            return EligibilityResult::new(EligibilityStatus::NotEligible, NOT_OFFERED_REASON);
        }

        self.check_requirements(student, course, context)
    }

    /// Completed, registered, advised, simulated or bypassed
    fn is_satisfied(&self, student: &Student, code: &str, context: &AdvisingContext) -> bool {
        classify(student, code, self.options.vocabulary).is_taken()
            || context.is_advised(code)
            || context.is_simulated(code)
            || context.bypass_for(code).is_some()
    }

    fn check_requirements(
        &self,
        student: &Student,
        course: &Course,
        context: &AdvisingContext,
    ) -> EligibilityResult {
        let mut issues = Vec::new();
        let mut result = EligibilityResult::new(EligibilityStatus::Eligible, ALL_MET_REASON);

        if let Some(required) = course.standing_required {
            let current = standing_of(student.total_credits());
            if current < required {
                result.standing_issue = true;
                issues.push(format!(
                    "Requires {required} standing (current: {current})"
                ));
            }
        }

        result.missing_prerequisites = course
            .prerequisite_codes()
            .filter(|code| !self.is_satisfied(student, code, context))
            .map(str::to_string)
            .collect();
        if !result.missing_prerequisites.is_empty() {
            issues.push(format!(
                "Missing prerequisites: {}",
                result.missing_prerequisites.join(", ")
            ));
        }

        result.missing_concurrent = course
            .concurrent
            .iter()
            .filter(|code| !self.mutual_pairs.are_partners(&course.code, code))
            .filter(|code| !self.is_satisfied(student, code, context))
            .cloned()
            .collect();
        if !result.missing_concurrent.is_empty() {
            issues.push(format!(
                "Missing concurrent courses: {}",
                result.missing_concurrent.join(", ")
            ));
        }

        result.missing_corequisites = course
            .corequisites
            .iter()
            .filter(|code| !self.is_satisfied(student, code, context))
            .cloned()
            .collect();
        if !result.missing_corequisites.is_empty() {
            issues.push(format!(
                "Missing corequisites: {}",
                result.missing_corequisites.join(", ")
            ));
        }

        if !issues.is_empty() {
            result.status = EligibilityStatus::NotEligible;
            result.reason = issues.join("; ");
        }
        result
    }
}

/// Evaluate one course against a catalog
#[must_use]
pub fn evaluate(
    student: &Student,
    course_code: &str,
    catalog: &Catalog,
    context: &AdvisingContext,
    options: EvaluationOptions,
) -> EligibilityResult {
    Evaluator::new(catalog, options).evaluate(student, course_code, context)
}

/// Evaluate every course of a catalog, in catalog order
#[must_use]
pub fn evaluate_all(
    student: &Student,
    catalog: &Catalog,
    context: &AdvisingContext,
    options: EvaluationOptions,
) -> Vec<EligibilityResult> {
    Evaluator::new(catalog, options).evaluate_all(student, context)
}

/// Courses whose verdict is `Eligible`, in catalog order
///
/// `results` must come from a sweep over the same catalog.
#[must_use]
pub fn available_courses<'c>(catalog: &'c Catalog, results: &[EligibilityResult]) -> Vec<&'c Course> {
    catalog
        .courses()
        .iter()
        .zip(results)
        .filter(|(_, result)| result.is_eligible())
        .map(|(course, _)| course)
        .collect()
}

/// Verdict counts for a sweep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilitySummary {
    /// Eligible courses
    pub eligible: usize,
    /// Completed courses
    pub completed: usize,
    /// Registered courses
    pub registered: usize,
    /// Advised courses
    pub advised: usize,
    /// Not eligible courses
    pub not_eligible: usize,
    /// Eligible through a bypass (also counted in `eligible`)
    pub bypassed: usize,
}

impl EligibilitySummary {
    /// Count verdicts
    #[must_use]
    pub fn from_results(results: &[EligibilityResult]) -> Self {
        let mut summary = Self::default();
        for result in results {
            match result.status {
                EligibilityStatus::Eligible => summary.eligible += 1,
                EligibilityStatus::Completed => summary.completed += 1,
                EligibilityStatus::Registered => summary.registered += 1,
                EligibilityStatus::Advised => summary.advised += 1,
                EligibilityStatus::NotEligible => summary.not_eligible += 1,
            }
            if result.has_bypass {
                summary.bypassed += 1;
            }
        }
        summary
    }

    /// Total courses counted
    #[must_use]
    pub const fn total(&self) -> usize {
        self.eligible + self.completed + self.registered + self.advised + self.not_eligible
    }
}

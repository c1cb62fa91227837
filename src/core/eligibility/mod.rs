//! Course eligibility engine
//!
//! - [`status`]: raw registrar codes to per-course status
//! - [`resolver`]: derived facts (standing, mutual concurrent pairs)
//! - [`evaluator`]: verdicts for one course or the whole catalog

pub mod evaluator;
pub mod resolver;
pub mod status;

pub use evaluator::{
    available_courses, evaluate, evaluate_all, AdvisingContext, EligibilityResult,
    EligibilityStatus, EligibilitySummary, EvaluationOptions, Evaluator,
};
pub use resolver::{mutual_concurrent_pairs, standing_of, MutualPairs};
pub use status::{classify, classify_code, CourseStatus, StatusVocabulary};

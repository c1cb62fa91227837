//! Data models for `advising`

pub mod catalog;
pub mod course;
pub mod requirement;
pub mod session;
pub mod student;

pub use catalog::Catalog;
pub use course::{Course, CourseType};
pub use requirement::{Requirement, Standing};
pub use session::{AdvisedCourses, AdvisingSession, Bypass};
pub use student::Student;

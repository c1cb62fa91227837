//! Course eligibility engine for academic advising
//!
//! Loads a major's catalog and a student's advising session, then decides
//! for each course whether the student may take it and why not.

pub mod core;
pub mod logger;

pub use core::config;
pub use core::get_version;

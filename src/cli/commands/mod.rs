//! CLI command handlers for `advising`.
//!
//! Each command is implemented in its own submodule.

pub mod check;
pub mod config;
pub mod sweep;

use advising::core::eligibility::AdvisingContext;
use advising::core::import::{load_session, parse_catalog_csv};
use advising::core::models::{AdvisingSession, Catalog};
use advising::{info, verbose};
use std::error::Error;
use std::path::Path;

/// Catalog and session loaded for one command run
pub struct Inputs {
    /// Catalog of the student's major
    pub catalog: Catalog,
    /// Advising session of the student
    pub session: AdvisingSession,
}

impl Inputs {
    /// Load the catalog and session files
    ///
    /// # Errors
    /// Returns an error if either file cannot be read or parsed
    pub fn load(catalog_path: &Path, session_path: &Path) -> Result<Self, Box<dyn Error>> {
        let catalog = parse_catalog_csv(catalog_path)?;
        info!(
            "Loaded catalog '{}' with {} courses from {}",
            catalog.major,
            catalog.len(),
            catalog_path.display()
        );

        let session = load_session(session_path)?;
        info!(
            "Loaded session for {} ({}) from {}",
            session.student.name,
            session.student.student_id,
            session_path.display()
        );
        verbose!(
            "Advised: {}, bypasses: {}",
            session.advised_courses().len(),
            session.bypasses.len()
        );

        Ok(Self { catalog, session })
    }

    /// Evaluation context with extra what-if codes from the command line
    #[must_use]
    pub fn context(&self, extra_simulate: &[String]) -> AdvisingContext {
        AdvisingContext::from(&self.session).with_simulated(extra_simulate.iter().cloned())
    }
}

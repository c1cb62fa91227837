//! Advising session loader (TOML)
//!
//! ```toml
//! note = "Discussed summer options"
//! simulate = ["STAT 210"]
//!
//! [student]
//! studentId = "202301234"
//! name = "Lina Haddad"
//! creditsCompleted = 45
//! creditsRegistered = 15
//!
//! [student.courseStatuses]
//! "PBHL 101" = "a"
//!
//! [advised]
//! required = ["PBHL 305"]
//!
//! [bypasses."PBHL 410"]
//! note = "Completed equivalent course abroad"
//! advisor = "Dr. Saab"
//! ```

use crate::core::models::AdvisingSession;
use crate::debug;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Load an advising session from a TOML file
///
/// # Errors
/// Returns an error if the file cannot be read or is not a valid session
pub fn load_session<P: AsRef<Path>>(path: P) -> Result<AdvisingSession, Box<dyn Error>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read session '{}': {e}", path.display()))?;
    parse_session_toml(&content).map_err(|e| format!("Invalid session '{}': {e}", path.display()).into())
}

/// Parse an advising session from TOML text
///
/// # Errors
/// Returns an error if the text is not a valid session
pub fn parse_session_toml(content: &str) -> Result<AdvisingSession, Box<dyn Error>> {
    let session: AdvisingSession = toml::from_str(content)?;

    if session.student.student_id.trim().is_empty() {
        return Err("Session has no student id".into());
    }

    debug!(
        "Session for {} ({}): {} advised, {} bypasses, {} simulated",
        session.student.name,
        session.student.student_id,
        session.advised_courses().len(),
        session.bypasses.len(),
        session.simulate.len()
    );
    Ok(session)
}

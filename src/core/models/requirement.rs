//! Requirement and academic standing types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Class level derived from credit totals, ordered Freshman < Senior
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Standing {
    /// Fewer than 15 credits
    Freshman,
    /// 15 to 29 credits
    Sophomore,
    /// 30 to 59 credits
    Junior,
    /// 60 credits or more
    Senior,
}

impl Standing {
    /// All levels in ascending order
    pub const ALL: [Self; 4] = [Self::Freshman, Self::Sophomore, Self::Junior, Self::Senior];

    /// Resolve a free-text minimum-standing requirement (e.g. "Junior standing")
    ///
    /// Only Junior and Senior minimums are recognized, by case-insensitive
    /// substring. Anything else means no standing is enforced.
    #[must_use]
    pub fn from_requirement_text(text: &str) -> Option<Self> {
        let lowered = text.to_lowercase();
        if lowered.contains("junior") {
            Some(Self::Junior)
        } else if lowered.contains("senior") {
            Some(Self::Senior)
        } else {
            None
        }
    }

    /// Requirement text for this level (e.g. "Junior standing")
    #[must_use]
    pub const fn requirement_text(self) -> &'static str {
        match self {
            Self::Freshman => "Freshman standing",
            Self::Sophomore => "Sophomore standing",
            Self::Junior => "Junior standing",
            Self::Senior => "Senior standing",
        }
    }

    /// Human-readable name (e.g. "Junior")
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Freshman => "Freshman",
            Self::Sophomore => "Sophomore",
            Self::Junior => "Junior",
            Self::Senior => "Senior",
        }
    }
}

impl fmt::Display for Standing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Standing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown standing: '{s}'"))
    }
}

/// One entry of a course's prerequisite list
///
/// Standing entries come from requirement text that mentions "standing"
/// (e.g. "Senior standing") and are resolved once when the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Requirement {
    /// Another course, by catalog code (e.g. "MATH 201")
    Course(String),
    /// A class-level requirement
    Standing(Standing),
}

impl Requirement {
    /// Classify raw requirement text
    ///
    /// Standing text naming no known level resolves to Freshman, which every
    /// student meets.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        let lowered = trimmed.to_lowercase();
        if lowered.contains("standing") {
            let level = Standing::from_requirement_text(&lowered)
                .or_else(|| lowered.contains("sophomore").then_some(Standing::Sophomore))
                .unwrap_or(Standing::Freshman);
            Self::Standing(level)
        } else {
            Self::Course(trimmed.to_string())
        }
    }

    /// Course code if this is a course requirement
    #[must_use]
    pub fn course_code(&self) -> Option<&str> {
        match self {
            Self::Course(code) => Some(code),
            Self::Standing(_) => None,
        }
    }

    /// Catalog text for this requirement ("MATH 201", "Senior standing")
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Course(code) => code,
            Self::Standing(level) => level.requirement_text(),
        }
    }
}

impl From<String> for Requirement {
    fn from(text: String) -> Self {
        Self::parse(&text)
    }
}

impl From<&str> for Requirement {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl From<Requirement> for String {
    fn from(requirement: Requirement) -> Self {
        match requirement {
            Requirement::Course(code) => code,
            Requirement::Standing(level) => level.requirement_text().to_string(),
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serde adapter storing a minimum standing as requirement text ("Junior standing")
pub mod standing_text {
    use super::Standing;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize as "<Level> standing", or nothing
    ///
    /// # Errors
    /// Propagates serializer errors.
    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(
        standing: &Option<Standing>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match standing {
            Some(level) => serializer.serialize_some(level.requirement_text()),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize optional free text, keeping only recognized levels
    ///
    /// # Errors
    /// Propagates deserializer errors for non-string input.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Standing>, D::Error> {
        let text: Option<String> = Option::deserialize(deserializer)?;
        Ok(text.as_deref().and_then(Standing::from_requirement_text))
    }
}

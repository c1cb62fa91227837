//! Requirement-text and flag parsing shared by the importers

/// Cell values that mean "no requirements"
const EMPTY_MARKERS: [&str; 3] = ["nan", "none", "-"];

/// Split a requirement cell into individual entries
///
/// Entries are separated by `,`, `;` or the standalone word "and" (any
/// case). Entries are trimmed and empties dropped. A cell holding only
/// "nan", "none" or "-" has no requirements.
///
/// # Examples
/// ```
/// use advising::core::import::split_requirements;
///
/// assert_eq!(
///     split_requirements("PBHL 201, PBHL 202 and STAT 210"),
///     vec!["PBHL 201", "PBHL 202", "STAT 210"]
/// );
/// assert!(split_requirements("None").is_empty());
/// ```
#[must_use]
pub fn split_requirements(text: &str) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() || EMPTY_MARKERS.contains(&trimmed.to_lowercase().as_str()) {
        return Vec::new();
    }

    let mut entries = Vec::new();
    for part in trimmed.split([',', ';']) {
        let mut current: Vec<&str> = Vec::new();
        for word in part.split_whitespace() {
            if word.eq_ignore_ascii_case("and") {
                push_entry(&mut entries, &current);
                current.clear();
            } else {
                current.push(word);
            }
        }
        push_entry(&mut entries, &current);
    }
    entries
}

fn push_entry(entries: &mut Vec<String>, words: &[&str]) {
    if !words.is_empty() {
        entries.push(words.join(" "));
    }
}

/// Parse an offered flag
///
/// Blank cells mean offered. Unrecognized values return `None` so the
/// caller can warn and fall back.
#[must_use]
pub fn parse_offered(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "" | "yes" | "y" | "true" | "1" => Some(true),
        "no" | "n" | "false" | "0" => Some(false),
        _ => None,
    }
}

//! CSV parser for major catalogs
//!
//! Layout:
//!
//! ```text
//! Major,Public Health
//! Code,Name,Credits,Type,Semester,Offered,Prerequisites,Corequisites,Concurrent,Standing,Description
//! PBHL 101,Intro to Public Health,3,required,1,yes,,,,,
//! PBHL 305,Epidemiology,3,required,5,yes,"PBHL 201, STAT 210",,,Junior standing,
//! ```
//!
//! The `Major` line is optional. Header names are case-insensitive and only
//! `Code` is mandatory.

use super::requirements::{parse_offered, split_requirements};
use crate::core::models::{Catalog, Course, CourseType, Requirement, Standing};
use crate::{debug, warn};
use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Parse a catalog CSV file
///
/// When the file has no `Major` line, the file stem is used as the major.
///
/// # Errors
/// Returns an error if the file cannot be read or has no usable header
pub fn parse_catalog_csv<P: AsRef<Path>>(path: P) -> Result<Catalog, Box<dyn Error>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read catalog '{}': {e}", path.display()))?;

    let mut catalog = parse_catalog_str(&content)?;
    if catalog.major.is_empty() {
        catalog.major = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
    }
    Ok(catalog)
}

/// Parse catalog CSV content
///
/// # Errors
/// Returns an error if the content has no header row or the header lacks
/// a `Code` column
pub fn parse_catalog_str(content: &str) -> Result<Catalog, Box<dyn Error>> {
    let mut lines = content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let (_, first) = lines.next().ok_or("Catalog is empty")?;
    let first_fields = parse_csv_line(first);

    let (major, header_fields) = if first_fields
        .first()
        .is_some_and(|f| f.eq_ignore_ascii_case("major"))
    {
        let major = first_fields.get(1).cloned().unwrap_or_default();
        let (_, header) = lines.next().ok_or("No course header found after Major line")?;
        (major, parse_csv_line(header))
    } else {
        (String::new(), first_fields)
    };

    let columns = Columns::from_header(&header_fields)?;
    let mut catalog = Catalog::new(major);

    for (idx, line) in lines {
        let row = parse_csv_line(line);
        let line_no = idx + 1;
        match parse_course_row(&row, &columns, line_no) {
            Some(course) => {
                let code = course.code.clone();
                if !catalog.add_course(course) {
                    warn!("Line {line_no}: duplicate course code '{code}' skipped");
                }
            }
            None => warn!("Line {line_no}: row has no course code, skipped"),
        }
    }

    if let Err(unresolved) = catalog.validate_requirements() {
        for message in unresolved {
            debug!("{message}");
        }
    }

    debug!(
        "Parsed {} courses for major '{}'",
        catalog.len(),
        catalog.major
    );
    Ok(catalog)
}

/// Column positions resolved from the header row
struct Columns {
    by_name: HashMap<String, usize>,
}

impl Columns {
    fn from_header(header: &[String]) -> Result<Self, Box<dyn Error>> {
        let by_name: HashMap<String, usize> = header
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.trim().to_lowercase(), idx))
            .collect();

        if !by_name.contains_key("code") {
            return Err("No 'Code' column found in catalog header".into());
        }
        Ok(Self { by_name })
    }

    fn get<'a>(&self, row: &'a [String], name: &str) -> &'a str {
        self.by_name
            .get(name)
            .and_then(|&idx| row.get(idx))
            .map_or("", |value| value.trim())
    }
}

fn parse_course_row(row: &[String], columns: &Columns, line_no: usize) -> Option<Course> {
    let code = columns.get(row, "code");
    if code.is_empty() {
        return None;
    }

    let credits_text = columns.get(row, "credits");
    let credits = if credits_text.is_empty() {
        0.0
    } else {
        credits_text.parse::<f32>().unwrap_or_else(|_| {
            warn!("Line {line_no}: invalid credits '{credits_text}' for {code}, using 0");
            0.0
        })
    };

    let mut course = Course::new(code.to_string(), columns.get(row, "name").to_string(), credits);

    let type_text = columns.get(row, "type");
    if !type_text.is_empty() {
        course.course_type = type_text.parse::<CourseType>().unwrap_or_else(|e| {
            warn!("Line {line_no}: {e}, treating {code} as required");
            CourseType::Required
        });
    }

    course.semester = columns.get(row, "semester").parse::<u8>().ok();

    let offered_text = columns.get(row, "offered");
    course.offered = parse_offered(offered_text).unwrap_or_else(|| {
        warn!("Line {line_no}: unrecognized offered flag '{offered_text}' for {code}, assuming offered");
        true
    });

    for entry in split_requirements(columns.get(row, "prerequisites")) {
        course.add_prerequisite(Requirement::parse(&entry));
    }
    for entry in split_requirements(columns.get(row, "corequisites")) {
        course.add_corequisite(entry);
    }
    for entry in split_requirements(columns.get(row, "concurrent")) {
        course.add_concurrent(entry);
    }

    let standing_text = columns.get(row, "standing");
    if let Some(standing) = Standing::from_requirement_text(standing_text) {
        course.set_standing_required(standing);
    } else if !standing_text.is_empty() && !split_requirements(standing_text).is_empty() {
        debug!("Line {line_no}: standing '{standing_text}' for {code} is not enforced");
    }

    let description = columns.get(row, "description");
    if !description.is_empty() {
        course.description = Some(description.to_string());
    }

    Some(course)
}

/// Split a CSV line into fields, honoring double quotes
///
/// Quoted fields may contain commas; `""` inside quotes is a literal quote.
fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current).trim().to_string()),
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Major,Public Health
Code,Name,Credits,Type,Semester,Offered,Prerequisites,Corequisites,Concurrent,Standing,Description
PBHL 101,Intro to Public Health,3,required,1,yes,,,,,
PBHL 305,Epidemiology,3,Required,5,Yes,\"PBHL 101, STAT 210\",,,Junior standing,\"Study of disease, in populations\"
PBHL 310,Methods,3,intensive,6,no,PBHL 305,,PBHL 310L,,
PBHL 310L,Methods Lab,1,required,6,no,,,PBHL 310,,
";

    #[test]
    fn test_parse_csv_line_quotes() {
        let fields = parse_csv_line("A,\"B, C\",\"say \"\"hi\"\"\", D ");
        assert_eq!(fields, vec!["A", "B, C", "say \"hi\"", "D"]);
    }

    #[test]
    fn test_parse_catalog() {
        let catalog = parse_catalog_str(SAMPLE).expect("catalog parses");
        assert_eq!(catalog.major, "Public Health");
        assert_eq!(catalog.len(), 4);

        let epi = catalog.get_course("PBHL 305").expect("PBHL 305 present");
        assert_eq!(
            epi.prerequisite_codes().collect::<Vec<_>>(),
            vec!["PBHL 101", "STAT 210"]
        );
        assert_eq!(epi.standing_required, Some(Standing::Junior));
        assert_eq!(epi.semester, Some(5));
        assert_eq!(epi.description.as_deref(), Some("Study of disease, in populations"));

        let methods = catalog.get_course("PBHL 310").expect("PBHL 310 present");
        assert!(!methods.offered);
        assert_eq!(methods.course_type, CourseType::Intensive);
        assert_eq!(methods.concurrent, vec!["PBHL 310L".to_string()]);
    }

    #[test]
    fn test_missing_major_line_and_defaults() {
        let catalog = parse_catalog_str("code,name,credits\nBIOL 101,Biology,abc\n,Nameless,3\n")
            .expect("catalog parses");
        assert!(catalog.major.is_empty());
        assert_eq!(catalog.len(), 1);

        let biology = catalog.get_course("BIOL 101").expect("BIOL 101 present");
        assert!(biology.credits.abs() < f32::EPSILON);
        assert!(biology.offered);
        assert_eq!(biology.course_type, CourseType::Required);
        assert!(biology.has_no_requirements());
    }

    #[test]
    fn test_missing_code_column() {
        assert!(parse_catalog_str("Name,Credits\nBiology,3\n").is_err());
        assert!(parse_catalog_str("\n\n").is_err());
    }

    #[test]
    fn test_duplicate_codes_keep_first() {
        let catalog = parse_catalog_str("Code,Name\nPBHL 101,First\nPBHL 101,Second\n")
            .expect("catalog parses");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get_course("PBHL 101").map(|c| c.name.as_str()), Some("First"));
    }

    #[test]
    fn test_standing_in_prerequisites_is_tagged() {
        let catalog = parse_catalog_str("Code,Prerequisites\nPBHL 499,PBHL 101 and Senior standing\n")
            .expect("catalog parses");
        let capstone = catalog.get_course("PBHL 499").expect("PBHL 499 present");
        assert_eq!(capstone.prerequisites.len(), 2);
        assert!(matches!(capstone.prerequisites[1], Requirement::Standing(_)));
        assert_eq!(capstone.standing_required, None);
    }
}

//! Catalog domain model and JSON parsing.
//!
//! The catalog is the immutable source of truth: majors, their ordered
//! required-course lists, and per-college equivalency mappings. It is loaded
//! once (from the built-in seed data or a catalog JSON file) and never
//! mutated afterwards.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::api::MajorId;

/// Units assumed for a course when the catalog does not specify them.
pub const DEFAULT_UNITS: u32 = 4;

/// College name used for equivalency entries that carry no college prefix.
pub const UNLABELED_COLLEGE: &str = "Other";

/// A required university course with its community-college equivalents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Course code, unique within a major (e.g. `CS 61A`).
    pub code: String,
    /// College name mapped to the equivalent course at that college.
    /// Absent entry means no known equivalent at that college.
    pub equivalents: BTreeMap<String, String>,
    /// Unit count, [`DEFAULT_UNITS`] when the catalog omits it.
    pub units: u32,
}

/// A degree program with its ordered required-course list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Major {
    pub id: MajorId,
    pub name: String,
    pub school: String,
    /// Ordered; the course codes form the required set for this major.
    pub courses: Vec<Course>,
}

impl Major {
    /// Look up a required course by code.
    pub fn find_course(&self, code: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.code == code)
    }

    /// Units for `code`, falling back to [`DEFAULT_UNITS`] for codes not in
    /// this major's catalog.
    pub fn units_for(&self, code: &str) -> u32 {
        self.find_course(code).map_or(DEFAULT_UNITS, |c| c.units)
    }
}

// ============================================================================
// Catalog JSON parsing
// ============================================================================
//
// The catalog file format matches the upstream data source: a JSON array of
// majors (optionally wrapped in `{"majors": [...]}`) where each equivalent is
// a `"College: COURSE"` string.

#[derive(Deserialize)]
struct CourseInput {
    #[serde(rename = "ucbCourse")]
    ucb_course: String,
    #[serde(default)]
    equivalents: Vec<String>,
    #[serde(default)]
    units: Option<u32>,
}

#[derive(Deserialize)]
struct MajorInput {
    id: String,
    major: String,
    school: String,
    #[serde(default)]
    courses: Vec<CourseInput>,
}

#[derive(Deserialize)]
struct MajorsWrapper {
    majors: Vec<MajorInput>,
}

fn validate_input_catalog(catalog_json: &str) -> Result<()> {
    let value: serde_json::Value =
        serde_json::from_str(catalog_json).context("Invalid catalog JSON")?;
    let is_list = value.is_array();
    let is_wrapper = value
        .as_object()
        .and_then(|obj| obj.get("majors"))
        .map(|m| m.is_array())
        .unwrap_or(false);
    if !is_list && !is_wrapper {
        anyhow::bail!("Catalog must be a JSON array of majors or {{\"majors\": [...]}}");
    }
    Ok(())
}

/// Split a `"College: COURSE"` equivalency string into (college, course).
///
/// Entries with no separator are kept verbatim under [`UNLABELED_COLLEGE`]
/// rather than dropped.
fn parse_equivalent(entry: &str) -> (String, String) {
    match entry.split_once(':') {
        Some((college, course)) if !college.trim().is_empty() => {
            (college.trim().to_string(), course.trim().to_string())
        }
        _ => (UNLABELED_COLLEGE.to_string(), entry.trim().to_string()),
    }
}

impl From<CourseInput> for Course {
    fn from(input: CourseInput) -> Self {
        let equivalents = input
            .equivalents
            .iter()
            .map(|e| parse_equivalent(e))
            .collect();
        Course {
            code: input.ucb_course,
            equivalents,
            units: input.units.unwrap_or(DEFAULT_UNITS),
        }
    }
}

impl From<MajorInput> for Major {
    fn from(input: MajorInput) -> Self {
        Major {
            id: MajorId::new(input.id),
            name: input.major,
            school: input.school,
            courses: input.courses.into_iter().map(Into::into).collect(),
        }
    }
}

/// Parse a catalog from a JSON string in the published data format.
///
/// Accepts either a bare array of majors or a `{"majors": [...]}` wrapper.
/// Equivalency strings are split into the per-college map; majors with
/// duplicate ids are rejected.
pub fn parse_catalog_json_str(catalog_json: &str) -> Result<Vec<Major>> {
    validate_input_catalog(catalog_json)?;

    let inputs: Vec<MajorInput> = match serde_json::from_str::<MajorsWrapper>(catalog_json) {
        Ok(wrapper) => wrapper.majors,
        Err(_) => serde_json::from_str(catalog_json)
            .context("Failed to deserialize catalog JSON using Serde")?,
    };

    let majors: Vec<Major> = inputs.into_iter().map(Into::into).collect();

    let mut seen = std::collections::HashSet::new();
    for major in &majors {
        if !seen.insert(major.id.clone()) {
            anyhow::bail!("Duplicate major id in catalog: {}", major.id);
        }
    }

    Ok(majors)
}

/// Load and parse a catalog file from disk.
pub fn load_catalog_file(path: &std::path::Path) -> Result<Vec<Major>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
    parse_catalog_json_str(&contents)
}

/// The built-in seed catalog: five UC Berkeley majors with their partner
/// community-college equivalencies.
pub fn seed_catalog() -> Vec<Major> {
    fn course(code: &str, equivalents: &[&str]) -> Course {
        Course {
            code: code.to_string(),
            equivalents: equivalents.iter().map(|e| parse_equivalent(e)).collect(),
            units: DEFAULT_UNITS,
        }
    }

    fn major(id: &str, name: &str, school: &str, courses: Vec<Course>) -> Major {
        Major {
            id: MajorId::new(id),
            name: name.to_string(),
            school: school.to_string(),
            courses,
        }
    }

    vec![
        major(
            "cs-ucb",
            "Computer Science",
            "UC Berkeley",
            vec![
                course("CS 61A", &["De Anza: CIS 22A", "Foothill: CS 1A", "BCC: CIS 5"]),
                course("CS 61B", &["De Anza: CIS 22B", "Foothill: CS 1B"]),
                course("CS 70", &[]),
                course("Math 1A", &["Foothill: MATH 1A", "BCC: Math 3A"]),
                course("Math 1B", &["Foothill: MATH 1B", "BCC: Math 3B"]),
            ],
        ),
        major(
            "ds-ucb",
            "Data Science",
            "UC Berkeley",
            vec![
                course("Data C8", &["BCC: CIS 26 + Math 13", "De Anza: CIS 41A + Math 1"]),
                course("Math 10A", &["BCC: Math 13"]),
                course("STAT 20", &[]),
            ],
        ),
        major(
            "bus-ucb",
            "Business Administration",
            "UC Berkeley",
            vec![
                course("UGBA 10", &["BCC: BUS 10", "De Anza: BUS 10"]),
                course("Econ 1", &["BCC: ECON 1", "De Anza: ECON 1A"]),
                course("Math 16A", &["BCC: Math 16A"]),
            ],
        ),
        major(
            "mcb-ucb",
            "Molecular & Cell Biology",
            "UC Berkeley",
            vec![
                course("Bio 1A", &["BCC: BIOL 1A", "De Anza: BIOL 6A"]),
                course("Bio 1B", &[]),
                course("Chem 1A", &["BCC: CHEM 1A", "Foothill: CHEM 1A"]),
                course("Chem 3A", &[]),
            ],
        ),
        major(
            "mech-eng-ucb",
            "Mechanical Engineering",
            "UC Berkeley",
            vec![
                course("Physics 7A", &["BCC: PHYS 4A", "De Anza: PHYS 4A"]),
                course("Physics 7B", &["BCC: PHYS 4B"]),
                course("Engin 7", &["De Anza: ENGR 37", "Foothill: ENGR 50"]),
                course("Math 53", &["BCC: Math 3E"]),
                course("Math 54", &[]),
            ],
        ),
    ]
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;

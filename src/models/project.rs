use serde::{Deserialize, Serialize};

use super::Link;

/// A portfolio project.
///
/// `technologies` are free-text tags. They are not foreign keys into the
/// profile's skills; the backend matches them against a skill name when
/// filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl Project {
    /// Whether any technology tag matches `name`, ignoring case and
    /// surrounding whitespace (the same rule the backend applies).
    pub fn uses(&self, name: &str) -> bool {
        let needle = name.trim();
        self.technologies
            .iter()
            .any(|t| t.trim().eq_ignore_ascii_case(needle))
    }
}

use serde::{Deserialize, Serialize};

use super::{Education, Project, WorkExperience};

/// The top-level portfolio record.
///
/// One profile is loaded per session. Its collections are delivered inline
/// by `GET /api/profile`; a collection missing from the payload is treated as
/// empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub work: Vec<WorkExperience>,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl Profile {
    /// Look up a skill by exact name.
    pub fn skill(&self, name: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.name == name)
    }
}

/// A named skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: i64,
    pub name: String,
}

/// An external link (e.g. `github`, `linkedin`, `demo`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub platform: String,
    pub url: String,
}

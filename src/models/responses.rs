use serde::{Deserialize, Serialize};

use super::{Project, Skill};

/// Body of `GET /api/projects`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectsResponse {
    pub projects: Vec<Project>,
}

/// Body of `GET /api/search`. The backend echoes the query it matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: SearchResults,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

/// Body of `GET /api/skills/top`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillsResponse {
    pub skills: Vec<Skill>,
}

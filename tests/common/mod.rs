//! Shared fixtures for integration tests.

#![allow(dead_code)]

use folio::models::*;

pub fn skill(id: i64, name: &str) -> Skill {
    Skill {
        id,
        name: name.to_string(),
    }
}

pub fn project(id: i64, title: &str, technologies: &[&str]) -> Project {
    Project {
        id,
        title: title.to_string(),
        description: format!("{} description", title),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        links: vec![Link {
            platform: "github".to_string(),
            url: format!("https://github.com/example/{}", title.to_lowercase()),
        }],
    }
}

/// Profile with projects A (Go) and B (Rust), plus a Python-only project C.
pub fn sample_profile() -> Profile {
    Profile {
        id: 1,
        name: "Jordan Example".to_string(),
        email: "jordan@example.com".to_string(),
        bio: Some("Backend engineer".to_string()),
        location: Some("Berlin".to_string()),
        skills: vec![skill(1, "Go"), skill(2, "Rust"), skill(3, "Python")],
        projects: vec![
            project(1, "A", &["Go"]),
            project(2, "B", &["Rust"]),
            project(3, "C", &["Python"]),
        ],
        education: vec![Education {
            id: 1,
            institution: "Tech University".to_string(),
            degree: "MSc".to_string(),
            field_of_study: "Distributed Systems".to_string(),
            start_date: "2016".to_string(),
            end_date: Some("2018".to_string()),
        }],
        work: vec![WorkExperience {
            id: 1,
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            description: "Runs the platform team".to_string(),
            start_date: "2019".to_string(),
            end_date: None,
        }],
        links: vec![Link {
            platform: "github".to_string(),
            url: "https://github.com/jordan".to_string(),
        }],
    }
}

/// Projects using `skill`, matched the way the backend matches.
pub fn projects_using(profile: &Profile, skill: &str) -> Vec<Project> {
    profile
        .projects
        .iter()
        .filter(|p| p.uses(skill))
        .cloned()
        .collect()
}

/// Substring search over titles, descriptions and technologies, plus skills.
pub fn search_profile(profile: &Profile, query: &str) -> SearchResponse {
    let q = query.to_lowercase();
    let projects = profile
        .projects
        .iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&q)
                || p.description.to_lowercase().contains(&q)
                || p.technologies.iter().any(|t| t.to_lowercase().contains(&q))
        })
        .cloned()
        .collect();
    let skills = profile
        .skills
        .iter()
        .filter(|s| s.name.to_lowercase().contains(&q))
        .cloned()
        .collect();
    SearchResponse {
        query: query.to_string(),
        results: SearchResults { projects, skills },
    }
}

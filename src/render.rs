//! Plain-text rendering of the view.

use crate::models::*;
use crate::view::{Phase, ViewState};

const BULLET: char = '●';
const LINK_ARROW: &str = "→";

/// Text shown while the profile is loading.
pub const LOADING: &str = "Loading profile...";

/// Text shown when no project matches the active filter.
pub const NO_PROJECTS: &str = "No projects found matching your criteria.";

/// Render the whole view for the current phase.
pub fn render_view(state: &ViewState) -> String {
    match state.phase() {
        Phase::Loading => format!("{}\n", LOADING),
        Phase::Error(message) => render_error(message),
        Phase::Ready => match state.profile() {
            Some(profile) => render_ready(state, profile),
            None => String::new(),
        },
    }
}

/// Blocking error view with a retry hint.
pub fn render_error(message: &str) -> String {
    format!("Connection Error\n{}\nType `retry` to try again.\n", message)
}

fn render_ready(state: &ViewState, profile: &Profile) -> String {
    let mut output = render_header(profile);

    output.push('\n');
    output.push_str(&format!("Search: \"{}\"\n", state.search_text()));
    if let Some(hits) = state.search_hits() {
        if !hits.skills.is_empty() {
            let names: Vec<&str> = hits.skills.iter().map(|s| s.name.as_str()).collect();
            output.push_str(&format!("Matching skills: {}\n", names.join(", ")));
        }
    }

    output.push('\n');
    output.push_str(&render_skills(&profile.skills, state.selected_skill()));
    if let Some(skill) = state.selected_skill() {
        output.push_str(&format!("Showing projects using {}\n", skill));
    }

    output.push('\n');
    output.push_str(&render_projects(state.visible_projects()));

    if !profile.work.is_empty() {
        output.push('\n');
        output.push_str(&render_work(&profile.work));
    }
    if !profile.education.is_empty() {
        output.push('\n');
        output.push_str(&render_education(&profile.education));
    }
    output
}

/// Name, bio, contact line and profile links.
pub fn render_header(profile: &Profile) -> String {
    let mut output = format!("== {} ==\n", profile.name);
    if let Some(bio) = profile.bio.as_deref().filter(|b| !b.is_empty()) {
        output.push_str(bio);
        output.push('\n');
    }

    let mut contact = vec![profile.email.as_str()];
    if let Some(location) = profile.location.as_deref().filter(|l| !l.is_empty()) {
        contact.push(location);
    }
    output.push_str(&contact.join(" | "));
    output.push('\n');

    if !profile.links.is_empty() {
        let links: Vec<String> = profile
            .links
            .iter()
            .map(|l| format!("{} <{}>", l.platform, l.url))
            .collect();
        output.push_str(&format!("Links: {}\n", links.join(", ")));
    }
    output
}

/// One line of skills; the selected skill is bracketed.
pub fn render_skills(skills: &[Skill], selected: Option<&str>) -> String {
    let names: Vec<String> = skills
        .iter()
        .map(|s| {
            if selected == Some(s.name.as_str()) {
                format!("[{}]", s.name)
            } else {
                s.name.clone()
            }
        })
        .collect();
    format!("Skills: {}\n", names.join(" "))
}

/// Project cards under a `Projects (N)` heading.
pub fn render_projects(projects: &[Project]) -> String {
    if projects.is_empty() {
        return format!("Projects\n{}\n", NO_PROJECTS);
    }

    let mut output = format!("Projects ({})\n", projects.len());
    for project in projects {
        output.push(BULLET);
        output.push(' ');
        output.push_str(&project.title);
        output.push('\n');
        output.push_str(&format!("  {}\n", project.description));
        if !project.technologies.is_empty() {
            let tags: Vec<&str> = project.technologies.iter().map(|t| t.trim()).collect();
            output.push_str(&format!("  Technologies: {}\n", tags.join(", ")));
        }
        for link in &project.links {
            output.push_str(&format!("  {} {} {}\n", link.platform, LINK_ARROW, link.url));
        }
    }
    output
}

pub fn render_work(work: &[WorkExperience]) -> String {
    let mut output = String::from("Work Experience\n");
    for entry in work {
        output.push_str(&format!(
            "{} {} at {} ({})\n",
            BULLET,
            entry.position,
            entry.company,
            entry.period()
        ));
        if !entry.description.is_empty() {
            output.push_str(&format!("  {}\n", entry.description));
        }
    }
    output
}

pub fn render_education(education: &[Education]) -> String {
    let mut output = String::from("Education\n");
    for entry in education {
        output.push_str(&format!("{} {}, {}\n", BULLET, entry.degree, entry.institution));
        output.push_str(&format!("  {}\n", entry.field_of_study));
        output.push_str(&format!("  {}\n", entry.period()));
    }
    output
}

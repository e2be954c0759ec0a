//! The view state machine.
//!
//! [`ViewState`] is synchronous and performs no I/O. User actions return the
//! [`Request`] that should be fetched (if any); fetched results come back as
//! a [`Completion`] and are folded in with [`ViewState::apply`].
//!
//! Every request carries a monotonic [`RequestId`]. The state remembers the
//! latest id issued for the profile slot and for the visible project list,
//! and discards completions for anything older. Responses may arrive in any
//! order; only the most recently *issued* request can change what is shown.

use crate::client::ClientError;
use crate::models::*;

/// Message shown when the initial profile load fails.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load profile. Make sure the backend is running.";

/// Token attached to every fetch. Later requests have larger ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    pub fn get(&self) -> u64 {
        self.0
    }
}

/// What a request fetches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetch {
    Profile,
    Projects { skill: String },
    Search { query: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub id: RequestId,
    pub fetch: Fetch,
}

/// Result of a fetch, matching the [`Fetch`] that produced it.
#[derive(Debug)]
pub enum Outcome {
    Profile(Result<Profile, ClientError>),
    Projects(Result<ProjectsResponse, ClientError>),
    Search(Result<SearchResponse, ClientError>),
}

#[derive(Debug)]
pub struct Completion {
    pub id: RequestId,
    pub outcome: Outcome,
}

/// Session phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Error(String),
    Ready,
}

/// What applying a completion did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// A newer request superseded this one; nothing changed.
    Stale,
    /// State changed. A reloaded profile with an active skill filter asks
    /// for that skill's projects again.
    Updated { follow_up: Option<Request> },
    /// A secondary fetch failed; the visible list was kept.
    Failed,
}

/// Skills and echoed query from the last applied search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHits {
    pub query: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone)]
pub struct ViewState {
    phase: Phase,
    profile: Option<Profile>,
    visible: Vec<Project>,
    selected_skill: Option<String>,
    search_text: String,
    search_hits: Option<SearchHits>,
    last_id: u64,
    pending_profile: Option<RequestId>,
    pending_list: Option<RequestId>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Loading,
            profile: None,
            visible: Vec::new(),
            selected_skill: None,
            search_text: String::new(),
            search_hits: None,
            last_id: 0,
            pending_profile: None,
            pending_list: None,
        }
    }

    // ============================================================
    // Accessors
    // ============================================================

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase == Phase::Ready
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    /// Projects currently shown.
    pub fn visible_projects(&self) -> &[Project] {
        &self.visible
    }

    pub fn selected_skill(&self) -> Option<&str> {
        self.selected_skill.as_deref()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn search_hits(&self) -> Option<&SearchHits> {
        self.search_hits.as_ref()
    }

    /// Whether a request for the project list is still outstanding.
    pub fn is_filtering(&self) -> bool {
        self.pending_list.is_some()
    }

    // ============================================================
    // Actions
    // ============================================================

    /// Start the initial profile load.
    pub fn mount(&mut self) -> Request {
        self.load_profile()
    }

    /// Re-issue the profile load after a failure. No-op outside the error
    /// phase.
    pub fn retry(&mut self) -> Option<Request> {
        match self.phase {
            Phase::Error(_) => Some(self.load_profile()),
            _ => None,
        }
    }

    /// Re-fetch the profile wholesale from any phase.
    pub fn reload(&mut self) -> Request {
        self.load_profile()
    }

    /// Toggle the skill filter.
    ///
    /// Selecting the active skill clears the filter locally. Selecting any
    /// other skill replaces the filter, clears the search text and requests
    /// that skill's projects.
    pub fn select_skill(&mut self, name: &str) -> Option<Request> {
        if !self.is_ready() {
            return None;
        }

        if self.selected_skill.as_deref() == Some(name) {
            self.selected_skill = None;
            self.show_all();
            return None;
        }

        self.selected_skill = Some(name.to_string());
        self.search_text.clear();
        self.search_hits = None;
        Some(self.request_list(Fetch::Projects {
            skill: name.to_string(),
        }))
    }

    /// Replace the pending search text without submitting it.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Submit the current search text.
    ///
    /// Blank text resets to the full project list without a request. The
    /// skill selection is left as is either way.
    pub fn submit_search(&mut self) -> Option<Request> {
        if !self.is_ready() {
            return None;
        }

        if self.search_text.trim().is_empty() {
            self.show_all();
            return None;
        }

        let query = self.search_text.clone();
        Some(self.request_list(Fetch::Search { query }))
    }

    /// Fold a fetch result into the state.
    pub fn apply(&mut self, completion: Completion) -> Applied {
        let Completion { id, outcome } = completion;
        match outcome {
            Outcome::Profile(result) => {
                if self.pending_profile != Some(id) {
                    tracing::debug!(request = id.get(), "Discarding stale profile response");
                    return Applied::Stale;
                }
                self.pending_profile = None;
                self.apply_profile(result)
            }
            Outcome::Projects(result) => {
                if !self.take_list(id) {
                    return Applied::Stale;
                }
                match result {
                    Ok(response) => {
                        self.visible = response.projects;
                        Applied::Updated { follow_up: None }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to filter projects");
                        Applied::Failed
                    }
                }
            }
            Outcome::Search(result) => {
                if !self.take_list(id) {
                    return Applied::Stale;
                }
                match result {
                    Ok(response) => {
                        self.visible = response.results.projects;
                        self.search_hits = Some(SearchHits {
                            query: response.query,
                            skills: response.results.skills,
                        });
                        Applied::Updated { follow_up: None }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Search failed");
                        Applied::Failed
                    }
                }
            }
        }
    }

    // ============================================================
    // Internals
    // ============================================================

    fn next_id(&mut self) -> RequestId {
        self.last_id += 1;
        RequestId(self.last_id)
    }

    fn load_profile(&mut self) -> Request {
        let id = self.next_id();
        self.phase = Phase::Loading;
        self.pending_profile = Some(id);
        // A list response from before the reload must not land on the new profile.
        self.pending_list = None;
        Request {
            id,
            fetch: Fetch::Profile,
        }
    }

    fn request_list(&mut self, fetch: Fetch) -> Request {
        let id = self.next_id();
        self.pending_list = Some(id);
        Request { id, fetch }
    }

    fn take_list(&mut self, id: RequestId) -> bool {
        if self.pending_list != Some(id) {
            tracing::debug!(request = id.get(), "Discarding stale project list response");
            return false;
        }
        self.pending_list = None;
        true
    }

    /// Show the full project list and drop any outstanding list request.
    fn show_all(&mut self) {
        self.pending_list = None;
        self.search_hits = None;
        if let Some(profile) = &self.profile {
            self.visible = profile.projects.clone();
        }
    }

    fn apply_profile(&mut self, result: Result<Profile, ClientError>) -> Applied {
        match result {
            Ok(profile) => {
                tracing::info!(
                    name = %profile.name,
                    projects = profile.projects.len(),
                    skills = profile.skills.len(),
                    "Profile loaded"
                );
                self.visible = profile.projects.clone();
                self.profile = Some(profile);
                self.phase = Phase::Ready;
                self.search_hits = None;

                let follow_up = self.selected_skill.clone().map(|skill| {
                    self.request_list(Fetch::Projects { skill })
                });
                Applied::Updated { follow_up }
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load profile");
                self.phase = Phase::Error(LOAD_ERROR_MESSAGE.to_string());
                Applied::Updated { follow_up: None }
            }
        }
    }
}

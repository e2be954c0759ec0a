mod common;

use folio::client::{ClientError, Operation};
use folio::models::*;
use folio::view::*;
use reqwest::StatusCode;
use speculate2::speculate;

use common::*;

fn failure(operation: Operation) -> ClientError {
    ClientError::Status {
        operation,
        status: StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn profile_reply(request: &Request, result: Result<Profile, ClientError>) -> Completion {
    Completion {
        id: request.id,
        outcome: Outcome::Profile(result),
    }
}

fn projects_reply(request: &Request, projects: Vec<Project>) -> Completion {
    Completion {
        id: request.id,
        outcome: Outcome::Projects(Ok(ProjectsResponse { projects })),
    }
}

fn search_reply(request: &Request, query: &str) -> Completion {
    Completion {
        id: request.id,
        outcome: Outcome::Search(Ok(search_profile(&sample_profile(), query))),
    }
}

/// A state with the sample profile loaded.
fn loaded() -> ViewState {
    let mut state = ViewState::new();
    let request = state.mount();
    state.apply(profile_reply(&request, Ok(sample_profile())));
    state
}

fn titles(state: &ViewState) -> Vec<&str> {
    state
        .visible_projects()
        .iter()
        .map(|p| p.title.as_str())
        .collect()
}

speculate! {
    describe "loading" {
        it "starts in the loading phase with nothing visible" {
            let state = ViewState::new();

            assert_eq!(state.phase(), &Phase::Loading);
            assert!(state.profile().is_none());
            assert!(state.visible_projects().is_empty());
        }

        it "shows the full project list once the profile arrives" {
            let state = loaded();

            assert_eq!(state.phase(), &Phase::Ready);
            assert_eq!(state.visible_projects(), sample_profile().projects.as_slice());
            assert!(state.selected_skill().is_none());
            assert!(state.search_hits().is_none());
        }

        it "moves to the error phase with a fixed message on failure" {
            let mut state = ViewState::new();
            let request = state.mount();

            let applied = state.apply(profile_reply(&request, Err(failure(Operation::Profile))));

            assert_eq!(applied, Applied::Updated { follow_up: None });
            assert_eq!(state.phase(), &Phase::Error(LOAD_ERROR_MESSAGE.to_string()));
            assert_eq!(LOAD_ERROR_MESSAGE, "Failed to load profile. Make sure the backend is running.");
        }
    }

    describe "retry" {
        it "issues exactly one profile request from the error phase" {
            let mut state = ViewState::new();
            let first = state.mount();
            state.apply(profile_reply(&first, Err(failure(Operation::Profile))));

            let retry = state.retry().expect("retry should issue a request");

            assert_eq!(retry.fetch, Fetch::Profile);
            assert!(retry.id > first.id);
            assert_eq!(state.phase(), &Phase::Loading);
        }

        it "recovers when the retried load succeeds" {
            let mut state = ViewState::new();
            let first = state.mount();
            state.apply(profile_reply(&first, Err(failure(Operation::Profile))));
            let retry = state.retry().unwrap();

            state.apply(profile_reply(&retry, Ok(sample_profile())));

            assert!(state.is_ready());
            assert_eq!(titles(&state), vec!["A", "B", "C"]);
        }

        it "can be repeated without limit" {
            let mut state = ViewState::new();
            let mut request = state.mount();
            for _ in 0..5 {
                state.apply(profile_reply(&request, Err(failure(Operation::Profile))));
                request = state.retry().expect("retry should always be available");
            }
            assert_eq!(state.phase(), &Phase::Loading);
        }

        it "is a no-op outside the error phase" {
            let mut state = loaded();
            assert!(state.retry().is_none());
            assert!(state.is_ready());
        }

        it "ignores the failed request if it answers late" {
            let mut state = ViewState::new();
            let first = state.mount();
            state.apply(profile_reply(&first, Err(failure(Operation::Profile))));
            let retry = state.retry().unwrap();
            state.apply(profile_reply(&retry, Ok(sample_profile())));

            let applied = state.apply(profile_reply(&first, Err(failure(Operation::Profile))));

            assert_eq!(applied, Applied::Stale);
            assert!(state.is_ready());
        }
    }

    describe "skill filter" {
        before {
            let mut state = loaded();
        }

        it "requests projects for the selected skill" {
            let request = state.select_skill("Go").expect("should request projects");

            assert_eq!(request.fetch, Fetch::Projects { skill: "Go".to_string() });
            assert_eq!(state.selected_skill(), Some("Go"));
            assert!(state.is_filtering());
        }

        it "shows the backend result for the skill" {
            let request = state.select_skill("Go").unwrap();
            state.apply(projects_reply(&request, vec![project(1, "A", &["Go"])]));

            assert_eq!(titles(&state), vec!["A"]);
            assert!(!state.is_filtering());
        }

        it "restores the full list when the same skill is selected again" {
            let request = state.select_skill("Go").unwrap();
            state.apply(projects_reply(&request, vec![project(1, "A", &["Go"])]));

            assert!(state.select_skill("Go").is_none());

            assert!(state.selected_skill().is_none());
            assert_eq!(titles(&state), vec!["A", "B", "C"]);
        }

        it "replaces the filter and clears search text when another skill is selected" {
            let go = state.select_skill("Go").unwrap();
            state.apply(projects_reply(&go, vec![project(1, "A", &["Go"])]));
            state.set_search_text("half typed");

            let rust = state.select_skill("Rust").expect("should request projects");
            state.apply(projects_reply(&rust, vec![project(2, "B", &["Rust"])]));

            assert_eq!(state.selected_skill(), Some("Rust"));
            assert_eq!(state.search_text(), "");
            assert_eq!(titles(&state), vec!["B"]);
        }

        it "keeps the previous list when the filter request fails" {
            let go = state.select_skill("Go").unwrap();
            state.apply(projects_reply(&go, vec![project(1, "A", &["Go"])]));
            let rust = state.select_skill("Rust").unwrap();

            let applied = state.apply(Completion {
                id: rust.id,
                outcome: Outcome::Projects(Err(failure(Operation::Projects))),
            });

            assert_eq!(applied, Applied::Failed);
            assert!(state.is_ready());
            assert_eq!(titles(&state), vec!["A"]);
        }

        it "does nothing before the profile is loaded" {
            let mut fresh = ViewState::new();
            fresh.mount();

            assert!(fresh.select_skill("Go").is_none());
            assert!(fresh.selected_skill().is_none());
        }
    }

    describe "search" {
        before {
            let mut state = loaded();
        }

        it "resets to the full list without a request for blank text" {
            let go = state.select_skill("Go").unwrap();
            state.apply(projects_reply(&go, vec![project(1, "A", &["Go"])]));
            state.set_search_text("   ");

            assert!(state.submit_search().is_none());

            assert_eq!(titles(&state), vec!["A", "B", "C"]);
        }

        it "requests a search for non-empty text" {
            state.set_search_text("rust");

            let request = state.submit_search().expect("should request a search");

            assert_eq!(request.fetch, Fetch::Search { query: "rust".to_string() });
        }

        it "shows the search result projects" {
            state.set_search_text("rust");
            let request = state.submit_search().unwrap();

            state.apply(search_reply(&request, "rust"));

            assert_eq!(titles(&state), vec!["B"]);
            let hits = state.search_hits().expect("hits recorded");
            assert_eq!(hits.query, "rust");
            assert_eq!(hits.skills, vec![skill(2, "Rust")]);
        }

        it "overrides an active skill filter without clearing the selection" {
            let go = state.select_skill("Go").unwrap();
            state.apply(projects_reply(&go, vec![project(1, "A", &["Go"])]));
            state.set_search_text("python");
            let request = state.submit_search().unwrap();

            state.apply(search_reply(&request, "python"));

            assert_eq!(titles(&state), vec!["C"]);
            assert_eq!(state.selected_skill(), Some("Go"));
        }

        it "keeps the previous list when the search fails" {
            state.set_search_text("rust");
            let request = state.submit_search().unwrap();

            let applied = state.apply(Completion {
                id: request.id,
                outcome: Outcome::Search(Err(failure(Operation::Search))),
            });

            assert_eq!(applied, Applied::Failed);
            assert_eq!(titles(&state), vec!["A", "B", "C"]);
        }

        it "deselecting the skill after a search restores the full list" {
            state.select_skill("Go");
            state.set_search_text("rust");
            let request = state.submit_search().unwrap();
            state.apply(search_reply(&request, "rust"));

            state.select_skill("Go");

            assert!(state.selected_skill().is_none());
            assert!(state.search_hits().is_none());
            assert_eq!(titles(&state), vec!["A", "B", "C"]);
        }
    }

    describe "out of order responses" {
        before {
            let mut state = loaded();
        }

        it "keeps the latest skill when an older response arrives last" {
            let go = state.select_skill("Go").unwrap();
            let rust = state.select_skill("Rust").unwrap();

            state.apply(projects_reply(&rust, vec![project(2, "B", &["Rust"])]));
            let applied = state.apply(projects_reply(&go, vec![project(1, "A", &["Go"])]));

            assert_eq!(applied, Applied::Stale);
            assert_eq!(titles(&state), vec!["B"]);
        }

        it "drops a search response superseded by a skill selection" {
            state.set_search_text("python");
            let search = state.submit_search().unwrap();
            let go = state.select_skill("Go").unwrap();

            state.apply(projects_reply(&go, vec![project(1, "A", &["Go"])]));
            let applied = state.apply(search_reply(&search, "python"));

            assert_eq!(applied, Applied::Stale);
            assert_eq!(titles(&state), vec!["A"]);
        }

        it "drops an in-flight filter once the user resets locally" {
            let go = state.select_skill("Go").unwrap();
            state.select_skill("Go");

            let applied = state.apply(projects_reply(&go, vec![project(1, "A", &["Go"])]));

            assert_eq!(applied, Applied::Stale);
            assert_eq!(titles(&state), vec!["A", "B", "C"]);
        }

        it "drops an in-flight filter once a blank search resets" {
            let go = state.select_skill("Go").unwrap();
            state.set_search_text("");
            state.submit_search();

            let applied = state.apply(projects_reply(&go, vec![project(1, "A", &["Go"])]));

            assert_eq!(applied, Applied::Stale);
        }
    }

    describe "reload" {
        before {
            let mut state = loaded();
        }

        it "returns to loading and shows the new profile" {
            let request = state.reload();
            assert_eq!(state.phase(), &Phase::Loading);

            let mut updated = sample_profile();
            updated.projects.truncate(1);
            state.apply(profile_reply(&request, Ok(updated)));

            assert_eq!(titles(&state), vec!["A"]);
        }

        it "re-applies an active skill filter" {
            let go = state.select_skill("Go").unwrap();
            state.apply(projects_reply(&go, vec![project(1, "A", &["Go"])]));
            let reload = state.reload();

            let applied = state.apply(profile_reply(&reload, Ok(sample_profile())));

            match applied {
                Applied::Updated { follow_up: Some(request) } => {
                    assert_eq!(request.fetch, Fetch::Projects { skill: "Go".to_string() });
                }
                other => panic!("expected a follow-up request, got {:?}", other),
            }
        }

        it "discards list responses issued before the reload" {
            state.set_search_text("rust");
            let search = state.submit_search().unwrap();
            let reload = state.reload();
            state.apply(profile_reply(&reload, Ok(sample_profile())));

            let applied = state.apply(search_reply(&search, "rust"));

            assert_eq!(applied, Applied::Stale);
            assert_eq!(titles(&state), vec!["A", "B", "C"]);
        }
    }
}

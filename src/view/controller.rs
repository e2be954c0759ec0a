//! Async driver for [`ViewState`].
//!
//! The controller owns the state and is the only thing that mutates it.
//! Each fetch runs as its own tokio task and reports back over a channel;
//! nothing is cancelled, stale results are simply discarded by the state.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::client::PortfolioApi;

use super::state::*;

pub struct Controller<A: PortfolioApi> {
    api: Arc<A>,
    state: ViewState,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,
    in_flight: usize,
}

impl<A: PortfolioApi> Controller<A> {
    pub fn new(api: A) -> Self {
        Self::with_shared(Arc::new(api))
    }

    /// Create a controller over an API handle shared with other callers.
    pub fn with_shared(api: Arc<A>) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            api,
            state: ViewState::new(),
            completions_tx,
            completions_rx,
            in_flight: 0,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Number of fetches started but not yet received.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    // ============================================================
    // User actions
    // ============================================================

    pub fn mount(&mut self) {
        let request = self.state.mount();
        self.dispatch(request);
    }

    /// Returns `false` when there was no failed load to retry.
    pub fn retry(&mut self) -> bool {
        match self.state.retry() {
            Some(request) => {
                self.dispatch(request);
                true
            }
            None => false,
        }
    }

    pub fn reload(&mut self) {
        let request = self.state.reload();
        self.dispatch(request);
    }

    pub fn select_skill(&mut self, name: &str) {
        if let Some(request) = self.state.select_skill(name) {
            self.dispatch(request);
        }
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.state.set_search_text(text);
    }

    pub fn submit_search(&mut self) {
        if let Some(request) = self.state.submit_search() {
            self.dispatch(request);
        }
    }

    /// Set the search text and submit it.
    pub fn search(&mut self, text: impl Into<String>) {
        self.set_search_text(text);
        self.submit_search();
    }

    // ============================================================
    // Completions
    // ============================================================

    /// Wait for the next fetch to finish. Pends forever while nothing is in
    /// flight, so it is safe to race against other input.
    pub async fn next_completion(&mut self) -> Option<Completion> {
        let completion = self.completions_rx.recv().await?;
        self.in_flight = self.in_flight.saturating_sub(1);
        Some(completion)
    }

    /// Apply a completion and start any follow-up fetch it asks for.
    pub fn apply(&mut self, completion: Completion) -> Applied {
        let applied = self.state.apply(completion);
        if let Applied::Updated {
            follow_up: Some(request),
        } = &applied
        {
            self.dispatch(request.clone());
        }
        applied
    }

    /// Receive and apply one completion.
    pub async fn process_next(&mut self) -> Option<Applied> {
        let completion = self.next_completion().await?;
        Some(self.apply(completion))
    }

    /// Apply completions until no fetch is outstanding.
    pub async fn settle(&mut self) {
        while self.in_flight > 0 {
            if self.process_next().await.is_none() {
                break;
            }
        }
    }

    fn dispatch(&mut self, request: Request) {
        tracing::debug!(request = request.id.get(), fetch = ?request.fetch, "Dispatching fetch");

        let api = Arc::clone(&self.api);
        let tx = self.completions_tx.clone();
        self.in_flight += 1;

        tokio::spawn(async move {
            let Request { id, fetch } = request;
            let outcome = match fetch {
                Fetch::Profile => Outcome::Profile(api.get_profile().await),
                Fetch::Projects { skill } => {
                    Outcome::Projects(api.get_projects(Some(skill.as_str())).await)
                }
                Fetch::Search { query } => Outcome::Search(api.search(&query).await),
            };
            // The receiver only goes away with the controller.
            let _ = tx.send(Completion { id, outcome });
        });
    }
}

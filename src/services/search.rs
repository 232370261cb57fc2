/// Debounced interactive search
///
/// One `SearchSession` tracks one search input stream. Every query change
/// restarts a fixed-delay timer; only when the timer fires does a request go
/// out, so rapid edits produce at most one request per pause in typing.
/// State is published through a `watch` channel the presentation layer can
/// subscribe to.
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::{models::MovieSummary, services::catalog::CatalogService};

/// Default pause between the last keystroke and the search request.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Lifecycle of a search query.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
    /// Query is empty; nothing pending.
    Idle,
    /// Query changed; the debounce timer is running.
    Debouncing { query: String },
    /// Timer fired; the request is in flight.
    Loading { query: String },
    /// Results are available. Fetch failures settle with an empty result
    /// set; there is no distinct error state.
    Settled {
        query: String,
        results: Vec<MovieSummary>,
    },
}

pub struct SearchSession {
    catalog: Arc<CatalogService>,
    delay: Duration,
    /// Bumped on every query change. A timer or response whose generation is
    /// stale is a no-op, which makes cancellation idempotent even when the
    /// timer has already fired.
    generation: Arc<AtomicU64>,
    state_tx: Arc<watch::Sender<SearchState>>,
    pending: Option<JoinHandle<()>>,
}

impl SearchSession {
    pub fn new(catalog: Arc<CatalogService>, delay: Duration) -> Self {
        let (state_tx, _) = watch::channel(SearchState::Idle);
        Self {
            catalog,
            delay,
            generation: Arc::new(AtomicU64::new(0)),
            state_tx: Arc::new(state_tx),
            pending: None,
        }
    }

    /// Subscribes to state changes. Intermediate states may be coalesced;
    /// the receiver always observes the latest one.
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state_tx.subscribe()
    }

    /// Current state snapshot.
    pub fn state(&self) -> SearchState {
        self.state_tx.borrow().clone()
    }

    /// Applies a query-string change.
    ///
    /// Cancels any pending timer and, for a non-empty query, starts a fresh
    /// one. A request already in flight is left to complete; its result is
    /// discarded because its generation is stale (last-query-wins).
    pub fn set_query(&mut self, query: &str) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        if let Some(pending) = self.pending.take() {
            // Only a task still waiting on its timer is aborted outright; an
            // in-flight request runs to completion and no-ops on the stale
            // generation check.
            if matches!(&*self.state_tx.borrow(), SearchState::Debouncing { .. }) {
                pending.abort();
            }
        }

        let query = query.trim().to_string();
        if query.is_empty() {
            let _ = self.state_tx.send(SearchState::Idle);
            return;
        }

        let _ = self.state_tx.send(SearchState::Debouncing {
            query: query.clone(),
        });

        let catalog = Arc::clone(&self.catalog);
        let generations = Arc::clone(&self.generation);
        let state_tx = Arc::clone(&self.state_tx);
        let delay = self.delay;

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if generations.load(Ordering::SeqCst) != generation {
                // Superseded while the timer was pending.
                return;
            }

            let _ = state_tx.send(SearchState::Loading {
                query: query.clone(),
            });

            let results = catalog.search_movies(&query).await;

            if generations.load(Ordering::SeqCst) != generation {
                tracing::debug!(query = %query, "Discarding stale search results");
                return;
            }

            let _ = state_tx.send(SearchState::Settled { query, results });
        }));
    }
}

impl Drop for SearchSession {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

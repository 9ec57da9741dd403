//! Background cache warming.

use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use shell_cache::FragmentOrigin;
use shell_core::ViewName;
use shell_data::{FetchClient, FetchError, ResourceKind, Transport};

use crate::state::AppState;

/// Waits out the pause between initial load and preloading.
#[async_trait(?Send)]
pub trait Delay {
    /// Sleep for `duration`.
    async fn sleep(&self, duration: Duration);
}

/// A delay that returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait(?Send)]
impl Delay for NoDelay {
    async fn sleep(&self, _duration: Duration) {}
}

/// Result of preloading a single view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreloadOutcome {
    /// Fetched and stored by this pass.
    Loaded,
    /// Already cached, either before the pass or by a navigation during it.
    AlreadyCached,
    /// The fetch failed; the view stays uncached.
    Failed(FetchError),
}

/// Per-view results of a preload pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreloadReport {
    outcomes: BTreeMap<ViewName, PreloadOutcome>,
}

impl PreloadReport {
    fn record(&mut self, view: ViewName, outcome: PreloadOutcome) {
        self.outcomes.insert(view, outcome);
    }

    /// Outcome for a view, if it was part of the pass.
    pub fn outcome(&self, view: &ViewName) -> Option<&PreloadOutcome> {
        self.outcomes.get(view)
    }

    /// Views this pass fetched and stored.
    pub fn loaded(&self) -> Vec<&ViewName> {
        self.matching(|outcome| matches!(outcome, PreloadOutcome::Loaded))
    }

    /// Views that were already cached.
    pub fn already_cached(&self) -> Vec<&ViewName> {
        self.matching(|outcome| matches!(outcome, PreloadOutcome::AlreadyCached))
    }

    /// Views whose fetch failed.
    pub fn failed(&self) -> Vec<&ViewName> {
        self.matching(|outcome| matches!(outcome, PreloadOutcome::Failed(_)))
    }

    /// Number of views covered.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Whether the pass covered no views.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    fn matching(&self, predicate: impl Fn(&PreloadOutcome) -> bool) -> Vec<&ViewName> {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| predicate(outcome))
            .map(|(view, _)| view)
            .collect()
    }
}

/// Warms the fragment cache for every known view.
pub struct Preloader<T> {
    state: Rc<AppState>,
    client: Rc<FetchClient<T>>,
}

impl<T: Transport> Preloader<T> {
    /// Create a new preloader.
    pub fn new(state: Rc<AppState>, client: Rc<FetchClient<T>>) -> Self {
        Self { state, client }
    }

    /// Wait for the configured delay, then preload.
    pub async fn run_after<W: Delay>(&self, delay: &W) -> PreloadReport {
        delay.sleep(self.state.config().preload_delay()).await;
        self.run().await
    }

    /// Fetch every uncached view, at most `preload_concurrency` at a time.
    ///
    /// Each result is stored as soon as it arrives, with insert-if-absent
    /// semantics, so an entry a navigation stored first is never replaced.
    /// Failures are recorded in the report and otherwise ignored.
    pub async fn run(&self) -> PreloadReport {
        let config = self.state.config();
        let cache = self.state.cache();
        let client = self.client.as_ref();
        let width = config.preload_concurrency.max(1);

        let mut report = PreloadReport::default();
        let mut pending = Vec::new();
        for view in &config.views {
            if cache.contains(view) {
                report.record(view.clone(), PreloadOutcome::AlreadyCached);
            } else {
                pending.push(view.clone());
            }
        }

        let results: Vec<(ViewName, PreloadOutcome)> = stream::iter(pending)
            .map(move |view| async move {
                let path = config.view_path(&view);
                let outcome = match client.fetch_text(&path, ResourceKind::ViewFragment).await {
                    Ok(markup) => {
                        if cache.insert(view.clone(), markup, FragmentOrigin::Preload) {
                            PreloadOutcome::Loaded
                        } else {
                            PreloadOutcome::AlreadyCached
                        }
                    }
                    Err(err) => PreloadOutcome::Failed(err),
                };
                (view, outcome)
            })
            .buffer_unordered(width)
            .collect()
            .await;

        for (view, outcome) in results {
            report.record(view, outcome);
        }
        report
    }
}

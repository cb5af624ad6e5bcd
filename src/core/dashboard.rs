// src/core/dashboard.rs — Dashboard orchestrator
//
// Owns the view-relevant state (current summary, history list, loading flag)
// and reconciles user actions into single state transitions. All writes go
// through the one internal lock, so callers may share the orchestrator
// freely across tasks.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::api::{ApiGateway, Summary, HISTORY_LIMIT};
use crate::core::presenter::{NoticeLevel, Presenter};

#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub summary: Option<Summary>,
    pub history: Vec<Summary>,
    pub loading: bool,
}

pub struct Dashboard<G: ApiGateway> {
    gateway: Arc<G>,
    presenter: Arc<dyn Presenter>,
    state: Mutex<DashboardState>,
    /// Issue counter for overlapping refreshes: a settled refresh applies its
    /// update only if it is still the latest issued.
    refresh_seq: AtomicU64,
}

impl<G: ApiGateway> Dashboard<G> {
    pub fn new(gateway: Arc<G>, presenter: Arc<dyn Presenter>) -> Self {
        Self {
            gateway,
            presenter,
            state: Mutex::new(DashboardState::default()),
            refresh_seq: AtomicU64::new(0),
        }
    }

    /// Snapshot of the current view state.
    pub fn state(&self) -> DashboardState {
        self.state.lock().unwrap().clone()
    }

    /// Fetch summary and history concurrently and apply both once both
    /// settle. A missing or failed summary is absorbed into the empty
    /// dashboard state; a history failure is surfaced but leaves the
    /// last-known-good list untouched. Stale invocations (superseded by a
    /// newer refresh before settling) discard their results.
    pub async fn initialize(&self) {
        let seq = self.refresh_seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.lock().unwrap().loading = true;

        let (summary, history) = tokio::join!(
            self.gateway.fetch_summary(),
            self.gateway.fetch_history()
        );

        if seq != self.refresh_seq.load(Ordering::SeqCst) {
            tracing::debug!(seq, "discarding superseded dashboard refresh");
            return;
        }

        let mut state = self.state.lock().unwrap();
        match summary {
            Ok(Some(summary)) => state.summary = Some(summary),
            // No dataset yet: an empty dashboard is a valid first-use state.
            Ok(None) => {}
            Err(err) => {
                tracing::debug!(error = %err, "summary fetch failed, keeping previous summary");
            }
        }
        match history {
            Ok(mut entries) => {
                entries.truncate(HISTORY_LIMIT);
                state.history = entries;
            }
            Err(err) => {
                tracing::warn!(error = %err, "history fetch failed");
                self.presenter
                    .notify(NoticeLevel::Error, "Failed to load upload history");
            }
        }
        state.loading = false;
    }

    /// Full refetch after a confirmed upload; the view must reflect
    /// server-confirmed state, so no incremental merge.
    pub async fn on_upload_success(&self) {
        self.presenter
            .notify(NoticeLevel::Success, "File uploaded successfully");
        self.initialize().await;
    }

    /// Install a history entry as the current summary. No network call: the
    /// history payload already carries full summary fields.
    pub fn on_history_select(&self, entry: Summary) {
        self.state.lock().unwrap().summary = Some(entry);
        self.presenter.scroll_to_top();
    }

    /// Download the PDF report for the currently loaded dataset. A warning
    /// no-op when nothing (or nothing with an id) is loaded; the blob is
    /// handed straight to the presenter and never cached.
    pub async fn download_report(&self) {
        let target = {
            let state = self.state.lock().unwrap();
            state
                .summary
                .as_ref()
                .and_then(|s| s.id.map(|id| (id, s.report_filename())))
        };

        let Some((id, filename)) = target else {
            self.presenter.notify(
                NoticeLevel::Warning,
                "No dataset loaded to generate report for.",
            );
            return;
        };

        match self.gateway.fetch_report(id).await {
            Ok(bytes) => match self.presenter.save_file(&filename, &bytes) {
                Ok(()) => self
                    .presenter
                    .notify(NoticeLevel::Success, "Report downloaded successfully!"),
                Err(err) => {
                    tracing::warn!(error = %err, "report save failed");
                    self.presenter
                        .notify(NoticeLevel::Error, "Failed to save report.");
                }
            },
            Err(err) => {
                tracing::warn!(error = %err, "report fetch failed");
                self.presenter
                    .notify(NoticeLevel::Error, "Failed to download report.");
            }
        }
    }
}

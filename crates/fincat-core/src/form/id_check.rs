//! Debounced id-uniqueness probe.
//!
//! Mirrors the behavior of the catalog's id validator: 300 ms of input
//! quiet before the backend is asked, last value wins (a newer input aborts
//! a stale pending probe outright), the outcome of the last completed check
//! is remembered so an unchanged value is not re-checked, and a failing
//! backend counts as "available" rather than blocking entry.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::debug;

use crate::repository::ProductRepository;

/// Quiet period before the backend is asked about an id.
pub const ID_CHECK_DEBOUNCE: Duration = Duration::from_millis(300);

/// Outcome of feeding a new id value into the probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Probe {
    /// Empty input; no check applies.
    Skipped,
    /// The value matches the last completed check; its outcome is reused.
    Remembered(bool),
    /// A check was scheduled behind the debounce window.
    Scheduled,
}

struct PendingProbe {
    value: String,
    task: JoinHandle<bool>,
}

/// Debounced, deduplicated uniqueness checking against the backend.
///
/// Must be driven from within a Tokio runtime; each scheduled check runs
/// as a spawned task sleeping out the debounce window.
#[derive(Default)]
pub(crate) struct IdCheck {
    pending: Option<PendingProbe>,
    last: Option<(String, bool)>,
}

impl IdCheck {
    /// Feed a new input value, aborting any stale pending probe.
    pub fn schedule(&mut self, repo: &Arc<dyn ProductRepository>, value: &str) -> Probe {
        if let Some(stale) = self.pending.take() {
            stale.task.abort();
        }
        if value.is_empty() {
            return Probe::Skipped;
        }
        if let Some((last_value, exists)) = &self.last {
            if last_value == value {
                return Probe::Remembered(*exists);
            }
        }
        let repo = Arc::clone(repo);
        let probe_value = value.to_string();
        let task = tokio::spawn(async move {
            sleep(ID_CHECK_DEBOUNCE).await;
            match repo.verify_id_exists(&probe_value).await {
                Ok(exists) => exists,
                Err(err) => {
                    debug!(error = %err, "id check failed; treating the id as available");
                    false
                }
            }
        });
        self.pending = Some(PendingProbe {
            value: value.to_string(),
            task,
        });
        Probe::Scheduled
    }

    /// True while a scheduled check has not been settled.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Wait out the pending check and return `(value, exists)`.
    ///
    /// Returns `None` when nothing is pending or the probe was aborted
    /// before completing.
    pub async fn settle(&mut self) -> Option<(String, bool)> {
        let probe = self.pending.take()?;
        match probe.task.await {
            Ok(exists) => {
                self.last = Some((probe.value.clone(), exists));
                Some((probe.value, exists))
            }
            Err(_) => None,
        }
    }

    /// Forget pending and remembered state.
    pub fn reset(&mut self) {
        if let Some(stale) = self.pending.take() {
            stale.task.abort();
        }
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockRepository;

    fn repo() -> (Arc<MockRepository>, Arc<dyn ProductRepository>) {
        let mock = Arc::new(MockRepository::default());
        let as_trait: Arc<dyn ProductRepository> = mock.clone();
        (mock, as_trait)
    }

    #[tokio::test(start_paused = true)]
    async fn waits_out_the_debounce_window() {
        let (mock, repo) = repo();
        let mut check = IdCheck::default();

        assert_eq!(check.schedule(&repo, "trj-crd"), Probe::Scheduled);
        tokio::task::yield_now().await;

        tokio::time::advance(Duration::from_millis(299)).await;
        tokio::task::yield_now().await;
        assert!(mock.verify_calls().is_empty());
        assert!(check.is_pending());

        tokio::time::advance(Duration::from_millis(1)).await;
        let settled = check.settle().await;
        assert_eq!(settled, Some(("trj-crd".to_string(), false)));
        assert_eq!(mock.verify_calls(), ["trj-crd"]);
    }

    #[tokio::test(start_paused = true)]
    async fn newer_input_abandons_the_stale_probe() {
        let (mock, repo) = repo();
        let mut check = IdCheck::default();

        check.schedule(&repo, "tr");
        tokio::task::yield_now().await;
        tokio::time::advance(Duration::from_millis(150)).await;

        check.schedule(&repo, "trj");
        let settled = check.settle().await;
        assert_eq!(settled, Some(("trj".to_string(), false)));
        assert_eq!(mock.verify_calls(), ["trj"]);
    }

    #[tokio::test(start_paused = true)]
    async fn unchanged_value_reuses_the_remembered_outcome() {
        let (mock, repo) = repo();
        mock.mark_taken("trj-crd");
        let mut check = IdCheck::default();

        check.schedule(&repo, "trj-crd");
        assert_eq!(check.settle().await, Some(("trj-crd".to_string(), true)));

        assert_eq!(check.schedule(&repo, "trj-crd"), Probe::Remembered(true));
        assert!(!check.is_pending());
        assert_eq!(mock.verify_calls(), ["trj-crd"]);
    }

    #[tokio::test(start_paused = true)]
    async fn empty_input_skips_the_check() {
        let (mock, repo) = repo();
        let mut check = IdCheck::default();

        assert_eq!(check.schedule(&repo, ""), Probe::Skipped);
        assert!(!check.is_pending());
        assert!(check.settle().await.is_none());
        assert!(mock.verify_calls().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn backend_failure_counts_as_available() {
        let (mock, repo) = repo();
        mock.fail_verify
            .store(true, std::sync::atomic::Ordering::SeqCst);
        let mut check = IdCheck::default();

        check.schedule(&repo, "trj-crd");
        assert_eq!(check.settle().await, Some(("trj-crd".to_string(), false)));
        assert_eq!(mock.verify_calls(), ["trj-crd"]);
    }

    #[tokio::test(start_paused = true)]
    async fn reset_forgets_remembered_outcomes() {
        let (mock, repo) = repo();
        mock.mark_taken("trj-crd");
        let mut check = IdCheck::default();

        check.schedule(&repo, "trj-crd");
        check.settle().await;
        check.reset();

        // Same value is probed again after a reset.
        assert_eq!(check.schedule(&repo, "trj-crd"), Probe::Scheduled);
        check.settle().await;
        assert_eq!(mock.verify_calls(), ["trj-crd", "trj-crd"]);
    }
}

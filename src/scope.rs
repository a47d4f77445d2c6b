// Application-wide execution scope for work that outlives its caller

use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::task::TaskTracker;
use tracing::{debug, info, warn};

/// Runs jobs that must finish even when the screen that started them is gone
///
/// Jobs are detached tasks tracked for shutdown; dropping the returned
/// handle does not cancel them.
#[derive(Debug, Clone, Default)]
pub struct AppScope {
    tracker: TaskTracker,
}

impl AppScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn<F>(&self, name: &'static str, job: F) -> JoinHandle<F::Output>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        debug!(job = name, "Spawning application-scope job");
        self.tracker.spawn(job)
    }

    /// Number of jobs still running
    pub fn pending(&self) -> usize {
        self.tracker.len()
    }

    /// Close the scope and wait for running jobs
    ///
    /// Returns true if every job finished within `grace`.
    pub async fn shutdown(&self, grace: Duration) -> bool {
        self.tracker.close();
        let pending = self.tracker.len();
        if pending > 0 {
            info!(pending, "Waiting for application-scope jobs");
        }

        match tokio::time::timeout(grace, self.tracker.wait()).await {
            Ok(()) => true,
            Err(_) => {
                warn!(
                    pending = self.tracker.len(),
                    grace_ms = grace.as_millis() as u64,
                    "Shutdown grace period elapsed with jobs still running"
                );
                false
            }
        }
    }
}

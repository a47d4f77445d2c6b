// Filter pipeline: search text x preferences x live task query

use crate::error::Result;
use crate::filter::TaskQuery;
use crate::models::{FilterPreferences, Task};
use crate::preferences::PreferenceStore;
use crate::store::{LiveQuery, TaskStore};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Live, ordered list of visible tasks
///
/// A background driver owns the single active store subscription. Whenever
/// the search text or the preferences change it drops that subscription and
/// opens one for the latest parameters, so results computed for superseded
/// parameters are never published.
pub struct FilterPipeline {
    search: watch::Sender<String>,
    tasks: watch::Receiver<Vec<Task>>,
    preferences: PreferenceStore,
    driver: JoinHandle<()>,
}

impl FilterPipeline {
    /// Start the pipeline on the current tokio runtime
    ///
    /// The first query runs before this returns, so the list is never a
    /// placeholder.
    pub async fn spawn(store: TaskStore, preferences: PreferenceStore) -> Result<Self> {
        let (search, search_rx) = watch::channel(String::new());
        let mut prefs = preferences.observe();

        let query = TaskQuery::with_preferences(String::new(), *prefs.borrow_and_update());
        let live = store.query(query).await?;
        let (tasks_tx, tasks) = watch::channel(live.current());

        let driver = tokio::spawn(drive(store, search_rx, prefs, Some(live), tasks_tx));

        Ok(Self {
            search,
            tasks,
            preferences,
            driver,
        })
    }

    /// Replace the search text; an unchanged value does not requery
    pub fn set_search_query(&self, text: impl Into<String>) {
        let text = text.into();
        self.search.send_if_modified(|current| {
            if *current == text {
                return false;
            }
            *current = text;
            true
        });
    }

    pub fn search_query(&self) -> String {
        self.search.borrow().clone()
    }

    /// Subscribe to the visible task list
    ///
    /// The receiver starts out marked as changed so the latest list is
    /// delivered first.
    pub fn tasks(&self) -> watch::Receiver<Vec<Task>> {
        let mut receiver = self.tasks.clone();
        receiver.mark_changed();
        receiver
    }

    pub fn current_tasks(&self) -> Vec<Task> {
        self.tasks.borrow().clone()
    }

    /// Subscribe to the filter preferences shown alongside the list
    pub fn preferences(&self) -> watch::Receiver<FilterPreferences> {
        self.preferences.observe()
    }
}

impl Drop for FilterPipeline {
    fn drop(&mut self) {
        self.driver.abort();
    }
}

enum Wake {
    Input,
    Rows(Vec<Task>),
    Closed,
}

async fn drive(
    store: TaskStore,
    mut search: watch::Receiver<String>,
    mut prefs: watch::Receiver<FilterPreferences>,
    mut opened: Option<LiveQuery>,
    tasks: watch::Sender<Vec<Task>>,
) {
    loop {
        let mut live = match opened.take() {
            Some(live) => live,
            None => {
                let text = search.borrow_and_update().clone();
                let query = TaskQuery::with_preferences(text, *prefs.borrow_and_update());
                debug!(%query, "Switching live query");

                match store.query(query.clone()).await {
                    Ok(live) => live,
                    Err(e) => {
                        warn!(%query, error = %e, "Task query failed, waiting for new filter input");
                        // Rows for the previous parameters no longer apply
                        tasks.send_if_modified(|current| {
                            let had_rows = !current.is_empty();
                            current.clear();
                            had_rows
                        });

                        let changed = tokio::select! {
                            changed = search.changed() => changed.is_ok(),
                            changed = prefs.changed() => changed.is_ok(),
                        };
                        if !changed {
                            return;
                        }
                        continue;
                    }
                }
            }
        };

        publish(&tasks, &search, &prefs, live.query(), live.current());

        loop {
            let wake = tokio::select! {
                changed = search.changed() => if changed.is_ok() { Wake::Input } else { Wake::Closed },
                changed = prefs.changed() => if changed.is_ok() { Wake::Input } else { Wake::Closed },
                rows = live.next() => rows.map_or(Wake::Closed, Wake::Rows),
            };

            match wake {
                Wake::Rows(rows) => {
                    publish(&tasks, &search, &prefs, live.query(), rows);
                }
                // The current subscription is dropped before the next one opens
                Wake::Input => break,
                Wake::Closed => return,
            }
        }
    }
}

/// Publish rows computed for `query` unless the inputs have moved on
///
/// The inputs are checked while the list is locked for writing, so rows for
/// superseded parameters are rejected even when an input changes during the
/// publish. Input borrows are never held while waiting for the list.
fn publish(
    tasks: &watch::Sender<Vec<Task>>,
    search: &watch::Receiver<String>,
    prefs: &watch::Receiver<FilterPreferences>,
    query: &TaskQuery,
    rows: Vec<Task>,
) -> bool {
    let count = rows.len();
    let mut accepted = false;
    tasks.send_if_modified(|current| {
        let is_current = {
            let search = search.borrow();
            let prefs = prefs.borrow();
            query.is_for(&search, &prefs)
        };
        if !is_current {
            return false;
        }

        accepted = true;
        if *current == rows {
            return false;
        }
        *current = rows;
        true
    });

    if accepted {
        debug!(%query, count, "Published visible tasks");
    } else {
        debug!(%query, "Discarding rows for superseded query");
    }
    accepted
}

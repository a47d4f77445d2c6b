// Task store: SQLite task table with live queries

use crate::error::{Error, Result};
use crate::filter::TaskQuery;
use crate::models::{Task, TaskId, UNASSIGNED_ID, now_ms};
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, info, warn};

const CURRENT_VERSION: u32 = 1;

const TASK_COLUMNS: &str = "name, important, completed, created, id";

/// Inserted once, when the database file is first created
const EXAMPLE_TASKS: &[(&str, bool, bool)] = &[
    ("Wash the dishes", false, false),
    ("Do the laundry", false, false),
    ("Buy groceries", true, false),
    ("Prepare food", false, true),
    ("Call mom", false, false),
    ("Visit grandma", false, true),
    ("Repair my bike", false, false),
    ("Call Project supervisor", false, false),
];

/// Initial content of a newly created database
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seed {
    /// Populate with the built-in example tasks
    Examples,
    Empty,
}

/// Durable task table with live query subscriptions
///
/// Cloning is cheap and every clone shares the same connection. All access
/// to the connection is serialized, so writes apply in submission order and
/// each live query is re-evaluated under the same lock as the write that
/// affected it.
#[derive(Clone)]
pub struct TaskStore {
    inner: Arc<Inner>,
}

struct Inner {
    db: Mutex<Connection>,
    subscriptions: Mutex<Subscriptions>,
}

#[derive(Default)]
struct Subscriptions {
    next_id: u64,
    active: HashMap<u64, Subscription>,
}

struct Subscription {
    query: TaskQuery,
    sink: watch::Sender<Vec<Task>>,
}

impl TaskStore {
    /// Open or create the task database at the given file path
    pub fn open<P: AsRef<Path>>(path: P, seed: Seed) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let db = Connection::open(path)?;
        info!(path = %path.display(), "Opened task database");
        Self::from_connection(db, seed)
    }

    /// Open a private in-memory database
    pub fn open_in_memory(seed: Seed) -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?, seed)
    }

    fn from_connection(mut db: Connection, seed: Seed) -> Result<Self> {
        db.busy_timeout(Duration::from_secs(5))?;

        if Self::create_schema(&mut db)? && seed == Seed::Examples {
            Self::seed_examples(&db)?;
        }

        Ok(Self {
            inner: Arc::new(Inner {
                db: Mutex::new(db),
                subscriptions: Mutex::new(Subscriptions::default()),
            }),
        })
    }

    /// Create the task table; returns true when the database was new
    fn create_schema(db: &mut Connection) -> Result<bool> {
        let version: u32 = db.query_row("PRAGMA user_version", [], |row| row.get(0))?;
        if version >= CURRENT_VERSION {
            return Ok(false);
        }

        debug!("Creating database schema");

        let tx = db.transaction()?;
        tx.execute_batch(&format!(
            r#"
            CREATE TABLE IF NOT EXISTS task_table (
                name TEXT NOT NULL,
                important INTEGER NOT NULL DEFAULT 0,
                completed INTEGER NOT NULL DEFAULT 0,
                created INTEGER NOT NULL,
                id INTEGER PRIMARY KEY AUTOINCREMENT
            );

            PRAGMA user_version = {CURRENT_VERSION};
            "#
        ))?;
        tx.commit()?;

        Ok(true)
    }

    fn seed_examples(db: &Connection) -> Result<()> {
        // Seeded rows predate anything inserted after open
        let base = now_ms() - EXAMPLE_TASKS.len() as i64;
        for (offset, (name, important, completed)) in EXAMPLE_TASKS.iter().enumerate() {
            let task = Task {
                name: (*name).to_string(),
                important: *important,
                completed: *completed,
                created: base + offset as i64,
                id: UNASSIGNED_ID,
            };
            Self::insert_row(db, &task)?;
        }
        info!(count = EXAMPLE_TASKS.len(), "Seeded example tasks");
        Ok(())
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Insert a task, returning its id
    ///
    /// A task without an id gets a fresh one. A task carrying an id is
    /// written under that id, replacing any row that holds it.
    pub async fn insert(&self, task: Task) -> Result<TaskId> {
        self.with_db(move |inner, db| {
            let replaced = if task.is_persisted() {
                Self::get_row(db, task.id)?
            } else {
                None
            };

            let id = Self::insert_row(db, &task)?;
            debug!(id, name = %task.name, "insert: stored task");

            let mut touched = vec![Task { id, ..task }];
            touched.extend(replaced);
            inner.notify(db, &touched);
            Ok(id)
        })
        .await
    }

    /// Replace the row with the same id; `created` is never rewritten
    pub async fn update(&self, task: Task) -> Result<()> {
        self.with_db(move |inner, db| {
            let previous = Self::get_row(db, task.id)?.ok_or(Error::NotFound(task.id))?;

            db.execute(
                "UPDATE task_table SET name = ?1, important = ?2, completed = ?3 WHERE id = ?4",
                params![task.name, task.important, task.completed, task.id],
            )?;
            debug!(id = task.id, "update: stored task");

            let updated = Task {
                created: previous.created,
                ..task
            };
            inner.notify(db, &[previous, updated]);
            Ok(())
        })
        .await
    }

    /// Set only the completed flag of the row with the given id
    pub async fn set_completed(&self, id: TaskId, completed: bool) -> Result<()> {
        self.with_db(move |inner, db| {
            let previous = Self::get_row(db, id)?.ok_or(Error::NotFound(id))?;

            db.execute(
                "UPDATE task_table SET completed = ?1 WHERE id = ?2",
                params![completed, id],
            )?;
            debug!(id, completed, "set_completed: stored flag");

            let updated = Task {
                completed,
                ..previous.clone()
            };
            inner.notify(db, &[previous, updated]);
            Ok(())
        })
        .await
    }

    /// Delete the row with the task's id; deleting an absent task succeeds
    pub async fn delete(&self, task: &Task) -> Result<()> {
        let id = task.id;
        self.with_db(move |inner, db| {
            let Some(removed) = Self::get_row(db, id)? else {
                debug!(id, "delete: task already absent");
                return Ok(());
            };

            db.execute("DELETE FROM task_table WHERE id = ?1", [id])?;
            debug!(id, "delete: removed task");

            inner.notify(db, &[removed]);
            Ok(())
        })
        .await
    }

    /// Delete every completed task in one transaction, returning how many went
    pub async fn delete_completed(&self) -> Result<usize> {
        self.with_db(|inner, db| {
            let tx = db.transaction()?;
            let removed = Self::select(
                &tx,
                &format!("SELECT {TASK_COLUMNS} FROM task_table WHERE completed = 1"),
            )?;
            tx.execute("DELETE FROM task_table WHERE completed = 1", [])?;
            tx.commit()?;

            info!(count = removed.len(), "delete_completed: removed completed tasks");
            inner.notify(db, &removed);
            Ok(removed.len())
        })
        .await
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Get a task by id
    pub async fn get(&self, id: TaskId) -> Result<Option<Task>> {
        self.with_db(move |_, db| Self::get_row(db, id)).await
    }

    /// One-time snapshot of the tasks matching a query
    pub async fn list(&self, query: &TaskQuery) -> Result<Vec<Task>> {
        let query = query.clone();
        self.with_db(move |_, db| Self::fetch(db, &query)).await
    }

    /// Subscribe to the ordered result of a query
    ///
    /// The returned handle holds the current result and receives a fresh one
    /// after every write that could change it. Dropping the handle cancels
    /// the subscription.
    pub async fn query(&self, query: TaskQuery) -> Result<LiveQuery> {
        let store = self.clone();
        self.with_db(move |inner, db| {
            let rows = Self::fetch(db, &query)?;
            let (sink, receiver) = watch::channel(rows);
            let id = inner.lock_subscriptions().register(query.clone(), sink);
            debug!(subscription = id, %query, "query: registered live query");

            Ok(LiveQuery {
                id,
                query,
                receiver,
                store,
            })
        })
        .await
    }

    /// Number of live queries currently registered
    pub fn live_query_count(&self) -> usize {
        self.inner.lock_subscriptions().active.len()
    }

    // ========================================================================
    // Helper methods
    // ========================================================================

    async fn with_db<F, R>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&Inner, &mut Connection) -> Result<R> + Send + 'static,
        R: Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        tokio::task::spawn_blocking(move || {
            let mut db = inner.lock_db();
            f(inner.as_ref(), &mut *db)
        })
        .await?
    }

    fn insert_row(db: &Connection, task: &Task) -> Result<TaskId> {
        if task.is_persisted() {
            db.execute(
                "INSERT OR REPLACE INTO task_table (name, important, completed, created, id)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![task.name, task.important, task.completed, task.created, task.id],
            )?;
            Ok(task.id)
        } else {
            db.execute(
                "INSERT INTO task_table (name, important, completed, created)
                 VALUES (?1, ?2, ?3, ?4)",
                params![task.name, task.important, task.completed, task.created],
            )?;
            Ok(db.last_insert_rowid())
        }
    }

    fn get_row(db: &Connection, id: TaskId) -> Result<Option<Task>> {
        let task = db
            .query_row(
                &format!("SELECT {TASK_COLUMNS} FROM task_table WHERE id = ?1"),
                [id],
                parse_task_row,
            )
            .optional()?;
        Ok(task)
    }

    fn fetch(db: &Connection, query: &TaskQuery) -> Result<Vec<Task>> {
        // instr() keeps the search case-sensitive, unlike LIKE
        let sql = format!(
            "SELECT {TASK_COLUMNS} FROM task_table
             WHERE (?1 = 0 OR completed = 0)
               AND (?2 = '' OR instr(name, ?2) > 0)
             ORDER BY {}",
            query.order_by_sql()
        );

        let mut stmt = db.prepare(&sql)?;
        let rows = stmt.query_map(params![query.hide_completed, query.search], parse_task_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    fn select(db: &Connection, sql: &str) -> Result<Vec<Task>> {
        let mut stmt = db.prepare(sql)?;
        let rows = stmt.query_map([], parse_task_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }
}

impl Inner {
    // A poisoned lock still guards a usable connection
    fn lock_db(&self) -> MutexGuard<'_, Connection> {
        self.db.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn lock_subscriptions(&self) -> MutexGuard<'_, Subscriptions> {
        self.subscriptions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Re-evaluate every live query that any of the touched rows could affect
    ///
    /// `touched` holds the before and after images of the written rows.
    fn notify(&self, db: &Connection, touched: &[Task]) {
        let mut subscriptions = self.lock_subscriptions();
        subscriptions.active.retain(|_, sub| !sub.sink.is_closed());

        for (id, sub) in &subscriptions.active {
            if !touched.iter().any(|task| sub.query.matches(task)) {
                continue;
            }

            match TaskStore::fetch(db, &sub.query) {
                Ok(rows) => {
                    let changed = sub.sink.send_if_modified(|current| {
                        if *current == rows {
                            return false;
                        }
                        *current = rows;
                        true
                    });
                    debug!(subscription = *id, changed, "notify: re-evaluated live query");
                }
                Err(e) => {
                    warn!(subscription = *id, error = %e, "notify: failed to re-evaluate live query");
                }
            }
        }
    }
}

impl Subscriptions {
    fn register(&mut self, query: TaskQuery, sink: watch::Sender<Vec<Task>>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.active.insert(id, Subscription { query, sink });
        id
    }
}

fn parse_task_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        name: row.get("name")?,
        important: row.get("important")?,
        completed: row.get("completed")?,
        created: row.get("created")?,
        id: row.get("id")?,
    })
}

/// Handle to a registered live query
///
/// Dropping it unregisters the query from the store.
pub struct LiveQuery {
    id: u64,
    query: TaskQuery,
    receiver: watch::Receiver<Vec<Task>>,
    store: TaskStore,
}

impl LiveQuery {
    pub fn query(&self) -> &TaskQuery {
        &self.query
    }

    /// Latest result set
    pub fn current(&self) -> Vec<Task> {
        self.receiver.borrow().clone()
    }

    /// Wait for the next result set
    ///
    /// Several writes in quick succession may be observed as one result.
    /// Returns `None` if the subscription was closed.
    pub async fn next(&mut self) -> Option<Vec<Task>> {
        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().clone())
    }
}

impl Drop for LiveQuery {
    fn drop(&mut self) {
        self.store.inner.lock_subscriptions().active.remove(&self.id);
        debug!(subscription = self.id, "query: unregistered live query");
    }
}

#[cfg(test)]
impl TaskStore {
    /// Run raw SQL against the connection, bypassing notification
    pub(crate) fn execute_batch(&self, sql: &str) -> Result<()> {
        self.inner.lock_db().execute_batch(sql)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SortOrder;
    use tempfile::TempDir;
    use tokio::time::timeout;

    fn all(sort_order: SortOrder) -> TaskQuery {
        TaskQuery::new("", sort_order, false)
    }

    fn names(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_store_open_creates_database_and_seeds() {
        let temp = TempDir::new().unwrap();
        let db_path = temp.path().join("data/tasks.db");

        let store = TaskStore::open(&db_path, Seed::Examples).unwrap();
        assert!(db_path.exists());

        let tasks = store.list(&all(SortOrder::ByDate)).await.unwrap();
        assert_eq!(tasks.len(), EXAMPLE_TASKS.len());
        // Important first, then creation order
        assert_eq!(tasks[0].name, "Buy groceries");
        assert_eq!(tasks[1].name, "Wash the dishes");
        assert_eq!(tasks[2].name, "Do the laundry");
    }

    #[tokio::test]
    async fn test_reopen_does_not_seed_again() {
        let temp = TempDir::new().unwrap();
        let db_path = temp.path().join("tasks.db");

        {
            let store = TaskStore::open(&db_path, Seed::Examples).unwrap();
            let first = store.list(&all(SortOrder::ByDate)).await.unwrap();
            store.delete(&first[0]).await.unwrap();
        }

        let store = TaskStore::open(&db_path, Seed::Examples).unwrap();
        let tasks = store.list(&all(SortOrder::ByDate)).await.unwrap();
        assert_eq!(tasks.len(), EXAMPLE_TASKS.len() - 1);
    }

    #[tokio::test]
    async fn test_insert_assigns_unique_ids() {
        let store = TaskStore::open_in_memory(Seed::Empty).unwrap();

        let a = store.insert(Task::new("first")).await.unwrap();
        let b = store.insert(Task::new("second")).await.unwrap();
        assert_ne!(a, UNASSIGNED_ID);
        assert_ne!(a, b);

        let loaded = store.get(b).await.unwrap().unwrap();
        assert_eq!(loaded.name, "second");
        assert_eq!(loaded.id, b);
    }

    #[tokio::test]
    async fn test_query_search_matches_substring() {
        let store = TaskStore::open_in_memory(Seed::Empty).unwrap();
        store.insert(Task::new("Buy milk")).await.unwrap();
        store.insert(Task::new("Walk dog")).await.unwrap();

        let hits = store.list(&TaskQuery::new("Buy milk", SortOrder::ByDate, false)).await.unwrap();
        assert_eq!(names(&hits), vec!["Buy milk"]);

        let none = store
            .list(&TaskQuery::new("Buy milk_nomatch", SortOrder::ByDate, false))
            .await
            .unwrap();
        assert!(none.is_empty());

        // Case-sensitive
        let lower = store.list(&TaskQuery::new("buy", SortOrder::ByDate, false)).await.unwrap();
        assert!(lower.is_empty());

        let everything = store.list(&all(SortOrder::ByDate)).await.unwrap();
        assert_eq!(everything.len(), 2);
    }

    #[tokio::test]
    async fn test_update_missing_task_is_not_found() {
        let store = TaskStore::open_in_memory(Seed::Empty).unwrap();

        let mut ghost = Task::new("ghost");
        ghost.id = 99;
        let err = store.update(ghost).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(99)));
    }

    #[tokio::test]
    async fn test_update_keeps_created() {
        let store = TaskStore::open_in_memory(Seed::Empty).unwrap();
        let id = store.insert(Task::new("draft")).await.unwrap();
        let original = store.get(id).await.unwrap().unwrap();

        let mut edited = original.clone();
        edited.name = "final".to_string();
        edited.important = true;
        edited.created = 1;
        store.update(edited).await.unwrap();

        let loaded = store.get(id).await.unwrap().unwrap();
        assert_eq!(loaded.name, "final");
        assert!(loaded.important);
        assert_eq!(loaded.created, original.created);
    }

    #[tokio::test]
    async fn test_set_completed_touches_only_the_flag() {
        let store = TaskStore::open_in_memory(Seed::Empty).unwrap();
        let id = store.insert(Task::new("draft")).await.unwrap();
        let mut live = store.query(TaskQuery::new("", SortOrder::ByDate, true)).await.unwrap();

        let edited = Task {
            name: "final".to_string(),
            important: true,
            ..store.get(id).await.unwrap().unwrap()
        };
        store.update(edited).await.unwrap();
        live.next().await.unwrap();

        store.set_completed(id, true).await.unwrap();
        let rows = timeout(Duration::from_secs(1), live.next()).await.unwrap().unwrap();
        assert!(rows.is_empty());

        let loaded = store.get(id).await.unwrap().unwrap();
        assert_eq!(loaded.name, "final");
        assert!(loaded.important);
        assert!(loaded.completed);

        let err = store.set_completed(id + 1, true).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(missing) if missing == id + 1));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = TaskStore::open_in_memory(Seed::Empty).unwrap();
        let id = store.insert(Task::new("once")).await.unwrap();
        let task = store.get(id).await.unwrap().unwrap();

        store.delete(&task).await.unwrap();
        store.delete(&task).await.unwrap();

        assert!(store.get(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_hide_completed_round_trip() {
        let store = TaskStore::open_in_memory(Seed::Empty).unwrap();
        let id = store.insert(Task::new("finish report")).await.unwrap();
        let task = store.get(id).await.unwrap().unwrap();

        store.update(task.completed(true)).await.unwrap();

        let hidden = store.list(&TaskQuery::new("", SortOrder::ByDate, true)).await.unwrap();
        assert!(hidden.is_empty());

        let shown = store.list(&TaskQuery::new("", SortOrder::ByDate, false)).await.unwrap();
        assert_eq!(shown.len(), 1);
        assert!(shown[0].completed);
    }

    #[tokio::test]
    async fn test_importance_wins_over_name() {
        let store = TaskStore::open_in_memory(Seed::Empty).unwrap();
        store.insert(Task::new("A")).await.unwrap();
        store.insert(Task::new("B").important(true)).await.unwrap();
        store.insert(Task::new("C")).await.unwrap();

        let by_name = store.list(&all(SortOrder::ByName)).await.unwrap();
        assert_eq!(names(&by_name), vec!["B", "A", "C"]);
    }

    #[tokio::test]
    async fn test_sort_by_date_uses_created() {
        let store = TaskStore::open_in_memory(Seed::Empty).unwrap();
        let mut late = Task::new("alpha");
        late.created = 2_000;
        let mut early = Task::new("zulu");
        early.created = 1_000;
        store.insert(late).await.unwrap();
        store.insert(early).await.unwrap();

        let by_date = store.list(&all(SortOrder::ByDate)).await.unwrap();
        assert_eq!(names(&by_date), vec!["zulu", "alpha"]);

        let by_name = store.list(&all(SortOrder::ByName)).await.unwrap();
        assert_eq!(names(&by_name), vec!["alpha", "zulu"]);
    }

    #[tokio::test]
    async fn test_insert_with_id_reuses_it() {
        let store = TaskStore::open_in_memory(Seed::Empty).unwrap();
        let id = store.insert(Task::new("keep me")).await.unwrap();
        let task = store.get(id).await.unwrap().unwrap();

        store.delete(&task).await.unwrap();
        let restored = store.insert(task.clone()).await.unwrap();

        assert_eq!(restored, id);
        assert_eq!(store.get(id).await.unwrap().unwrap(), task);
    }

    #[tokio::test]
    async fn test_delete_completed() {
        let store = TaskStore::open_in_memory(Seed::Empty).unwrap();
        for i in 0..3 {
            store.insert(Task::new(format!("done {i}")).completed(true)).await.unwrap();
        }
        store.insert(Task::new("open 1")).await.unwrap();
        store.insert(Task::new("open 2")).await.unwrap();

        let removed = store.delete_completed().await.unwrap();
        assert_eq!(removed, 3);

        let remaining = store.list(&all(SortOrder::ByName)).await.unwrap();
        assert_eq!(names(&remaining), vec!["open 1", "open 2"]);
    }

    #[tokio::test]
    async fn test_live_query_receives_writes() {
        let store = TaskStore::open_in_memory(Seed::Empty).unwrap();
        let mut live = store.query(all(SortOrder::ByDate)).await.unwrap();
        assert!(live.current().is_empty());

        let id = store.insert(Task::new("Buy milk")).await.unwrap();
        let rows = timeout(Duration::from_secs(1), live.next()).await.unwrap().unwrap();
        assert_eq!(names(&rows), vec!["Buy milk"]);

        let task = store.get(id).await.unwrap().unwrap();
        store.delete(&task).await.unwrap();
        let rows = timeout(Duration::from_secs(1), live.next()).await.unwrap().unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_live_query_ignores_unrelated_writes() {
        let store = TaskStore::open_in_memory(Seed::Empty).unwrap();
        let mut live = store.query(TaskQuery::new("groceries", SortOrder::ByDate, false)).await.unwrap();

        store.insert(Task::new("Walk dog")).await.unwrap();
        assert!(timeout(Duration::from_millis(50), live.next()).await.is_err());

        store.insert(Task::new("Buy groceries")).await.unwrap();
        let rows = timeout(Duration::from_secs(1), live.next()).await.unwrap().unwrap();
        assert_eq!(names(&rows), vec!["Buy groceries"]);
    }

    #[tokio::test]
    async fn test_live_query_sees_task_leave_the_result() {
        let store = TaskStore::open_in_memory(Seed::Empty).unwrap();
        let id = store.insert(Task::new("laundry")).await.unwrap();
        let mut live = store.query(TaskQuery::new("", SortOrder::ByDate, true)).await.unwrap();
        assert_eq!(live.current().len(), 1);

        let task = store.get(id).await.unwrap().unwrap();
        store.update(task.completed(true)).await.unwrap();

        let rows = timeout(Duration::from_secs(1), live.next()).await.unwrap().unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_dropping_live_query_unregisters() {
        let store = TaskStore::open_in_memory(Seed::Empty).unwrap();
        let first = store.query(all(SortOrder::ByDate)).await.unwrap();
        let second = store.query(all(SortOrder::ByName)).await.unwrap();
        assert_eq!(store.live_query_count(), 2);

        drop(first);
        assert_eq!(store.live_query_count(), 1);
        assert_eq!(second.query().sort_order, SortOrder::ByName);

        drop(second);
        assert_eq!(store.live_query_count(), 0);
    }
}

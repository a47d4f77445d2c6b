// Preference store: filter settings in a small JSON key-value file

use crate::error::{Error, Result};
use crate::models::{FilterPreferences, SortOrder};
use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::{Mutex, watch};
use tracing::{debug, warn};

/// Durable holder of the single current `FilterPreferences`
///
/// The file holds the keys `sort_order` ("BY_NAME" | "BY_DATE") and
/// `hide_completed`. Edits are read-modify-write cycles serialized within the
/// process and guarded by an exclusive file lock across processes.
#[derive(Clone)]
pub struct PreferenceStore {
    inner: Arc<Inner>,
}

struct Inner {
    path: PathBuf,
    write_lock: Mutex<()>,
    current: watch::Sender<FilterPreferences>,
}

impl PreferenceStore {
    /// Open the preference file at the given path
    ///
    /// A missing or unreadable file yields the default preferences.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let initial = read_or_default(&path);
        let (current, _) = watch::channel(initial);

        Ok(Self {
            inner: Arc::new(Inner {
                path,
                write_lock: Mutex::new(()),
                current,
            }),
        })
    }

    pub fn path(&self) -> &Path {
        &self.inner.path
    }

    /// Current preferences
    pub fn current(&self) -> FilterPreferences {
        *self.inner.current.borrow()
    }

    /// Stream of preferences
    ///
    /// The receiver starts out marked as changed, so the first `changed()`
    /// completes at once with the current value. Every later update is
    /// delivered as well.
    pub fn observe(&self) -> watch::Receiver<FilterPreferences> {
        let mut receiver = self.inner.current.subscribe();
        receiver.mark_changed();
        receiver
    }

    pub async fn update_sort_order(&self, sort_order: SortOrder) -> Result<()> {
        self.edit(move |prefs| prefs.sort_order = sort_order).await
    }

    pub async fn update_hide_completed(&self, hide_completed: bool) -> Result<()> {
        self.edit(move |prefs| prefs.hide_completed = hide_completed).await
    }

    async fn edit<F>(&self, apply: F) -> Result<()>
    where
        F: FnOnce(&mut FilterPreferences) + Send + 'static,
    {
        let _guard = self.inner.write_lock.lock().await;
        let path = self.inner.path.clone();

        let updated = tokio::task::spawn_blocking(move || edit_file(&path, apply)).await??;
        debug!(sort_order = %updated.sort_order, hide_completed = updated.hide_completed, "Updated preferences");

        self.inner.current.send_if_modified(|current| {
            if *current == updated {
                return false;
            }
            *current = updated;
            true
        });
        Ok(())
    }
}

fn read_file(path: &Path) -> Result<FilterPreferences> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(serde_json::from_str(&content)?),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(FilterPreferences::default()),
        Err(e) => Err(e.into()),
    }
}

fn read_or_default(path: &Path) -> FilterPreferences {
    match read_file(path) {
        Ok(prefs) => prefs,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Error reading preferences, using defaults");
            FilterPreferences::default()
        }
    }
}

fn edit_file<F>(path: &Path, apply: F) -> Result<FilterPreferences>
where
    F: FnOnce(&mut FilterPreferences),
{
    let lock_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(false)
        .open(path.with_extension("lock"))?;

    // Acquire exclusive lock before reading
    lock_file.lock_exclusive()?;

    let mut prefs = match read_file(path) {
        Ok(prefs) => prefs,
        Err(Error::Serialization(e)) => {
            warn!(path = %path.display(), error = %e, "Discarding unreadable preferences");
            FilterPreferences::default()
        }
        Err(e) => return Err(e),
    };
    apply(&mut prefs);

    let tmp_path = path.with_extension("json.tmp");
    {
        let mut file = File::create(&tmp_path)?;
        serde_json::to_writer_pretty(&mut file, &prefs)?;
        writeln!(file)?;
        file.sync_all()?;
    }
    fs::rename(&tmp_path, path)?;

    // Lock is automatically released when lock_file is dropped
    Ok(prefs)
}

// Query parameters for the visible task list

use crate::models::{FilterPreferences, SortOrder, Task};

/// Parameters of a task list query
///
/// A task matches when its name contains `search` (case-sensitive, empty
/// matches everything) and it is not hidden by `hide_completed`.
/// Results order by importance first, then by name or creation time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TaskQuery {
    pub search: String,
    pub sort_order: SortOrder,
    pub hide_completed: bool,
}

impl TaskQuery {
    pub fn new(search: impl Into<String>, sort_order: SortOrder, hide_completed: bool) -> Self {
        Self {
            search: search.into(),
            sort_order,
            hide_completed,
        }
    }

    /// Query for the given search text under the persisted preferences
    pub fn with_preferences(search: impl Into<String>, prefs: FilterPreferences) -> Self {
        Self::new(search, prefs.sort_order, prefs.hide_completed)
    }

    /// In-memory version of the SQL predicate
    pub fn matches(&self, task: &Task) -> bool {
        (!self.hide_completed || !task.completed) && task.name.contains(self.search.as_str())
    }

    /// Whether this query was built from exactly these inputs
    pub fn is_for(&self, search: &str, prefs: &FilterPreferences) -> bool {
        self.search == search
            && self.sort_order == prefs.sort_order
            && self.hide_completed == prefs.hide_completed
    }

    pub(crate) fn order_by_sql(&self) -> &'static str {
        match self.sort_order {
            SortOrder::ByName => "important DESC, name ASC, id ASC",
            SortOrder::ByDate => "important DESC, created ASC, id ASC",
        }
    }
}

impl std::fmt::Display for TaskQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "search={:?} sort={} hide_completed={}",
            self.search, self.sort_order, self.hide_completed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_search_is_case_sensitive() {
        let task = Task::new("Buy milk");
        assert!(TaskQuery::new("", SortOrder::ByDate, false).matches(&task));
        assert!(TaskQuery::new("milk", SortOrder::ByDate, false).matches(&task));
        assert!(!TaskQuery::new("Milk", SortOrder::ByDate, false).matches(&task));
        assert!(!TaskQuery::new("Buy milk_nomatch", SortOrder::ByDate, false).matches(&task));
    }

    #[test]
    fn test_hide_completed_only_hides_completed() {
        let open = Task::new("open");
        let done = Task::new("done").completed(true);

        let hiding = TaskQuery::new("", SortOrder::ByName, true);
        assert!(hiding.matches(&open));
        assert!(!hiding.matches(&done));

        let showing = TaskQuery::new("", SortOrder::ByName, false);
        assert!(showing.matches(&open));
        assert!(showing.matches(&done));
    }

    #[test]
    fn test_order_by_sql() {
        assert_eq!(
            TaskQuery::new("", SortOrder::ByName, false).order_by_sql(),
            "important DESC, name ASC, id ASC"
        );
        assert_eq!(
            TaskQuery::new("", SortOrder::ByDate, false).order_by_sql(),
            "important DESC, created ASC, id ASC"
        );
    }

    #[test]
    fn test_is_for() {
        let prefs = FilterPreferences {
            sort_order: SortOrder::ByName,
            hide_completed: true,
        };
        let query = TaskQuery::with_preferences("call", prefs);
        assert!(query.is_for("call", &prefs));
        assert!(!query.is_for("cal", &prefs));
        assert!(!query.is_for("call", &FilterPreferences::default()));
    }
}

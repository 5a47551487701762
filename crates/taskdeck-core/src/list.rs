//! Visible-list derivation
//!
//! The canonical task collection is owned by the server and arrives here as a
//! read-only snapshot. Deriving the rendered list is a pure function of that
//! snapshot plus the current filter and sort key -- nothing in this module
//! mutates the input.

use crate::types::{SortKey, Task, TaskFilter};

/// Derive the exact ordered subset of tasks to render.
///
/// An absent collection (`None`, i.e. nothing fetched yet) is treated as
/// empty. Filtering keeps tasks matching `filter`; sorting is descending by
/// priority weight or by creation time (newest first). Priority ties carry no
/// guaranteed secondary order.
pub fn visible_tasks<'a>(
    tasks: Option<&'a [Task]>,
    filter: TaskFilter,
    sort_key: SortKey,
) -> Vec<&'a Task> {
    let mut visible: Vec<&Task> = tasks
        .unwrap_or_default()
        .iter()
        .filter(|task| filter.matches(task))
        .collect();

    match sort_key {
        SortKey::Priority => {
            visible.sort_by(|a, b| {
                b.priority_level()
                    .weight()
                    .cmp(&a.priority_level().weight())
            });
        }
        SortKey::Date => {
            visible.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }
    }

    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TaskId;
    use chrono::{TimeZone, Utc};

    fn task(id: &str, priority: &str, completed: bool, day: u32) -> Task {
        Task {
            id: TaskId::from(id),
            title: format!("task {id}"),
            description: None,
            priority: priority.to_string(),
            completed,
            created_at: Utc.with_ymd_and_hms(2026, 1, day, 12, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2026, 1, day, 12, 0, 0).unwrap(),
            due_date: None,
        }
    }

    fn ids(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|t| t.id.to_string()).collect()
    }

    #[test]
    fn test_absent_collection_is_empty() {
        let visible = visible_tasks(None, TaskFilter::All, SortKey::Date);
        assert!(visible.is_empty());
    }

    #[test]
    fn test_active_filter_excludes_completed() {
        let tasks = vec![
            task("1", "low", false, 1),
            task("2", "low", true, 2),
            task("3", "low", false, 3),
        ];
        let visible = visible_tasks(Some(&tasks), TaskFilter::Active, SortKey::Date);
        assert!(visible.iter().all(|t| !t.completed));
        assert_eq!(visible.len(), 2);
    }

    #[test]
    fn test_completed_filter_keeps_only_completed() {
        let tasks = vec![task("1", "low", false, 1), task("2", "low", true, 2)];
        let visible = visible_tasks(Some(&tasks), TaskFilter::Completed, SortKey::Date);
        assert!(visible.iter().all(|t| t.completed));
        assert_eq!(ids(&visible), vec!["2"]);
    }

    #[test]
    fn test_all_filter_preserves_set() {
        let tasks = vec![
            task("1", "low", false, 1),
            task("2", "high", true, 2),
            task("3", "medium", false, 3),
        ];
        let visible = visible_tasks(Some(&tasks), TaskFilter::All, SortKey::Date);
        let mut got = ids(&visible);
        got.sort();
        assert_eq!(got, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_priority_sort_is_descending_by_weight() {
        let tasks = vec![
            task("lo", "low", false, 1),
            task("hi", "high", false, 1),
            task("mid", "medium", false, 1),
        ];
        let visible = visible_tasks(Some(&tasks), TaskFilter::All, SortKey::Priority);
        for pair in visible.windows(2) {
            assert!(
                pair[0].priority_level().weight() >= pair[1].priority_level().weight(),
                "adjacent pair out of order: {} before {}",
                pair[0].id,
                pair[1].id
            );
        }
        assert_eq!(visible[0].id.as_str(), "hi");
    }

    #[test]
    fn test_high_precedes_medium_with_equal_dates() {
        let tasks = vec![task("m", "medium", false, 5), task("h", "high", false, 5)];
        let visible = visible_tasks(Some(&tasks), TaskFilter::All, SortKey::Priority);
        assert_eq!(ids(&visible), vec!["h", "m"]);
    }

    #[test]
    fn test_date_sort_is_newest_first() {
        let tasks = vec![
            task("old", "low", false, 1),
            task("new", "low", false, 9),
            task("mid", "low", false, 5),
        ];
        let visible = visible_tasks(Some(&tasks), TaskFilter::All, SortKey::Date);
        for pair in visible.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
        assert_eq!(ids(&visible), vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_unrecognized_priority_sorts_as_medium() {
        let tasks = vec![
            task("lo", "low", false, 1),
            task("odd", "urgent", false, 1),
            task("hi", "high", false, 1),
        ];
        let visible = visible_tasks(Some(&tasks), TaskFilter::All, SortKey::Priority);
        assert_eq!(ids(&visible), vec!["hi", "odd", "lo"]);
    }

    #[test]
    fn test_derivation_never_mutates_source() {
        let tasks = vec![task("b", "low", false, 1), task("a", "high", false, 9)];
        let before = tasks.clone();
        let _ = visible_tasks(Some(&tasks), TaskFilter::Active, SortKey::Priority);
        assert_eq!(tasks, before);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let tasks = vec![
            task("1", "low", false, 1),
            task("2", "low", true, 2),
            task("3", "high", false, 3),
        ];
        let once: Vec<Task> = visible_tasks(Some(&tasks), TaskFilter::Active, SortKey::Date)
            .into_iter()
            .cloned()
            .collect();
        let twice = visible_tasks(Some(&once), TaskFilter::Active, SortKey::Date);
        assert_eq!(ids(&twice), once.iter().map(|t| t.id.to_string()).collect::<Vec<_>>());
    }

    #[test]
    fn test_sorting_sorted_list_is_noop() {
        let tasks = vec![
            task("1", "high", false, 3),
            task("2", "medium", false, 2),
            task("3", "low", false, 1),
        ];
        let once: Vec<Task> = visible_tasks(Some(&tasks), TaskFilter::All, SortKey::Priority)
            .into_iter()
            .cloned()
            .collect();
        let twice = visible_tasks(Some(&once), TaskFilter::All, SortKey::Priority);
        assert_eq!(
            ids(&twice),
            once.iter().map(|t| t.id.to_string()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_toggling_out_of_active_view() {
        // One active task, filter=active, sort=date: visible. Completing it
        // and re-deriving empties the view.
        let mut tasks = vec![task("1", "low", false, 1)];
        let visible = visible_tasks(Some(&tasks), TaskFilter::Active, SortKey::Date);
        assert_eq!(ids(&visible), vec!["1"]);

        tasks[0].completed = true;
        let visible = visible_tasks(Some(&tasks), TaskFilter::Active, SortKey::Date);
        assert!(visible.is_empty());
    }
}

use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;

use crate::task::{Task, TaskId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskFilter {
    pub const ALL: [TaskFilter; 3] = [TaskFilter::All, TaskFilter::Active, TaskFilter::Completed];

    pub fn matches(self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Active => !task.completed,
            TaskFilter::Completed => task.completed,
        }
    }

    pub fn as_key(self) -> &'static str {
        match self {
            TaskFilter::All => "all",
            TaskFilter::Active => "active",
            TaskFilter::Completed => "completed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TaskFilter::All => "All",
            TaskFilter::Active => "Active",
            TaskFilter::Completed => "Completed",
        }
    }
}

impl fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

impl FromStr for TaskFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "all" => Ok(TaskFilter::All),
            "active" => Ok(TaskFilter::Active),
            "completed" => Ok(TaskFilter::Completed),
            other => Err(anyhow!("unknown task filter: {other}")),
        }
    }
}

/// One rendered task line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    pub row_class: &'static str,
    pub toggle_icon: &'static str,
    pub delete_icon: &'static str,
}

impl TaskRow {
    pub fn from_task(task: &Task) -> Self {
        let (row_class, toggle_icon) = if task.completed {
            ("todo-item completed", "fas fa-undo")
        } else {
            ("todo-item", "fas fa-check")
        };

        Self {
            id: task.id,
            text: task.text.clone(),
            completed: task.completed,
            row_class,
            toggle_icon,
            delete_icon: "fas fa-trash",
        }
    }
}

/// What the task list shows for a given filter: either a single centered
/// placeholder or one row per matching task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskListView {
    Empty { message: String },
    Rows(Vec<TaskRow>),
}

impl TaskListView {
    pub fn rows(&self) -> &[TaskRow] {
        match self {
            TaskListView::Empty { .. } => &[],
            TaskListView::Rows(rows) => rows,
        }
    }
}

/// Tasks matching `filter`, in stored order.
pub fn filter_tasks(tasks: &[Task], filter: TaskFilter) -> impl Iterator<Item = &Task> {
    tasks.iter().filter(move |task| filter.matches(task))
}

pub fn task_list_view(tasks: &[Task], filter: TaskFilter, empty_message: &str) -> TaskListView {
    let rows: Vec<TaskRow> = filter_tasks(tasks, filter).map(TaskRow::from_task).collect();

    if rows.is_empty() {
        TaskListView::Empty {
            message: empty_message.to_string(),
        }
    } else {
        TaskListView::Rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn task(id: u64, completed: bool) -> Task {
        Task {
            id: TaskId(id),
            text: format!("task {id}"),
            completed,
        }
    }

    fn ids(tasks: &[Task], filter: TaskFilter) -> Vec<u64> {
        filter_tasks(tasks, filter).map(|task| task.id.0).collect()
    }

    #[test]
    fn active_and_completed_partition_all() {
        let tasks = vec![
            task(1, false),
            task(2, true),
            task(3, false),
            task(4, true),
            task(5, true),
        ];

        let all: BTreeSet<u64> = ids(&tasks, TaskFilter::All).into_iter().collect();
        let active: BTreeSet<u64> = ids(&tasks, TaskFilter::Active).into_iter().collect();
        let completed: BTreeSet<u64> = ids(&tasks, TaskFilter::Completed).into_iter().collect();

        assert!(active.intersection(&completed).next().is_none());
        let union: BTreeSet<u64> = active.union(&completed).copied().collect();
        assert_eq!(union, all);
    }

    #[test]
    fn filtering_preserves_order() {
        let tasks = vec![task(9, false), task(2, true), task(5, false)];
        assert_eq!(ids(&tasks, TaskFilter::Active), vec![9, 5]);
        assert_eq!(ids(&tasks, TaskFilter::All), vec![9, 2, 5]);
    }

    #[test]
    fn empty_selection_renders_placeholder() {
        let tasks = vec![task(1, false)];
        let view = task_list_view(&tasks, TaskFilter::Completed, "No tasks found.");
        assert_eq!(
            view,
            TaskListView::Empty {
                message: "No tasks found.".to_string()
            }
        );
        assert!(view.rows().is_empty());
    }

    #[test]
    fn rows_reflect_completion_state() {
        let tasks = vec![task(1, false), task(2, true)];
        let view = task_list_view(&tasks, TaskFilter::All, "No tasks found.");
        let rows = view.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].row_class, "todo-item");
        assert_eq!(rows[0].toggle_icon, "fas fa-check");
        assert_eq!(rows[1].row_class, "todo-item completed");
        assert_eq!(rows[1].toggle_icon, "fas fa-undo");
    }

    #[test]
    fn parses_filter_keys() {
        for filter in TaskFilter::ALL {
            assert_eq!(filter.as_key().parse::<TaskFilter>().expect("known key"), filter);
        }
        assert!("done".parse::<TaskFilter>().is_err());
    }
}

//! Task list rendering
//!
//! Rendering is split in two: `TaskListView::build` turns a slice of
//! tasks into a declarative description (rows plus id-bound actions),
//! and `print` writes that description to the terminal. Building is pure
//! and stateless, so the same input always yields the same view.

use crate::api::{Task, TaskStatus};
use colored::{Color, Colorize};
use prettytable::{cell, row, Table};

/// Badge class for a status
///
/// Total mapping: `Pending` and `In Progress` have their own badges and
/// everything else, including statuses the client has never heard of,
/// lands in the "completed" bucket. That catch-all matches the service's
/// long-standing rendering behavior and is deliberately kept.
pub fn badge_class(status: &TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => "pending",
        TaskStatus::InProgress => "progress",
        _ => "completed",
    }
}

/// Terminal color for a badge class
fn badge_color(class: &str) -> Color {
    match class {
        "pending" => Color::Yellow,
        "progress" => Color::Blue,
        _ => Color::Green,
    }
}

/// Per-row action binding, parameterized by the task id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskAction {
    Edit(i64),
    Delete(i64),
}

/// One row of the rendered task list
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status_label: String,
    pub badge: &'static str,
    pub actions: [TaskAction; 2],
}

/// Declarative description of a rendered task list
///
/// The empty variant carries no action bindings at all; the dashboard
/// has nothing to dispatch to when there are no tasks.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskListView {
    /// Placeholder shown when the list is empty
    Empty,
    /// One row per task, in server order
    Rows(Vec<TaskRow>),
}

impl TaskListView {
    /// Build a view from a task slice, preserving server order
    pub fn build(tasks: &[Task]) -> Self {
        if tasks.is_empty() {
            return Self::Empty;
        }

        let rows = tasks
            .iter()
            .map(|task| TaskRow {
                id: task.id,
                title: task.title.clone(),
                description: task.description.clone(),
                status_label: task.status.label().to_string(),
                badge: badge_class(&task.status),
                actions: [TaskAction::Edit(task.id), TaskAction::Delete(task.id)],
            })
            .collect();

        Self::Rows(rows)
    }

    /// The rows of this view; empty for the placeholder
    pub fn rows(&self) -> &[TaskRow] {
        match self {
            Self::Empty => &[],
            Self::Rows(rows) => rows,
        }
    }

    /// Write the view to stdout
    pub fn print(&self) {
        match self {
            Self::Empty => {
                println!("{}", "No tasks found.".dimmed());
            }
            Self::Rows(rows) => {
                let mut table = Table::new();
                table.add_row(row!["ID", "Title", "Description", "Status"]);
                for r in rows {
                    let status = r.status_label.color(badge_color(r.badge)).to_string();
                    table.add_row(row![r.id, r.title, r.description, status]);
                }
                table.printstd();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: i64, status: TaskStatus) -> Task {
        Task {
            id,
            title: format!("Task {}", id),
            description: "desc".to_string(),
            status,
        }
    }

    #[test]
    fn test_badge_class_total_mapping() {
        assert_eq!(badge_class(&TaskStatus::Pending), "pending");
        assert_eq!(badge_class(&TaskStatus::InProgress), "progress");
        assert_eq!(badge_class(&TaskStatus::Completed), "completed");
        // Unrecognized statuses fall into the completed bucket
        assert_eq!(
            badge_class(&TaskStatus::Other("Blocked".to_string())),
            "completed"
        );
        assert_eq!(badge_class(&TaskStatus::Other(String::new())), "completed");
    }

    #[test]
    fn test_empty_input_builds_placeholder() {
        let view = TaskListView::build(&[]);
        assert_eq!(view, TaskListView::Empty);
        assert!(view.rows().is_empty());
    }

    #[test]
    fn test_one_row_per_task_with_bound_actions() {
        let tasks = vec![
            task(1, TaskStatus::Pending),
            task(2, TaskStatus::InProgress),
            task(3, TaskStatus::Completed),
        ];
        let view = TaskListView::build(&tasks);
        let rows = view.rows();
        assert_eq!(rows.len(), 3);
        for (row, task) in rows.iter().zip(&tasks) {
            assert_eq!(row.id, task.id);
            assert_eq!(
                row.actions,
                [TaskAction::Edit(task.id), TaskAction::Delete(task.id)]
            );
        }
    }

    #[test]
    fn test_server_order_is_preserved() {
        let tasks = vec![task(9, TaskStatus::Pending), task(2, TaskStatus::Pending)];
        let view = TaskListView::build(&tasks);
        let ids: Vec<i64> = view.rows().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![9, 2]);
    }

    #[test]
    fn test_build_is_idempotent() {
        let tasks = vec![task(1, TaskStatus::Pending), task(2, TaskStatus::Completed)];
        assert_eq!(TaskListView::build(&tasks), TaskListView::build(&tasks));
    }

    #[test]
    fn test_row_carries_status_label_and_badge() {
        let tasks = vec![task(5, TaskStatus::Other("Archived".to_string()))];
        let view = TaskListView::build(&tasks);
        let row = &view.rows()[0];
        assert_eq!(row.status_label, "Archived");
        assert_eq!(row.badge, "completed");
    }
}

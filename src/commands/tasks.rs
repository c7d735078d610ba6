//! One-shot task commands
//!
//! Non-interactive counterparts of the dashboard operations, suitable
//! for scripting. Server-shaped failures become process-fatal errors
//! here, since there is no loop to continue.

use crate::api::{
    DeleteOutcome, ListOutcome, NewTask, StatusFilter, TaskApi, TaskOutcome, TaskPatch, TaskStatus,
};
use crate::error::{Result, TaskdeckError};
use crate::render::TaskListView;
use crate::session::SessionStore;

use colored::Colorize;

/// Read the stored token or refuse to proceed
fn require_token(store: &SessionStore) -> Result<String> {
    store.token()?.ok_or_else(|| {
        TaskdeckError::Auth("Not logged in. Run `taskdeck auth` first.".to_string()).into()
    })
}

/// List tasks under a filter, as a table or raw JSON
pub async fn list(
    api: &TaskApi,
    store: &SessionStore,
    status: StatusFilter,
    search: &str,
    json: bool,
) -> Result<()> {
    let token = require_token(store)?;

    match api.list_tasks(&token, status, search).await? {
        ListOutcome::Tasks(tasks) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&tasks)?);
            } else {
                TaskListView::build(&tasks).print();
            }
            Ok(())
        }
        ListOutcome::Error { error } => Err(TaskdeckError::Api(error).into()),
    }
}

/// Create a task
pub async fn add(
    api: &TaskApi,
    store: &SessionStore,
    title: &str,
    description: &str,
    status: &str,
) -> Result<()> {
    let token = require_token(store)?;
    let status = TaskStatus::parse_str(status).map_err(TaskdeckError::InvalidInput)?;

    let task = NewTask {
        title: title.trim().to_string(),
        description: description.trim().to_string(),
        status,
    };

    match api.create_task(&token, &task).await? {
        TaskOutcome::Task(created) => {
            println!("{}", format!("Task added! (id {})", created.id).green());
            Ok(())
        }
        TaskOutcome::Error { error } => Err(TaskdeckError::Api(error).into()),
    }
}

/// Update fields of a task
pub async fn edit(
    api: &TaskApi,
    store: &SessionStore,
    id: i64,
    title: Option<String>,
    description: Option<String>,
    status: Option<String>,
) -> Result<()> {
    let token = require_token(store)?;

    let status = status
        .as_deref()
        .map(TaskStatus::parse_str)
        .transpose()
        .map_err(TaskdeckError::InvalidInput)?;

    let patch = TaskPatch {
        title: title.map(|t| t.trim().to_string()),
        description: description.map(|d| d.trim().to_string()),
        status,
    };

    if patch.is_empty() {
        return Err(TaskdeckError::InvalidInput(
            "nothing to update: pass --title, --description, or --status".to_string(),
        )
        .into());
    }

    match api.update_task(&token, id, &patch).await? {
        TaskOutcome::Task(updated) => {
            println!("{}", format!("Task {} updated.", updated.id).green());
            Ok(())
        }
        TaskOutcome::Error { error } => Err(TaskdeckError::Api(error).into()),
    }
}

/// Delete a task
pub async fn rm(api: &TaskApi, store: &SessionStore, id: i64) -> Result<()> {
    let token = require_token(store)?;

    match api.delete_task(&token, id).await? {
        DeleteOutcome::Message { message } => {
            println!("{}", message);
            Ok(())
        }
        DeleteOutcome::Error { error } => Err(TaskdeckError::Api(error).into()),
    }
}

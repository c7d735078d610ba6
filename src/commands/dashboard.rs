//! Interactive task dashboard
//!
//! This module parses and handles the commands available inside the
//! dashboard loop. The loop requires a stored session to start, renders
//! the task list from a fresh fetch after every mutation, and keeps the
//! current filter between renders.

use crate::api::{
    DeleteOutcome, ListOutcome, NewTask, StatusFilter, TaskApi, TaskOutcome, TaskPatch, TaskStatus,
};
use crate::error::Result;
use crate::render::TaskListView;
use crate::session::SessionStore;

use clap::ValueEnum;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use thiserror::Error;

/// Errors that can occur when parsing dashboard commands
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Unknown command was entered
    #[error("Unknown command: {0}\n\nType 'help' to see available commands")]
    UnknownCommand(String),

    /// Command requires an argument but none was provided
    #[error("Command {command} requires an argument\n\nUsage: {usage}")]
    MissingArgument { command: String, usage: String },

    /// Command was given an argument it cannot use
    #[error("Invalid argument for {command}: {message}")]
    InvalidArgument { command: String, message: String },
}

/// Commands available inside the dashboard loop
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardCommand {
    /// Re-render under the current filter
    Refresh,

    /// Replace the filter, then re-render
    Filter {
        status: StatusFilter,
        search: String,
    },

    /// Create a task, then re-render
    Add(NewTask),

    /// Update fields of a task, then re-render
    Edit { id: i64, patch: TaskPatch },

    /// Delete a task, then re-render; no confirmation step
    Delete(i64),

    /// Clear the session and leave the dashboard
    Logout,

    /// Show command help
    Help,

    /// Leave the dashboard, keeping the session
    Exit,
}

/// Current list filter, kept between renders
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    pub status: StatusFilter,
    pub search: String,
}

/// Parse a line of dashboard input into a command
///
/// # Examples
///
/// ```
/// use taskdeck::commands::dashboard::{parse_command, DashboardCommand};
///
/// let cmd = parse_command("rm 3").unwrap();
/// assert_eq!(cmd, DashboardCommand::Delete(3));
///
/// assert!(parse_command("frobnicate").is_err());
/// ```
pub fn parse_command(input: &str) -> std::result::Result<DashboardCommand, CommandError> {
    let trimmed = input.trim();
    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed, ""),
    };

    match word.to_lowercase().as_str() {
        "list" | "ls" => Ok(DashboardCommand::Refresh),
        "filter" => parse_filter(rest),
        "add" => parse_add(rest),
        "edit" => parse_edit(rest),
        "rm" | "del" => parse_delete(rest),
        "logout" => Ok(DashboardCommand::Logout),
        "help" | "?" => Ok(DashboardCommand::Help),
        "quit" | "exit" => Ok(DashboardCommand::Exit),
        other => Err(CommandError::UnknownCommand(other.to_string())),
    }
}

fn parse_filter(rest: &str) -> std::result::Result<DashboardCommand, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::MissingArgument {
            command: "filter".to_string(),
            usage: "filter <all|pending|in-progress|completed> [search text]".to_string(),
        });
    }

    let (status_word, search) = match rest.split_once(char::is_whitespace) {
        Some((status_word, search)) => (status_word, search.trim()),
        None => (rest, ""),
    };

    let status = StatusFilter::from_str(status_word, true).map_err(|_| {
        CommandError::InvalidArgument {
            command: "filter".to_string(),
            message: format!(
                "unknown status {} (expected all, pending, in-progress, or completed)",
                status_word
            ),
        }
    })?;

    Ok(DashboardCommand::Filter {
        status,
        search: search.to_string(),
    })
}

fn parse_add(rest: &str) -> std::result::Result<DashboardCommand, CommandError> {
    let usage = "add title=<text> description=<text> [status=<status>]";
    if rest.is_empty() {
        return Err(CommandError::MissingArgument {
            command: "add".to_string(),
            usage: usage.to_string(),
        });
    }

    let fields = parse_fields("add", rest)?;
    let title = fields.title.unwrap_or_default();
    if title.is_empty() {
        return Err(CommandError::InvalidArgument {
            command: "add".to_string(),
            message: "title is required".to_string(),
        });
    }

    Ok(DashboardCommand::Add(NewTask {
        title,
        description: fields.description.unwrap_or_default(),
        status: fields.status.unwrap_or(TaskStatus::Pending),
    }))
}

fn parse_edit(rest: &str) -> std::result::Result<DashboardCommand, CommandError> {
    let usage = "edit <id> [title=<text>] [description=<text>] [status=<status>]";
    let (id_word, fields_text) = match rest.split_once(char::is_whitespace) {
        Some((id_word, fields_text)) => (id_word, fields_text.trim()),
        None => (rest, ""),
    };

    if id_word.is_empty() {
        return Err(CommandError::MissingArgument {
            command: "edit".to_string(),
            usage: usage.to_string(),
        });
    }

    let id: i64 = id_word.parse().map_err(|_| CommandError::InvalidArgument {
        command: "edit".to_string(),
        message: format!("not a task id: {}", id_word),
    })?;

    let patch = parse_fields("edit", fields_text)?;
    if patch.is_empty() {
        // The whole edit is rejected before anything is sent
        return Err(CommandError::MissingArgument {
            command: "edit".to_string(),
            usage: usage.to_string(),
        });
    }

    Ok(DashboardCommand::Edit {
        id,
        patch: TaskPatch {
            title: patch.title,
            description: patch.description,
            status: patch.status,
        },
    })
}

fn parse_delete(rest: &str) -> std::result::Result<DashboardCommand, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::MissingArgument {
            command: "rm".to_string(),
            usage: "rm <id>".to_string(),
        });
    }

    let id: i64 = rest.parse().map_err(|_| CommandError::InvalidArgument {
        command: "rm".to_string(),
        message: format!("not a task id: {}", rest),
    })?;

    Ok(DashboardCommand::Delete(id))
}

/// Fields collected from a structured `key=value` request
#[derive(Debug, Default, PartialEq)]
struct ParsedFields {
    title: Option<String>,
    description: Option<String>,
    status: Option<TaskStatus>,
}

impl ParsedFields {
    fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.status.is_none()
    }
}

/// Parse `key=value` fields where values may contain spaces
///
/// A value runs until the next token that starts another recognized
/// field, so `add title=Buy milk description=Two liters` does what it
/// looks like without any quoting.
fn parse_fields(command: &str, text: &str) -> std::result::Result<ParsedFields, CommandError> {
    const KEYS: [&str; 4] = ["title=", "description=", "desc=", "status="];

    let mut pairs: Vec<(&str, Vec<&str>)> = Vec::new();
    for token in text.split_whitespace() {
        if let Some(&key) = KEYS.iter().find(|key| token.starts_with(**key)) {
            pairs.push((key, vec![&token[key.len()..]]));
        } else if let Some((_, words)) = pairs.last_mut() {
            words.push(token);
        } else {
            return Err(CommandError::InvalidArgument {
                command: command.to_string(),
                message: format!("expected key=value fields, found: {}", token),
            });
        }
    }

    let mut fields = ParsedFields::default();
    for (key, words) in pairs {
        let value = words.join(" ").trim().to_string();
        match key {
            "title=" => fields.title = Some(value),
            "description=" | "desc=" => fields.description = Some(value),
            _ => {
                // Statuses are validated before anything is dispatched
                let status = TaskStatus::parse_str(&value).map_err(|message| {
                    CommandError::InvalidArgument {
                        command: command.to_string(),
                        message,
                    }
                })?;
                fields.status = Some(status);
            }
        }
    }

    Ok(fields)
}

/// Print the dashboard command summary
fn print_help() {
    println!("Available commands:");
    println!("  list                       re-render the task list");
    println!("  filter <status> [search]   set the filter, then re-render");
    println!("  add title=.. description=.. [status=..]");
    println!("  edit <id> [title=..] [description=..] [status=..]");
    println!("  rm <id>                    delete a task");
    println!("  logout                     clear the session and leave");
    println!("  quit                       leave, keeping the session");
}

/// Fetch under the current filter and print the resulting view
///
/// Failures are non-fatal: they print in red and the loop keeps going.
async fn render(api: &TaskApi, token: &str, filter: &FilterState) {
    match api.list_tasks(token, filter.status, &filter.search).await {
        Ok(ListOutcome::Tasks(tasks)) => TaskListView::build(&tasks).print(),
        Ok(ListOutcome::Error { error }) => println!("{}", error.red()),
        Err(e) => println!("{}", format!("{}", e).red()),
    }
}

/// Run the interactive dashboard
///
/// Requires a stored session: when either entry is absent the session is
/// cleared and the caller is pointed back at the auth flow.
pub async fn run_dashboard(api: &TaskApi, store: &SessionStore) -> Result<()> {
    let (token, user) = match (store.token()?, store.user()?) {
        (Some(token), Some(user)) => (token, user),
        _ => {
            store.clear()?;
            println!(
                "{}",
                "No active session. Run `taskdeck auth` to log in.".red()
            );
            return Ok(());
        }
    };

    println!("Hi, {}", user.name.bold());
    let mut filter = FilterState::default();
    render(api, &token, &filter).await;

    let mut rl = DefaultEditor::new()?;

    loop {
        match rl.readline("taskdeck> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                rl.add_history_entry(trimmed)?;

                let command = match parse_command(trimmed) {
                    Ok(command) => command,
                    Err(e) => {
                        println!("{}", format!("{}", e).red());
                        continue;
                    }
                };

                match command {
                    DashboardCommand::Help => print_help(),
                    DashboardCommand::Exit => break,
                    DashboardCommand::Logout => {
                        store.clear()?;
                        println!("Logged out.");
                        break;
                    }
                    DashboardCommand::Refresh => render(api, &token, &filter).await,
                    DashboardCommand::Filter { status, search } => {
                        filter = FilterState { status, search };
                        render(api, &token, &filter).await;
                    }
                    DashboardCommand::Add(task) => {
                        match api.create_task(&token, &task).await {
                            Ok(TaskOutcome::Task(_)) => println!("{}", "Task added!".green()),
                            Ok(TaskOutcome::Error { error }) => println!("{}", error.red()),
                            Err(e) => println!("{}", format!("{}", e).red()),
                        }
                        render(api, &token, &filter).await;
                    }
                    DashboardCommand::Edit { id, patch } => {
                        match api.update_task(&token, id, &patch).await {
                            Ok(TaskOutcome::Task(_)) => println!("{}", "Task updated.".green()),
                            Ok(TaskOutcome::Error { error }) => println!("{}", error.red()),
                            Err(e) => println!("{}", format!("{}", e).red()),
                        }
                        render(api, &token, &filter).await;
                    }
                    DashboardCommand::Delete(id) => {
                        match api.delete_task(&token, id).await {
                            Ok(DeleteOutcome::Message { message }) => {
                                println!("{}", message.dimmed())
                            }
                            Ok(DeleteOutcome::Error { error }) => println!("{}", error.red()),
                            Err(e) => println!("{}", format!("{}", e).red()),
                        }
                        render(api, &token, &filter).await;
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_refresh() {
        assert_eq!(parse_command("list").unwrap(), DashboardCommand::Refresh);
        assert_eq!(parse_command("ls").unwrap(), DashboardCommand::Refresh);
    }

    #[test]
    fn test_parse_filter_with_search() {
        let cmd = parse_command("filter pending buy milk").unwrap();
        assert_eq!(
            cmd,
            DashboardCommand::Filter {
                status: StatusFilter::Pending,
                search: "buy milk".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_filter_status_only() {
        let cmd = parse_command("filter in-progress").unwrap();
        assert_eq!(
            cmd,
            DashboardCommand::Filter {
                status: StatusFilter::InProgress,
                search: String::new(),
            }
        );
    }

    #[test]
    fn test_parse_filter_missing_argument() {
        assert!(matches!(
            parse_command("filter"),
            Err(CommandError::MissingArgument { .. })
        ));
    }

    #[test]
    fn test_parse_filter_unknown_status() {
        assert!(matches!(
            parse_command("filter someday"),
            Err(CommandError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_parse_add_with_spaced_values() {
        let cmd = parse_command("add title=Buy milk description=Two liters status=pending")
            .unwrap();
        assert_eq!(
            cmd,
            DashboardCommand::Add(NewTask {
                title: "Buy milk".to_string(),
                description: "Two liters".to_string(),
                status: TaskStatus::Pending,
            })
        );
    }

    #[test]
    fn test_parse_add_defaults_status_to_pending() {
        let cmd = parse_command("add title=Ship it description=Now").unwrap();
        if let DashboardCommand::Add(task) = cmd {
            assert_eq!(task.status, TaskStatus::Pending);
        } else {
            panic!("Expected Add command");
        }
    }

    #[test]
    fn test_parse_add_requires_title() {
        assert!(matches!(
            parse_command("add description=No title here"),
            Err(CommandError::InvalidArgument { .. })
        ));
        assert!(matches!(
            parse_command("add"),
            Err(CommandError::MissingArgument { .. })
        ));
    }

    #[test]
    fn test_parse_add_rejects_free_text() {
        assert!(matches!(
            parse_command("add just some words"),
            Err(CommandError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_parse_edit_partial_fields() {
        let cmd = parse_command("edit 7 status=in progress").unwrap();
        assert_eq!(
            cmd,
            DashboardCommand::Edit {
                id: 7,
                patch: TaskPatch {
                    title: None,
                    description: None,
                    status: Some(TaskStatus::InProgress),
                },
            }
        );
    }

    #[test]
    fn test_parse_edit_all_fields() {
        let cmd = parse_command("edit 2 title=New name desc=New body status=completed").unwrap();
        if let DashboardCommand::Edit { id, patch } = cmd {
            assert_eq!(id, 2);
            assert_eq!(patch.title, Some("New name".to_string()));
            assert_eq!(patch.description, Some("New body".to_string()));
            assert_eq!(patch.status, Some(TaskStatus::Completed));
        } else {
            panic!("Expected Edit command");
        }
    }

    #[test]
    fn test_parse_edit_without_fields_is_rejected() {
        // Nothing is dispatched for an empty edit request
        assert!(matches!(
            parse_command("edit 7"),
            Err(CommandError::MissingArgument { .. })
        ));
    }

    #[test]
    fn test_parse_edit_invalid_status_is_rejected() {
        assert!(matches!(
            parse_command("edit 7 status=someday"),
            Err(CommandError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_parse_edit_bad_id() {
        assert!(matches!(
            parse_command("edit seven status=completed"),
            Err(CommandError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_parse_delete() {
        assert_eq!(parse_command("rm 3").unwrap(), DashboardCommand::Delete(3));
        assert_eq!(parse_command("del 4").unwrap(), DashboardCommand::Delete(4));
    }

    #[test]
    fn test_parse_delete_missing_id() {
        assert!(matches!(
            parse_command("rm"),
            Err(CommandError::MissingArgument { .. })
        ));
    }

    #[test]
    fn test_parse_logout_and_exit() {
        assert_eq!(parse_command("logout").unwrap(), DashboardCommand::Logout);
        assert_eq!(parse_command("quit").unwrap(), DashboardCommand::Exit);
        assert_eq!(parse_command("exit").unwrap(), DashboardCommand::Exit);
    }

    #[test]
    fn test_parse_unknown_command() {
        assert!(matches!(
            parse_command("frobnicate"),
            Err(CommandError::UnknownCommand(_))
        ));
    }

    #[test]
    fn test_commands_are_case_insensitive() {
        assert_eq!(parse_command("LIST").unwrap(), DashboardCommand::Refresh);
        assert_eq!(parse_command("Rm 1").unwrap(), DashboardCommand::Delete(1));
    }
}

//! Wire types for the task service API
//!
//! Response bodies are decoded into untagged outcome enums so callers can
//! inspect the shape the server actually returned (presence of `token`,
//! `error`, or `message`) instead of guessing from HTTP status codes.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A user account as reported by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Email address; not all endpoints include it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Status of a task
///
/// The client only ever *sends* the three known values, but the server
/// owns the field and may report something else; unknown strings are
/// preserved in `Other` rather than rejected, so a list response never
/// fails to decode over one odd status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    /// Any status string the client does not recognize
    Other(String),
}

impl TaskStatus {
    /// The label used on the wire and in rendered output
    pub fn label(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Other(s) => s,
        }
    }

    /// Parse user input into a known status
    ///
    /// Unlike the wire conversion, this rejects unknown values: statuses
    /// typed by the user are validated before they are sent anywhere.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskdeck::api::TaskStatus;
    ///
    /// let status = TaskStatus::parse_str("in progress").unwrap();
    /// assert_eq!(status, TaskStatus::InProgress);
    /// assert!(TaskStatus::parse_str("someday").is_err());
    /// ```
    pub fn parse_str(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "in progress" | "in-progress" | "inprogress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            other => Err(format!(
                "Unknown status: {} (expected Pending, \"In Progress\", or Completed)",
                other
            )),
        }
    }
}

impl From<String> for TaskStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Pending" => Self::Pending,
            "In Progress" => Self::InProgress,
            "Completed" => Self::Completed,
            _ => Self::Other(s),
        }
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        status.label().to_string()
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Status filter applied when listing tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    InProgress,
    Completed,
}

impl StatusFilter {
    /// The value sent in the `status` query parameter
    pub fn as_query_value(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_query_value())
    }
}

/// A task record as reported by the service
///
/// The client never holds these beyond a single render; the server copy
/// is authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Server-assigned identifier
    pub id: i64,
    /// Task title
    pub title: String,
    /// Task description
    #[serde(default)]
    pub description: String,
    /// Current status
    pub status: TaskStatus,
}

/// Body of a create-task request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
}

/// Partial fields for an update-task request
///
/// Only fields that are set are serialized, so the server sees exactly
/// the fields the caller wants replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

impl TaskPatch {
    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.status.is_none()
    }
}

/// Response to a register request: a message, or an error object
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RegisterOutcome {
    /// Error-shaped body (`{"error": ...}`)
    Error { error: String },
    /// Message-shaped body (`{"message": ...}`)
    ///
    /// May still describe a failure ("user already exists"); the auth
    /// flow inspects the text.
    Message { message: String },
}

/// Response to a login request
///
/// Uses `#[serde(untagged)]` so the discriminator is the presence of
/// `token`: any body without one is a failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LoginOutcome {
    /// Credentials accepted
    Accepted { token: String, user: User },
    /// Credentials rejected; the server may include a message
    Rejected {
        #[serde(default)]
        message: Option<String>,
    },
}

/// Response to a list-tasks request: the task array, or an error object
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListOutcome {
    Tasks(Vec<Task>),
    Error { error: String },
}

/// Response to a create or update request: the task, or an error object
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TaskOutcome {
    Task(Task),
    Error { error: String },
}

/// Response to a delete request: a message, or an error object
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DeleteOutcome {
    Error { error: String },
    Message { message: String },
}

//! Taskdeck - command-line client for a task-management service
//!
//! This library provides the building blocks of the Taskdeck client:
//! the typed API client, session persistence, task list rendering, and
//! the command handlers behind the CLI.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `api`: wire types and the HTTP client for the task service
//! - `session`: file-backed persistence for the token and user profile
//! - `render`: declarative task list views and the table printer
//! - `commands`: auth flow, dashboard loop, and one-shot task commands
//! - `config`: configuration management and validation
//! - `error`: error types and result aliases
//! - `cli`: command-line interface definition
//!
//! # Example
//!
//! ```no_run
//! use taskdeck::api::{StatusFilter, TaskApi};
//! use taskdeck::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.yaml", &Default::default())?;
//!     config.validate()?;
//!
//!     let api = TaskApi::new(&config.api)?;
//!     // Authenticated calls would go here
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod render;
pub mod session;

// Re-export commonly used types
pub use api::{StatusFilter, Task, TaskApi, TaskStatus, User};
pub use config::Config;
pub use error::{Result, TaskdeckError};
pub use render::TaskListView;
pub use session::SessionStore;

//! Command-line interface definition for Taskdeck
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for authentication, task management, and the
//! interactive dashboard.

use clap::{Parser, Subcommand};

use crate::api::StatusFilter;

/// Taskdeck - command-line client for a task-management service
///
/// Register and log in against a task service, then create, list,
/// update, and delete tasks from the terminal.
#[derive(Parser, Debug, Clone)]
#[command(name = "taskdeck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Override the task service base URL from config
    #[arg(long, env = "TASKDECK_API_BASE")]
    pub api_base: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for Taskdeck
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the interactive login/register flow
    Auth,

    /// Register a new account
    Register {
        /// Display name for the new account
        #[arg(short, long)]
        name: String,

        /// Email address to register
        #[arg(short, long)]
        email: String,

        /// Password for the new account
        #[arg(short, long)]
        password: String,
    },

    /// Log in and store the session
    Login {
        /// Email address of the account
        #[arg(short, long)]
        email: String,

        /// Password of the account
        #[arg(short, long)]
        password: String,
    },

    /// Clear the stored session
    Logout,

    /// Show the currently logged-in user
    Whoami,

    /// Start the interactive task dashboard
    Dashboard,

    /// Manage tasks
    Tasks {
        /// Task management subcommand
        #[command(subcommand)]
        command: TaskCommand,
    },
}

/// Task management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum TaskCommand {
    /// List tasks, optionally filtered by status and title search
    List {
        /// Filter by task status
        #[arg(short, long, value_enum, default_value_t = StatusFilter::All)]
        status: StatusFilter,

        /// Search text matched against task titles
        #[arg(long, default_value = "")]
        search: String,

        /// Output raw JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Create a new task
    Add {
        /// Task title
        #[arg(short, long)]
        title: String,

        /// Task description
        #[arg(short, long)]
        description: String,

        /// Initial status (Pending, "In Progress", or Completed)
        #[arg(short, long, default_value = "Pending")]
        status: String,
    },

    /// Update fields of an existing task
    Edit {
        /// Identifier of the task to update
        id: i64,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New status (Pending, "In Progress", or Completed)
        #[arg(long)]
        status: Option<String>,
    },

    /// Delete a task
    Rm {
        /// Identifier of the task to delete
        id: i64,
    },
}

impl Cli {
    /// Parse command line arguments
    ///
    /// # Returns
    ///
    /// Returns the parsed CLI structure
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: Some("config/config.yaml".to_string()),
            verbose: false,
            api_base: None,
            command: Commands::Auth,
        }
    }
}

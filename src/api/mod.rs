//! Task service API module
//!
//! This module contains the wire types for the task service contract and
//! the HTTP client that speaks it.

pub mod client;
pub mod types;

pub use client::TaskApi;
pub use types::{
    DeleteOutcome, ListOutcome, LoginOutcome, NewTask, RegisterOutcome, StatusFilter, Task,
    TaskOutcome, TaskPatch, TaskStatus, User,
};

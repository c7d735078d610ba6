/*!
Command handlers for the CLI

This module provides the command handlers invoked by the CLI entrypoint.

It exposes three handler modules:

- `auth`      — Login/register flows and session commands
- `dashboard` — Interactive task dashboard
- `tasks`     — One-shot task operations for scripting

The handlers are intentionally small and use the library components:
the API client, the session store, and the renderer.
*/

pub mod auth;
pub mod dashboard;
pub mod tasks;

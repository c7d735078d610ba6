//! Session persistence for Taskdeck
//!
//! The session is exactly two named entries in a per-user data directory:
//! a bearer token (`token`) and a serialized user profile (`user.json`).
//! Both survive across invocations and are removed together on logout.

use crate::api::User;
use crate::config::SessionConfig;
use crate::error::{Result, TaskdeckError};
use anyhow::Context;
use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::PathBuf;

/// File name of the bearer token entry
const TOKEN_ENTRY: &str = "token";

/// File name of the serialized user profile entry
const PROFILE_ENTRY: &str = "user.json";

/// Envelope written to the profile entry
///
/// Wraps the user record with the time it was stored, so a stale session
/// can be recognized when inspecting the directory by hand.
#[derive(Debug, Serialize, Deserialize)]
struct ProfileEntry {
    user: User,
    saved_at: DateTime<Utc>,
}

/// File-backed store for the current session
///
/// The store performs no validation of the values it holds; the token is
/// an opaque credential whose semantics belong to the server.
#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    /// Create a session store using the configured or default directory
    ///
    /// Resolution order: explicit `session.dir` from config, then the
    /// `TASKDECK_SESSION_DIR` environment variable, then the platform
    /// data directory.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be determined or created
    pub fn new(config: &SessionConfig) -> Result<Self> {
        if let Some(dir) = &config.dir {
            return Self::with_dir(dir.clone());
        }

        if let Ok(override_dir) = std::env::var("TASKDECK_SESSION_DIR") {
            return Self::with_dir(PathBuf::from(override_dir));
        }

        let proj_dirs = ProjectDirs::from("com", "taskdeck", "taskdeck")
            .ok_or_else(|| TaskdeckError::Session("Could not determine data directory".into()))?;

        Self::with_dir(proj_dirs.data_dir().join("session"))
    }

    /// Create a session store over an explicit directory
    ///
    /// This is primarily useful for tests where the default application
    /// data directory is not desirable (for example, a temporary directory).
    ///
    /// # Examples
    ///
    /// ```
    /// use taskdeck::session::SessionStore;
    ///
    /// let store = SessionStore::with_dir("/tmp/taskdeck-test-session".into()).unwrap();
    /// ```
    pub fn with_dir(dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&dir)
            .context("Failed to create session directory")
            .map_err(|e| TaskdeckError::Session(e.to_string()))?;
        Ok(Self { dir })
    }

    /// Persist both session entries
    ///
    /// Writes the user profile first so a token never exists without a
    /// matching profile.
    pub fn save(&self, token: &str, user: &User) -> Result<()> {
        let entry = ProfileEntry {
            user: user.clone(),
            saved_at: Utc::now(),
        };
        let serialized = serde_json::to_string_pretty(&entry)?;
        std::fs::write(self.dir.join(PROFILE_ENTRY), serialized)
            .map_err(|e| TaskdeckError::Session(format!("Failed to write profile: {}", e)))?;
        std::fs::write(self.dir.join(TOKEN_ENTRY), token)
            .map_err(|e| TaskdeckError::Session(format!("Failed to write token: {}", e)))?;

        tracing::debug!("Session saved for user {}", user.name);
        Ok(())
    }

    /// Read the stored bearer token, if any
    pub fn token(&self) -> Result<Option<String>> {
        match std::fs::read_to_string(self.dir.join(TOKEN_ENTRY)) {
            Ok(token) => {
                let token = token.trim().to_string();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token))
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => {
                Err(TaskdeckError::Session(format!("Failed to read token: {}", e)).into())
            }
        }
    }

    /// Read the stored user profile, if any
    pub fn user(&self) -> Result<Option<User>> {
        match std::fs::read_to_string(self.dir.join(PROFILE_ENTRY)) {
            Ok(contents) => {
                let entry: ProfileEntry = serde_json::from_str(&contents).map_err(|e| {
                    TaskdeckError::Session(format!("Failed to parse profile: {}", e))
                })?;
                Ok(Some(entry.user))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => {
                Err(TaskdeckError::Session(format!("Failed to read profile: {}", e)).into())
            }
        }
    }

    /// Remove both session entries
    ///
    /// Missing entries are not an error, so logout is idempotent.
    pub fn clear(&self) -> Result<()> {
        for entry in [TOKEN_ENTRY, PROFILE_ENTRY] {
            match std::fs::remove_file(self.dir.join(entry)) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => {
                    return Err(
                        TaskdeckError::Session(format!("Failed to remove {}: {}", entry, e))
                            .into(),
                    )
                }
            }
        }

        tracing::debug!("Session cleared");
        Ok(())
    }
}

//! HTTP client for the task service
//!
//! One request per operation, no retries, no backoff. Server-shaped
//! failure bodies come back as outcome values for the caller to inspect;
//! transport errors and unparseable bodies become `TaskdeckError::Api`.

use crate::api::types::{
    DeleteOutcome, ListOutcome, LoginOutcome, NewTask, RegisterOutcome, StatusFilter, TaskOutcome,
    TaskPatch,
};
use crate::config::ApiConfig;
use crate::error::{Result, TaskdeckError};

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;

/// Client for the task service API
///
/// # Examples
///
/// ```no_run
/// use taskdeck::api::{StatusFilter, TaskApi};
/// use taskdeck::config::ApiConfig;
///
/// # async fn example() -> taskdeck::error::Result<()> {
/// let api = TaskApi::new(&ApiConfig::default())?;
/// let outcome = api.list_tasks("token", StatusFilter::All, "").await?;
/// # Ok(())
/// # }
/// ```
pub struct TaskApi {
    client: Client,
    base_url: String,
}

impl TaskApi {
    /// Create a new client for the configured service
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("taskdeck/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TaskdeckError::Api(format!("Failed to create HTTP client: {}", e)))?;

        tracing::debug!("Initialized task API client: base_url={}", config.base_url);

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The base URL requests are issued against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Register a new account
    ///
    /// The server replies with a message on success and a message or an
    /// error object on failure; the caller decides which is which.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<RegisterOutcome> {
        let url = format!("{}/auth/register", self.base_url);
        tracing::debug!("POST {}", url);

        let request = self.client.post(&url).json(&json!({
            "name": name,
            "email": email,
            "password": password,
        }));
        self.send(request, "register").await
    }

    /// Exchange credentials for a session token
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome> {
        let url = format!("{}/auth/login", self.base_url);
        tracing::debug!("POST {}", url);

        let request = self.client.post(&url).json(&json!({
            "email": email,
            "password": password,
        }));
        self.send(request, "login").await
    }

    /// List tasks under the given filter
    ///
    /// Both parameters are always sent, URL-encoded, even when defaulted.
    pub async fn list_tasks(
        &self,
        token: &str,
        status: StatusFilter,
        search: &str,
    ) -> Result<ListOutcome> {
        let url = format!("{}/tasks", self.base_url);
        tracing::debug!("GET {} status={} search={}", url, status, search);

        let request = self
            .client
            .get(&url)
            .query(&[("status", status.as_query_value()), ("search", search)])
            .bearer_auth(token);
        self.send(request, "list tasks").await
    }

    /// Create a new task
    pub async fn create_task(&self, token: &str, task: &NewTask) -> Result<TaskOutcome> {
        let url = format!("{}/tasks", self.base_url);
        tracing::debug!("POST {}", url);

        let request = self.client.post(&url).json(task).bearer_auth(token);
        self.send(request, "create task").await
    }

    /// Update fields of an existing task
    pub async fn update_task(
        &self,
        token: &str,
        id: i64,
        patch: &TaskPatch,
    ) -> Result<TaskOutcome> {
        let url = format!("{}/tasks/{}", self.base_url, id);
        tracing::debug!("PUT {}", url);

        let request = self.client.put(&url).json(patch).bearer_auth(token);
        self.send(request, "update task").await
    }

    /// Delete a task
    pub async fn delete_task(&self, token: &str, id: i64) -> Result<DeleteOutcome> {
        let url = format!("{}/tasks/{}", self.base_url, id);
        tracing::debug!("DELETE {}", url);

        let request = self.client.delete(&url).bearer_auth(token);
        self.send(request, "delete task").await
    }

    /// Issue a request and decode the JSON body, whatever the status code
    ///
    /// The service reports failures through response shape, not status,
    /// so the body is decoded unconditionally and the outcome types sort
    /// out what came back.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder, op: &str) -> Result<T> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!("Request failed during {}: {}", op, e);
            TaskdeckError::Api(format!("Request failed: {}", e))
        })?;

        let status = response.status();
        response.json::<T>().await.map_err(|e| {
            tracing::warn!("Unparseable {} response ({}): {}", op, status, e);
            TaskdeckError::Api(format!("Unparseable response ({}): {}", status, e)).into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_builds_client() {
        let api = TaskApi::new(&ApiConfig::default());
        assert!(api.is_ok());
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ApiConfig {
            base_url: "http://localhost:5000/api/".to_string(),
            ..Default::default()
        };
        let api = TaskApi::new(&config).unwrap();
        assert_eq!(api.base_url(), "http://localhost:5000/api");
    }
}

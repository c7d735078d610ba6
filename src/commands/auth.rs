//! Authentication flow
//!
//! The interactive auth surface mirrors a two-tab login/register page:
//! exactly one of the two modes is active at a time, switching modes
//! clears any prior status message, and submitting the active form calls
//! the service and reports the outcome in red or green.

use crate::api::{LoginOutcome, RegisterOutcome, TaskApi, User};
use crate::error::Result;
use crate::session::SessionStore;

use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::fmt;

/// Active form of the auth surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// The login form is active
    Login,
    /// The register form is active
    Register,
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Login => write!(f, "login"),
            Self::Register => write!(f, "register"),
        }
    }
}

/// Outcome of a form submission, independent of how it is displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthFeedback {
    /// Shown in green
    Success(String),
    /// Shown in red
    Failure(String),
}

/// State of the auth surface: the active mode and the last status message
///
/// Switching modes always discards the status message, exactly like
/// flipping tabs on the original page.
#[derive(Debug)]
pub struct AuthPage {
    mode: AuthMode,
    status: Option<AuthFeedback>,
}

impl AuthPage {
    /// Create a page with the given initial mode and no status message
    pub fn new(initial: AuthMode) -> Self {
        Self {
            mode: initial,
            status: None,
        }
    }

    /// The currently active mode
    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    /// The last recorded status message, if any
    pub fn status(&self) -> Option<&AuthFeedback> {
        self.status.as_ref()
    }

    /// Switch to a mode, clearing any prior status message
    pub fn switch_to(&mut self, mode: AuthMode) {
        self.mode = mode;
        self.status = None;
    }

    /// Record the outcome of a submission
    pub fn record(&mut self, feedback: AuthFeedback) {
        self.status = Some(feedback);
    }
}

/// Submit a registration
///
/// Error-shaped responses and "exists"-flavored messages are failures;
/// any other response counts as success. Fields are trimmed, nothing
/// else is validated client-side.
pub async fn submit_register(
    api: &TaskApi,
    name: &str,
    email: &str,
    password: &str,
) -> Result<AuthFeedback> {
    let outcome = api
        .register(name.trim(), email.trim(), password.trim())
        .await?;

    Ok(match outcome {
        RegisterOutcome::Error { error } => AuthFeedback::Failure(error),
        RegisterOutcome::Message { message } if message.contains("exists") => {
            AuthFeedback::Failure(message)
        }
        RegisterOutcome::Message { .. } => {
            AuthFeedback::Success("Registered! Now log in.".to_string())
        }
    })
}

/// Result of a login submission
#[derive(Debug, Clone, PartialEq)]
pub enum LoginFlow {
    /// Session stored; the caller should move on to the dashboard
    LoggedIn(User),
    /// Session untouched; the message explains why
    Denied(String),
}

/// Submit a login and store the session on success
///
/// A response without a token is a denial and leaves the stored session
/// untouched.
pub async fn submit_login(
    api: &TaskApi,
    store: &SessionStore,
    email: &str,
    password: &str,
) -> Result<LoginFlow> {
    let outcome = api.login(email.trim(), password.trim()).await?;

    match outcome {
        LoginOutcome::Accepted { token, user } => {
            store.save(&token, &user)?;
            tracing::info!("Logged in as {}", user.name);
            Ok(LoginFlow::LoggedIn(user))
        }
        LoginOutcome::Rejected { message } => Ok(LoginFlow::Denied(
            message.unwrap_or_else(|| "Login failed".to_string()),
        )),
    }
}

/// One-shot `register` command
pub async fn register_once(api: &TaskApi, name: &str, email: &str, password: &str) -> Result<()> {
    match submit_register(api, name, email, password).await? {
        AuthFeedback::Success(message) => {
            println!("{}", message.green());
            Ok(())
        }
        AuthFeedback::Failure(message) => {
            println!("{}", message.red());
            std::process::exit(1);
        }
    }
}

/// One-shot `login` command
pub async fn login_once(
    api: &TaskApi,
    store: &SessionStore,
    email: &str,
    password: &str,
) -> Result<()> {
    match submit_login(api, store, email, password).await? {
        LoginFlow::LoggedIn(user) => {
            println!("{}", format!("Logged in as {}.", user.name).green());
            Ok(())
        }
        LoginFlow::Denied(message) => {
            println!("{}", message.red());
            std::process::exit(1);
        }
    }
}

/// One-shot `logout` command
pub fn logout(store: &SessionStore) -> Result<()> {
    store.clear()?;
    println!("Logged out.");
    Ok(())
}

/// One-shot `whoami` command
pub fn whoami(store: &SessionStore) -> Result<()> {
    match store.user()? {
        Some(user) => {
            match &user.email {
                Some(email) => println!("{} <{}>", user.name, email),
                None => println!("{}", user.name),
            }
            Ok(())
        }
        None => {
            println!("Not logged in. Run `taskdeck auth` to log in.");
            Ok(())
        }
    }
}

/// Run the interactive auth flow
///
/// Returns `true` when a login succeeded, in which case the caller moves
/// on to the dashboard.
pub async fn run_auth(api: &TaskApi, store: &SessionStore) -> Result<bool> {
    let mut page = AuthPage::new(AuthMode::Login);
    let mut rl = DefaultEditor::new()?;

    println!(
        "Type {} or {} to pick a form, press Enter to submit it, {} to leave.",
        "login".bold(),
        "register".bold(),
        "quit".bold()
    );

    loop {
        let prompt = format!("[{}] ", page.mode());
        match rl.readline(&prompt) {
            Ok(line) => {
                match line.trim() {
                    "login" => {
                        page.switch_to(AuthMode::Login);
                        continue;
                    }
                    "register" => {
                        page.switch_to(AuthMode::Register);
                        continue;
                    }
                    "quit" | "exit" => return Ok(false),
                    "help" => {
                        println!(
                            "login / register select the active form; an empty line submits it."
                        );
                        continue;
                    }
                    "" | "submit" => {}
                    other => {
                        println!("{}", format!("Unknown command: {}", other).red());
                        continue;
                    }
                }

                let feedback = match page.mode() {
                    AuthMode::Register => {
                        let name = rl.readline("  name: ")?;
                        let email = rl.readline("  email: ")?;
                        let password = rl.readline("  password: ")?;
                        let feedback = submit_register(api, &name, &email, &password).await;
                        if let Ok(AuthFeedback::Success(_)) = &feedback {
                            // Successful registration flips back to the login form
                            page.switch_to(AuthMode::Login);
                        }
                        feedback
                    }
                    AuthMode::Login => {
                        let email = rl.readline("  email: ")?;
                        let password = rl.readline("  password: ")?;
                        match submit_login(api, store, &email, &password).await {
                            Ok(LoginFlow::LoggedIn(user)) => {
                                println!("{}", format!("Logged in as {}.", user.name).green());
                                return Ok(true);
                            }
                            Ok(LoginFlow::Denied(message)) => Ok(AuthFeedback::Failure(message)),
                            Err(e) => Err(e),
                        }
                    }
                };

                match feedback {
                    Ok(feedback) => {
                        match &feedback {
                            AuthFeedback::Success(message) => println!("{}", message.green()),
                            AuthFeedback::Failure(message) => println!("{}", message.red()),
                        }
                        page.record(feedback);
                    }
                    Err(e) => {
                        // Transport failures surface like any other failure
                        println!("{}", format!("{}", e).red());
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(false),
            Err(e) => return Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_starts_without_status() {
        let page = AuthPage::new(AuthMode::Login);
        assert_eq!(page.mode(), AuthMode::Login);
        assert!(page.status().is_none());
    }

    #[test]
    fn test_switching_clears_status() {
        let mut page = AuthPage::new(AuthMode::Register);
        page.record(AuthFeedback::Failure("user already exists".to_string()));
        assert!(page.status().is_some());

        page.switch_to(AuthMode::Login);
        assert_eq!(page.mode(), AuthMode::Login);
        assert!(page.status().is_none());
    }

    #[test]
    fn test_switching_to_same_mode_still_clears_status() {
        let mut page = AuthPage::new(AuthMode::Login);
        page.record(AuthFeedback::Failure("bad credentials".to_string()));
        page.switch_to(AuthMode::Login);
        assert!(page.status().is_none());
    }

    #[test]
    fn test_record_keeps_latest_feedback() {
        let mut page = AuthPage::new(AuthMode::Login);
        page.record(AuthFeedback::Failure("first".to_string()));
        page.record(AuthFeedback::Success("second".to_string()));
        assert_eq!(
            page.status(),
            Some(&AuthFeedback::Success("second".to_string()))
        );
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(AuthMode::Login.to_string(), "login");
        assert_eq!(AuthMode::Register.to_string(), "register");
    }
}

//! Typed view over the five step inputs.
//!
//! # Inputs
//! - `posthog-project-id` (required)
//! - `posthog-token`      (required)
//! - `posthog-api-host`   (required)
//! - `annotation-message` (required)
//! - `dashboard-id`       (optional, base-10 integer when set)

use std::fmt;

use crate::config::{
    INPUT_API_HOST, INPUT_DASHBOARD_ID, INPUT_MESSAGE, INPUT_PROJECT_ID, INPUT_TOKEN,
    input_env_name,
};
use crate::errors::{ConfigError, Result};
use crate::types::DashboardId;

/// Raw string inputs of one invocation.
///
/// Values are trimmed. An absent optional input is an empty string.
#[derive(Clone, PartialEq, Eq)]
pub struct ActionInputs {
    pub project_id: String,
    pub token: String,
    pub api_host: String,
    pub message: String,
    pub dashboard_id: String,
}

// Hand-written so the token never ends up in logs.
impl fmt::Debug for ActionInputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionInputs")
            .field("project_id", &self.project_id)
            .field("token", &"<redacted>")
            .field("api_host", &self.api_host)
            .field("message", &self.message)
            .field("dashboard_id", &self.dashboard_id)
            .finish()
    }
}

impl ActionInputs {
    /// Reads all inputs from the process environment.
    ///
    /// The runner's `INPUT_POSTHOG-TOKEN` form wins; `INPUT_POSTHOG_TOKEN` is
    /// accepted as a fallback since most shells and `.env` files reject
    /// hyphens in variable names.
    ///
    /// # Errors
    /// [`ConfigError::MissingInput`] for the first required input that is
    /// absent or blank.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| {
            let key = input_env_name(name);
            std::env::var(&key)
                .or_else(|_| std::env::var(key.replace('-', "_")))
                .ok()
        })
    }

    /// Reads all inputs through `lookup`, which receives the input id
    /// (e.g. `posthog-token`) and returns its raw value if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            project_id: must_input(&lookup, INPUT_PROJECT_ID)?,
            token: must_input(&lookup, INPUT_TOKEN)?,
            api_host: must_input(&lookup, INPUT_API_HOST)?,
            message: must_input(&lookup, INPUT_MESSAGE)?,
            dashboard_id: opt_input(&lookup, INPUT_DASHBOARD_ID),
        })
    }

    /// Parses `dashboard-id`. `None` when the input is empty.
    pub fn dashboard_id(&self) -> Option<DashboardId> {
        if self.dashboard_id.is_empty() {
            return None;
        }
        Some(DashboardId::parse(&self.dashboard_id))
    }
}

/// Fetches a required, non-empty input.
fn must_input<F>(lookup: &F, name: &'static str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let value = opt_input(lookup, name);
    if value.is_empty() {
        return Err(ConfigError::MissingInput(name).into());
    }
    Ok(value)
}

/// Fetches an optional input, trimmed; empty string when unset.
fn opt_input<F>(lookup: &F, name: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|v| v.trim().to_string())
        .unwrap_or_default()
}

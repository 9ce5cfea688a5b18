//! Posts a PostHog annotation from GitHub Actions step inputs.
//!
//! Reading inputs is the only fallible step the caller has to handle; once
//! inputs are in hand, [`submit_annotation`] never fails. Network and
//! response problems are logged and reported back as
//! [`SubmitOutcome::Failed`] so the workflow keeps going.

pub mod client;
pub mod config;
mod errors;
pub mod telemetry;
pub mod types;
pub mod workflow;

use serde_json::Value;
use tracing::{error, info, warn};

pub use crate::client::PostHogClient;
pub use crate::config::ActionInputs;
pub use crate::errors::{AnnotationError, ConfigError, Result};
pub use crate::types::{AnnotationRequest, AnnotationScope, CreationType, DashboardId};

/// What happened to the single POST of an invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// PostHog answered with a JSON body (any status code).
    Created(Value),
    /// The exchange failed; the message has already been logged.
    Failed(String),
}

impl SubmitOutcome {
    /// `true` when PostHog answered with JSON, whatever the status code.
    pub fn is_created(&self) -> bool {
        matches!(self, SubmitOutcome::Created(_))
    }
}

/// Builds the annotation request for `inputs`, stamped with the current time.
///
/// A `dashboard-id` without leading digits still scopes the annotation to a
/// dashboard; the id goes out as `null` and PostHog decides what to do.
pub fn build_request(inputs: &ActionInputs) -> AnnotationRequest {
    let dashboard_id = inputs.dashboard_id();
    if dashboard_id.is_some_and(|id| id.value().is_none()) {
        warn!(
            dashboard_id = %inputs.dashboard_id,
            "dashboard-id is not a number, sending null"
        );
    }
    AnnotationRequest::now(inputs.message.clone(), dashboard_id)
}

/// Sends one annotation and logs the result.
///
/// The response body is logged at info level whatever its HTTP status;
/// transport and decoding errors are logged at error level.
pub async fn submit(
    client: &PostHogClient,
    project_id: &str,
    request: &AnnotationRequest,
) -> SubmitOutcome {
    match client.create_annotation(project_id, request).await {
        Ok(data) => {
            info!(response = %data, "success");
            SubmitOutcome::Created(data)
        }
        Err(e) => {
            error!(error = %e, "error");
            SubmitOutcome::Failed(e.to_string())
        }
    }
}

/// Runs the full step for already-read inputs: build, send, log.
pub async fn submit_annotation(inputs: &ActionInputs) -> SubmitOutcome {
    let request = build_request(inputs);

    let client = match PostHogClient::from_inputs(inputs) {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, "error");
            return SubmitOutcome::Failed(e.to_string());
        }
    };

    info!(
        project = %inputs.project_id,
        scope = ?request.scope(),
        "submitting annotation"
    );

    submit(&client, &inputs.project_id, &request).await
}

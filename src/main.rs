use std::process::ExitCode;

use annotation_submitter::{ActionInputs, submit_annotation, telemetry, workflow};
use tracing::debug;

#[tokio::main]
async fn main() -> ExitCode {
    // Local runs may keep inputs in a .env file; on the runner there is none.
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    telemetry::init();
    debug!(dotenv_loaded, "environment prepared");

    let inputs = match ActionInputs::from_env() {
        Ok(inputs) => inputs,
        Err(e) => {
            workflow::set_failed(&e.to_string());
            return ExitCode::FAILURE;
        }
    };

    // Network failures are already logged and must not fail the step.
    let outcome = submit_annotation(&inputs).await;
    debug!(created = outcome.is_created(), "annotation step finished");
    ExitCode::SUCCESS
}

//! Step inputs as the GitHub Actions runner hands them to the process.
//!
//! The runner exposes every `with:` input of a step as an environment
//! variable named `INPUT_<NAME>`, where `<NAME>` is the input id with spaces
//! replaced by `_` and upper-cased. Hyphens are kept, so `posthog-token`
//! becomes `INPUT_POSTHOG-TOKEN`.

pub mod action_inputs;

pub use action_inputs::ActionInputs;

/// Target PostHog project id (required).
pub const INPUT_PROJECT_ID: &str = "posthog-project-id";
/// Personal API key used as bearer token (required).
pub const INPUT_TOKEN: &str = "posthog-token";
/// Base URL of the PostHog instance, e.g. `https://app.posthog.com` (required).
pub const INPUT_API_HOST: &str = "posthog-api-host";
/// Free-text annotation content (required).
pub const INPUT_MESSAGE: &str = "annotation-message";
/// Dashboard to scope the annotation to (optional).
pub const INPUT_DASHBOARD_ID: &str = "dashboard-id";

/// Maps an input id to the environment variable the runner sets for it.
pub fn input_env_name(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

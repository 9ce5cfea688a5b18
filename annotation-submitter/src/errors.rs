//! Unified error handling for `annotation-submitter`.
//!
//! Errors fall into two tiers:
//!
//! - [`ConfigError`] — anything that goes wrong while reading the step inputs.
//!   The binary treats these as fatal and fails the workflow step.
//! - Transport/response errors — anything that goes wrong while talking to
//!   PostHog. These are only logged by [`crate::submit_annotation`].
//!
//! All messages include the suffix `[Annotation Submitter]` to simplify
//! attribution in logs.

use thiserror::Error;

/* ------------------------------------------------------------------------- */
/* Public result alias                                                       */
/* ------------------------------------------------------------------------- */

/// Unified result alias for the entire crate.
pub type Result<T> = std::result::Result<T, AnnotationError>;

/* ------------------------------------------------------------------------- */
/* Top-level error                                                           */
/* ------------------------------------------------------------------------- */

/// Top-level error for the `annotation-submitter` crate.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum AnnotationError {
    /// Step input could not be read or parsed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Underlying HTTP transport error (DNS, connect, reset, body read).
    #[error("[Annotation Submitter] transport error: {0}")]
    HttpTransport(#[from] reqwest::Error),

    /// PostHog answered with a body that is not valid JSON.
    #[error("[Annotation Submitter] invalid response body: {0}")]
    InvalidResponse(String),
}

impl AnnotationError {
    /// Returns `true` for errors that must fail the surrounding workflow step.
    pub fn is_fatal(&self) -> bool {
        matches!(self, AnnotationError::Config(_))
    }
}

impl From<serde_json::Error> for AnnotationError {
    fn from(e: serde_json::Error) -> Self {
        AnnotationError::InvalidResponse(e.to_string())
    }
}

/* ------------------------------------------------------------------------- */
/* Config errors                                                             */
/* ------------------------------------------------------------------------- */

/// Errors raised while reading step inputs.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required input is missing or empty.
    #[error("[Annotation Submitter] input required and not supplied: {0}")]
    MissingInput(&'static str),
}

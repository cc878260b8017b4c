//! Error types for the move validation pipeline.
//!
//! Every failure carries the identity of the stage that produced it and is
//! surfaced verbatim; nothing is retried automatically.

use std::time::Duration;

/// Errors raised by the validation pipeline.
#[derive(Debug, thiserror::Error)]
pub enum ArmvError {
    /// Credential acquisition or subscription login failed.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Source or target resource group does not exist.
    #[error("resource group '{0}' does not exist")]
    ResourceGroupNotFound(String),

    /// The source resource group holds nothing that could be moved.
    #[error("no resources found in source resource group '{0}'")]
    EmptyResourceGroup(String),

    /// A move request must name at least one resource.
    #[error("move request contains no resource ids")]
    EmptyMoveRequest,

    /// Network or API failure during a remote call.
    #[error("{stage}: transport error: {source}")]
    Transport {
        stage: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The control plane answered with something the stage cannot use.
    #[error("{stage}: unexpected API response: {detail}")]
    Api { stage: &'static str, detail: String },

    /// The polling deadline elapsed before the operation reached a terminal state.
    #[error("polling deadline of {deadline:?} exceeded after {elapsed:?}")]
    Timeout { deadline: Duration, elapsed: Duration },

    /// Polling was interrupted by a process signal.
    #[error("polling cancelled by interrupt signal")]
    Cancelled,

    /// The operation finished with a status code outside the documented set.
    #[error("unexpected terminal status {status} {status_text}")]
    UnexpectedStatus { status: u16, status_text: String },

    /// A terminal body that should have been JSON was not.
    #[error("cannot interpret validation response: {0}")]
    Interpretation(String),

    /// Writing the output artifact failed.
    #[error("failed to write output '{path}': {source}")]
    Output {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A command-line argument failed validation before any network call.
    #[error("{0}")]
    Usage(String),
}

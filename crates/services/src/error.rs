//! Shared error types for the services crate.

use thiserror::Error;

use interview_core::model::{ProfileError, SessionError, SessionId, SummaryError};

/// Errors emitted while talking to the remote interview service.
///
/// The store's `last_error` message is derived from `Display` on these; the
/// caller additionally gets the typed value through `Result`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InterviewApiError {
    #[error("interview service returned no questions")]
    EmptyQuestions,

    #[error("interview service request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by the interview transitions.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InterviewError {
    #[error("another interview request is still in flight")]
    Busy,

    #[error("unknown interview session {0}")]
    UnknownSession(SessionId),

    #[error(transparent)]
    Api(#[from] InterviewApiError),

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Summary(#[from] SummaryError),
}

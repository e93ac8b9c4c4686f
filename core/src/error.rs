//! Error taxonomy for the form-to-tracker translation pipeline.
//!
//! # Design
//! Every variant is a per-request, recoverable failure; none is fatal to the
//! process. The `Display` strings are user-facing — the webui returns them
//! verbatim as the response body — so they keep the exact wording the front
//! end has always shown. `RemoteTaskCreationFailed` displays the raw tracker
//! response body with no decoration for the same reason.

use std::fmt;

/// Errors returned by [`TrackerClient`](crate::TrackerClient) build and parse
/// methods.
#[derive(Debug)]
pub enum TranslateError {
    /// `task_start` did not split into exactly three integer components, or
    /// the components do not name a real calendar instant.
    InvalidStartDate,

    /// `task_time` did not split into exactly two integer components.
    InvalidStartTime,

    /// `task_name` was empty or absent.
    MissingTaskName,

    /// `repeat_info` was not one of the fixed recurrence keywords.
    InvalidRecurrenceKeyword,

    /// The tracker answered with a status other than 200, or the transport
    /// failed outright. Carries the response body (or transport error text).
    RemoteTaskCreationFailed(String),

    /// The outbound payload could not be serialized to JSON. Not reachable
    /// from well-formed form input.
    Serialization(String),
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslateError::InvalidStartDate => write!(f, "Invalid value for start date!"),
            TranslateError::InvalidStartTime => write!(f, "Invalid value for start time!"),
            TranslateError::MissingTaskName => write!(f, "No task name!"),
            TranslateError::InvalidRecurrenceKeyword => write!(f, "Wrong repeat info!"),
            TranslateError::RemoteTaskCreationFailed(body) => write!(f, "{body}"),
            TranslateError::Serialization(msg) => write!(f, "serialization failed: {msg}"),
        }
    }
}

impl std::error::Error for TranslateError {}

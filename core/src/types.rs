//! Form and payload DTOs for the tracker front end.
//!
//! # Design
//! `TaskForm` mirrors the form-encoded field names of the browser page;
//! `TaskPayload` mirrors the tracker's camelCase JSON contract. Keeping the
//! two separate means the validation pipeline is the only path between them.
//! Every `TaskForm` field defaults to the empty string so a missing field
//! reaches the pipeline (and gets a descriptive error) instead of failing
//! extraction.

use serde::{Deserialize, Serialize};

/// Raw task-entry form as submitted by the browser. Consumed once per
/// submission; nothing persists across requests.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct TaskForm {
    #[serde(default)]
    pub task_name: String,
    /// Expected "YYYY-MM-DD".
    #[serde(default)]
    pub task_start: String,
    /// Expected "HH:MM".
    #[serde(default)]
    pub task_time: String,
    /// One of `daily`, `weekly`, `weekdays`, `biweekly`.
    #[serde(default)]
    pub repeat_info: String,
}

/// JSON body of the outbound `POST /task` request. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    pub task_name: String,
    /// Unix epoch seconds of the first occurrence, computed in the configured
    /// time zone.
    pub task_start: i64,
    pub task_repeat_info: u32,
    pub task_repeat_type: u8,
}

//! Request builder and response parser for the task-tracker web front end.
//!
//! # Overview
//! Turns a raw task-entry form into the one outbound `POST /task` request the
//! tracker understands, and interprets the tracker's response, without touching
//! the network (host-does-IO pattern). The `webui` crate executes the actual
//! HTTP round-trip, keeping this core fully deterministic and testable.
//!
//! # Design
//! - `TrackerClient` is stateless — it holds only `base_url`.
//! - `build_create_task` validates and translates the form; `parse_create_task`
//!   interprets the tracker's response. The I/O boundary sits between them.
//! - The time zone used for the date/time-to-epoch conversion is injected by
//!   the caller rather than read from the host, so the conversion is
//!   reproducible in tests.

pub mod client;
pub mod error;
pub mod http;
pub mod repeat;
pub mod types;

pub use client::TrackerClient;
pub use error::TranslateError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use repeat::RepeatType;
pub use types::{TaskForm, TaskPayload};

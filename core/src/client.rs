//! Stateless request builder and response parser for the tracker API.
//!
//! # Design
//! `TrackerClient` holds only a `base_url` and carries no mutable state
//! between calls. `build_create_task` runs the whole validation/translation
//! pipeline and produces the one `HttpRequest` this system ever issues;
//! `parse_create_task` consumes the `HttpResponse`. The caller executes the
//! actual HTTP round-trip between the two, keeping the core deterministic and
//! free of I/O dependencies.

use chrono::TimeZone;

use crate::error::TranslateError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::repeat;
use crate::types::{TaskForm, TaskPayload};

/// Synchronous, stateless client for the tracker's task-creation endpoint.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_create_task` and `parse_create_task`.
#[derive(Debug, Clone)]
pub struct TrackerClient {
    base_url: String,
}

impl TrackerClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Validate a raw form and translate it into the outbound `POST /task`
    /// request.
    ///
    /// Checks run in a fixed order and short-circuit on the first failure:
    /// start date, start time, task name, epoch conversion, recurrence
    /// keyword. The epoch is computed in `tz`; the zone is injected rather
    /// than read from the host so the conversion stays reproducible.
    pub fn build_create_task<Tz: TimeZone>(
        &self,
        form: &TaskForm,
        tz: &Tz,
    ) -> Result<HttpRequest, TranslateError> {
        let (year, month, day) = parse_start_date(&form.task_start)?;
        let (hour, minute) = parse_start_time(&form.task_time)?;

        if form.task_name.is_empty() {
            return Err(TranslateError::MissingTaskName);
        }

        // Nonexistent calendar instants (month 13, Feb 30, a zone's spring-
        // forward gap) fail the same way a malformed date string does; an
        // ambiguous instant resolves to its earlier occurrence.
        let start = tz
            .with_ymd_and_hms(year, month, day, hour, minute, 0)
            .earliest()
            .ok_or(TranslateError::InvalidStartDate)?;

        let (repeat_type, repeat_info) = repeat::encode(&form.repeat_info)?;

        let payload = TaskPayload {
            task_name: form.task_name.clone(),
            task_start: start.timestamp(),
            task_repeat_info: repeat_info,
            task_repeat_type: repeat_type.code(),
        };
        let body = serde_json::to_string(&payload)
            .map_err(|e| TranslateError::Serialization(e.to_string()))?;

        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/task", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// Interpret the tracker's response to a task-creation request.
    ///
    /// Only an exact 200 counts as success; any other status fails with the
    /// raw response body so the user sees whatever the tracker said.
    pub fn parse_create_task(&self, response: HttpResponse) -> Result<(), TranslateError> {
        if response.status == 200 {
            return Ok(());
        }
        Err(TranslateError::RemoteTaskCreationFailed(response.body))
    }
}

/// Split "YYYY-MM-DD" into exactly three integer components.
fn parse_start_date(s: &str) -> Result<(i32, u32, u32), TranslateError> {
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 3 {
        return Err(TranslateError::InvalidStartDate);
    }
    let year = parts[0].parse().map_err(|_| TranslateError::InvalidStartDate)?;
    let month = parts[1].parse().map_err(|_| TranslateError::InvalidStartDate)?;
    let day = parts[2].parse().map_err(|_| TranslateError::InvalidStartDate)?;
    Ok((year, month, day))
}

/// Split "HH:MM" into exactly two integer components.
fn parse_start_time(s: &str) -> Result<(u32, u32), TranslateError> {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 2 {
        return Err(TranslateError::InvalidStartTime);
    }
    let hour = parts[0].parse().map_err(|_| TranslateError::InvalidStartTime)?;
    let minute = parts[1].parse().map_err(|_| TranslateError::InvalidStartTime)?;
    Ok((hour, minute))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Tz;

    fn client() -> TrackerClient {
        TrackerClient::new("http://127.0.0.1:8181")
    }

    fn form(name: &str, date: &str, time: &str, repeat: &str) -> TaskForm {
        TaskForm {
            task_name: name.to_string(),
            task_start: date.to_string(),
            task_time: time.to_string(),
            repeat_info: repeat.to_string(),
        }
    }

    fn payload_of(req: &HttpRequest) -> TaskPayload {
        serde_json::from_str(req.body.as_deref().unwrap()).unwrap()
    }

    #[test]
    fn build_create_task_produces_post_to_task_endpoint() {
        let f = form("Pay rent", "2024-04-01", "08:00", "weekly");
        let req = client().build_create_task(&f, &chrono_tz::UTC).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://127.0.0.1:8181/task");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );

        let payload = payload_of(&req);
        assert_eq!(payload.task_name, "Pay rent");
        assert_eq!(payload.task_start, 1711958400); // 2024-04-01T08:00:00Z
        assert_eq!(payload.task_repeat_info, 7);
        assert_eq!(payload.task_repeat_type, 4);
    }

    #[test]
    fn epoch_conversion_uses_injected_zone() {
        let f = form("Standup", "2024-03-10", "09:30", "daily");
        let req = client().build_create_task(&f, &chrono_tz::UTC).unwrap();
        // 2024-03-10T09:30:00 UTC
        assert_eq!(payload_of(&req).task_start, 1710063000);

        let berlin: Tz = "Europe/Berlin".parse().unwrap();
        let req = client().build_create_task(&f, &berlin).unwrap();
        // Berlin is UTC+1 on that date, so the instant is an hour earlier.
        assert_eq!(payload_of(&req).task_start, 1710063000 - 3600);
    }

    #[test]
    fn build_create_task_is_deterministic() {
        let f = form("Pay rent", "2024-04-01", "08:00", "weekly");
        let a = client().build_create_task(&f, &chrono_tz::UTC).unwrap();
        let b = client().build_create_task(&f, &chrono_tz::UTC).unwrap();
        assert_eq!(a.path, b.path);
        assert_eq!(a.body, b.body);
    }

    #[test]
    fn two_component_date_fails_before_other_checks() {
        // Name and keyword are also bad; the date error must win.
        let f = form("", "2024-3", "08:00", "nope");
        let err = client().build_create_task(&f, &chrono_tz::UTC).unwrap_err();
        assert!(matches!(err, TranslateError::InvalidStartDate));
    }

    #[test]
    fn non_integer_date_component_is_rejected() {
        let f = form("Dishes", "2024-04-xx", "08:00", "daily");
        let err = client().build_create_task(&f, &chrono_tz::UTC).unwrap_err();
        assert!(matches!(err, TranslateError::InvalidStartDate));
    }

    #[test]
    fn calendar_invalid_date_is_rejected() {
        let f = form("Dishes", "2024-02-30", "08:00", "daily");
        let err = client().build_create_task(&f, &chrono_tz::UTC).unwrap_err();
        assert!(matches!(err, TranslateError::InvalidStartDate));
    }

    #[test]
    fn three_component_time_fails_before_name_check() {
        let f = form("", "2024-04-01", "9:30:00", "weekly");
        let err = client().build_create_task(&f, &chrono_tz::UTC).unwrap_err();
        assert!(matches!(err, TranslateError::InvalidStartTime));
    }

    #[test]
    fn empty_name_fails_with_valid_date_and_time() {
        let f = form("", "2024-04-01", "08:00", "weekly");
        let err = client().build_create_task(&f, &chrono_tz::UTC).unwrap_err();
        assert!(matches!(err, TranslateError::MissingTaskName));
    }

    #[test]
    fn unknown_recurrence_keyword_propagates() {
        let f = form("Pay rent", "2024-04-01", "08:00", "monthly");
        let err = client().build_create_task(&f, &chrono_tz::UTC).unwrap_err();
        assert!(matches!(err, TranslateError::InvalidRecurrenceKeyword));
    }

    #[test]
    fn unpadded_date_and_time_components_parse() {
        // "2024-4-1" and "8:05" are integer-parseable, so they pass.
        let f = form("Pay rent", "2024-4-1", "8:05", "weekly");
        let req = client().build_create_task(&f, &chrono_tz::UTC).unwrap();
        assert_eq!(payload_of(&req).task_start, 1711958700); // 2024-04-01T08:05:00Z
    }

    #[test]
    fn parse_create_task_accepts_exactly_200() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: String::new(),
        };
        assert!(client().parse_create_task(response).is_ok());
    }

    #[test]
    fn parse_create_task_surfaces_remote_body() {
        let response = HttpResponse {
            status: 500,
            headers: Vec::new(),
            body: "db error".to_string(),
        };
        let err = client().parse_create_task(response).unwrap_err();
        match err {
            TranslateError::RemoteTaskCreationFailed(body) => assert_eq!(body, "db error"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_create_task_rejects_other_success_statuses() {
        let response = HttpResponse {
            status: 201,
            headers: Vec::new(),
            body: "created".to_string(),
        };
        assert!(client().parse_create_task(response).is_err());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TrackerClient::new("http://127.0.0.1:8181/");
        let f = form("Pay rent", "2024-04-01", "08:00", "weekly");
        let req = client.build_create_task(&f, &chrono_tz::UTC).unwrap();
        assert_eq!(req.path, "http://127.0.0.1:8181/task");
    }
}

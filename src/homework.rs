// src/homework.rs
//! Response validation and status-to-message translation.
//!
//! The API answers with a JSON object shaped like
//! `{"current_date": 1700000000, "homeworks": [{"status": "...", "homework_name": "..."}]}`.
//! Only the first homework is tracked.

use serde_json::{Map, Value};

use crate::error::{BotError, Result};

/// A single homework entry as returned by the API.
pub type HomeworkRecord = Map<String, Value>;

/// Closed set of review statuses the API reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "approved" => Some(Self::Approved),
            "reviewing" => Some(Self::Reviewing),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    pub fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "The work has been reviewed: the reviewer liked everything. Hooray!",
            Self::Reviewing => "The work has been taken up for review.",
            Self::Rejected => "The work has been reviewed and errors were found.",
        }
    }
}

/// Server-provided `current_date`, if any. Must be a non-negative number when
/// present; fractional seconds are truncated.
pub fn current_date(response: &Value) -> Result<Option<i64>> {
    let obj = as_object(response)?;
    match obj.get("current_date") {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v
            .as_i64()
            .or_else(|| {
                v.as_f64()
                    .filter(|f| f.is_finite() && *f < i64::MAX as f64)
                    .map(|f| f.trunc() as i64)
            })
            .filter(|d| *d >= 0)
            .map(Some)
            .ok_or_else(|| BotError::MalformedResponse(format!("current_date is not a timestamp: {v}"))),
    }
}

/// Validate the payload shape and return the first homework record.
pub fn check_response(response: &Value) -> Result<HomeworkRecord> {
    let obj = as_object(response)?;
    let homeworks = obj
        .get("homeworks")
        .ok_or_else(|| BotError::MalformedResponse("no `homeworks` key in response".into()))?
        .as_array()
        .ok_or_else(|| BotError::MalformedResponse("`homeworks` is not a list".into()))?;

    let first = homeworks
        .first()
        .ok_or_else(|| BotError::MalformedResponse("`homeworks` list is empty".into()))?;

    first
        .as_object()
        .cloned()
        .ok_or_else(|| BotError::MalformedResponse("homework entry is not an object".into()))
}

/// Build the chat message for a homework record.
pub fn parse_status(homework: &HomeworkRecord) -> Result<String> {
    let status = homework.get("status").ok_or(BotError::MissingField("status"))?;
    let name = string_field(homework, "homework_name")?;
    let verdict = status
        .as_str()
        .and_then(HomeworkStatus::parse)
        .ok_or_else(|| match status {
            Value::String(s) => BotError::UnknownStatus(s.clone()),
            other => BotError::UnknownStatus(other.to_string()),
        })?
        .verdict();
    Ok(format!("Changed review status for \"{name}\". {verdict}"))
}

fn as_object(response: &Value) -> Result<&Map<String, Value>> {
    response
        .as_object()
        .ok_or_else(|| BotError::MalformedResponse("response is not a JSON object".into()))
}

fn string_field<'a>(homework: &'a HomeworkRecord, key: &'static str) -> Result<&'a str> {
    match homework.get(key) {
        None | Some(Value::Null) => Err(BotError::MissingField(key)),
        Some(v) => v
            .as_str()
            .ok_or_else(|| BotError::MalformedResponse(format!("`{key}` is not a string"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(v: Value) -> HomeworkRecord {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn approved_message_is_exact() {
        let hw = record(json!({"status": "approved", "homework_name": "X"}));
        assert_eq!(
            parse_status(&hw).unwrap(),
            "Changed review status for \"X\". The work has been reviewed: the reviewer liked everything. Hooray!"
        );
    }

    #[test]
    fn every_known_status_has_a_verdict() {
        for (s, kind) in [
            ("approved", HomeworkStatus::Approved),
            ("reviewing", HomeworkStatus::Reviewing),
            ("rejected", HomeworkStatus::Rejected),
        ] {
            assert_eq!(HomeworkStatus::parse(s), Some(kind));
            let hw = record(json!({"status": s, "homework_name": "hw"}));
            assert!(parse_status(&hw).unwrap().ends_with(kind.verdict()));
        }
    }

    #[test]
    fn missing_fields_are_named() {
        let hw = record(json!({"homework_name": "X"}));
        assert_eq!(parse_status(&hw), Err(BotError::MissingField("status")));

        let hw = record(json!({"status": "approved"}));
        assert_eq!(parse_status(&hw), Err(BotError::MissingField("homework_name")));
    }

    #[test]
    fn unknown_status_is_rejected() {
        for s in ["", "APPROVED", "pending", "done"] {
            let hw = record(json!({"status": s, "homework_name": "X"}));
            assert_eq!(parse_status(&hw), Err(BotError::UnknownStatus(s.to_string())));
        }
    }

    #[test]
    fn non_string_status_is_unknown_not_missing() {
        let hw = record(json!({"status": 5, "homework_name": "X"}));
        assert_eq!(parse_status(&hw), Err(BotError::UnknownStatus("5".into())));

        let hw = record(json!({"status": null, "homework_name": "X"}));
        assert_eq!(parse_status(&hw), Err(BotError::UnknownStatus("null".into())));

        let hw = record(json!({"status": ["approved"], "homework_name": "X"}));
        assert!(matches!(parse_status(&hw), Err(BotError::UnknownStatus(_))));
    }

    #[test]
    fn check_response_shape_failures() {
        let cases = [
            json!([]),
            json!("text"),
            json!({}),
            json!({"current_date": 1}),
            json!({"homeworks": {}}),
            json!({"homeworks": []}),
            json!({"homeworks": [1]}),
        ];
        for c in cases {
            assert!(
                matches!(check_response(&c), Err(BotError::MalformedResponse(_))),
                "expected MalformedResponse for {c}"
            );
        }
    }

    #[test]
    fn check_response_returns_first_homework() {
        let resp = json!({
            "homeworks": [
                {"status": "reviewing", "homework_name": "first"},
                {"status": "approved", "homework_name": "second"}
            ]
        });
        let hw = check_response(&resp).unwrap();
        assert_eq!(hw.get("homework_name"), Some(&json!("first")));
    }

    #[test]
    fn current_date_is_optional_but_typed() {
        assert_eq!(current_date(&json!({"homeworks": []})).unwrap(), None);
        assert_eq!(current_date(&json!({"current_date": 12345})).unwrap(), Some(12345));
        assert_eq!(
            current_date(&json!({"current_date": 1700000000.5})).unwrap(),
            Some(1700000000)
        );
        assert!(matches!(
            current_date(&json!({"current_date": "yesterday"})),
            Err(BotError::MalformedResponse(_))
        ));
        assert!(matches!(
            current_date(&json!({"current_date": -1})),
            Err(BotError::MalformedResponse(_))
        ));
    }
}

//! Mapping the terminal poll response to a typed report.

use chrono::{DateTime, Local};

use crate::error::ArmvError;
use crate::poller::{PollOutcome, API_RESOURCE_MOVE_FAIL, API_RESOURCE_MOVE_OK};

/// How the validation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    /// 204 - no movability issues found.
    Success,
    /// 409 - the control plane rejected the move.
    Conflict,
}

/// The report handed to the output sinks.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub source_resource_group: String,
    pub timestamp: DateTime<Local>,
    pub kind: OutcomeKind,
    /// Formatted text: success banner or pretty-printed conflict JSON.
    pub detail: String,
}

/// Interpret a terminal poll response.
///
/// 204 means validation succeeded and there is no body to format. 409 means
/// validation failed; the body is structured error JSON and is re-serialized
/// into stable, human-readable multi-line form. A malformed 409 body is an
/// interpretation error, never folded into success or conflict. Any other
/// status is surfaced as unexpected rather than guessed at.
pub fn interpret(
    source_resource_group: &str,
    outcome: &PollOutcome,
) -> Result<ValidationReport, ArmvError> {
    let timestamp = Local::now();

    match outcome.status_code {
        API_RESOURCE_MOVE_OK => Ok(ValidationReport {
            source_resource_group: source_resource_group.to_string(),
            timestamp,
            kind: OutcomeKind::Success,
            detail: format!(
                "*** SUCCESS - No Azure Resource Move Validation issues found. ***\n\
                 *** Response Status Code OK: {} ***",
                outcome.status_text
            ),
        }),
        API_RESOURCE_MOVE_FAIL => {
            let detail = pretty_json(&outcome.body)?;
            Ok(ValidationReport {
                source_resource_group: source_resource_group.to_string(),
                timestamp,
                kind: OutcomeKind::Conflict,
                detail,
            })
        }
        status => Err(ArmvError::UnexpectedStatus {
            status,
            status_text: outcome.status_text.clone(),
        }),
    }
}

/// Re-serialize a JSON body into pretty-printed form.
///
/// Round-trips the same key/value pairs; anything that is not valid JSON is
/// an explicit error.
fn pretty_json(body: &[u8]) -> Result<String, ArmvError> {
    let text = std::str::from_utf8(body)
        .map_err(|e| ArmvError::Interpretation(format!("body is not UTF-8: {e}")))?;
    let value: serde_json::Value = serde_json::from_str(text)
        .map_err(|e| ArmvError::Interpretation(format!("body is not valid JSON: {e}")))?;
    serde_json::to_string_pretty(&value)
        .map_err(|e| ArmvError::Interpretation(format!("cannot pretty-print body: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(status_code: u16, body: &str, status_text: &str) -> PollOutcome {
        PollOutcome {
            status_code,
            body: body.as_bytes().to_vec(),
            status_text: status_text.to_string(),
        }
    }

    #[test]
    fn test_204_is_success() {
        let report = interpret("my-rg", &outcome(204, "", "No Content"))
            .expect("204 should interpret cleanly");
        assert_eq!(report.kind, OutcomeKind::Success);
        assert_eq!(report.source_resource_group, "my-rg");
        assert!(
            report.detail.contains("No Content"),
            "Detail should carry the status text: {}",
            report.detail
        );
    }

    #[test]
    fn test_409_is_conflict_and_round_trips() {
        let body = r#"{"error":{"code":"ResourceMoveNotSupported","details":[{"code":"Conflict"}]}}"#;
        let report = interpret("my-rg", &outcome(409, body, "Conflict"))
            .expect("Well-formed 409 should interpret cleanly");
        assert_eq!(report.kind, OutcomeKind::Conflict);
        assert!(
            report.detail.lines().count() > 1,
            "Conflict detail should be multi-line: {}",
            report.detail
        );

        // Pretty-printing must preserve the key/value pairs exactly.
        let reparsed: serde_json::Value =
            serde_json::from_str(&report.detail).expect("Detail should still be JSON");
        let original: serde_json::Value = serde_json::from_str(body).expect("Test body is JSON");
        assert_eq!(reparsed, original, "Round trip must not change the payload");
    }

    #[test]
    fn test_409_with_malformed_body_is_interpretation_error() {
        let err = interpret("my-rg", &outcome(409, "not-json", "Conflict"))
            .expect_err("Malformed conflict body must error");
        assert!(matches!(err, ArmvError::Interpretation(_)), "Got {err:?}");
    }

    #[test]
    fn test_other_status_is_unexpected() {
        let err = interpret("my-rg", &outcome(500, "oops", "Internal Server Error"))
            .expect_err("500 is outside the documented terminal set");
        assert!(
            matches!(err, ArmvError::UnexpectedStatus { status: 500, .. }),
            "Got {err:?}"
        );
    }
}

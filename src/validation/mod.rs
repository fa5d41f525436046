use serde::Deserialize;

use crate::error::FieldError;

/// Incoming payload for PATCH /users/:id/status. A request body without the
/// field deserializes with `status_message: None` so the validator can report
/// it instead of the JSON layer rejecting the request outright.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusRequest {
    #[serde(default, rename = "statusMessage")]
    pub status_message: Option<String>,
}

/// Validate a status-change payload before it reaches storage.
///
/// Returns every violated rule, not just the first. Pure function of the
/// input; a failing payload must never cause a mutation.
pub fn validate_status_update(
    request: &UpdateStatusRequest,
    max_length: usize,
) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    match request.status_message.as_deref() {
        None => {
            errors.push(FieldError::new("statusMessage", "StatusMessage is required"));
        }
        Some(message) if message.is_empty() => {
            errors.push(FieldError::new("statusMessage", "StatusMessage must not be empty"));
        }
        Some(message) => {
            // Character count, matching the column capacity
            if message.chars().count() > max_length {
                errors.push(FieldError::new(
                    "statusMessage",
                    format!("StatusMessage must be at most {} characters", max_length),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::models::NewRsvp;

// -- Errors --

/// Body of every non-2xx JSON response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: Vec::new(),
        }
    }
}

/// One failing field of a request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

// -- Health --

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub invitations: usize,
}

// -- RSVPs --

const DEFAULT_GUEST_COUNT: i32 = 1;

/// Check a raw `POST /api/rsvps` body and turn it into a [`NewRsvp`].
///
/// Every failing field is reported, not only the first. Unknown fields are
/// ignored.
pub fn validate_rsvp(body: &Value) -> Result<NewRsvp, Vec<FieldError>> {
    let Some(obj) = body.as_object() else {
        return Err(vec![FieldError::new("body", "Expected a JSON object")]);
    };

    let mut errors = Vec::new();

    let invitation_id = required_uuid(obj, "invitationId", &mut errors);
    let guest_id = optional_uuid(obj, "guestId", &mut errors);
    let first_name = required_text(obj, "firstName", &mut errors);
    let last_name = required_text(obj, "lastName", &mut errors);
    let email = required_text(obj, "email", &mut errors);

    let attending = match obj.get("attending") {
        Some(Value::Bool(b)) => Some(*b),
        None | Some(Value::Null) => {
            errors.push(FieldError::new("attending", "Required"));
            None
        }
        Some(_) => {
            errors.push(FieldError::new("attending", "Expected boolean"));
            None
        }
    };

    let guest_count = match obj.get("guestCount") {
        None | Some(Value::Null) => Some(DEFAULT_GUEST_COUNT),
        Some(Value::Number(n)) => match n.as_i64().map(i32::try_from) {
            Some(Ok(count)) if count >= 0 => Some(count),
            _ => {
                errors.push(FieldError::new(
                    "guestCount",
                    "Expected a non-negative integer",
                ));
                None
            }
        },
        Some(_) => {
            errors.push(FieldError::new("guestCount", "Expected number"));
            None
        }
    };

    let message = match obj.get("message") {
        None | Some(Value::Null) => Some(None),
        Some(Value::String(s)) => Some(Some(s.clone())),
        Some(_) => {
            errors.push(FieldError::new("message", "Expected string"));
            None
        }
    };

    match (
        invitation_id,
        guest_id,
        first_name,
        last_name,
        email,
        attending,
        guest_count,
        message,
    ) {
        (
            Some(invitation_id),
            Some(guest_id),
            Some(first_name),
            Some(last_name),
            Some(email),
            Some(attending),
            Some(guest_count),
            Some(message),
        ) if errors.is_empty() => Ok(NewRsvp {
            invitation_id,
            guest_id,
            first_name,
            last_name,
            email,
            attending,
            guest_count,
            message,
        }),
        _ => Err(errors),
    }
}

fn required_text(obj: &Map<String, Value>, field: &str, errors: &mut Vec<FieldError>) -> Option<String> {
    match obj.get(field) {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Some(Value::String(_)) => {
            errors.push(FieldError::new(field, "Must not be empty"));
            None
        }
        None | Some(Value::Null) => {
            errors.push(FieldError::new(field, "Required"));
            None
        }
        Some(_) => {
            errors.push(FieldError::new(field, "Expected string"));
            None
        }
    }
}

fn required_uuid(obj: &Map<String, Value>, field: &str, errors: &mut Vec<FieldError>) -> Option<Uuid> {
    match obj.get(field) {
        None | Some(Value::Null) => {
            errors.push(FieldError::new(field, "Required"));
            None
        }
        Some(value) => parse_uuid(value, field, errors),
    }
}

/// `Some(None)` when the field is absent or null, `None` when it is invalid.
fn optional_uuid(
    obj: &Map<String, Value>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<Option<Uuid>> {
    match obj.get(field) {
        None | Some(Value::Null) => Some(None),
        Some(value) => parse_uuid(value, field, errors).map(Some),
    }
}

fn parse_uuid(value: &Value, field: &str, errors: &mut Vec<FieldError>) -> Option<Uuid> {
    let Some(s) = value.as_str() else {
        errors.push(FieldError::new(field, "Expected string"));
        return None;
    };
    match s.parse() {
        Ok(id) => Some(id),
        Err(_) => {
            errors.push(FieldError::new(field, "Invalid id"));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn body() -> Value {
        json!({
            "invitationId": "6f1c3c1e-6a43-4d8e-9a3b-6c2b7d0f5a11",
            "firstName": "Sahar",
            "lastName": "Bouthour",
            "email": "sahar@example.com",
            "attending": true
        })
    }

    fn fields(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn accepts_minimal_body_with_defaults() {
        let rsvp = validate_rsvp(&body()).unwrap();
        assert_eq!(rsvp.guest_count, 1);
        assert_eq!(rsvp.guest_id, None);
        assert_eq!(rsvp.message, None);
        assert!(rsvp.attending);
    }

    #[test]
    fn keeps_optional_fields() {
        let mut b = body();
        b["guestId"] = json!("0b8f1a52-2a4e-4f55-8d56-2f0b1d1f7e22");
        b["guestCount"] = json!(3);
        b["message"] = json!("See you there");

        let rsvp = validate_rsvp(&b).unwrap();
        assert_eq!(rsvp.guest_count, 3);
        assert!(rsvp.guest_id.is_some());
        assert_eq!(rsvp.message.as_deref(), Some("See you there"));
    }

    #[test]
    fn reports_missing_email() {
        let mut b = body();
        b.as_object_mut().unwrap().remove("email");

        let errors = validate_rsvp(&b).unwrap_err();
        assert_eq!(errors, vec![FieldError::new("email", "Required")]);
    }

    #[test]
    fn reports_every_bad_field() {
        let b = json!({
            "invitationId": "not-a-uuid",
            "firstName": "  ",
            "lastName": 7,
            "attending": "yes",
            "guestCount": -1,
            "message": false
        });

        let errors = validate_rsvp(&b).unwrap_err();
        assert_eq!(
            fields(&errors),
            vec![
                "invitationId",
                "firstName",
                "lastName",
                "email",
                "attending",
                "guestCount",
                "message"
            ]
        );
    }

    #[test]
    fn rejects_fractional_guest_count() {
        let mut b = body();
        b["guestCount"] = json!(1.5);
        assert_eq!(fields(&validate_rsvp(&b).unwrap_err()), vec!["guestCount"]);
    }

    #[test]
    fn rejects_non_object_body() {
        let errors = validate_rsvp(&json!([1, 2])).unwrap_err();
        assert_eq!(fields(&errors), vec!["body"]);
    }
}

//! Request extractors that validate input at the HTTP boundary.

use axum::extract::{FromRequest, Request};
use axum::Json;
use haven_core::types::DbId;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// JSON body that has been deserialized *and* passed its `validator` rules.
///
/// Shape errors (malformed JSON, missing required fields, unknown enum
/// values) and rule violations both become 400 responses in the standard
/// error envelope, so handlers only ever see valid input.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        value.validate()?;
        Ok(Self(value))
    }
}

/// Parse a path identifier, rejecting anything that is not a positive integer.
pub fn parse_id(raw: &str, entity: &str) -> AppResult<DbId> {
    raw.trim()
        .parse::<DbId>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid {entity} id: '{raw}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn parse_id_accepts_positive_integers() {
        assert_eq!(parse_id("42", "room").unwrap(), 42);
        assert_eq!(parse_id(" 7 ", "room").unwrap(), 7);
    }

    #[test]
    fn parse_id_rejects_garbage() {
        assert_matches!(parse_id("abc", "room"), Err(AppError::BadRequest(msg)) if msg == "Invalid room id: 'abc'");
        assert!(parse_id("0", "room").is_err());
        assert!(parse_id("-1", "room").is_err());
        assert!(parse_id("", "room").is_err());
    }
}

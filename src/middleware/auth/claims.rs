/*
 * Responsibility
 * - Decode the payload segment of a bearer credential into Claims
 * - NOT cryptographic verification: the signature is never checked here.
 *   Authorization truth comes from the access decision call alone; this only
 *   recovers the subject identity and display metadata.
 */
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ClaimsError {
    #[error("credential does not have exactly three segments")]
    MalformedSegments,

    #[error("claims payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("claims payload is not a valid claims record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("claims subject is empty")]
    EmptySubject,
}

/// Claims carried in the credential payload. Decoded per request, consumed to
/// populate the request context, then dropped.
#[derive(Debug, Clone, Deserialize)]
pub struct Claims {
    #[serde(rename = "user_id", default)]
    pub subject_id: String,

    #[serde(rename = "user_access_level", default)]
    pub access_level: i32,

    #[serde(rename = "token_use_case", default)]
    pub use_case: String,

    #[serde(rename = "exp", default, with = "chrono::serde::ts_seconds_option")]
    pub expires_at: Option<DateTime<Utc>>,

    #[serde(rename = "issued", default, with = "chrono::serde::ts_seconds_option")]
    pub issued_at: Option<DateTime<Utc>>,
}

/// Decode the middle segment of a `header.payload.signature` credential.
///
/// URL-safe base64 without padding, then JSON. A credential with the wrong
/// number of segments, an undecodable payload, or an empty subject is
/// rejected.
pub fn decode(credential: &str) -> Result<Claims, ClaimsError> {
    let mut segments = credential.split('.');
    let payload = match (segments.next(), segments.next(), segments.next(), segments.next()) {
        (Some(_), Some(payload), Some(_), None) => payload,
        _ => return Err(ClaimsError::MalformedSegments),
    };

    let bytes = URL_SAFE_NO_PAD.decode(payload)?;
    let claims: Claims = serde_json::from_slice(&bytes)?;

    if claims.subject_id.is_empty() {
        return Err(ClaimsError::EmptySubject);
    }

    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credential(payload: &serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"RS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(payload.to_string());
        format!("{header}.{payload}.signature")
    }

    #[test]
    fn decodes_subject_and_metadata() {
        let token = credential(&serde_json::json!({
            "user_id": "alice",
            "user_access_level": 2,
            "token_use_case": "api",
            "issued": 1_700_000_000,
            "exp": 1_700_003_600,
        }));

        let claims = decode(&token).unwrap();
        assert_eq!(claims.subject_id, "alice");
        assert_eq!(claims.access_level, 2);
        assert_eq!(claims.use_case, "api");
        assert_eq!(claims.issued_at.unwrap().timestamp(), 1_700_000_000);
        assert_eq!(claims.expires_at.unwrap().timestamp(), 1_700_003_600);
    }

    #[test]
    fn omitted_fields_fall_back_to_defaults() {
        let token = credential(&serde_json::json!({ "user_id": "alice" }));

        let claims = decode(&token).unwrap();
        assert_eq!(claims.access_level, 0);
        assert!(claims.use_case.is_empty());
        assert!(claims.expires_at.is_none());
        assert!(claims.issued_at.is_none());
    }

    #[test]
    fn rejects_wrong_segment_count() {
        assert!(matches!(
            decode("only.two"),
            Err(ClaimsError::MalformedSegments)
        ));
        assert!(matches!(
            decode("a.b.c.d"),
            Err(ClaimsError::MalformedSegments)
        ));
    }

    #[test]
    fn rejects_undecodable_payload() {
        assert!(matches!(
            decode("header.not~base64!.sig"),
            Err(ClaimsError::Base64(_))
        ));
    }

    #[test]
    fn rejects_payload_that_is_not_a_claims_record() {
        let payload = URL_SAFE_NO_PAD.encode("not json at all");
        assert!(matches!(
            decode(&format!("h.{payload}.s")),
            Err(ClaimsError::Json(_))
        ));
    }

    #[test]
    fn rejects_empty_subject() {
        let token = credential(&serde_json::json!({ "user_id": "" }));
        assert!(matches!(decode(&token), Err(ClaimsError::EmptySubject)));
    }
}

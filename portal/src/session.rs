//! Bearer token storage and (unverified) claim parsing.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use jiff::Timestamp;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::cell::RefCell;

/// Key the token is stored under.
pub const TOKEN_KEY: &str = "token";

/// Process-wide key-value storage holding the bearer token.
pub trait SessionStore {
    fn token(&self) -> Option<String>;
    fn set_token(&self, token: &str);
    fn clear(&self);
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    token: RefCell<Option<String>>,
}

impl SessionStore for MemoryStore {
    fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set_token(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("token does not have three segments")]
    Malformed,
    #[error("token payload is not base64url: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("token payload is not a JSON object: {0}")]
    Json(#[from] serde_json::Error),
}

/// Claims carried by the token. The signature is not checked; the backend
/// does that on every request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Claims {
    pub sub: Option<String>,
    pub email: Option<String>,
    /// Expiry, seconds since the unix epoch.
    pub exp: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Claims {
    pub fn decode(token: &str) -> Result<Self, SessionError> {
        let mut segments = token.split('.');
        let (Some(_header), Some(payload), Some(_signature), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(SessionError::Malformed);
        };
        let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub fn expires_at(&self) -> Option<Timestamp> {
        self.exp.and_then(|exp| Timestamp::from_second(exp).ok())
    }

    /// Tokens without an expiry never expire.
    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.expires_at().is_some_and(|exp| exp <= now)
    }

    /// A string claim that isn't one of the named fields.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(Value::as_str)
    }
}

/// Claims of the stored token, if there is one and it parses.
pub fn current_claims(store: &impl SessionStore) -> Option<Claims> {
    let token = store.token()?;
    match Claims::decode(&token) {
        Ok(claims) => Some(claims),
        Err(e) => {
            tracing::warn!("ignoring stored token: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn token_with(payload: &Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256"}"#);
        let payload = URL_SAFE_NO_PAD.encode(payload.to_string());
        format!("{header}.{payload}.sig")
    }

    #[test]
    fn decodes_claims() -> anyhow::Result<()> {
        let token = token_with(&json!({
            "sub": "7",
            "email": "alice@example.com",
            "exp": 1_700_000_000,
            "companyName": "Alice Trading",
        }));
        let claims = Claims::decode(&token)?;
        assert_eq!(claims.sub.as_deref(), Some("7"));
        assert_eq!(claims.email.as_deref(), Some("alice@example.com"));
        assert_eq!(claims.get_str("companyName"), Some("Alice Trading"));

        let before: Timestamp = "2023-11-14T00:00:00Z".parse()?;
        let after: Timestamp = "2023-11-15T00:00:00Z".parse()?;
        assert!(!claims.is_expired(before));
        assert!(claims.is_expired(after));
        Ok(())
    }

    #[test]
    fn no_expiry_never_expires() -> anyhow::Result<()> {
        let claims = Claims::decode(&token_with(&json!({ "sub": "1" })))?;
        assert!(!claims.is_expired(Timestamp::MAX));
        Ok(())
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert!(matches!(
            Claims::decode("not-a-token"),
            Err(SessionError::Malformed)
        ));
        assert!(matches!(
            Claims::decode("a.b.c.d"),
            Err(SessionError::Malformed)
        ));
        assert!(matches!(
            Claims::decode("a.!!!.c"),
            Err(SessionError::Encoding(_))
        ));
        let not_json = format!("a.{}.c", URL_SAFE_NO_PAD.encode("hello"));
        assert!(matches!(
            Claims::decode(&not_json),
            Err(SessionError::Json(_))
        ));
    }

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryStore::default();
        assert_eq!(current_claims(&store), None);

        store.set_token("garbage");
        assert_eq!(store.token().as_deref(), Some("garbage"));
        assert_eq!(current_claims(&store), None);

        store.clear();
        assert_eq!(store.token(), None);
    }
}

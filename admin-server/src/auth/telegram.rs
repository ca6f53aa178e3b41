//! Telegram Login Widget signature check.
//!
//! The widget signs the user fields with `HMAC_SHA256(SHA256(bot_token), data_check_string)`.

use std::time::Duration;

use axum::http::StatusCode;
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
use shared_types::TelegramWidgetAuth;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TelegramAuthError {
    #[error("Telegram login is not configured")]
    NotConfigured,
    #[error("Invalid Telegram authentication data")]
    InvalidHash,
    #[error("Telegram authentication data is outdated")]
    Outdated,
}

impl TelegramAuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            TelegramAuthError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            TelegramAuthError::InvalidHash | TelegramAuthError::Outdated => {
                StatusCode::UNAUTHORIZED
            }
        }
    }
}

#[derive(Clone)]
pub struct TelegramVerifier {
    secret: Option<Vec<u8>>,
    max_age: Duration,
}

impl TelegramVerifier {
    pub fn new(bot_token: Option<&str>, max_age: Duration) -> Self {
        let secret = bot_token.map(|token| Sha256::digest(token.as_bytes()).to_vec());
        Self { secret, max_age }
    }

    pub fn is_configured(&self) -> bool {
        self.secret.is_some()
    }

    /// Check the signature first, then the age of `auth_date` against `now` (unix seconds).
    pub fn verify(&self, auth: &TelegramWidgetAuth, now: i64) -> Result<(), TelegramAuthError> {
        let secret = self
            .secret
            .as_deref()
            .ok_or(TelegramAuthError::NotConfigured)?;

        let provided = hex::decode(auth.hash.trim()).map_err(|_| TelegramAuthError::InvalidHash)?;
        let mut mac =
            HmacSha256::new_from_slice(secret).map_err(|_| TelegramAuthError::InvalidHash)?;
        mac.update(auth.data_check_string().as_bytes());
        mac.verify_slice(&provided)
            .map_err(|_| TelegramAuthError::InvalidHash)?;

        let age = now.saturating_sub(auth.auth_date);
        if age > self.max_age.as_secs() as i64 {
            return Err(TelegramAuthError::Outdated);
        }
        Ok(())
    }
}

/// Hex signature for `auth` under `bot_token`; the widget computes the same value.
pub fn sign(auth: &TelegramWidgetAuth, bot_token: &str) -> String {
    let secret = Sha256::digest(bot_token.as_bytes());
    let mut mac = match HmacSha256::new_from_slice(&secret) {
        Ok(mac) => mac,
        Err(_) => return String::new(),
    };
    mac.update(auth.data_check_string().as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN: &str = "123456:ABC-test-token";
    const NOW: i64 = 1_700_000_000;

    fn payload() -> TelegramWidgetAuth {
        let mut auth = TelegramWidgetAuth {
            id: 42,
            first_name: "Ivan".into(),
            last_name: None,
            username: Some("ivan".into()),
            photo_url: None,
            auth_date: NOW - 60,
            hash: String::new(),
        };
        auth.hash = sign(&auth, TOKEN);
        auth
    }

    fn verifier() -> TelegramVerifier {
        TelegramVerifier::new(Some(TOKEN), Duration::from_secs(86_400))
    }

    #[test]
    fn accepts_valid_signature() {
        assert_eq!(verifier().verify(&payload(), NOW), Ok(()));
    }

    #[test]
    fn uppercase_hash_is_accepted() {
        let mut auth = payload();
        auth.hash = auth.hash.to_uppercase();
        assert_eq!(verifier().verify(&auth, NOW), Ok(()));
    }

    #[test]
    fn rejects_tampered_field() {
        let mut auth = payload();
        auth.first_name = "Mallory".into();
        assert_eq!(
            verifier().verify(&auth, NOW),
            Err(TelegramAuthError::InvalidHash)
        );
    }

    #[test]
    fn rejects_non_hex_hash() {
        let mut auth = payload();
        auth.hash = "zz".into();
        assert_eq!(
            verifier().verify(&auth, NOW),
            Err(TelegramAuthError::InvalidHash)
        );
    }

    #[test]
    fn rejects_outdated_payload() {
        let auth = payload();
        assert_eq!(
            verifier().verify(&auth, NOW + 86_400),
            Err(TelegramAuthError::Outdated)
        );
    }

    #[test]
    fn unconfigured_verifier_refuses() {
        let v = TelegramVerifier::new(None, Duration::from_secs(60));
        assert!(!v.is_configured());
        assert_eq!(
            v.verify(&payload(), NOW),
            Err(TelegramAuthError::NotConfigured)
        );
        assert_eq!(
            TelegramAuthError::NotConfigured.status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}

//! Token issuance and validation.
//!
//! Tokens are stateless signed JWTs: the payload carries the subject
//! username and an absolute expiry, nothing else. They are never stored or
//! revoked server-side; expiry is the only termination.
//!
//! Expiry is checked here rather than by the library so the boundary is
//! exact: a token presented at its expiry instant is already expired.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::reporter::Reporter;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("token invalid")]
    Invalid,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    exp: i64,
}

/// Signs and verifies access tokens with a process-wide secret and
/// algorithm, both loaded once at startup.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    algorithm: Algorithm,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, algorithm: Algorithm, ttl_minutes: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            algorithm,
            ttl: Duration::minutes(ttl_minutes),
        }
    }

    /// Issue a token for an authenticated reporter:
    /// `sub = username`, `exp = now + ttl`.
    pub fn issue(&self, reporter: &Reporter) -> Result<String, TokenError> {
        let claims = Claims {
            sub: reporter.username.clone(),
            exp: (Utc::now() + self.ttl).timestamp(),
        };
        jsonwebtoken::encode(&Header::new(self.algorithm), &claims, &self.encoding)
            .map_err(|_| TokenError::Invalid)
    }

    /// Verify signature and expiry; return the subject username.
    ///
    /// Any verification failure other than expiry (bad signature, malformed
    /// payload, missing subject, wrong algorithm) is `Invalid`.
    pub fn validate(&self, token: &str) -> Result<String, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is compared manually below; no leeway.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims::<&str>(&[]);

        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &validation)
            .map_err(|_| TokenError::Invalid)?;

        if data.claims.sub.is_empty() {
            return Err(TokenError::Invalid);
        }
        if Utc::now().timestamp() >= data.claims.exp {
            return Err(TokenError::Expired);
        }
        Ok(data.claims.sub)
    }
}

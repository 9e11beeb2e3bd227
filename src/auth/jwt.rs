use std::time::Duration;

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use time::{Duration as TimeDuration, OffsetDateTime};
use tracing::{debug, warn};

use crate::{config::JwtConfig, db::AppState, error::ApiError};

/// Claims carried by a bearer token: the identity it asserts and its lifetime.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub email: String,
    pub iat: usize,
    pub exp: usize,
}

/// JWT signing and verification keys plus the configured token lifetime.
#[derive(Clone)]
pub struct JwtKeys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
    pub ttl: Duration,
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        let JwtConfig {
            secret,
            ttl_minutes,
        } = state.config.jwt.clone();
        Self::new(&secret, Duration::from_secs((ttl_minutes as u64) * 60))
    }
}

impl JwtKeys {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Issues a signed token asserting `email`, expiring `ttl` from now.
    pub fn sign(&self, email: &str) -> anyhow::Result<String> {
        let now = OffsetDateTime::now_utc();
        let exp = now + TimeDuration::seconds(self.ttl.as_secs() as i64);
        let claims = Claims {
            email: email.to_string(),
            iat: now.unix_timestamp() as usize,
            exp: exp.unix_timestamp() as usize,
        };
        let token = encode(&Header::default(), &claims, &self.encoding)?;
        debug!(email = %email, "jwt signed");
        Ok(token)
    }

    /// Validates signature and expiry. Any failure collapses to
    /// `InvalidToken`; callers get no detail about which check failed.
    pub fn verify(&self, token: &str) -> Result<Claims, ApiError> {
        let mut validation = Validation::default();
        validation.leeway = 0;
        let data =
            decode::<Claims>(token, &self.decoding, &validation).map_err(|e| {
                warn!(error = %e, "jwt verification failed");
                ApiError::InvalidToken
            })?;
        debug!(email = %data.claims.email, "jwt verified");
        Ok(data.claims)
    }
}

/// Extractor for routes that require a valid bearer token; yields the email
/// the token asserts.
pub struct AuthUser(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let keys = JwtKeys::from_ref(state);
        let auth_header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(ApiError::InvalidToken)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(ApiError::InvalidToken)?;

        let claims = keys.verify(token)?;
        Ok(AuthUser(claims.email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_keys(secret: &str, ttl_secs: u64) -> JwtKeys {
        JwtKeys::new(secret, Duration::from_secs(ttl_secs))
    }

    #[test]
    fn sign_and_verify_roundtrip() {
        let keys = make_keys("dev-secret", 300);
        let token = keys.sign("a@x.com").expect("sign");
        let claims = keys.verify(&token).expect("verify");
        assert_eq!(claims.email, "a@x.com");
        assert!(claims.exp > claims.iat);
        assert_eq!(claims.exp - claims.iat, 300);
    }

    #[test]
    fn verify_rejects_wrong_secret() {
        let good = make_keys("secret-a", 300);
        let bad = make_keys("secret-b", 300);
        let token = good.sign("a@x.com").expect("sign");
        let err = bad.verify(&token).unwrap_err();
        assert!(matches!(err, ApiError::InvalidToken));
    }

    #[test]
    fn verify_rejects_expired_token() {
        let keys = make_keys("dev-secret", 300);
        let now = OffsetDateTime::now_utc().unix_timestamp();
        let claims = Claims {
            email: "a@x.com".into(),
            iat: (now - 600) as usize,
            exp: (now - 1) as usize,
        };
        let token = encode(&Header::default(), &claims, &keys.encoding).expect("encode");
        let err = keys.verify(&token).unwrap_err();
        assert!(matches!(err, ApiError::InvalidToken));
    }

    #[test]
    fn token_valid_just_before_expiry() {
        let keys = make_keys("dev-secret", 300);
        let now = OffsetDateTime::now_utc().unix_timestamp();
        let claims = Claims {
            email: "a@x.com".into(),
            iat: (now - 298) as usize,
            exp: (now + 2) as usize,
        };
        let token = encode(&Header::default(), &claims, &keys.encoding).expect("encode");
        assert!(keys.verify(&token).is_ok());
    }

    #[test]
    fn verify_rejects_tampered_token() {
        let keys = make_keys("dev-secret", 300);
        let mut token = keys.sign("a@x.com").expect("sign");
        // Flip a character in the signature segment
        let flipped = if token.ends_with('A') { 'B' } else { 'A' };
        token.pop();
        token.push(flipped);
        assert!(keys.verify(&token).is_err());
    }
}

/**
 * Session Tokens
 *
 * Stateless JWT sessions: issuance of signed, time-limited bearer tokens and
 * verification of incoming ones.
 *
 * The signing keys are built once from validated startup configuration and
 * passed around as an immutable handle; nothing here reads the environment.
 * There is no revocation: a token stays valid until its expiry.
 */

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Token lifetime: 24 hours from issuance.
pub const TOKEN_TTL_HOURS: i64 = 24;

/// JWT claims structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id the token asserts on behalf of
    pub sub: String,
    /// Issued-at (Unix timestamp)
    pub iat: i64,
    /// Expiration (Unix timestamp)
    pub exp: i64,
}

/// Why a token failed verification.
///
/// The kinds are distinguishable internally (and logged), but the HTTP
/// surface collapses all of them to a single 401.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// The signature does not match the server's secret
    #[error("token signature is invalid")]
    InvalidSignature,

    /// The token's expiry has passed
    #[error("token has expired")]
    Expired,

    /// The token cannot be parsed, or its subject is not a valid id
    #[error("token is malformed")]
    Malformed,
}

/// Immutable JWT signing/verification key pair.
///
/// Constructed once at startup from the validated signing secret; cloning is
/// cheap and every clone shares the same key material.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl JwtKeys {
    /// Build the key pair from the process-wide signing secret.
    pub fn from_secret(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issue a signed token for `subject`, expiring in 24 hours.
    ///
    /// # Errors
    ///
    /// Returns the underlying jsonwebtoken error when signing fails.
    pub fn issue(&self, subject: Uuid) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify a token's signature and expiry, returning its subject.
    ///
    /// Expiry is checked with zero leeway, so the 24-hour boundary is exact.
    ///
    /// # Errors
    ///
    /// - [`TokenError::InvalidSignature`] when the signature does not match
    /// - [`TokenError::Expired`] when past the `exp` claim
    /// - [`TokenError::Malformed`] when the token does not parse or carries
    ///   a subject that is not a valid user id
    pub fn verify(&self, token: &str) -> Result<Uuid, TokenError> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        let data =
            decode::<Claims>(token, &self.decoding, &validation).map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            })?;

        Uuid::parse_str(&data.claims.sub).map_err(|_| TokenError::Malformed)
    }
}

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::entities::Role;

/// Claims carried by a session token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: user ID.
    pub sub: String,
    /// Role at the time the token was issued. Informational; extractors reload the user.
    pub role: Role,
    /// Expiration time (Unix timestamp).
    pub exp: i64,
    /// Issued-at time (Unix timestamp).
    pub iat: i64,
}

impl Claims {
    /// Parse the subject back into a user id.
    ///
    /// # Errors
    ///
    /// Returns an error if the subject is not an integer.
    pub fn user_id(&self) -> anyhow::Result<i32> {
        self.sub
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid token subject"))
    }
}

/// Issue a session token for a user acting under `role`.
///
/// # Errors
///
/// Returns an error if JWT encoding fails.
pub fn issue_session_token(user_id: i32, role: Role, config: &Config) -> anyhow::Result<String> {
    let now = Utc::now().timestamp();

    #[allow(clippy::cast_possible_wrap)]
    let exp = now + config.jwt_expiration_secs as i64;

    let claims = Claims {
        sub: user_id.to_string(),
        role,
        exp,
        iat: now,
    };

    let key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
    encode(&Header::default(), &claims, &key)
        .map_err(|e| anyhow::anyhow!("Failed to encode session token: {e}"))
}

/// Validate a session token and return its claims.
///
/// # Errors
///
/// Returns an error if the token is malformed, has a bad signature, or is expired.
pub fn validate_session_token(token: &str, secret: &str) -> anyhow::Result<Claims> {
    let key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &key, &validation)
        .map_err(|e| anyhow::anyhow!("Invalid session token: {e}"))?;

    Ok(token_data.claims)
}

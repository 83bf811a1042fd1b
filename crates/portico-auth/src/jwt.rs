//! Token issuance and decoding.
//!
//! Tokens are HS256 JWTs signed with [`JwtConfig::secret`]. Decoding checks
//! the signature and `exp`, then requires `sub` to be a UUID.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use portico_config::JwtConfig;

use crate::claims::Claims;
use crate::error::AuthError;

/// Creates an access token whose subject is `user_id`.
///
/// # Errors
///
/// Returns [`AuthError::Encoding`] if the token cannot be signed.
pub fn create_access_token(user_id: Uuid, jwt_config: &JwtConfig) -> Result<String, AuthError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + jwt_config.access_token_expiry.max(0) as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        exp,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AuthError::Encoding(e.to_string()))
}

/// Verifies `token` and returns the full claim set.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AuthError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AuthError::InvalidToken)
}

/// Decodes `token` into the user identifier it was issued for.
pub fn decode_user_id(token: &str, jwt_config: &JwtConfig) -> Result<Uuid, AuthError> {
    let claims = verify_token(token, jwt_config)?;
    Uuid::parse_str(&claims.sub).map_err(|_| AuthError::InvalidSubject)
}

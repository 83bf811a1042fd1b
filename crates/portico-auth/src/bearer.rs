//! `Authorization: Bearer <token>` parsing.
//!
//! The prefix is matched by length first, so a header shorter than the prefix
//! (or one with a multi-byte character straddling it) is rejected as
//! malformed instead of being sliced out of range.

use uuid::Uuid;

use portico_config::JwtConfig;

use crate::error::AuthError;
use crate::jwt::decode_user_id;

pub const BEARER_PREFIX: &str = "Bearer ";

/// Returns the token payload of a bearer header.
///
/// The scheme is matched case-insensitively. The payload must be non-empty
/// after trimming surrounding whitespace.
pub fn parse_bearer(header: Option<&str>) -> Result<&str, AuthError> {
    let header = header.ok_or(AuthError::MissingHeader)?;

    if header.len() < BEARER_PREFIX.len() {
        return Err(AuthError::MalformedHeader);
    }

    let scheme = header
        .get(..BEARER_PREFIX.len())
        .ok_or(AuthError::MalformedHeader)?;
    if !scheme.eq_ignore_ascii_case(BEARER_PREFIX) {
        return Err(AuthError::MalformedHeader);
    }

    let token = header[BEARER_PREFIX.len()..].trim();
    if token.is_empty() {
        return Err(AuthError::MalformedHeader);
    }

    Ok(token)
}

/// Parses a raw `Authorization` header value and decodes the token into the
/// user identifier it carries.
pub fn authenticate_header(
    header: Option<&str>,
    jwt_config: &JwtConfig,
) -> Result<Uuid, AuthError> {
    let token = parse_bearer(header)?;
    decode_user_id(token, jwt_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::create_access_token;

    fn config() -> JwtConfig {
        JwtConfig {
            secret: "bearer-test-secret".to_string(),
            access_token_expiry: 600,
        }
    }

    #[test]
    fn test_parse_bearer_extracts_token() {
        assert_eq!(parse_bearer(Some("Bearer abc.def.ghi")), Ok("abc.def.ghi"));
    }

    #[test]
    fn test_parse_bearer_scheme_is_case_insensitive() {
        assert_eq!(parse_bearer(Some("bearer abc")), Ok("abc"));
        assert_eq!(parse_bearer(Some("BEARER abc")), Ok("abc"));
    }

    #[test]
    fn test_parse_bearer_missing() {
        assert_eq!(parse_bearer(None), Err(AuthError::MissingHeader));
    }

    #[test]
    fn test_parse_bearer_shorter_than_prefix() {
        for header in ["", "B", "Bearer", "Bear "] {
            assert_eq!(
                parse_bearer(Some(header)),
                Err(AuthError::MalformedHeader),
                "header {header:?}"
            );
        }
    }

    #[test]
    fn test_parse_bearer_empty_payload() {
        assert_eq!(parse_bearer(Some("Bearer ")), Err(AuthError::MalformedHeader));
        assert_eq!(parse_bearer(Some("Bearer    ")), Err(AuthError::MalformedHeader));
    }

    #[test]
    fn test_parse_bearer_wrong_scheme() {
        assert_eq!(
            parse_bearer(Some("Basic dXNlcjpwYXNz")),
            Err(AuthError::MalformedHeader)
        );
        assert_eq!(
            parse_bearer(Some("Token abcdefgh")),
            Err(AuthError::MalformedHeader)
        );
    }

    #[test]
    fn test_parse_bearer_multibyte_prefix_does_not_panic() {
        assert_eq!(
            parse_bearer(Some("Bearer\u{e9}token")),
            Err(AuthError::MalformedHeader)
        );
    }

    #[test]
    fn test_authenticate_header_valid_token() {
        let config = config();
        let user_id = Uuid::new_v4();
        let token = create_access_token(user_id, &config).unwrap();
        let header = format!("Bearer {token}");

        assert_eq!(authenticate_header(Some(&header), &config), Ok(user_id));
    }

    #[test]
    fn test_authenticate_header_invalid_token() {
        assert_eq!(
            authenticate_header(Some("Bearer not-a-jwt"), &config()),
            Err(AuthError::InvalidToken)
        );
    }
}

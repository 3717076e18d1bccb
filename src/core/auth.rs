use crate::core::{AppError, AppState};
use crate::repositories::Read;
use axum::extract::State;
use axum::{body::Body, extract::Request, http, http::Response, middleware::Next};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

/// App tokens are long-lived on purpose: the client only has to
/// re-validate with the identity provider once the app token lapses.
const TOKEN_VALIDITY_DAYS: i64 = 30;

/// Contents of the app-local JWT.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Expiry time of the token (seconds since epoch)
    pub exp: usize,
    /// Issued-at time of the token (seconds since epoch)
    pub iat: usize,
    /// User id
    pub sub: Uuid,
}

/// Signs a 30-day JWT for the user and returns it with its expiry, so the
/// caller can persist both on the user row.
#[instrument(skip(secret), fields(user_id = %user_id))]
pub fn encode_jwt(user_id: Uuid, secret: &str) -> Result<(String, DateTime<Utc>), AppError> {
    debug!("Encoding JWT token for user");
    let now = Utc::now();
    let expiration = now + Duration::days(TOKEN_VALIDITY_DAYS);
    let claims = Claims {
        exp: expiration.timestamp() as usize,
        iat: now.timestamp() as usize,
        sub: user_id,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(|e| {
        warn!("Failed to encode JWT token: {:?}", e);
        AppError::internal_server_error("Error in encoding jwt token")
    })?;

    Ok((token, expiration))
}

#[instrument(skip(jwt_token, secret))]
pub fn decode_jwt(jwt_token: &str, secret: &str) -> Result<TokenData<Claims>, AppError> {
    debug!("Decoding JWT token");
    decode(
        jwt_token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map_err(|e| {
        debug!("Failed to decode JWT token: {:?}", e);
        AppError::unauthorized("Unable to decode token")
    })
}

/// Bearer-token middleware for every authenticated route: decodes the app
/// JWT, loads the caller from the database and stores the `User` in the
/// request extensions. A logged-out user (no stored token) is rejected
/// even if their JWT has not expired yet.
#[instrument(skip(state, req, next))]
pub async fn authentication_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response<Body>, AppError> {
    debug!("Running authentication middleware");
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            warn!("Missing authorization header");
            AppError::unauthorized("Please add the JWT token to the header")
        })?
        .to_str()
        .map_err(|_| {
            warn!("Invalid authorization header format");
            AppError::unauthorized("Malformed authorization header")
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        warn!("Authorization header is not a bearer token");
        AppError::unauthorized("Expected a bearer token")
    })?;

    let token_data = decode_jwt(token, &state.jwt_secret)?;

    let current_user = state
        .user
        .read(&token_data.claims.sub)
        .await?
        .ok_or_else(|| {
            warn!("User not found in database: {}", token_data.claims.sub);
            AppError::unauthorized("You are not an authorized user")
        })?;

    if !current_user.has_valid_token(Utc::now()) {
        warn!("User {} has no active session", current_user.id);
        return Err(AppError::unauthorized("Session expired, please log in again"));
    }

    debug!("User authenticated: {}", current_user.id);
    req.extensions_mut().insert(current_user);
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "test-secret-key-for-unit-tests";

    #[test]
    fn encode_and_decode_roundtrip() {
        let user_id = Uuid::new_v4();
        let (token, expiration) = encode_jwt(user_id, TEST_SECRET).expect("valid token");

        let data = decode_jwt(&token, TEST_SECRET).expect("valid decode");
        assert_eq!(data.claims.sub, user_id);
        assert_eq!(data.claims.exp as i64, expiration.timestamp());
    }

    #[test]
    fn token_valid_thirty_days() {
        let (_, expiration) = encode_jwt(Uuid::new_v4(), TEST_SECRET).expect("valid token");

        let lower = Utc::now() + Duration::days(29);
        let upper = Utc::now() + Duration::days(31);
        assert!(expiration > lower && expiration < upper);
    }

    #[test]
    fn wrong_secret_fails() {
        let (token, _) = encode_jwt(Uuid::new_v4(), TEST_SECRET).expect("valid token");
        assert!(decode_jwt(&token, "wrong-secret").is_err());
    }

    #[test]
    fn garbage_token_fails() {
        assert!(decode_jwt("invalid.token.string", TEST_SECRET).is_err());
    }
}

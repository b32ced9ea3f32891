use crate::error::ConciergeError;
use actix_web::HttpRequest;
use chrono::{DateTime, Duration, Utc};
use concierge_domain::{Role, User, ID};
use concierge_infra::ConciergeContext;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// How long an issued token stays valid
pub const TOKEN_TTL_HOURS: i64 = 24;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    exp: i64,    // Expiration time (as UTC timestamp)
    iat: i64,    // Issued at (as UTC timestamp)
    sub: String, // Subject (whom token refers to)
    role: Role,
}

pub fn create_token(
    user: &User,
    secret: &str,
    now: DateTime<Utc>,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims {
        exp: (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
        iat: now.timestamp(),
        sub: user.id.to_string(),
        role: user.role,
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

fn decode_token(token: &str, secret: &str, now: DateTime<Utc>) -> anyhow::Result<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    // Expiry is checked against the context clock below
    validation.validate_exp = false;
    let claims =
        decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)?.claims;
    if claims.exp < now.timestamp() {
        return Err(anyhow::Error::msg("Token has expired"));
    }

    Ok(claims)
}

fn parse_authtoken_header(token_header_value: &str) -> String {
    token_header_value
        .trim_start_matches("Bearer")
        .trim_start_matches("bearer")
        .trim()
        .to_string()
}

/// Finds the `User` making the request from the bearer token
pub async fn protect_route(req: &HttpRequest, ctx: &ConciergeContext) -> Result<User, ConciergeError> {
    let token = match req.headers().get("authorization") {
        Some(token) => match token.to_str() {
            Ok(token) => parse_authtoken_header(token),
            Err(_) => {
                return Err(ConciergeError::Unauthorized(
                    "Malformed authorization header provided".into(),
                ))
            }
        },
        None => {
            return Err(ConciergeError::Unauthorized(
                "Unable to find a bearer token in the authorization header".into(),
            ))
        }
    };

    let claims = decode_token(&token, &ctx.config.jwt_secret, ctx.sys.now())
        .map_err(|e| ConciergeError::Unauthorized(format!("Invalid token provided: {}", e)))?;

    let user_id: ID = claims
        .sub
        .parse()
        .map_err(|_| ConciergeError::Unauthorized("Invalid token subject".into()))?;

    match ctx.repos.users.find(user_id).await {
        Ok(Some(user)) => Ok(user),
        Ok(None) => Err(ConciergeError::Unauthorized(
            "Unable to find user from credentials".into(),
        )),
        Err(e) => Err(ConciergeError::InternalError(e.to_string())),
    }
}

/// Like `protect_route`, but the user must also work for the hotel
pub async fn protect_staff_route(
    req: &HttpRequest,
    ctx: &ConciergeContext,
) -> Result<User, ConciergeError> {
    let user = protect_route(req, ctx).await?;
    if !user.role.is_staff() {
        return Err(ConciergeError::Forbidden(format!(
            "Users with role {} are not allowed to perform this action",
            user.role
        )));
    }
    Ok(user)
}

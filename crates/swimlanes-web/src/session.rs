//! Tracker token carried between requests.
//!
//! A `?token=` query parameter on any request is remembered in a cookie.
//! Handlers read it back through the [`SessionToken`] extractor.

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Query, Request},
    http::{header, request::Parts, HeaderValue},
    middleware::Next,
    response::Response,
};
use serde::Deserialize;
use tracing::debug;

/// Cookie holding the tracker token.
pub const TOKEN_COOKIE: &str = "tracker_token";

#[derive(Deserialize)]
struct TokenQuery {
    token: Option<String>,
}

/// Token supplied in the query string of the current request.
#[derive(Clone)]
struct QueryToken(String);

/// Store a `?token=` parameter in the session cookie.
pub async fn remember_token(mut req: Request, next: Next) -> Response {
    let token = Query::<TokenQuery>::try_from_uri(req.uri())
        .ok()
        .and_then(|Query(q)| q.token)
        .filter(|t| !t.is_empty());

    if let Some(token) = &token {
        req.extensions_mut().insert(QueryToken(token.clone()));
    }

    let mut response = next.run(req).await;

    if let Some(token) = token {
        let cookie = format!("{}={}; Path=/; HttpOnly; SameSite=Lax", TOKEN_COOKIE, token);
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(_) => debug!("ignoring token that is not a valid header value"),
        }
    }

    response
}

/// Token for the current request: query string first, then cookie.
pub struct SessionToken(pub Option<String>);

impl<S: Send + Sync> FromRequestParts<S> for SessionToken {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(QueryToken(token)) = parts.extensions.get::<QueryToken>() {
            return Ok(Self(Some(token.clone())));
        }

        let token = parts
            .headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == TOKEN_COOKIE)
            .map(|(_, value)| value.to_string())
            .filter(|t| !t.is_empty());

        Ok(Self(token))
    }
}

//! Authentication middleware
//!
//! Resolves the bearer token on every protected request and attaches the
//! resulting [`Principal`] to the request. Handlers receive it explicitly
//! through `Extension<Principal>`; a request without a valid token never
//! reaches a handler.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use creatorhub_common::api::auth::bearer_token;
use creatorhub_common::db::{sessions, Principal};
use tracing::debug;

use crate::error::ApiError;
use crate::AppState;

pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(bearer_token)
        .map(str::to_owned);

    let Some(token) = token else {
        debug!("Rejected {} {}: no bearer token", request.method(), request.uri().path());
        return Err(ApiError::AuthenticationRequired);
    };

    let Some(creator) = sessions::resolve_session(&state.db, &token).await? else {
        debug!("Rejected {} {}: unknown or expired token", request.method(), request.uri().path());
        return Err(ApiError::AuthenticationRequired);
    };

    request.extensions_mut().insert(Principal::from(creator));

    Ok(next.run(request).await)
}

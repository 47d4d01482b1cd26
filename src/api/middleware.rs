//! API Middleware
//!
//! Attaches the active session identity to incoming requests. Handlers
//! that need an identity extract it and answer 401 themselves, so public
//! routes (login, health) pass through untouched.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::domain::User;

use super::AppState;

/// Current session identity, attached by [`session_middleware`]
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Resolve the active session, if any, into a request extension
pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    if let Some(user) = state.sessions.current_user() {
        request.extensions_mut().insert(CurrentUser(user));
    }

    next.run(request).await
}

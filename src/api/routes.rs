//! API Routes
//!
//! HTTP endpoint definitions.

use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    routing::{delete, get, patch, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::domain::{Event, EventStatus, EventSubmission, Hall, Registration, User, UserRole};
use crate::error::AppError;
use crate::gateway::{ChatMessage, SearchResult};
use crate::identity;
use crate::projection::{self, DashboardSummary};

use super::middleware::CurrentUser;
use super::AppState;

// =========================================================================
// Request/Response types
// =========================================================================

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub role: UserRole,
    #[serde(default)]
    pub seat_number: Option<String>,
    #[serde(default)]
    pub club_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EventsQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: EventStatus,
}

#[derive(Debug, Deserialize)]
pub struct ResetRequest {
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Serialize)]
pub struct RegistrationStatusResponse {
    pub event_id: String,
    pub registered: bool,
}

#[derive(Debug, Deserialize)]
pub struct DescriptionRequest {
    pub title: String,
    pub category: String,
}

#[derive(Debug, Serialize)]
pub struct DescriptionResponse {
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct PosterRequest {
    pub prompt: String,
    #[serde(default = "default_aspect_ratio")]
    pub aspect_ratio: String,
}

fn default_aspect_ratio() -> String {
    "16:9".to_string()
}

#[derive(Debug, Serialize)]
pub struct PosterResponse {
    pub image_url: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub history: Vec<ChatMessage>,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

// =========================================================================
// API Router
// =========================================================================

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        // Session lifecycle
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/me", get(me))
        // Student-facing events
        .route("/events", get(list_events))
        .route("/events", post(create_event))
        .route("/events/:event_id", get(get_event))
        .route("/events/:event_id/register", post(register))
        .route("/events/:event_id/registration", get(registration_status))
        // Club dashboard
        .route("/club/events", get(club_events))
        // Admin
        .route("/admin/events", get(admin_events))
        .route("/admin/events/:event_id/status", patch(update_event_status))
        .route("/admin/events/:event_id", delete(delete_event))
        .route("/admin/summary", get(admin_summary))
        .route("/admin/reset", post(reset_database))
        // Reference data
        .route("/halls", get(halls))
        // AI assistance
        .route("/ai/description", post(ai_description))
        .route("/ai/poster", post(ai_poster))
        .route("/ai/search", post(ai_search))
        .route("/ai/chat", post(ai_chat))
}

/// Unwrap the session identity or answer 401
fn require_user(user: Option<Extension<CurrentUser>>) -> Result<User, AppError> {
    user.map(|Extension(CurrentUser(user))| user)
        .ok_or(AppError::NotLoggedIn)
}

// =========================================================================
// Session endpoints
// =========================================================================

/// Log in as admin, club or student; replaces any active session
async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<User>, AppError> {
    let user = match request.role {
        UserRole::Admin => identity::resolve_admin(),
        UserRole::Club => identity::resolve_club(request.club_id.as_deref().unwrap_or_default()),
        UserRole::Student => {
            let seat = request.seat_number.as_deref().unwrap_or("4PA21CS001");
            identity::resolve_student(seat)?
        }
    };

    tracing::info!("Session opened for {} ({})", user.name, user.role);
    Ok(Json(state.sessions.login(user)))
}

/// Clear the active session
async fn logout(State(state): State<AppState>) -> StatusCode {
    state.sessions.logout();
    StatusCode::NO_CONTENT
}

/// The active session identity
async fn me(user: Option<Extension<CurrentUser>>) -> Result<Json<User>, AppError> {
    Ok(Json(require_user(user)?))
}

// =========================================================================
// Event endpoints
// =========================================================================

/// Approved events, optionally narrowed by search text and category
async fn list_events(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
    Query(query): Query<EventsQuery>,
) -> Result<Json<Vec<Event>>, AppError> {
    require_user(user)?;

    let approved = state.store.events_for_student();
    let filtered = projection::filter_events(
        &approved,
        query.search.as_deref().unwrap_or(""),
        query.category.as_deref().unwrap_or("All"),
    );

    Ok(Json(filtered))
}

/// Single event by id
async fn get_event(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
    Path(event_id): Path<String>,
) -> Result<Json<Event>, AppError> {
    require_user(user)?;

    let event = state
        .store
        .find_event(&event_id)
        .ok_or(crate::domain::DomainError::EventNotFound(event_id))?;

    Ok(Json(event))
}

/// Submit a new event (club only)
async fn create_event(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
    Json(submission): Json<EventSubmission>,
) -> Result<(StatusCode, Json<Event>), AppError> {
    let actor = require_user(user)?;
    let event = state.store.add_event(&actor, submission)?;

    Ok((StatusCode::CREATED, Json(event)))
}

/// Register the current student for an event
async fn register(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
    Path(event_id): Path<String>,
) -> Result<(StatusCode, Json<Registration>), AppError> {
    let actor = require_user(user)?;
    let registration = state.store.register_for_event(&actor, &event_id)?;

    Ok((StatusCode::CREATED, Json(registration)))
}

/// Whether the current user already holds a registration
async fn registration_status(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
    Path(event_id): Path<String>,
) -> Result<Json<RegistrationStatusResponse>, AppError> {
    let actor = require_user(user)?;
    let registered = state.store.is_registered(&event_id, &actor.id);

    Ok(Json(RegistrationStatusResponse {
        event_id,
        registered,
    }))
}

// =========================================================================
// Club endpoints
// =========================================================================

/// The acting club's own events, all statuses
async fn club_events(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
) -> Result<Json<Vec<Event>>, AppError> {
    let actor = require_user(user)?;
    if !actor.is_club() {
        return Err(crate::domain::DomainError::unauthorized(
            "Only clubs have a club dashboard",
        )
        .into());
    }

    Ok(Json(state.store.events_by_club(&actor.id)))
}

// =========================================================================
// Admin endpoints
// =========================================================================

/// All events, every status (admin only)
async fn admin_events(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
) -> Result<Json<Vec<Event>>, AppError> {
    let actor = require_user(user)?;
    if !actor.is_admin() {
        return Err(
            crate::domain::DomainError::unauthorized("Only admins can list all events").into(),
        );
    }

    Ok(Json(state.store.events()))
}

/// Approve or reject a submission (admin only)
async fn update_event_status(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
    Path(event_id): Path<String>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<Event>, AppError> {
    let actor = require_user(user)?;
    let event = state
        .store
        .update_event_status(&actor, &event_id, request.status)?;

    Ok(Json(event))
}

/// Remove an event (admin only)
async fn delete_event(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
    Path(event_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let actor = require_user(user)?;
    state.store.delete_event(&actor, &event_id)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Dashboard counters (admin only)
async fn admin_summary(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
) -> Result<Json<DashboardSummary>, AppError> {
    let actor = require_user(user)?;
    if !actor.is_admin() {
        return Err(
            crate::domain::DomainError::unauthorized("Only admins can view the summary").into(),
        );
    }

    let events = state.store.events();
    let registrations = state.store.registrations();

    Ok(Json(projection::dashboard_summary(&events, &registrations)))
}

/// Destructive reset to seed data; requires explicit confirmation
async fn reset_database(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
    Json(request): Json<ResetRequest>,
) -> Result<StatusCode, AppError> {
    let actor = require_user(user)?;

    if !request.confirm {
        return Err(AppError::InvalidRequest(
            "Reset requires confirmation".to_string(),
        ));
    }

    state.store.reset(&actor)?;
    Ok(StatusCode::NO_CONTENT)
}

// =========================================================================
// Reference data
// =========================================================================

/// Campus halls
async fn halls(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
) -> Result<Json<Vec<Hall>>, AppError> {
    require_user(user)?;
    Ok(Json(state.store.halls()))
}

// =========================================================================
// AI endpoints
// =========================================================================

/// Draft an event description
async fn ai_description(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
    Json(request): Json<DescriptionRequest>,
) -> Result<Json<DescriptionResponse>, AppError> {
    require_user(user)?;

    if request.title.trim().is_empty() || request.category.trim().is_empty() {
        return Err(AppError::InvalidRequest(
            "Please enter a Title and Category first".to_string(),
        ));
    }

    let description = state
        .gateway
        .generate_description(&request.title, &request.category)
        .await;

    Ok(Json(DescriptionResponse { description }))
}

/// Generate a poster image
async fn ai_poster(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
    Json(request): Json<PosterRequest>,
) -> Result<Json<PosterResponse>, AppError> {
    require_user(user)?;

    let image_url = state
        .gateway
        .generate_image(&request.prompt, &request.aspect_ratio)
        .await?;

    Ok(Json(PosterResponse { image_url }))
}

/// Grounded web search
async fn ai_search(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResult>, AppError> {
    require_user(user)?;
    Ok(Json(state.gateway.grounded_search(&request.query).await))
}

/// Assistant chat
async fn ai_chat(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    require_user(user)?;

    let reply = state.gateway.chat(&request.history, &request.message).await;
    Ok(Json(ChatResponse { reply }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_deserialize() {
        let json = r#"{"role": "student", "seat_number": "4PA21CS001"}"#;
        let request: LoginRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.role, UserRole::Student);
        assert_eq!(request.seat_number.as_deref(), Some("4PA21CS001"));
        assert!(request.club_id.is_none());
    }

    #[test]
    fn test_events_query_defaults() {
        let query: EventsQuery = serde_json::from_str("{}").unwrap();
        assert!(query.search.is_none());
        assert!(query.category.is_none());
    }

    #[test]
    fn test_update_status_request_deserialize() {
        let json = r#"{"status": "Approved"}"#;
        let request: UpdateStatusRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.status, EventStatus::Approved);
    }

    #[test]
    fn test_poster_request_default_aspect_ratio() {
        let request: PosterRequest = serde_json::from_str(r#"{"prompt": "a poster"}"#).unwrap();
        assert_eq!(request.aspect_ratio, "16:9");
    }

    #[test]
    fn test_reset_request_defaults_to_unconfirmed() {
        let request: ResetRequest = serde_json::from_str("{}").unwrap();
        assert!(!request.confirm);
    }
}

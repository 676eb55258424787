//! HTTP handlers for the media shelf API.

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use super::error::ApiError;
use super::extract::{ApiJson, ApiQuery};
use super::session::{expired_cookie, session_cookie, token_from_headers};
use super::wire::MediaResponse;
use super::AppState;
use crate::domain::{AccessKind, ActivityEntry, MediaId, MediaKind, NewMedia, ShelfError};

/// Resolve the identity behind the request's session cookie
async fn require_user(state: &AppState, headers: &HeaderMap) -> Result<String, ApiError> {
    let token = token_from_headers(headers).ok_or(ApiError::Unauthenticated)?;
    let sessions = state.sessions.read().await;
    sessions
        .user(&token)
        .map(str::to_string)
        .ok_or(ApiError::Unauthenticated)
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    "OK"
}

// === Auth ===

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub ok: bool,
    pub user: String,
}

/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let username = req.username.unwrap_or_default();
    let password = req.password.unwrap_or_default();

    let user = state.shelf.write().await.login(&username, &password)?;
    let token = state.sessions.write().await.open(user.clone());

    info!(%user, "User logged in");
    Ok((
        [(header::SET_COOKIE, session_cookie(&token))],
        Json(LoginResponse { ok: true, user }),
    ))
}

/// POST /api/logout
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    require_user(&state, &headers).await?;
    if let Some(token) = token_from_headers(&headers) {
        if let Some(user) = state.sessions.write().await.close(&token) {
            info!(%user, "User logged out");
        }
    }

    Ok((
        [(header::SET_COOKIE, expired_cookie())],
        Json(json!({ "ok": true })),
    ))
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: Option<String>,
}

/// GET /api/me
pub async fn me(State(state): State<AppState>, headers: HeaderMap) -> Json<MeResponse> {
    Json(MeResponse {
        user: require_user(&state, &headers).await.ok(),
    })
}

// === Media ===

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// GET /api/media?type=movie|book
pub async fn list_media(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiQuery(query): ApiQuery<ListQuery>,
) -> Result<Json<Vec<MediaResponse>>, ApiError> {
    require_user(&state, &headers).await?;

    let kind = match query.kind.as_deref().map(str::trim) {
        Some(kind) if !kind.is_empty() => Some(kind.parse::<MediaKind>()?),
        _ => None,
    };

    let shelf = state.shelf.read().await;
    Ok(Json(
        shelf
            .list_media(kind)
            .into_iter()
            .map(MediaResponse::from)
            .collect(),
    ))
}

/// GET /api/media/:id
pub async fn get_media(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<MediaResponse>, ApiError> {
    require_user(&state, &headers).await?;

    let id = MediaId::parse(&id)?;
    let shelf = state.shelf.read().await;
    Ok(Json(MediaResponse::from(shelf.get_media(&id)?)))
}

/// Year as sent by forms (text) or scripts (number)
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum YearValue {
    Number(i32),
    Text(String),
}

impl YearValue {
    fn into_year(self) -> Result<Option<i32>, ShelfError> {
        match self {
            YearValue::Number(year) => Ok(Some(year)),
            YearValue::Text(text) if text.trim().is_empty() => Ok(None),
            YearValue::Text(text) => text
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| ShelfError::validation("year", "must be an integer")),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateMediaRequest {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub title: Option<String>,
    pub year: Option<YearValue>,
    pub creator: Option<String>,
    pub director: Option<String>,
    pub author: Option<String>,
    #[serde(alias = "driveUrl")]
    pub external_link: Option<String>,
}

impl CreateMediaRequest {
    /// Validate the request body into the shelf's input type
    pub fn into_new_media(self) -> Result<NewMedia, ShelfError> {
        let kind: MediaKind = self
            .kind
            .as_deref()
            .ok_or_else(|| ShelfError::validation("kind", "is required"))?
            .parse()?;
        let title = self
            .title
            .ok_or_else(|| ShelfError::validation("title", "is required"))?;

        let role_specific = match kind {
            MediaKind::Movie => self.director,
            MediaKind::Book => self.author,
        };

        Ok(NewMedia {
            kind,
            title,
            year: self.year.map(YearValue::into_year).transpose()?.flatten(),
            creator: self.creator.or(role_specific),
            external_link: self.external_link,
        })
    }
}

/// POST /api/media
pub async fn create_media(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(req): ApiJson<CreateMediaRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = require_user(&state, &headers).await?;
    let new = req.into_new_media()?;

    let item = state.shelf.write().await.create_media(new, &user)?;
    info!(media_id = %item.id, kind = %item.kind, %user, "Media uploaded");

    Ok((StatusCode::CREATED, Json(MediaResponse::from(&item))))
}

#[derive(Debug, Deserialize)]
pub struct AccessQuery {
    pub action: Option<String>,
}

/// POST /api/media/:id/download?action=watch|download
///
/// Anything other than `watch` is logged as a download.
pub async fn record_access(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    ApiQuery(query): ApiQuery<AccessQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let user = require_user(&state, &headers).await?;
    let id = MediaId::parse(&id)?;
    let access = match query.action.as_deref() {
        Some("watch") => AccessKind::Watch,
        _ => AccessKind::Download,
    };

    state.shelf.write().await.record_access(&id, access, &user)?;
    Ok(Json(json!({ "ok": true })))
}

// === Activity & users ===

#[derive(Debug, Deserialize)]
pub struct ActivityQuery {
    pub limit: Option<usize>,
}

/// GET /api/activity?limit=N
pub async fn activity(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiQuery(query): ApiQuery<ActivityQuery>,
) -> Result<Json<Vec<ActivityEntry>>, ApiError> {
    require_user(&state, &headers).await?;

    let shelf = state.shelf.read().await;
    Ok(Json(
        shelf
            .recent_activity(query.limit)
            .into_iter()
            .cloned()
            .collect(),
    ))
}

/// GET /api/users
pub async fn users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<String>>, ApiError> {
    require_user(&state, &headers).await?;

    let shelf = state.shelf.read().await;
    Ok(Json(shelf.users().into_iter().map(str::to_string).collect()))
}

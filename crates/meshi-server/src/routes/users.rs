//! Registration, login, participations and notification inbox.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;

use crate::auth::CurrentUser;
use crate::error::ApiResult;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;
use meshi_core::{Error, Meetup, Notification};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/user/participations", get(participations))
        .route("/users/{name}/notifications", get(notifications))
        .route(
            "/users/{name}/notifications/unread-count",
            get(notification_unread_count),
        )
}

#[derive(Deserialize)]
struct Credentials {
    name: String,
    password: String,
}

/// POST /api/register
async fn register(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<Credentials>,
) -> ApiResult<Json<serde_json::Value>> {
    let token = state.auth.register(&body.name, &body.password)?;
    Ok(Json(serde_json::json!({
        "message": "User registered successfully",
        "token": token,
    })))
}

/// POST /api/login
async fn login(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<Credentials>,
) -> ApiResult<Json<serde_json::Value>> {
    let token = state.auth.login(&body.name, &body.password)?;
    Ok(Json(serde_json::json!({
        "message": "Login successful",
        "token": token,
    })))
}

/// GET /api/user/participations — meetups the caller has joined or created.
async fn participations(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<Vec<Meetup>>> {
    Ok(Json(state.store.participations(&user)?))
}

fn ensure_own_inbox(user: &str, name: &str) -> Result<(), Error> {
    if user == name {
        Ok(())
    } else {
        Err(Error::Forbidden("Not authorized to view these notifications".into()))
    }
}

/// GET /api/users/{name}/notifications
async fn notifications(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    ApiPath(name): ApiPath<String>,
) -> ApiResult<Json<Vec<Notification>>> {
    ensure_own_inbox(&user, &name)?;
    Ok(Json(state.inbox.list(&user)))
}

/// GET /api/users/{name}/notifications/unread-count
async fn notification_unread_count(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    ApiPath(name): ApiPath<String>,
) -> ApiResult<Json<serde_json::Value>> {
    ensure_own_inbox(&user, &name)?;
    Ok(Json(serde_json::json!({
        "unread_count": state.inbox.unread_count(&user),
    })))
}

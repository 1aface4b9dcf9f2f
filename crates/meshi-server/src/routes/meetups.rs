//! Meetup creation, feed, lookup, deletion and membership.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::info;

use crate::auth::CurrentUser;
use crate::error::ApiResult;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::state::AppState;
use meshi_core::{CreateMeetupRequest, Error, Meetup, NotificationKind};
use meshi_store::{search, MeetupQuery, NewNotification};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/meetups", get(list_meetups).post(create_meetup))
        .route("/meetups/{id}", get(get_meetup).delete(delete_meetup))
        .route("/meetups/{id}/join", post(join_meetup))
        .route("/meetups/{id}/participants", get(get_participants))
}

#[derive(Deserialize)]
struct ListParams {
    search: Option<String>,
    date_filter: Option<String>,
}

/// Meetup by id, or 404.
pub(crate) fn load_meetup(state: &AppState, id: u64) -> Result<Meetup, Error> {
    state.store.get(id)?.ok_or_else(Error::meetup_not_found)
}

/// POST /api/meetups
async fn create_meetup(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    ApiJson(req): ApiJson<CreateMeetupRequest>,
) -> ApiResult<Json<Meetup>> {
    let meetup = state.builder().create(&req, &user)?;
    Ok(Json(meetup))
}

/// GET /api/meetups?search=&date_filter=
async fn list_meetups(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<ListParams>,
) -> ApiResult<Json<Vec<Meetup>>> {
    let query = MeetupQuery {
        search: params.search,
        date_filter: params.date_filter,
    };
    Ok(Json(search(state.store.list()?, &query)))
}

/// GET /api/meetups/{id}
async fn get_meetup(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<u64>,
) -> ApiResult<Json<Meetup>> {
    Ok(Json(load_meetup(&state, id)?))
}

/// DELETE /api/meetups/{id} — creator only.
async fn delete_meetup(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    ApiPath(id): ApiPath<u64>,
) -> ApiResult<Json<serde_json::Value>> {
    let meetup = load_meetup(&state, id)?;
    if meetup.creator != user {
        return Err(Error::Forbidden("Not authorized to delete this meetup".into()).into());
    }

    if !state.store.delete(id)? {
        return Err(Error::meetup_not_found().into());
    }
    state.inbox.forget_meetup(id);
    info!("Meetup {} deleted by {}", id, user);

    Ok(Json(serde_json::json!({ "message": "Meetup deleted successfully" })))
}

/// POST /api/meetups/{id}/join — idempotent.
async fn join_meetup(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    ApiPath(id): ApiPath<u64>,
) -> ApiResult<Json<serde_json::Value>> {
    let meetup = load_meetup(&state, id)?;
    let joined = state.store.join(id, &user)?;

    if joined && meetup.creator != user {
        state.inbox.deliver_live(
            state.store.as_ref(),
            NewNotification {
                user: meetup.creator.clone(),
                meetup_id: id,
                kind: NotificationKind::Joined,
                message: format!("{}さんが「{}」に参加しました", user, meetup.title),
                created_at: state.clock.timestamp(),
            },
        )?;
    }

    Ok(Json(serde_json::json!({ "message": "Successfully joined meetup" })))
}

/// GET /api/meetups/{id}/participants
async fn get_participants(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<u64>,
) -> ApiResult<Json<serde_json::Value>> {
    let participants = state.store.participants(id)?;
    Ok(Json(serde_json::json!({ "participants": participants })))
}

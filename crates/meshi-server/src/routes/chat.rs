//! Per-meetup chat rooms and read state.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::debug;

use super::meetups::load_meetup;
use crate::auth::CurrentUser;
use crate::error::ApiResult;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;
use meshi_core::{ChatMessage, Error, Meetup, NotificationKind};
use meshi_store::{unread_count, NewNotification};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/meetups/{id}/chat", get(get_messages).post(send_message))
        .route("/meetups/{id}/unread-count", get(get_unread_count))
        .route("/meetups/{id}/mark-read", post(mark_read))
}

#[derive(Deserialize)]
struct SendMessageBody {
    message: String,
}

/// Participants and the creator may use the room.
fn can_chat(state: &AppState, meetup: &Meetup, user: &str) -> Result<bool, Error> {
    if meetup.creator == user {
        return Ok(true);
    }
    Ok(state.store.participants(meetup.id)?.iter().any(|p| p == user))
}

/// POST /api/meetups/{id}/chat
async fn send_message(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    ApiPath(id): ApiPath<u64>,
    ApiJson(body): ApiJson<SendMessageBody>,
) -> ApiResult<Json<ChatMessage>> {
    let meetup = load_meetup(&state, id)?;
    if !can_chat(&state, &meetup, &user)? {
        return Err(Error::Forbidden("Not authorized to chat in this meetup".into()).into());
    }

    let timestamp = state.clock.timestamp();
    let (message, participants) =
        state.store.append_message(id, &user, &body.message, &timestamp)?;
    debug!("Message {} in meetup {} from {}", message.id, id, user);

    for participant in participants {
        if participant == user {
            continue;
        }
        let delivered = state.inbox.deliver_live(
            state.store.as_ref(),
            NewNotification {
                user: participant,
                meetup_id: id,
                kind: NotificationKind::Message,
                message: format!("{}さんから「{}」に新しいメッセージ", user, meetup.title),
                created_at: timestamp.clone(),
            },
        )?;
        if !delivered {
            break;
        }
    }

    Ok(Json(message))
}

/// GET /api/meetups/{id}/chat
async fn get_messages(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    ApiPath(id): ApiPath<u64>,
) -> ApiResult<Json<Vec<ChatMessage>>> {
    let meetup = load_meetup(&state, id)?;
    if !can_chat(&state, &meetup, &user)? {
        return Err(Error::Forbidden("Not authorized to view chat in this meetup".into()).into());
    }
    Ok(Json(state.store.messages(id)?))
}

/// GET /api/meetups/{id}/unread-count — zero for users outside the room.
async fn get_unread_count(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    ApiPath(id): ApiPath<u64>,
) -> ApiResult<Json<serde_json::Value>> {
    let meetup = load_meetup(&state, id)?;
    let count = if can_chat(&state, &meetup, &user)? {
        let messages = state.store.messages(id)?;
        let last_read = state.store.last_read(id, &user)?;
        unread_count(&messages, &user, last_read.as_deref())
    } else {
        0
    };
    Ok(Json(serde_json::json!({ "unread_count": count })))
}

/// POST /api/meetups/{id}/mark-read
async fn mark_read(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    ApiPath(id): ApiPath<u64>,
) -> ApiResult<Json<serde_json::Value>> {
    load_meetup(&state, id)?;
    state.store.mark_read(id, &user, &state.clock.timestamp())?;
    let cleared = state.inbox.mark_meetup_read(&user, id);
    debug!("{} read meetup {} ({} notifications cleared)", user, id, cleared);
    Ok(Json(serde_json::json!({ "message": "Marked as read" })))
}

//! Webhook endpoint: signature check, event dispatch, reply delivery.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
    Router,
};
use tracing::{error, info, warn};

use spb_core::{
    compose::{compose_reply, UPSTREAM_FAILURE_TEXT},
    config::Config,
    domain::{OutboundMessage, ReplyToken},
    errors::Error,
    ports::{ReplySink, ScheduleSource},
    teams::TeamDirectory,
};

use crate::{signature::verify_signature, webhook::WebhookPayload};

/// Header carrying the Base64 HMAC of the raw request body.
pub const SIGNATURE_HEADER: &str = "x-line-signature";

#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<Config>,
    pub stats: Arc<dyn ScheduleSource>,
    pub sink: Arc<dyn ReplySink>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/callback", post(callback))
        .with_state(state)
}

/// One POST per webhook delivery. Verification happens before anything else;
/// a request that fails it never reaches the schedule or the reply client.
async fn callback(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, String) {
    let payload = match authenticate_and_parse(&headers, &body, &state.cfg.bot_secret) {
        Ok(p) => p,
        Err(e) => {
            warn!("rejecting webhook: {e}");
            return (StatusCode::BAD_REQUEST, "invalid request".to_string());
        }
    };

    for event in &payload.events {
        let Some((token, text)) = event.text_message() else {
            continue;
        };
        handle_text_event(&state, token, text).await;
    }

    let body_text = String::from_utf8_lossy(&body);
    (StatusCode::OK, format!("process successed!: {body_text}"))
}

fn authenticate_and_parse(
    headers: &HeaderMap,
    body: &[u8],
    channel_secret: &str,
) -> spb_core::Result<WebhookPayload> {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    if !verify_signature(body, signature, channel_secret) {
        return Err(Error::InvalidSignature);
    }

    Ok(serde_json::from_slice(body)?)
}

async fn handle_text_event(state: &AppState, token: ReplyToken, text: &str) {
    info!(%text, "handling team-code command");

    let messages = match reply_messages(state, text).await {
        Ok(messages) => messages,
        Err(e) => {
            error!("reply composition failed: {e}");
            vec![OutboundMessage(UPSTREAM_FAILURE_TEXT.to_string())]
        }
    };

    if let Err(e) = state.sink.send_reply(&token, &messages).await {
        error!("reply delivery failed: {e}");
    }
}

async fn reply_messages(state: &AppState, text: &str) -> spb_core::Result<Vec<OutboundMessage>> {
    let games = state.stats.today_schedule().await?;
    compose_reply(text, &TeamDirectory, &games, state.stats.as_ref()).await
}

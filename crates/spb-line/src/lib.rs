//! LINE Messaging API adapter.
//!
//! Three pieces: webhook signature verification, webhook payload models, and
//! the reply client that pushes composed messages back through LINE's reply
//! endpoint. The axum router wiring them together lives in [`router`].

pub mod router;
pub mod signature;
pub mod webhook;

use std::{fmt, time::Duration};

use async_trait::async_trait;
use tracing::{debug, warn};

use spb_core::{
    domain::{OutboundMessage, ReplyToken},
    errors::Error,
    ports::ReplySink,
    Result,
};

/// LINE rejects replies carrying more than five messages.
pub const MAX_REPLY_MESSAGES: usize = 5;

#[derive(Clone)]
pub struct LineClient {
    base_url: String,
    channel_token: String,
    http: reqwest::Client,
}

impl LineClient {
    pub fn new(
        base_url: impl Into<String>,
        channel_token: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("reqwest client build");
        Self {
            base_url: base_url.into(),
            channel_token: channel_token.into(),
            http,
        }
    }
}

// Manual Debug so the channel access token never reaches logs.
impl fmt::Debug for LineClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineClient")
            .field("base_url", &self.base_url)
            .field("channel_token", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl ReplySink for LineClient {
    async fn send_reply(&self, token: &ReplyToken, messages: &[OutboundMessage]) -> Result<()> {
        if messages.is_empty() {
            debug!("nothing to reply with, skipping");
            return Ok(());
        }

        let mut messages = messages;
        if messages.len() > MAX_REPLY_MESSAGES {
            warn!(count = messages.len(), "truncating reply to the platform cap");
            messages = &messages[..MAX_REPLY_MESSAGES];
        }

        let body = serde_json::json!({
            "replyToken": token.0,
            "messages": messages
                .iter()
                .map(|m| serde_json::json!({ "type": "text", "text": m.0 }))
                .collect::<Vec<_>>(),
        });

        let resp = self
            .http
            .post(format!("{}/v2/bot/message/reply", self.base_url))
            .bearer_auth(&self.channel_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Upstream(format!("line request error: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Upstream(format!(
                "line reply failed: {status} {}",
                body.chars().take(200).collect::<String>()
            )));
        }

        Ok(())
    }
}

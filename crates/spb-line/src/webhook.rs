//! Wire models for the LINE webhook payload.
//!
//! LINE delivers a batch of events per POST. Only text-message events carry
//! work for the bot; everything else (stickers, follows, joins, ...) is
//! skipped without error.

use serde::Deserialize;

use spb_core::domain::ReplyToken;

#[derive(Debug, Deserialize)]
pub struct WebhookPayload {
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub events: Vec<WebhookEvent>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub reply_token: Option<String>,
    #[serde(default)]
    pub message: Option<EventMessage>,
}

#[derive(Debug, Deserialize)]
pub struct EventMessage {
    #[serde(rename = "type")]
    pub message_type: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl WebhookEvent {
    /// Reply token and text when this is a text-message event with a token;
    /// `None` for every other event or message type.
    pub fn text_message(&self) -> Option<(ReplyToken, &str)> {
        if self.event_type != "message" {
            return None;
        }
        let message = self.message.as_ref()?;
        if message.message_type != "text" {
            return None;
        }
        let text = message.text.as_deref()?;
        let token = self.reply_token.as_ref()?;
        Some((ReplyToken(token.clone()), text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_text_message_event() {
        let json = r#"{
            "destination": "U0000000000000000000000000000000a",
            "events": [
                {
                    "type": "message",
                    "mode": "active",
                    "timestamp": 1756080000000,
                    "source": { "type": "user", "userId": "U1234567890" },
                    "webhookEventId": "01J5ZS4W9W4K2N8Q3E6T7YGAAA",
                    "deliveryContext": { "isRedelivery": false },
                    "replyToken": "757913772c4646b784d4b7ce46d12671",
                    "message": { "type": "text", "id": "14353798921116", "text": "nyy" }
                }
            ]
        }"#;

        let payload: WebhookPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.events.len(), 1);

        let (token, text) = payload.events[0].text_message().unwrap();
        assert_eq!(token, ReplyToken("757913772c4646b784d4b7ce46d12671".into()));
        assert_eq!(text, "nyy");
    }

    #[test]
    fn sticker_message_is_not_a_text_message() {
        let json = r#"{
            "events": [
                {
                    "type": "message",
                    "replyToken": "abc123",
                    "message": { "type": "sticker", "id": "1501597916", "stickerId": "52002734" }
                }
            ]
        }"#;

        let payload: WebhookPayload = serde_json::from_str(json).unwrap();
        assert!(payload.events[0].text_message().is_none());
    }

    #[test]
    fn follow_event_is_not_a_text_message() {
        let json = r#"{
            "events": [
                { "type": "follow", "replyToken": "abc123" }
            ]
        }"#;

        let payload: WebhookPayload = serde_json::from_str(json).unwrap();
        assert!(payload.events[0].text_message().is_none());
    }

    #[test]
    fn text_event_without_reply_token_is_skipped() {
        let json = r#"{
            "events": [
                {
                    "type": "message",
                    "message": { "type": "text", "id": "1", "text": "bos" }
                }
            ]
        }"#;

        let payload: WebhookPayload = serde_json::from_str(json).unwrap();
        assert!(payload.events[0].text_message().is_none());
    }

    #[test]
    fn empty_payload_has_no_events() {
        let payload: WebhookPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.destination.is_empty());
        assert!(payload.events.is_empty());
    }
}

use async_trait::async_trait;

use crate::{
    domain::{Game, GamePk, OutboundMessage, ReplyToken},
    Result,
};

/// Port for the sports-statistics collaborator.
///
/// The MLB Stats API is the first implementation; the exact data source,
/// polling and caching are entirely the implementor's concern.
#[async_trait]
pub trait ScheduleSource: Send + Sync {
    /// The current day's slate, in the schedule's given order.
    async fn today_schedule(&self) -> Result<Vec<Game>>;

    /// Free-text scoring-play block for one game; empty when none yet.
    async fn scoring_plays(&self, game_pk: GamePk) -> Result<String>;
}

/// Port for the messaging-platform reply collaborator.
#[async_trait]
pub trait ReplySink: Send + Sync {
    /// Deliver `messages` as one reply addressed by `token`, preserving order.
    ///
    /// Implementations enforce any platform per-reply message caps.
    async fn send_reply(&self, token: &ReplyToken, messages: &[OutboundMessage]) -> Result<()>;
}

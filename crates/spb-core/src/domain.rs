/// MLB numeric game identifier (`gamePk` upstream).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GamePk(pub u64);

/// Opaque per-event reply address issued by the messaging platform.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ReplyToken(pub String);

/// One text payload queued for delivery to the requesting chat.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutboundMessage(pub String);

/// One contest from the current day's slate.
///
/// Fetched fresh on every inbound request; never cached or persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    pub game_pk: GamePk,
    pub home_name: String,
    pub away_name: String,
    /// Free-text state label from the schedule ("Scheduled", "In Progress",
    /// "Final", ...).
    pub status: String,
    /// Zero until the game has started.
    pub home_score: u32,
    pub away_score: u32,
}

/// Core error type for the bot.
///
/// Adapter crates map their specific failures into this type so the webhook
/// layer can decide uniformly which failures become an HTTP status and which
/// become a user-visible reply.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("invalid webhook signature")]
    InvalidSignature,

    #[error("unknown team code: {0}")]
    UnknownTeam(String),

    #[error("upstream error: {0}")]
    Upstream(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

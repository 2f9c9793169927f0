//! Reply composition: one inbound text command -> ordered outbound messages.

use tracing::debug;

use crate::{
    domain::{Game, OutboundMessage},
    ports::ScheduleSource,
    teams::TeamDirectory,
    Result,
};

/// Fixed reply when the statistics upstream fails mid-request.
pub const UPSTREAM_FAILURE_TEXT: &str = "試合情報の取得に失敗しました。";

/// Summary for one game: status in brackets, then the score line.
pub fn game_summary(game: &Game) -> String {
    format!(
        "[{}]\n{} {} - {} {}",
        game.status, game.home_name, game.home_score, game.away_score, game.away_name
    )
}

/// Fixed reply when the requested team has no game today (or the code is
/// unknown). The wording is load-bearing; existing chats match on it.
pub fn not_found_message(code: &str) -> String {
    format!("{code}の試合が見つかりませんでした。")
}

/// Build the reply sequence for one inbound text command.
///
/// The raw text is uppercased and treated as a team abbreviation. Every game
/// in `games` whose home or away side is the resolved franchise contributes a
/// summary message, followed by a scoring-plays message when the game has
/// any, in schedule order. Zero matches (an unrecognized abbreviation
/// included) yield exactly the not-found message.
///
/// A scoring-plays fetch failure propagates; the webhook layer turns it into
/// a user-visible reply.
pub async fn compose_reply(
    text: &str,
    teams: &TeamDirectory,
    games: &[Game],
    stats: &dyn ScheduleSource,
) -> Result<Vec<OutboundMessage>> {
    let code = text.to_uppercase();

    let mut messages = Vec::new();

    if let Ok(team_name) = teams.resolve(&code) {
        for game in games
            .iter()
            .filter(|g| g.home_name == team_name || g.away_name == team_name)
        {
            messages.push(OutboundMessage(game_summary(game)));

            let plays = stats.scoring_plays(game.game_pk).await?;
            if !plays.is_empty() {
                messages.push(OutboundMessage(plays));
            }
        }
    } else {
        debug!(%code, "unrecognized team code");
    }

    if messages.is_empty() {
        messages.push(OutboundMessage(not_found_message(&code)));
    }

    Ok(messages)
}

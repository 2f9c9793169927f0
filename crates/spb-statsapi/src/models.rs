//! Wire models for the MLB Stats API `schedule` endpoint.
//!
//! Only the fields the bot reads are modeled; everything else in the (large)
//! upstream payload is ignored. Scores are absent before first pitch, so they
//! default to zero.

use serde::Deserialize;

use spb_core::domain::{Game, GamePk};

#[derive(Debug, Deserialize)]
pub struct ScheduleResponse {
    #[serde(default)]
    pub dates: Vec<ScheduleDate>,
}

#[derive(Debug, Deserialize)]
pub struct ScheduleDate {
    #[serde(default)]
    pub games: Vec<ScheduleGame>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleGame {
    pub game_pk: u64,
    #[serde(default)]
    pub status: GameStatus,
    pub teams: GameTeams,
    /// Populated only when the request hydrates `scoringplays`.
    #[serde(default)]
    pub scoring_plays: Vec<ScoringPlay>,
}

impl ScheduleGame {
    pub fn into_game(self) -> Game {
        Game {
            game_pk: GamePk(self.game_pk),
            home_name: self.teams.home.team.name,
            away_name: self.teams.away.team.name,
            status: self.status.detailed_state,
            home_score: self.teams.home.score,
            away_score: self.teams.away.score,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStatus {
    #[serde(default)]
    pub detailed_state: String,
}

#[derive(Debug, Deserialize)]
pub struct GameTeams {
    pub home: TeamSide,
    pub away: TeamSide,
}

#[derive(Debug, Default, Deserialize)]
pub struct TeamSide {
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub team: TeamInfo,
}

#[derive(Debug, Default, Deserialize)]
pub struct TeamInfo {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ScoringPlay {
    #[serde(default)]
    pub result: PlayResult,
    #[serde(default)]
    pub about: PlayAbout,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayResult {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub away_score: u32,
    #[serde(default)]
    pub home_score: u32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayAbout {
    #[serde(default)]
    pub half_inning: String,
    #[serde(default)]
    pub inning: u32,
    /// ISO-8601 timestamp; lexicographic order is chronological order.
    #[serde(default)]
    pub end_time: String,
}

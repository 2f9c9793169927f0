//! MLB Stats API adapter (today's schedule + per-game scoring plays).
//!
//! The Stats API is public and keyless; both operations are plain GETs
//! against the `schedule` endpoint, the second hydrated with scoring plays.

pub mod models;

use std::time::Duration;

use async_trait::async_trait;
use chrono::Local;
use tracing::debug;

use spb_core::{
    domain::{Game, GamePk},
    errors::Error,
    ports::ScheduleSource,
    Result,
};

use crate::models::{ScheduleResponse, ScoringPlay};

#[derive(Clone, Debug)]
pub struct StatsApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl StatsApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("reqwest client build");
        Self {
            base_url: base_url.into(),
            http,
        }
    }

    async fn fetch_schedule(&self, query: &[(&str, String)]) -> Result<ScheduleResponse> {
        let url = format!("{}/api/v1/schedule", self.base_url);

        let resp = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| Error::Upstream(format!("statsapi request error: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Upstream(format!(
                "statsapi schedule failed: {status} {}",
                body.chars().take(200).collect::<String>()
            )));
        }

        resp.json()
            .await
            .map_err(|e| Error::Upstream(format!("statsapi json error: {e}")))
    }
}

#[async_trait]
impl ScheduleSource for StatsApiClient {
    async fn today_schedule(&self) -> Result<Vec<Game>> {
        let date = Local::now().format("%m/%d/%Y").to_string();
        debug!(%date, "fetching today's schedule");

        let resp = self
            .fetch_schedule(&[("sportId", "1".to_string()), ("date", date)])
            .await?;

        Ok(resp
            .dates
            .into_iter()
            .flat_map(|d| d.games)
            .map(|g| g.into_game())
            .collect())
    }

    async fn scoring_plays(&self, game_pk: GamePk) -> Result<String> {
        let resp = self
            .fetch_schedule(&[
                ("sportId", "1".to_string()),
                ("gamePk", game_pk.0.to_string()),
                ("hydrate", "scoringplays".to_string()),
            ])
            .await?;

        let Some(game) = resp.dates.into_iter().flat_map(|d| d.games).next() else {
            debug!(game_pk = game_pk.0, "game missing from scoring-plays response");
            return Ok(String::new());
        };

        let mut plays = game.scoring_plays;
        plays.sort_by(|a, b| a.about.end_time.cmp(&b.about.end_time));

        Ok(format_scoring_plays(
            &plays,
            &game.teams.away.team.name,
            &game.teams.home.team.name,
        ))
    }
}

/// Render plays as one block per play, blank-line separated. The score line
/// lists the away side first, matching the upstream presentation.
fn format_scoring_plays(plays: &[ScoringPlay], away: &str, home: &str) -> String {
    plays
        .iter()
        .map(|p| {
            format!(
                "{}\n{} {} - {}: {}, {}: {}",
                p.result.description,
                capitalize(&p.about.half_inning),
                p.about.inning,
                away,
                p.result.away_score,
                home,
                p.result.home_score,
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Uppercase the first character only ("top" -> "Top").
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

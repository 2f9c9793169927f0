//! Static team directory: MLB abbreviation -> full franchise name.

use crate::{errors::Error, Result};

/// The 30 MLB franchises, keyed by the abbreviation users send to the bot.
const TEAMS: &[(&str, &str)] = &[
    ("AZ", "Arizona Diamondbacks"),
    ("ATL", "Atlanta Braves"),
    ("BAL", "Baltimore Orioles"),
    ("BOS", "Boston Red Sox"),
    ("CHC", "Chicago Cubs"),
    ("CWS", "Chicago White Sox"),
    ("CIN", "Cincinnati Reds"),
    ("COL", "Colorado Rockies"),
    ("CLE", "Cleveland Indians"),
    ("DET", "Detroit Tigers"),
    ("HOU", "Houston Astros"),
    ("KC", "Kansas City Royals"),
    ("LAA", "Los Angeles Angels"),
    ("LAD", "Los Angeles Dodgers"),
    ("MIA", "Miami Marlins"),
    ("MIL", "Milwaukee Brewers"),
    ("MIN", "Minnesota Twins"),
    ("NYM", "New York Mets"),
    ("NYY", "New York Yankees"),
    ("OAK", "Oakland Athletics"),
    ("PHI", "Philadelphia Phillies"),
    ("PIT", "Pittsburgh Pirates"),
    ("SD", "San Diego Padres"),
    ("SF", "San Francisco Giants"),
    ("SEA", "Seattle Mariners"),
    ("STL", "St. Louis Cardinals"),
    ("TB", "Tampa Bay Rays"),
    ("TEX", "Texas Rangers"),
    ("TOR", "Toronto Blue Jays"),
    ("WSH", "Washington Nationals"),
];

/// Read-only code -> franchise-name mapping, fixed at build time.
///
/// Purely a lookup surface; safe to share across requests without locking.
#[derive(Clone, Copy, Debug, Default)]
pub struct TeamDirectory;

impl TeamDirectory {
    /// Resolve an abbreviation to its full franchise name.
    ///
    /// Codes are matched exactly; callers normalize case first.
    pub fn resolve(&self, code: &str) -> Result<&'static str> {
        TEAMS
            .iter()
            .find(|(abbr, _)| *abbr == code)
            .map(|(_, name)| *name)
            .ok_or_else(|| Error::UnknownTeam(code.to_string()))
    }
}

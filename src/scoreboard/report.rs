use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::str::FromStr;

use crate::domain::matches::Match;
use crate::errors::{ScoreboardError, ScoreboardResult};

/// Output format of a rendered summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryFormat {
    /// Numbered lines: `1. Uruguay 6 - 6 Italy`
    #[default]
    Text,
    /// Pretty-printed JSON array of matches
    Json,
}

impl SummaryFormat {
    /// Renders an already ordered summary
    ///
    /// # Example
    /// ```
    /// use live_scoreboard::scoreboard::report::SummaryFormat;
    ///
    /// assert_eq!(SummaryFormat::Text.render(&[]).unwrap(), "No matches in progress.");
    /// ```
    pub fn render(&self, matches: &[Match]) -> ScoreboardResult<String> {
        match self {
            SummaryFormat::Text => Ok(render_text(matches)),
            SummaryFormat::Json => Ok(serde_json::to_string_pretty(matches)?),
        }
    }
}

fn render_text(matches: &[Match]) -> String {
    if matches.is_empty() {
        return "No matches in progress.".to_string();
    }

    let mut out = String::new();
    for (position, game) in matches.iter().enumerate() {
        if position > 0 {
            out.push('\n');
        }
        // Writing into a String cannot fail
        let _ = write!(out, "{}. {}", position + 1, game);
    }
    out
}

impl std::fmt::Display for SummaryFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SummaryFormat::Text => write!(f, "text"),
            SummaryFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for SummaryFormat {
    type Err = ScoreboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(SummaryFormat::Text),
            "json" => Ok(SummaryFormat::Json),
            other => Err(ScoreboardError::Config(format!(
                "Unknown summary format '{}' (expected text or json)",
                other
            ))),
        }
    }
}

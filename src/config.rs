use crate::domain::matches::MatchOrdering;
use crate::errors::ScoreboardResult;
use crate::scoreboard::report::SummaryFormat;

/// Environment variable selecting the summary ordering
pub const ORDERING_VAR: &str = "SCOREBOARD_ORDERING";
/// Environment variable selecting the summary output format
pub const FORMAT_VAR: &str = "SCOREBOARD_SUMMARY_FORMAT";

/// Runtime configuration of the scoreboard driver
///
/// # Environment Variables
/// - `SCOREBOARD_ORDERING` - `total-score` (default), `home-team` or `away-team`
/// - `SCOREBOARD_SUMMARY_FORMAT` - `text` (default) or `json`
///
/// Values may also come from a `.env` file loaded by the binary.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub ordering: MatchOrdering,
    pub summary_format: SummaryFormat,
}

impl AppConfig {
    /// Reads the configuration from the process environment
    pub fn from_env() -> ScoreboardResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`; unset variables fall back
    /// to their defaults, unknown values are rejected
    pub fn from_lookup<F>(lookup: F) -> ScoreboardResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let ordering = match lookup(ORDERING_VAR) {
            Some(value) => value.parse::<MatchOrdering>()?,
            None => {
                tracing::debug!("{} not set, using default ordering", ORDERING_VAR);
                MatchOrdering::default()
            }
        };

        let summary_format = match lookup(FORMAT_VAR) {
            Some(value) => value.parse::<SummaryFormat>()?,
            None => SummaryFormat::default(),
        };

        Ok(Self {
            ordering,
            summary_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ScoreboardError;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.ordering.name(), "total-score");
        assert_eq!(config.summary_format, SummaryFormat::Text);
    }

    #[test]
    fn reads_both_variables() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (ORDERING_VAR, "away-team"),
            (FORMAT_VAR, "json"),
        ]))
        .unwrap();

        assert_eq!(config.ordering.name(), "away-team");
        assert_eq!(config.summary_format, SummaryFormat::Json);
    }

    #[test]
    fn unknown_ordering_is_rejected() {
        let result = AppConfig::from_lookup(lookup_from(&[(ORDERING_VAR, "random")]));
        assert!(matches!(result, Err(ScoreboardError::Config(_))));
    }

    #[test]
    fn unknown_format_is_rejected() {
        let result = AppConfig::from_lookup(lookup_from(&[(FORMAT_VAR, "yaml")]));
        assert!(matches!(result, Err(ScoreboardError::Config(_))));
    }
}

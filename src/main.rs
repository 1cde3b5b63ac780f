use live_scoreboard::config::AppConfig;
use live_scoreboard::scoreboard::SummaryFormat;
use live_scoreboard::{MatchOrdering, Scoreboard, ScoreboardError, ScoreboardResult};

fn main() -> ScoreboardResult<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(
        ordering = config.ordering.name(),
        format = %config.summary_format,
        "Scoreboard configured"
    );

    basic_usage(&config)?;
    println!("\n--------------------------------------------\n");
    custom_orderings(config.summary_format)?;

    Ok(())
}

/// Five matches, ordered with the configured rule, then one finishes
fn basic_usage(config: &AppConfig) -> ScoreboardResult<()> {
    println!("BASIC USAGE\n");

    let scoreboard = Scoreboard::in_memory(config.ordering.clone());

    scoreboard.start_match("Mexico", "Canada")?;
    scoreboard.start_match("Spain", "Brazil")?;
    scoreboard.start_match("Germany", "France")?;
    scoreboard.start_match("Uruguay", "Italy")?;
    scoreboard.start_match("Argentina", "Australia")?;

    scoreboard.update_score("Mexico", "Canada", 0, 5)?;
    scoreboard.update_score("Spain", "Brazil", 10, 2)?;
    scoreboard.update_score("Germany", "France", 2, 2)?;
    scoreboard.update_score("Uruguay", "Italy", 6, 6)?;
    scoreboard.update_score("Argentina", "Australia", 3, 1)?;

    println!("Summary ({} ordering):", scoreboard.ordering().name());
    print_summary(&scoreboard, config.summary_format)?;

    scoreboard.finish_match("Mexico", "Canada")?;

    println!("\nSummary after Mexico vs Canada finished:");
    print_summary(&scoreboard, config.summary_format)
}

/// Alternative orderings and the errors a caller is expected to handle
fn custom_orderings(format: SummaryFormat) -> ScoreboardResult<()> {
    println!("CUSTOM ORDERINGS\n");

    let scoreboard = Scoreboard::in_memory(MatchOrdering::home_team_alphabetical());
    scoreboard.start_match("Brazil", "Croatia")?;
    scoreboard.start_match("Argentina", "Nigeria")?;
    scoreboard.start_match("France", "Australia")?;
    scoreboard.update_score("Brazil", "Croatia", 3, 1)?;
    scoreboard.update_score("Argentina", "Nigeria", 2, 1)?;
    scoreboard.update_score("France", "Australia", 4, 1)?;

    println!("Sorted alphabetically by home team:");
    print_summary(&scoreboard, format)?;

    println!();
    report_rejection(scoreboard.start_match("Brazil", "Germany").map(|_| ()));
    report_rejection(scoreboard.update_score("Spain", "Portugal", 2, 2));
    report_rejection(scoreboard.finish_match("England", "Italy"));

    let by_away_team = Scoreboard::in_memory(MatchOrdering::away_team_then_home_score_desc());
    by_away_team.start_match("Spain", "Portugal")?;
    by_away_team.start_match("Italy", "France")?;
    by_away_team.start_match("Germany", "England")?;
    by_away_team.update_score("Spain", "Portugal", 3, 2)?;
    by_away_team.update_score("Italy", "France", 1, 1)?;
    by_away_team.update_score("Germany", "England", 2, 0)?;

    println!("\nSorted by away team, then home score descending:");
    print_summary(&by_away_team, format)
}

fn report_rejection(result: ScoreboardResult<()>) {
    match result {
        Ok(()) => println!("Unexpectedly accepted"),
        Err(err @ ScoreboardError::TeamAlreadyPlaying { .. })
        | Err(err @ ScoreboardError::MatchNotFound { .. }) => println!("Rejected: {}", err),
        Err(err) => println!("Failed: {}", err),
    }
}

fn print_summary(scoreboard: &Scoreboard, format: SummaryFormat) -> ScoreboardResult<()> {
    let summary = scoreboard.summary()?;
    println!("{}", format.render(&summary)?);
    Ok(())
}

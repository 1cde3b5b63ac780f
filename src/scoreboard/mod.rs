// Scoreboard service layer
//
// Mediates between callers and the match repository: validates input,
// enforces the one-match-per-team rule and sorts the summary.

pub mod clock;
pub mod report;
pub mod service;

// Re-export main types
pub use clock::StartClock;
pub use report::SummaryFormat;
pub use service::Scoreboard;

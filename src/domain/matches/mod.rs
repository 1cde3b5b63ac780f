// Match domain module
// Contains the match aggregate root, its value objects and the summary ordering

pub mod football_match;
pub mod ordering;
pub mod value_objects;

// Re-export main types for convenience
pub use football_match::Match;
pub use ordering::MatchOrdering;
pub use value_objects::{MatchKey, Score, Team};

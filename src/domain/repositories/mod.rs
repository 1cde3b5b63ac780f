// Repository ports of the domain layer
// Implementations live in crate::infrastructure::repositories

pub mod match_repository;

pub use match_repository::{MatchRepository, RepositoryError, RepositoryResult};

//! Game reference data: read-only records with table limits, plus the
//! catalog views the lobby surfaces (featured, popular, new).

pub mod catalog;
pub mod models;

pub use catalog::GameCatalog;
pub use models::{Game, GameType};

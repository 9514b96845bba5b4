//! Game reference data models.

use crate::ledger::Cents;
use serde::{Deserialize, Serialize};

/// Game category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    Slot,
    Table,
    Card,
    Live,
    Special,
}

impl std::fmt::Display for GameType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameType::Slot => write!(f, "slot"),
            GameType::Table => write!(f, "table"),
            GameType::Card => write!(f, "card"),
            GameType::Live => write!(f, "live"),
            GameType::Special => write!(f, "special"),
        }
    }
}

/// Read-only game record supplied by the reference-data provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub name: String,
    pub game_type: GameType,
    pub description: String,
    /// Minimum stake in cents
    pub min_bet: Cents,
    /// Maximum stake in cents
    pub max_bet: Cents,
    /// Popularity score, 0-100
    pub popularity: u8,
    pub is_new: bool,
    pub is_hot: bool,
}

impl Game {
    /// Whether a stake falls within this game's table limits.
    pub fn limits_contain(&self, amount: Cents) -> bool {
        (self.min_bet..=self.max_bet).contains(&amount)
    }
}

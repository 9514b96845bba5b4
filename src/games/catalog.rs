//! In-memory catalog of game reference data.

use super::models::{Game, GameType};
use std::collections::HashMap;

/// Read-only game registry.
///
/// Reference data is supplied at construction time and never mutated
/// afterwards; lookup and discovery views recompute from the stored set.
pub struct GameCatalog {
    games: HashMap<String, Game>,
}

impl GameCatalog {
    /// Build a catalog from a set of games
    pub fn new(games: Vec<Game>) -> Self {
        Self {
            games: games.into_iter().map(|g| (g.id.clone(), g)).collect(),
        }
    }

    /// Look up a game by id
    pub fn get(&self, game_id: &str) -> Option<&Game> {
        self.games.get(game_id)
    }

    /// All games, unordered
    pub fn all(&self) -> Vec<&Game> {
        self.games.values().collect()
    }

    /// Hot or new games, capped at three
    pub fn featured(&self) -> Vec<&Game> {
        let mut featured: Vec<&Game> = self
            .games
            .values()
            .filter(|g| g.is_hot || g.is_new)
            .collect();
        featured.sort_by(|a, b| b.popularity.cmp(&a.popularity));
        featured.truncate(3);
        featured
    }

    /// Top `n` games by popularity
    pub fn popular(&self, n: usize) -> Vec<&Game> {
        let mut games: Vec<&Game> = self.games.values().collect();
        games.sort_by(|a, b| b.popularity.cmp(&a.popularity));
        games.truncate(n);
        games
    }

    /// Recently added games
    pub fn new_games(&self) -> Vec<&Game> {
        self.games.values().filter(|g| g.is_new).collect()
    }

    /// Demo catalog with the stock game set. Stakes are in cents.
    pub fn demo() -> Self {
        Self::new(vec![
            Game {
                id: "fortune-tiger".to_string(),
                name: "Fortune Tiger".to_string(),
                game_type: GameType::Special,
                description: "The popular Fortune Tiger game with exciting bonus features!"
                    .to_string(),
                min_bet: 100,
                max_bet: 10_000,
                popularity: 95,
                is_new: false,
                is_hot: true,
            },
            Game {
                id: "golden-slots".to_string(),
                name: "Golden Slots".to_string(),
                game_type: GameType::Slot,
                description: "Classic slot machine with multiple paylines and free spins."
                    .to_string(),
                min_bet: 50,
                max_bet: 5_000,
                popularity: 85,
                is_new: false,
                is_hot: false,
            },
            Game {
                id: "royal-blackjack".to_string(),
                name: "Royal Blackjack".to_string(),
                game_type: GameType::Card,
                description: "Play against the dealer in this classic card game.".to_string(),
                min_bet: 500,
                max_bet: 20_000,
                popularity: 80,
                is_new: false,
                is_hot: false,
            },
            Game {
                id: "european-roulette".to_string(),
                name: "European Roulette".to_string(),
                game_type: GameType::Table,
                description: "The classic roulette game with European rules.".to_string(),
                min_bet: 100,
                max_bet: 50_000,
                popularity: 75,
                is_new: false,
                is_hot: false,
            },
            Game {
                id: "live-dealer-poker".to_string(),
                name: "Live Dealer Poker".to_string(),
                game_type: GameType::Live,
                description: "Play poker with live dealers and other players in real-time."
                    .to_string(),
                min_bet: 1_000,
                max_bet: 100_000,
                popularity: 90,
                is_new: true,
                is_hot: true,
            },
            Game {
                id: "mega-jackpot".to_string(),
                name: "Mega Jackpot".to_string(),
                game_type: GameType::Slot,
                description: "Progressive jackpot slot with massive payouts!".to_string(),
                min_bet: 200,
                max_bet: 10_000,
                popularity: 88,
                is_new: true,
                is_hot: false,
            },
        ])
    }
}

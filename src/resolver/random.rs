//! Randomized outcome resolution from declared payout models.

use super::{
    OutcomeResolver,
    errors::ResolverResult,
    models::{Outcome, PayoutModel},
};
use crate::ledger::Cents;
use async_trait::async_trait;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::{collections::HashMap, sync::Mutex};

/// Outcome resolver drawing from a per-game payout model.
///
/// Games without a registered model use the default model. Seeded with
/// OS entropy in production; `seeded` builds a fully deterministic
/// resolver for tests.
pub struct RandomResolver {
    models: HashMap<String, PayoutModel>,
    default_model: PayoutModel,
    rng: Mutex<StdRng>,
}

impl RandomResolver {
    /// Create a resolver seeded from OS entropy
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Create a deterministic resolver from a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            models: HashMap::new(),
            default_model: PayoutModel::default(),
            rng: Mutex::new(rng),
        }
    }

    /// Register a payout model for a specific game
    pub fn with_model(mut self, game_id: &str, model: PayoutModel) -> Self {
        self.models.insert(game_id.to_string(), model);
        self
    }

    /// Replace the fallback model used for unregistered games
    pub fn with_default_model(mut self, model: PayoutModel) -> Self {
        self.default_model = model;
        self
    }

    /// Payout model in effect for a game
    pub fn model(&self, game_id: &str) -> PayoutModel {
        self.models
            .get(game_id)
            .copied()
            .unwrap_or(self.default_model)
    }
}

impl Default for RandomResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OutcomeResolver for RandomResolver {
    async fn resolve(&self, game_id: &str, _amount: Cents) -> ResolverResult<Outcome> {
        let model = self.model(game_id);
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        if rng.random_bool(model.win_probability.clamp(0.0, 1.0)) {
            let multiplier = if model.multiplier_max > model.multiplier_min {
                rng.random_range(model.multiplier_min..model.multiplier_max)
            } else {
                model.multiplier_min
            };
            Ok(Outcome::win(multiplier))
        } else {
            Ok(Outcome::loss())
        }
    }
}

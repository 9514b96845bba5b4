//! Outcome resolution module.
//!
//! An [`OutcomeResolver`] maps a wager to a win/loss decision with a
//! payout multiplier. Resolvers are pure decision functions: they never
//! touch ledger state, only return a decision, and may be backed by an
//! external source (hence the async seam and the unavailable error).

pub mod errors;
pub mod fixed;
pub mod models;
pub mod random;

pub use errors::{ResolverError, ResolverResult};
pub use fixed::FixedResolver;
pub use models::{Outcome, PayoutModel, WagerOutcome};
pub use random::RandomResolver;

use crate::ledger::Cents;
use async_trait::async_trait;

/// Decision function from wager to settlement outcome.
#[async_trait]
pub trait OutcomeResolver: Send + Sync {
    /// Resolve a wager on a game to an outcome.
    ///
    /// # Errors
    ///
    /// * `ResolverError::Unavailable` - The outcome source cannot decide
    async fn resolve(&self, game_id: &str, amount: Cents) -> ResolverResult<Outcome>;
}

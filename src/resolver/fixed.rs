//! Fixed outcome resolver for tests and demos.

use super::{
    OutcomeResolver,
    errors::{ResolverError, ResolverResult},
    models::Outcome,
};
use crate::ledger::Cents;
use async_trait::async_trait;

/// Resolver that always returns the same decision.
///
/// Lets callers force a win, a loss, or an unavailable outcome source,
/// which the wager engine scenarios need for deterministic settlement
/// and refund-path coverage.
pub struct FixedResolver {
    response: ResolverResult<Outcome>,
}

impl FixedResolver {
    /// Always resolve to a win with the given multiplier
    pub fn win(multiplier: f64) -> Self {
        Self {
            response: Ok(Outcome::win(multiplier)),
        }
    }

    /// Always resolve to a loss
    pub fn loss() -> Self {
        Self {
            response: Ok(Outcome::loss()),
        }
    }

    /// Always fail as unavailable
    pub fn unavailable(reason: &str) -> Self {
        Self {
            response: Err(ResolverError::Unavailable(reason.to_string())),
        }
    }
}

#[async_trait]
impl OutcomeResolver for FixedResolver {
    async fn resolve(&self, _game_id: &str, _amount: Cents) -> ResolverResult<Outcome> {
        self.response.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixed_win_and_loss() {
        let win = FixedResolver::win(2.5);
        let outcome = win.resolve("g", 100).await.expect("resolve");
        assert!(outcome.is_win());
        assert_eq!(outcome.multiplier, 2.5);

        let loss = FixedResolver::loss();
        let outcome = loss.resolve("g", 100).await.expect("resolve");
        assert!(!outcome.is_win());
    }

    #[tokio::test]
    async fn test_fixed_unavailable() {
        let broken = FixedResolver::unavailable("maintenance");
        let err = broken.resolve("g", 100).await.expect_err("should fail");
        assert_eq!(err, ResolverError::Unavailable("maintenance".to_string()));
    }
}

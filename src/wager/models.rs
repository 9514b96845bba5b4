//! Wager data models and the settlement state machine.

use crate::ledger::{AccountId, Cents};
use crate::resolver::WagerOutcome;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of one wager.
///
/// Legal paths are `Requested -> Validated -> Debited -> Resolved ->
/// Settled` and `Requested -> Rejected`; both `Settled` and `Rejected`
/// are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WagerState {
    Requested,
    Validated,
    Debited,
    Resolved,
    Settled,
    Rejected,
}

impl WagerState {
    /// Whether this state admits a transition to `next`.
    pub fn can_transition_to(&self, next: WagerState) -> bool {
        matches!(
            (self, next),
            (WagerState::Requested, WagerState::Validated)
                | (WagerState::Requested, WagerState::Rejected)
                | (WagerState::Validated, WagerState::Debited)
                | (WagerState::Validated, WagerState::Rejected)
                | (WagerState::Debited, WagerState::Resolved)
                | (WagerState::Resolved, WagerState::Settled)
        )
    }

    /// Whether this state is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, WagerState::Settled | WagerState::Rejected)
    }
}

impl std::fmt::Display for WagerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let repr = match self {
            WagerState::Requested => "requested",
            WagerState::Validated => "validated",
            WagerState::Debited => "debited",
            WagerState::Resolved => "resolved",
            WagerState::Settled => "settled",
            WagerState::Rejected => "rejected",
        };
        write!(f, "{repr}")
    }
}

/// One in-flight wager tracked by the engine.
#[derive(Debug, Clone)]
pub struct Wager {
    pub id: Uuid,
    pub account_id: AccountId,
    pub game_id: String,
    pub amount: Cents,
    pub state: WagerState,
}

impl Wager {
    pub fn new(account_id: &str, game_id: &str, amount: Cents) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id: account_id.to_string(),
            game_id: game_id.to_string(),
            amount,
            state: WagerState::Requested,
        }
    }

    /// Advance to the next state. Only the engine drives transitions, so
    /// an illegal one is a programming error.
    pub(crate) fn advance(&mut self, next: WagerState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "illegal wager transition {} -> {next}",
            self.state
        );
        log::debug!("Wager {}: {} -> {next}", self.id, self.state);
        self.state = next;
    }
}

/// Terminal settlement returned to the caller once a wager reaches
/// `Settled`. Intermediate balances are never exposed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settlement {
    pub wager_id: Uuid,
    pub account_id: AccountId,
    pub game_id: String,
    pub outcome: WagerOutcome,
    /// Amount staked in cents
    pub amount: Cents,
    /// Amount credited in cents; zero on a loss
    pub payout: Cents,
    pub settled_at: DateTime<Utc>,
}

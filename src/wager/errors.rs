//! Wager engine error types.

use crate::ledger::{Cents, LedgerError};
use thiserror::Error;

/// Wager errors
#[derive(Debug, Error)]
pub enum WagerError {
    /// Stake must be positive
    #[error("Invalid amount: {0}")]
    InvalidAmount(Cents),

    /// Unknown game id
    #[error("Game not found: {0}")]
    GameNotFound(String),

    /// Stake outside the game's table limits
    #[error("Bet {amount} outside limits [{min_bet}, {max_bet}]")]
    BetOutOfRange {
        amount: Cents,
        min_bet: Cents,
        max_bet: Cents,
    },

    /// Account not found
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// Stake exceeds the available balance
    #[error("Insufficient funds: available {available}, required {required}")]
    InsufficientFunds { available: Cents, required: Cents },

    /// Outcome source could not decide; the stake has been refunded
    #[error("Resolver unavailable: {0}")]
    ResolverUnavailable(String),

    /// A debited stake could not be settled or refunded; manual
    /// reconciliation is required
    #[error("Reconciliation required for account {account_id}: unreturned stake {amount}")]
    ReconciliationRequired { account_id: String, amount: Cents },

    /// Unexpected ledger failure
    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),
}

impl WagerError {
    /// Client-safe message that does not leak account identifiers or
    /// internal ledger detail.
    pub fn client_message(&self) -> String {
        match self {
            WagerError::AccountNotFound(_) => "Account not found".to_string(),
            WagerError::ReconciliationRequired { .. } => {
                "Settlement failed; support has been notified".to_string()
            }
            WagerError::Ledger(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        }
    }
}

/// Result type for wager operations
pub type WagerResult<T> = Result<T, WagerError>;

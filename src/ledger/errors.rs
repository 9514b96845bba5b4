//! Ledger error types.

use super::models::{Cents, EntryDirection, TransactionKind};
use thiserror::Error;

/// Ledger errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// Account not found
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// Account already provisioned
    #[error("Account already exists: {0}")]
    AccountAlreadyExists(String),

    /// Invalid amount (must be positive)
    #[error("Invalid amount: {0}")]
    InvalidAmount(Cents),

    /// Insufficient funds for a debit
    #[error("Insufficient funds: available {available}, required {required}")]
    InsufficientFunds { available: Cents, required: Cents },

    /// Balance would overflow
    #[error("Balance overflow")]
    BalanceOverflow,

    /// Transaction kind does not match the requested direction
    #[error("Kind {kind} is a {} kind, not a {expected} kind", .kind.direction())]
    KindDirectionMismatch {
        kind: TransactionKind,
        expected: EntryDirection,
    },

    /// Stored balance does not match the transaction log
    #[error("Reconciliation mismatch: balance {balance}, reconstructed {reconstructed}")]
    ReconciliationMismatch {
        balance: Cents,
        reconstructed: Cents,
    },
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

//! Ledger module providing account balances with an append-only
//! transaction log.
//!
//! This module implements:
//! - Per-account serialized balance mutation (one mutex per account)
//! - Append-only transaction history with kind-implied direction
//! - Deposits and withdrawals over external payment methods
//! - Reconciliation of the stored balance against the log

pub mod errors;
pub mod manager;
pub mod models;

pub use errors::{LedgerError, LedgerResult};
pub use manager::AccountLedger;
pub use models::{
    Account, AccountId, Cents, EntryDirection, Transaction, TransactionKind, TransferMethod,
};

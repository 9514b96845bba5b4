//! Ledger data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Monetary amount in integer cents.
pub type Cents = i64;

/// Opaque account identifier.
pub type AccountId = String;

/// Account model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub balance: Cents,
    /// Balance the account was provisioned with; retained so the ledger
    /// can be reconciled against the transaction log at any time.
    pub initial_balance: Cents,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Immutable record of one balance-affecting event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub account_id: AccountId,
    pub kind: TransactionKind,
    /// Always positive; direction is implied by `kind`.
    pub amount: Cents,
    /// Balance immediately after this transaction was applied.
    pub balance_after: Cents,
    pub method: TransferMethod,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Amount with the sign implied by the transaction kind.
    pub fn signed_amount(&self) -> Cents {
        match self.kind.direction() {
            EntryDirection::Credit => self.amount,
            EntryDirection::Debit => -self.amount,
        }
    }
}

/// Entry direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryDirection {
    Debit,
    Credit,
}

impl std::fmt::Display for EntryDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryDirection::Debit => write!(f, "debit"),
            EntryDirection::Credit => write!(f, "credit"),
        }
    }
}

/// Transaction kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
    Bet,
    Win,
    /// Compensating credit returning a debited stake after a failed
    /// settlement.
    BetRefund,
}

impl TransactionKind {
    /// Direction this kind applies to the balance.
    pub fn direction(&self) -> EntryDirection {
        match self {
            TransactionKind::Deposit | TransactionKind::Win | TransactionKind::BetRefund => {
                EntryDirection::Credit
            }
            TransactionKind::Withdrawal | TransactionKind::Bet => EntryDirection::Debit,
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Deposit => write!(f, "deposit"),
            TransactionKind::Withdrawal => write!(f, "withdrawal"),
            TransactionKind::Bet => write!(f, "bet"),
            TransactionKind::Win => write!(f, "win"),
            TransactionKind::BetRefund => write!(f, "bet_refund"),
        }
    }
}

/// Payment channel a transaction moved through. Deposits and withdrawals
/// carry an external method; bets, wins and refunds use the internal
/// wagering channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferMethod {
    CreditCard,
    BankTransfer,
    EWallet,
    Crypto,
    Wagering,
}

impl std::fmt::Display for TransferMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransferMethod::CreditCard => write!(f, "credit_card"),
            TransferMethod::BankTransfer => write!(f, "bank_transfer"),
            TransferMethod::EWallet => write!(f, "e_wallet"),
            TransferMethod::Crypto => write!(f, "crypto"),
            TransferMethod::Wagering => write!(f, "wagering"),
        }
    }
}

//! Account ledger implementation with an append-only transaction log.
//!
//! The ledger is the sole mutator of account balances. Every mutation is
//! an atomic check-then-mutate under that account's mutex and appends
//! exactly one transaction, so the stored balance always equals the
//! initial balance plus the signed sum of the log.

use super::{
    errors::{LedgerError, LedgerResult},
    models::{Account, AccountId, Cents, EntryDirection, Transaction, TransactionKind, TransferMethod},
};
use crate::clock::{Clock, SystemClock};
use std::{collections::HashMap, sync::Arc};
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

/// Per-account mutable state, guarded by one mutex per account so
/// mutations on a single account serialize while distinct accounts
/// proceed in parallel.
struct AccountState {
    account: Account,
    transactions: Vec<Transaction>,
}

/// Account ledger
#[derive(Clone)]
pub struct AccountLedger {
    accounts: Arc<RwLock<HashMap<AccountId, Arc<Mutex<AccountState>>>>>,
    clock: Arc<dyn Clock>,
}

impl AccountLedger {
    /// Create a new ledger using the system clock
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create a new ledger with an injected clock source
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
            clock,
        }
    }

    /// Provision a new account
    ///
    /// # Arguments
    ///
    /// * `account_id` - Unique account identifier
    /// * `initial_balance` - Starting balance in cents
    ///
    /// # Errors
    ///
    /// * `LedgerError::InvalidAmount` - Negative initial balance
    /// * `LedgerError::AccountAlreadyExists` - Identifier already in use
    pub async fn open_account(
        &self,
        account_id: &str,
        initial_balance: Cents,
    ) -> LedgerResult<Account> {
        if initial_balance < 0 {
            return Err(LedgerError::InvalidAmount(initial_balance));
        }

        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(account_id) {
            return Err(LedgerError::AccountAlreadyExists(account_id.to_string()));
        }

        let now = self.clock.now();
        let account = Account {
            id: account_id.to_string(),
            balance: initial_balance,
            initial_balance,
            created_at: now,
            updated_at: now,
        };
        accounts.insert(
            account_id.to_string(),
            Arc::new(Mutex::new(AccountState {
                account: account.clone(),
                transactions: Vec::new(),
            })),
        );

        log::info!("Account {account_id} opened with balance {initial_balance}");
        Ok(account)
    }

    /// Debit an account over the internal wagering channel
    ///
    /// # Errors
    ///
    /// * `LedgerError::InvalidAmount` - Amount not positive
    /// * `LedgerError::InsufficientFunds` - Amount exceeds balance
    /// * `LedgerError::KindDirectionMismatch` - `kind` is not a debiting kind
    pub async fn debit(
        &self,
        account_id: &str,
        amount: Cents,
        kind: TransactionKind,
    ) -> LedgerResult<Transaction> {
        if kind.direction() != EntryDirection::Debit {
            return Err(LedgerError::KindDirectionMismatch {
                kind,
                expected: EntryDirection::Debit,
            });
        }
        self.apply(account_id, amount, kind, TransferMethod::Wagering)
            .await
    }

    /// Credit an account over the internal wagering channel
    ///
    /// # Errors
    ///
    /// * `LedgerError::InvalidAmount` - Amount not positive
    /// * `LedgerError::BalanceOverflow` - Credit would overflow the balance
    /// * `LedgerError::KindDirectionMismatch` - `kind` is not a crediting kind
    pub async fn credit(
        &self,
        account_id: &str,
        amount: Cents,
        kind: TransactionKind,
    ) -> LedgerResult<Transaction> {
        if kind.direction() != EntryDirection::Credit {
            return Err(LedgerError::KindDirectionMismatch {
                kind,
                expected: EntryDirection::Credit,
            });
        }
        self.apply(account_id, amount, kind, TransferMethod::Wagering)
            .await
    }

    /// Deposit funds through an external payment method
    pub async fn deposit(
        &self,
        account_id: &str,
        amount: Cents,
        method: TransferMethod,
    ) -> LedgerResult<Transaction> {
        self.apply(account_id, amount, TransactionKind::Deposit, method)
            .await
    }

    /// Withdraw funds through an external payment method
    ///
    /// # Errors
    ///
    /// * `LedgerError::InsufficientFunds` - Amount exceeds balance
    pub async fn withdraw(
        &self,
        account_id: &str,
        amount: Cents,
        method: TransferMethod,
    ) -> LedgerResult<Transaction> {
        self.apply(account_id, amount, TransactionKind::Withdrawal, method)
            .await
    }

    /// Get the current balance for an account
    pub async fn balance(&self, account_id: &str) -> LedgerResult<Cents> {
        let state = self.state(account_id).await?;
        let state = state.lock().await;
        Ok(state.account.balance)
    }

    /// Get the full account record
    pub async fn account(&self, account_id: &str) -> LedgerResult<Account> {
        let state = self.state(account_id).await?;
        let state = state.lock().await;
        Ok(state.account.clone())
    }

    /// Get transaction history for an account, newest first
    ///
    /// Each call recomputes the view from the full stored log; there is no
    /// cursor state between calls.
    ///
    /// # Arguments
    ///
    /// * `account_id` - Account identifier
    /// * `limit` - Maximum number of transactions to return
    pub async fn history(
        &self,
        account_id: &str,
        limit: Option<usize>,
    ) -> LedgerResult<Vec<Transaction>> {
        let state = self.state(account_id).await?;
        let state = state.lock().await;
        let mut entries: Vec<Transaction> = state.transactions.iter().rev().cloned().collect();
        if let Some(limit) = limit {
            entries.truncate(limit);
        }
        Ok(entries)
    }

    /// Verify the stored balance against the transaction log
    ///
    /// Returns the balance when `balance == initial_balance + sum of
    /// signed transaction amounts`.
    ///
    /// # Errors
    ///
    /// * `LedgerError::ReconciliationMismatch` - The invariant does not hold
    pub async fn reconcile(&self, account_id: &str) -> LedgerResult<Cents> {
        let state = self.state(account_id).await?;
        let state = state.lock().await;
        let reconstructed = state.account.initial_balance
            + state
                .transactions
                .iter()
                .map(Transaction::signed_amount)
                .sum::<Cents>();
        if reconstructed != state.account.balance {
            return Err(LedgerError::ReconciliationMismatch {
                balance: state.account.balance,
                reconstructed,
            });
        }
        Ok(state.account.balance)
    }

    /// Apply one balance mutation and append its transaction.
    async fn apply(
        &self,
        account_id: &str,
        amount: Cents,
        kind: TransactionKind,
        method: TransferMethod,
    ) -> LedgerResult<Transaction> {
        if amount <= 0 {
            return Err(LedgerError::InvalidAmount(amount));
        }

        let state = self.state(account_id).await?;
        let mut state = state.lock().await;

        let new_balance = match kind.direction() {
            EntryDirection::Debit => {
                if amount > state.account.balance {
                    return Err(LedgerError::InsufficientFunds {
                        available: state.account.balance,
                        required: amount,
                    });
                }
                state.account.balance - amount
            }
            EntryDirection::Credit => state
                .account
                .balance
                .checked_add(amount)
                .ok_or(LedgerError::BalanceOverflow)?,
        };

        // Clamp so created_at never decreases within one account's history,
        // even if the clock moves backwards.
        let last_stamp = state.transactions.last().map(|t| t.created_at);
        let mut created_at = self.clock.now();
        if let Some(last) = last_stamp {
            created_at = created_at.max(last);
        }

        let transaction = Transaction {
            id: Uuid::new_v4(),
            account_id: account_id.to_string(),
            kind,
            amount,
            balance_after: new_balance,
            method,
            created_at,
        };

        state.account.balance = new_balance;
        state.account.updated_at = created_at;
        state.transactions.push(transaction.clone());

        log::debug!(
            "Account {account_id}: {kind} {amount} via {method}, balance now {new_balance}"
        );
        Ok(transaction)
    }

    /// Look up the state handle for an account.
    async fn state(&self, account_id: &str) -> LedgerResult<Arc<Mutex<AccountState>>> {
        let accounts = self.accounts.read().await;
        accounts
            .get(account_id)
            .cloned()
            .ok_or_else(|| LedgerError::AccountNotFound(account_id.to_string()))
    }
}

impl Default for AccountLedger {
    fn default() -> Self {
        Self::new()
    }
}

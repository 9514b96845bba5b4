//! Wager engine driving the settlement state machine.

use super::{
    errors::{WagerError, WagerResult},
    models::{Settlement, Wager, WagerState},
};
use crate::{
    config::EngineConfig,
    games::GameCatalog,
    ledger::{Account, AccountLedger, Cents, LedgerError, Transaction, TransactionKind},
    resolver::{OutcomeResolver, ResolverError},
};
use chrono::Utc;
use std::sync::Arc;
use tokio::time::{Duration, sleep};

/// Wager engine
///
/// Validates a proposed wager against table limits and the available
/// balance, records the bet debit, asks the resolver for an outcome, and
/// applies the win credit. Callers only ever observe the terminal
/// [`Settlement`] or a rejection; intermediate balances are never exposed.
#[derive(Clone)]
pub struct WagerEngine {
    ledger: Arc<AccountLedger>,
    catalog: Arc<GameCatalog>,
    resolver: Arc<dyn OutcomeResolver>,
    config: EngineConfig,
}

impl WagerEngine {
    /// Create a new wager engine
    ///
    /// # Arguments
    ///
    /// * `ledger` - Account ledger (sole balance mutator)
    /// * `catalog` - Game reference-data provider
    /// * `resolver` - Outcome decision source
    /// * `config` - Refund policy and provisioning defaults
    pub fn new(
        ledger: Arc<AccountLedger>,
        catalog: Arc<GameCatalog>,
        resolver: Arc<dyn OutcomeResolver>,
        config: EngineConfig,
    ) -> Self {
        Self {
            ledger,
            catalog,
            resolver,
            config,
        }
    }

    /// Place a wager and drive it to settlement
    ///
    /// # Arguments
    ///
    /// * `account_id` - Staking account
    /// * `game_id` - Game being wagered on
    /// * `amount` - Stake in cents
    ///
    /// # Errors
    ///
    /// * `WagerError::InvalidAmount` - Stake not positive
    /// * `WagerError::GameNotFound` - Unknown game id
    /// * `WagerError::BetOutOfRange` - Stake outside table limits
    /// * `WagerError::AccountNotFound` - Unknown account
    /// * `WagerError::InsufficientFunds` - Stake exceeds balance
    /// * `WagerError::ResolverUnavailable` - No outcome; stake refunded
    /// * `WagerError::ReconciliationRequired` - Stake could not be refunded
    pub async fn place_wager(
        &self,
        account_id: &str,
        game_id: &str,
        amount: Cents,
    ) -> WagerResult<Settlement> {
        let mut wager = Wager::new(account_id, game_id, amount);

        if let Err(e) = self.validate(&wager).await {
            wager.advance(WagerState::Rejected);
            log::debug!("Wager {} rejected: {e}", wager.id);
            return Err(e);
        }
        wager.advance(WagerState::Validated);

        // The balance read above may be stale by now; the debit itself is
        // the atomic check, and a concurrent drain surfaces here.
        match self
            .ledger
            .debit(account_id, amount, TransactionKind::Bet)
            .await
        {
            Ok(_) => wager.advance(WagerState::Debited),
            Err(LedgerError::InsufficientFunds {
                available,
                required,
            }) => {
                wager.advance(WagerState::Rejected);
                log::debug!("Wager {} lost the race for funds", wager.id);
                return Err(WagerError::InsufficientFunds {
                    available,
                    required,
                });
            }
            Err(e) => {
                wager.advance(WagerState::Rejected);
                return Err(e.into());
            }
        }

        // Resolution runs with no account lock held; the stake is already
        // debited so no balance race remains.
        let outcome = match self.resolver.resolve(game_id, amount).await {
            Ok(outcome) => {
                wager.advance(WagerState::Resolved);
                outcome
            }
            Err(ResolverError::Unavailable(reason)) => {
                log::warn!("Wager {}: resolver unavailable, refunding stake", wager.id);
                self.refund(&wager).await?;
                return Err(WagerError::ResolverUnavailable(reason));
            }
        };

        let payout = if outcome.is_win() {
            (amount as f64 * outcome.multiplier).round() as Cents
        } else {
            0
        };
        if payout > 0
            && let Err(e) = self
                .ledger
                .credit(account_id, payout, TransactionKind::Win)
                .await
        {
            log::warn!("Wager {}: win credit failed ({e}), refunding stake", wager.id);
            self.refund(&wager).await?;
            return Err(e.into());
        }
        wager.advance(WagerState::Settled);

        log::info!(
            "Wager {} on {game_id} settled: {} stake {amount} payout {payout}",
            wager.id,
            outcome.result
        );
        Ok(Settlement {
            wager_id: wager.id,
            account_id: account_id.to_string(),
            game_id: game_id.to_string(),
            outcome: outcome.result,
            amount,
            payout,
            settled_at: Utc::now(),
        })
    }

    /// Open an account with the configured default balance
    pub async fn open_account(&self, account_id: &str) -> WagerResult<Account> {
        self.ledger
            .open_account(account_id, self.config.default_initial_balance)
            .await
            .map_err(WagerError::from)
    }

    /// Current balance for an account
    pub async fn balance(&self, account_id: &str) -> WagerResult<Cents> {
        self.ledger
            .balance(account_id)
            .await
            .map_err(Self::map_lookup_error)
    }

    /// Transaction history for an account, newest first
    pub async fn history(
        &self,
        account_id: &str,
        limit: Option<usize>,
    ) -> WagerResult<Vec<Transaction>> {
        self.ledger
            .history(account_id, limit)
            .await
            .map_err(Self::map_lookup_error)
    }

    /// Pre-debit validation: limits, then balance. No mutation on failure.
    async fn validate(&self, wager: &Wager) -> WagerResult<()> {
        if wager.amount <= 0 {
            return Err(WagerError::InvalidAmount(wager.amount));
        }

        let game = self
            .catalog
            .get(&wager.game_id)
            .ok_or_else(|| WagerError::GameNotFound(wager.game_id.clone()))?;
        if !game.limits_contain(wager.amount) {
            return Err(WagerError::BetOutOfRange {
                amount: wager.amount,
                min_bet: game.min_bet,
                max_bet: game.max_bet,
            });
        }

        let balance = self
            .ledger
            .balance(&wager.account_id)
            .await
            .map_err(Self::map_lookup_error)?;
        if balance < wager.amount {
            return Err(WagerError::InsufficientFunds {
                available: balance,
                required: wager.amount,
            });
        }
        Ok(())
    }

    /// Return a debited stake via a compensating credit, retrying with
    /// exponential backoff. Exhausting the retry budget escalates as a
    /// fatal reconciliation alert; the debited stake is never silently
    /// dropped.
    async fn refund(&self, wager: &Wager) -> WagerResult<()> {
        let mut backoff = Duration::from_millis(self.config.refund_backoff_ms);
        let mut attempt = 0u32;
        loop {
            attempt += 1;
            match self
                .ledger
                .credit(&wager.account_id, wager.amount, TransactionKind::BetRefund)
                .await
            {
                Ok(_) => {
                    log::info!("Wager {}: stake {} refunded", wager.id, wager.amount);
                    return Ok(());
                }
                Err(e) if attempt <= self.config.refund_max_retries => {
                    log::warn!("Wager {}: refund attempt {attempt} failed: {e}", wager.id);
                    sleep(backoff).await;
                    backoff *= 2;
                }
                Err(e) => {
                    log::error!(
                        "RECONCILIATION: wager {} holds unreturned stake {} on account {}: {e}",
                        wager.id,
                        wager.amount,
                        wager.account_id
                    );
                    return Err(WagerError::ReconciliationRequired {
                        account_id: wager.account_id.clone(),
                        amount: wager.amount,
                    });
                }
            }
        }
    }

    fn map_lookup_error(e: LedgerError) -> WagerError {
        match e {
            LedgerError::AccountNotFound(id) => WagerError::AccountNotFound(id),
            e => WagerError::Ledger(e),
        }
    }
}

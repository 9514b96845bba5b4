//! # Casino Core
//!
//! A casino wagering and settlement library built around three
//! cooperating parts:
//!
//! - [`ledger::AccountLedger`]: the sole mutator of account balances,
//!   with an append-only transaction log and per-account serialization
//! - [`wager::WagerEngine`]: the settlement state machine
//!   (`Requested -> Validated -> Debited -> Resolved -> Settled`)
//! - [`resolver::OutcomeResolver`]: pure decision function from wager to
//!   win/loss outcome under a declared payout model
//!
//! Presentation, transport, persistence and authentication are left to
//! the hosting system; this crate owns balance correctness. The core
//! invariant, checked by [`ledger::AccountLedger::reconcile`], is that
//! every balance equals its initial balance plus the signed sum of the
//! account's transactions.
//!
//! ## Example
//!
//! ```
//! use casino_core::{
//!     AccountLedger, EngineConfig, FixedResolver, GameCatalog, WagerEngine,
//! };
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = WagerEngine::new(
//!         Arc::new(AccountLedger::new()),
//!         Arc::new(GameCatalog::demo()),
//!         Arc::new(FixedResolver::win(2.0)),
//!         EngineConfig::default(),
//!     );
//!
//!     engine.open_account("alice").await?;
//!     let settlement = engine.place_wager("alice", "fortune-tiger", 2_000).await?;
//!     println!("{}: staked {} won {}", settlement.outcome, settlement.amount, settlement.payout);
//!
//!     Ok(())
//! }
//! ```

/// Clock seam for transaction timestamps.
pub mod clock;
pub use clock::{Clock, ManualClock, SystemClock};

/// Engine configuration.
pub mod config;
pub use config::EngineConfig;

/// Account balances and the append-only transaction log.
pub mod ledger;
pub use ledger::{
    Account, AccountLedger, Cents, LedgerError, LedgerResult, Transaction, TransactionKind,
    TransferMethod,
};

/// Game reference data.
pub mod games;
pub use games::{Game, GameCatalog, GameType};

/// Outcome resolution.
pub mod resolver;
pub use resolver::{
    FixedResolver, Outcome, OutcomeResolver, PayoutModel, RandomResolver, WagerOutcome,
};

/// The wagering state machine.
pub mod wager;
pub use wager::{Settlement, WagerEngine, WagerError, WagerResult, WagerState};

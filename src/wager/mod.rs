//! Wagering module: the settlement state machine over the ledger,
//! resolver and game catalog.
//!
//! A wager moves `Requested -> Validated -> Debited -> Resolved ->
//! Settled`, or `Requested -> Rejected` with no side effect. Any failure
//! after the bet debit either completes settlement or refunds the stake
//! before the error surfaces.

pub mod engine;
pub mod errors;
pub mod models;

pub use engine::WagerEngine;
pub use errors::{WagerError, WagerResult};
pub use models::{Settlement, Wager, WagerState};

//! Engine configuration module.
//!
//! Provides configuration for the wager engine's refund policy and the
//! default balance new accounts are provisioned with.

use crate::ledger::Cents;
use std::env;

/// Wager engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Maximum number of compensating-refund attempts after a failed
    /// settlement before the condition is escalated
    pub refund_max_retries: u32,

    /// Base backoff between refund attempts in milliseconds; doubles on
    /// each retry
    pub refund_backoff_ms: u64,

    /// Default balance in cents for accounts opened through the engine
    pub default_initial_balance: Cents,
}

impl EngineConfig {
    /// Create configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `REFUND_MAX_RETRIES`: refund attempt bound (default: 3)
    /// - `REFUND_BACKOFF_MS`: base refund backoff in ms (default: 50)
    /// - `DEFAULT_ACCOUNT_BALANCE`: starting balance in cents (default: 100000)
    pub fn from_env() -> Self {
        Self {
            refund_max_retries: env::var("REFUND_MAX_RETRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3),
            refund_backoff_ms: env::var("REFUND_BACKOFF_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(50),
            default_initial_balance: env::var("DEFAULT_ACCOUNT_BALANCE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(100_000),
        }
    }

    /// Default configuration for development
    pub fn development() -> Self {
        Self {
            refund_max_retries: 3,
            refund_backoff_ms: 50,
            default_initial_balance: 100_000,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::development()
    }
}

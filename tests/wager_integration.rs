//! Integration tests for the wager engine.
//!
//! Covers the settlement scenarios: forced wins and losses, limit and
//! balance rejections with zero side effects, the refund path when the
//! resolver is unavailable, and the concurrent exact-drain race.

use casino_core::{
    AccountLedger, EngineConfig, FixedResolver, GameCatalog, OutcomeResolver, RandomResolver,
    TransactionKind, WagerEngine, WagerError, WagerOutcome,
};
use std::sync::Arc;

/// Engine over a fresh ledger, the demo catalog, and the given resolver.
fn setup_engine(resolver: Arc<dyn OutcomeResolver>) -> WagerEngine {
    WagerEngine::new(
        Arc::new(AccountLedger::new()),
        Arc::new(GameCatalog::demo()),
        resolver,
        EngineConfig {
            refund_max_retries: 2,
            refund_backoff_ms: 1,
            default_initial_balance: 10_000,
        },
    )
}

#[tokio::test]
async fn test_forced_win_settles_bet_and_win() {
    // Balance 100.00, wager 20.00, forced win x2.0.
    let engine = setup_engine(Arc::new(FixedResolver::win(2.0)));
    engine.open_account("alice").await.expect("open");

    let settlement = engine
        .place_wager("alice", "fortune-tiger", 2_000)
        .await
        .expect("wager should settle");

    assert_eq!(settlement.outcome, WagerOutcome::Win);
    assert_eq!(settlement.amount, 2_000);
    assert_eq!(settlement.payout, 4_000);

    // -20.00 bet, +40.00 win => 120.00.
    assert_eq!(engine.balance("alice").await.expect("balance"), 12_000);

    let history = engine.history("alice", None).await.expect("history");
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].kind, TransactionKind::Win);
    assert_eq!(history[0].amount, 4_000);
    assert_eq!(history[1].kind, TransactionKind::Bet);
    assert_eq!(history[1].amount, 2_000);
}

#[tokio::test]
async fn test_forced_loss_keeps_only_bet() {
    let engine = setup_engine(Arc::new(FixedResolver::loss()));
    engine.open_account("alice").await.expect("open");

    let settlement = engine
        .place_wager("alice", "fortune-tiger", 2_000)
        .await
        .expect("wager should settle");

    assert_eq!(settlement.outcome, WagerOutcome::Loss);
    assert_eq!(settlement.payout, 0);
    assert_eq!(engine.balance("alice").await.expect("balance"), 8_000);

    let history = engine.history("alice", None).await.expect("history");
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].kind, TransactionKind::Bet);
}

#[tokio::test]
async fn test_insufficient_funds_rejected_without_side_effect() {
    // Balance 10.00, wager 20.00.
    let engine = WagerEngine::new(
        Arc::new(AccountLedger::new()),
        Arc::new(GameCatalog::demo()),
        Arc::new(FixedResolver::win(2.0)),
        EngineConfig {
            default_initial_balance: 1_000,
            ..EngineConfig::default()
        },
    );
    engine.open_account("alice").await.expect("open");

    let err = engine
        .place_wager("alice", "fortune-tiger", 2_000)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        WagerError::InsufficientFunds {
            available: 1_000,
            required: 2_000,
        }
    ));

    assert_eq!(engine.balance("alice").await.expect("balance"), 1_000);
    assert!(engine.history("alice", None).await.expect("history").is_empty());
}

#[tokio::test]
async fn test_bet_out_of_range_rejected_without_side_effect() {
    let engine = setup_engine(Arc::new(FixedResolver::win(2.0)));
    engine.open_account("alice").await.expect("open");

    // fortune-tiger limits are [100, 10000] cents.
    for amount in [50, 10_001] {
        let err = engine
            .place_wager("alice", "fortune-tiger", amount)
            .await
            .unwrap_err();
        assert!(
            matches!(
                err,
                WagerError::BetOutOfRange {
                    min_bet: 100,
                    max_bet: 10_000,
                    ..
                }
            ),
            "amount {amount} should be out of range"
        );
    }

    assert_eq!(engine.balance("alice").await.expect("balance"), 10_000);
    assert!(engine.history("alice", None).await.expect("history").is_empty());
}

#[tokio::test]
async fn test_invalid_amount_and_unknown_ids_rejected() {
    let engine = setup_engine(Arc::new(FixedResolver::loss()));
    engine.open_account("alice").await.expect("open");

    let err = engine.place_wager("alice", "fortune-tiger", 0).await.unwrap_err();
    assert!(matches!(err, WagerError::InvalidAmount(0)));

    let err = engine
        .place_wager("alice", "no-such-game", 1_000)
        .await
        .unwrap_err();
    assert!(matches!(err, WagerError::GameNotFound(_)));

    let err = engine
        .place_wager("ghost", "fortune-tiger", 1_000)
        .await
        .unwrap_err();
    assert!(matches!(err, WagerError::AccountNotFound(_)));

    assert!(engine.history("alice", None).await.expect("history").is_empty());
}

#[tokio::test]
async fn test_resolver_unavailable_refunds_stake() {
    // Debit of 20.00 from 100.00, then the resolver fails.
    let engine = setup_engine(Arc::new(FixedResolver::unavailable("maintenance")));
    engine.open_account("alice").await.expect("open");

    let err = engine
        .place_wager("alice", "fortune-tiger", 2_000)
        .await
        .unwrap_err();
    assert!(matches!(err, WagerError::ResolverUnavailable(_)));

    // Compensation restores the balance; history shows the bet and a
    // matching refund credit, net zero.
    assert_eq!(engine.balance("alice").await.expect("balance"), 10_000);

    let history = engine.history("alice", None).await.expect("history");
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].kind, TransactionKind::BetRefund);
    assert_eq!(history[0].amount, 2_000);
    assert_eq!(history[1].kind, TransactionKind::Bet);
    assert_eq!(history[1].amount, 2_000);
    assert_eq!(
        history[0].signed_amount() + history[1].signed_amount(),
        0,
        "bet and refund must net to zero"
    );
}

#[tokio::test]
async fn test_concurrent_exact_drain_one_settlement() {
    let ledger = Arc::new(AccountLedger::new());
    let engine = WagerEngine::new(
        ledger.clone(),
        Arc::new(GameCatalog::demo()),
        Arc::new(FixedResolver::loss()),
        EngineConfig {
            default_initial_balance: 5_000,
            ..EngineConfig::default()
        },
    );
    engine.open_account("alice").await.expect("open");

    // Every wager stakes the full balance; only one can win the debit.
    let mut handles = vec![];
    for _ in 0..8 {
        let engine = engine.clone();
        handles.push(tokio::spawn(async move {
            engine.place_wager("alice", "fortune-tiger", 5_000).await
        }));
    }

    let mut settled = 0;
    let mut rejected = 0;
    for handle in handles {
        match handle.await.expect("task should complete") {
            Ok(settlement) => {
                assert_eq!(settlement.outcome, WagerOutcome::Loss);
                settled += 1;
            }
            Err(WagerError::InsufficientFunds { .. }) => rejected += 1,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    assert_eq!(settled, 1, "exactly one wager can drain the balance");
    assert_eq!(rejected, 7);
    assert_eq!(engine.balance("alice").await.expect("balance"), 0);
    assert_eq!(ledger.reconcile("alice").await.expect("reconcile"), 0);
}

#[tokio::test]
async fn test_seeded_resolver_reproduces_settlements() {
    let run = |seed: u64| async move {
        let engine = setup_engine(Arc::new(RandomResolver::seeded(seed)));
        engine.open_account("alice").await.expect("open");
        let mut results = vec![];
        for _ in 0..10 {
            match engine.place_wager("alice", "golden-slots", 100).await {
                Ok(s) => results.push((s.outcome, s.payout)),
                Err(WagerError::InsufficientFunds { .. }) => break,
                Err(e) => panic!("unexpected error: {e}"),
            }
        }
        results
    };

    let a = run(1234).await;
    let b = run(1234).await;
    assert_eq!(a, b, "same seed must replay the same settlements");
}

#[tokio::test]
async fn test_payout_rounds_fractional_cents() {
    let engine = setup_engine(Arc::new(FixedResolver::win(1.5)));
    engine.open_account("alice").await.expect("open");

    // 1.5 x 101 = 151.5, rounds to 152.
    let settlement = engine
        .place_wager("alice", "fortune-tiger", 101)
        .await
        .expect("wager should settle");
    assert_eq!(settlement.payout, 152);
    assert_eq!(engine.balance("alice").await.expect("balance"), 10_051);
}

#[tokio::test]
async fn test_limit_boundaries_accepted() {
    let engine = setup_engine(Arc::new(FixedResolver::loss()));
    engine.open_account("alice").await.expect("open");

    // Both ends of fortune-tiger's [100, 10000] range are playable.
    engine
        .place_wager("alice", "fortune-tiger", 100)
        .await
        .expect("min bet should be accepted");
    engine
        .place_wager("alice", "fortune-tiger", 9_900)
        .await
        .expect("remaining balance covers this stake");
    assert_eq!(engine.balance("alice").await.expect("balance"), 0);
}

#[tokio::test]
async fn test_client_messages_sanitized() {
    let err = WagerError::AccountNotFound("alice-internal-id".to_string());
    assert_eq!(err.client_message(), "Account not found");
    assert!(!err.client_message().contains("alice-internal-id"));

    let err = WagerError::BetOutOfRange {
        amount: 5,
        min_bet: 100,
        max_bet: 10_000,
    };
    assert_eq!(err.client_message(), err.to_string());
}

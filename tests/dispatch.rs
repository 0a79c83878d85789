mod common;

use common::{presenter, tx_hash, RecordingSubmitter, StaticClassifier, CLK, MIR, POOL};
use ethers::types::Address;
use pool_intent_bot::{Amount, DispatchError, PoolPresenter};
use std::sync::atomic::Ordering;
use std::sync::Arc;

#[tokio::test]
async fn swap_message_sends_forward_swap_with_first_amount() {
    let submitter = Arc::new(RecordingSubmitter::default());
    let presenter = presenter(Arc::new(StaticClassifier::top("swap mir")), submitter.clone());

    let response = presenter.process_message("swap 3.5 mir please").await.unwrap();

    assert_eq!(response.response_type, "swap mir");
    assert_eq!(
        response.response,
        format!("Swap transaction hash : {:#x}", tx_hash(1))
    );
    assert!(response.success);

    let sent = submitter.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].function, "swapBtoA");
    assert_eq!(sent[0].to, Address::from_low_u64_be(POOL));
    assert_eq!(sent[0].amounts, vec![Amount::parse("3.5").unwrap()]);
}

#[tokio::test]
async fn only_the_first_number_is_used() {
    let submitter = Arc::new(RecordingSubmitter::default());
    let presenter = presenter(Arc::new(StaticClassifier::top("swap clk")), submitter.clone());

    presenter
        .process_message("swap 4 clk, not 40")
        .await
        .unwrap();

    let sent = submitter.sent();
    assert_eq!(sent[0].function, "swapAtoB");
    assert_eq!(sent[0].amounts, vec![Amount::parse("4").unwrap()]);
}

#[tokio::test]
async fn missing_amount_never_reaches_the_chain() {
    let submitter = Arc::new(RecordingSubmitter::default());
    let presenter = presenter(
        Arc::new(StaticClassifier::top("remove liquidity")),
        submitter.clone(),
    );

    let err = presenter
        .process_message("remove all my liquidity")
        .await
        .unwrap_err();

    assert!(matches!(err, DispatchError::NoAmountFound));
    assert!(err.is_client_error());
    assert!(submitter.sent().is_empty());
}

#[tokio::test]
async fn every_amount_action_requires_a_number() {
    for label in ["swap mir", "swap clk", "provide liquidity", "remove liquidity"] {
        let submitter = Arc::new(RecordingSubmitter::default());
        let presenter = presenter(Arc::new(StaticClassifier::top(label)), submitter.clone());

        let err = presenter.process_message("do it now").await.unwrap_err();

        assert!(matches!(err, DispatchError::NoAmountFound), "{label}");
        assert!(submitter.sent().is_empty(), "{label}");
    }
}

#[tokio::test]
async fn zero_amount_is_rejected() {
    let submitter = Arc::new(RecordingSubmitter::default());
    let presenter = presenter(
        Arc::new(StaticClassifier::top("provide liquidity")),
        submitter.clone(),
    );

    let err = presenter
        .process_message("provide 0 liquidity")
        .await
        .unwrap_err();

    assert!(matches!(err, DispatchError::InvalidAmount(_)));
    assert!(submitter.sent().is_empty());
}

#[tokio::test]
async fn allow_uses_default_amount_and_approves_clk_then_mir() {
    let submitter = Arc::new(RecordingSubmitter::default());
    let presenter = presenter(Arc::new(StaticClassifier::top("allow")), submitter.clone());

    let response = presenter
        .process_message("allow the pool to spend 500 tokens")
        .await
        .unwrap();

    assert_eq!(response.response_type, "allow spender");
    assert_eq!(
        response.response,
        format!(
            "CLK token transaction hash : {:#x} and MIR token transaction hash : {:#x}",
            tx_hash(1),
            tx_hash(2)
        )
    );
    assert_eq!(response.transactions.len(), 2);

    let sent = submitter.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].to, Address::from_low_u64_be(CLK));
    assert_eq!(sent[1].to, Address::from_low_u64_be(MIR));
    // the number in the message is ignored
    assert!(sent
        .iter()
        .all(|r| r.amounts == vec![Amount::parse("2").unwrap()]));
}

#[tokio::test]
async fn partial_allow_reports_first_hash() {
    let submitter = Arc::new(RecordingSubmitter::failing_at(1));
    let presenter = presenter(Arc::new(StaticClassifier::top("allow")), submitter.clone());

    let response = presenter.process_message("allow").await.unwrap();

    assert!(!response.success);
    assert!(response.response.contains(&format!("{:#x}", tx_hash(1))));
    assert!(response.response.contains("insufficient funds for gas"));
    assert_eq!(response.transactions, vec![format!("{:#x}", tx_hash(1))]);
}

#[tokio::test]
async fn reverted_approval_hash_is_still_listed() {
    let submitter = Arc::new(RecordingSubmitter::reverting_at(1));
    let presenter = presenter(Arc::new(StaticClassifier::top("allow")), submitter.clone());

    let response = presenter.process_message("allow").await.unwrap();

    assert!(!response.success);
    assert!(!response.pending);
    assert!(response.response.contains("MIR token approval failed"));
    assert_eq!(
        response.transactions,
        vec![format!("{:#x}", tx_hash(1)), format!("{:#x}", tx_hash(2))]
    );
}

#[tokio::test]
async fn chain_failures_are_embedded_in_the_response() {
    let submitter = Arc::new(RecordingSubmitter::failing_at(0));
    let presenter = presenter(
        Arc::new(StaticClassifier::top("provide liquidity")),
        submitter,
    );

    let response = presenter
        .process_message("provide 10 liquidity")
        .await
        .unwrap();

    assert_eq!(response.response_type, "provide liquidity");
    assert_eq!(
        response.response,
        "unable to add liquidity error: insufficient funds for gas"
    );
    assert!(!response.success);
    assert!(response.transactions.is_empty());
}

#[tokio::test]
async fn unknown_top_label_is_unsupported() {
    let submitter = Arc::new(RecordingSubmitter::default());
    let presenter = presenter(
        Arc::new(StaticClassifier::top("bridge to mainnet")),
        submitter.clone(),
    );

    let err = presenter.process_message("bridge 5 eth").await.unwrap_err();

    assert!(matches!(err, DispatchError::UnsupportedIntent(_)));
    assert!(submitter.sent().is_empty());
}

#[tokio::test]
async fn classifier_failure_is_a_server_error() {
    let submitter = Arc::new(RecordingSubmitter::default());
    let classifier = Arc::new(StaticClassifier::unavailable());
    let presenter = presenter(classifier.clone(), submitter.clone());

    let err = presenter.process_message("swap 1 mir").await.unwrap_err();

    assert!(matches!(err, DispatchError::ClassificationFailed(_)));
    assert!(!err.is_client_error());
    // not retried
    assert_eq!(classifier.calls.load(Ordering::SeqCst), 1);
    assert!(submitter.sent().is_empty());
}

#[tokio::test]
async fn blank_message_skips_classification() {
    let classifier = Arc::new(StaticClassifier::top("allow"));
    let presenter = presenter(classifier.clone(), Arc::new(RecordingSubmitter::default()));

    let err = presenter.process_message("   ").await.unwrap_err();

    assert!(matches!(err, DispatchError::EmptyMessage));
    assert_eq!(classifier.calls.load(Ordering::SeqCst), 0);
}

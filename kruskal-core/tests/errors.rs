use kruskal_core::{KruskalError, KruskalErrorCode};
use rstest::rstest;

#[rstest]
#[case(KruskalError::Exhausted, KruskalErrorCode::Exhausted)]
#[case(
    KruskalError::ConcurrentModification { expected: 3, found: 4 },
    KruskalErrorCode::ConcurrentModification,
)]
fn returns_expected_kruskal_code(#[case] error: KruskalError, #[case] expected: KruskalErrorCode) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), expected.as_str());
    assert_eq!(error.code().to_string(), expected.as_str());
}

#[test]
fn concurrent_modification_message_reports_both_counts() {
    let message = KruskalError::ConcurrentModification {
        expected: 3,
        found: 4,
    }
    .to_string();
    assert!(message.contains("expected modification count 3"));
    assert!(message.contains("found 4"));
}

#[test]
fn exhausted_message_is_stable() {
    assert_eq!(
        KruskalError::Exhausted.to_string(),
        "the Kruskal iterator has no remaining edges"
    );
}

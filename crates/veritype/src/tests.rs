//! End-to-end scenarios across the verifier, matcher, and message pipeline.

use crate::prelude::*;

fn order() -> TypeToken {
    TypeToken::new("api::Order", "shop")
}

fn invoice() -> TypeToken {
    TypeToken::new("api::Invoice", "shop")
}

fn audited() -> TypeToken {
    TypeToken::new("markers::Audited", "policy")
}

fn decorated_registry() -> MarkerRegistry {
    MarkerRegistry::new().with_marker(
        order(),
        MarkerHandle::new(audited())
            .with_property("level", 2)
            .with_property("channel", "ops"),
    )
}

// ============================================================================
// Equality
// ============================================================================

#[test]
fn test_equals_passes_on_identical_identity() {
    let registry = MarkerRegistry::new();
    let mut sink = CollectingSink::new();
    TypeVerifier::new(order(), &registry, &mut sink).equals(&order(), Reason::none());
    assert!(sink.is_empty());
}

#[test]
fn test_equals_failure_names_both_display_names() {
    let registry = MarkerRegistry::new();
    let mut sink = CollectingSink::new();
    TypeVerifier::new(order(), &registry, &mut sink).equals(&invoice(), Reason::none());
    assert_eq!(
        sink.failures(),
        ["Expected type to be api::Invoice, but found api::Order."]
    );
}

#[test]
fn test_equals_failure_with_reason() {
    let registry = MarkerRegistry::new();
    let mut sink = CollectingSink::new();
    TypeVerifier::new(order(), &registry, &mut sink).equals(&invoice(), "it is required");
    assert_eq!(
        sink.failures(),
        ["Expected type to be api::Invoice because it is required, but found api::Order."]
    );
}

#[test]
fn test_equals_failure_reason_not_double_prefixed() {
    let registry = MarkerRegistry::new();
    let mut sink = CollectingSink::new();
    TypeVerifier::new(order(), &registry, &mut sink).equals(&invoice(), "because it is required");
    assert_eq!(
        sink.failures(),
        ["Expected type to be api::Invoice because it is required, but found api::Order."]
    );
}

#[test]
fn test_equals_display_name_collision_falls_back_to_qualified_names() {
    // Same display name loaded from two origins: the message must never show
    // two identical-looking names.
    let subject = TypeToken::new("api::Order", "shop_v1");
    let expected = TypeToken::new("api::Order", "shop_v2");
    let registry = MarkerRegistry::new();
    let mut sink = CollectingSink::new();
    TypeVerifier::new(subject, &registry, &mut sink).equals(&expected, Reason::none());
    assert_eq!(
        sink.failures(),
        ["Expected type to be api::Order [shop_v2], but found api::Order [shop_v1]."]
    );
}

#[test]
fn test_not_equals_passes_on_distinct_identity() {
    let registry = MarkerRegistry::new();
    let mut sink = CollectingSink::new();
    TypeVerifier::new(order(), &registry, &mut sink).not_equals(&invoice(), Reason::none());
    assert!(sink.is_empty());
}

#[test]
fn test_not_equals_failure_names_the_unexpected_operand() {
    let registry = MarkerRegistry::new();
    let mut sink = CollectingSink::new();
    TypeVerifier::new(order(), &registry, &mut sink).not_equals(&order(), "it was retired");
    assert_eq!(
        sink.failures(),
        ["Expected type not to be [api::Order [shop]] because it was retired."]
    );
}

#[test]
fn test_type_parameter_convenience_forms() {
    struct Local;
    let registry = MarkerRegistry::new();
    let mut sink = CollectingSink::new();
    TypeVerifier::new(TypeToken::of::<Local>(), &registry, &mut sink)
        .equals_type::<Local>(Reason::none())
        .not_equals_type::<String>(Reason::none());
    assert!(sink.is_empty());

    TypeVerifier::new(TypeToken::of::<Local>(), &registry, &mut sink)
        .not_equals_type::<Local>(Reason::none());
    assert_eq!(sink.failures().len(), 1);
}

// ============================================================================
// Decoration
// ============================================================================

#[test]
fn test_is_decorated_with_passes_when_marker_present() {
    let registry = decorated_registry();
    let mut sink = CollectingSink::new();
    TypeVerifier::new(order(), &registry, &mut sink).is_decorated_with(&audited(), Reason::none());
    assert!(sink.is_empty());
}

#[test]
fn test_is_decorated_with_failure_names_subject_and_kind() {
    let registry = MarkerRegistry::new();
    let mut sink = CollectingSink::new();
    TypeVerifier::new(order(), &registry, &mut sink).is_decorated_with(&audited(), Reason::none());
    assert_eq!(
        sink.failures(),
        ["Expected type api::Order to be decorated with markers::Audited, but the marker was not found."]
    );
}

#[test]
fn test_empty_constraint_set_behaves_like_presence_check() {
    let registry = MarkerRegistry::new();
    let mut sink = CollectingSink::new();
    TypeVerifier::new(order(), &registry, &mut sink).is_decorated_with_matching(
        &audited(),
        &MarkerConstraintSet::new(),
        Reason::none(),
    );
    assert_eq!(
        sink.failures(),
        ["Expected type api::Order to be decorated with markers::Audited, but the marker was not found."]
    );

    let registry = decorated_registry();
    let mut sink = CollectingSink::new();
    TypeVerifier::new(order(), &registry, &mut sink).is_decorated_with_matching(
        &audited(),
        &MarkerConstraintSet::new(),
        Reason::none(),
    );
    assert!(sink.is_empty());
}

#[test]
fn test_only_unsatisfied_constraints_fail() {
    // level matches, channel does not: exactly one failure, for channel,
    // citing the marker's actual value.
    let registry = decorated_registry();
    let mut sink = CollectingSink::new();
    let constraints = MarkerConstraintSet::new()
        .with("level", 2)
        .with("channel", "dev");
    TypeVerifier::new(order(), &registry, &mut sink).is_decorated_with_matching(
        &audited(),
        &constraints,
        Reason::none(),
    );
    assert_eq!(
        sink.failures(),
        ["Expected type api::Order to be decorated with markers::Audited (channel = \"dev\"), but found (channel = \"ops\")."]
    );
}

#[test]
fn test_all_constraints_evaluated_in_configuration_order() {
    let registry = decorated_registry();
    let mut sink = CollectingSink::new();
    let constraints = MarkerConstraintSet::new()
        .with("channel", "dev")
        .with("level", 9);
    TypeVerifier::new(order(), &registry, &mut sink).is_decorated_with_matching(
        &audited(),
        &constraints,
        Reason::none(),
    );
    assert_eq!(
        sink.failures(),
        [
            "Expected type api::Order to be decorated with markers::Audited (channel = \"dev\"), but found (channel = \"ops\").",
            "Expected type api::Order to be decorated with markers::Audited (level = 9), but found (level = 2).",
        ]
    );
}

#[test]
fn test_absent_marker_skips_constraint_evaluation() {
    let registry = MarkerRegistry::new();
    let mut sink = CollectingSink::new();
    let constraints = MarkerConstraintSet::new().with("level", 2);
    TypeVerifier::new(order(), &registry, &mut sink).is_decorated_with_matching(
        &audited(),
        &constraints,
        Reason::none(),
    );
    // Only the presence failure; no per-constraint reports.
    assert_eq!(sink.failures().len(), 1);
    assert!(sink.failures()[0].ends_with("but the marker was not found."));
}

#[test]
fn test_absent_property_reports_missing() {
    let registry = decorated_registry();
    let mut sink = CollectingSink::new();
    let constraints = MarkerConstraintSet::new().with("owner", "alice");
    TypeVerifier::new(order(), &registry, &mut sink).is_decorated_with_matching(
        &audited(),
        &constraints,
        Reason::none(),
    );
    assert_eq!(
        sink.failures(),
        ["Expected type api::Order to be decorated with markers::Audited (owner = \"alice\"), but found (owner = <missing>)."]
    );
}

#[test]
fn test_constraint_satisfied_by_second_marker() {
    let registry = decorated_registry().with_marker(
        order(),
        MarkerHandle::new(audited()).with_property("level", 5),
    );
    let mut sink = CollectingSink::new();
    let constraints = MarkerConstraintSet::new().with("level", 5);
    TypeVerifier::new(order(), &registry, &mut sink).is_decorated_with_matching(
        &audited(),
        &constraints,
        Reason::none(),
    );
    assert!(sink.is_empty());
}

#[test]
fn test_is_not_decorated_with() {
    let registry = decorated_registry();
    let mut sink = CollectingSink::new();
    TypeVerifier::new(invoice(), &registry, &mut sink)
        .is_not_decorated_with(&audited(), Reason::none());
    assert!(sink.is_empty());

    TypeVerifier::new(order(), &registry, &mut sink)
        .is_not_decorated_with(&audited(), Reason::none());
    assert_eq!(
        sink.failures(),
        ["Expected type api::Order to not be decorated with markers::Audited, but the marker was found."]
    );
}

#[test]
fn test_is_not_decorated_with_matching() {
    let registry = decorated_registry();
    let mut sink = CollectingSink::new();
    let other = MarkerConstraintSet::new().with("level", 9);
    TypeVerifier::new(order(), &registry, &mut sink).is_not_decorated_with_matching(
        &audited(),
        &other,
        Reason::none(),
    );
    assert!(sink.is_empty());

    let matching = MarkerConstraintSet::new().with("level", 2);
    TypeVerifier::new(order(), &registry, &mut sink).is_not_decorated_with_matching(
        &audited(),
        &matching,
        Reason::none(),
    );
    assert_eq!(
        sink.failures(),
        ["Expected type api::Order to not be decorated with markers::Audited (level = 2), but a matching marker was found."]
    );
}

// ============================================================================
// Chaining and idempotence
// ============================================================================

#[test]
fn test_chain_continues_after_failure() {
    let registry = decorated_registry();
    let mut sink = CollectingSink::new();
    TypeVerifier::new(order(), &registry, &mut sink)
        .equals(&invoice(), Reason::none())
        .is_decorated_with(&audited(), Reason::none())
        .not_equals(&invoice(), Reason::none());
    // The failed equality did not stop the later, passing operations.
    assert_eq!(sink.failures().len(), 1);
}

#[test]
fn test_repeated_invocation_is_idempotent() {
    let registry = decorated_registry();
    let mut sink = CollectingSink::new();
    let constraints = MarkerConstraintSet::new().with("level", 9);
    let mut verifier = TypeVerifier::new(order(), &registry, &mut sink);
    verifier
        .equals(&invoice(), "it is required")
        .is_decorated_with_matching(&audited(), &constraints, Reason::none());
    verifier
        .equals(&invoice(), "it is required")
        .is_decorated_with_matching(&audited(), &constraints, Reason::none());
    let failures = sink.failures();
    assert_eq!(failures.len(), 4);
    assert_eq!(failures[0], failures[2]);
    assert_eq!(failures[1], failures[3]);
}

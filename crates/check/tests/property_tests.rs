//! Property-based tests for nebula-check.

use nebula_check::prelude::*;
use proptest::prelude::*;

/// A generated outcome: field index, pass/fail, validator index.
fn outcome() -> impl Strategy<Value = (u8, bool, u8)> {
    (0u8..6, any::<bool>(), 0u8..3)
}

fn build((field, ok, validator): (u8, bool, u8)) -> Validation {
    let field = format!("f{field}");
    let validator = ["required", "min", "max"][usize::from(validator)];
    if ok {
        Validation::pass(field, validator)
    } else {
        let message = format!("bad {validator}");
        Validation::fail(field, message, validator)
    }
}

// ============================================================================
// IDEMPOTENCY: check(x) == check(x)
// ============================================================================

proptest! {
    #[test]
    fn min_len_idempotent(s in ".*") {
        prop_assert_eq!(text::min_len(&s, 3, "s"), text::min_len(&s, 3, "s"));
    }

    #[test]
    fn email_idempotent(s in ".*") {
        prop_assert_eq!(format::email(&s, "s"), format::email(&s, "s"));
    }

    #[test]
    fn between_idempotent(n in any::<i64>()) {
        prop_assert_eq!(numeric::between(n, 0, 100, "n"), numeric::between(n, 0, 100, "n"));
    }
}

// ============================================================================
// LEAF CHECKS AGREE WITH THEIR DEFINITIONS
// ============================================================================

proptest! {
    #[test]
    fn min_len_counts_characters(s in ".{0,12}", min in 0usize..12) {
        let v = text::min_len(&s, min, "s");
        prop_assert_eq!(v.passed(), s.chars().count() >= min);
        prop_assert_eq!(v.validators(), ["min"]);
    }

    #[test]
    fn between_matches_range(n in any::<i32>(), lo in -50i32..0, hi in 0i32..50) {
        let v = numeric::between(n, lo, hi, "n");
        prop_assert_eq!(v.passed(), (lo..=hi).contains(&n));
    }

    #[test]
    fn builder_chain_fails_iff_any_leaf_fails(s in ".{0,30}") {
        let chained = string(&s, "s").min_len(3).max_len(10).build().unwrap();
        let a = text::min_len(&s, 3, "s").passed();
        let b = text::max_len(&s, 10, "s").passed();
        prop_assert_eq!(chained.passed(), a && b);
        prop_assert_eq!(chained.validators(), ["min", "max"]);
    }
}

// ============================================================================
// AGGREGATION LAWS
// ============================================================================

proptest! {
    #[test]
    fn all_joins_every_failure_in_order(items in prop::collection::vec(outcome(), 0..12)) {
        let outcomes: Vec<Validation> = items.into_iter().map(build).collect();
        let expected: Vec<String> = outcomes
            .iter()
            .filter_map(|v| v.error().map(ToString::to_string))
            .collect();

        let report = all(outcomes.clone());
        match report.err() {
            Some(errors) => prop_assert_eq!(errors.to_string(), expected.join("; ")),
            None => prop_assert!(expected.is_empty()),
        }

        let tracked: usize = report.applied().values().map(Vec::len).sum();
        prop_assert_eq!(tracked, outcomes.len());
    }

    #[test]
    fn first_tracks_only_up_to_first_failure(items in prop::collection::vec(outcome(), 0..12)) {
        let outcomes: Vec<Validation> = items.into_iter().map(build).collect();
        let cut = outcomes
            .iter()
            .position(Validation::failed)
            .map_or(outcomes.len(), |i| i + 1);

        let report = first(outcomes.clone());
        let expected = all(outcomes[..cut].to_vec());
        prop_assert_eq!(report.applied(), expected.applied());
        prop_assert!(report.err().is_none_or(|e| e.len() == 1));
    }

    #[test]
    fn splitting_and_merging_preserves_all(
        items in prop::collection::vec(outcome(), 0..12),
        at in 0usize..12,
    ) {
        let outcomes: Vec<Validation> = items.into_iter().map(build).collect();
        let at = at.min(outcomes.len());
        let (left, right) = outcomes.split_at(at);

        let whole = all(outcomes.clone());
        let merged = merge([all(left.to_vec()), all(right.to_vec())]);
        prop_assert_eq!(whole, merged);
    }

    #[test]
    fn nesting_flattens(a in outcome(), b in outcome(), c in outcome()) {
        let nested = all!(all!(build(a), build(b)), build(c));
        let flat = all!(build(a), build(b), build(c));
        prop_assert_eq!(nested, flat);
    }
}

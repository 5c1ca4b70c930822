//! Property-based tests for the any-of / all-of combinators

use proptest::prelude::*;
use sluice::matcher::*;
use sluice::testing::CallLog;

/// Matcher object with a fixed threshold, used to compare object and
/// function calling conventions.
#[derive(Clone, Copy, Debug)]
struct Above(i32);

impl Matcher<i32> for Above {
    fn matches(&self, action: &i32) -> bool {
        *action > self.0
    }
}

const LABELS: [&str; 8] = ["m0", "m1", "m2", "m3", "m4", "m5", "m6", "m7"];

/// Build one probe per outcome; probe `i` answers `outcomes[i]` and is
/// recorded under `LABELS[i]`.
fn probes(log: &CallLog, outcomes: &[bool]) -> Vec<Resolved<'static, i32>> {
    outcomes
        .iter()
        .enumerate()
        .map(|(i, &outcome)| {
            Resolved::from_matcher(log.probe(LABELS[i], move |_: &i32| outcome))
        })
        .collect()
}

proptest! {
    #[test]
    fn any_of_is_logical_or(
        thresholds in prop::collection::vec(-50i32..50, 1..8),
        action in -100i32..100,
    ) {
        let expected = thresholds.iter().fold(false, |acc, t| acc || action > *t);
        let matchers: Vec<Above> = thresholds.iter().copied().map(Above).collect();
        prop_assert_eq!(is_any_of(matchers).matches(&action), expected);
    }

    #[test]
    fn all_of_is_logical_and(
        thresholds in prop::collection::vec(-50i32..50, 1..8),
        action in -100i32..100,
    ) {
        let expected = thresholds.iter().fold(true, |acc, t| acc && action > *t);
        let matchers: Vec<Above> = thresholds.iter().copied().map(Above).collect();
        prop_assert_eq!(is_all_of(matchers).matches(&action), expected);
    }

    #[test]
    fn none_of_is_negated_or(
        thresholds in prop::collection::vec(-50i32..50, 1..8),
        action in -100i32..100,
    ) {
        let matchers: Vec<Above> = thresholds.iter().copied().map(Above).collect();
        prop_assert_eq!(
            is_none_of(matchers.clone()).matches(&action),
            !is_any_of(matchers).matches(&action)
        );
    }

    #[test]
    fn object_and_function_forms_agree(
        thresholds in prop::collection::vec(-50i32..50, 1..8),
        action in -100i32..100,
    ) {
        let objects: Vec<Resolved<'static, i32>> = thresholds
            .iter()
            .map(|&t| Resolved::from_matcher(Above(t)))
            .collect();
        let functions: Vec<Resolved<'static, i32>> = thresholds
            .iter()
            .map(|&t| Resolved::from_fn(move |x: &i32| *x > t))
            .collect();

        let objects = MatcherSet::try_from(objects).unwrap();
        let functions = MatcherSet::try_from(functions).unwrap();

        prop_assert_eq!(objects.any_match(&action), functions.any_match(&action));
        prop_assert_eq!(objects.all_match(&action), functions.all_match(&action));
    }

    #[test]
    fn any_of_stops_after_first_true(outcomes in prop::collection::vec(any::<bool>(), 1..8)) {
        let log = CallLog::new();
        let result = is_any_of(probes(&log, &outcomes)).matches(&0);

        let expected_calls = match outcomes.iter().position(|&o| o) {
            Some(first_true) => first_true + 1,
            None => outcomes.len(),
        };
        prop_assert_eq!(result, outcomes.contains(&true));
        prop_assert_eq!(log.calls(), LABELS[..expected_calls].to_vec());
    }

    #[test]
    fn all_of_stops_after_first_false(outcomes in prop::collection::vec(any::<bool>(), 1..8)) {
        let log = CallLog::new();
        let result = is_all_of(probes(&log, &outcomes)).matches(&0);

        let expected_calls = match outcomes.iter().position(|&o| !o) {
            Some(first_false) => first_false + 1,
            None => outcomes.len(),
        };
        prop_assert_eq!(result, !outcomes.contains(&false));
        prop_assert_eq!(log.calls(), LABELS[..expected_calls].to_vec());
    }

    #[test]
    fn single_matcher_is_identity(threshold in -50i32..50, action in -100i32..100) {
        let m = Above(threshold);
        prop_assert_eq!(is_any_of((m,)).matches(&action), m.matches(&action));
        prop_assert_eq!(is_all_of((m,)).matches(&action), m.matches(&action));
    }

    #[test]
    fn repeated_evaluation_is_stable(
        thresholds in prop::collection::vec(-50i32..50, 1..8),
        action in -100i32..100,
    ) {
        let m = is_any_of(thresholds.into_iter().map(Above).collect::<Vec<_>>());
        let first = m.matches(&action);
        for _ in 0..3 {
            prop_assert_eq!(m.matches(&action), first);
        }
    }
}

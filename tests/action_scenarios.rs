//! End-to-end scenarios for action matchers
//!
//! These tests build matchers the way a dispatch layer would: from action
//! creators exposing a match operation, ad-hoc predicate functions, and lists
//! assembled at runtime.

use sluice::matcher::*;
use sluice::testing::CallLog;
use sluice::{assert_match, assert_no_match, is_all_of, is_any_of, Either};

#[derive(Debug, Clone, PartialEq)]
enum Payload {
    Number(i64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
struct Action {
    kind: &'static str,
    payload: Payload,
}

impl Action {
    fn number(kind: &'static str, n: i64) -> Self {
        Self {
            kind,
            payload: Payload::Number(n),
        }
    }

    fn text(kind: &'static str, s: &str) -> Self {
        Self {
            kind,
            payload: Payload::Text(s.to_string()),
        }
    }
}

impl Tagged for Action {
    fn tag(&self) -> &str {
        self.kind
    }
}

/// An action creator: builds actions of one kind and matches them.
struct Creator {
    kind: &'static str,
}

impl Creator {
    fn create(&self, n: i64) -> Action {
        Action::number(self.kind, n)
    }
}

impl Matcher<Action> for Creator {
    fn matches(&self, action: &Action) -> bool {
        action.kind == self.kind
    }
}

fn positive_payload(action: &Action) -> bool {
    matches!(action.payload, Payload::Number(n) if n > 0)
}

fn is_even(x: &i32) -> bool {
    x % 2 == 0
}

fn is_negative(x: &i32) -> bool {
    *x < 0
}

#[test]
fn even_or_negative_scenario() {
    let log = CallLog::new();
    let any = is_any_of((
        log.probe("is_even", is_even),
        log.probe("is_negative", is_negative),
    ));

    assert!(any.matches(&4));
    assert_eq!(log.count("is_negative"), 0);
    assert!(!any.matches(&3));

    let all = is_all_of((is_even, is_negative));
    assert!(all.matches(&-4));
    assert!(!all.matches(&4));
}

#[test]
fn single_matcher_scenario() {
    let any = is_any_of!(is_even);
    let all = is_all_of!(is_even);
    for x in -10..=10 {
        assert_eq!(any.matches(&x), is_even(&x));
        assert_eq!(all.matches(&x), is_even(&x));
    }
}

#[test]
fn object_and_function_scenario() {
    let m = is_all_of((of_type("X"), |a: &Action| match a.payload {
        Payload::Number(n) => n > 0,
        Payload::Text(_) => false,
    }));

    assert_match!(m, Action::number("X", 5));
    assert_no_match!(m, Action::number("X", -1));
    assert_no_match!(m, Action::number("Y", 5));
}

#[test]
fn action_creators_combine_with_predicates() {
    let added = Creator { kind: "todo/added" };
    let removed = Creator { kind: "todo/removed" };

    let a = added.create(1);
    let negative_add = added.create(-3);
    let r = removed.create(-1);

    let changes = is_any_of((added, removed));
    assert!(changes.matches(&a));
    assert!(changes.matches(&r));
    assert!(!changes.matches(&Action::number("todo/cleared", 0)));

    let positive_add = is_all_of((Creator { kind: "todo/added" }, positive_payload));
    assert!(positive_add.matches(&a));
    assert!(!positive_add.matches(&negative_add));
}

#[test]
fn wrapping_a_function_in_an_object_changes_nothing() {
    struct Wrap<F>(F);

    impl<F: Fn(&Action) -> bool + Send + Sync> Matcher<Action> for Wrap<F> {
        fn matches(&self, action: &Action) -> bool {
            (self.0)(action)
        }
    }

    let is_x = |a: &Action| a.kind == "X";
    let plain = is_all_of((is_x, positive_payload));
    let wrapped = is_all_of((Wrap(is_x), Wrap(positive_payload)));

    let actions = [
        Action::number("X", 1),
        Action::number("X", 0),
        Action::number("Y", 1),
        Action::text("X", "hello"),
    ];
    for action in &actions {
        assert_eq!(plain.matches(action), wrapped.matches(action));
    }
}

#[test]
fn runtime_subscription_list() {
    let subscribed = ["cart/add", "cart/remove", "checkout/start"];

    let mut set = MatcherSet::from_matcher(of_type(subscribed[0]));
    for kind in &subscribed[1..] {
        set.push(Resolved::from_matcher(of_type(*kind)));
    }
    assert_eq!(set.len(), 3);

    let interested = is_any_of(set);
    assert!(interested.matches(&Action::number("cart/remove", 1)));
    assert!(!interested.matches(&Action::number("cart/view", 1)));
}

#[test]
fn empty_runtime_list_is_rejected() {
    let kinds: Vec<&'static str> = Vec::new();
    let resolved: Vec<Resolved<'_, Action>> = kinds
        .into_iter()
        .map(|k| Resolved::from_matcher(of_type(k)))
        .collect();

    let err = MatcherSet::try_from(resolved).unwrap_err();
    assert_eq!(err.to_string(), "a matcher set needs at least one matcher");
}

#[test]
fn narrowing_extracts_payloads() {
    let number = extract(|a: &Action| match &a.payload {
        Payload::Number(n) => Some(n),
        Payload::Text(_) => None,
    });
    let text = extract(|a: &Action| match &a.payload {
        Payload::Text(s) => Some(s.as_str()),
        Payload::Number(_) => None,
    });

    let either = number.or(text);
    assert_eq!(
        either.narrow(&Action::number("X", 7)),
        Some(Either::Left(&7))
    );
    assert_eq!(
        either.narrow(&Action::text("X", "hi")),
        Some(Either::Right("hi"))
    );
}

#[test]
fn narrowing_through_all_of() {
    let kind_x = extract(|a: &Action| if a.kind == "X" { Some(a.kind) } else { None });
    let number = extract(|a: &Action| match &a.payload {
        Payload::Number(n) => Some(n),
        Payload::Text(_) => None,
    });

    let m = is_all_of((kind_x, number));
    let action = Action::number("X", 12);
    assert_eq!(m.narrow(&action), Some(("X", &12)));
    assert_eq!(m.narrow(&Action::number("Y", 12)), None);
    assert_eq!(m.narrow(&Action::text("X", "no")), None);
}

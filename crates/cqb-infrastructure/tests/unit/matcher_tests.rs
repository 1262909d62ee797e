//! Argument matching over candidate pools

use cqb_application::ports::activation::{CandidatePool, ParamSlot};
use cqb_domain::error::Error;
use cqb_infrastructure::di::ArgumentMatcher;

#[derive(Debug, PartialEq)]
struct A(&'static str);

#[derive(Debug, PartialEq)]
struct B(&'static str);

static A_THEN_B: [ParamSlot; 2] = [ParamSlot::of::<A>("a"), ParamSlot::of::<B>("b")];
static ONLY_A: [ParamSlot; 1] = [ParamSlot::of::<A>("a")];

#[test]
fn test_pool_order_does_not_decide_distinct_slots() {
    let pool = CandidatePool::new().with(B("b")).with(A("a"));

    let args = ArgumentMatcher::match_slots("target", &A_THEN_B, &pool).unwrap();

    assert_eq!(*args.get::<A>(0).unwrap(), A("a"));
    assert_eq!(*args.get::<B>(1).unwrap(), B("b"));
}

#[test]
fn test_empty_pool_leaves_slot_unmatched() {
    let err = ArgumentMatcher::match_slots("target", &ONLY_A, &CandidatePool::new()).unwrap_err();

    assert!(matches!(err, Error::ArgumentUnmatched { ref slot, .. } if slot == "a"));
    assert!(err.is_construction_failure());
}

#[test]
fn test_first_compatible_candidate_wins() {
    let pool = CandidatePool::new().with(A("first")).with(A("second"));

    let args = ArgumentMatcher::match_slots("target", &ONLY_A, &pool).unwrap();

    assert_eq!(*args.get::<A>(0).unwrap(), A("first"));
}

#[test]
fn test_leftover_candidates_are_discarded() {
    let pool = CandidatePool::new().with(42_u64).with(A("a")).with("extra");

    let args = ArgumentMatcher::match_slots("target", &ONLY_A, &pool).unwrap();

    assert_eq!(args.len(), 1);
}

#[test]
fn test_zero_slots_match_anything() {
    let args = ArgumentMatcher::match_slots("target", &[], &CandidatePool::new().with(1_u8)).unwrap();
    assert!(args.is_empty());
}

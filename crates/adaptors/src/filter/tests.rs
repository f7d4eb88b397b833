use std::cell::Cell;

use skein_core::{
    CategoryOf, SliceCursor,
    algorithm::{copy, for_each},
    back_inserter,
    category::{Category, RandomAccess},
};

use super::*;

static DIGITS: [i32; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];

fn is_even(x: &&i32) -> bool {
    **x % 2 == 0
}

fn begin_end(values: &[i32]) -> (SliceCursor<'_, i32>, SliceCursor<'_, i32>) {
    (SliceCursor::begin(values), SliceCursor::end(values))
}

#[test]
fn copy_keeps_even_digits() {
    let (first, last) = begin_end(&DIGITS);
    let even = make_filter(is_even);

    let mut out: Vec<i32> = Vec::new();
    copy(even.apply(first, last), &even.apply(last, last), back_inserter(&mut out)).unwrap();

    assert_eq!(out, [0, 2, 4, 6, 8]);
}

#[test]
fn copy_stops_at_raw_end() {
    let (first, last) = begin_end(&DIGITS);
    let odd = make_filter(|x: &&i32| **x % 2 == 1);

    let mut out: Vec<i32> = Vec::new();
    copy(odd.apply(first, last), &last, back_inserter(&mut out)).unwrap();

    assert_eq!(out, [1, 3, 5, 7, 9]);
}

#[test]
fn construction_skips_to_first_match() {
    let values = [1, 3, 5, 6, 7];
    let (first, last) = begin_end(&values);

    let filter = make_filter(is_even).apply(first, last);

    assert_eq!(filter.underlying().position(), 3);
    assert!(!filter.is_exhausted());
}

#[test]
fn no_match_is_exhausted_before_any_advance() {
    let values = [1, 3, 5];
    let (first, last) = begin_end(&values);

    let mut filter = make_filter(is_even).apply(first, last);

    assert!(filter.is_exhausted());
    assert!(filter == last);
    assert_eq!(filter.read(), None);
}

#[test]
fn empty_range_never_calls_predicate() {
    let calls = Cell::new(0);
    let empty: [i32; 0] = [];
    let (first, last) = begin_end(&empty);

    let filter = make_filter(|_: &&i32| {
        calls.set(calls.get() + 1);
        true
    })
    .apply(first, last);

    assert!(filter == last);
    assert_eq!(calls.get(), 0);
}

#[test]
fn advance_restores_invariant_before_returning() {
    let values = [2, 1, 1, 1, 4, 5];
    let (first, last) = begin_end(&values);
    let mut filter = make_filter(is_even).apply(first, last);

    assert_eq!(filter.read(), Some(&2));

    filter.advance();
    assert_eq!(filter.underlying().position(), 4);

    filter.advance();
    assert!(filter == last);
}

#[test]
fn advancing_exhausted_filter_is_a_no_op() {
    let values = [2];
    let (first, last) = begin_end(&values);
    let mut filter = make_filter(is_even).apply(first, last);

    filter.advance();
    filter.advance();

    assert!(filter.is_exhausted());
    assert_eq!(*filter.end(), last);
}

#[test]
fn reads_are_untransformed_and_repeatable() {
    let (first, last) = begin_end(&DIGITS);
    let mut filter = make_filter(|x: &&i32| **x > 6).apply(first, last);

    assert_eq!(filter.read(), Some(&7));
    assert_eq!(filter.read(), Some(&7));
}

#[test]
fn predicate_sees_each_element_once_per_traversal() {
    let calls = Cell::new(0);
    let (first, last) = begin_end(&DIGITS);
    let filter = make_filter(|x: &&i32| {
        calls.set(calls.get() + 1);
        **x % 3 == 0
    });

    let matched: Vec<i32> = filter.range(first, last).copied().collect();

    assert_eq!(matched, [0, 3, 6, 9]);
    assert_eq!(calls.get(), DIGITS.len());
}

#[test]
fn equality_ignores_the_predicate() {
    let (first, last) = begin_end(&DIGITS);
    let even = make_filter(is_even).apply(first, last);
    let small = make_filter(|x: &&i32| **x < 5).apply(first, last);

    let mut other_even = even.clone();
    assert!(even == other_even);

    other_even.advance();
    assert!(even != other_even);
    assert!(other_even == SliceCursor::at(&DIGITS, 2));
    assert!(small == first);
}

#[test]
fn clone_from_replaces_position_and_predicate() {
    let (first, last) = begin_end(&DIGITS);
    let even = make_filter(is_even as fn(&&i32) -> bool);

    let mut target = even.apply(first, last);
    let mut source = even.apply(first, last);
    source.advance();

    target.clone_from(&source);
    assert!(target == SliceCursor::at(&DIGITS, 2));
    assert_eq!(target.read(), Some(&2));
}

#[test]
fn filter_then_for_each() {
    let (first, last) = begin_end(&DIGITS);
    let mut seen = Vec::new();

    for_each(make_filter(is_even).apply(first, last), &last, |x| seen.push(*x)).unwrap();

    assert_eq!(seen, [0, 2, 4, 6, 8]);
}

#[test]
fn unreachable_end_clamps_to_exhausted() {
    let values = [1, 2, 3];
    let short = &values[..2];
    let first = SliceCursor::begin(short);
    let foreign_end = SliceCursor::end(&values[..]);

    // `short` is a prefix, so its cursors never equal the longer slice's end.
    let mut filter = make_filter(|x: &&i32| **x > 5).apply(first, foreign_end);

    assert!(filter.is_exhausted());
    assert_eq!(filter.read(), None);
}

#[test]
fn metadata_passes_through() {
    type Filtered = FilterCursor<SliceCursor<'static, i32>, fn(&&i32) -> bool>;

    assert_eq!(<CategoryOf<Filtered> as Category>::NAME, RandomAccess::NAME);
}

#[test]
fn debug_names_the_predicate_type() {
    let (first, last) = begin_end(&DIGITS);
    let filter = make_filter(is_even as fn(&&i32) -> bool).apply(first, last);

    let rendered = format!("{filter:?}");
    assert!(rendered.starts_with("FilterCursor { current: SliceCursor { index: 0"));
    assert!(rendered.contains("CallableBox(") && rendered.ends_with("-> bool\") }"));
}

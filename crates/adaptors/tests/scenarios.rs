//! End-to-end scenarios combining the adaptors with the traversal drivers.

use approx::assert_relative_eq;
use skein_adaptors::{
    make_filter, make_input_transformer, make_output_transformer, transform_via_input,
    transform_via_output,
};
use skein_core::{
    Advance, CursorExt, ReadCursor, SliceCursor,
    algorithm::{copy, for_each, transform},
    back_inserter,
};

static DIGITS: [i32; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];

fn begin() -> SliceCursor<'static, i32> {
    SliceCursor::begin(&DIGITS)
}

fn end() -> SliceCursor<'static, i32> {
    SliceCursor::end(&DIGITS)
}

fn double(x: &i32) -> f64 {
    f64::from(*x) * 2.0
}

fn is_even(x: &&i32) -> bool {
    **x % 2 == 0
}

fn assert_doubled(out: &[f64]) {
    let expected = [0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 18.0];
    assert_eq!(out.len(), expected.len());
    for (got, want) in out.iter().zip(expected) {
        assert_relative_eq!(*got, want);
    }
}

#[test]
fn doubling_agrees_across_every_formulation() {
    let mut direct: Vec<f64> = Vec::new();
    transform(begin(), &end(), back_inserter(&mut direct), double).unwrap();
    assert_doubled(&direct);

    let mut via_output: Vec<f64> = Vec::new();
    transform_via_output(begin(), &end(), back_inserter(&mut via_output), double).unwrap();
    assert_doubled(&via_output);

    let mut via_input: Vec<f64> = Vec::new();
    transform_via_input(begin(), end(), back_inserter(&mut via_input), double).unwrap();
    assert_doubled(&via_input);

    let converter = make_input_transformer(double);

    let mut manual: Vec<f64> = Vec::new();
    let mut cursor = converter.apply(begin());
    while cursor != end() {
        manual.extend(cursor.read());
        cursor.advance();
    }
    assert_doubled(&manual);

    let mut visited: Vec<f64> = Vec::new();
    for_each(converter.apply(begin()), &converter.apply(end()), |v| {
        visited.push(v);
    })
    .unwrap();
    assert_doubled(&visited);

    let collected: Vec<f64> = converter.apply(begin()).until(end()).collect();
    assert_doubled(&collected);
}

#[test]
fn copying_even_digits() {
    let even = make_filter(is_even);

    let mut to_raw_end: Vec<i32> = Vec::new();
    copy(even.apply(begin(), end()), &end(), back_inserter(&mut to_raw_end)).unwrap();

    let to_filter_end: Vec<i32> = even.range(begin(), end()).copied().collect();

    assert_eq!(to_raw_end, [0, 2, 4, 6, 8]);
    assert_eq!(to_filter_end, [0, 2, 4, 6, 8]);
}

#[test]
fn filter_then_output_transform() {
    let even = make_filter(is_even);
    let doubler = make_output_transformer(|x: &i32| x * 2);

    let mut out: Vec<i32> = Vec::new();
    copy(
        even.apply(begin(), end()),
        &end(),
        doubler.apply(back_inserter(&mut out)),
    )
    .unwrap();

    assert_eq!(out, [0, 4, 8, 12, 16]);
}

#[test]
fn input_transform_over_a_filter() {
    let even = make_filter(is_even);
    let doubler = make_input_transformer(|x: &i32| x * 2);

    let first = doubler.apply(even.apply(begin(), end()));
    let last = doubler.apply(even.apply(end(), end()));

    let mut out: Vec<i32> = Vec::new();
    copy(first, &last, back_inserter(&mut out)).unwrap();

    assert_eq!(out, [0, 4, 8, 12, 16]);
}

#[test]
fn empty_sequence_starts_at_end() {
    let empty: [i32; 0] = [];
    let (first, last) = (SliceCursor::begin(&empty), SliceCursor::end(&empty));

    assert!(make_input_transformer(double).apply(first) == last);
    assert!(make_filter(is_even).apply(first, last) == last);

    let mut out: Vec<f64> = Vec::new();
    transform_via_output(first, &last, back_inserter(&mut out), double).unwrap();
    assert!(out.is_empty());
}

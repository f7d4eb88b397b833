//! Traversal drivers rebuilt from a plain driver plus an adaptor.
//!
//! Each function here has the same contract as the driver it is named after
//! in [`skein_core::algorithm`], and returns the destination cursor positioned
//! after the last value written. None of them loops on its own; the adaptor
//! supplies the behavior the plain driver lacks.

use skein_core::{
    CursorError, OutputCursor, ReadCursor,
    algorithm::{copy, copy_if},
};

use crate::{FilterCursor, InputTransform, OutputTransform};

/// Writes `op(x)` for every `x` in `[first, last)` by copying into an
/// [`OutputTransform`].
///
/// # Errors
///
/// Returns [`CursorError::Exhausted`] if the source or destination runs out
/// before `last` is reached.
///
/// # Example
///
/// ```
/// use skein_adaptors::transform_via_output;
/// use skein_core::{SliceCursor, back_inserter};
///
/// let values = [1, 2, 3];
/// let mut out: Vec<i32> = Vec::new();
/// transform_via_output(
///     SliceCursor::begin(&values),
///     &SliceCursor::end(&values),
///     back_inserter(&mut out),
///     |x: &i32| x * 10,
/// )
/// .unwrap();
///
/// assert_eq!(out, [10, 20, 30]);
/// ```
pub fn transform_via_output<I, S, O, F, U>(
    first: I,
    last: &S,
    out: O,
    op: F,
) -> Result<O, CursorError>
where
    I: ReadCursor + PartialEq<S>,
    O: OutputCursor<U>,
    F: FnMut(I::Item) -> U,
{
    let out = copy(first, last, OutputTransform::new(out, op))?;
    Ok(out.into_underlying())
}

/// Writes `op(x)` for every `x` in `[first, last)` that satisfies `pred`.
///
/// The predicate sees the raw element; only matches reach `op`.
///
/// # Errors
///
/// Returns [`CursorError::Exhausted`] if the source or destination runs out
/// before `last` is reached.
pub fn transform_if_via_output<I, S, O, P, F, U>(
    first: I,
    last: &S,
    out: O,
    pred: P,
    op: F,
) -> Result<O, CursorError>
where
    I: ReadCursor + PartialEq<S>,
    O: OutputCursor<U>,
    P: FnMut(&I::Item) -> bool,
    F: FnMut(I::Item) -> U,
{
    let out = copy_if(first, last, OutputTransform::new(out, op), pred)?;
    Ok(out.into_underlying())
}

/// Writes `op(x)` for every `x` in `[first, last)` by copying between two
/// [`InputTransform`] adaptors.
///
/// # Errors
///
/// Returns [`CursorError::Exhausted`] if the source or destination runs out
/// before `last` is reached.
pub fn transform_via_input<C, O, F, U>(
    first: C,
    last: C,
    out: O,
    op: F,
) -> Result<O, CursorError>
where
    C: ReadCursor,
    O: OutputCursor<U>,
    F: FnMut(C::Item) -> U + Clone,
{
    let last = InputTransform::new(last, op.clone());
    copy(InputTransform::new(first, op), &last, out)
}

/// Copies every `x` in `[first, last)` that satisfies `pred`, by copying from
/// a [`FilterCursor`] up to the raw `last`.
///
/// # Errors
///
/// Returns [`CursorError::Exhausted`] if the destination runs out of room.
pub fn copy_if_via_filter<C, O, P>(
    first: C,
    last: C,
    out: O,
    pred: P,
) -> Result<O, CursorError>
where
    C: ReadCursor,
    O: OutputCursor<C::Item>,
    P: FnMut(&C::Item) -> bool + Clone,
{
    let filter = FilterCursor::new(first, last.clone(), pred);
    copy(filter, &last, out)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use skein_core::{
        SliceCursor, SliceCursorMut,
        algorithm::{copy_if, transform},
        back_inserter,
    };

    use super::*;

    static DIGITS: [i32; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];

    fn double(x: &i32) -> f64 {
        f64::from(*x) * 2.0
    }

    fn is_even(x: &&i32) -> bool {
        **x % 2 == 0
    }

    fn direct_transform() -> Vec<f64> {
        let mut out: Vec<f64> = Vec::new();
        transform(
            SliceCursor::begin(&DIGITS),
            &SliceCursor::end(&DIGITS),
            back_inserter(&mut out),
            double,
        )
        .unwrap();
        out
    }

    fn assert_all_close(got: &[f64], want: &[f64]) {
        assert_eq!(got.len(), want.len());
        for (got, want) in got.iter().zip(want) {
            assert_relative_eq!(*got, *want);
        }
    }

    #[test]
    fn every_formulation_matches_transform() {
        let expected = direct_transform();
        let (first, last) = (SliceCursor::begin(&DIGITS), SliceCursor::end(&DIGITS));

        let mut via_output: Vec<f64> = Vec::new();
        transform_via_output(first, &last, back_inserter(&mut via_output), double).unwrap();

        let mut via_input: Vec<f64> = Vec::new();
        transform_via_input(first, last, back_inserter(&mut via_input), double).unwrap();

        assert_all_close(&via_output, &expected);
        assert_all_close(&via_input, &expected);
    }

    #[test]
    fn transform_if_only_transforms_matches() {
        let mut out: Vec<f64> = Vec::new();
        transform_if_via_output(
            SliceCursor::begin(&DIGITS),
            &SliceCursor::end(&DIGITS),
            back_inserter(&mut out),
            is_even,
            double,
        )
        .unwrap();

        assert_all_close(&out, &[0.0, 4.0, 8.0, 12.0, 16.0]);
    }

    #[test]
    fn copy_if_via_filter_matches_copy_if() {
        let (first, last) = (SliceCursor::begin(&DIGITS), SliceCursor::end(&DIGITS));

        let mut direct: Vec<i32> = Vec::new();
        copy_if(first, &last, back_inserter(&mut direct), is_even).unwrap();

        let mut filtered: Vec<i32> = Vec::new();
        copy_if_via_filter(first, last, back_inserter(&mut filtered), is_even).unwrap();

        assert_eq!(filtered, direct);
        assert_eq!(filtered, [0, 2, 4, 6, 8]);
    }

    #[test]
    fn returned_cursor_is_past_the_last_write() {
        let mut out = [0; 6];
        let cursor = transform_via_output(
            SliceCursor::begin(&DIGITS[..3]),
            &SliceCursor::end(&DIGITS[..3]),
            SliceCursorMut::begin(&mut out),
            |x: &i32| x + 1,
        )
        .unwrap();
        assert_eq!(cursor.position(), 3);

        let cursor = transform_if_via_output(
            SliceCursor::begin(&DIGITS),
            &SliceCursor::end(&DIGITS),
            cursor,
            |x: &&i32| **x > 6,
            |x: &i32| *x,
        )
        .unwrap();
        assert_eq!(cursor.position(), 6);
        assert_eq!(out, [1, 2, 3, 7, 8, 9]);
    }

    #[test]
    fn short_destination_is_reported() {
        let mut out = [0.0; 2];
        let result = transform_via_input(
            SliceCursor::begin(&DIGITS),
            SliceCursor::end(&DIGITS),
            SliceCursorMut::begin(&mut out),
            double,
        );

        assert_eq!(result.unwrap_err(), CursorError::Exhausted);
        assert_all_close(&out, &[0.0, 2.0]);
    }
}

//! Traversal drivers that walk a cursor up to a sentinel.
//!
//! These are the generic algorithms the adaptors are designed to plug into.
//! Each one treats its cursors purely through the capability traits, so an
//! adapted cursor is driven exactly like a raw one.
//!
//! The `last` argument only needs to be comparable with the cursor, not the
//! same type. That lets a filtered or transformed cursor run until a raw end
//! position that was never wrapped.
//!
//! Every driver reads before it writes. If the cursor reaches the end of its
//! sequence without ever comparing equal to `last`, the read fails and the
//! driver returns [`CursorError::Exhausted`].

use crate::{Advance, CursorError, OutputCursor, ReadCursor};

/// Writes every element of `[first, last)` to `out`.
///
/// Returns the output cursor positioned after the last written element.
///
/// # Errors
///
/// Returns an error if a read or a write fails before `last` is reached.
///
/// # Example
///
/// ```
/// use skein_core::{SliceCursor, algorithm::copy, back_inserter};
///
/// let values = [1, 2, 3];
/// let mut out: Vec<&i32> = Vec::new();
///
/// copy(
///     SliceCursor::begin(&values),
///     &SliceCursor::end(&values),
///     back_inserter(&mut out),
/// )
/// .unwrap();
///
/// assert_eq!(out, [&1, &2, &3]);
/// ```
pub fn copy<I, S, O>(mut first: I, last: &S, mut out: O) -> Result<O, CursorError>
where
    I: ReadCursor + PartialEq<S>,
    O: OutputCursor<I::Item>,
{
    while first != *last {
        let item = first.read().ok_or(CursorError::Exhausted)?;
        out.write(item)?;
        out.advance();
        first.advance();
    }
    Ok(out)
}

/// Writes the elements of `[first, last)` that satisfy `pred` to `out`.
///
/// Returns the output cursor positioned after the last written element.
///
/// # Errors
///
/// Returns an error if a read or a write fails before `last` is reached.
pub fn copy_if<I, S, O, P>(
    mut first: I,
    last: &S,
    mut out: O,
    mut pred: P,
) -> Result<O, CursorError>
where
    I: ReadCursor + PartialEq<S>,
    O: OutputCursor<I::Item>,
    P: FnMut(&I::Item) -> bool,
{
    while first != *last {
        let item = first.read().ok_or(CursorError::Exhausted)?;
        if pred(&item) {
            out.write(item)?;
            out.advance();
        }
        first.advance();
    }
    Ok(out)
}

/// Calls `f` with every element of `[first, last)`.
///
/// Returns `f`, so a stateful callable can be inspected afterwards.
///
/// # Errors
///
/// Returns an error if a read fails before `last` is reached.
pub fn for_each<I, S, F>(mut first: I, last: &S, mut f: F) -> Result<F, CursorError>
where
    I: ReadCursor + PartialEq<S>,
    F: FnMut(I::Item),
{
    while first != *last {
        let item = first.read().ok_or(CursorError::Exhausted)?;
        f(item);
        first.advance();
    }
    Ok(f)
}

/// Writes `op(x)` for every element `x` of `[first, last)` to `out`.
///
/// Returns the output cursor positioned after the last written element.
///
/// # Errors
///
/// Returns an error if a read or a write fails before `last` is reached.
pub fn transform<I, S, O, F, U>(
    mut first: I,
    last: &S,
    mut out: O,
    mut op: F,
) -> Result<O, CursorError>
where
    I: ReadCursor + PartialEq<S>,
    O: OutputCursor<U>,
    F: FnMut(I::Item) -> U,
{
    while first != *last {
        let item = first.read().ok_or(CursorError::Exhausted)?;
        out.write(op(item))?;
        out.advance();
        first.advance();
    }
    Ok(out)
}

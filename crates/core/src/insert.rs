use std::iter;

use crate::{Advance, CursorError, CursorTraits, OutputCursor, category::Output};

/// An output cursor that appends every written value to a collection.
///
/// Any collection implementing [`Extend`] can be the target, so the same cursor
/// appends to a `Vec`, a `String`, a `VecDeque`, and so on. Advancing is a
/// no-op because the next position is always the end of the collection.
///
/// # Example
///
/// ```
/// use skein_core::{OutputCursor, back_inserter};
///
/// let mut out: Vec<i32> = Vec::new();
/// let mut cursor = back_inserter(&mut out);
/// cursor.write(1).unwrap();
/// cursor.write(2).unwrap();
///
/// assert_eq!(out, [1, 2]);
/// ```
#[derive(Debug)]
pub struct BackInserter<'a, E> {
    target: &'a mut E,
}

impl<'a, E> BackInserter<'a, E> {
    /// Creates a cursor that appends to `target`.
    pub fn new(target: &'a mut E) -> Self {
        Self { target }
    }

    /// Returns the collection being appended to.
    pub fn target(&self) -> &E {
        self.target
    }
}

/// Creates a [`BackInserter`] that appends to `target`.
pub fn back_inserter<E>(target: &mut E) -> BackInserter<'_, E> {
    BackInserter::new(target)
}

impl<E> Advance for BackInserter<'_, E> {
    fn advance(&mut self) {}
}

impl<E> CursorTraits for BackInserter<'_, E> {
    type Category = Output;
    type Distance = isize;
}

impl<T, E: Extend<T>> OutputCursor<T> for BackInserter<'_, E> {
    fn write(&mut self, value: T) -> Result<(), CursorError> {
        self.target.extend(iter::once(value));
        Ok(())
    }
}

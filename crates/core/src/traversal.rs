use std::iter::FusedIterator;

use crate::{Advance, ReadCursor};

/// An iterator that reads a cursor until it compares equal to a sentinel.
///
/// The sentinel may be any type the cursor can be compared against, which
/// lets an adapted cursor run until a raw, unadapted end position.
///
/// Created by [`CursorExt::until`].
#[derive(Debug, Clone)]
pub struct Traversal<C, S> {
    cursor: C,
    sentinel: S,
}

impl<C, S> Traversal<C, S> {
    /// Creates a traversal over `[cursor, sentinel)`.
    pub fn new(cursor: C, sentinel: S) -> Self {
        Self { cursor, sentinel }
    }

    /// Returns the cursor at the next position to be read.
    pub fn cursor(&self) -> &C {
        &self.cursor
    }

    /// Consumes the traversal and returns the cursor and sentinel.
    pub fn into_parts(self) -> (C, S) {
        (self.cursor, self.sentinel)
    }
}

impl<C, S> Iterator for Traversal<C, S>
where
    C: ReadCursor + PartialEq<S>,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == self.sentinel {
            return None;
        }

        let item = self.cursor.read()?;
        self.cursor.advance();
        Some(item)
    }
}

impl<C, S> FusedIterator for Traversal<C, S> where C: ReadCursor + PartialEq<S> {}

/// Extension methods available on every [`ReadCursor`].
pub trait CursorExt: ReadCursor {
    /// Iterates from this position until the cursor equals `sentinel`.
    ///
    /// # Example
    ///
    /// ```
    /// use skein_core::{CursorExt, SliceCursor};
    ///
    /// let values = [3, 1, 4, 1, 5];
    /// let first = SliceCursor::at(&values, 1);
    /// let last = SliceCursor::at(&values, 4);
    ///
    /// let middle: Vec<_> = first.until(last).copied().collect();
    /// assert_eq!(middle, [1, 4, 1]);
    /// ```
    fn until<S>(self, sentinel: S) -> Traversal<Self, S>
    where
        Self: PartialEq<S>,
    {
        Traversal::new(self, sentinel)
    }
}

impl<C: ReadCursor> CursorExt for C {}

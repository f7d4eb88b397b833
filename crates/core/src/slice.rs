use std::{fmt, ptr};

use crate::{
    Advance, CursorError, CursorTraits, OutputCursor, RandomAccessCursor, ReadCursor,
    category::{Output, RandomAccess},
};

/// A read cursor over a borrowed slice.
///
/// Two cursors are equal when they point into the same slice at the same
/// index. Advancing past the last element leaves the cursor at the end
/// position, where [`ReadCursor::read`] returns `None`.
///
/// # Example
///
/// ```
/// use skein_core::{Advance, ReadCursor, SliceCursor};
///
/// let values = [1, 2, 3];
/// let mut cursor = SliceCursor::begin(&values);
/// let end = SliceCursor::end(&values);
///
/// cursor.advance();
/// assert_eq!(cursor.read(), Some(&2));
///
/// cursor.advance();
/// cursor.advance();
/// assert_eq!(cursor, end);
/// assert_eq!(cursor.read(), None);
/// ```
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    index: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    /// Creates a cursor at the first element of `slice`.
    #[must_use]
    pub const fn begin(slice: &'a [T]) -> Self {
        Self { slice, index: 0 }
    }

    /// Creates a cursor one past the last element of `slice`.
    #[must_use]
    pub const fn end(slice: &'a [T]) -> Self {
        Self {
            slice,
            index: slice.len(),
        }
    }

    /// Creates a cursor at `index`, clamped to the end of `slice`.
    #[must_use]
    pub fn at(slice: &'a [T], index: usize) -> Self {
        Self {
            slice,
            index: index.min(slice.len()),
        }
    }

    /// Returns the index of the current position.
    #[must_use]
    pub fn position(&self) -> usize {
        self.index
    }

    /// Returns `true` if the cursor is at the end of its slice.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.index == self.slice.len()
    }

    fn same_slice(&self, other: &Self) -> bool {
        ptr::eq(self.slice, other.slice)
    }
}

impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> PartialEq for SliceCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_slice(other) && self.index == other.index
    }
}

impl<T> Eq for SliceCursor<'_, T> {}

impl<T> fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursor")
            .field("index", &self.index)
            .field("len", &self.slice.len())
            .finish()
    }
}

impl<T> Advance for SliceCursor<'_, T> {
    fn advance(&mut self) {
        if self.index < self.slice.len() {
            self.index += 1;
        }
    }
}

impl<T> CursorTraits for SliceCursor<'_, T> {
    type Category = RandomAccess;
    type Distance = isize;
}

impl<'a, T> ReadCursor for SliceCursor<'a, T> {
    type Item = &'a T;

    fn read(&mut self) -> Option<&'a T> {
        self.slice.get(self.index)
    }
}

impl<T> RandomAccessCursor for SliceCursor<'_, T> {
    // Slice lengths never exceed `isize::MAX`, so both casts are lossless.
    #[allow(clippy::cast_possible_wrap)]
    fn distance_from(&self, origin: &Self) -> Result<isize, CursorError> {
        if !self.same_slice(origin) {
            return Err(CursorError::ForeignCursor);
        }

        Ok(self.index as isize - origin.index as isize)
    }
}

/// A write cursor that overwrites the elements of a mutable slice in place.
///
/// Writing at the end of the slice fails with [`CursorError::Exhausted`]
/// instead of growing the destination. Use a [`BackInserter`] to append.
///
/// [`BackInserter`]: crate::BackInserter
#[derive(Debug)]
pub struct SliceCursorMut<'a, T> {
    slice: &'a mut [T],
    index: usize,
}

impl<'a, T> SliceCursorMut<'a, T> {
    /// Creates a cursor at the first element of `slice`.
    #[must_use]
    pub fn begin(slice: &'a mut [T]) -> Self {
        Self { slice, index: 0 }
    }

    /// Returns the index of the current position.
    #[must_use]
    pub fn position(&self) -> usize {
        self.index
    }
}

impl<T> Advance for SliceCursorMut<'_, T> {
    fn advance(&mut self) {
        if self.index < self.slice.len() {
            self.index += 1;
        }
    }
}

impl<T> CursorTraits for SliceCursorMut<'_, T> {
    type Category = Output;
    type Distance = isize;
}

impl<T> OutputCursor<T> for SliceCursorMut<'_, T> {
    fn write(&mut self, value: T) -> Result<(), CursorError> {
        let slot = self
            .slice
            .get_mut(self.index)
            .ok_or(CursorError::Exhausted)?;
        *slot = value;
        Ok(())
    }
}

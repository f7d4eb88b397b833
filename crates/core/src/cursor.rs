use crate::{CursorError, category::Category};

/// A position that can move one step forward.
pub trait Advance {
    /// Moves to the next position.
    fn advance(&mut self);
}

/// Metadata that generic code can query about a cursor.
///
/// Adaptors forward both associated types from the cursor they wrap, so an
/// adapted cursor looks the same to generic code as the raw one.
pub trait CursorTraits {
    /// The capabilities of the position, such as [`RandomAccess`].
    ///
    /// [`RandomAccess`]: crate::category::RandomAccess
    type Category: Category;

    /// The type used to express the number of steps between two positions.
    type Distance;
}

/// A copyable, comparable position in a sequence.
///
/// Implemented automatically for every type that can advance, reports its
/// metadata, and supports `Clone` and `PartialEq`.
pub trait Cursor: Advance + CursorTraits + Clone + PartialEq {}

impl<C> Cursor for C where C: Advance + CursorTraits + Clone + PartialEq {}

/// A cursor whose current element can be read.
///
/// Reading takes `&mut self` so that adaptors can call `FnMut` callables.
/// It never moves the cursor.
pub trait ReadCursor: Cursor {
    /// The value produced by a read.
    type Item;

    /// Returns the element at the current position.
    ///
    /// Returns `None` when the cursor is positioned at the end of its
    /// sequence.
    fn read(&mut self) -> Option<Self::Item>;
}

/// A cursor that can measure how far it is from another position.
pub trait RandomAccessCursor: Cursor {
    /// Returns the number of steps from `origin` to `self`.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::ForeignCursor`] if the two cursors do not
    /// belong to the same sequence.
    fn distance_from(&self, origin: &Self) -> Result<Self::Distance, CursorError>;
}

/// A cursor that accepts values of type `T`.
///
/// Writing and advancing are separate steps: a write never moves the cursor.
pub trait OutputCursor<T>: Advance + CursorTraits {
    /// Stores `value` at the current position.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::Exhausted`] if the destination has no room at
    /// the current position.
    fn write(&mut self, value: T) -> Result<(), CursorError>;
}

/// Type alias for the category of a cursor.
pub type CategoryOf<C> = <C as CursorTraits>::Category;

/// Type alias for the distance type of a cursor.
pub type DistanceOf<C> = <C as CursorTraits>::Distance;

/// Type alias for the item produced by reading a cursor.
pub type ItemOf<C> = <C as ReadCursor>::Item;

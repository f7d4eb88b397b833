use crate::{CursorError, OutputCursor};

/// The assignable position an output cursor is currently at.
///
/// A `Slot` is what dereferencing an output cursor hands out: it borrows the
/// cursor itself, so a value set through the slot goes through the cursor's
/// own [`OutputCursor::write`]. For an adaptor, that means through the
/// adaptor's callable.
#[derive(Debug)]
pub struct Slot<'a, O: ?Sized> {
    cursor: &'a mut O,
}

impl<'a, O: ?Sized> Slot<'a, O> {
    /// Creates a slot at the current position of `cursor`.
    pub fn new(cursor: &'a mut O) -> Self {
        Self { cursor }
    }

    /// Writes `value` at this position.
    ///
    /// # Errors
    ///
    /// Returns the cursor's error if it cannot accept a value here.
    pub fn set<T>(self, value: T) -> Result<(), CursorError>
    where
        O: OutputCursor<T>,
    {
        self.cursor.write(value)
    }
}

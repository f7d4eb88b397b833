use thiserror::Error;

/// An error returned when a cursor is used outside its sequence.
///
/// This enum is marked `#[non_exhaustive]` and may include additional variants
/// in future releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CursorError {
    /// The cursor is positioned at the end of its sequence.
    ///
    /// Returned when reading from or writing to a position past the last
    /// element, including a traversal whose sentinel is never reached.
    #[error("cursor is positioned at the end of its sequence")]
    Exhausted,

    /// The cursors being measured belong to different sequences.
    #[error("cursors belong to different sequences")]
    ForeignCursor,
}

/// A result type alias to use with [`CursorError`].
pub type CursorResult<T, E = CursorError> = Result<T, E>;

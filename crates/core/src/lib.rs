//! Core traits and types for the Skein cursor adaptors.
//!
//! This crate defines the cursor model that the adaptors and the traversal
//! drivers build on:
//!
//! - [`Advance`], [`CursorTraits`], [`Cursor`], [`ReadCursor`],
//!   [`RandomAccessCursor`], [`OutputCursor`] — the capability traits a
//!   position in a sequence can offer
//! - [`category`] — marker types describing what a cursor can do
//! - [`SliceCursor`], [`SliceCursorMut`], [`BackInserter`] — raw cursors over
//!   slices and growable collections
//! - [`Slot`] — the assignable position an output cursor hands out
//! - [`algorithm`] — `copy`, `copy_if`, `for_each`, and `transform` over a
//!   cursor and a sentinel
//! - [`Traversal`] — an [`Iterator`] over a cursor until a sentinel

pub mod algorithm;
pub mod category;
mod cursor;
mod error;
mod insert;
mod slice;
mod slot;
mod traversal;

pub use cursor::{
    Advance, CategoryOf, Cursor, CursorTraits, DistanceOf, ItemOf, OutputCursor,
    RandomAccessCursor, ReadCursor,
};
pub use error::{CursorError, CursorResult};
pub use insert::{BackInserter, back_inserter};
pub use slice::{SliceCursor, SliceCursorMut};
pub use slot::Slot;
pub use traversal::{CursorExt, Traversal};

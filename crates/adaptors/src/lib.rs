//! Cursor adaptors that mix a function or predicate into an existing cursor.
//!
//! Each adaptor wraps a cursor from [`skein_core`] and changes exactly one
//! thing about it, so that the traversal drivers in
//! [`skein_core::algorithm`] work on it unchanged:
//!
//! - [`OutputTransform`] — values written through it pass through a function
//! - [`InputTransform`] — values read through it pass through a function
//! - [`FilterCursor`] — stops only at elements satisfying a predicate
//! - [`CallableBox`] — the owning wrapper every adaptor stores its callable in
//!
//! Adaptors are built by factories that close over the callable once and can
//! be applied to any number of cursors: [`make_output_transformer`],
//! [`make_input_transformer`], and [`make_filter`].
//!
//! Every adaptor compares equal to a raw cursor of the type it wraps, so a
//! traversal can start at an adaptor and stop at an unwrapped end position.
//!
//! # Features
//!
//! - `tracing`: emits trace events when a factory builds an adaptor and when
//!   a filter skips ahead.

mod callable_box;
mod compose;
mod filter;
mod input_transform;
mod output_transform;

pub use callable_box::CallableBox;
pub use compose::{
    copy_if_via_filter, transform_if_via_output, transform_via_input, transform_via_output,
};
pub use filter::{Filter, FilterCursor, make_filter};
pub use input_transform::{InputTransform, InputTransformer, make_input_transformer};
pub use output_transform::{OutputTransform, OutputTransformer, make_output_transformer};

//! A read cursor that only stops at elements satisfying a predicate.
//!
//! # Skip-ahead
//!
//! A [`FilterCursor`] holds its current position, the end of its range, and
//! the predicate. Whenever the current position is not the end, the element
//! there satisfies the predicate. The cursor establishes this when it is
//! created and restores it on every advance, before control returns to the
//! caller. It never defers the search to the next read, because comparing
//! against the end position has to be correct without a read.
//!
//! A filter is therefore always in one of two states: at a matching element,
//! or exhausted (`current == end`). Advancing an exhausted filter does
//! nothing.
//!
//! # Cost
//!
//! A single advance costs O(k) predicate calls for k consecutive non-matching
//! elements. A full traversal of n elements costs O(n) in total.

#[cfg(test)]
mod tests;

use std::fmt;

use skein_core::{Advance, CursorTraits, ReadCursor, Traversal};

use crate::CallableBox;

/// A read cursor that skips elements failing a predicate.
///
/// Reads return the element at the current position unchanged.
///
/// Comparison looks only at the current position. A `FilterCursor` compares
/// equal to another one at the same position regardless of predicate, and to
/// a raw cursor of the wrapped type at the same position. That second form is
/// what lets a traversal stop at an end position that was never wrapped.
///
/// Created by [`Filter::apply`].
pub struct FilterCursor<C, P> {
    current: C,
    end: C,
    predicate: CallableBox<P>,
}

impl<C, P> FilterCursor<C, P>
where
    C: ReadCursor,
    P: FnMut(&C::Item) -> bool,
{
    /// Creates a filter over `[first, last)` positioned at the first match.
    ///
    /// If no element matches, the filter starts exhausted. An empty range
    /// never calls the predicate.
    pub fn new(first: C, last: C, predicate: P) -> Self {
        let mut filter = Self {
            current: first,
            end: last,
            predicate: CallableBox::new(predicate),
        };
        filter.skip_unmatched();
        filter
    }

    /// Moves `current` forward until it satisfies the predicate or reaches `end`.
    fn skip_unmatched(&mut self) {
        #[cfg(feature = "tracing")]
        let mut skipped = 0_usize;

        while self.current != self.end {
            let Some(item) = self.current.read() else {
                // The wrapped sequence ended before `end` was reached.
                self.current = self.end.clone();
                break;
            };
            if (self.predicate.get())(&item) {
                break;
            }
            self.current.advance();

            #[cfg(feature = "tracing")]
            {
                skipped += 1;
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(skipped, exhausted = self.is_exhausted(), "filter skipped ahead");
    }
}

impl<C: PartialEq, P> FilterCursor<C, P> {
    /// Returns `true` if no matching element remains.
    pub fn is_exhausted(&self) -> bool {
        self.current == self.end
    }
}

impl<C, P> FilterCursor<C, P> {
    /// Returns the wrapped cursor at the current position.
    pub fn underlying(&self) -> &C {
        &self.current
    }

    /// Returns the end of the filtered range.
    pub fn end(&self) -> &C {
        &self.end
    }

    /// Consumes the filter and returns the wrapped cursor at the current position.
    pub fn into_underlying(self) -> C {
        self.current
    }
}

impl<C: Clone, P: Clone> Clone for FilterCursor<C, P> {
    fn clone(&self) -> Self {
        Self {
            current: self.current.clone(),
            end: self.end.clone(),
            predicate: self.predicate.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.current.clone_from(&source.current);
        self.end.clone_from(&source.end);
        self.predicate.clone_from(&source.predicate);
    }
}

impl<C: fmt::Debug, P> fmt::Debug for FilterCursor<C, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterCursor")
            .field("current", &self.current)
            .field("end", &self.end)
            .field("predicate", &self.predicate)
            .finish()
    }
}

impl<C: PartialEq, P> PartialEq for FilterCursor<C, P> {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

/// Compares against a raw cursor, such as an unwrapped end position.
impl<C: PartialEq, P> PartialEq<C> for FilterCursor<C, P> {
    fn eq(&self, other: &C) -> bool {
        self.current == *other
    }
}

impl<C, P> Advance for FilterCursor<C, P>
where
    C: ReadCursor,
    P: FnMut(&C::Item) -> bool,
{
    /// Moves to the next matching element, or to the end.
    fn advance(&mut self) {
        if self.is_exhausted() {
            return;
        }
        self.current.advance();
        self.skip_unmatched();
    }
}

impl<C: CursorTraits, P> CursorTraits for FilterCursor<C, P> {
    type Category = C::Category;
    type Distance = C::Distance;
}

impl<C, P> ReadCursor for FilterCursor<C, P>
where
    C: ReadCursor,
    P: FnMut(&C::Item) -> bool + Clone,
{
    type Item = C::Item;

    fn read(&mut self) -> Option<C::Item> {
        if self.is_exhausted() {
            return None;
        }
        self.current.read()
    }
}

/// A factory that mixes a predicate into read cursors.
///
/// Each filter it creates holds its own copy of the predicate.
///
/// Created by [`make_filter`].
#[derive(Clone)]
pub struct Filter<P> {
    predicate: P,
}

impl<P: Clone> Filter<P> {
    /// Creates a [`FilterCursor`] over `[first, last)` using a copy of the predicate.
    pub fn apply<C>(&self, first: C, last: C) -> FilterCursor<C, P>
    where
        C: ReadCursor,
        P: FnMut(&C::Item) -> bool,
    {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            predicate = crate::callable_box::short_type_name::<P>(),
            "applying filter"
        );

        FilterCursor::new(first, last, self.predicate.clone())
    }

    /// Returns an iterator over the matching elements of `[first, last)`.
    ///
    /// The iterator stops at the raw `last` position.
    pub fn range<C>(&self, first: C, last: C) -> Traversal<FilterCursor<C, P>, C>
    where
        C: ReadCursor,
        P: FnMut(&C::Item) -> bool,
    {
        let filter = self.apply(first, last.clone());
        Traversal::new(filter, last)
    }
}

impl<P> fmt::Debug for Filter<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Filter")
            .field(&crate::callable_box::short_type_name::<P>())
            .finish()
    }
}

/// Creates a factory that mixes `predicate` into read cursors.
///
/// # Example
///
/// ```
/// use skein_adaptors::make_filter;
/// use skein_core::{SliceCursor, algorithm::copy, back_inserter};
///
/// let values = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
/// let first = SliceCursor::begin(&values);
/// let last = SliceCursor::end(&values);
///
/// let even = make_filter(|x: &&i32| **x % 2 == 0);
/// let mut out: Vec<i32> = Vec::new();
/// copy(even.apply(first, last), &last, back_inserter(&mut out)).unwrap();
///
/// assert_eq!(out, [0, 2, 4, 6, 8]);
/// ```
pub fn make_filter<P>(predicate: P) -> Filter<P> {
    Filter { predicate }
}

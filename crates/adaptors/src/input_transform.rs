use std::fmt;

use skein_core::{Advance, CursorError, CursorTraits, RandomAccessCursor, ReadCursor, Traversal};

use crate::CallableBox;

/// A read cursor that applies a function to every element read through it.
///
/// Reading returns `f(x)` where `x` is the element at the wrapped cursor's
/// position. Nothing is cached: reading the same position twice calls the
/// function twice.
///
/// The adaptor is read-only. It does not implement
/// [`OutputCursor`](skein_core::OutputCursor), so a value can never be
/// written back through the function. To write raw values at the same
/// position, reach the wrapped cursor explicitly with
/// [`underlying_mut`](Self::underlying_mut) or
/// [`into_underlying`](Self::into_underlying).
///
/// Comparison looks only at positions. An `InputTransform` compares equal to
/// another one at the same position regardless of its function, and to a raw
/// cursor of the wrapped type at the same position.
///
/// Created by [`InputTransformer::apply`].
pub struct InputTransform<C, F> {
    cursor: C,
    function: CallableBox<F>,
}

impl<C, F> InputTransform<C, F> {
    /// Wraps `cursor` so that elements read through it pass through `function`.
    pub fn new(cursor: C, function: F) -> Self {
        Self {
            cursor,
            function: CallableBox::new(function),
        }
    }

    /// Returns the wrapped cursor.
    pub fn underlying(&self) -> &C {
        &self.cursor
    }

    /// Returns the wrapped cursor mutably.
    ///
    /// Anything done through this reference bypasses the function.
    pub fn underlying_mut(&mut self) -> &mut C {
        &mut self.cursor
    }

    /// Consumes the adaptor and returns the wrapped cursor.
    pub fn into_underlying(self) -> C {
        self.cursor
    }
}

impl<C: Clone, F: Clone> Clone for InputTransform<C, F> {
    fn clone(&self) -> Self {
        Self {
            cursor: self.cursor.clone(),
            function: self.function.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.cursor.clone_from(&source.cursor);
        self.function.clone_from(&source.function);
    }
}

impl<C: fmt::Debug, F> fmt::Debug for InputTransform<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputTransform")
            .field("cursor", &self.cursor)
            .field("function", &self.function)
            .finish()
    }
}

impl<C: PartialEq, F> PartialEq for InputTransform<C, F> {
    fn eq(&self, other: &Self) -> bool {
        self.cursor == other.cursor
    }
}

/// Compares against a raw cursor, such as an unwrapped end position.
impl<C: PartialEq, F> PartialEq<C> for InputTransform<C, F> {
    fn eq(&self, other: &C) -> bool {
        self.cursor == *other
    }
}

impl<C: Advance, F> Advance for InputTransform<C, F> {
    fn advance(&mut self) {
        self.cursor.advance();
    }
}

impl<C: CursorTraits, F> CursorTraits for InputTransform<C, F> {
    type Category = C::Category;
    type Distance = C::Distance;
}

impl<C, F, U> ReadCursor for InputTransform<C, F>
where
    C: ReadCursor,
    F: FnMut(C::Item) -> U + Clone,
{
    type Item = U;

    fn read(&mut self) -> Option<U> {
        let item = self.cursor.read()?;
        Some((self.function.get())(item))
    }
}

impl<C, F> RandomAccessCursor for InputTransform<C, F>
where
    C: RandomAccessCursor,
    F: Clone,
{
    fn distance_from(&self, origin: &Self) -> Result<Self::Distance, CursorError> {
        self.cursor.distance_from(&origin.cursor)
    }
}

/// A factory that mixes a function into read cursors.
///
/// Each adaptor it creates holds its own copy of the function.
///
/// Created by [`make_input_transformer`].
#[derive(Clone)]
pub struct InputTransformer<F> {
    function: F,
}

impl<F: Clone> InputTransformer<F> {
    /// Wraps `cursor` in an [`InputTransform`] using a copy of the function.
    pub fn apply<C>(&self, cursor: C) -> InputTransform<C, F> {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            function = crate::callable_box::short_type_name::<F>(),
            "applying input transformer"
        );

        InputTransform::new(cursor, self.function.clone())
    }

    /// Returns an iterator over the transformed elements of `[first, last)`.
    ///
    /// # Example
    ///
    /// ```
    /// use skein_adaptors::make_input_transformer;
    /// use skein_core::SliceCursor;
    ///
    /// let values = [1, 2, 3];
    /// let squares = make_input_transformer(|x: &i32| x * x);
    ///
    /// let out: Vec<i32> = squares
    ///     .range(SliceCursor::begin(&values), SliceCursor::end(&values))
    ///     .collect();
    ///
    /// assert_eq!(out, [1, 4, 9]);
    /// ```
    pub fn range<C>(
        &self,
        first: C,
        last: C,
    ) -> Traversal<InputTransform<C, F>, InputTransform<C, F>> {
        Traversal::new(self.apply(first), self.apply(last))
    }
}

impl<F> fmt::Debug for InputTransformer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("InputTransformer")
            .field(&crate::callable_box::short_type_name::<F>())
            .finish()
    }
}

/// Creates a factory that mixes `function` into read cursors.
pub fn make_input_transformer<F>(function: F) -> InputTransformer<F> {
    InputTransformer { function }
}

use std::fmt;

use skein_core::{Advance, CursorError, CursorTraits, OutputCursor, Slot};

use crate::CallableBox;

/// An output cursor that applies a function to every value written through it.
///
/// Writing `v` stores `f(v)` at the wrapped cursor's current position. Writing
/// never advances; callers advance separately, as with any output cursor.
/// Each write calls the function again, nothing is cached.
///
/// Created by [`OutputTransformer::apply`].
pub struct OutputTransform<O, F> {
    cursor: O,
    function: CallableBox<F>,
}

impl<O, F> OutputTransform<O, F> {
    /// Wraps `cursor` so that values written through it pass through `function`.
    pub fn new(cursor: O, function: F) -> Self {
        Self {
            cursor,
            function: CallableBox::new(function),
        }
    }

    /// Returns the assignable position this cursor is at.
    ///
    /// The slot borrows the adaptor itself, so a value set through it is
    /// transformed before it reaches the wrapped cursor.
    pub fn slot(&mut self) -> Slot<'_, Self> {
        Slot::new(self)
    }

    /// Returns the wrapped cursor.
    pub fn underlying(&self) -> &O {
        &self.cursor
    }

    /// Consumes the adaptor and returns the wrapped cursor.
    ///
    /// Useful after a traversal driver has returned the adaptor, to continue
    /// writing to the same destination without the function.
    pub fn into_underlying(self) -> O {
        self.cursor
    }
}

impl<O: Clone, F: Clone> Clone for OutputTransform<O, F> {
    fn clone(&self) -> Self {
        Self {
            cursor: self.cursor.clone(),
            function: self.function.clone(),
        }
    }
}

impl<O: fmt::Debug, F> fmt::Debug for OutputTransform<O, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputTransform")
            .field("cursor", &self.cursor)
            .field("function", &self.function)
            .finish()
    }
}

impl<O: Advance, F> Advance for OutputTransform<O, F> {
    fn advance(&mut self) {
        self.cursor.advance();
    }
}

impl<O: CursorTraits, F> CursorTraits for OutputTransform<O, F> {
    type Category = O::Category;
    type Distance = O::Distance;
}

impl<O, F, T, U> OutputCursor<T> for OutputTransform<O, F>
where
    O: OutputCursor<U>,
    F: FnMut(T) -> U,
{
    /// Writes `f(value)` to the wrapped cursor.
    fn write(&mut self, value: T) -> Result<(), CursorError> {
        let transformed = (self.function.get())(value);
        self.cursor.write(transformed)
    }
}

/// A factory that mixes a function into output cursors.
///
/// Each call to [`apply`](Self::apply) hands the new adaptor its own copy of
/// the function.
///
/// Created by [`make_output_transformer`].
#[derive(Clone)]
pub struct OutputTransformer<F> {
    function: F,
}

impl<F: Clone> OutputTransformer<F> {
    /// Wraps `cursor` in an [`OutputTransform`] using a copy of the function.
    pub fn apply<O>(&self, cursor: O) -> OutputTransform<O, F> {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            function = crate::callable_box::short_type_name::<F>(),
            "applying output transformer"
        );

        OutputTransform::new(cursor, self.function.clone())
    }
}

impl<F> fmt::Debug for OutputTransformer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OutputTransformer")
            .field(&crate::callable_box::short_type_name::<F>())
            .finish()
    }
}

/// Creates a factory that mixes `function` into output cursors.
///
/// # Example
///
/// ```
/// use skein_adaptors::make_output_transformer;
/// use skein_core::{SliceCursor, algorithm::copy, back_inserter};
///
/// let values = [1, 2, 3];
/// let mut out: Vec<String> = Vec::new();
///
/// let stringify = make_output_transformer(|x: &i32| format!("<{x}>"));
/// copy(
///     SliceCursor::begin(&values),
///     &SliceCursor::end(&values),
///     stringify.apply(back_inserter(&mut out)),
/// )
/// .unwrap();
///
/// assert_eq!(out, ["<1>", "<2>", "<3>"]);
/// ```
pub fn make_output_transformer<F>(function: F) -> OutputTransformer<F> {
    OutputTransformer { function }
}

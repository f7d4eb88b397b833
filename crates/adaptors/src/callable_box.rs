use std::{any::type_name, fmt};

/// An owning wrapper that gives a callable its own assignment semantics.
///
/// Every adaptor stores its function or predicate in a `CallableBox`. The box
/// owns exactly one callable and replaces it by dropping the old instance in
/// place and moving the new one in. It never relies on the callable's own
/// [`Clone::clone_from`], so a closure capturing references is handled the
/// same way as a plain function pointer.
///
/// The box is also what lets adaptors implement [`Debug`] even though
/// closures do not: it prints the callable's type name instead of its value.
///
/// # Example
///
/// ```
/// use skein_adaptors::CallableBox;
///
/// let offset = 10;
/// let mut boxed = CallableBox::new(|x: i32| x + offset);
/// assert_eq!((boxed.get())(1), 11);
/// ```
pub struct CallableBox<F> {
    callable: F,
}

impl<F> CallableBox<F> {
    /// Takes ownership of `callable`.
    pub const fn new(callable: F) -> Self {
        Self { callable }
    }

    /// Returns the stored callable.
    ///
    /// The reference is valid until the next assignment or until the box is
    /// dropped.
    pub fn get(&mut self) -> &mut F {
        &mut self.callable
    }

    /// Returns a shared reference to the stored callable.
    pub fn get_ref(&self) -> &F {
        &self.callable
    }

    /// Replaces the stored callable.
    ///
    /// The previous instance is dropped before `callable` takes its place.
    pub fn assign(&mut self, callable: F) {
        self.callable = callable;
    }

    /// Consumes the box and returns the callable.
    pub fn into_inner(self) -> F {
        self.callable
    }
}

impl<F: Clone> Clone for CallableBox<F> {
    fn clone(&self) -> Self {
        Self::new(self.callable.clone())
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign(source.callable.clone());
    }
}

impl<F> From<F> for CallableBox<F> {
    fn from(callable: F) -> Self {
        Self::new(callable)
    }
}

impl<F> fmt::Debug for CallableBox<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CallableBox")
            .field(&short_type_name::<F>())
            .finish()
    }
}

/// Returns the last path segment of a type name, e.g. `{{closure}}`.
pub(crate) fn short_type_name<T>() -> &'static str {
    let full_type_name = type_name::<T>();
    full_type_name
        .rsplit("::")
        .next()
        .unwrap_or(full_type_name)
}

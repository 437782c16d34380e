//! The present-or-empty container and its combinators.
//!
//! Every combinator consumes the container and either runs its callable once
//! (on the variant the callable is for) or not at all. Use [`Optional::as_ref`]
//! to run a chain against a borrowed container that must stay usable.

use core::hash::{Hash, Hasher};

use crate::error::{Error, Result};

/// Either exactly one value or nothing.
///
/// `Empty` holds no payload, so all `Empty` values compare equal no matter
/// which call produced them, and none of them equals a `Present`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Optional<T> {
    Empty,
    Present(T),
}

/// Wrap a possibly-missing value: `Some` becomes `Present`, `None` becomes `Empty`.
#[inline]
pub fn option_of<T>(value: Option<T>) -> Optional<T> {
    match value {
        Some(value) => Optional::Present(value),
        None => Optional::Empty,
    }
}

/// The absent container for any `T`.
#[inline]
pub const fn empty<T>() -> Optional<T> {
    Optional::Empty
}

impl<T> Optional<T> {
    #[inline]
    pub const fn present(value: T) -> Self { Self::Present(value) }

    #[inline]
    pub const fn empty() -> Self { Self::Empty }

    #[inline]
    pub const fn is_present(&self) -> bool { matches!(self, Self::Present(_)) }

    #[inline]
    pub const fn is_empty(&self) -> bool { !self.is_present() }

    /// Borrow the wrapped value without consuming the container.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Empty => Optional::Empty,
        }
    }

    #[inline]
    pub fn as_mut(&mut self) -> Optional<&mut T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Empty => Optional::Empty,
        }
    }

    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Empty => None,
        }
    }

    /// Extract the value, failing with [`Error::NoSuchElement`] when empty.
    ///
    /// This is the one extraction that treats absence as an error. Prefer
    /// [`or_else`](Self::or_else), [`or_else_get`](Self::or_else_get) or
    /// [`or_else_throw`](Self::or_else_throw) when absence is expected.
    pub fn get(self) -> Result<T> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Empty => {
                tracing::debug!(value_type = core::any::type_name::<T>(), "get() on empty optional");
                Err(Error::NoSuchElement)
            }
        }
    }

    /// Borrowing form of [`get`](Self::get).
    #[inline]
    pub fn get_ref(&self) -> Result<&T> { self.as_ref().get() }

    /// The wrapped value, or `alternative` when empty.
    #[inline]
    pub fn or_else(self, alternative: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Empty => alternative,
        }
    }

    /// The wrapped value, or the result of `supplier` when empty.
    /// `supplier` is never called on a present container.
    #[inline]
    pub fn or_else_get<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Empty => supplier(),
        }
    }

    /// The wrapped value, or `Err` with the error built by `supplier` when
    /// empty. The error is only constructed once absence is confirmed.
    pub fn or_else_throw<E, F>(self, supplier: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Present(value) => Ok(value),
            Self::Empty => {
                let err = supplier();
                tracing::debug!(error_type = core::any::type_name::<E>(), "or_else_throw() on empty optional");
                Err(err)
            }
        }
    }

    /// Apply `f` to the wrapped value. Empty short-circuits without calling `f`.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Optional::Present(f(value)),
            Self::Empty => Optional::Empty,
        }
    }

    /// Like [`map`](Self::map) for transforms that may produce nothing; the
    /// result goes through [`option_of`], so `None` yields `Empty`.
    #[inline]
    pub fn map_nullable<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        self.flat_map(|value| option_of(f(value)))
    }

    /// Monadic bind: return what `f` returns, without re-wrapping.
    #[inline]
    pub fn flat_map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Self::Present(value) => f(value),
            Self::Empty => Optional::Empty,
        }
    }

    /// Keep the container when `predicate` holds, otherwise become `Empty`.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) => if predicate(&value) { Self::Present(value) } else { Self::Empty },
            Self::Empty => Self::Empty,
        }
    }

    /// Run `action` on the wrapped value and hand the container back unchanged.
    #[inline]
    pub fn do_if_present<A>(self, action: A) -> Self
    where
        A: FnOnce(&T),
    {
        if let Self::Present(value) = &self {
            action(value);
        }
        self
    }

    /// Run `action` when empty and hand the container back unchanged.
    #[inline]
    pub fn do_if_empty<A>(self, action: A) -> Self
    where
        A: FnOnce(),
    {
        if self.is_empty() {
            action();
        }
        self
    }

    // Fallible forms. The callable's error is returned as-is.

    pub fn try_map<U, E, F>(self, f: F) -> Result<Optional<U>, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Self::Present(value) => f(value).map(Optional::Present),
            Self::Empty => Ok(Optional::Empty),
        }
    }

    pub fn try_flat_map<U, E, F>(self, f: F) -> Result<Optional<U>, E>
    where
        F: FnOnce(T) -> Result<Optional<U>, E>,
    {
        match self {
            Self::Present(value) => f(value),
            Self::Empty => Ok(Optional::Empty),
        }
    }

    pub fn try_filter<E, P>(self, predicate: P) -> Result<Self, E>
    where
        P: FnOnce(&T) -> Result<bool, E>,
    {
        match self {
            Self::Present(value) => Ok(if predicate(&value)? { Self::Present(value) } else { Self::Empty }),
            Self::Empty => Ok(Self::Empty),
        }
    }

    pub fn try_or_else_get<E, F>(self, supplier: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        match self {
            Self::Present(value) => Ok(value),
            Self::Empty => supplier(),
        }
    }
}

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self { Self::Empty }
}

/// Hashes exactly like the wrapped value; `Empty` writes nothing.
impl<T: Hash> Hash for Optional<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if let Self::Present(value) = self {
            value.hash(state);
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(value: Option<T>) -> Self { option_of(value) }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(value: Optional<T>) -> Self { value.into_option() }
}

//! The two-variant `Outcome` type and its combinators.
//!
//! An `Outcome` is either `Ok(value)` or `Fail(error)`. Every transforming
//! operation consumes the outcome and returns a new one; nothing is mutated
//! in place and the variant of an existing value never changes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::result::Result;

/// The outcome of an operation: a success value or a failure value.
///
/// # Examples
///
/// ```
/// use okfail_core::Outcome;
///
/// let parsed: Outcome<u8, String> = Outcome::Ok(41);
/// let next = parsed
///     .map(|n| n + 1)
///     .and_then(|n| if n > 0 { Outcome::Ok(n) } else { Outcome::Fail("zero".into()) });
///
/// assert_eq!(next.unwrap_or(0), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use = "this `Outcome` may be a `Fail` variant, which should be handled"]
pub enum Outcome<T, E> {
    /// Success, carrying a value.
    Ok(T),
    /// Failure, carrying an error value.
    Fail(E),
}

/// Tag of an [`Outcome`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Tag of [`Outcome::Ok`].
    Ok,
    /// Tag of [`Outcome::Fail`].
    Fail,
}

impl Variant {
    /// The other variant.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Ok => Self::Fail,
            Self::Fail => Self::Ok,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "Ok"),
            Self::Fail => write!(f, "Fail"),
        }
    }
}

/// A pair of handlers for [`Outcome::dispatch`], one per variant.
#[derive(Debug, Clone, Copy)]
pub struct Handlers<FO, FF> {
    /// Called with the `Ok` value.
    pub ok: FO,
    /// Called with the `Fail` value.
    pub fail: FF,
}

/// Iterator over a borrowed `Ok` value. Yields at most one item.
pub type Iter<'a, T> = std::option::IntoIter<&'a T>;

impl<T, E> Outcome<T, E> {
    // ------------------------------------------------------------------
    // Introspection
    // ------------------------------------------------------------------

    /// Returns `true` if the outcome is `Ok`.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if the outcome is `Fail`.
    #[must_use]
    pub const fn is_fail(&self) -> bool {
        !self.is_ok()
    }

    /// The variant tag of this outcome.
    #[must_use]
    pub const fn variant(&self) -> Variant {
        match self {
            Self::Ok(_) => Variant::Ok,
            Self::Fail(_) => Variant::Fail,
        }
    }

    // ------------------------------------------------------------------
    // Asserting unwraps
    // ------------------------------------------------------------------

    /// Returns the `Ok` value.
    ///
    /// This is an assertion, not a recovery path. Calling it on a `Fail` is a
    /// bug in the caller, reported as an error rather than a panic. Propagate
    /// it with `?`; to handle both variants use [`Outcome::unwrap_or`] or
    /// [`Outcome::match_with`] instead.
    ///
    /// ```
    /// use okfail_core::Outcome;
    ///
    /// fn first_port(found: Outcome<u16, String>) -> okfail_core::Result<u16> {
    ///     let port = found.ok()?;
    ///     Ok(port)
    /// }
    ///
    /// assert_eq!(first_port(Outcome::Ok(8080)), Ok(8080));
    /// assert!(first_port(Outcome::Fail("none".into())).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvariantViolation`] with the default message if the
    /// outcome is `Fail`.
    pub fn ok(self) -> Result<T> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Fail(_) => Err(Error::invariant_violation(Variant::Ok)),
        }
    }

    /// Returns the `Ok` value, or an invariant violation carrying `message`.
    /// Asserting, like [`Outcome::ok`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvariantViolation`] if the outcome is `Fail`.
    pub fn ok_with_message(self, message: impl Into<String>) -> Result<T> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Fail(_) => Err(Error::invariant_violation_with_message(
                Variant::Ok,
                message,
            )),
        }
    }

    /// Returns the `Fail` value.
    ///
    /// An assertion like [`Outcome::ok`]: a wrong variant is a caller bug.
    /// Propagate the error with `?` rather than matching on it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvariantViolation`] with the default message if the
    /// outcome is `Ok`.
    pub fn fail(self) -> Result<E> {
        match self {
            Self::Ok(_) => Err(Error::invariant_violation(Variant::Fail)),
            Self::Fail(error) => Ok(error),
        }
    }

    /// Returns the `Fail` value, or an invariant violation carrying `message`.
    /// Asserting, like [`Outcome::fail`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvariantViolation`] if the outcome is `Ok`.
    pub fn fail_with_message(self, message: impl Into<String>) -> Result<E> {
        match self {
            Self::Ok(_) => Err(Error::invariant_violation_with_message(
                Variant::Fail,
                message,
            )),
            Self::Fail(error) => Ok(error),
        }
    }

    // ------------------------------------------------------------------
    // Safe unwraps
    // ------------------------------------------------------------------

    /// Returns the `Ok` value, or `default` if the outcome is `Fail`.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Fail(_) => default,
        }
    }

    /// Returns the `Ok` value, or computes one from the failure.
    ///
    /// `f` runs only for `Fail`.
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Fail(error) => f(error),
        }
    }

    // ------------------------------------------------------------------
    // Transformation
    // ------------------------------------------------------------------

    /// Transforms the `Ok` value. A `Fail` passes through untouched.
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Fail(error) => Outcome::Fail(error),
        }
    }

    /// Transforms the `Fail` value. An `Ok` passes through untouched.
    pub fn map_fail<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Fail(error) => Outcome::Fail(f(error)),
        }
    }

    // ------------------------------------------------------------------
    // Combination
    // ------------------------------------------------------------------

    /// Returns `other` if `self` is `Ok`, otherwise the failure of `self`.
    ///
    /// `other` is already evaluated by the caller. Use [`Outcome::and_then`]
    /// to build it only when needed.
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Ok(_) => other,
            Self::Fail(error) => Outcome::Fail(error),
        }
    }

    /// Returns `self` if it is `Ok`, otherwise `other`.
    ///
    /// `other` is already evaluated by the caller. Use [`Outcome::or_else`]
    /// to build it only when needed.
    pub fn or<G>(self, other: Outcome<T, G>) -> Outcome<T, G> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Fail(_) => other,
        }
    }

    /// Chains a fallible step on the `Ok` value.
    ///
    /// `f` is never called for `Fail`, which is returned as is.
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Fail(error) => Outcome::Fail(error),
        }
    }

    /// Recovers from a failure with a fallible step.
    ///
    /// `f` is never called for `Ok`, which is returned as is.
    pub fn or_else<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> Outcome<T, G>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Fail(error) => f(error),
        }
    }

    // ------------------------------------------------------------------
    // Conversion and dispatch
    // ------------------------------------------------------------------

    /// `[value]` for `Ok`, `[]` for `Fail`.
    #[must_use]
    pub fn to_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }

    /// Calls exactly one handler and returns its result.
    pub fn match_with<R, FO, FF>(self, on_ok: FO, on_fail: FF) -> R
    where
        FO: FnOnce(T) -> R,
        FF: FnOnce(E) -> R,
    {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Fail(error) => on_fail(error),
        }
    }

    /// Same as [`Outcome::match_with`], with the handlers bundled together.
    pub fn dispatch<R, FO, FF>(self, handlers: Handlers<FO, FF>) -> R
    where
        FO: FnOnce(T) -> R,
        FF: FnOnce(E) -> R,
    {
        self.match_with(handlers.ok, handlers.fail)
    }

    /// Borrows the payload.
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Fail(error) => Outcome::Fail(error),
        }
    }

    /// Iterates over the `Ok` value, if any.
    pub fn iter(&self) -> Iter<'_, T> {
        self.as_ref().into_option().into_iter()
    }

    /// Converts into a standard library `Result`.
    ///
    /// # Errors
    ///
    /// The `Fail` payload becomes the `Err` payload.
    pub fn into_result(self) -> std::result::Result<T, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Fail(error) => Err(error),
        }
    }

    fn into_option(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Fail(_) => None,
        }
    }
}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, E> From<std::result::Result<T, E>> for Outcome<T, E> {
    fn from(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Fail(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for std::result::Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

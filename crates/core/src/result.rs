//! Result type definition and extension traits.
//!
//! `Result` is the crate's own fallible return type. `ResultExt` bridges any
//! standard library result into an [`Outcome`].

use crate::error::Error;
use crate::outcome::Outcome;

/// The standard Result type for okfail operations.
///
/// Returned by the asserting unwraps (`Outcome::ok`, `Outcome::fail`) and by
/// configuration loading. Use the `?` operator to hand the error to the
/// caller's own error-handling layer.
///
/// # Examples
///
/// ```
/// use okfail_core::{Outcome, Result};
///
/// fn port(raw: Outcome<u16, String>) -> Result<u16> {
///     let port = raw.ok()?;
///     Ok(port)
/// }
///
/// assert!(port(Outcome::Ok(8080)).is_ok());
/// assert!(port(Outcome::Fail("missing".into())).is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait converting any standard library `Result` into an `Outcome`.
pub trait ResultExt<T, E> {
    /// `Ok(v)` becomes `Outcome::Ok(v)`, `Err(e)` becomes `Outcome::Fail(e)`.
    fn into_outcome(self) -> Outcome<T, E>;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E> {
    fn into_outcome(self) -> Outcome<T, E> {
        Outcome::from(self)
    }
}

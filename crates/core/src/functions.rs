//! Free-function forms of every `Outcome` operation.
//!
//! Each function takes the outcome first, followed by the method's usual
//! arguments, and delegates to the method. They exist so the operations can
//! be passed around as plain values:
//!
//! ```
//! use okfail_core::{Outcome, functions};
//!
//! let outcomes: Vec<Outcome<u8, &str>> = vec![Outcome::Ok(1), Outcome::Fail("e"), Outcome::Ok(3)];
//!
//! let passed = outcomes.iter().filter(|o| functions::is_ok(*o)).count();
//! let values: Vec<u8> = outcomes.into_iter().flat_map(functions::to_vec).collect();
//!
//! assert_eq!(passed, 2);
//! assert_eq!(values, vec![1, 3]);
//! ```

use std::fmt;

use crate::outcome::{Handlers, Outcome};
use crate::render::{RenderOptions, Renderer};
use crate::result::Result;

/// See [`Outcome::is_ok`].
#[must_use]
pub const fn is_ok<T, E>(outcome: &Outcome<T, E>) -> bool {
    outcome.is_ok()
}

/// See [`Outcome::is_fail`].
#[must_use]
pub const fn is_fail<T, E>(outcome: &Outcome<T, E>) -> bool {
    outcome.is_fail()
}

/// # Errors
///
/// See [`Outcome::ok`].
pub fn ok<T, E>(outcome: Outcome<T, E>) -> Result<T> {
    outcome.ok()
}

/// # Errors
///
/// See [`Outcome::ok_with_message`].
pub fn ok_with_message<T, E>(outcome: Outcome<T, E>, message: impl Into<String>) -> Result<T> {
    outcome.ok_with_message(message)
}

/// # Errors
///
/// See [`Outcome::fail`].
pub fn fail<T, E>(outcome: Outcome<T, E>) -> Result<E> {
    outcome.fail()
}

/// # Errors
///
/// See [`Outcome::fail_with_message`].
pub fn fail_with_message<T, E>(outcome: Outcome<T, E>, message: impl Into<String>) -> Result<E> {
    outcome.fail_with_message(message)
}

/// See [`Outcome::unwrap_or`].
pub fn unwrap_or<T, E>(outcome: Outcome<T, E>, default: T) -> T {
    outcome.unwrap_or(default)
}

/// See [`Outcome::unwrap_or_else`]. `f` runs only for `Fail`.
pub fn unwrap_or_else<T, E, F>(outcome: Outcome<T, E>, f: F) -> T
where
    F: FnOnce(E) -> T,
{
    outcome.unwrap_or_else(f)
}

/// See [`Outcome::map`].
pub fn map<T, E, U, F>(outcome: Outcome<T, E>, f: F) -> Outcome<U, E>
where
    F: FnOnce(T) -> U,
{
    outcome.map(f)
}

/// See [`Outcome::map_fail`].
pub fn map_fail<T, E, G, F>(outcome: Outcome<T, E>, f: F) -> Outcome<T, G>
where
    F: FnOnce(E) -> G,
{
    outcome.map_fail(f)
}

/// See [`Outcome::and`]. `other` is evaluated before the call.
pub fn and<T, E, U>(outcome: Outcome<T, E>, other: Outcome<U, E>) -> Outcome<U, E> {
    outcome.and(other)
}

/// See [`Outcome::or`]. `other` is evaluated before the call.
pub fn or<T, E, G>(outcome: Outcome<T, E>, other: Outcome<T, G>) -> Outcome<T, G> {
    outcome.or(other)
}

/// See [`Outcome::and_then`].
pub fn and_then<T, E, U, F>(outcome: Outcome<T, E>, f: F) -> Outcome<U, E>
where
    F: FnOnce(T) -> Outcome<U, E>,
{
    outcome.and_then(f)
}

/// See [`Outcome::or_else`].
pub fn or_else<T, E, G, F>(outcome: Outcome<T, E>, f: F) -> Outcome<T, G>
where
    F: FnOnce(E) -> Outcome<T, G>,
{
    outcome.or_else(f)
}

/// See [`Outcome::to_vec`].
#[must_use]
pub fn to_vec<T, E>(outcome: Outcome<T, E>) -> Vec<T> {
    outcome.to_vec()
}

/// See [`Outcome::match_with`].
pub fn match_with<T, E, R, FO, FF>(outcome: Outcome<T, E>, on_ok: FO, on_fail: FF) -> R
where
    FO: FnOnce(T) -> R,
    FF: FnOnce(E) -> R,
{
    outcome.match_with(on_ok, on_fail)
}

/// See [`Outcome::debug`].
pub fn debug<T, E, S>(outcome: Outcome<T, E>, sink: S, options: &RenderOptions) -> Outcome<T, E>
where
    T: fmt::Debug,
    E: fmt::Debug,
    S: FnOnce(String),
{
    outcome.debug(sink, options)
}

/// See [`Outcome::debug_ok`].
pub fn debug_ok<T, E, S>(outcome: Outcome<T, E>, sink: S, options: &RenderOptions) -> Outcome<T, E>
where
    T: fmt::Debug,
    E: fmt::Debug,
    S: FnOnce(String),
{
    outcome.debug_ok(sink, options)
}

/// See [`Outcome::debug_fail`].
pub fn debug_fail<T, E, S>(
    outcome: Outcome<T, E>,
    sink: S,
    options: &RenderOptions,
) -> Outcome<T, E>
where
    T: fmt::Debug,
    E: fmt::Debug,
    S: FnOnce(String),
{
    outcome.debug_fail(sink, options)
}

/// See [`Outcome::dispatch`].
pub fn dispatch<T, E, R, FO, FF>(outcome: Outcome<T, E>, handlers: Handlers<FO, FF>) -> R
where
    FO: FnOnce(T) -> R,
    FF: FnOnce(E) -> R,
{
    outcome.dispatch(handlers)
}

/// See [`Outcome::render`].
#[must_use]
pub fn render<T, E>(outcome: &Outcome<T, E>, options: &RenderOptions) -> String
where
    T: fmt::Debug,
    E: fmt::Debug,
{
    outcome.render(options)
}

/// See [`Outcome::render_with`].
#[must_use]
pub fn render_with<T, E, R>(
    outcome: &Outcome<T, E>,
    renderer: &R,
    options: &RenderOptions,
) -> String
where
    T: fmt::Debug,
    E: fmt::Debug,
    R: Renderer + ?Sized,
{
    outcome.render_with(renderer, options)
}

/// See [`Outcome::debug_with`].
pub fn debug_with<T, E, R, S>(
    outcome: Outcome<T, E>,
    renderer: &R,
    sink: S,
    options: &RenderOptions,
) -> Outcome<T, E>
where
    T: fmt::Debug,
    E: fmt::Debug,
    R: Renderer + ?Sized,
    S: FnOnce(String),
{
    outcome.debug_with(renderer, sink, options)
}

/// See [`Outcome::debug_ok_with`].
pub fn debug_ok_with<T, E, R, S>(
    outcome: Outcome<T, E>,
    renderer: &R,
    sink: S,
    options: &RenderOptions,
) -> Outcome<T, E>
where
    T: fmt::Debug,
    E: fmt::Debug,
    R: Renderer + ?Sized,
    S: FnOnce(String),
{
    outcome.debug_ok_with(renderer, sink, options)
}

/// See [`Outcome::debug_fail_with`].
pub fn debug_fail_with<T, E, R, S>(
    outcome: Outcome<T, E>,
    renderer: &R,
    sink: S,
    options: &RenderOptions,
) -> Outcome<T, E>
where
    T: fmt::Debug,
    E: fmt::Debug,
    R: Renderer + ?Sized,
    S: FnOnce(String),
{
    outcome.debug_fail_with(renderer, sink, options)
}

//! # okfail core
//!
//! A two-variant `Outcome<T, E>`: `Ok(value)` or `Fail(error)`, with the
//! query, unwrap, transform, combine and debug operations over it.
//!
//! ## Laws
//!
//! - An outcome is exactly one variant, forever. Operations consume it and
//!   return a new one.
//! - `map`/`and_then` never touch a `Fail`; `map_fail`/`or_else` never touch
//!   an `Ok`. Their callbacks run at most once, synchronously.
//! - `and`/`or` take an already-built outcome; `and_then`/`or_else` build it
//!   lazily.
//! - Asserting the wrong variant (`ok()` on `Fail`, `fail()` on `Ok`) returns
//!   [`Error::InvariantViolation`]. No panics.
//!
//! ```
//! use okfail_core::Outcome;
//!
//! let answer: Outcome<i32, String> = Outcome::Ok(42);
//! assert_eq!(answer.map(|n| n + 1).ok(), Ok(43));
//!
//! let broken: Outcome<i32, i32> = Outcome::Fail(2);
//! assert_eq!(broken.map_fail(|n| n + 2).fail(), Ok(4));
//! ```

mod error;
pub mod functions;
mod outcome;
pub mod render;
mod result;

pub use error::{Error, UNWRAP_FAIL_MESSAGE, UNWRAP_OK_MESSAGE};
pub use outcome::{Handlers, Iter, Outcome, Variant};
pub use render::{DebugRenderer, RenderOptions, Rendered, Renderer};
pub use result::{Result, ResultExt};

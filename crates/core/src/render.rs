//! Debug rendering of outcomes.
//!
//! An outcome renders as `Ok( <payload> )` or `Fail( <payload> )`. The payload
//! text comes from a pluggable [`Renderer`]; the default uses the payload's
//! `Debug` impl. Rendering is for humans only and plays no part in equality
//! or serialization.
//!
//! The `debug*` helpers hand the rendered text to a caller-supplied sink and
//! return the outcome unchanged, so they can sit in the middle of a chain:
//!
//! ```
//! use okfail_core::{Outcome, RenderOptions};
//!
//! let mut seen = Vec::new();
//! let total = Outcome::<i32, String>::Ok(2)
//!     .debug(|text| seen.push(text), &RenderOptions::default())
//!     .map(|n| n * 21)
//!     .unwrap_or(0);
//!
//! assert_eq!(total, 42);
//! assert_eq!(seen, vec!["Ok( 2 )".to_string()]);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::outcome::Outcome;
use crate::result::Result;

const DEFAULT_ELLIPSIS: &str = "...";

/// Options controlling how payloads are rendered.
///
/// Deserializable, so it can live in a config file:
///
/// ```toml
/// pretty = true
/// max_len = 120
/// ellipsis = "…"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Spread nested structures over multiple lines.
    pub pretty: bool,
    /// Truncate the payload text to this many characters.
    pub max_len: Option<usize>,
    /// Appended to a truncated payload.
    pub ellipsis: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            max_len: None,
            ellipsis: DEFAULT_ELLIPSIS.to_string(),
        }
    }
}

impl RenderOptions {
    /// Same as [`RenderOptions::default`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets [`RenderOptions::pretty`].
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Truncates payloads longer than `max_len` characters.
    #[must_use]
    pub const fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    /// Sets the marker appended to truncated payloads.
    #[must_use]
    pub fn with_ellipsis(mut self, ellipsis: impl Into<String>) -> Self {
        self.ellipsis = ellipsis.into();
        self
    }

    /// Parse options from a TOML document. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::TomlParseFailed`] if the document is not valid
    /// TOML or a key has the wrong type.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let options = toml::from_str(source)?;
        Ok(options)
    }

    fn truncate(&self, text: String) -> String {
        match self.max_len {
            Some(max_len) if text.chars().count() > max_len => {
                let mut truncated: String = text.chars().take(max_len).collect();
                truncated.push_str(&self.ellipsis);
                truncated
            }
            _ => text,
        }
    }
}

/// Renders an arbitrary payload as text.
pub trait Renderer {
    /// Text for `value`. Truncation is applied afterwards by the caller.
    fn render(&self, value: &dyn fmt::Debug, options: &RenderOptions) -> String;
}

/// Renders payloads through their `Debug` impl.
#[derive(Debug, Clone, Copy, Default)]
pub struct DebugRenderer;

impl Renderer for DebugRenderer {
    fn render(&self, value: &dyn fmt::Debug, options: &RenderOptions) -> String {
        if options.pretty {
            format!("{value:#?}")
        } else {
            format!("{value:?}")
        }
    }
}

impl<F> Renderer for F
where
    F: Fn(&dyn fmt::Debug, &RenderOptions) -> String,
{
    fn render(&self, value: &dyn fmt::Debug, options: &RenderOptions) -> String {
        self(value, options)
    }
}

/// `Display` adapter returned by [`Outcome::display`].
#[derive(Debug)]
pub struct Rendered<'a, T, E> {
    outcome: &'a Outcome<T, E>,
    options: RenderOptions,
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Display for Rendered<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.outcome.render(&self.options))
    }
}

impl<T: fmt::Debug, E: fmt::Debug> Outcome<T, E> {
    /// Render as `Ok( <payload> )` or `Fail( <payload> )`.
    #[must_use]
    pub fn render(&self, options: &RenderOptions) -> String {
        self.render_with(&DebugRenderer, options)
    }

    /// Like [`Outcome::render`], with a custom payload renderer.
    #[must_use]
    pub fn render_with<R>(&self, renderer: &R, options: &RenderOptions) -> String
    where
        R: Renderer + ?Sized,
    {
        format!(
            "{}( {} )",
            self.variant(),
            self.render_payload(renderer, options)
        )
    }

    /// Displays with default [`RenderOptions`].
    #[must_use]
    pub fn display(&self) -> Rendered<'_, T, E> {
        self.display_with(RenderOptions::default())
    }

    /// Displays with the given options.
    #[must_use]
    pub const fn display_with(&self, options: RenderOptions) -> Rendered<'_, T, E> {
        Rendered {
            outcome: self,
            options,
        }
    }

    /// Passes the full rendering to `sink`, then returns `self`.
    pub fn debug<S>(self, sink: S, options: &RenderOptions) -> Self
    where
        S: FnOnce(String),
    {
        self.debug_with(&DebugRenderer, sink, options)
    }

    /// Like [`Outcome::debug`], with a custom payload renderer.
    pub fn debug_with<R, S>(self, renderer: &R, sink: S, options: &RenderOptions) -> Self
    where
        R: Renderer + ?Sized,
        S: FnOnce(String),
    {
        sink(self.render_with(renderer, options));
        self
    }

    /// Passes the rendered `Ok` payload to `sink` if there is one, then returns `self`.
    pub fn debug_ok<S>(self, sink: S, options: &RenderOptions) -> Self
    where
        S: FnOnce(String),
    {
        self.debug_ok_with(&DebugRenderer, sink, options)
    }

    /// Like [`Outcome::debug_ok`], with a custom payload renderer.
    pub fn debug_ok_with<R, S>(self, renderer: &R, sink: S, options: &RenderOptions) -> Self
    where
        R: Renderer + ?Sized,
        S: FnOnce(String),
    {
        if self.is_ok() {
            sink(self.render_payload(renderer, options));
        }
        self
    }

    /// Passes the rendered `Fail` payload to `sink` if there is one, then returns `self`.
    pub fn debug_fail<S>(self, sink: S, options: &RenderOptions) -> Self
    where
        S: FnOnce(String),
    {
        self.debug_fail_with(&DebugRenderer, sink, options)
    }

    /// Like [`Outcome::debug_fail`], with a custom payload renderer.
    pub fn debug_fail_with<R, S>(self, renderer: &R, sink: S, options: &RenderOptions) -> Self
    where
        R: Renderer + ?Sized,
        S: FnOnce(String),
    {
        if self.is_fail() {
            sink(self.render_payload(renderer, options));
        }
        self
    }

    fn render_payload<R>(&self, renderer: &R, options: &RenderOptions) -> String
    where
        R: Renderer + ?Sized,
    {
        let text = match self {
            Self::Ok(value) => renderer.render(value, options),
            Self::Fail(error) => renderer.render(error, options),
        };
        options.truncate(text)
    }
}

/// A sink that emits rendered text as a `tracing` event at `level`.
///
/// ```
/// use okfail_core::{Outcome, RenderOptions, render::tracing_sink};
/// use tracing::Level;
///
/// let outcome = Outcome::<u32, String>::Fail("disk full".into())
///     .debug_fail(tracing_sink(Level::WARN), &RenderOptions::default());
/// assert!(outcome.is_fail());
/// ```
pub fn tracing_sink(level: Level) -> impl FnOnce(String) {
    move |rendered| {
        if level == Level::ERROR {
            tracing::error!(target: "okfail", "{rendered}");
        } else if level == Level::WARN {
            tracing::warn!(target: "okfail", "{rendered}");
        } else if level == Level::INFO {
            tracing::info!(target: "okfail", "{rendered}");
        } else if level == Level::DEBUG {
            tracing::debug!(target: "okfail", "{rendered}");
        } else {
            tracing::trace!(target: "okfail", "{rendered}");
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use std::sync::{Arc, Mutex};

    use tracing::field::{Field, Visit};
    use tracing::{Event, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    use super::*;
    use crate::Error;

    #[derive(Debug)]
    #[allow(dead_code)]
    struct Config {
        name: &'static str,
        ports: Vec<u16>,
    }

    #[test]
    fn test_render_ok_bool() {
        let outcome: Outcome<bool, ()> = Outcome::Ok(true);
        assert_eq!(outcome.render(&RenderOptions::default()), "Ok( true )");
        assert_eq!(outcome.display().to_string(), "Ok( true )");
    }

    #[test]
    fn test_render_fail_string() {
        let outcome: Outcome<(), &str> = Outcome::Fail("x");
        assert_eq!(outcome.display().to_string(), "Fail( \"x\" )");
    }

    #[test]
    fn test_render_recurses_into_nested_values() {
        let outcome: Outcome<Config, ()> = Outcome::Ok(Config {
            name: "api",
            ports: vec![80, 443],
        });
        assert_eq!(
            outcome.display().to_string(),
            "Ok( Config { name: \"api\", ports: [80, 443] } )"
        );
    }

    #[test]
    fn test_render_pretty_wraps_lines() {
        let outcome: Outcome<Vec<u8>, ()> = Outcome::Ok(vec![1, 2]);
        let options = RenderOptions::new().with_pretty(true);
        assert_eq!(outcome.render(&options), "Ok( [\n    1,\n    2,\n] )");
    }

    #[test]
    fn test_render_truncates_payload() {
        let outcome: Outcome<(), &str> = Outcome::Fail("abcdefgh");
        let options = RenderOptions::new().with_max_len(4);
        assert_eq!(outcome.render(&options), "Fail( \"abc... )");
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let options = RenderOptions::new().with_max_len(2).with_ellipsis("…");
        assert_eq!(options.truncate("äöü".to_string()), "äö…");
        assert_eq!(options.truncate("äö".to_string()), "äö");
    }

    #[test]
    fn test_custom_renderer() {
        let upper = |value: &dyn fmt::Debug, _: &RenderOptions| format!("{value:?}").to_uppercase();
        let outcome: Outcome<&str, ()> = Outcome::Ok("quiet");
        assert_eq!(
            outcome.render_with(&upper, &RenderOptions::default()),
            "Ok( \"QUIET\" )"
        );
    }

    #[test]
    fn test_debug_passes_full_rendering_and_returns_self() {
        let mut seen = Vec::new();
        let outcome: Outcome<i32, &str> = Outcome::Fail("e");
        let back = outcome.debug(|text| seen.push(text), &RenderOptions::default());
        assert_eq!(back, Outcome::Fail("e"));
        assert_eq!(seen, vec!["Fail( \"e\" )".to_string()]);
    }

    #[test]
    fn test_debug_ok_only_fires_for_ok() {
        let mut seen = Vec::new();
        let options = RenderOptions::default();
        let ok: Outcome<i32, &str> = Outcome::Ok(5);
        let fail: Outcome<i32, &str> = Outcome::Fail("e");

        let ok = ok.debug_ok(|text| seen.push(text), &options);
        let fail = fail.debug_ok(|text| seen.push(text), &options);

        assert_eq!(seen, vec!["5".to_string()]);
        assert!(ok.is_ok());
        assert!(fail.is_fail());
    }

    #[test]
    fn test_debug_fail_only_fires_for_fail() {
        let mut seen = Vec::new();
        let options = RenderOptions::default();
        let ok: Outcome<i32, &str> = Outcome::Ok(5);
        let fail: Outcome<i32, &str> = Outcome::Fail("e");

        let _ = ok.debug_fail(|text| seen.push(text), &options);
        let _ = fail.debug_fail(|text| seen.push(text), &options);

        assert_eq!(seen, vec!["\"e\"".to_string()]);
    }

    /// Records every event as `(level, target, message)`.
    #[derive(Clone, Default)]
    struct CapturedEvents(Arc<Mutex<Vec<(Level, String, String)>>>);

    impl CapturedEvents {
        fn take(&self) -> Vec<(Level, String, String)> {
            std::mem::take(&mut *self.0.lock().unwrap())
        }
    }

    struct MessageVisitor(String);

    impl Visit for MessageVisitor {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            if field.name() == "message" {
                self.0 = format!("{value:?}");
            }
        }
    }

    impl<S: Subscriber> Layer<S> for CapturedEvents {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut visitor = MessageVisitor(String::new());
            event.record(&mut visitor);
            let metadata = event.metadata();
            self.0.lock().unwrap().push((
                *metadata.level(),
                metadata.target().to_string(),
                visitor.0,
            ));
        }
    }

    #[test]
    fn test_tracing_sink_emits_at_requested_level() {
        let captured = CapturedEvents::default();
        let subscriber = tracing_subscriber::registry().with(captured.clone());
        let options = RenderOptions::default();

        tracing::subscriber::with_default(subscriber, || {
            for level in [
                Level::ERROR,
                Level::WARN,
                Level::INFO,
                Level::DEBUG,
                Level::TRACE,
            ] {
                let outcome: Outcome<u8, &str> = Outcome::Fail("disk full");
                let back = outcome.debug(tracing_sink(level), &options);
                assert_eq!(back, Outcome::Fail("disk full"));
                assert_eq!(
                    captured.take(),
                    vec![(level, "okfail".to_string(), "Fail( \"disk full\" )".to_string())]
                );
            }
        });
    }

    #[test]
    fn test_tracing_sink_skipped_for_other_variant() {
        let captured = CapturedEvents::default();
        let subscriber = tracing_subscriber::registry().with(captured.clone());

        tracing::subscriber::with_default(subscriber, || {
            let _ = Outcome::<u8, &str>::Ok(1)
                .debug_fail(tracing_sink(Level::ERROR), &RenderOptions::default());
        });

        assert!(captured.take().is_empty());
    }

    #[test]
    fn test_options_from_toml() {
        let options = RenderOptions::from_toml_str("pretty = true\nmax_len = 80\n").unwrap();
        assert!(options.pretty);
        assert_eq!(options.max_len, Some(80));
        assert_eq!(options.ellipsis, "...");
    }

    #[test]
    fn test_options_from_empty_toml_are_default() {
        let options = RenderOptions::from_toml_str("").unwrap();
        assert_eq!(options, RenderOptions::default());
    }

    #[test]
    fn test_options_from_bad_toml() {
        let err = RenderOptions::from_toml_str("pretty = \"yes\"").unwrap_err();
        assert!(matches!(err, Error::TomlParseFailed { .. }));
    }
}

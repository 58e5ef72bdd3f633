//! Overridable locale and time hooks
//!
//! [`Hooks`] bundles three strategies the admin layer calls per request:
//!
//! | Hook | Default |
//! |------|---------|
//! | locale | header → query parameter → cookie → configured default |
//! | parse_time | a fixed list of layouts, see [`parse_time_at`] |
//! | format_time | strftime via `chrono` |
//!
//! Hosts replace any of them with the `with_*` builders. A `Hooks` value is
//! owned by the caller and passed where it is needed; there is no global
//! instance.

use std::fmt::{self, Write};
use std::ops::RangeInclusive;
use std::sync::Arc;

use adminkit_core::{Error, Result};
use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use tracing::{debug, warn};

use crate::config::{AdminConfig, LocaleConfig};
use crate::context::RequestContext;
use crate::cookie::{set_cookie, Cookie};

/// Resolves the locale for a request; may queue a cookie on the context
pub type LocaleResolver = Arc<dyn Fn(&mut RequestContext) -> String + Send + Sync>;

/// Parses user-entered time strings
pub type TimeParser = Arc<dyn Fn(&str, &RequestContext) -> Result<NaiveDateTime> + Send + Sync>;

/// Formats a time with a strftime format
pub type TimeFormatter = Arc<dyn Fn(&NaiveDateTime, &str, &RequestContext) -> String + Send + Sync>;

/// Date-time layouts tried first, most specific first
const DATETIME_LAYOUTS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

const DATE_LAYOUT: &str = "%Y-%m-%d";

/// Time-of-day layouts, applied to the current date
const TIME_LAYOUTS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// Locale and time strategies
#[derive(Clone)]
pub struct Hooks {
    locale_resolver: LocaleResolver,
    time_parser: TimeParser,
    time_formatter: TimeFormatter,
}

impl Hooks {
    /// Default hooks built from the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Default hooks built from `config`
    pub fn from_config(config: &AdminConfig) -> Self {
        let locale = config.locale.clone();
        let default_format = config.time.format.clone();
        Hooks {
            locale_resolver: Arc::new(move |ctx: &mut RequestContext| resolve_locale(&locale, ctx)),
            time_parser: Arc::new(|input: &str, _ctx: &RequestContext| {
                parse_time_at(input, Local::now().date_naive())
            }),
            time_formatter: Arc::new(
                move |time: &NaiveDateTime, format: &str, _ctx: &RequestContext| {
                    let format = if format.is_empty() {
                        default_format.as_str()
                    } else {
                        format
                    };
                    format_time(time, format, &default_format)
                },
            ),
        }
    }

    /// Replace the locale resolver (builder pattern)
    pub fn with_locale_resolver<F>(mut self, resolver: F) -> Self
    where
        F: Fn(&mut RequestContext) -> String + Send + Sync + 'static,
    {
        self.locale_resolver = Arc::new(resolver);
        self
    }

    /// Replace the time parser (builder pattern)
    pub fn with_time_parser<F>(mut self, parser: F) -> Self
    where
        F: Fn(&str, &RequestContext) -> Result<NaiveDateTime> + Send + Sync + 'static,
    {
        self.time_parser = Arc::new(parser);
        self
    }

    /// Replace the time formatter (builder pattern)
    pub fn with_time_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&NaiveDateTime, &str, &RequestContext) -> String + Send + Sync + 'static,
    {
        self.time_formatter = Arc::new(formatter);
        self
    }

    /// Locale for this request
    pub fn locale(&self, ctx: &mut RequestContext) -> String {
        (self.locale_resolver)(ctx)
    }

    /// Parse a user-entered time
    ///
    /// # Errors
    ///
    /// Whatever the configured parser reports; the default returns
    /// [`Error::InvalidTime`].
    pub fn parse_time(&self, input: &str, ctx: &RequestContext) -> Result<NaiveDateTime> {
        (self.time_parser)(input, ctx)
    }

    /// Format a time; an empty `format` uses the configured default
    pub fn format_time(&self, time: &NaiveDateTime, format: &str, ctx: &RequestContext) -> String {
        (self.time_formatter)(time, format, ctx)
    }
}

impl Default for Hooks {
    fn default() -> Self {
        Self::from_config(&AdminConfig::default())
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks").finish_non_exhaustive()
    }
}

// ============================================================================
// Default strategies
// ============================================================================

/// Default locale resolution
///
/// Checks, in order: the configured header, the query parameter, the cookie.
/// A locale taken from the query parameter is written back to the header and
/// remembered in a cookie, unless the context is read-only. Empty values are
/// skipped. Falls back to `config.default_locale`.
pub fn resolve_locale(config: &LocaleConfig, ctx: &mut RequestContext) -> String {
    if let Some(locale) = ctx.header(&config.header).filter(|l| !l.is_empty()) {
        let locale = locale.to_string();
        debug!(target: "adminkit::locale", source = "header", locale = %locale, "Resolved locale");
        return locale;
    }

    if let Some(locale) = ctx
        .query_param(&config.query_param)
        .filter(|l| !l.is_empty())
    {
        if ctx.is_writable() {
            ctx.set_header(&config.header, locale.clone());
            let mut cookie = Cookie::new(config.cookie.clone(), locale.clone());
            let ttl = Duration::days(i64::from(config.cookie_ttl_days));
            cookie.expires = Utc::now().checked_add_signed(ttl);
            set_cookie(cookie, ctx);
        }
        debug!(target: "adminkit::locale", source = "query", locale = %locale, "Resolved locale");
        return locale;
    }

    if let Some(locale) = ctx.cookie(&config.cookie).filter(|l| !l.is_empty()) {
        let locale = locale.to_string();
        debug!(target: "adminkit::locale", source = "cookie", locale = %locale, "Resolved locale");
        return locale;
    }

    config.default_locale.clone()
}

/// Parse a time string, using `today` for time-only input
///
/// Accepted layouts, after trimming:
/// - `2024-03-05 14:30:15`, `2024-03-05 14:30`, `2024-03-05 14`
/// - `2024-03-05`, `2024-03`, `2024`
/// - RFC 3339 (`2024-03-05T14:30:15+01:00`), converted to UTC
/// - `14:30:15`, `14:30` on `today`
///
/// Missing components are the start of the period.
///
/// # Errors
///
/// Returns [`Error::InvalidTime`] if no layout matches.
pub fn parse_time_at(input: &str, today: NaiveDate) -> Result<NaiveDateTime> {
    parse_layouts(input.trim(), today).ok_or_else(|| Error::InvalidTime(input.to_string()))
}

fn parse_layouts(s: &str, today: NaiveDate) -> Option<NaiveDateTime> {
    for layout in DATETIME_LAYOUTS {
        if let Ok(time) = NaiveDateTime::parse_from_str(s, layout) {
            return Some(time);
        }
    }

    if let Ok(time) = DateTime::parse_from_rfc3339(s) {
        return Some(time.naive_utc());
    }

    if let Some((date, hour)) = s.split_once(' ') {
        if let (Ok(date), Some(hour)) = (
            NaiveDate::parse_from_str(date, DATE_LAYOUT),
            parse_digits(hour, 1..=2),
        ) {
            return date.and_hms_opt(hour, 0, 0);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, DATE_LAYOUT) {
        return date.and_hms_opt(0, 0, 0);
    }

    if let Some((year, month)) = s.split_once('-') {
        if let (Some(year), Some(month)) = (parse_digits(year, 4..=4), parse_digits(month, 1..=2)) {
            return NaiveDate::from_ymd_opt(year as i32, month, 1)?.and_hms_opt(0, 0, 0);
        }
    }

    if let Some(year) = parse_digits(s, 4..=4) {
        return NaiveDate::from_ymd_opt(year as i32, 1, 1)?.and_hms_opt(0, 0, 0);
    }

    for layout in TIME_LAYOUTS {
        if let Ok(time) = NaiveTime::parse_from_str(s, layout) {
            return Some(today.and_time(time));
        }
    }

    None
}

fn parse_digits(s: &str, len: RangeInclusive<usize>) -> Option<u32> {
    if len.contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse().ok()
    } else {
        None
    }
}

/// Format `time` with a strftime `format`
///
/// An invalid `format` falls back to `fallback`, then to chrono's
/// `YYYY-MM-DD HH:MM:SS` rendering.
pub fn format_time(time: &NaiveDateTime, format: &str, fallback: &str) -> String {
    for candidate in [format, fallback] {
        let mut out = String::new();
        if write!(out, "{}", time.format(candidate)).is_ok() {
            return out;
        }
        warn!(target: "adminkit::time", format = candidate, "Invalid time format");
    }
    time.to_string()
}

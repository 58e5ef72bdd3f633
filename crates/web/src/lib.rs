//! Request-facing helpers for adminkit
//!
//! Everything here is pure string and value manipulation; the host's HTTP
//! layer owns the connection:
//! - Humanize: `OrderItem` → `Order Item` / `order_item`
//! - Query: patch the query string of a URL
//! - Cookie: the cookie policy applied to every admin cookie
//! - Context: owned request snapshot passed to hooks
//! - Hooks: overridable locale and time strategies
//! - Config: `admin.toml`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod context;
pub mod cookie;
pub mod hooks;
pub mod humanize;
pub mod query;

pub use config::{AdminConfig, LocaleConfig, TimeConfig, CONFIG_FILE_NAME};
pub use context::RequestContext;
pub use cookie::{set_cookie, Cookie, DEFAULT_COOKIE_PATH};
pub use hooks::{
    format_time, parse_time_at, resolve_locale, Hooks, LocaleResolver, TimeFormatter, TimeParser,
};
pub use humanize::{humanize_string, to_param_string};
pub use query::patch_url;

//! Cookie policy
//!
//! Every cookie the admin layer sets goes through [`set_cookie`], which
//! enforces:
//! - `HttpOnly` always
//! - `Secure` when the request arrived over HTTPS
//! - `Path=/` when no path was given

use chrono::{DateTime, Utc};
use std::fmt::Write;

use crate::context::RequestContext;

/// Default cookie path
pub const DEFAULT_COOKIE_PATH: &str = "/";

/// A cookie to be sent with the response
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cookie {
    /// Cookie name
    pub name: String,
    /// Cookie value
    pub value: String,
    /// Path attribute; empty means unset
    pub path: String,
    /// Domain attribute
    pub domain: Option<String>,
    /// Absolute expiry
    pub expires: Option<DateTime<Utc>>,
    /// Relative expiry in seconds
    pub max_age: Option<i64>,
    /// Only send over HTTPS
    pub secure: bool,
    /// Hide from client-side scripts
    pub http_only: bool,
}

impl Cookie {
    /// Create a session cookie with no attributes set
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Cookie {
            name: name.into(),
            value: value.into(),
            ..Default::default()
        }
    }

    /// Set the absolute expiry (builder pattern)
    pub fn with_expires(mut self, expires: DateTime<Utc>) -> Self {
        self.expires = Some(expires);
        self
    }

    /// Set the path (builder pattern)
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Render as a `Set-Cookie` header value
    pub fn to_header_value(&self) -> String {
        let mut out = format!("{}={}", self.name, self.value);
        if !self.path.is_empty() {
            let _ = write!(out, "; Path={}", self.path);
        }
        if let Some(domain) = &self.domain {
            let _ = write!(out, "; Domain={}", domain);
        }
        if let Some(expires) = &self.expires {
            let _ = write!(
                out,
                "; Expires={}",
                expires.format("%a, %d %b %Y %H:%M:%S GMT")
            );
        }
        if let Some(max_age) = self.max_age {
            let _ = write!(out, "; Max-Age={}", max_age);
        }
        if self.http_only {
            out.push_str("; HttpOnly");
        }
        if self.secure {
            out.push_str("; Secure");
        }
        out
    }
}

/// Apply the cookie policy and queue the cookie on the response
pub fn set_cookie(mut cookie: Cookie, ctx: &mut RequestContext) {
    cookie.http_only = true;
    if ctx.is_https() {
        cookie.secure = true;
    }
    if cookie.path.is_empty() {
        cookie.path = DEFAULT_COOKIE_PATH.to_string();
    }
    ctx.push_cookie(cookie);
}

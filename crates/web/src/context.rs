//! Request context
//!
//! An owned snapshot of the parts of an HTTP request the admin helpers read
//! (URL, headers, cookies), plus the cookies queued for the response. The
//! host's HTTP layer fills it in and drains the outgoing cookies afterwards;
//! this crate never touches a connection.

use std::collections::HashMap;

use adminkit_core::Result;
use url::Url;

use crate::cookie::Cookie;

/// Request snapshot handed to hooks and cookie policy
#[derive(Debug, Clone)]
pub struct RequestContext {
    url: Url,
    /// Keyed by lowercased header name
    headers: HashMap<String, String>,
    cookies: HashMap<String, String>,
    writable: bool,
    outgoing: Vec<Cookie>,
}

impl RequestContext {
    /// Create a context for a request to `url` with a response writer attached
    pub fn new(url: Url) -> Self {
        RequestContext {
            url,
            headers: HashMap::new(),
            cookies: HashMap::new(),
            writable: true,
            outgoing: Vec::new(),
        }
    }

    /// Parse `url` and create a context for it
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`](adminkit_core::Error::InvalidUrl) if
    /// the URL does not parse.
    pub fn parse(url: &str) -> Result<Self> {
        Ok(Self::new(Url::parse(url)?))
    }

    /// Add a request header (builder pattern)
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_header(name, value);
        self
    }

    /// Add a request cookie (builder pattern)
    pub fn with_cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.insert(name.into(), value.into());
        self
    }

    /// Mark the context as having no response writer (builder pattern)
    ///
    /// Hooks must not queue cookies or rewrite headers on such a context.
    pub fn read_only(mut self) -> Self {
        self.writable = false;
        self
    }

    /// The request URL
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Header value by case-insensitive name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Set or replace a request header
    pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
    }

    /// First value of a query parameter
    pub fn query_param(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }

    /// Request cookie value by exact name
    pub fn cookie(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(String::as_str)
    }

    /// Whether a response writer is attached
    pub fn is_writable(&self) -> bool {
        self.writable
    }

    /// Whether the request came in over HTTPS
    pub fn is_https(&self) -> bool {
        self.url.scheme() == "https"
    }

    /// Queue a cookie for the response
    pub(crate) fn push_cookie(&mut self, cookie: Cookie) {
        self.outgoing.push(cookie);
    }

    /// Cookies queued for the response
    pub fn outgoing_cookies(&self) -> &[Cookie] {
        &self.outgoing
    }

    /// Drain the cookies queued for the response
    pub fn take_outgoing_cookies(&mut self) -> Vec<Cookie> {
        std::mem::take(&mut self.outgoing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_are_case_insensitive() {
        let ctx = RequestContext::parse("https://shop.test/admin")
            .unwrap()
            .with_header("Locale", "de-DE");
        assert_eq!(ctx.header("locale"), Some("de-DE"));
        assert_eq!(ctx.header("LOCALE"), Some("de-DE"));
        assert_eq!(ctx.header("Accept"), None);
    }

    #[test]
    fn test_query_param_first_value() {
        let ctx = RequestContext::parse("https://shop.test/?locale=fr&locale=it").unwrap();
        assert_eq!(ctx.query_param("locale").as_deref(), Some("fr"));
        assert_eq!(ctx.query_param("page"), None);
    }

    #[test]
    fn test_cookies() {
        let ctx = RequestContext::parse("http://shop.test/")
            .unwrap()
            .with_cookie("locale", "ja");
        assert_eq!(ctx.cookie("locale"), Some("ja"));
        assert_eq!(ctx.cookie("Locale"), None);
        assert!(!ctx.is_https());
    }

    #[test]
    fn test_outgoing_cookies_drain() {
        let mut ctx = RequestContext::parse("https://shop.test/").unwrap();
        assert!(ctx.is_writable());
        ctx.push_cookie(Cookie::new("a", "1"));
        assert_eq!(ctx.outgoing_cookies().len(), 1);
        let drained = ctx.take_outgoing_cookies();
        assert_eq!(drained.len(), 1);
        assert!(ctx.outgoing_cookies().is_empty());
    }

    #[test]
    fn test_read_only() {
        let ctx = RequestContext::parse("https://shop.test/").unwrap().read_only();
        assert!(!ctx.is_writable());
    }
}

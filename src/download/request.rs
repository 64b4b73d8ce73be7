//! Request descriptors: URL, header overrides, and cookies.
//!
//! A [`RequestSpec`] is ephemeral — built per call, never cached. Header
//! names are unique (case-insensitive; the last insert wins) and override
//! any default the client would otherwise send, including `User-Agent`.
//! Cookies keep their insertion order and are rendered into a single
//! `Cookie` header value.

/// A cookie attached to an outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    /// Cookie name.
    pub name: String,
    /// Cookie value.
    pub value: String,
}

impl Cookie {
    /// Creates a cookie from a name/value pair.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Describes one outbound GET request.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    url: String,
    headers: Vec<(String, String)>,
    cookies: Vec<Cookie>,
}

impl RequestSpec {
    /// Creates a descriptor for the given URL.
    ///
    /// The URL is validated when the request is built, not here, so a
    /// malformed URL surfaces as
    /// [`DownloadError::RequestConstruction`](super::DownloadError) from
    /// whichever operation first uses the spec.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: Vec::new(),
            cookies: Vec::new(),
        }
    }

    /// Sets a header override, replacing any prior value of the same name.
    ///
    /// Name matching is case-insensitive, so `user-agent` replaces
    /// `User-Agent`.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.headers
            .retain(|(existing, _)| !existing.eq_ignore_ascii_case(&name));
        self.headers.push((name, value.into()));
        self
    }

    /// Sets several header overrides at once.
    #[must_use]
    pub fn headers<I, N, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<String>,
    {
        for (name, value) in headers {
            self = self.header(name, value);
        }
        self
    }

    /// Appends a cookie. Cookies keep insertion order.
    #[must_use]
    pub fn cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.push(Cookie::new(name, value));
        self
    }

    /// Appends several cookies in order.
    #[must_use]
    pub fn cookies<I>(mut self, cookies: I) -> Self
    where
        I: IntoIterator<Item = Cookie>,
    {
        self.cookies.extend(cookies);
        self
    }

    /// The target URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Header overrides, in insertion order.
    #[must_use]
    pub fn header_overrides(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Cookies, in insertion order.
    #[must_use]
    pub fn cookie_list(&self) -> &[Cookie] {
        &self.cookies
    }

    /// Renders the cookies as a `Cookie` header value, or `None` when there
    /// are no cookies to attach.
    #[must_use]
    pub fn cookie_header(&self) -> Option<String> {
        if self.cookies.is_empty() {
            return None;
        }
        let rendered = self
            .cookies
            .iter()
            .map(|cookie| format!("{}={}", cookie.name, cookie.value))
            .collect::<Vec<_>>()
            .join("; ");
        Some(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_replaces_same_name_case_insensitive() {
        let spec = RequestSpec::new("https://example.com/f")
            .header("Accept", "text/plain")
            .header("accept", "application/json");
        assert_eq!(
            spec.header_overrides(),
            &[("accept".to_string(), "application/json".to_string())]
        );
    }

    #[test]
    fn test_headers_bulk_insert_keeps_uniqueness() {
        let spec = RequestSpec::new("https://example.com/f")
            .headers([("X-One", "1"), ("X-Two", "2"), ("x-one", "override")]);
        assert_eq!(spec.header_overrides().len(), 2);
        assert!(
            spec.header_overrides()
                .iter()
                .any(|(name, value)| name == "x-one" && value == "override")
        );
    }

    #[test]
    fn test_cookie_header_preserves_order() {
        let spec = RequestSpec::new("https://example.com/f")
            .cookie("session", "abc")
            .cookie("theme", "dark")
            .cookie("session2", "def");
        assert_eq!(
            spec.cookie_header().as_deref(),
            Some("session=abc; theme=dark; session2=def")
        );
    }

    #[test]
    fn test_cookie_header_empty_when_no_cookies() {
        let spec = RequestSpec::new("https://example.com/f");
        assert!(spec.cookie_header().is_none());
    }

    #[test]
    fn test_cookies_bulk_append() {
        let spec = RequestSpec::new("https://example.com/f")
            .cookie("first", "1")
            .cookies(vec![Cookie::new("second", "2"), Cookie::new("third", "3")]);
        let names: Vec<&str> = spec
            .cookie_list()
            .iter()
            .map(|cookie| cookie.name.as_str())
            .collect();
        assert_eq!(names, ["first", "second", "third"]);
    }
}

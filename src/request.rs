//! Request description: target, method, parameters, timeouts.

use std::fmt;
use std::time::Duration;

use url::form_urlencoded;
use url::Url;

/// The HTTP methods this library speaks.
///
/// The set is closed on purpose: the request pipeline only branches two
/// ways — parameters into the query string (GET) or into the body (POST).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// Parameters, if any, are appended to the target's query string.
    #[default]
    Get,
    /// Parameters, if any, are sent as a form-encoded body.
    Post,
}

impl Method {
    pub(crate) fn as_http(self) -> http::Method {
        match self {
            Method::Get => http::Method::GET,
            Method::Post => http::Method::POST,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_http().as_str())
    }
}

/// A single HTTP request: an absolute target, a method, optional form
/// parameters, and optional timeout overrides.
///
/// A `Request` is a value — build it, hand it to
/// [`Client::execute`](crate::Client::execute) or
/// [`Client::dispatch`](crate::Client::dispatch), and it is consumed. The
/// builder methods take `self`, so there is nothing left to mutate once a
/// request is in flight.
///
/// # Examples
///
/// ```
/// use restling::Request;
///
/// let request = Request::post("https://api.example.com/login")?
///     .param("user", "alice")
///     .param("token", "s3cret");
///
/// assert_eq!(request.encoded_params(), "user=alice&token=s3cret");
/// # Ok::<(), url::ParseError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Request {
    target: Url,
    method: Method,
    params: Vec<(String, String)>,
    connect_timeout: Option<Duration>,
    read_timeout: Option<Duration>,
}

impl Request {
    /// Creates a request with the given method and an already-parsed target.
    pub fn new(method: Method, target: Url) -> Self {
        Self {
            target,
            method,
            params: Vec::new(),
            connect_timeout: None,
            read_timeout: None,
        }
    }

    /// Creates a GET request for the given absolute URL.
    ///
    /// # Errors
    ///
    /// Returns an error if `target` is not a valid absolute URL. URL
    /// validity is a construction concern and is not part of the
    /// [`FailReason`](crate::FailReason) taxonomy.
    pub fn get(target: impl AsRef<str>) -> Result<Self, url::ParseError> {
        Ok(Self::new(Method::Get, Url::parse(target.as_ref())?))
    }

    /// Creates a POST request for the given absolute URL.
    ///
    /// # Errors
    ///
    /// Returns an error if `target` is not a valid absolute URL.
    pub fn post(target: impl AsRef<str>) -> Result<Self, url::ParseError> {
        Ok(Self::new(Method::Post, Url::parse(target.as_ref())?))
    }

    /// Appends one form parameter. Parameters keep their insertion order.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    /// Appends several form parameters at once.
    pub fn params<N, V>(mut self, params: impl IntoIterator<Item = (N, V)>) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        self.params
            .extend(params.into_iter().map(|(n, v)| (n.into(), v.into())));
        self
    }

    /// Overrides the client's connect timeout for this request.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Overrides the client's read timeout for this request.
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    /// The request method.
    pub fn method(&self) -> Method {
        self.method
    }

    /// The target URL as constructed, without any appended parameters.
    pub fn target(&self) -> &Url {
        &self.target
    }

    /// The `application/x-www-form-urlencoded` rendering of the parameter
    /// list (UTF-8).
    ///
    /// This is a pure function of the parameter list: the same parameters
    /// always produce the identical string, and both the GET query branch
    /// and the POST body branch use it.
    pub fn encoded_params(&self) -> String {
        let mut encoded = form_urlencoded::Serializer::new(String::new());
        for (name, value) in &self.params {
            encoded.append_pair(name, value);
        }
        encoded.finish()
    }

    pub(crate) fn has_params(&self) -> bool {
        !self.params.is_empty()
    }

    pub(crate) fn connect_timeout_override(&self) -> Option<Duration> {
        self.connect_timeout
    }

    pub(crate) fn read_timeout_override(&self) -> Option<Duration> {
        self.read_timeout
    }

    /// The URL actually dispatched: for GET with parameters, the target with
    /// the encoded parameters appended to its query string; otherwise the
    /// target unmodified.
    pub(crate) fn full_url(&self) -> Url {
        let mut url = self.target.clone();
        if self.method == Method::Get && !self.params.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(self.params.iter().map(|(n, v)| (n.as_str(), v.as_str())));
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding_is_pure() {
        let request = Request::get("http://x/y")
            .unwrap()
            .param("a", "1")
            .param("b", "2");

        assert_eq!(request.encoded_params(), "a=1&b=2");
        assert_eq!(request.encoded_params(), request.encoded_params());
    }

    #[test]
    fn encoding_preserves_order_and_escapes() {
        let request = Request::post("http://x/y")
            .unwrap()
            .param("q", "rust async")
            .param("lang", "en&sl=auto");

        assert_eq!(request.encoded_params(), "q=rust+async&lang=en%26sl%3Dauto");
    }

    #[test]
    fn get_with_params_appends_query() {
        let request = Request::get("http://x/y")
            .unwrap()
            .param("a", "1")
            .param("b", "2");

        assert_eq!(request.full_url().as_str(), "http://x/y?a=1&b=2");
    }

    #[test]
    fn get_without_params_leaves_target_untouched() {
        let request = Request::get("http://x/y").unwrap();
        assert_eq!(request.full_url().as_str(), "http://x/y");
    }

    #[test]
    fn post_params_never_reach_the_query_string() {
        let request = Request::post("http://x/y")
            .unwrap()
            .param("a", "1")
            .param("b", "2");

        assert_eq!(request.full_url().as_str(), "http://x/y");
    }

    #[test]
    fn get_appends_to_an_existing_query() {
        let request = Request::get("http://x/y?fixed=0").unwrap().param("a", "1");
        assert_eq!(request.full_url().as_str(), "http://x/y?fixed=0&a=1");
    }
}

//! Single-attempt request execution and callback dispatch.
//!
//! The [`Client`] type is the entry point for issuing requests. Use
//! [`ClientBuilder`] to inject the network probe and default timeouts.

use std::sync::Arc;
use std::time::Duration;

use http::header;
use serde_json::Value;

use crate::probe::AlwaysConnected;
use crate::{FailReason, Method, NetworkProbe, Outcome, Request, ResponseHandler};

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(10);

/// An asynchronous HTTP client that resolves each request into parsed JSON
/// or a categorized [`FailReason`], exactly once.
///
/// The client holds configuration only — the network probe and default
/// timeouts. Each call owns its request/response cycle end-to-end: a fresh
/// transport is built per request with that request's effective timeouts,
/// and nothing is shared mutably between in-flight calls. Cloning is cheap
/// and clones share the same configuration.
///
/// There are no retries: every failure is terminal and reported once, and
/// the handler (or caller) decides what happens next.
///
/// # Examples
///
/// ```no_run
/// use restling::{Client, Request};
///
/// # async fn example() -> Result<(), url::ParseError> {
/// let client = Client::builder().build();
///
/// let request = Request::get("https://api.example.com/users")?
///     .param("page", "1");
///
/// match client.execute(request).await {
///     Ok(value) => println!("users: {value}"),
///     Err(reason) => eprintln!("lookup failed: {reason}"),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    probe: Arc<dyn NetworkProbe>,
    connect_timeout: Duration,
    read_timeout: Duration,
}

impl Client {
    /// Creates a new [`ClientBuilder`] for configuring a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Executes a request and returns its outcome.
    ///
    /// This is the await-based form of the request contract: the caller's
    /// task suspends for the duration of the exchange and observes the
    /// outcome on its own context. The pipeline is: probe check, request
    /// construction, timeout configuration, a single send, then a JSON
    /// parse of the body.
    ///
    /// The HTTP status code is logged but not branched on — whatever body
    /// came back is parsed, as long as the exchange itself completed. A
    /// non-JSON error page therefore surfaces as [`FailReason::Json`].
    pub async fn execute(&self, request: Request) -> Outcome {
        if !self.inner.probe.is_connected() {
            tracing::warn!(url = %request.target(), "network unavailable, request not dispatched");
            return Err(FailReason::NoNetworkConnection);
        }

        let body = self.exchange(&request).await?;
        parse_body(&body)
    }

    /// Executes a request on a background task and resolves `handler` with
    /// the outcome, exactly once.
    ///
    /// This is the callback form of the request contract. The caller is
    /// never blocked and observes no suspension; the handler runs on the
    /// spawned task once the exchange completes. There is no ordering
    /// guarantee between concurrent dispatches and no way to cancel a
    /// request once dispatched.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime, as it spawns a task.
    pub fn dispatch<H>(&self, request: Request, handler: H)
    where
        H: ResponseHandler,
    {
        let client = self.clone();
        tokio::spawn(async move {
            let handler = Box::new(handler);
            match client.execute(request).await {
                Ok(value) => handler.on_success(value),
                Err(reason) => handler.on_failure(reason),
            }
        });
    }

    /// Performs the network exchange for a single attempt and returns the
    /// raw response body.
    async fn exchange(&self, request: &Request) -> Result<String, FailReason> {
        let connect_timeout = request
            .connect_timeout_override()
            .unwrap_or(self.inner.connect_timeout);
        let read_timeout = request
            .read_timeout_override()
            .unwrap_or(self.inner.read_timeout);

        // Fresh transport per call, configured before anything is sent.
        let transport = match reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(read_timeout)
            .build()
        {
            Ok(transport) => transport,
            Err(e) => {
                tracing::error!(error = %e, "failed to construct transport");
                return Err(FailReason::Protocol);
            }
        };

        let url = request.full_url();

        tracing::debug!(
            method = %request.method(),
            url = %url,
            "executing HTTP request"
        );

        let mut http_request = transport
            .request(request.method().as_http(), url)
            .header(header::ACCEPT, "application/json");

        if request.method() == Method::Post && request.has_params() {
            http_request = http_request
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(request.encoded_params());
        }

        let response = match http_request.send().await {
            Ok(response) => response,
            Err(e) => {
                let reason = FailReason::from_transport(&e);
                tracing::warn!(error = %e, reason = %reason, "request failed");
                return Err(reason);
            }
        };

        let status = response.status();

        match response.text().await {
            Ok(body) => {
                tracing::info!(status = status.as_u16(), "received HTTP response");
                Ok(body)
            }
            Err(e) => {
                let reason = FailReason::from_transport(&e);
                tracing::warn!(error = %e, reason = %reason, "failed to read response body");
                Err(reason)
            }
        }
    }
}

/// Parses a response body as a tagged JSON value.
fn parse_body(body: &str) -> Outcome {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::warn!(error = %e, body = %body, "response body is not valid JSON");
            Err(FailReason::Json)
        }
    }
}

/// Builder for configuring and creating a [`Client`].
///
/// # Examples
///
/// ```
/// use restling::ClientBuilder;
/// use std::time::Duration;
///
/// let client = ClientBuilder::new()
///     .connect_timeout(Duration::from_secs(1))
///     .read_timeout(Duration::from_secs(2))
///     .network_probe(|| true)
///     .build();
/// ```
pub struct ClientBuilder {
    probe: Arc<dyn NetworkProbe>,
    connect_timeout: Duration,
    read_timeout: Duration,
}

impl ClientBuilder {
    /// Creates a builder with the default probe ([`AlwaysConnected`]) and
    /// 10 second connect and read timeouts.
    pub fn new() -> Self {
        Self {
            probe: Arc::new(AlwaysConnected),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            read_timeout: DEFAULT_READ_TIMEOUT,
        }
    }

    /// Injects the network probe consulted before each request.
    pub fn network_probe(mut self, probe: impl NetworkProbe + 'static) -> Self {
        self.probe = Arc::new(probe);
        self
    }

    /// Sets the default connect timeout for requests without an override.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets the default read timeout for requests without an override.
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Builds the configured `Client`.
    pub fn build(self) -> Client {
        Client {
            inner: Arc::new(ClientInner {
                probe: self.probe,
                connect_timeout: self.connect_timeout,
                read_timeout: self.read_timeout,
            }),
        }
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_is_not_json() {
        assert_eq!(parse_body(""), Err(FailReason::Json));
    }

    #[test]
    fn scalars_and_arrays_are_valid_payloads() {
        assert_eq!(parse_body("3"), Ok(Value::from(3)));
        assert_eq!(parse_body("[1,2]"), Ok(serde_json::json!([1, 2])));
    }
}

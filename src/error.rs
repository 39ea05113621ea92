//! The closed failure taxonomy surfaced to response handlers.
//!
//! Every way a dispatched request can go wrong collapses into one of the
//! [`FailReason`] categories. The set is deliberately flat: a handler branches
//! on the tag and decides what to do next; the library never exposes nested
//! causes, never retries, and never lets a failure escape uncaught.

use serde_json::Value;

/// Terminal failure categories for a dispatched request.
///
/// Exactly one of these is delivered (once) through
/// [`ResponseHandler::on_failure`](crate::ResponseHandler::on_failure), or
/// returned from [`Client::execute`](crate::Client::execute), whenever a
/// request does not produce parsed JSON.
///
/// # Examples
///
/// ```no_run
/// use restling::{Client, FailReason, Request};
///
/// # async fn example() -> Result<(), url::ParseError> {
/// let client = Client::builder().build();
/// let request = Request::get("https://api.example.com/status")?;
///
/// match client.execute(request).await {
///     Ok(value) => println!("got {value}"),
///     Err(FailReason::NoNetworkConnection) => eprintln!("offline, try later"),
///     Err(FailReason::Json) => eprintln!("server returned something that is not JSON"),
///     Err(reason) => eprintln!("request failed: {reason}"),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailReason {
    /// The network probe reported no connectivity.
    ///
    /// Delivered before any socket is opened. The probe may be stale — a
    /// request that would have succeeded is still short-circuited if the
    /// probe says the network is down.
    #[error("no network connection")]
    NoNetworkConnection,

    /// The request exceeded a configured timeout.
    ///
    /// Reserved: transport timeouts are currently reported as
    /// [`FailReason::Io`], so this variant is kept for callers that branch
    /// on it but is never produced by [`Client`](crate::Client).
    #[error("request timed out")]
    Timeout,

    /// A transport-level I/O failure: connect timeout, read timeout,
    /// connection refused or reset, or a broken body stream.
    #[error("I/O error during request")]
    Io,

    /// The HTTP exchange itself was malformed — the request could not be
    /// constructed or the peer violated the protocol.
    #[error("HTTP protocol error")]
    Protocol,

    /// The response body was not valid JSON (including an empty body).
    #[error("response body is not valid JSON")]
    Json,
}

impl FailReason {
    /// Classifies a transport error into a failure category.
    ///
    /// Timeouts and connection-level failures are I/O failures; errors in
    /// request construction or protocol handling are protocol failures.
    /// Anything the transport cannot attribute more precisely is treated as
    /// I/O, the broadest transport category.
    pub(crate) fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() || err.is_body() || err.is_decode() {
            FailReason::Io
        } else if err.is_builder() || err.is_redirect() || err.is_request() {
            FailReason::Protocol
        } else {
            FailReason::Io
        }
    }
}

/// The outcome of a single request: a parsed JSON value or a categorized
/// failure.
///
/// The success payload is a tagged [`serde_json::Value`], so top-level
/// objects, arrays, and scalars all count as valid responses.
pub type Outcome = Result<Value, FailReason>;

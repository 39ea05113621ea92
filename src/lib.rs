//! # Restling - a minimal asynchronous HTTP+JSON request library
//!
//! Restling issues a single HTTP call (GET or POST, with optional form
//! parameters) off the caller's execution context, parses the response body
//! as JSON, and delivers either the parsed value or a categorized
//! [`FailReason`] — exactly one of the two, exactly once per request.
//!
//! That is the whole surface. There are no retries, no connection pooling,
//! no streaming, no caching, and no cancellation of an in-flight call:
//! every request is a single attempt whose outcome the caller's handler
//! decides what to do with.
//!
//! ## Quick Start
//!
//! ```no_run
//! use restling::{Client, FailReason, Request, ResponseHandler};
//! use serde_json::Value;
//!
//! struct UserListHandler;
//!
//! impl ResponseHandler for UserListHandler {
//!     fn on_success(self: Box<Self>, value: Value) {
//!         println!("users: {value}");
//!     }
//!
//!     fn on_failure(self: Box<Self>, reason: FailReason) {
//!         eprintln!("lookup failed: {reason}");
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), url::ParseError> {
//!     let client = Client::builder().build();
//!
//!     // Fire-and-forget, resolved through the handler on a background task.
//!     let request = Request::get("https://api.example.com/users")?.param("page", "1");
//!     client.dispatch(request, UserListHandler);
//!
//!     // Or await the outcome directly.
//!     let request = Request::post("https://api.example.com/login")?
//!         .param("user", "alice")
//!         .param("token", "s3cret");
//!     match client.execute(request).await {
//!         Ok(value) => println!("session: {value}"),
//!         Err(reason) => eprintln!("login failed: {reason}"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Exactly-once delivery** - every request resolves through exactly one
//!   `on_success` or `on_failure`, enforced by consume-once handler methods
//! - **Closed failure taxonomy** - five flat categories a caller can
//!   exhaustively branch on, nothing nested, nothing escaping uncaught
//! - **Injected connectivity probe** - reachability is a capability passed
//!   in through the builder, never ambient platform state, so offline
//!   behavior is deterministic under test
//! - **Tagged JSON payloads** - responses are [`serde_json::Value`], so
//!   top-level objects, arrays, and scalars are all valid
//! - **Configurable timeouts** - connect and read timeouts default to 10s
//!   each and can be overridden per client or per request
//! - **Structured logging** - request/response/failure events via `tracing`
//!
//! ## Error Handling
//!
//! Failures are flat category tags, not nested causes. The network probe
//! short-circuits before any socket is opened; transport failures are
//! classified as I/O or protocol errors; a body that is not valid JSON —
//! including an empty body — is a parse failure. The HTTP status code is
//! never branched on: the original exchange's body is parsed regardless of
//! status.
//!
//! ```no_run
//! use restling::{Client, FailReason, Request};
//!
//! # async fn example() -> Result<(), url::ParseError> {
//! let client = Client::builder().network_probe(|| true).build();
//!
//! match client.execute(Request::get("https://api.example.com/feed")?).await {
//!     Ok(value) => println!("feed: {value}"),
//!     Err(FailReason::NoNetworkConnection) => eprintln!("offline"),
//!     Err(FailReason::Io) => eprintln!("transport failure, try again later"),
//!     Err(FailReason::Protocol) => eprintln!("malformed HTTP exchange"),
//!     Err(FailReason::Json) => eprintln!("response was not JSON"),
//!     Err(FailReason::Timeout) => unreachable!("timeouts surface as Io"),
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod handler;
mod probe;
mod request;

pub use client::{Client, ClientBuilder};
pub use error::{FailReason, Outcome};
pub use handler::ResponseHandler;
pub use probe::{AlwaysConnected, NetworkProbe};
pub use request::{Method, Request};

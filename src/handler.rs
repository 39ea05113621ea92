//! The callback contract a request resolves through.

use serde_json::Value;

use crate::FailReason;

/// Receives the outcome of a dispatched request.
///
/// For every request handed to [`Client::dispatch`](crate::Client::dispatch),
/// exactly one of these methods is invoked, exactly once. Both take the
/// handler by `Box<Self>`, so a handler is consumed by its first invocation —
/// double delivery does not compile.
///
/// The success payload is a tagged [`serde_json::Value`]: a top-level object,
/// array, or scalar are all valid responses, and the handler decides what
/// shapes it accepts.
///
/// # Examples
///
/// ```
/// use restling::{FailReason, ResponseHandler};
/// use serde_json::Value;
///
/// struct LogHandler;
///
/// impl ResponseHandler for LogHandler {
///     fn on_success(self: Box<Self>, value: Value) {
///         println!("response: {value}");
///     }
///
///     fn on_failure(self: Box<Self>, reason: FailReason) {
///         eprintln!("request failed: {reason}");
///     }
/// }
/// ```
pub trait ResponseHandler: Send + 'static {
    /// Called with the parsed response body when the exchange succeeded.
    fn on_success(self: Box<Self>, value: Value);

    /// Called with the failure category when the exchange did not produce
    /// parsed JSON.
    fn on_failure(self: Box<Self>, reason: FailReason);
}

//! Network reachability as an injected capability.

/// Reports whether the network is currently reachable.
///
/// The probe is consulted once per request, before any socket is opened; if
/// it answers `false` the request short-circuits with
/// [`FailReason::NoNetworkConnection`](crate::FailReason::NoNetworkConnection).
/// Implementations must be fast and non-blocking — this runs on the request
/// path. A stale answer is acceptable; the transport will report its own
/// failure if the probe was wrong in the other direction.
///
/// Any `Fn() -> bool` closure is a probe, which keeps tests deterministic:
///
/// ```
/// use restling::Client;
///
/// let client = Client::builder().network_probe(|| false).build();
/// ```
pub trait NetworkProbe: Send + Sync {
    /// Returns `true` if the network is believed reachable right now.
    fn is_connected(&self) -> bool;
}

impl<F> NetworkProbe for F
where
    F: Fn() -> bool + Send + Sync,
{
    fn is_connected(&self) -> bool {
        self()
    }
}

/// The default probe: always reports connectivity, so every request goes to
/// the transport. Hosts with a real reachability signal should inject their
/// own probe instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConnected;

impl NetworkProbe for AlwaysConnected {
    fn is_connected(&self) -> bool {
        true
    }
}

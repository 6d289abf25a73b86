//! Network reachability monitoring.
//!
//! A background [`ConnectivityMonitor`] polls a [`ReachabilityProbe`]
//! and publishes online/offline transitions over a watch channel. The
//! bootstrap controller consumes transitions to move between the
//! remote and remote-offline modes without re-resolving.
//!
//! Status is seeded as online so startup proceeds optimistically; the
//! first poll corrects it if the machine is actually offline.

mod config;
mod monitor;
mod probe;

pub use config::{
    ConnectivityConfig, DEFAULT_POLL_INTERVAL_SECS, DEFAULT_PROBE_TARGETS,
    DEFAULT_PROBE_TIMEOUT_MS,
};
pub use monitor::{ConnectivityHandle, ConnectivityMonitor};
pub use probe::{ReachabilityProbe, TcpProbe};

//! LaunchGate decides, at startup, whether an application should load
//! a remotely resolved endpoint or fall back to its built-in
//! experience.
//!
//! A resolution server is asked which endpoint this device should
//! present, identified by a device fingerprint and a partner token.
//! The answer is persisted so later launches skip the network, a
//! connectivity monitor keeps the decision honest while the process
//! runs, and every failure degrades to the built-in experience rather
//! than an error.
//!
//! # High-Level API
//!
//! ```ignore
//! use std::sync::Arc;
//! use launchgate::bootstrap::{BootstrapConfig, BootstrapController};
//! use launchgate::config::{ConfigFile, RetryPolicy};
//! use launchgate::connectivity::{ConnectivityConfig, ConnectivityMonitor, TcpProbe};
//! use launchgate::device::DeviceProfile;
//! use launchgate::resolver::{EndpointResolver, ReqwestFetcher, ResolverConfig};
//! use launchgate::store::{EndpointStore, FileStore};
//! use tokio_util::sync::CancellationToken;
//!
//! let config = ConfigFile::load()?;
//! let shutdown = CancellationToken::new();
//!
//! let store: Arc<dyn EndpointStore> = Arc::new(FileStore::new(&config.store.directory));
//! let connectivity_config = ConnectivityConfig::from(&config.connectivity);
//! let (monitor, connectivity) =
//!     ConnectivityMonitor::new(TcpProbe::from_config(&connectivity_config), connectivity_config);
//! monitor.start(shutdown.clone());
//!
//! let resolver = Arc::new(EndpointResolver::new(
//!     ReqwestFetcher::new()?,
//!     Arc::clone(&store),
//!     DeviceProfile::detect(),
//!     ResolverConfig::from(&config.resolver),
//!     RetryPolicy::from(&config.resolver),
//! ));
//!
//! let (controller, _updates) = BootstrapController::new(
//!     resolver,
//!     store,
//!     connectivity,
//!     BootstrapConfig::from(&config.bootstrap),
//! );
//! let handle = controller.start(shutdown.clone());
//!
//! let mut mode_rx = handle.subscribe();
//! while mode_rx.changed().await.is_ok() {
//!     println!("mode: {}", mode_rx.borrow_and_update().as_str());
//! }
//! ```

pub mod bootstrap;
pub mod config;
pub mod connectivity;
pub mod device;
pub mod diagnostics;
pub mod endpoint;
pub mod logging;
pub mod resolver;
pub mod store;

/// Version of the launchgate crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

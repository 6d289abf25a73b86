//! Startup arbitration.
//!
//! The controller decides, once per launch, whether the application
//! should present the remote endpoint or fall back to its built-in
//! experience, and keeps that decision current afterwards. The rule
//! itself is the pure [`decide`] function; the [`BootstrapController`]
//! wires it to resolution, connectivity and endpoint updates.
//!
//! ```ignore
//! use launchgate::bootstrap::{BootstrapConfig, BootstrapController};
//!
//! let (controller, updates) =
//!     BootstrapController::new(resolver, store, connectivity, BootstrapConfig::default());
//! let handle = controller.start(shutdown.clone());
//!
//! let mut mode_rx = handle.subscribe();
//! while mode_rx.changed().await.is_ok() {
//!     println!("mode: {}", mode_rx.borrow_and_update().as_str());
//! }
//! ```

mod controller;
mod mode;

pub use controller::{
    BootstrapConfig, BootstrapController, BootstrapHandle, EndpointUpdates, DEFAULT_MIN_SPLASH_MS,
};
pub use mode::{decide, BootstrapMode};

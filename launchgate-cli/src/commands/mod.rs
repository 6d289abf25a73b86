//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`cache`] - Cached endpoint management (show, clear)
//! - [`config`] - Configuration management (path, show, init)
//! - [`diagnostics`] - System diagnostics for bug reports
//! - [`resolve`] - One-shot endpoint resolution
//! - [`run`] - Main command (resolve, monitor connectivity, report mode)

pub mod cache;
pub mod config;
pub mod diagnostics;
pub mod resolve;
pub mod run;

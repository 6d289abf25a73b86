//! Run command - arbitrate startup and report mode transitions.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use launchgate::bootstrap::{BootstrapConfig, BootstrapController, BootstrapMode};
use launchgate::config::{config_file_path, ConfigFile, RetryPolicy};
use launchgate::connectivity::{ConnectivityConfig, ConnectivityMonitor, TcpProbe};
use launchgate::device::DeviceProfile;
use launchgate::resolver::{EndpointResolver, ReqwestFetcher, ResolverConfig};
use launchgate::store::{EndpointStore, FileStore};

use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the run command.
#[derive(Default)]
pub struct RunArgs {
    pub debug: bool,
}

/// Run the run command.
pub fn run(args: RunArgs) -> Result<(), CliError> {
    let runner = CliRunner::with_debug(args.debug)?;
    runner.log_startup("run");
    let config = runner.config();

    let policy = RetryPolicy::from(&config.resolver);
    let fetcher =
        ReqwestFetcher::with_timeout(policy.attempt_timeout()).map_err(CliError::HttpClient)?;
    let store: Arc<dyn EndpointStore> = Arc::new(FileStore::new(&config.store.directory));
    let profile = DeviceProfile::detect();

    // Print banner
    println!("LaunchGate v{}", launchgate::VERSION);
    println!("{}", "=".repeat(40));
    println!();
    if !config_file_path().exists() {
        println!("No config file found, using defaults.");
        println!("Run 'launchgate config init' to create one.");
        println!();
    }
    println!(
        "Device: os={} lng={} model={} country={}",
        profile.os_version, profile.language, profile.model, profile.region
    );
    println!("Store:  {}", config.store.directory.display());
    println!();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;

    runtime.block_on(arbitrate(config, fetcher, store, profile, policy))
}

/// Wire the arbitration stack and report mode transitions until Ctrl+C.
async fn arbitrate(
    config: &ConfigFile,
    fetcher: ReqwestFetcher,
    store: Arc<dyn EndpointStore>,
    profile: DeviceProfile,
    policy: RetryPolicy,
) -> Result<(), CliError> {
    let shutdown = CancellationToken::new();

    let connectivity_config = ConnectivityConfig::from(&config.connectivity);
    let (monitor, connectivity) = ConnectivityMonitor::new(
        TcpProbe::from_config(&connectivity_config),
        connectivity_config,
    );
    let monitor_task = monitor.start(shutdown.clone());

    let resolver = Arc::new(EndpointResolver::new(
        fetcher,
        Arc::clone(&store),
        profile,
        ResolverConfig::from(&config.resolver),
        policy,
    ));

    let (controller, _updates) = BootstrapController::new(
        resolver,
        store,
        connectivity,
        BootstrapConfig::from(&config.bootstrap),
    );
    let handle = controller.start(shutdown.clone());
    let mut mode_rx = handle.subscribe();

    println!("Arbitrating startup. Press Ctrl+C to stop.");
    println!();
    print_mode(&mode_rx.borrow_and_update().clone());

    loop {
        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                if let Err(e) = result {
                    tracing::warn!(error = %e, "Failed to listen for Ctrl+C");
                }
                println!();
                println!("Shutting down...");
                break;
            }
            changed = mode_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                print_mode(&mode_rx.borrow_and_update().clone());
            }
        }
    }

    shutdown.cancel();
    handle.join().await;
    if let Err(e) = monitor_task.await {
        tracing::warn!(error = %e, "Connectivity monitor task failed");
    }

    println!("Goodbye!");
    Ok(())
}

/// Print the current mode on its own line.
fn print_mode(mode: &BootstrapMode) {
    match mode {
        BootstrapMode::Initializing => println!("Mode: initializing (splash)"),
        BootstrapMode::Remote(endpoint) => println!("Mode: remote ({})", endpoint),
        BootstrapMode::RemoteOffline(endpoint) => {
            println!("Mode: remote-offline ({}, waiting for connectivity)", endpoint)
        }
        BootstrapMode::NativeFallback => println!("Mode: native-fallback"),
    }
}

//! Resolve command - perform a single resolution pass and print the result.

use std::sync::Arc;

use launchgate::config::RetryPolicy;
use launchgate::device::DeviceProfile;
use launchgate::resolver::{EndpointResolver, ReqwestFetcher, ResolutionOutcome, ResolverConfig};
use launchgate::store::{EndpointStore, FileStore};

use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the resolve command.
#[derive(Default)]
pub struct ResolveArgs {
    pub fresh: bool,
    pub debug: bool,
}

/// Run the resolve command.
pub fn run(args: ResolveArgs) -> Result<(), CliError> {
    let runner = CliRunner::with_debug(args.debug)?;
    runner.log_startup("resolve");
    let config = runner.config();

    let store = Arc::new(FileStore::new(&config.store.directory));

    if args.fresh {
        store.clear()?;
        println!("Cleared cached endpoint.");
    } else if store.load().is_some() {
        println!("A cached endpoint exists; use --fresh to force a network pass.");
    }

    let policy = RetryPolicy::from(&config.resolver);
    let fetcher =
        ReqwestFetcher::with_timeout(policy.attempt_timeout()).map_err(CliError::HttpClient)?;

    let resolver = EndpointResolver::new(
        fetcher,
        Arc::clone(&store) as Arc<dyn EndpointStore>,
        DeviceProfile::detect(),
        ResolverConfig::from(&config.resolver),
        policy,
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;

    match runtime.block_on(resolver.resolve()) {
        ResolutionOutcome::Resolved(endpoint) => {
            println!("Resolved: {}", endpoint);
        }
        ResolutionOutcome::Unavailable => {
            println!(
                "Resolution failed after up to {} attempt(s).",
                config.resolver.max_attempts
            );
            println!("Startup would fall back to the native experience.");
        }
    }

    Ok(())
}

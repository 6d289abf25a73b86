//! Endpoint resolution service.

use std::sync::Arc;

use tokio::sync::{broadcast, Mutex};
use tracing::{debug, info, warn};

use crate::config::RetryPolicy;
use crate::device::DeviceProfile;
use crate::store::EndpointStore;

use super::extract::extract_endpoint;
use super::http::HttpFetch;
use super::request::build_request_url;
use super::types::{ResolutionOutcome, ResolverConfig};

/// Capacity for the single-flight result channel. One outcome per pass.
const COALESCE_CHANNEL_CAPACITY: usize = 1;

/// Resolves the remote endpoint.
///
/// A resolution pass first consults the store; a stored endpoint is
/// returned without touching the network. Otherwise the resolver asks
/// the resolution server, retrying transient failures up to the policy
/// limit, and persists whatever it obtains.
///
/// Concurrent callers share a single pass: whoever arrives first runs
/// it, everyone else waits for that pass's outcome.
pub struct EndpointResolver<F: HttpFetch> {
    fetcher: F,
    store: Arc<dyn EndpointStore>,
    profile: DeviceProfile,
    config: ResolverConfig,
    policy: RetryPolicy,
    inflight: Mutex<Option<broadcast::Sender<ResolutionOutcome>>>,
}

impl<F: HttpFetch> EndpointResolver<F> {
    /// Create a resolver.
    pub fn new(
        fetcher: F,
        store: Arc<dyn EndpointStore>,
        profile: DeviceProfile,
        config: ResolverConfig,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            fetcher,
            store,
            profile,
            config,
            policy,
            inflight: Mutex::new(None),
        }
    }

    /// Resolve the endpoint, sharing any pass already in flight.
    pub async fn resolve(&self) -> ResolutionOutcome {
        let leader_tx = {
            let mut inflight = self.inflight.lock().await;
            if let Some(tx) = &*inflight {
                let mut outcome_rx = tx.subscribe();
                drop(inflight);
                debug!("Joining in-flight resolution pass");
                return match outcome_rx.recv().await {
                    Ok(outcome) => outcome,
                    Err(_) => ResolutionOutcome::Unavailable,
                };
            }
            let (tx, _rx) = broadcast::channel(COALESCE_CHANNEL_CAPACITY);
            *inflight = Some(tx.clone());
            tx
        };

        let outcome = self.resolve_pass().await;

        *self.inflight.lock().await = None;
        let _ = leader_tx.send(outcome.clone());
        outcome
    }

    /// One full resolution pass: store check, then network attempts.
    async fn resolve_pass(&self) -> ResolutionOutcome {
        if let Some(endpoint) = self.store.load() {
            debug!(endpoint = %endpoint, "Using stored endpoint");
            return ResolutionOutcome::Resolved(endpoint);
        }

        let url = match build_request_url(
            &self.config.base_url,
            &self.config.partner_token,
            &self.profile,
        ) {
            Ok(url) => url,
            Err(e) => {
                warn!(error = %e, "Failed to build resolution request");
                return ResolutionOutcome::Unavailable;
            }
        };

        let max_attempts = self.policy.max_attempts();
        for attempt in 1..=max_attempts {
            debug!(attempt, max_attempts, "Resolution attempt starting");

            match tokio::time::timeout(self.policy.attempt_timeout(), self.fetcher.get(&url)).await
            {
                Ok(Ok(body)) => {
                    match extract_endpoint(
                        &body,
                        &self.config.payload_marker,
                        self.config.payload_separator,
                    ) {
                        Ok(endpoint) => {
                            if let Err(e) = self.store.store(&endpoint) {
                                warn!(error = %e, "Failed to persist resolved endpoint");
                            }
                            info!(endpoint = %endpoint, attempt, "Endpoint resolved");
                            return ResolutionOutcome::Resolved(endpoint);
                        }
                        Err(e) => {
                            // The server answered; asking again cannot
                            // change the body.
                            warn!(attempt, error = %e, "Response carried no endpoint, giving up");
                            return ResolutionOutcome::Unavailable;
                        }
                    }
                }
                Ok(Err(e)) => {
                    warn!(
                        attempt,
                        error = %e,
                        retryable = e.is_retryable(),
                        "Resolution attempt failed"
                    );
                    if !e.is_retryable() {
                        return ResolutionOutcome::Unavailable;
                    }
                }
                Err(_) => {
                    warn!(
                        attempt,
                        timeout_secs = self.policy.attempt_timeout().as_secs(),
                        "Resolution attempt timed out"
                    );
                }
            }

            if attempt < max_attempts {
                tokio::time::sleep(self.policy.retry_delay()).await;
            }
        }

        info!(attempts = max_attempts, "Resolution exhausted all attempts");
        ResolutionOutcome::Unavailable
    }
}

//! Remote endpoint resolution.
//!
//! The resolver asks a resolution server which endpoint this device
//! should load, identified by the device fingerprint and a partner
//! token. The answer is buried in free-form text after a marker
//! string; [`extract_endpoint`] digs it out.
//!
//! Resolution is deliberately forgiving: transient failures are
//! retried on a fixed schedule, a previously stored endpoint is reused
//! without any network traffic, and every failure path degrades to
//! [`ResolutionOutcome::Unavailable`] rather than an error the caller
//! must handle.

mod extract;
mod http;
mod request;
mod service;
mod types;

pub use extract::extract_endpoint;
pub use http::{HttpFetch, ReqwestFetcher};
pub use request::build_request_url;
pub use service::EndpointResolver;
pub use types::{
    ResolutionOutcome, ResolveError, ResolverConfig, DEFAULT_BASE_URL, DEFAULT_PARTNER_TOKEN,
    DEFAULT_PAYLOAD_MARKER, DEFAULT_PAYLOAD_SEPARATOR,
};

#[cfg(test)]
pub use http::tests::MockHttpFetch;

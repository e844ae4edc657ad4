//! Client side of the upstream REST API that owns every admin resource.

pub mod client;
pub mod envelope;

pub use client::{HttpUpstream, UpstreamApi, UpstreamRequest};
pub use envelope::{decode_page, ApiEnvelope, Page, StatusEnvelope};

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("Upstream transport failure: {0}")]
    Transport(String),

    #[error("Upstream API error: HTTP {status} - {body}")]
    Http { status: u16, body: String },

    #[error("Failed to decode upstream response: {0}")]
    Decode(String),
}

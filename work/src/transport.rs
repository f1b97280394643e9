//! The peer transport port.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request to {peer} failed: {reason}")]
    Request { peer: String, reason: String },

    #[error("peer {peer} returned HTTP {status}")]
    Status { peer: String, status: u16 },

    #[error("peer {peer} reported an error: {message}")]
    Peer { peer: String, message: String },

    #[error("malformed response from {peer}: {reason}")]
    Malformed { peer: String, reason: String },
}

/// Network calls to a single work peer.
///
/// Implementations own everything below the request/response contract:
/// HTTP, TLS, connection pooling, transport-level retries.
#[async_trait]
pub trait PeerTransport: Send + Sync {
    /// Ask `peer` for work on `hash` at `difficulty` (16 hex characters).
    async fn request_work(
        &self,
        peer: &str,
        hash: &str,
        difficulty: &str,
    ) -> Result<String, TransportError>;

    /// Tell `peer` to stop working on `hash`.
    async fn cancel_work(&self, peer: &str, hash: &str) -> Result<(), TransportError>;
}

//! JSON-over-HTTP work peers.
//!
//! Peers speak the node RPC dialect: `{"action": "work_generate", ...}`
//! answered by `{"work": "..."}` or `{"error": "..."}`.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::transport::{PeerTransport, TransportError};

/// Talks to work peers over HTTP POST.
#[derive(Clone)]
pub struct HttpPeerTransport {
    http: reqwest::Client,
}

#[derive(Debug, Default, Deserialize)]
struct WorkGenerateResponse {
    #[serde(default)]
    work: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl HttpPeerTransport {
    pub fn new() -> Result<Self, TransportError> {
        Self::with_timeouts(Duration::from_secs(30), Duration::from_secs(10))
    }

    /// `request_timeout` bounds a whole call, `connect_timeout` only the TCP/TLS setup.
    pub fn with_timeouts(
        request_timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .timeout(request_timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| TransportError::Request {
                peer: String::new(),
                reason: format!("failed to create HTTP client: {e}"),
            })?;
        Ok(Self { http })
    }

    async fn post(&self, peer: &str, body: &Value) -> Result<Value, TransportError> {
        let response = self
            .http
            .post(peer)
            .json(body)
            .send()
            .await
            .map_err(|e| TransportError::Request {
                peer: peer.to_string(),
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(TransportError::Status {
                peer: peer.to_string(),
                status: response.status().as_u16(),
            });
        }

        response.json().await.map_err(|e| TransportError::Malformed {
            peer: peer.to_string(),
            reason: e.to_string(),
        })
    }
}

pub(crate) fn work_generate_body(hash: &str, difficulty: &str) -> Value {
    json!({
        "action": "work_generate",
        "hash": hash,
        "difficulty": difficulty,
    })
}

pub(crate) fn work_cancel_body(hash: &str) -> Value {
    json!({
        "action": "work_cancel",
        "hash": hash,
    })
}

/// Pull the work value out of a `work_generate` reply. An empty `work`
/// field is returned as-is; the coordinator decides what it is worth.
pub(crate) fn parse_work_response(peer: &str, body: Value) -> Result<String, TransportError> {
    let response: WorkGenerateResponse =
        serde_json::from_value(body).map_err(|e| TransportError::Malformed {
            peer: peer.to_string(),
            reason: e.to_string(),
        })?;
    if let Some(message) = response.error {
        return Err(TransportError::Peer {
            peer: peer.to_string(),
            message,
        });
    }
    response.work.ok_or_else(|| TransportError::Malformed {
        peer: peer.to_string(),
        reason: "missing work field".into(),
    })
}

#[async_trait]
impl PeerTransport for HttpPeerTransport {
    async fn request_work(
        &self,
        peer: &str,
        hash: &str,
        difficulty: &str,
    ) -> Result<String, TransportError> {
        let body = self.post(peer, &work_generate_body(hash, difficulty)).await?;
        parse_work_response(peer, body)
    }

    async fn cancel_work(&self, peer: &str, hash: &str) -> Result<(), TransportError> {
        self.post(peer, &work_cancel_body(hash)).await.map(|_| ())
    }
}

//! Nullable work peers: scripted answers, recorded calls, no sockets.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;
use custody_work::{PeerTransport, TransportError};
use tokio::sync::Notify;

/// How a scripted peer answers `work_generate`.
#[derive(Clone, Debug)]
pub enum PeerScript {
    /// Answer with `work` after `after`.
    Respond { work: String, after: Duration },
    /// Fail after `after`.
    Fail { after: Duration },
    /// Never answer.
    Hang,
}

impl PeerScript {
    pub fn respond(work: impl Into<String>, after: Duration) -> Self {
        Self::Respond {
            work: work.into(),
            after,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkRequest {
    pub peer: String,
    pub hash: String,
    pub difficulty: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelRequest {
    pub peer: String,
    pub hash: String,
}

#[derive(Default)]
struct Inner {
    scripts: HashMap<String, PeerScript>,
    requests: Vec<WorkRequest>,
    answered: usize,
    cancels: Vec<CancelRequest>,
    fail_cancels: bool,
}

/// A peer transport that plays back scripts instead of making HTTP calls.
/// Peers without a script fail immediately.
#[derive(Default)]
pub struct NullPeerTransport {
    inner: Mutex<Inner>,
    cancelled: Notify,
}

impl NullPeerTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how `peer` answers.
    pub fn script(&self, peer: impl Into<String>, script: PeerScript) -> &Self {
        self.lock().scripts.insert(peer.into(), script);
        self
    }

    /// Make every `cancel_work` call fail.
    pub fn fail_cancels(&self) -> &Self {
        self.lock().fail_cancels = true;
        self
    }

    /// Every `work_generate` received, in arrival order.
    pub fn requests(&self) -> Vec<WorkRequest> {
        self.lock().requests.clone()
    }

    /// How many `work_generate` calls have returned (successfully or not).
    pub fn answered(&self) -> usize {
        self.lock().answered
    }

    /// Every `work_cancel` received, in arrival order.
    pub fn cancels(&self) -> Vec<CancelRequest> {
        self.lock().cancels.clone()
    }

    /// Wait until at least `count` cancels have arrived.
    pub async fn wait_for_cancels(&self, count: usize) {
        loop {
            let notified = self.cancelled.notified();
            if self.lock().cancels.len() >= count {
                return;
            }
            notified.await;
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A panicking test thread is the only way to poison this.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl PeerTransport for NullPeerTransport {
    async fn request_work(
        &self,
        peer: &str,
        hash: &str,
        difficulty: &str,
    ) -> Result<String, TransportError> {
        let script = {
            let mut inner = self.lock();
            inner.requests.push(WorkRequest {
                peer: peer.to_string(),
                hash: hash.to_string(),
                difficulty: difficulty.to_string(),
            });
            inner.scripts.get(peer).cloned()
        };

        let outcome = match script {
            Some(PeerScript::Respond { work, after }) => {
                tokio::time::sleep(after).await;
                Ok(work)
            }
            Some(PeerScript::Fail { after }) => {
                tokio::time::sleep(after).await;
                Err(TransportError::Peer {
                    peer: peer.to_string(),
                    message: "scripted failure".into(),
                })
            }
            Some(PeerScript::Hang) => std::future::pending().await,
            None => Err(TransportError::Request {
                peer: peer.to_string(),
                reason: "no script for peer".into(),
            }),
        };
        self.lock().answered += 1;
        outcome
    }

    async fn cancel_work(&self, peer: &str, hash: &str) -> Result<(), TransportError> {
        let fail = {
            let mut inner = self.lock();
            inner.cancels.push(CancelRequest {
                peer: peer.to_string(),
                hash: hash.to_string(),
            });
            inner.fail_cancels
        };
        self.cancelled.notify_waiters();
        if fail {
            return Err(TransportError::Status {
                peer: peer.to_string(),
                status: 500,
            });
        }
        Ok(())
    }
}

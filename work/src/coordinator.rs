//! First-answer-wins work races across the peer pool.
//!
//! One task per peer delivers into a bounded channel sized to the pool, so
//! no producer ever waits for room. The consumer takes the first value or
//! gives up at the deadline, then flips `decided`; producers that finish
//! later see the flag (or a closed channel) and drop their result. Losing
//! requests are never aborted. They finish on their own and are ignored.

use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use custody_types::BlockHash;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::error::WorkError;
use crate::transport::PeerTransport;
use crate::validator::{parse_difficulty, parse_work, validate_work};

/// How long a race waits for the first answer.
pub const DEFAULT_WORK_TIMEOUT: Duration = Duration::from_secs(10);

pub struct WorkCoordinator {
    transport: Arc<dyn PeerTransport>,
    peers: Vec<String>,
    timeout: Duration,
    verify: bool,
}

impl WorkCoordinator {
    pub fn new(transport: Arc<dyn PeerTransport>, peers: Vec<String>) -> Self {
        Self {
            transport,
            peers,
            timeout: DEFAULT_WORK_TIMEOUT,
            verify: false,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check each answer locally before it may win.
    pub fn with_verification(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    pub fn peers(&self) -> &[String] {
        &self.peers
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Race the configured pool for work on `hash` at `difficulty`.
    pub async fn generate(&self, hash: &str, difficulty: &str) -> Result<String, WorkError> {
        self.generate_with(hash, difficulty, &self.peers).await
    }

    /// Race `peers` for work on `hash` at `difficulty`.
    ///
    /// Returns the first non-empty (and, with verification on, valid) work
    /// value. Every peer in `peers` is sent a cancel for `hash` once the race
    /// is decided, winner included.
    pub async fn generate_with(
        &self,
        hash: &str,
        difficulty: &str,
        peers: &[String],
    ) -> Result<String, WorkError> {
        if peers.is_empty() {
            return Err(WorkError::NoPeers);
        }
        let target = if self.verify {
            Some(verification_target(hash, difficulty)?)
        } else {
            None
        };

        let (tx, mut rx) = mpsc::channel::<String>(peers.len());
        let decided = Arc::new(AtomicBool::new(false));

        for peer in peers {
            let transport = Arc::clone(&self.transport);
            let decided = Arc::clone(&decided);
            let tx = tx.clone();
            let peer = peer.clone();
            let hash = hash.to_string();
            let difficulty = difficulty.to_string();

            tokio::spawn(async move {
                let work = match transport.request_work(&peer, &hash, &difficulty).await {
                    Ok(work) if work.is_empty() => {
                        debug!(%peer, "peer returned empty work");
                        return;
                    }
                    Ok(work) => work,
                    Err(e) => {
                        debug!(%peer, error = %e, "work request failed");
                        return;
                    }
                };
                if let Some((block_hash, threshold)) = target {
                    if !accepts(&block_hash, &work, threshold) {
                        debug!(%peer, %work, "peer returned insufficient work");
                        return;
                    }
                }
                if decided.load(Ordering::Acquire) {
                    debug!(%peer, "race already decided, discarding result");
                    return;
                }
                // Never full: capacity equals the pool size. Closed means decided.
                let _ = tx.try_send(work);
            });
        }
        // Only producers hold senders now, so `recv` yields `None` once all have given up.
        drop(tx);

        let outcome = tokio::select! {
            received = rx.recv() => match received {
                Some(work) => Ok(work),
                None => {
                    warn!(%hash, peers = peers.len(), "every work peer failed");
                    Err(WorkError::GenerationTimeout)
                }
            },
            _ = tokio::time::sleep(self.timeout) => {
                warn!(%hash, timeout_ms = self.timeout.as_millis() as u64, "work generation timed out");
                Err(WorkError::GenerationTimeout)
            }
        };
        decided.store(true, Ordering::Release);

        if let Ok(work) = &outcome {
            info!(%hash, %work, "work generated");
        }
        self.broadcast_cancel(hash, peers);
        outcome
    }

    /// Fire-and-forget `work_cancel` to every peer.
    fn broadcast_cancel(&self, hash: &str, peers: &[String]) {
        for peer in peers {
            let transport = Arc::clone(&self.transport);
            let peer = peer.clone();
            let hash = hash.to_string();
            tokio::spawn(async move {
                if let Err(e) = transport.cancel_work(&peer, &hash).await {
                    debug!(%peer, error = %e, "work cancel failed");
                }
            });
        }
    }
}

fn verification_target(hash: &str, difficulty: &str) -> Result<(BlockHash, u64), WorkError> {
    let block_hash = BlockHash::from_str(hash)
        .map_err(|e| WorkError::InvalidRequest(format!("hash: {e}")))?;
    let threshold = parse_difficulty(difficulty)
        .ok_or_else(|| WorkError::InvalidRequest(format!("difficulty: {difficulty:?}")))?;
    Ok((block_hash, threshold))
}

fn accepts(hash: &BlockHash, work: &str, difficulty: u64) -> bool {
    parse_work(work).is_some_and(|w| validate_work(hash, w, difficulty))
}

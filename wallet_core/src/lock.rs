//! Per-wallet mutual exclusion.
//!
//! Index allocation reads the current maximum and writes the next accounts;
//! the whole sequence runs under one lock keyed by wallet. Different keys
//! never contend.

use std::collections::HashMap;
use std::sync::{Arc, Condvar, Mutex};
use std::time::{Duration, Instant};

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LockError {
    #[error("timed out after {waited:?} waiting for lock {key}")]
    Timeout { key: String, waited: Duration },

    #[error("lock state poisoned")]
    Poisoned,
}

/// Releases its lock when dropped.
#[must_use = "the lock is released as soon as the guard is dropped"]
pub struct LockGuard {
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl LockGuard {
    pub fn new(release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// A blocking lock keyed by string.
pub trait WalletLock: Send + Sync {
    /// Block until `key` is free and take it. `None` waits forever.
    fn acquire(&self, key: &str, timeout: Option<Duration>) -> Result<LockGuard, LockError>;
}

#[derive(Default)]
struct Slot {
    held: Mutex<bool>,
    released: Condvar,
}

type Slots = Arc<Mutex<HashMap<String, Arc<Slot>>>>;

/// In-process [`WalletLock`]: one slot per key, created on first use and
/// dropped once nobody holds or waits on it.
#[derive(Default)]
pub struct KeyedLock {
    slots: Slots,
}

impl KeyedLock {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, key: &str) -> Result<Arc<Slot>, LockError> {
        let mut slots = self.slots.lock().map_err(|_| LockError::Poisoned)?;
        Ok(Arc::clone(slots.entry(key.to_string()).or_default()))
    }

    /// Number of keys currently held or waited on.
    pub fn len(&self) -> usize {
        self.slots.lock().map(|s| s.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Remove `key`'s slot if the map and the caller hold the only references.
fn forget_if_idle(slots: &Mutex<HashMap<String, Arc<Slot>>>, key: &str, slot: &Arc<Slot>) {
    if let Ok(mut slots) = slots.lock() {
        let current = slots.get(key).is_some_and(|s| Arc::ptr_eq(s, slot));
        if current && Arc::strong_count(slot) == 2 {
            slots.remove(key);
        }
    }
}

fn take(slot: &Slot, key: &str, timeout: Option<Duration>) -> Result<(), LockError> {
    let started = Instant::now();
    let mut held = slot.held.lock().map_err(|_| LockError::Poisoned)?;
    while *held {
        held = match timeout {
            None => slot.released.wait(held).map_err(|_| LockError::Poisoned)?,
            Some(limit) => {
                let remaining = limit.saturating_sub(started.elapsed());
                if remaining.is_zero() {
                    return Err(LockError::Timeout {
                        key: key.to_string(),
                        waited: started.elapsed(),
                    });
                }
                slot.released
                    .wait_timeout(held, remaining)
                    .map_err(|_| LockError::Poisoned)?
                    .0
            }
        };
    }
    *held = true;
    Ok(())
}

impl WalletLock for KeyedLock {
    fn acquire(&self, key: &str, timeout: Option<Duration>) -> Result<LockGuard, LockError> {
        let slot = self.slot(key)?;
        if let Err(e) = take(&slot, key, timeout) {
            forget_if_idle(&self.slots, key, &slot);
            return Err(e);
        }

        let slots = Arc::clone(&self.slots);
        let key = key.to_string();
        Ok(LockGuard::new(move || {
            if let Ok(mut held) = slot.held.lock() {
                *held = false;
            }
            slot.released.notify_one();
            forget_if_idle(&slots, &key, &slot);
        }))
    }
}

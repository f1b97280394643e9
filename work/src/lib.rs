//! Proof-of-work coordination.
//!
//! Work is never computed locally. Every request is fanned out to a pool of
//! independently operated work peers; the first usable answer wins and every
//! peer is told to stop. Peers are untrusted and unreliable, so a failed or
//! silent peer simply does not vote.

pub mod coordinator;
pub mod error;
pub mod http;
pub mod thresholds;
pub mod transport;
pub mod validator;

pub use coordinator::{WorkCoordinator, DEFAULT_WORK_TIMEOUT};
pub use error::WorkError;
pub use http::HttpPeerTransport;
pub use thresholds::{default_difficulty, format_difficulty, WorkKind};
pub use transport::{PeerTransport, TransportError};
pub use validator::{parse_difficulty, parse_work, validate_work, work_value};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorkError {
    #[error("unable to generate work: no peer produced a result in time")]
    GenerationTimeout,

    #[error("no work peers configured")]
    NoPeers,

    #[error("invalid work request: {0}")]
    InvalidRequest(String),
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("members request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("members endpoint returned status {status}")]
    Status { status: u16 },
    #[error("members payload is not a valid member list: {0}")]
    Decode(#[from] serde_json::Error),
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackfillError {
    #[error("gh not found: install the GitHub CLI and run 'gh auth login'")]
    GhNotFound,

    #[error("failed to spawn gh: {0}")]
    Spawn(String),

    #[error("failed to list open issues: {0}")]
    ListFailed(String),
}

pub type Result<T> = std::result::Result<T, BackfillError>;

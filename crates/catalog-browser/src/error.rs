use thiserror::Error;

#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("failed to write frame: {0}")]
    Io(#[from] std::io::Error),
}

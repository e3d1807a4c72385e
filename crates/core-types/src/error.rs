use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoreError {
    #[error("Unknown factor identifier: {0}")]
    UnknownFactor(String),
}

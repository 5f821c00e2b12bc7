use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unrecognised sex value: {0}")]
    InvalidSex(String),
    #[error("unrecognised season value: {0}")]
    InvalidSeason(String),
    #[error("unrecognised medal value: {0}")]
    InvalidMedal(String),
    #[error("unrecognised year selection: {0}")]
    InvalidYear(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;

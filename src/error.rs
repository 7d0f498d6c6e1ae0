use std::error::Error;

use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum DohDigError {
    #[error("unsupported {0} variant: `{1}`")]
    UnsupportedVariant(String, String),
    #[error("error parsing the url for `{0}`: `{1}`")]
    UrlConstruction(String, String),
    #[error("error sending the HTTP request: `{0}`")]
    Transport(String),
    #[error("error unmarshalling the response: `{0}`")]
    Parse(String),
    #[error("unsupported provider: `{0}`")]
    UnknownProvider(String),
}

pub type Result<T> = std::result::Result<T, DohDigError>;

pub fn map_transport_err(err: &impl Error) -> DohDigError {
    DohDigError::Transport(err.to_string())
}

pub fn map_parse_err(err: &impl Error) -> DohDigError {
    DohDigError::Parse(err.to_string())
}

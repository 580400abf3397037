use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Custom(String),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("{0}")]
    Parse(#[from] url::ParseError),
    ///the API server could not be reached or the response could not be read
    #[error("can't connect to API server on URL {url}: {source}")]
    Transport {
        url: String,
        source: reqwest::Error,
    },
    ///the response does not match the function data model
    #[error("can't decode response from {url}: {reason}")]
    Decode { url: String, reason: String },
    #[error("function \"{name}\" not found in namespace \"{namespace}\"")]
    NotFound { namespace: String, name: String },
    #[error("unauthorized access to {0}, check the credentials of your API server proxy")]
    Unauthorized(String),
    #[error("Server returned unexpected status code {status} and body {body}")]
    UnexpectedStatus { status: u16, body: String },
    #[error("can't encode function list: {0}")]
    Encode(String),
    #[error("invalid config file: {0}")]
    Config(String),
    #[error("invalid output format \"{0}\", must be one of: table, wide, json, yaml")]
    InvalidFormat(String),
}

pub type Result<T> = std::result::Result<T, crate::Error>;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid comments endpoint '{url}': {source}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("comments request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("comments endpoint returned HTTP {status}")]
    Status { status: u16 },
    #[error("comments response is not a list of named records: {0}")]
    Decode(#[source] reqwest::Error),
}


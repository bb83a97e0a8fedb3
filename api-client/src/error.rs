use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid base url `{url}`: {source}")]
    BaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx reply. `message` is the server's own error text when the
    /// body carried one, otherwise the raw body.
    #[error("server returned {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("no entity matched object id `{object_id}`")]
    NotFound { object_id: String },
}

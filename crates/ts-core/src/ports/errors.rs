use thiserror::Error;

/// Failure of a call to the tutoring-school API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("request could not be sent: {0}")]
    Transport(String),

    #[error("server responded with {status}: {message}")]
    Status { status: u16, message: String },

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("resource not found")]
    NotFound,
}

/// Failure to upload a local image to remote storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("cannot read local image: {0}")]
    Io(String),

    #[error("upload could not be sent: {0}")]
    Transport(String),

    #[error("storage rejected upload: {0}")]
    Rejected(String),
}

#[derive(Debug, Error)]
pub enum SelectionStoreError {
    #[error("selection store I/O failed: {0}")]
    Io(String),

    #[error("selection store data corrupt: {0}")]
    Corrupt(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PostalCodeError {
    #[error("postal code not found")]
    NotFound,

    #[error("postal code lookup failed: {0}")]
    Lookup(String),
}

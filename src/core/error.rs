use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum EsgError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A JSON body could not be parsed or serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A report could not be written as CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A local file could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The server returned an unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
        /// The `message`/`error`/`detail` field of the error body, if the server sent one.
        message: Option<String>,
    },

    /// A required form field is missing or invalid. Raised before any request is sent.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The object storage rejected an upload.
    #[error("Storage upload failed: {0}")]
    Storage(String),

    /// The data received from the API was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),
}

/// Maps an HTTP status code to the message shown to the user.
#[must_use]
pub const fn status_message(status: u16) -> &'static str {
    match status {
        400 => "Bad request. Please check the submitted data.",
        401 => "Your session has expired. Please sign in again.",
        403 => "You do not have permission to perform this action.",
        404 => "The requested data was not found.",
        422 => "The submitted data is invalid.",
        500 => "Internal server error. Please try again later.",
        503 => "The service is temporarily unavailable. Please try again later.",
        _ => "An unexpected error occurred. Please try again.",
    }
}

impl EsgError {
    /// Returns the text to surface in an error banner or toast notification.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { status, .. } => status_message(*status).to_string(),
            Self::Validation(msg) | Self::Storage(msg) => msg.clone(),
            Self::Http(e) if e.is_timeout() => "The request timed out. Please try again.".into(),
            Self::Http(_) => "Unable to reach the server. Check your connection.".into(),
            Self::Json(_) | Self::Data(_) => "The server returned data in an unexpected format.".into(),
            Self::Url(_) | Self::Csv(_) | Self::Io(_) => status_message(0).to_string(),
        }
    }

    /// The HTTP status code behind this error, if it came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

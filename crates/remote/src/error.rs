/// Errors from any upstream API client.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("Upstream request failed: {0}")]
    Unreachable(#[from] reqwest::Error),

    /// The upstream returned a non-2xx status code.
    #[error("Upstream rejected request ({status}): {body}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Raw response body for logging.
        body: String,
    },

    /// The upstream responded 2xx but the payload did not match the
    /// expected shape.
    #[error("Malformed upstream payload: {0}")]
    Malformed(String),
}

impl RemoteError {
    /// The upstream status code, when the upstream answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            RemoteError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

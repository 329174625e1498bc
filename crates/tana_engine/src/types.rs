use std::fmt;

/// Raw body of a fetched page plus what the transport learned about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub bytes: Vec<u8>,
    pub requested_url: String,
    pub final_url: String,
    pub redirect_count: usize,
    pub content_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Why a live page could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    UnsupportedContentType { content_type: String },
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => f.write_str("not a valid page address"),
            FailureKind::HttpStatus(code) => write!(f, "server answered {code}"),
            FailureKind::Timeout => f.write_str("page took too long"),
            FailureKind::RedirectLimitExceeded => f.write_str("too many redirects"),
            FailureKind::TooLarge {
                max_bytes,
                actual: Some(actual),
            } => write!(f, "page is {actual} bytes, limit is {max_bytes}"),
            FailureKind::TooLarge {
                max_bytes,
                actual: None,
            } => write!(f, "page exceeds {max_bytes} bytes"),
            FailureKind::UnsupportedContentType { content_type } => {
                write!(f, "{content_type} is not a page type")
            }
            FailureKind::Network => f.write_str("network failure"),
        }
    }
}

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use std::time::Duration;

use clip_logging::{clip_debug, clip_info};
use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;

use crate::{FailureKind, FetchError, FetchedPage};

/// Transport limits for the live-page mode.
#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub redirect_limit: usize,
    pub max_bytes: u64,
    /// Media types accepted as a page; parameters such as `charset` are ignored.
    pub allowed_content_types: Vec<String>,
    pub user_agent: String,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            redirect_limit: 5,
            max_bytes: 5 * 1024 * 1024,
            allowed_content_types: ["text/html", "application/xhtml+xml"]
                .map(String::from)
                .to_vec(),
            user_agent: concat!("tana-paste/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl FetchSettings {
    fn accepts(&self, content_type: &str) -> bool {
        let media_type = media_type(content_type);
        self.allowed_content_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(media_type))
    }

    fn check_size(&self, actual: u64) -> Result<(), FetchError> {
        if actual <= self.max_bytes {
            return Ok(());
        }
        Err(FetchError::new(
            FailureKind::TooLarge {
                max_bytes: self.max_bytes,
                actual: Some(actual),
            },
            "response too large",
        ))
    }
}

/// Loads a page for the collector. Implemented over HTTP by [`ReqwestFetcher`];
/// tests can substitute their own.
#[async_trait::async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError>;
}

#[derive(Debug, Clone, Default)]
pub struct ReqwestFetcher {
    settings: FetchSettings,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    /// Builds a client whose redirect policy records the hop count in `hops`.
    fn client(&self, hops: Arc<AtomicUsize>) -> Result<reqwest::Client, FetchError> {
        let limit = self.settings.redirect_limit;
        let policy = reqwest::redirect::Policy::custom(move |attempt| {
            let seen = attempt.previous().len();
            hops.store(seen, Ordering::Relaxed);
            if seen >= limit {
                attempt.error("redirect limit exceeded")
            } else {
                attempt.follow()
            }
        });

        reqwest::Client::builder()
            .user_agent(self.settings.user_agent.as_str())
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .redirect(policy)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, FetchError> {
        let mut body = Vec::new();
        let mut chunks = response.bytes_stream();
        while let Some(chunk) = chunks.next().await {
            let chunk = chunk.map_err(classify)?;
            self.settings
                .check_size((body.len() + chunk.len()) as u64)?;
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }
}

#[async_trait::async_trait]
impl PageFetcher for ReqwestFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let target = reqwest::Url::parse(url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let hops = Arc::new(AtomicUsize::new(0));
        let client = self.client(Arc::clone(&hops))?;

        clip_info!("Fetching page {}", target);
        let response = client.get(target).send().await.map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }
        if let Some(declared) = response.content_length() {
            self.settings.check_size(declared)?;
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        if let Some(declared) = content_type.as_deref() {
            if !self.settings.accepts(declared) {
                return Err(FetchError::new(
                    FailureKind::UnsupportedContentType {
                        content_type: declared.to_string(),
                    },
                    "not an HTML page",
                ));
            }
        }

        let final_url = response.url().to_string();
        let bytes = self.read_body(response).await?;
        let redirect_count = hops.load(Ordering::Relaxed);
        clip_debug!(
            "Page {} gave {} bytes after {} redirect(s)",
            final_url,
            bytes.len(),
            redirect_count
        );

        Ok(FetchedPage {
            bytes,
            requested_url: url.to_string(),
            final_url,
            redirect_count,
            content_type,
        })
    }
}

/// `text/html; charset=utf-8` -> `text/html`.
fn media_type(content_type: &str) -> &str {
    content_type
        .split(';')
        .next()
        .map(str::trim)
        .unwrap_or_default()
}

fn classify(err: reqwest::Error) -> FetchError {
    let kind = if err.is_timeout() {
        FailureKind::Timeout
    } else if err.is_redirect() {
        FailureKind::RedirectLimitExceeded
    } else {
        FailureKind::Network
    };
    FetchError::new(kind, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_media_types_are_accepted_with_parameters() {
        let settings = FetchSettings::default();
        assert!(settings.accepts("text/html; charset=ISO-8859-1"));
        assert!(settings.accepts("Application/XHTML+XML"));
        assert!(!settings.accepts("application/pdf"));
    }

    #[test]
    fn size_check_reports_limit() {
        let settings = FetchSettings {
            max_bytes: 4,
            ..FetchSettings::default()
        };
        assert!(settings.check_size(4).is_ok());
        let err = settings.check_size(5).unwrap_err();
        assert_eq!(
            err.kind,
            FailureKind::TooLarge {
                max_bytes: 4,
                actual: Some(5)
            }
        );
    }
}

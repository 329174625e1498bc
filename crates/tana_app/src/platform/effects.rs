use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clip_logging::{clip_debug, clip_info, clip_warn};
use tana_core::{
    update, ClipState, ClipView, Effect, Msg, Options, OptionsOverride, PageRecord, Trigger,
};
use tana_engine::{
    clip_live_page, compose, decode_html, CollectError, DecodeError, FetchSettings,
    LiveClipError, PageCollector, ReqwestFetcher, SelectionSource,
};
use thiserror::Error;

use super::clipboard::FallbackClipboard;
use super::notify::Notifier;

/// What a clip request reads its page from.
#[derive(Debug, Clone)]
pub enum PageSource {
    /// Saved HTML document plus the address it came from.
    Document {
        path: PathBuf,
        url: String,
        selector: Option<String>,
    },
    /// JSON page record.
    Record { path: PathBuf },
    /// Page fetched over HTTP.
    Live { url: String, selector: Option<String> },
}

impl PageSource {
    fn describe(&self) -> String {
        match self {
            PageSource::Document { path, .. } | PageSource::Record { path } => {
                path.display().to_string()
            }
            PageSource::Live { url, .. } => url.clone(),
        }
    }
}

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to read {path}: {source}")]
    Io { path: String, source: io::Error },
    #[error("invalid page record: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Collect(#[from] CollectError),
    #[error(transparent)]
    Live(#[from] LiveClipError),
    #[error("async runtime unavailable: {0}")]
    Runtime(io::Error),
}

/// Runs the clip session: feeds messages through [`update`] and performs the
/// effects it returns until the queue drains.
pub struct EffectRunner {
    state: ClipState,
    clipboard: FallbackClipboard,
    notifier: Box<dyn Notifier>,
    fetch_settings: FetchSettings,
    runtime: Option<tokio::runtime::Runtime>,
}

impl EffectRunner {
    pub fn new(options: Options, clipboard: FallbackClipboard, notifier: Box<dyn Notifier>) -> Self {
        let mut runner = Self {
            state: ClipState::new(),
            clipboard,
            notifier,
            fetch_settings: FetchSettings::default(),
            runtime: None,
        };
        runner.options_changed(options);
        runner
    }

    pub fn view(&self) -> ClipView {
        self.state.view()
    }

    pub fn options_changed(&mut self, options: Options) {
        self.dispatch(Msg::OptionsLoaded(options), None);
    }

    /// Runs one clip from request to notification.
    pub fn clip(&mut self, source: &PageSource, trigger: Trigger, overrides: OptionsOverride) {
        clip_info!("Clip requested from {} ({:?})", source.describe(), trigger);
        self.dispatch(Msg::CopyRequested { trigger, overrides }, Some(source));
    }

    fn dispatch(&mut self, msg: Msg, source: Option<&PageSource>) {
        let mut queue = VecDeque::from([msg]);
        while let Some(msg) = queue.pop_front() {
            let state = std::mem::take(&mut self.state);
            let (next, effects) = update(state, msg);
            self.state = next;
            for effect in effects {
                if let Some(follow_up) = self.perform(effect, source) {
                    queue.push_back(follow_up);
                }
            }
        }
    }

    fn perform(&mut self, effect: Effect, source: Option<&PageSource>) -> Option<Msg> {
        match effect {
            Effect::BuildOutline { options } => {
                let Some(source) = source else {
                    return Some(Msg::OutlineFailed("no page to clip".to_string()));
                };
                match self.build_outline(source, &options) {
                    Ok(outline) => {
                        clip_debug!("Built outline with {} lines", outline.lines().count());
                        Some(Msg::OutlineBuilt(outline))
                    }
                    Err(err) => {
                        clip_warn!("Building outline from {} failed: {}", source.describe(), err);
                        Some(Msg::OutlineFailed(err.to_string()))
                    }
                }
            }
            Effect::WriteClipboard { text } => Some(Msg::CopyFinished(self.clipboard.copy(&text))),
            Effect::Notify { message, is_error } => {
                self.notifier.notify(&message, is_error);
                None
            }
        }
    }

    fn build_outline(&mut self, source: &PageSource, options: &Options) -> Result<String, BuildError> {
        match source {
            PageSource::Record { path } => {
                let text = read_file(path)?;
                let record: PageRecord = serde_json::from_slice(&text)?;
                Ok(compose(&record, options))
            }
            PageSource::Document {
                path,
                url,
                selector,
            } => {
                let bytes = read_file(path)?;
                let decoded = decode_html(&bytes, None)?;
                let selection = match selector.as_deref() {
                    Some(css) => SelectionSource::Css(css),
                    None => SelectionSource::Nothing,
                };
                let record = PageCollector.collect(&decoded.html, url, selection)?;
                Ok(compose(&record, options))
            }
            PageSource::Live { url, selector } => {
                let selection = match selector.as_deref() {
                    Some(css) => SelectionSource::Css(css),
                    None => SelectionSource::ArticleHeuristic,
                };
                let fetcher = ReqwestFetcher::new(self.fetch_settings.clone());
                let runtime = self.runtime()?;
                let (_, outline) =
                    runtime.block_on(clip_live_page(&fetcher, url, selection, options))?;
                Ok(outline)
            }
        }
    }

    fn runtime(&mut self) -> Result<&tokio::runtime::Runtime, BuildError> {
        if self.runtime.is_none() {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .map_err(BuildError::Runtime)?;
            self.runtime = Some(runtime);
        }
        self.runtime
            .as_ref()
            .ok_or_else(|| BuildError::Runtime(io::Error::other("runtime missing")))
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>, BuildError> {
    fs::read(path).map_err(|source| BuildError::Io {
        path: path.display().to_string(),
        source,
    })
}

use clip_logging::clip_info;
use tana_core::{Options, PageRecord};

use crate::{
    compose, decode_html, CollectError, DecodeError, FetchError, PageCollector, PageFetcher,
    SelectionSource,
};

#[derive(Debug, thiserror::Error)]
pub enum LiveClipError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("decode failed: {0}")]
    Decode(#[from] DecodeError),
    #[error("collect failed: {0}")]
    Collect(#[from] CollectError),
}

/// Fetches a live page, treats its article body as the selection and returns
/// the record together with the composed outline.
pub async fn clip_live_page(
    fetcher: &dyn PageFetcher,
    url: &str,
    selection: SelectionSource<'_>,
    options: &Options,
) -> Result<(PageRecord, String), LiveClipError> {
    let page = fetcher.fetch(url).await?;
    let decoded = decode_html(&page.bytes, page.content_type.as_deref())?;
    let record = PageCollector.collect(&decoded.html, &page.final_url, selection)?;
    let outline = compose(&record, options);
    clip_info!(
        "clipped {} ({} encoded as {})",
        page.final_url,
        page.bytes.len(),
        decoded.encoding_label
    );
    Ok((record, outline))
}

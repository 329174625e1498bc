//! Tana Paste engine: fragment linearization, outline composition and the
//! IO helpers (decode, fetch, persist) around them.
mod collect;
mod compose;
mod dates;
mod decode;
mod fetch;
mod linearize;
mod live;
mod persist;
mod types;

pub use collect::{CollectError, PageCollector, SelectionSource};
pub use compose::compose;
pub use dates::{extract_first_date, normalize_date};
pub use decode::{decode_html, DecodeError, DecodedHtml};
pub use fetch::{FetchSettings, PageFetcher, ReqwestFetcher};
pub use linearize::linearize;
pub use live::{clip_live_page, LiveClipError};
pub use persist::{ensure_dir, AtomicFileWriter, PersistError};
pub use types::{FailureKind, FetchError, FetchedPage};

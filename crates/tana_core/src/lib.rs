//! Tana Paste core: pure data types and the clip-session state machine.
mod effect;
mod msg;
mod options;
mod page;
mod state;
mod update;

pub use effect::Effect;
pub use msg::{CopyOutcome, Msg, Trigger};
pub use options::{Options, OptionsOverride, Strictness, DEFAULT_TAG};
pub use page::PageRecord;
pub use state::{ClipPhase, ClipState, ClipView};
pub use update::{
    update, MSG_BUILD_FAILED, MSG_COPIED, MSG_COPY_FAILED,
};

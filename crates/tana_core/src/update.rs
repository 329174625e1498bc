use crate::{ClipPhase, ClipState, CopyOutcome, Effect, Msg};

pub const MSG_COPIED: &str = "Copied to Tana format";
pub const MSG_COPY_FAILED: &str = "Failed to copy to clipboard";
pub const MSG_BUILD_FAILED: &str = "Failed to build Tana paste";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ClipState, msg: Msg) -> (ClipState, Vec<Effect>) {
    let effects = match msg {
        Msg::OptionsLoaded(options) => {
            state.set_options(options);
            Vec::new()
        }
        Msg::CopyRequested { trigger, overrides } => {
            // One clip at a time; a second request while busy is dropped.
            if state.phase() != ClipPhase::Idle {
                return (state, Vec::new());
            }
            let overrides = trigger.options_override().layered(&overrides);
            let options = state.options().merged(&overrides);
            state.begin_build();
            vec![Effect::BuildOutline { options }]
        }
        Msg::OutlineBuilt(text) => {
            if state.phase() != ClipPhase::Building {
                return (state, Vec::new());
            }
            if text.trim().is_empty() {
                state.finish(false);
                notify(&state, MSG_BUILD_FAILED, true)
            } else {
                state.begin_copy(text.clone());
                vec![Effect::WriteClipboard { text }]
            }
        }
        Msg::OutlineFailed(_) => {
            if state.phase() != ClipPhase::Building {
                return (state, Vec::new());
            }
            state.finish(false);
            notify(&state, MSG_BUILD_FAILED, true)
        }
        Msg::CopyFinished(CopyOutcome { ok, .. }) => {
            if state.phase() != ClipPhase::Copying {
                return (state, Vec::new());
            }
            state.finish(ok);
            if ok {
                notify(&state, MSG_COPIED, false)
            } else {
                notify(&state, MSG_COPY_FAILED, true)
            }
        }
    };

    (state, effects)
}

fn notify(state: &ClipState, message: &str, is_error: bool) -> Vec<Effect> {
    if !state.options().notification_enabled {
        return Vec::new();
    }
    vec![Effect::Notify {
        message: message.to_string(),
        is_error,
    }]
}

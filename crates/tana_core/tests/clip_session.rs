use std::sync::Once;

use pretty_assertions::assert_eq;
use tana_core::{
    update, ClipPhase, ClipState, CopyOutcome, Effect, Msg, Options, OptionsOverride, Trigger,
    MSG_BUILD_FAILED, MSG_COPIED, MSG_COPY_FAILED,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(clip_logging::initialize_for_tests);
}

fn request(state: ClipState, trigger: Trigger) -> (ClipState, Vec<Effect>) {
    update(
        state,
        Msg::CopyRequested {
            trigger,
            overrides: OptionsOverride::default(),
        },
    )
}

#[test]
fn default_trigger_builds_with_stored_options() {
    init_logging();
    let (state, effects) = request(ClipState::new(), Trigger::Default);

    assert_eq!(state.phase(), ClipPhase::Building);
    assert_eq!(
        effects,
        vec![Effect::BuildOutline {
            options: Options::default()
        }]
    );
}

#[test]
fn selection_only_override_is_not_persisted() {
    init_logging();
    let (state, effects) = request(ClipState::new(), Trigger::SelectionOnly);

    let Effect::BuildOutline { options } = &effects[0] else {
        panic!("expected build effect, got {effects:?}");
    };
    assert!(!options.include_metadata);
    assert!(state.options().include_metadata);
}

#[test]
fn with_metadata_trigger_beats_stored_false() {
    init_logging();
    let stored = Options {
        include_metadata: false,
        ..Options::default()
    };
    let (_state, effects) = request(ClipState::with_options(stored), Trigger::WithMetadata);
    assert!(matches!(
        &effects[0],
        Effect::BuildOutline { options } if options.include_metadata
    ));
}

#[test]
fn explicit_overrides_stack_over_trigger() {
    init_logging();
    let overrides = OptionsOverride {
        include_metadata: Some(true),
        default_tag: Some("read-later".into()),
        ..OptionsOverride::default()
    };
    let (_state, effects) = update(
        ClipState::new(),
        Msg::CopyRequested {
            trigger: Trigger::SelectionOnly,
            overrides,
        },
    );
    let Effect::BuildOutline { options } = &effects[0] else {
        panic!("expected build effect");
    };
    assert!(options.include_metadata);
    assert_eq!(options.default_tag, "read-later");
}

#[test]
fn full_cycle_copies_and_notifies() {
    init_logging();
    let (state, _) = request(ClipState::new(), Trigger::Shortcut);
    let (state, effects) = update(state, Msg::OutlineBuilt("- Title #webclip".into()));
    assert_eq!(state.phase(), ClipPhase::Copying);
    assert_eq!(
        effects,
        vec![Effect::WriteClipboard {
            text: "- Title #webclip".into()
        }]
    );

    let (state, effects) = update(state, Msg::CopyFinished(CopyOutcome::success()));
    assert_eq!(
        effects,
        vec![Effect::Notify {
            message: MSG_COPIED.into(),
            is_error: false
        }]
    );
    let view = state.view();
    assert_eq!(view.phase, ClipPhase::Idle);
    assert_eq!(view.copies, 1);
    assert_eq!(view.last_outline.as_deref(), Some("- Title #webclip"));
}

#[test]
fn copy_failure_reports_error() {
    init_logging();
    let (state, _) = request(ClipState::new(), Trigger::Default);
    let (state, _) = update(state, Msg::OutlineBuilt("- x".into()));
    let (state, effects) = update(
        state,
        Msg::CopyFinished(CopyOutcome::failure("permission denied")),
    );
    assert_eq!(
        effects,
        vec![Effect::Notify {
            message: MSG_COPY_FAILED.into(),
            is_error: true
        }]
    );
    assert_eq!(state.view().failures, 1);
}

#[test]
fn empty_outline_is_a_build_failure() {
    init_logging();
    let (state, _) = request(ClipState::new(), Trigger::Default);
    let (state, effects) = update(state, Msg::OutlineBuilt("   ".into()));
    assert_eq!(state.phase(), ClipPhase::Idle);
    assert_eq!(
        effects,
        vec![Effect::Notify {
            message: MSG_BUILD_FAILED.into(),
            is_error: true
        }]
    );
}

#[test]
fn notifications_respect_stored_setting() {
    init_logging();
    let quiet = Options {
        notification_enabled: false,
        ..Options::default()
    };
    let (state, _) = request(ClipState::with_options(quiet), Trigger::Default);
    let (state, effects) = update(state, Msg::OutlineFailed("no tab".into()));
    assert!(effects.is_empty());
    assert_eq!(state.view().failures, 1);
}

#[test]
fn requests_while_busy_are_ignored() {
    init_logging();
    let (state, _) = request(ClipState::new(), Trigger::Default);
    let (state, effects) = request(state, Trigger::SelectionOnly);
    assert!(effects.is_empty());
    assert_eq!(state.phase(), ClipPhase::Building);
}

#[test]
fn stray_completions_are_ignored_when_idle() {
    init_logging();
    let (state, effects) = update(ClipState::new(), Msg::OutlineBuilt("- x".into()));
    assert!(effects.is_empty());
    let (state, effects) = update(state, Msg::CopyFinished(CopyOutcome::success()));
    assert!(effects.is_empty());
    assert_eq!(state.view().copies, 0);
}

#[test]
fn options_change_applies_to_next_request() {
    init_logging();
    let changed = Options {
        default_tag: "article".into(),
        ..Options::default()
    };
    let (state, effects) = update(ClipState::new(), Msg::OptionsLoaded(changed.clone()));
    assert!(effects.is_empty());
    let (_state, effects) = request(state, Trigger::Default);
    assert_eq!(effects, vec![Effect::BuildOutline { options: changed }]);
}

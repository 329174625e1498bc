use crate::{Options, OptionsOverride};

/// Entry point the user picked to start a clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Top-level "Copy as Tana Paste" menu item.
    Default,
    /// "Copy (with metadata)" submenu item.
    WithMetadata,
    /// "Copy (selection only)" submenu item.
    SelectionOnly,
    /// Keyboard shortcut.
    Shortcut,
}

impl Trigger {
    pub fn options_override(self) -> OptionsOverride {
        match self {
            Trigger::Default | Trigger::Shortcut => OptionsOverride::default(),
            Trigger::WithMetadata => OptionsOverride::include_metadata(true),
            Trigger::SelectionOnly => OptionsOverride::include_metadata(false),
        }
    }
}

/// Result reported by the clipboard collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyOutcome {
    pub ok: bool,
    pub err: Option<String>,
}

impl CopyOutcome {
    pub fn success() -> Self {
        Self { ok: true, err: None }
    }

    pub fn failure(err: impl Into<String>) -> Self {
        Self {
            ok: false,
            err: Some(err.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Stored options were loaded or changed on disk.
    OptionsLoaded(Options),
    /// User asked for a clip. `overrides` stack on top of the trigger's own.
    CopyRequested {
        trigger: Trigger,
        overrides: OptionsOverride,
    },
    /// The outline text was built for the in-flight request.
    OutlineBuilt(String),
    /// Collecting the page or building the outline failed.
    OutlineFailed(String),
    /// Clipboard write finished.
    CopyFinished(CopyOutcome),
}

use serde::{Deserialize, Serialize};

pub const DEFAULT_TAG: &str = "webclip";

/// How aggressively the composer drops article chrome from the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    /// Drop boilerplate stop-phrases ("Share this", "Related", ...) and
    /// degenerate one-character or punctuation-only lines.
    #[default]
    Strict,
    /// Keep every line that is not metadata-shaped or an image embed.
    Lenient,
}

/// User configuration for one transformation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    pub include_metadata: bool,
    pub default_tag: String,
    pub notification_enabled: bool,
    pub omit_empty_metadata: bool,
    pub strictness: Strictness,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            include_metadata: true,
            default_tag: DEFAULT_TAG.to_string(),
            notification_enabled: true,
            omit_empty_metadata: true,
            strictness: Strictness::Strict,
        }
    }
}

impl Options {
    /// Returns a copy of `self` with every field set in `overrides` replaced.
    /// `self` is left untouched.
    pub fn merged(&self, overrides: &OptionsOverride) -> Options {
        Options {
            include_metadata: overrides.include_metadata.unwrap_or(self.include_metadata),
            default_tag: overrides
                .default_tag
                .clone()
                .unwrap_or_else(|| self.default_tag.clone()),
            notification_enabled: overrides
                .notification_enabled
                .unwrap_or(self.notification_enabled),
            omit_empty_metadata: overrides
                .omit_empty_metadata
                .unwrap_or(self.omit_empty_metadata),
            strictness: overrides.strictness.unwrap_or(self.strictness),
        }
    }

    /// `" #tag"` for the parent line, or an empty string when no tag is set.
    pub fn tag_suffix(&self) -> String {
        let tag = self.default_tag.trim();
        if tag.is_empty() {
            String::new()
        } else {
            format!(" #{tag}")
        }
    }
}

/// Per-invocation partial configuration. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionsOverride {
    pub include_metadata: Option<bool>,
    pub default_tag: Option<String>,
    pub notification_enabled: Option<bool>,
    pub omit_empty_metadata: Option<bool>,
    pub strictness: Option<Strictness>,
}

impl OptionsOverride {
    pub fn include_metadata(include: bool) -> Self {
        Self {
            include_metadata: Some(include),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Stacks `top` over `self`: fields set in `top` win.
    pub fn layered(&self, top: &OptionsOverride) -> OptionsOverride {
        OptionsOverride {
            include_metadata: top.include_metadata.or(self.include_metadata),
            default_tag: top.default_tag.clone().or_else(|| self.default_tag.clone()),
            notification_enabled: top.notification_enabled.or(self.notification_enabled),
            omit_empty_metadata: top.omit_empty_metadata.or(self.omit_empty_metadata),
            strictness: top.strictness.or(self.strictness),
        }
    }
}

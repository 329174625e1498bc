use serde::{Deserialize, Serialize};

/// Snapshot of a page and the user's selection, taken once per clip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageRecord {
    pub title: String,
    pub url: String,
    pub author: String,
    pub publication: String,
    pub date: String,
    pub image: String,
    /// Plain-text rendering of the selection.
    #[serde(alias = "selectionText")]
    pub selection: String,
    /// Serialized markup of the selection, when the page had one.
    pub selection_html: Option<String>,
}

impl PageRecord {
    /// Selection markup, treating a missing fragment as empty.
    pub fn selection_markup(&self) -> &str {
        self.selection_html.as_deref().unwrap_or("")
    }
}

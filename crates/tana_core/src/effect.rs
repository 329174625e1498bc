use crate::Options;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Collect the page and compose the outline with these effective options.
    BuildOutline { options: Options },
    WriteClipboard { text: String },
    Notify { message: String, is_error: bool },
}

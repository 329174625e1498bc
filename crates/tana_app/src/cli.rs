use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tana_core::{OptionsOverride, Strictness, Trigger};

use crate::platform::settings::DEFAULT_SETTINGS_FILE;

#[derive(Parser, Debug)]
#[command(name = "tana-paste")]
#[command(version)]
#[command(about = "Copy web page selections as Tana Paste outlines", long_about = None)]
pub struct Cli {
    /// Stored options file (RON)
    #[arg(long, global = true, value_name = "FILE", default_value = DEFAULT_SETTINGS_FILE)]
    pub settings: PathBuf,

    /// Also write logs to this file
    #[arg(long, global = true, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Clip a saved HTML page or one or more JSON page records
    Clip(ClipArgs),

    /// Fetch a live page and clip its article body
    Fetch(FetchArgs),

    /// Show or change the stored options
    Options {
        #[command(subcommand)]
        action: OptionsAction,
    },
}

#[derive(Args, Debug)]
pub struct ClipArgs {
    /// Saved HTML document to read page metadata from
    #[arg(long, value_name = "FILE", conflicts_with = "record", required_unless_present = "record")]
    pub page: Option<PathBuf>,

    /// Address the saved page was loaded from
    #[arg(long, value_name = "URL", default_value = "")]
    pub url: String,

    /// CSS selector of the element treated as the user's selection
    #[arg(long, value_name = "CSS")]
    pub selector: Option<String>,

    /// JSON page record(s) as produced by the page collector
    #[arg(long, value_name = "FILE")]
    pub record: Vec<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Page to fetch
    #[arg(value_name = "URL")]
    pub url: String,

    /// CSS selector of the selection (defaults to the article body)
    #[arg(long, value_name = "CSS")]
    pub selector: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Which menu entry the clip imitates
    #[arg(long, value_enum, default_value_t = TriggerArg::Default)]
    pub trigger: TriggerArg,

    #[command(flatten)]
    pub overrides: OverrideArgs,

    /// Write the outline to this file instead of stdout (stdout is the fallback)
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum OptionsAction {
    /// Print the stored options
    Show,
    /// Change stored options
    Set(OverrideArgs),
    /// Restore defaults
    Reset,
}

#[derive(Args, Debug, Default, Clone)]
pub struct OverrideArgs {
    /// Emit the Publication/Date/Author/Source/Image block
    #[arg(long, value_name = "BOOL")]
    pub include_metadata: Option<bool>,

    /// Tag appended to the parent line (empty to disable)
    #[arg(long, value_name = "TAG")]
    pub tag: Option<String>,

    /// Drop metadata lines whose value is empty
    #[arg(long, value_name = "BOOL")]
    pub omit_empty_metadata: Option<bool>,

    /// Report success/failure on stderr
    #[arg(long, value_name = "BOOL")]
    pub notifications: Option<bool>,

    /// Body filtering level
    #[arg(long, value_enum)]
    pub strictness: Option<StrictnessArg>,
}

impl OverrideArgs {
    pub fn to_override(&self) -> OptionsOverride {
        OptionsOverride {
            include_metadata: self.include_metadata,
            default_tag: self.tag.clone(),
            notification_enabled: self.notifications,
            omit_empty_metadata: self.omit_empty_metadata,
            strictness: self.strictness.map(Strictness::from),
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum TriggerArg {
    /// Stored options as-is
    Default,
    /// Force the metadata block on
    WithMetadata,
    /// Force the metadata block off
    SelectionOnly,
    /// Keyboard shortcut (stored options as-is)
    Shortcut,
}

impl From<TriggerArg> for Trigger {
    fn from(arg: TriggerArg) -> Self {
        match arg {
            TriggerArg::Default => Trigger::Default,
            TriggerArg::WithMetadata => Trigger::WithMetadata,
            TriggerArg::SelectionOnly => Trigger::SelectionOnly,
            TriggerArg::Shortcut => Trigger::Shortcut,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum StrictnessArg {
    Strict,
    Lenient,
}

impl From<StrictnessArg> for Strictness {
    fn from(arg: StrictnessArg) -> Self {
        match arg {
            StrictnessArg::Strict => Strictness::Strict,
            StrictnessArg::Lenient => Strictness::Lenient,
        }
    }
}

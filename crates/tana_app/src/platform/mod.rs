mod clipboard;
mod effects;
mod logging;
mod notify;
pub mod settings;

use anyhow::{bail, Context};
use clip_logging::{clip_error, clip_info};
use tana_core::{Options, Trigger};

use crate::cli::{ClipArgs, Cli, Command, FetchArgs, OptionsAction, OutputArgs};
use clipboard::FallbackClipboard;
use effects::{EffectRunner, PageSource};
use logging::LogDestination;
use notify::StderrNotifier;
use settings::SettingsStore;

pub fn run_app(cli: Cli) -> anyhow::Result<()> {
    logging::initialize(LogDestination::from_args(cli.log_file.as_deref()), cli.verbose);
    clip_info!("tana-paste {} starting", env!("CARGO_PKG_VERSION"));

    let mut store = SettingsStore::open(&cli.settings);
    match cli.command {
        Command::Options { action } => run_options(&mut store, action),
        Command::Clip(args) => {
            let sources = clip_sources(&args);
            run_clips(&mut store, &sources, args.output)
        }
        Command::Fetch(FetchArgs {
            url,
            selector,
            output,
        }) => run_clips(&mut store, &[PageSource::Live { url, selector }], output),
    }
}

fn run_options(store: &mut SettingsStore, action: OptionsAction) -> anyhow::Result<()> {
    match action {
        OptionsAction::Show => {}
        OptionsAction::Set(args) => {
            let overrides = args.to_override();
            if overrides.is_empty() {
                bail!("nothing to set; pass at least one option flag");
            }
            let updated = store.options().merged(&overrides);
            store
                .save(updated)
                .with_context(|| format!("saving {:?}", store.path()))?;
        }
        OptionsAction::Reset => {
            store
                .save(Options::default())
                .with_context(|| format!("saving {:?}", store.path()))?;
        }
    }
    let pretty = ron::ser::PrettyConfig::new();
    println!("{}", ron::ser::to_string_pretty(store.options(), pretty)?);
    Ok(())
}

fn clip_sources(args: &ClipArgs) -> Vec<PageSource> {
    match &args.page {
        Some(path) => vec![PageSource::Document {
            path: path.clone(),
            url: args.url.clone(),
            selector: args.selector.clone(),
        }],
        None => args
            .record
            .iter()
            .map(|path| PageSource::Record { path: path.clone() })
            .collect(),
    }
}

fn run_clips(
    store: &mut SettingsStore,
    sources: &[PageSource],
    output: OutputArgs,
) -> anyhow::Result<()> {
    let trigger = Trigger::from(output.trigger);
    let overrides = output.overrides.to_override();
    let clipboard = FallbackClipboard::for_output(output.out);
    let mut runner = EffectRunner::new(
        store.options().clone(),
        clipboard,
        Box::new(StderrNotifier),
    );

    for source in sources {
        if store.refresh() {
            runner.options_changed(store.options().clone());
        }
        runner.clip(source, trigger, overrides.clone());
    }

    let view = runner.view();
    clip_info!("{} clip(s) copied, {} failed", view.copies, view.failures);
    if view.failures > 0 {
        clip_error!("{} of {} clip(s) failed", view.failures, sources.len());
        bail!("{} of {} clip(s) failed", view.failures, sources.len());
    }
    Ok(())
}

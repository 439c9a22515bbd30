mod assets;
mod builtin;
mod cli;
mod compare;
mod contract;
mod fiddle;
mod html;
mod nest;
mod progress;
mod settings;
mod theme;
mod toggle;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context as _;

pub use cli::{Args as CliArgs, Command, CompareArgs, PageArgs, ProgressMode, RenderArgs, ToggleArgs};
pub use compare::{Comparator, find_differences};
pub use contract::assert_toggle_contract;
pub use fiddle::{FiddleDocument, KeyFilter, RenderOptions};
pub use html::build_html;
pub use nest::nest_slash_keys;
pub use settings::{ComparatorSettings, ParserSettings, Settings, VersionSource};
pub use theme::{StylesheetScope, Theme, next_label, next_stylesheet_href};
pub use toggle::{ToggleError, toggle_html, toggle_theme, toggle_theme_by_id};

use progress::Progress;

pub async fn run(args: CliArgs) -> anyhow::Result<()> {
    use std::io::IsTerminal as _;

    let progress_enabled = match args.progress {
        ProgressMode::Always => true,
        ProgressMode::Never => false,
        ProgressMode::Auto => std::io::stderr().is_terminal(),
    };
    let progress = Progress::new(progress_enabled);

    let res = dispatch(&args, progress.clone()).await;
    progress.finish();
    res
}

async fn dispatch(args: &CliArgs, progress: Arc<Progress>) -> anyhow::Result<()> {
    match &args.command {
        Command::Render(render) => {
            progress.set_stage("loading settings");
            let settings = Settings::load(args.settings.as_deref())?;
            run_render(render, &settings, progress)
        }
        Command::Compare(compare) => {
            progress.set_stage("loading settings");
            let settings = Settings::load(args.settings.as_deref())?;
            run_compare(compare, &settings, progress).await
        }
        // Toggling works on a finished page and never reads settings.
        Command::Toggle(toggle) => run_toggle(toggle, progress),
    }
}

fn page_options(page: &PageArgs, parser: &ParserSettings) -> RenderOptions {
    RenderOptions {
        is_open: page.open || parser.is_open,
        theme: Theme::from_dark_mode(page.dark || parser.dark_mode),
        scope: page.scope.unwrap_or(parser.stylesheet_scope),
        ..Default::default()
    }
}

fn run_render(
    args: &RenderArgs,
    settings: &Settings,
    progress: Arc<Progress>,
) -> anyhow::Result<()> {
    let parser = &settings.parser_settings;
    let options = RenderOptions {
        filter: args.filter.unwrap_or(parser.filter),
        serialize: args.serialize || parser.serialize,
        ..page_options(&args.page, parser)
    };
    let game_path = args.game_path.as_deref().unwrap_or(&parser.game_path);

    progress.set_stage(format!("reading {}.json", args.name));
    let doc = FiddleDocument::load(game_path, &args.name, options)?;

    let out_dir = args.out.clone().unwrap_or_else(|| PathBuf::from("."));
    let path = write_document(&doc, &out_dir, &progress)?;
    tracing::info!(path = %path.display(), "rendered page");
    Ok(())
}

async fn run_compare(
    args: &CompareArgs,
    settings: &Settings,
    progress: Arc<Progress>,
) -> anyhow::Result<()> {
    let cs = &settings.comparator_settings;
    let old = VersionSource {
        path: args.old.clone().unwrap_or_else(|| cs.v1.path.clone()),
        version: args.old_version.clone().unwrap_or_else(|| cs.v1.version.clone()),
    };
    let new = VersionSource {
        path: args.new.clone().unwrap_or_else(|| cs.v2.path.clone()),
        version: args.new_version.clone().unwrap_or_else(|| cs.v2.version.clone()),
    };
    if old.path.as_os_str().is_empty() || new.path.as_os_str().is_empty() {
        anyhow::bail!("both versions need a path; pass --old/--new or set comparator_settings");
    }
    let name = args.name.as_deref().unwrap_or(&cs.name);
    let out_dir = args.out.as_deref().unwrap_or(&cs.output_folder);

    progress.set_stage("comparing versions");
    let comparator = Comparator::load(&old, &new, name).await?;

    if cs.dump_json && !args.no_json {
        progress.set_stage("writing json");
        let (path, bytes) = comparator.write_json(out_dir)?;
        progress.output_written(bytes);
        tracing::info!(path = %path.display(), "wrote differences");
    }

    if cs.dump_html && !args.no_html {
        let options = RenderOptions {
            filter: args.filter.unwrap_or(cs.filter),
            serialize: args.serialize || cs.serialize,
            ..page_options(&args.page, &settings.parser_settings)
        };
        let doc = comparator.to_document(options);
        let path = write_document(&doc, out_dir, &progress)?;
        tracing::info!(path = %path.display(), "rendered differences");
    }

    Ok(())
}

fn run_toggle(args: &ToggleArgs, progress: Arc<Progress>) -> anyhow::Result<()> {
    progress.set_stage("toggling theme");
    let html = std::fs::read_to_string(&args.input)
        .with_context(|| format!("read {}", args.input.display()))?;
    let (toggled, theme) = toggle_html(&html, &args.control_id)
        .with_context(|| format!("toggle {}", args.input.display()))?;

    let out = args.out.as_deref().unwrap_or(&args.input);
    assets::write_output(out, &toggled)?;
    progress.output_written(toggled.len());
    tracing::info!(path = %out.display(), ?theme, "theme toggled");
    Ok(())
}

fn write_document(
    doc: &FiddleDocument,
    out_dir: &Path,
    progress: &Progress,
) -> anyhow::Result<PathBuf> {
    progress.set_stage("generating html");
    let html = build_html(doc);
    assert_toggle_contract(&html)?;

    progress.set_stage("writing output");
    let css_dir = assets::write_stylesheets(out_dir, doc.options().scope)?;
    tracing::debug!(dir = %css_dir.display(), "stylesheets written");

    let path = doc.html_path(out_dir);
    assets::write_output(&path, &html)?;
    progress.output_written(html.len());
    Ok(path)
}

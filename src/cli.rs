use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};

use crate::fiddle::{DEFAULT_FIDDLE_NAME, KeyFilter};
use crate::theme::StylesheetScope;
use crate::toggle::DEFAULT_CONTROL_ID;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ProgressMode {
    /// Enable progress UI when stderr is a TTY.
    Auto,
    /// Always enable progress UI (even when piped).
    Always,
    /// Never show progress UI.
    Never,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Settings file. Defaults to `settings.json` in the working directory, if present.
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Progress display: `auto`, `always`, or `never`.
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub progress: ProgressMode,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render a game JSON file as a collapsible HTML page.
    Render(RenderArgs),
    /// Diff two versions of a game JSON file and write the result as JSON and/or HTML.
    Compare(CompareArgs),
    /// Flip the theme of an already generated page (button label and stylesheet link).
    Toggle(ToggleArgs),
}

/// Page options shared by `render` and `compare`. Unset flags fall back to `parser_settings`.
#[derive(Debug, Default, ClapArgs)]
pub struct PageArgs {
    /// Render every `<details>` expanded.
    #[arg(long)]
    pub open: bool,

    /// Link the dark stylesheet initially.
    #[arg(long)]
    pub dark: bool,

    /// Where the page sits relative to the stylesheets.
    #[arg(long, value_enum)]
    pub scope: Option<StylesheetScope>,
}

#[derive(Debug, ClapArgs)]
pub struct RenderArgs {
    /// File name without the `.json` extension.
    #[arg(long, default_value = DEFAULT_FIDDLE_NAME)]
    pub name: String,

    /// Folder holding the file. Defaults to `parser_settings.game_path`.
    #[arg(long)]
    pub game_path: Option<PathBuf>,

    /// Output folder for the HTML page.
    #[arg(long)]
    pub out: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub filter: Option<KeyFilter>,

    /// Nest `a/b/c` keys into objects.
    #[arg(long)]
    pub serialize: bool,

    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Debug, Default, ClapArgs)]
pub struct CompareArgs {
    /// Older version file. Defaults to `comparator_settings.v1.path`.
    #[arg(long)]
    pub old: Option<PathBuf>,

    #[arg(long)]
    pub old_version: Option<String>,

    /// Newer version file. Defaults to `comparator_settings.v2.path`.
    #[arg(long)]
    pub new: Option<PathBuf>,

    #[arg(long)]
    pub new_version: Option<String>,

    /// Name used in the output file name.
    #[arg(long)]
    pub name: Option<String>,

    /// Defaults to `comparator_settings.output_folder`.
    #[arg(long)]
    pub out: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub filter: Option<KeyFilter>,

    #[arg(long)]
    pub serialize: bool,

    /// Skip the JSON output.
    #[arg(long)]
    pub no_json: bool,

    /// Skip the HTML output.
    #[arg(long)]
    pub no_html: bool,

    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Debug, ClapArgs)]
pub struct ToggleArgs {
    /// Generated HTML page.
    #[arg(long)]
    pub input: PathBuf,

    /// Where to write the toggled page. Defaults to rewriting `--input` in place.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Id of the control element whose label is flipped.
    #[arg(long, default_value = DEFAULT_CONTROL_ID)]
    pub control_id: String,
}

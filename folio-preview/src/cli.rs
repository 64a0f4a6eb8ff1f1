use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "folio-preview",
    version,
    about = "Render the portfolio page off-browser"
)]
pub struct Cli {
    /// Config file; falls back to $FOLIO_CONFIG_PATH, then defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Content JSON, overriding the configured path
    #[arg(long, global = true)]
    pub content: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the page, optionally after a scripted interaction, and print HTML
    Render(Script),
    /// Load config and content and report what was found
    Check,
    /// Print the effective configuration as TOML
    Config,
}

/// Interactions applied in order: filter, carousel steps, open, step, close.
#[derive(Debug, Clone, Default, Args)]
pub struct Script {
    /// Project to open, by index or slug
    #[arg(long, value_name = "PROJECT")]
    pub open: Option<String>,

    /// Walkthrough step to select once the dialog is open
    #[arg(long, value_name = "INDEX", requires = "open")]
    pub step: Option<usize>,

    /// Close the dialog again at the end
    #[arg(long, requires = "open")]
    pub close: bool,

    /// Testimonial category to filter by
    #[arg(long, value_name = "CATEGORY")]
    pub filter: Option<String>,

    /// Advance the carousel this many times
    #[arg(long, value_name = "COUNT", default_value_t = 0)]
    pub next: usize,

    /// Step the carousel back this many times
    #[arg(long, value_name = "COUNT", default_value_t = 0)]
    pub prev: usize,

    /// Print only the subtree of this element id
    #[arg(long, value_name = "ID")]
    pub only: Option<String>,
}

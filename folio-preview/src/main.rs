mod cli;
mod preview;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Builder, Target};
use folio_config::{ConfigLoad, ConfigLoader, validation};
use folio_model::{SiteContent, load_content};
use log::LevelFilter;

use cli::{Cli, Command};
use preview::Session;

fn init_logger() {
    // stdout carries the rendered page
    Builder::new()
        .target(Target::Stderr)
        .filter_level(LevelFilter::Warn)
        .filter_module("folio_preview", LevelFilter::Debug)
        .init();
}

fn main() -> Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let cli = Cli::parse();
    let ConfigLoad {
        mut config,
        source,
        mut warnings,
    } = ConfigLoader::new()
        .with_config_path(cli.config.clone())
        .load()
        .context("failed to load configuration")?;
    if let Some(content) = &cli.content {
        config.content_path = content.clone();
        warnings = validation::validate(&config).context("invalid --content path")?;
    }
    log::debug!("config source: {source}");

    match cli.command {
        Command::Config => {
            let rendered = config
                .to_toml_string()
                .context("failed to render configuration")?;
            print!("{rendered}");
        }
        Command::Check => {
            let content = read_content(&config.content_path)?;
            println!("config: {source}");
            println!("content: {}", config.content_path.display());
            println!("projects: {}", content.projects.len());
            println!("testimonials: {}", content.testimonials.len());
            for warning in warnings.iter() {
                println!("warning: {warning}");
            }
        }
        Command::Render(script) => {
            let content = read_content(&config.content_path)?;
            let mut session = Session::new(content, &config.mounts);
            session.apply(&script)?;
            log::debug!(
                "dialog open: {}, carousel at {}",
                session.portfolio().dialog().is_open(),
                session.portfolio().carousel().index()
            );
            print!("{}", session.html(script.only.as_deref())?);
        }
    }
    Ok(())
}

fn read_content(path: &std::path::Path) -> Result<SiteContent> {
    let content = load_content(path)
        .with_context(|| format!("failed to load content from {}", path.display()))?;
    log::info!(
        "loaded {} projects and {} testimonials",
        content.projects.len(),
        content.testimonials.len()
    );
    Ok(content)
}

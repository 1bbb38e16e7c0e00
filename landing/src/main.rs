//! # impact-landing
//!
//! Renders the Impact Makers Utrecht landing page to static HTML.
//!
//! ```bash
//! impact-landing --out dist/index.html
//! impact-landing --config landing.toml --date 2025-01-01 --menu-open
//! ```

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use tracing::info;

use impact_landing::{
    Action, Activation, Clock, Content, FixedClock, LogNavigator, PageSession, SystemClock,
};

#[derive(Parser, Debug)]
#[command(name = "impact-landing")]
#[command(about = "Render the Impact Makers Utrecht landing page to HTML")]
#[command(version)]
struct Args {
    /// Content override file (TOML, or JSON with a .json extension)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Render with the mobile menu open
    #[arg(long)]
    menu_open: bool,

    /// Render date for the footer year (YYYY-MM-DD, default today)
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr, stdout may carry the page
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    let content = match &args.config {
        Some(path) => Content::load_from_path(path)
            .with_context(|| format!("loading content from {}", path.display()))?,
        None => Content::default(),
    };

    let html = match args.date {
        Some(date) => render(content, FixedClock(date), args.menu_open),
        None => render(content, SystemClock, args.menu_open),
    };

    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            std::fs::write(path, &html).with_context(|| format!("writing {}", path.display()))?;
            info!("Page written to {} ({} bytes)", path.display(), html.len());
        }
        None => {
            std::io::stdout()
                .write_all(html.as_bytes())
                .context("writing page to stdout")?;
        }
    }

    Ok(())
}

fn render<C: Clock>(content: Content, clock: C, menu_open: bool) -> String {
    info!(
        nav = content.nav.len(),
        updates = content.updates.len(),
        "rendering landing page"
    );

    let mut session = PageSession::new(content, clock, LogNavigator);
    if menu_open {
        session.activate(&Action::ToggleMenu, &Activation::Pointer);
    }
    session.render()
}

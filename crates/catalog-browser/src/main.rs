use std::io::BufRead;
use std::time::Duration;

use anyhow::Context;
use catalog_browser::{CatalogBrowser, Command, CommandError};
use catalog_client::CatalogClient;
use catalog_core::{AppConfig, FilterState, SortOption, ALL_CATEGORIES};
use clap::Parser;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "catalog-browser")]
#[command(about = "Browse a product catalog from the terminal")]
#[command(
    after_help = "Commands (one per line on stdin): search <text>, category <name>, min <price>, max <price>, sort <none|asc|desc>, show, quit"
)]
struct Cli {
    /// Catalog API base URL (overrides CATALOG_API_URL).
    #[arg(long)]
    api_url: Option<String>,

    /// Search debounce quiet period in milliseconds (overrides CATALOG_SEARCH_DEBOUNCE_MS).
    #[arg(long)]
    debounce_ms: Option<u64>,

    /// Log filter when RUST_LOG is unset (overrides CATALOG_LOG_LEVEL).
    #[arg(long)]
    log_level: Option<String>,

    /// Initial search text.
    #[arg(long)]
    search: Option<String>,

    /// Initial category. Replaced by "All" (with a warning) if the server's
    /// category list doesn't include it.
    #[arg(long)]
    category: Option<String>,

    /// Initial lower price bound.
    #[arg(long)]
    min_price: Option<String>,

    /// Initial upper price bound.
    #[arg(long)]
    max_price: Option<String>,

    /// Initial sort order: none, asc, desc, price_asc or price_desc.
    #[arg(long)]
    sort: Option<SortOption>,
}

impl Cli {
    fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(api_url) = &self.api_url {
            config.api_url = api_url.trim_end_matches('/').to_string();
        }
        if let Some(debounce_ms) = self.debounce_ms {
            config.search_debounce_ms = debounce_ms;
        }
        if let Some(log_level) = &self.log_level {
            config.log_level.clone_from(log_level);
        }
    }

    fn initial_filters(&self) -> FilterState {
        FilterState {
            search_term: self.search.clone().unwrap_or_default(),
            selected_category: self
                .category
                .clone()
                .unwrap_or_else(|| ALL_CATEGORIES.to_string()),
            min_price: self.min_price.clone().unwrap_or_default(),
            max_price: self.max_price.clone().unwrap_or_default(),
            sort_option: self.sort.unwrap_or_default(),
            ..FilterState::default()
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = catalog_core::load_app_config()?;
    cli.apply_overrides(&mut config);

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let client = CatalogClient::from_config(&config).context("failed to build catalog client")?;
    tracing::info!(api_url = %client.base_url(), "using catalog API");

    let (tx, rx) = mpsc::channel(32);
    spawn_command_reader(tx);

    let browser = CatalogBrowser::new(Duration::from_millis(config.search_debounce_ms))
        .with_filters(cli.initial_filters());
    let mut stdout = std::io::stdout();
    browser.run(&client, rx, &mut stdout).await?;

    Ok(())
}

/// Reads commands from stdin on a dedicated thread. EOF closes the channel,
/// which stops the browser.
fn spawn_command_reader(tx: mpsc::Sender<Command>) {
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    tracing::error!(error = %e, "failed to read stdin");
                    break;
                }
            };
            match line.parse::<Command>() {
                Ok(command) => {
                    if tx.blocking_send(command).is_err() {
                        break;
                    }
                }
                Err(CommandError::Empty) => {}
                Err(e) => eprintln!("{e}"),
            }
        }
    });
}

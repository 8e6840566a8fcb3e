use clap::{Parser, Subcommand};
use colored::Colorize;

use sheetboard::api::server::ApiConfig;
use sheetboard::api::run_server;
use sheetboard::config::DashboardConfig;
use sheetboard::loader::SheetLoader;
use sheetboard::normalize::normalize;

#[derive(Parser)]
#[command(name = "sheetboard")]
#[command(about = "Interactive dashboard for a published spreadsheet tab")]
#[command(long_about = "Sheetboard - spreadsheet dashboard

Fetches one published spreadsheet tab as CSV, coerces date-shaped text
columns to real dates, and serves an interactive scatter/line chart with
X/Y column selectors and a date-aware range slider.

COMMANDS:
  serve    - Start the dashboard HTTP server
  preview  - Fetch the sheet once and print its columns and inferred types

EXAMPLES:
  sheetboard serve                       # Serve on localhost:8080
  sheetboard serve --host 0.0.0.0 --port 3000
  sheetboard preview                     # Inspect the configured sheet")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the dashboard HTTP server
    Serve {
        /// Host address to bind to (use 0.0.0.0 for all interfaces)
        #[arg(short = 'H', long, default_value = "127.0.0.1", env = "SHEETBOARD_HOST")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value = "8080", env = "SHEETBOARD_PORT")]
        port: u16,
    },

    /// Fetch the configured sheet once and print its columns
    Preview,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port } => {
            run_server(ApiConfig { host, port }, DashboardConfig::default()).await
        }
        Commands::Preview => preview().await,
    }
}

/// Fetch + normalize once and show what the dashboard would offer.
async fn preview() -> anyhow::Result<()> {
    let config = DashboardConfig::default();
    println!("{}", "Sheetboard - fetching sheet".bold().green());
    println!("   Sheet: {}", config.sheet_id);
    println!("   Tab:   {}", config.tab_name);
    println!();

    let loader = SheetLoader::with_base_url(config.base_url.clone());
    let raw = loader.load(&config.sheet_id, &config.tab_name).await?;
    let table = normalize(&raw);

    println!(
        "{}",
        format!("Columns ({} rows):", table.row_count()).bold()
    );
    for column in &table.columns {
        println!(
            "   {} ({})",
            column.name.cyan(),
            column.values.type_name().bright_blue()
        );
    }

    Ok(())
}

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::path::PathBuf;
use tokio::io::{AsyncWrite, BufReader};

use assetdesk::data::Catalog;
use assetdesk::shell::Console;
use assetdesk::Config;

#[derive(Parser)]
#[command(name = "assetdesk", about = "Asset management console over JSON lines")]
struct Args {
    /// View to open first (overrides ASSETDESK_START_PATH)
    #[arg(long)]
    start_path: Option<String>,

    /// Rows per page for list views (overrides ASSETDESK_PAGE_SIZE)
    #[arg(long)]
    page_size: Option<usize>,

    /// Start without the sample records
    #[arg(long)]
    empty: bool,

    /// Read commands from a file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logger; stdout carries the responses, so logs go to stderr
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?.with_overrides(args.start_path, args.page_size, args.empty)?;
    info!("Starting assetdesk at {} (page size {})", config.start_path, config.page_size);

    let catalog = if config.seed_data {
        Catalog::seeded()
    } else {
        Catalog::default()
    };
    let mut console = Console::new(config, catalog)?;
    let stdout = tokio::io::stdout();

    match args.script {
        Some(path) => {
            let file = tokio::fs::File::open(&path)
                .await
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            serve(&mut console, BufReader::new(file), stdout).await
        }
        None => serve(&mut console, BufReader::new(tokio::io::stdin()), stdout).await,
    }
}

async fn serve<R, W>(console: &mut Console, input: R, output: W) -> Result<()>
where
    R: tokio::io::AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    console.run(input, output).await?;
    info!("Session closed at {}", console.history().current());
    Ok(())
}

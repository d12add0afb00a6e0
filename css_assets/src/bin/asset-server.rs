use clap::Parser;
use css_assets::{AssetConfig, AssetError, RunMode};
use log::info;
use std::path::PathBuf;

/// Serve a stylesheet asset directory over HTTP
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:3001")]
    addr: String,

    /// Run mode (production or development)
    #[arg(short, long, default_value = "development")]
    mode: RunMode,

    /// URL prefix the assets are mounted under
    #[arg(long, default_value = css_assets::DEFAULT_ASSET_URL)]
    asset_url: String,

    /// Directory holding the assets
    #[arg(long, default_value = css_assets::DEFAULT_ASSET_PATH)]
    asset_path: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let app = AssetConfig::new(cli.mode)
        .with_asset_url(cli.asset_url)
        .with_asset_path(cli.asset_path)
        .into_router()?;

    let listener = tokio::net::TcpListener::bind(&cli.addr)
        .await
        .map_err(|source| AssetError::Bind {
            addr: cli.addr.clone(),
            source,
        })?;

    info!("Listening on http://{}", cli.addr);
    axum::serve(listener, app).await.map_err(AssetError::Serve)?;

    Ok(())
}

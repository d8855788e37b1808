use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use image_drop::config;
use image_drop::uploader::{self, UploadClient};

#[derive(Parser)]
#[command(name = "image-drop", about = "Upload an image to the local notes server")]
struct Args {
    /// File to upload. When omitted, nothing is sent.
    file: Option<PathBuf>,

    /// Override the configured upload endpoint URL
    #[arg(long)]
    endpoint: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();

    let config = config::load_config().context("failed to load configuration")?;
    let endpoint = args.endpoint.unwrap_or(config.endpoint);

    let client = UploadClient::new(endpoint);
    uploader::handle_upload(&client, args.file.as_deref()).await;

    Ok(())
}

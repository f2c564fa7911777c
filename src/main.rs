use anyhow::Result;
use clap::Parser;
use model_dl::cli::Args;
use model_dl::downloader::Fetcher;
use model_dl::logging;
use model_dl::models::AssetSource;
use std::path::Path;
use std::time::Duration;

#[tokio::main]
async fn main() {
    logging::init();

    let args = Args::parse();

    // A failed download is reported on stdout; the process still exits 0.
    if let Err(e) = run(&args).await {
        println!("Error downloading: {:#}", e);
    }
}

async fn run(args: &Args) -> Result<()> {
    let source = AssetSource::new(&args.url, args.file.clone())?;
    let destination = source.destination(Path::new(&args.output));

    println!("Downloading {} to {}...", source.url, destination.display());

    let fetcher = Fetcher::new(&args.output, Duration::from_secs(args.timeout))?;
    fetcher.fetch(&source).await?;

    println!("Download complete.");

    Ok(())
}

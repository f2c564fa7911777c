use clap::Parser;

/// URL the site's 3D model is served from.
pub const DEFAULT_MODEL_URL: &str = "https://www.drestein.in/models/robot_playground.glb";

#[derive(Parser, Debug)]
#[command(name = "model-dl")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Source URL of the model asset
    #[arg(short, long, default_value = DEFAULT_MODEL_URL)]
    pub url: String,

    /// Output directory
    #[arg(short, long, default_value = "./public/models")]
    pub output: String,

    /// File name to save as (default: last path segment of the URL)
    #[arg(short = 'f', long)]
    pub file: Option<String>,

    /// Request timeout in seconds
    #[arg(short, long, default_value = "300")]
    pub timeout: u64,
}

use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "gemini-proxy")]
#[clap(about = "HTTP proxy for Gemini text generation on Vertex AI", long_about = None)]
pub struct Cli {
    /// Defaults to `serve` when omitted
    #[clap(subcommand)]
    pub command: Option<Commands>,
}

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP proxy
    Serve {
        #[clap(long)]
        host: Option<String>,
        #[clap(short, long)]
        port: Option<u16>,
    },
    /// Send one request through the interpreter and print the result
    Generate {
        #[clap(short, long)]
        prompt: String,
        #[clap(short, long)]
        model: Option<String>,
        #[clap(short, long)]
        temperature: Option<f32>,
        #[clap(long)]
        max_output_tokens: Option<u32>,
        #[clap(long)]
        json: bool,
        /// JSON schema passed to the model as a hint (implies --json)
        #[clap(long)]
        schema: Option<String>,
    },
    /// List the known model identifiers
    Models,
}

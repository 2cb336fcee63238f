use clap::Parser;
use gemini_proxy::structs::cli::Cli;
use gemini_proxy::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = CommandRunner::run_command(cli.command).await {
        log::error!("{}", e.user_message());
        return Err(e.into());
    }

    Ok(())
}

//! Binary for the Matrix faucet bot.

use anyhow::Result;
use clap::Parser;
use faucet_bot::{load_config, run_bot, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let config = load_config()?;
            run_bot(config).await
        }
        Commands::CheckConfig => {
            let config = load_config()?;
            config.validate()?;
            println!("{:#?}", config);
            Ok(())
        }
    }
}

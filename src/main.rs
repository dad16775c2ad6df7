use clap::Parser;
use dealwatch::adapter::inbound::cli::command::{Cli, Commands};
use dealwatch::adapter::inbound::cli::output::{self, OutputConfig};
use dealwatch::adapter::inbound::cli::run;
use dealwatch::infrastructure::config::settings::Config;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    let config = match Config::load_or_default(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            output::error(&format!("Failed to load config: {e}"));
            std::process::exit(1);
        }
    };

    config.init_logging();

    let command = cli.command.unwrap_or(Commands::Run);
    if let Err(e) = run::execute(command, config).await {
        error!(error = %e, "Fatal error");
        output::error(&e.to_string());
        std::process::exit(1);
    }

    info!("dealwatch stopped");
}

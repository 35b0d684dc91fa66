use bible_cli::utils::{logger, validation::Validate};
use bible_cli::{ApiClient, Cli, RequestSpec};
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);

    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }

    let spec = RequestSpec::from_cli(&cli);
    let client = ApiClient::new();

    match client.fetch_pretty(&spec).await {
        Ok(body) => println!("{}", body),
        Err(e) => {
            tracing::error!("Request failed: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

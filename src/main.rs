use clap::Parser;

use ordertrack::cli::Cli;
use ordertrack::config::ConfigLoader;
use ordertrack::logger::init_logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = ConfigLoader::new().load()?;
    init_logger(&settings.logger)?;

    cli.execute(settings).await?;

    Ok(())
}

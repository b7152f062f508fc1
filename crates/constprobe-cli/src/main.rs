// constprobe CLI entry point

use clap::Parser;
use constprobe_cli::{logging, Cli, SettingsLoader};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = SettingsLoader::load_for(&cli)?;

    logging::init_logging(settings.verbose);

    constprobe_cli::run(&settings).await?;
    Ok(())
}

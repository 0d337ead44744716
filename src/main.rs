use clap::Parser;

use ecoscan_lib::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    ecoscan_lib::run(cli).await
}

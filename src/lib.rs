pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod ui;

use anyhow::Result;
use cli::Cli;

pub async fn run(cli: Cli) -> Result<()> {
    cli.validate()?;
    app::run(&cli).await
}

mod app;
mod cli;
mod config;
mod effects;
mod logging;
mod ui;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    logging::initialize(cli.log);

    let config = config::load_config(&cli.config)?.with_overrides(&cli);
    app::run(
        config,
        app::RunOptions {
            refresh: cli.refresh,
            once: cli.once,
        },
    )
}

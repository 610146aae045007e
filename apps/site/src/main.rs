#![allow(clippy::print_stdout)]

use anyhow::Context;
use armyforge_logger::Logger;
use armyforge_site::Site;
use armyforge_site::cli::{AppCommands, Cli};
use armyforge_site::config::load_config;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _log = Logger::builder().name(env!("CARGO_PKG_NAME")).init()?;

    match cli.command {
        AppCommands::Build { faction, data, out } => {
            let cfg = load_config(cli.config.as_deref())
                .context("Critical: Configuration is malformed")?;

            let mut builder = Site::builder().config(cfg);
            if let Some(slug) = faction {
                builder = builder.faction(slug);
            }
            if let Some(dir) = data {
                builder = builder.data_dir(dir);
            }
            if let Some(dir) = out {
                builder = builder.out_dir(dir);
            }

            let report = builder.build()?.generate()?;
            tracing::info!(pages = report.pages.len(), "Site build complete");
        },
        AppCommands::List {} => {
            for slug in armyforge_roster::REGISTERED_SLUGS {
                println!("{slug}");
            }
        },
    }

    Ok(())
}

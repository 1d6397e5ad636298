#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::{Context, Result};
use clap::Parser;
use fittrack::{cli, package, types::WorkoutKind, utils};

#[macro_use]
extern crate fittrack;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    match cli.cmd {
        Some(cli::Cmd::Types) => {
            for kind in WorkoutKind::ALL {
                println!("{}\t{}\t{}", kind.code(), kind, kind.params().join(","));
            }
            Ok(())
        }
        None => {
            let packages = if cli.packages.is_empty() {
                dlog!("mode=demo");
                package::default_packages()
            } else {
                cli.packages
            };
            tracing::info!(packages = packages.len(), "processing sensor packages");

            for (i, pkg) in packages.iter().enumerate() {
                let workout = pkg
                    .build()
                    .with_context(|| format!("package #{} ({})", i + 1, pkg.code))?;
                let info = workout.summarize();
                dlog!(
                    "summary type={} distance={} speed={} calories={}",
                    info.training_type,
                    info.distance,
                    info.speed,
                    info.calories
                );

                if cli.json {
                    let line = serde_json::to_string(&info).context("serializing summary")?;
                    println!("{line}");
                } else {
                    println!("{}", info.get_message());
                }
            }

            tracing::info!(workouts = packages.len(), "done");
            Ok(())
        }
    }
}

use crate::package::Package;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "fittrack",
    about = "Print distance, speed and calories for workout sensor packages"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Cmd>,

    /// Sensor package as CODE:v1,v2,... (repeatable), e.g. RUN:15000,1,75
    ///
    /// Without any, the built-in demo packages are processed.
    #[arg(short = 'p', long = "package", value_name = "PACKAGE")]
    pub packages: Vec<Package>,

    /// Print one JSON object per workout instead of the text summary
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// List workout type codes and their positional values
    Types,
}

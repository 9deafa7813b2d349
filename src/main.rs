mod cli;
mod convert;
mod functions;
mod global;

use clap::Parser;
use eyre::Result;
use log::info;

fn main() -> Result<()> {
    // Initialize the logger
    pretty_env_logger::init();

    info!("hex2bin started");

    crate::cli::Cli::parse().run()
}

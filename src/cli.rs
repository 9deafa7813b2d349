use std::path::{Path, PathBuf};
use clap::Parser;
use colored::Colorize;
use eyre::{Result, WrapErr};
use crate::convert::convert;
use crate::global::Config;

/// Convert whitespace-separated hex byte tokens into a raw binary file
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Text file of hex tokens [default: input.txt]
    pub input: Option<PathBuf>,

    /// Binary file to create or overwrite [default: output.bin]
    pub output: Option<PathBuf>,

    /// Config file (defaults to ./hex2bin.toml when present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Don't print the confirmation line
    #[arg(long, short)]
    pub quiet: bool,
}

/// The line printed after a successful conversion.
pub fn confirmation(count: usize, output: &Path) -> String {
    format!("OK: wrote {} bytes to {}", count, output.display())
}

impl Cli {
    /// Input and output paths, with command line arguments taking precedence over the config.
    pub fn resolve_paths(&self, config: &Config) -> (PathBuf, PathBuf) {
        let input = self.input.clone().unwrap_or_else(|| config.input.clone());
        let output = self.output.clone().unwrap_or_else(|| config.output.clone());
        (input, output)
    }

    pub fn run(&self) -> Result<()> {
        let config = Config::load(self.config.as_deref())
            .wrap_err("Failed to load configuration")?;
        let (input, output) = self.resolve_paths(&config);

        let count = convert(&input, &output)
            .wrap_err_with(|| format!("Failed to convert {:?} into {:?}", input, output))?;

        if !self.quiet {
            println!("{}", confirmation(count, &output).green());
        }
        Ok(())
    }
}

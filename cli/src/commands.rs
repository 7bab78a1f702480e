use clap::Parser;

/// The pipeline takes no flags; clap still provides `--help` and
/// `--version`.
#[derive(Parser)]
#[command(name = "ipsift")]
#[command(version)]
#[command(about = "Generates classified IPv4 addresses and sifts them back out of a transient JSON artifact.")]
pub struct CommandLine {}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

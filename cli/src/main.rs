mod commands;
mod terminal;

use std::io;
use std::process::ExitCode;

use commands::CommandLine;
use ipsift_common::config::Config;
use ipsift_core::pipeline;
use rand::SeedableRng;
use rand::rngs::StdRng;
use terminal::{logging, print};

fn main() -> ExitCode {
    CommandLine::parse_args();

    logging::init();

    let cfg = Config::default();
    let mut rng = StdRng::from_os_rng();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match pipeline::run(&cfg, &mut rng, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print::fatal(&err);
            ExitCode::FAILURE
        }
    }
}

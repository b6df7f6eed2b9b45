use clap::Parser;
use std::io::{self, BufWriter};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = bigfiles::Cli::parse();

    if let Err(e) = bigfiles::init_logger(cli.debug) {
        eprintln!("bigfiles: failed to initialize logging: {e}");
    }

    let out = BufWriter::new(io::stdout().lock());

    match bigfiles::run(&cli, out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("bigfiles: {e}");
            ExitCode::FAILURE
        }
    }
}

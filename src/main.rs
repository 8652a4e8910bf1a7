mod cli;
mod convert;
mod prompt;
mod reading;

use std::io;

use anyhow::{Error, Result};
use clap::Parser;
use cli::{session, Cli};

fn main() -> Result<(), Error> {
    env_logger::init();
    let _cli = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();

    match session::run(&mut stdin.lock(), &mut stdout.lock()) {
        Ok(()) => {}
        Err(e) => eprintln!("Error: {}", e),
    }

    Ok(())
}

mod command;
mod config;
mod session;

use std::io::{self, BufRead, Write};

use anyhow::Context;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::{command::Command, config::Config, session::Session};

fn main() -> anyhow::Result<()> {
    // A .env file is optional, the environment may already be set up.
    dotenv::dotenv().ok();
    let config = Config::load()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(author = %config.author, "down4 started, type 'help' for commands");
    let mut session = Session::new(config.author);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    prompt(&mut stdout)?;
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        if !line.trim().is_empty() {
            match command::parse(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => {
                    if let Err(e) = session.run(command, &mut stdout) {
                        error!("{e:#}");
                    }
                }
                Err(msg) => warn!("{msg}"),
            }
        }
        prompt(&mut stdout)?;
    }
    info!(events = session.events().size(), "down4 finished");
    Ok(())
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}

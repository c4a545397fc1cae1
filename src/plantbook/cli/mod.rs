//! Terminal client.
//!
//! One process is one application lifetime: the store starts empty, lives for the
//! session, and is gone on exit. Each line read from stdin is one session command.

mod args;
mod logging;
mod print;
mod session;

use args::Cli;
use clap::Parser;
use directories::ProjectDirs;
use plantbook::api::PlantbookApi;
use plantbook::config::PlantbookConfig;
use plantbook::error::{PlantbookError, Result};
use plantbook::store::memory::InMemoryStore;
use session::{Flow, Session};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

const HOME_ENV: &str = "PLANTBOOK_HOME";
const PROMPT: &str = "plantbook> ";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config_dir = resolve_config_dir(cli.config_dir)?;
    let config = match PlantbookConfig::load(&config_dir) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                target: "plantbook",
                event = "config_load_failed",
                path = %config_dir.display(),
                error = %err
            );
            PlantbookConfig::default()
        }
    };

    let api = PlantbookApi::new(InMemoryStore::new(), config_dir);
    let mut session = Session::new(api, config);

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    if interactive {
        println!("plantbook {} (type `help` for commands)", env!("CARGO_PKG_VERSION"));
    }

    let mut input = stdin.lock();
    let mut line = String::new();
    loop {
        if interactive {
            print!("{}", PROMPT);
            io::stdout().flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        if session.handle_line(&line) == Flow::Quit {
            break;
        }
    }

    Ok(())
}

fn resolve_config_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "plantbook", "plantbook")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| PlantbookError::Config("Could not determine config dir".to_string()))
}

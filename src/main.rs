//! Paicheco - a small line-command console.

use paicheco::cli::Cli;
use paicheco::config::Config;
use paicheco::console::Console;
use paicheco::error::Result;
use paicheco::logging::{self, LogTarget};
use paicheco::persistence::{FileStorage, MemoryStorage, Storage};
use paicheco::surface::{headless, terminal};
use tracing::{error, info, warn};

fn main() {
    let cli = Cli::parse_args();

    // Config comes first: it decides where logs go
    let config_path = cli.config_path();
    let config = match Config::load_from_file(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {}", e.category(), e);
            std::process::exit(1);
        }
    };

    let target = if cli.headless {
        LogTarget::Stderr
    } else {
        LogTarget::File
    };
    logging::init(target, &config.logging);
    info!("Loaded config from: {}", config_path.display());

    match run(&cli, &config) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            error!("{}: {}", e.category(), e);
            eprintln!("{}: {}", e.category(), e);
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli, config: &Config) -> Result<i32> {
    let console = Console::open(open_storage(cli, config), config);

    if cli.headless {
        headless::run_headless(cli, console)
    } else {
        terminal::run(console)?;
        Ok(0)
    }
}

/// Picks the history backend: CLI data dir, then config, then platform default.
fn open_storage(cli: &Cli, config: &Config) -> Box<dyn Storage> {
    if !cli.persistent_history() {
        info!("History kept in memory");
        return Box::new(MemoryStorage::new());
    }

    let dir = cli
        .data_dir()
        .map(|dir| dir.to_path_buf())
        .unwrap_or_else(|| config.history.resolved_data_dir());
    match FileStorage::open(&dir) {
        Ok(storage) => {
            info!("History stored in: {}", dir.display());
            Box::new(storage)
        }
        Err(e) => {
            warn!("{e}; history will not be saved");
            Box::new(MemoryStorage::new())
        }
    }
}

//! Command line surface and the paths derived from it.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::db::{default_data_dir, DB_FILE_NAME};

/// File name of the diagnostic log inside the data directory.
const LOG_FILE_NAME: &str = "ascnd.log";

#[derive(Debug, Parser)]
#[command(name = "ascnd", version, about = "Browse the active exercise roster")]
pub struct Cli {
    /// Path to the SQLite store (defaults to ~/.ascnd/arc.db)
    #[arg(long, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Print the roster to stdout instead of opening the terminal UI
    #[arg(long)]
    pub print: bool,

    /// Where diagnostics are written (defaults to ~/.ascnd/ascnd.log)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Fully resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub log_file: PathBuf,
    pub print: bool,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let db_path = match cli.db {
            Some(path) => path,
            None => default_data_dir()?.join(DB_FILE_NAME),
        };
        let log_file = match cli.log_file {
            Some(path) => path,
            None => default_data_dir()?.join(LOG_FILE_NAME),
        };

        Ok(Self {
            db_path,
            log_file,
            print: cli.print,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_paths_win() {
        let cli = Cli::parse_from([
            "ascnd",
            "--db",
            "/tmp/custom.db",
            "--log-file",
            "/tmp/ascnd.log",
            "--print",
        ]);
        let config = Config::from_cli(cli).unwrap();

        assert_eq!(
            config,
            Config {
                db_path: PathBuf::from("/tmp/custom.db"),
                log_file: PathBuf::from("/tmp/ascnd.log"),
                print: true,
            }
        );
    }

    #[test]
    fn defaults_live_in_the_data_dir() {
        let Ok(data_dir) = default_data_dir() else {
            return;
        };
        let config = Config::from_cli(Cli::parse_from(["ascnd"])).unwrap();

        assert_eq!(config.db_path, data_dir.join("arc.db"));
        assert_eq!(config.log_file, data_dir.join("ascnd.log"));
        assert!(!config.print);
    }
}

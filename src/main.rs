//! Binary entry point: open and migrate the store, mount the exercise list on
//! it, then either print the roster once or drive the Ratatui event loop.
use ascnd::config::{Cli, Config};
use ascnd::ui::APP_TITLE;
use ascnd::{logging, migrate_db_if_needed, open_database, run_app, App, ExerciseList};
use clap::Parser;

/// A store that cannot be opened or migrated is fatal: the error is reported
/// on stderr and the process exits non-zero.
fn main() -> anyhow::Result<()> {
    let config = Config::from_cli(Cli::parse())?;
    logging::init(&config.log_file)?;

    let conn = open_database(&config.db_path, migrate_db_if_needed)?;
    let mut list = ExerciseList::mount(conn);

    if config.print {
        list.wait();
        println!("{APP_TITLE}");
        for line in list.lines() {
            println!("{line}");
        }
        return Ok(());
    }

    let mut app = App::new(list);
    run_app(&mut app)
}

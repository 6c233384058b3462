//! Persistence module split across logical submodules.

mod connection;
mod exercises;
mod migrations;

pub use connection::{default_data_dir, open_database, DB_FILE_NAME};
pub use exercises::{fetch_active_exercises, ExerciseStore, ACTIVE_EXERCISES_QUERY};
pub use migrations::{migrate_db_if_needed, SCHEMA_VERSION};

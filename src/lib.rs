//! Core library surface for the ASCND exercise roster.
//!
//! The binary wires these pieces together; keeping them in a library lets the
//! integration tests drive the same code paths with their own stores.
pub mod config;
pub mod db;
pub mod logging;
pub mod models;
pub mod ui;

/// Persistence entry points: open (and migrate) the store, then read it.
pub use db::{fetch_active_exercises, migrate_db_if_needed, open_database, ExerciseStore};

pub use models::{Exercise, TrainingType};

/// The interactive application entry point and its state.
pub use ui::{run_app, App, ExerciseList};

//! Ratatui front-end: a title bar over the exercise roster.

mod app;
mod exercise_list;
mod terminal;

pub use app::{App, APP_TITLE};
pub use exercise_list::{ExerciseList, ViewState, EMPTY_MESSAGE, LOADING_MESSAGE};
pub use terminal::run_app;

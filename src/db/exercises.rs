use anyhow::{Context, Result};
use rusqlite::Connection;

use crate::models::Exercise;

/// The one read the list view issues. Ordering lives here, the view never
/// re-sorts.
pub const ACTIVE_EXERCISES_QUERY: &str =
    "SELECT id, name, training_type FROM exercise WHERE is_active = 1 ORDER BY name";

/// Read access the exercise list depends on. Handing an implementation to the
/// view explicitly keeps the store out of any global state, and lets tests
/// substitute a failing or canned store.
pub trait ExerciseStore {
    fn active_exercises(&self) -> Result<Vec<Exercise>>;
}

impl ExerciseStore for Connection {
    fn active_exercises(&self) -> Result<Vec<Exercise>> {
        fetch_active_exercises(self)
    }
}

/// Retrieve every active exercise, alphabetical by name.
pub fn fetch_active_exercises(conn: &Connection) -> Result<Vec<Exercise>> {
    let mut stmt = conn
        .prepare(ACTIVE_EXERCISES_QUERY)
        .context("failed to prepare exercise query")?;

    let exercises = stmt
        .query_map([], |row| {
            Ok(Exercise {
                id: row.get(0)?,
                name: row.get(1)?,
                training_type: row.get(2)?,
            })
        })
        .context("failed to load exercises")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect exercises")?;

    Ok(exercises)
}

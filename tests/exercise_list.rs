use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use ascnd::ui::{ViewState, EMPTY_MESSAGE, LOADING_MESSAGE};
use ascnd::{migrate_db_if_needed, open_database, Exercise, ExerciseList, ExerciseStore};
use pretty_assertions::assert_eq;
use rusqlite::{params, Connection};
use tempfile::TempDir;

struct FailingStore;

impl ExerciseStore for FailingStore {
    fn active_exercises(&self) -> Result<Vec<Exercise>> {
        Err(anyhow!("disk I/O error"))
    }
}

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn open_store(path: &Path) -> Connection {
    open_database(path, migrate_db_if_needed).unwrap()
}

fn seeded_store(rows: &[(&str, &str, &str, bool)]) -> (TempDir, Connection) {
    let dir = tempfile::tempdir().unwrap();
    let conn = open_store(&dir.path().join("arc.db"));
    for (id, name, training_type, active) in rows {
        conn.execute(
            "INSERT INTO exercise (id, name, training_type, is_active) VALUES (?1, ?2, ?3, ?4)",
            params![id, name, training_type, active],
        )
        .unwrap();
    }
    (dir, conn)
}

fn loaded<S: ExerciseStore + Send + 'static>(store: S) -> ExerciseList {
    let mut view = ExerciseList::mount(store);
    view.wait();
    view
}

fn load_with_logs<S: ExerciseStore + Send + 'static>(store: S) -> (ExerciseList, String) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    let view = tracing::subscriber::with_default(subscriber, || loaded(store));
    (view, logs.text())
}

#[test]
fn no_active_exercises_shows_empty_message() {
    let (_dir, conn) = seeded_store(&[]);
    let view = loaded(conn);

    assert!(!view.is_loading());
    assert_eq!(view.lines(), vec![EMPTY_MESSAGE.to_string()]);
}

#[test]
fn single_exercise_renders_one_line() {
    let (_dir, conn) = seeded_store(&[("1", "Squat", "resistance", true)]);
    let view = loaded(conn);

    assert_eq!(view.lines(), vec!["Squat (resistance)".to_string()]);
}

#[test]
fn inactive_exercises_are_hidden() {
    let (_dir, conn) = seeded_store(&[
        ("1", "Run", "cardio", true),
        ("2", "Plank", "mobility", false),
    ]);
    let view = loaded(conn);

    assert_eq!(view.lines(), vec!["Run (cardio)".to_string()]);
}

#[test]
fn failed_query_looks_like_an_empty_roster_and_is_logged() {
    let (view, logs) = load_with_logs(FailingStore);

    let (_dir, conn) = seeded_store(&[]);
    let empty = loaded(conn);

    assert!(!view.is_loading());
    assert_eq!(view.state(), ViewState::Empty);
    assert_eq!(view.lines(), empty.lines());
    assert!(logs.contains("ERROR"), "{logs}");
    assert!(logs.contains("Error loading exercises"), "{logs}");
    assert!(logs.contains("disk I/O error"), "{logs}");
}

#[test]
fn unmigrated_store_counts_as_failure() {
    let (view, logs) = load_with_logs(Connection::open_in_memory().unwrap());

    assert_eq!(view.lines(), vec![EMPTY_MESSAGE.to_string()]);
    assert!(logs.contains("Error loading exercises"), "{logs}");
}

#[test]
fn rows_follow_query_order() {
    let (_dir, conn) = seeded_store(&[
        ("a", "Snatch", "skill", true),
        ("b", "Bike", "cardio", true),
        ("c", "Hip Airplane", "mobility", true),
        ("d", "Bench Press", "resistance", true),
    ]);
    let view = loaded(conn);

    assert_eq!(
        view.lines(),
        vec![
            "Bench Press (resistance)".to_string(),
            "Bike (cardio)".to_string(),
            "Hip Airplane (mobility)".to_string(),
            "Snatch (skill)".to_string(),
        ]
    );
    match view.state() {
        ViewState::Populated(rows) => {
            let ids: Vec<&str> = rows.iter().map(|row| row.id.as_str()).collect();
            assert_eq!(ids, vec!["d", "b", "c", "a"]);
        }
        other => panic!("expected populated view, got {other:?}"),
    }
}

#[test]
fn remounting_renders_the_same_output() {
    let (dir, conn) = seeded_store(&[
        ("1", "Run", "cardio", true),
        ("2", "Squat", "resistance", true),
    ]);
    let first = loaded(conn).lines();
    let second = loaded(open_store(&dir.path().join("arc.db"))).lines();

    assert_eq!(first, second);
}

#[test]
fn fresh_mount_starts_in_loading_state() {
    let view = ExerciseList::mount(FailingStore);

    // The load may already have finished on the worker, but nothing is
    // applied until the view is polled.
    assert!(view.is_loading());
    assert_eq!(view.lines(), vec![LOADING_MESSAGE.to_string()]);
}

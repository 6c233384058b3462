//! The exercise roster: one background read on mount, then a three-way render
//! switch between loading, empty and populated.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use anyhow::{anyhow, Result};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;
use tracing::{debug, error, info};

use crate::db::ExerciseStore;
use crate::models::Exercise;

pub const LOADING_MESSAGE: &str = "Loading exercises...";
/// Shown both for an empty roster and for a failed read.
pub const EMPTY_MESSAGE: &str = "No exercises found.";

type LoadResult = Result<Vec<Exercise>>;

/// What the view currently has to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState<'a> {
    Loading,
    Empty,
    Populated(&'a [Exercise]),
}

pub struct ExerciseList {
    exercises: Vec<Exercise>,
    loading: bool,
    selected: usize,
    /// Receiving end of the in-flight load. Dropping it (with the view) is what
    /// stops a late result from landing anywhere.
    pending: Option<Receiver<LoadResult>>,
}

impl ExerciseList {
    /// Take ownership of `store` and start the single read on a worker thread.
    /// The view starts out loading and stays that way until `poll` or `wait`
    /// picks up the result.
    pub fn mount<S>(store: S) -> Self
    where
        S: ExerciseStore + Send + 'static,
    {
        let mut view = Self {
            exercises: Vec::new(),
            loading: true,
            selected: 0,
            pending: None,
        };

        let (tx, rx) = mpsc::channel();
        let spawned = thread::Builder::new()
            .name("exercise-load".into())
            .spawn(move || {
                let result = store.active_exercises();
                if tx.send(result).is_err() {
                    debug!("exercise list unmounted before the load finished; result dropped");
                }
            });

        match spawned {
            Ok(_) => view.pending = Some(rx),
            Err(err) => {
                let err = anyhow!(err).context("failed to spawn exercise loader");
                view.finish(Err(err));
            }
        }

        view
    }

    /// Apply a finished load without blocking. Returns `true` when the state
    /// changed and the screen should be redrawn.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = self.pending.as_ref() else {
            return false;
        };

        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => Err(loader_gone()),
        };
        self.finish(result);
        true
    }

    /// Block until the load completes. Used for headless output.
    pub fn wait(&mut self) {
        if let Some(rx) = self.pending.take() {
            let result = rx.recv().unwrap_or_else(|_| Err(loader_gone()));
            self.finish(result);
        }
    }

    fn finish(&mut self, result: LoadResult) {
        self.pending = None;
        match result {
            Ok(exercises) => {
                info!(count = exercises.len(), "loaded exercises");
                self.exercises = exercises;
            }
            Err(err) => {
                error!(error = %format!("{err:#}"), "Error loading exercises");
            }
        }
        self.selected = 0;
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn state(&self) -> ViewState<'_> {
        if self.loading {
            ViewState::Loading
        } else if self.exercises.is_empty() {
            ViewState::Empty
        } else {
            ViewState::Populated(&self.exercises)
        }
    }

    /// Text content of the view, one entry per rendered line.
    pub fn lines(&self) -> Vec<String> {
        match self.state() {
            ViewState::Loading => vec![LOADING_MESSAGE.to_string()],
            ViewState::Empty => vec![EMPTY_MESSAGE.to_string()],
            ViewState::Populated(exercises) => {
                exercises.iter().map(Exercise::display_line).collect()
            }
        }
    }

    pub fn selected(&self) -> Option<&Exercise> {
        match self.state() {
            ViewState::Populated(exercises) => exercises.get(self.selected),
            _ => None,
        }
    }

    pub fn move_selection(&mut self, offset: isize) {
        if self.exercises.is_empty() {
            return;
        }
        let last = self.exercises.len() - 1;
        self.selected = self.selected.saturating_add_signed(offset).min(last);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.exercises.len().saturating_sub(1);
    }

    pub(crate) fn draw(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP).title("Exercises");

        match self.state() {
            ViewState::Loading => {
                let message = Paragraph::new(LOADING_MESSAGE)
                    .alignment(Alignment::Left)
                    .block(block);
                frame.render_widget(message, area);
            }
            ViewState::Empty => {
                let message = Paragraph::new(EMPTY_MESSAGE)
                    .alignment(Alignment::Left)
                    .block(block);
                frame.render_widget(message, area);
            }
            ViewState::Populated(exercises) => {
                let items: Vec<ListItem> = exercises
                    .iter()
                    .map(|exercise| ListItem::new(exercise.display_line()))
                    .collect();

                let list = List::new(items)
                    .block(block)
                    .highlight_style(Style::default().fg(Color::Yellow))
                    .highlight_symbol("> ");

                let mut list_state = ListState::default();
                list_state.select(Some(self.selected));
                frame.render_stateful_widget(list, area, &mut list_state);
            }
        }
    }
}

fn loader_gone() -> anyhow::Error {
    anyhow!("exercise loader exited without a result")
}

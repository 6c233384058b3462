use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use super::exercise_list::{ExerciseList, ViewState};

pub const APP_TITLE: &str = "ASCND APP";
/// Rows reserved for the title line plus its spacer.
const HEADER_HEIGHT: u16 = 2;
/// Footer space reserved for key help.
const FOOTER_HEIGHT: u16 = 2;
/// Rows skipped by PageUp/PageDown.
const PAGE_STEP: isize = 10;

/// Top-level state for the single screen.
pub struct App {
    list: ExerciseList,
}

impl App {
    pub fn new(list: ExerciseList) -> Self {
        Self { list }
    }

    pub fn list(&self) -> &ExerciseList {
        &self.list
    }

    /// Pick up background work. Returns `true` when a redraw is due.
    pub fn tick(&mut self) -> bool {
        self.list.poll()
    }

    /// Route a key press. Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Up | KeyCode::Char('k') => self.list.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => self.list.move_selection(1),
            KeyCode::PageUp => self.list.move_selection(-PAGE_STEP),
            KeyCode::PageDown => self.list.move_selection(PAGE_STEP),
            KeyCode::Home => self.list.select_first(),
            KeyCode::End => self.list.select_last(),
            _ => {}
        }
        false
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        self.draw_title(frame, chunks[0]);
        self.list.draw(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_title(&self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new(Span::styled(
            APP_TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Left);
        frame.render_widget(title, area);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let help = match self.list.state() {
            ViewState::Populated(_) => "↑/↓ scroll  Home/End jump  q quit",
            ViewState::Loading | ViewState::Empty => "q quit",
        };
        let paragraph = Paragraph::new(Line::from(help)).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }
}

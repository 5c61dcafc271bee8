//! Interactive terminal table built on ratatui
//!
//! The session is a two-state machine: it keeps running until a quit key
//! (`q`, `Esc`, Ctrl-C) arrives. Every other key is a navigation request
//! applied to the table selection. Rendering and key handling are pure so
//! they can be driven with a `TestBackend`.
//!
//! The table is drawn in an inline viewport below the cursor rather than on
//! the alternate screen, so per-dependency error lines printed before the
//! session stay visible above it and the table remains in scrollback after
//! quitting.

use crate::domain::ComparisonRecord;
use crate::error::UiError;
use crate::output::{COLUMNS, QUIT_HINT};
use ratatui::backend::Backend;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Row, Table, TableState};
use ratatui::{Frame, Terminal, TerminalOptions, Viewport};
use tracing::debug;

/// Rows taken by the table frame: top border, header, bottom border
const TABLE_CHROME: u16 = 3;

/// Page size used before the first draw has measured the viewport
const DEFAULT_PAGE: usize = 10;

/// Session state after handling an input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Running,
    Quit,
}

/// Table session state
pub struct App {
    records: Vec<ComparisonRecord>,
    state: TableState,
    /// Data rows visible in the last drawn frame
    page: usize,
}

impl App {
    /// Create a session over a fixed set of records
    pub fn new(records: Vec<ComparisonRecord>) -> Self {
        let selected = if records.is_empty() { None } else { Some(0) };
        Self {
            records,
            state: TableState::default().with_selected(selected),
            page: DEFAULT_PAGE,
        }
    }

    /// Index of the highlighted row
    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Map one key event to a navigation step or to quitting
    pub fn handle_key(&mut self, key: KeyEvent) -> AppState {
        if key.kind != KeyEventKind::Press {
            return AppState::Running;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return AppState::Quit
            }
            KeyCode::Char('q') | KeyCode::Esc => return AppState::Quit,
            KeyCode::Down | KeyCode::Char('j') => self.move_by(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_by(-1),
            KeyCode::PageDown | KeyCode::Char('f') => self.move_by(self.page as isize),
            KeyCode::PageUp | KeyCode::Char('b') => self.move_by(-(self.page as isize)),
            KeyCode::Home | KeyCode::Char('g') => self.select_edge(false),
            KeyCode::End | KeyCode::Char('G') => self.select_edge(true),
            _ => {}
        }

        AppState::Running
    }

    fn move_by(&mut self, delta: isize) {
        if self.records.is_empty() {
            return;
        }
        let last = self.records.len() as isize - 1;
        let current = self.state.selected().unwrap_or(0) as isize;
        self.state
            .select(Some((current + delta).clamp(0, last) as usize));
    }

    fn select_edge(&mut self, end: bool) {
        if self.records.is_empty() {
            return;
        }
        let index = if end { self.records.len() - 1 } else { 0 };
        self.state.select(Some(index));
    }

    /// Draw the table sized to the record count plus the quit hint below it
    pub fn draw(&mut self, frame: &mut Frame) {
        let rows = u16::try_from(self.records.len()).unwrap_or(u16::MAX);
        let [table_area, hint_area, _] = Layout::vertical([
            Constraint::Length(rows.saturating_add(TABLE_CHROME)),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(frame.area());

        self.page = usize::from(table_area.height.saturating_sub(TABLE_CHROME)).max(1);

        frame.render_stateful_widget(table(&self.records), table_area, &mut self.state);
        frame.render_widget(Line::from(QUIT_HINT), hint_area);
    }

    /// Draw and dispatch input events until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), UiError> {
        loop {
            terminal.draw(|frame| self.draw(frame)).map_err(UiError::Io)?;

            if let Event::Key(key) = event::read().map_err(UiError::Io)? {
                if self.handle_key(key) == AppState::Quit {
                    debug!("quit requested");
                    return Ok(());
                }
            }
        }
    }
}

/// Lines needed to show every record, the table frame and the hint
fn viewport_height(record_count: usize) -> u16 {
    u16::try_from(record_count)
        .unwrap_or(u16::MAX)
        .saturating_add(TABLE_CHROME)
        .saturating_add(1)
}

fn terminal_options(record_count: usize) -> TerminalOptions {
    TerminalOptions {
        viewport: Viewport::Inline(viewport_height(record_count)),
    }
}

fn table(records: &[ComparisonRecord]) -> Table<'_> {
    let header_style = Style::new()
        .fg(Color::Indexed(39))
        .bg(Color::Indexed(236))
        .add_modifier(Modifier::BOLD);
    let selected_style = Style::new()
        .fg(Color::Indexed(229))
        .bg(Color::Indexed(57))
        .add_modifier(Modifier::BOLD);

    let header = Row::new(COLUMNS.map(|(title, _)| title)).style(header_style);
    let rows = records.iter().map(|record| Row::new(record.cells()));
    let widths = COLUMNS.map(|(_, width)| Constraint::Length(width));

    Table::new(rows, widths)
        .header(header)
        .block(Block::bordered().border_style(Style::new().fg(Color::Indexed(240))))
        .row_highlight_style(selected_style)
}

/// Show the records inline in the terminal until the user quits
pub fn run(records: Vec<ComparisonRecord>) -> Result<(), UiError> {
    let options = terminal_options(records.len());
    let mut terminal = ratatui::try_init_with_options(options).map_err(UiError::Init)?;
    let result = App::new(records).run(&mut terminal);
    let restored = ratatui::try_restore().map_err(UiError::Restore);
    result?;
    restored
}

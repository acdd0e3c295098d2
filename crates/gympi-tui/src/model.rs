//! Dashboard application model (Elm architecture).

use std::io;
use std::panic;
use std::time::Duration;

use chrono::{DateTime, Local};
use crossbeam_channel::Receiver;
use crossterm::cursor;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::{Frame, Terminal};
use tracing::debug;

use gympi_core::metrics::summarize_history;
use gympi_core::model::{DeviceStats, DeviceSummary, WorkoutRecord};
use gympi_orchestration::details::DetailRequester;

use crate::chart::{draw_heart_rate_chart, ChartBuilder};
use crate::footer::render_footer;
use crate::grid::{columns_for_width, draw_card_grid, CardGrid};
use crate::header::render_header;
use crate::history::{draw_history_table, HistoryTable};
use crate::keymap::{map_key, KeyAction};
use crate::logs::{render_logs, LogScrollState, WARN_PREFIX};
use crate::messages::TuiMessage;
use crate::styles::ColorTheme;

const MAX_LOGS: usize = 500;
const LOG_PANEL_HEIGHT: u16 = 8;
const LOG_PAGE: usize = (LOG_PANEL_HEIGHT - 2) as usize;

/// The open detail surface.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub device_id: String,
    /// Totals across the whole fetched history.
    pub stats: DeviceStats,
}

/// Dashboard state (Elm Model).
pub struct DashboardApp {
    pub should_quit: bool,
    /// Device card container.
    pub grid: CardGrid,
    /// Index of the card under the cursor.
    pub selected: usize,
    /// History table container of the detail surface.
    pub history_table: HistoryTable,
    /// Owner of the single heart-rate chart.
    pub charts: ChartBuilder,
    /// `Some` while the detail surface is revealed.
    pub detail: Option<DetailView>,
    pub logs: Vec<String>,
    pub log_scroll: LogScrollState,
    pub show_logs: bool,
    /// Time of the last successful device refresh.
    pub last_refresh: Option<DateTime<Local>>,
    pub terminal_width: u16,
    pub terminal_height: u16,
    base_url: String,
    rx: Receiver<TuiMessage>,
    requester: Option<DetailRequester>,
    theme: ColorTheme,
}

impl DashboardApp {
    #[must_use]
    pub fn new(rx: Receiver<TuiMessage>, base_url: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            grid: CardGrid::new(),
            selected: 0,
            history_table: HistoryTable::new(),
            charts: ChartBuilder::new(),
            detail: None,
            logs: Vec::new(),
            log_scroll: LogScrollState::new(),
            show_logs: true,
            last_refresh: None,
            terminal_width: 80,
            terminal_height: 24,
            base_url: base_url.into(),
            rx,
            requester: None,
            theme: ColorTheme::default(),
        }
    }

    /// Attach the channel that activation controls send device ids to.
    #[must_use]
    pub fn with_requester(mut self, requester: DetailRequester) -> Self {
        self.requester = Some(requester);
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Drain pending messages (Elm Update).
    pub fn update(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            self.handle_message(msg);
        }
    }

    pub fn handle_message(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::DevicesLoaded(devices) => self.show_devices(&devices),
            TuiMessage::HistoryLoaded { device_id, history } => {
                self.show_details(device_id, &history);
            }
            TuiMessage::FetchFailed { context, error } => {
                self.push_log(format!("{WARN_PREFIX} {context}: {error}"));
            }
            TuiMessage::Log(line) => self.push_log(line),
            TuiMessage::Resize { width, height } => {
                self.terminal_width = width;
                self.terminal_height = height;
            }
            TuiMessage::KeyPress(action) => self.handle_key_action(action),
            TuiMessage::Quit => self.should_quit = true,
        }
    }

    fn show_devices(&mut self, devices: &[DeviceSummary]) {
        self.grid.render_device_grid(devices);
        self.selected = self.selected.min(self.grid.len().saturating_sub(1));
        self.last_refresh = Some(Local::now());
        debug!(devices = devices.len(), "grid refreshed");
    }

    /// Populate the table and chart, then reveal the detail surface.
    fn show_details(&mut self, device_id: String, history: &[WorkoutRecord]) {
        self.history_table.render_history_table(history);
        self.charts.render_heart_rate_chart(history);
        self.push_log(format!(
            "Loaded {} workouts for device {device_id}",
            history.len()
        ));
        self.detail = Some(DetailView {
            device_id,
            stats: summarize_history(history),
        });
    }

    /// Hide the detail surface and release its chart.
    pub fn close_details(&mut self) {
        if self.detail.take().is_some() {
            self.charts.release();
        }
    }

    /// Trigger the selected card's activation control.
    ///
    /// Returns whether a request was queued.
    pub fn activate_selected(&mut self) -> bool {
        let Some(card) = self.grid.cards().get(self.selected) else {
            return false;
        };
        let target = card.control.target().to_string();
        let queued = self
            .requester
            .as_ref()
            .is_some_and(|requester| requester.request(&target));
        if queued {
            self.push_log(format!("Fetching history for device {target}"));
        } else {
            self.push_log(format!("{WARN_PREFIX} detail fetch unavailable for {target}"));
        }
        queued
    }

    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::Back => {
                if self.detail.is_some() {
                    self.close_details();
                } else {
                    self.should_quit = true;
                }
            }
            KeyAction::Activate if self.detail.is_none() => {
                self.activate_selected();
            }
            KeyAction::Left | KeyAction::Right | KeyAction::Up | KeyAction::Down
                if self.detail.is_none() =>
            {
                self.move_selection(action);
            }
            KeyAction::ToggleLogs => self.show_logs = !self.show_logs,
            KeyAction::PageUp => self.log_scroll.page_up(LOG_PAGE),
            KeyAction::PageDown => self.log_scroll.page_down(LOG_PAGE, self.logs.len()),
            KeyAction::Home => self.log_scroll.home(),
            KeyAction::End => self.log_scroll.end(self.logs.len()),
            _ => {}
        }
    }

    fn move_selection(&mut self, action: KeyAction) {
        let len = self.grid.len();
        if len == 0 {
            return;
        }
        let columns = self.grid_columns();
        self.selected = match action {
            KeyAction::Left => self.selected.saturating_sub(1),
            KeyAction::Right => (self.selected + 1).min(len - 1),
            KeyAction::Up => self.selected.checked_sub(columns).unwrap_or(self.selected),
            KeyAction::Down if self.selected + columns < len => self.selected + columns,
            _ => self.selected,
        };
    }

    /// Card columns at the current terminal width.
    #[must_use]
    pub fn grid_columns(&self) -> usize {
        columns_for_width(self.terminal_width.saturating_sub(2))
    }

    fn push_log(&mut self, line: String) {
        self.logs.push(line);
        if self.logs.len() > MAX_LOGS {
            self.logs.remove(0);
            self.log_scroll.offset = self.log_scroll.offset.saturating_sub(1);
        }
        self.log_scroll.on_new_message(self.logs.len());
    }

    /// Split the screen into header, grid, optional log panel and footer.
    #[must_use]
    pub fn compute_layout(area: Rect, show_logs: bool) -> (Rect, Rect, Option<Rect>, Rect) {
        let log_height = if show_logs { LOG_PANEL_HEIGHT } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(3),
                Constraint::Length(log_height),
                Constraint::Length(2),
            ])
            .split(area);
        let logs = show_logs.then_some(chunks[2]);
        (chunks[0], chunks[1], logs, chunks[3])
    }

    /// Area of the detail overlay inside `area`.
    #[must_use]
    pub fn detail_area(area: Rect) -> Rect {
        let width = area.width.saturating_mul(9) / 10;
        let height = area.height.saturating_mul(17) / 20;
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }

    /// Render the full view (Elm View).
    pub fn render(&self, frame: &mut Frame) {
        let (header, grid, logs, footer) = Self::compute_layout(frame.area(), self.show_logs);

        render_header(
            frame,
            header,
            &self.base_url,
            self.grid.len(),
            self.last_refresh,
            &self.theme,
        );
        draw_card_grid(frame, grid, &self.grid, self.selected, &self.theme);
        if let Some(area) = logs {
            render_logs(frame, area, &self.logs, self.log_scroll.offset, &self.theme);
        }
        render_footer(frame, footer, self.detail.is_some(), &self.theme);

        if let Some(detail) = &self.detail {
            self.render_detail(frame, detail);
        }
    }

    fn render_detail(&self, frame: &mut Frame, detail: &DetailView) {
        let area = Self::detail_area(frame.area());
        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                format!(" Device {} ", detail.device_id),
                self.theme.header_style(),
            ))
            .border_style(self.theme.selected_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Percentage(45),
                Constraint::Min(5),
            ])
            .split(inner);

        let label = self.theme.muted_style();
        let summary = Line::from(vec![
            Span::styled("Workouts: ", label),
            Span::raw(detail.stats.total_workouts.to_string()),
            Span::styled("  Exercises: ", label),
            Span::raw(detail.stats.total_exercises.to_string()),
            Span::styled("  Avg HR: ", label),
            Span::styled(
                format!("{:.1} BPM", detail.stats.average_heart_rate),
                self.theme.accent_style(),
            ),
        ]);
        frame.render_widget(Paragraph::new(summary), chunks[0]);
        draw_history_table(frame, chunks[1], &self.history_table, &self.theme);
        draw_heart_rate_chart(frame, chunks[2], self.charts.current(), &self.theme);
    }

    /// Set up the terminal for TUI mode.
    ///
    /// Raw mode is switched back off if any later step fails.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            restore_terminal();
            return Err(e);
        }
        Terminal::new(CrosstermBackend::new(stdout)).inspect_err(|_| restore_terminal())
    }

    /// Restore the terminal to normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the event loop until the user quits.
    pub fn run(&mut self) -> io::Result<()> {
        install_panic_hook();
        let mut terminal = Self::setup_terminal()?;
        let size = terminal.size()?;
        self.terminal_width = size.width;
        self.terminal_height = size.height;

        let result = self.event_loop(&mut terminal);
        Self::teardown_terminal(&mut terminal)?;
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let tick_rate = Duration::from_millis(250);
        loop {
            terminal.draw(|frame| self.render(frame))?;
            if self.should_quit {
                return Ok(());
            }

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_message(TuiMessage::KeyPress(map_key(key)));
                    }
                    Event::Resize(width, height) => {
                        self.handle_message(TuiMessage::Resize { width, height });
                    }
                    _ => {}
                }
            }

            self.update();
        }
    }
}

/// Write the sequences that leave the alternate screen and show the cursor.
pub fn write_restore_sequence<W: io::Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, cursor::Show)
}

/// Best-effort terminal restore for failure paths and panics.
pub fn restore_terminal() {
    let _ = terminal::disable_raw_mode();
    let _ = write_restore_sequence(&mut io::stdout());
}

/// Restore the terminal before the previous panic hook prints its report.
fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        restore_terminal();
        previous(info);
    }));
}

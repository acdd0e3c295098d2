//! Scrollable activity log panel.

use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Prefix of log lines produced by failed fetches.
pub const WARN_PREFIX: &str = "[WARN]";

/// Scroll state for the log panel.
#[derive(Debug, Clone)]
pub struct LogScrollState {
    /// First visible line index.
    pub offset: usize,
    /// Follow new lines as they arrive.
    pub auto_scroll: bool,
}

impl LogScrollState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            offset: 0,
            auto_scroll: true,
        }
    }

    pub fn on_new_message(&mut self, total_logs: usize) {
        if self.auto_scroll {
            self.offset = total_logs.saturating_sub(1);
        }
    }

    pub fn page_up(&mut self, page_size: usize) {
        self.auto_scroll = false;
        self.offset = self.offset.saturating_sub(page_size);
    }

    pub fn page_down(&mut self, page_size: usize, total_logs: usize) {
        let last = total_logs.saturating_sub(1);
        self.offset = (self.offset + page_size).min(last);
        self.auto_scroll = self.offset >= last;
    }

    pub fn home(&mut self) {
        self.auto_scroll = false;
        self.offset = 0;
    }

    pub fn end(&mut self, total_logs: usize) {
        self.auto_scroll = true;
        self.offset = total_logs.saturating_sub(1);
    }
}

impl Default for LogScrollState {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the log panel starting at `scroll_offset`.
pub fn render_logs(
    frame: &mut Frame,
    area: Rect,
    logs: &[String],
    scroll_offset: usize,
    theme: &ColorTheme,
) {
    let visible_height = usize::from(area.height.saturating_sub(2));
    // Keep the last page full when following the tail.
    let start = scroll_offset.min(logs.len().saturating_sub(visible_height));

    let items: Vec<ListItem> = logs
        .iter()
        .skip(start)
        .take(visible_height)
        .map(|log| {
            let style = if log.starts_with(WARN_PREFIX) {
                theme.error_style()
            } else {
                theme.text_style()
            };
            ListItem::new(Line::raw(log.as_str())).style(style)
        })
        .collect();

    let title = if logs.len() > visible_height {
        format!(" Activity ({}/{}) ", start + items.len(), logs.len())
    } else {
        " Activity ".to_string()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(theme.muted_style()),
    );
    frame.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn follows_tail_by_default() {
        let mut state = LogScrollState::new();
        state.on_new_message(10);
        assert_eq!(state.offset, 9);
    }

    #[test]
    fn page_up_stops_following() {
        let mut state = LogScrollState::new();
        state.offset = 15;
        state.page_up(10);
        assert_eq!(state.offset, 5);
        assert!(!state.auto_scroll);

        state.on_new_message(30);
        assert_eq!(state.offset, 5);
    }

    #[test]
    fn page_down_to_end_resumes_following() {
        let mut state = LogScrollState::new();
        state.home();
        state.page_down(100, 20);
        assert_eq!(state.offset, 19);
        assert!(state.auto_scroll);
    }

    #[test]
    fn end_jumps_to_last_line() {
        let mut state = LogScrollState::new();
        state.home();
        state.end(30);
        assert_eq!(state.offset, 29);
        assert!(state.auto_scroll);
    }

    #[test]
    fn render_shows_last_page() {
        let logs: Vec<String> = (0..20).map(|i| format!("line {i}")).collect();
        let mut terminal = Terminal::new(TestBackend::new(40, 6)).unwrap();
        let frame = terminal
            .draw(|frame| render_logs(frame, frame.area(), &logs, 19, &ColorTheme::default()))
            .unwrap();
        let all: String = (0..frame.area.height)
            .flat_map(|y| (0..frame.area.width).map(move |x| (x, y)))
            .map(|(x, y)| frame.buffer[(x, y)].symbol().to_string())
            .collect();
        assert!(all.contains("line 19"));
        assert!(all.contains("line 16"));
        assert!(all.contains("20/20"));
    }
}

//! Dashboard color theme.

use ratatui::style::{Color, Modifier, Style};

/// Color theme for the dashboard.
pub struct ColorTheme {
    pub primary: Color,
    pub accent: Color,
    pub success: Color,
    pub error: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub selected: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::LightRed,
            success: Color::Green,
            error: Color::Red,
            text: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
            selected: Color::Yellow,
        }
    }
}

impl ColorTheme {
    /// Titles and table headers.
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Labels and placeholders.
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Heart-rate figures.
    #[must_use]
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Border and hint of the card under the cursor.
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.selected)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_differs_from_border() {
        let theme = ColorTheme::default();
        assert_ne!(theme.selected_style(), theme.border_style());
    }

    #[test]
    fn header_is_bold() {
        let theme = ColorTheme::default();
        assert!(theme.header_style().add_modifier.contains(Modifier::BOLD));
    }
}

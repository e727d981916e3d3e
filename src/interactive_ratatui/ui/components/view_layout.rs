use crate::interactive_ratatui::constants::{STATUS_BAR_HEIGHT, TITLE_BAR_HEIGHT};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Title row, mode content, and the `status | error | help` footer
#[derive(Default)]
pub struct ViewLayout {
    title: Option<String>,
    status: String,
    error: String,
    help: String,
}

impl ViewLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_status(mut self, status: &str, error: &str, help: &str) -> Self {
        self.status = status.to_string();
        self.error = error.to_string();
        self.help = help.to_string();
        self
    }

    pub fn render<F>(&self, f: &mut Frame, area: Rect, render_content: F)
    where
        F: FnOnce(&mut Frame, Rect),
    {
        let title_height = if self.title.is_some() {
            TITLE_BAR_HEIGHT
        } else {
            0
        };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(title_height),
                Constraint::Min(0),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .split(area);

        if let Some(title) = &self.title {
            f.render_widget(Paragraph::new(Span::styled(title.as_str(), Styles::title())), chunks[0]);
        }
        render_content(f, chunks[1]);
        f.render_widget(Paragraph::new(self.footer_line()), chunks[2]);
    }

    /// Non-empty parts joined by ` | `; the help text is always present
    pub fn footer_line(&self) -> Line<'_> {
        let mut spans = Vec::new();
        for (text, style) in [
            (self.status.as_str(), Styles::status()),
            (self.error.as_str(), Styles::error()),
        ] {
            if !text.is_empty() {
                spans.push(Span::styled(text, style));
                spans.push(Span::raw(" | "));
            }
        }
        spans.push(Span::styled(self.help.as_str(), Styles::help()));
        Line::from(spans)
    }
}

pub struct Styles;

impl Styles {
    pub fn title() -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    pub fn status() -> Style {
        Style::default().fg(Color::Indexed(241))
    }

    pub fn error() -> Style {
        Style::default().fg(Color::Indexed(203))
    }

    pub fn help() -> Style {
        Style::default().fg(Color::DarkGray)
    }
}

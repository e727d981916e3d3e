use crate::formatters::truncate_chars;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Trait for entries shown by [`super::list_viewer::ListViewer`]
pub trait ListItem: Clone {
    /// First line: what the entry is
    fn title(&self) -> String;

    /// Second line: supporting detail
    fn description(&self) -> String;

    fn title_color(&self) -> Color {
        Color::White
    }

    /// Both display lines, each bounded to `max_width` characters
    fn to_lines(&self, max_width: usize) -> Vec<Line<'static>> {
        let description_width = max_width.saturating_sub(2);
        vec![
            Line::from(Span::styled(
                truncate_chars(&single_line(&self.title()), max_width),
                Style::default()
                    .fg(self.title_color())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    truncate_chars(&single_line(&self.description()), description_width),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
        ]
    }
}

/// Collapse line breaks so an entry never spills past its two rows
pub fn single_line(text: &str) -> String {
    text.replace(['\n', '\r'], " ")
}

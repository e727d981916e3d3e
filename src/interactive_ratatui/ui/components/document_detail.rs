use super::{Component, movement_for_key};
use crate::formatters::styled_json_lines;
use crate::interactive_ratatui::domain::models::DocumentItem;
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

/// Scrollable pretty-printed payload of one document
#[derive(Default)]
pub struct DocumentDetail {
    document: Option<DocumentItem>,
    lines: Vec<Line<'static>>,
    scroll: usize,
}

impl DocumentDetail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_document(&mut self, document: &DocumentItem, scroll: usize) {
        if self.document.as_ref() != Some(document) {
            self.lines = styled_json_lines(&document.record.source);
            self.document = Some(document.clone());
        }
        self.scroll = scroll;
    }
}

impl Component for DocumentDetail {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let total = self.lines.len();
        let title = format!("Payload [{}/{}]", (self.scroll + 1).min(total), total);
        let scroll = u16::try_from(self.scroll).unwrap_or(u16::MAX);
        let paragraph = Paragraph::new(self.lines.clone())
            .block(Block::default().title(title).borders(Borders::ALL))
            .scroll((scroll, 0));
        f.render_widget(paragraph, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if let Some(movement) = movement_for_key(key, true) {
            return Some(Message::Navigate(movement));
        }
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter | KeyCode::Char('v') => {
                Some(Message::CloseDetail)
            }
            _ => None,
        }
    }
}

use super::list_item::ListItem;
use super::list_viewer::ListViewer;
use super::{Component, is_ctrl_c, movement_for_key};
use crate::formatters::display_document_title;
use crate::interactive_ratatui::domain::models::DocumentItem;
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Frame, layout::Rect, style::Color};

impl ListItem for DocumentItem {
    fn title(&self) -> String {
        display_document_title(self.id()).to_string()
    }

    fn description(&self) -> String {
        self.preview.clone()
    }

    fn title_color(&self) -> Color {
        if self.id().trim().is_empty() {
            Color::DarkGray
        } else {
            Color::Cyan
        }
    }
}

pub struct DocumentList {
    viewer: ListViewer<DocumentItem>,
}

impl Default for DocumentList {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentList {
    pub fn new() -> Self {
        Self {
            viewer: ListViewer::new("Documents".to_string(), "No documents".to_string()),
        }
    }

    pub fn set_documents(&mut self, documents: Vec<DocumentItem>) {
        self.viewer.set_items(documents);
    }

    pub fn set_selected_index(&mut self, index: usize) {
        self.viewer.set_selected_index(index);
    }
}

impl Component for DocumentList {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        self.viewer.render(f, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if is_ctrl_c(&key) {
            return Some(Message::Quit);
        }
        if let Some(movement) = movement_for_key(key, true) {
            return Some(Message::Navigate(movement));
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Message::BackToCollections),
            KeyCode::Char('r') => Some(Message::RefreshDocuments),
            KeyCode::Char('/') => Some(Message::OpenQueryEditor),
            KeyCode::Char('n') => Some(Message::NewDocument),
            KeyCode::Char('x') | KeyCode::Delete => Some(Message::RequestDelete),
            KeyCode::Enter | KeyCode::Char('v') => Some(Message::ViewDocument),
            _ => None,
        }
    }
}

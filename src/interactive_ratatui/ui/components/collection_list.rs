use super::list_item::ListItem;
use super::list_viewer::ListViewer;
use super::{Component, is_ctrl_c, movement_for_key};
use crate::gateway::{CollectionSummary, Health};
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Frame, layout::Rect, style::Color};

impl ListItem for CollectionSummary {
    fn title(&self) -> String {
        format!("{} ({} docs)", self.name, self.docs_count)
    }

    fn description(&self) -> String {
        format!(
            "health={} status={} size={}",
            self.health.as_str(),
            self.status.as_str(),
            self.display_size()
        )
    }

    fn title_color(&self) -> Color {
        match self.health {
            Health::Green => Color::Green,
            Health::Yellow => Color::Yellow,
            Health::Red => Color::Red,
            Health::Unknown => Color::White,
        }
    }
}

pub struct CollectionList {
    viewer: ListViewer<CollectionSummary>,
}

impl Default for CollectionList {
    fn default() -> Self {
        Self::new()
    }
}

impl CollectionList {
    pub fn new() -> Self {
        Self {
            viewer: ListViewer::new("Indices".to_string(), "No indices".to_string()),
        }
    }

    pub fn set_collections(&mut self, collections: Vec<CollectionSummary>) {
        self.viewer.set_items(collections);
    }

    pub fn set_selected_index(&mut self, index: usize) {
        self.viewer.set_selected_index(index);
    }
}

impl Component for CollectionList {
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
            KeyCode::Char('q') => Some(Message::Quit),
            KeyCode::Char('r') => Some(Message::RefreshCollections),
            KeyCode::Enter => Some(Message::OpenCollection),
            _ => None,
        }
    }
}

use crate::formatters::{DEFAULT_PREVIEW_LEN, display_document_title, preview_compact_json};
use crate::gateway::DocumentRecord;
use std::time::Duration;

/// The active screen, carrying only the data that screen needs
#[derive(Clone, Debug, PartialEq)]
pub enum Mode {
    CollectionBrowser,
    DocumentBrowser,
    QueryEditor,
    DocumentCreator { step: CreateStep },
    DeleteConfirmation { pending: DocumentItem },
    DocumentDetail { document: DocumentItem, scroll: usize },
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::CollectionBrowser => "collections",
            Mode::DocumentBrowser => "documents",
            Mode::QueryEditor => "query",
            Mode::DocumentCreator { .. } => "create",
            Mode::DeleteConfirmation { .. } => "delete",
            Mode::DocumentDetail { .. } => "detail",
        }
    }

    /// Key help shown in the footer
    pub fn help_text(&self) -> &'static str {
        match self {
            Mode::CollectionBrowser => "enter:open index r:refresh q:quit",
            Mode::DocumentBrowser => "esc:back r:refresh /:query n:new x:delete enter:view q:quit",
            Mode::QueryEditor => "enter:run esc:cancel",
            Mode::DocumentCreator {
                step: CreateStep::Id,
            } => "enter:next esc:cancel",
            Mode::DocumentCreator {
                step: CreateStep::Body,
            } => "enter:create esc:cancel",
            Mode::DeleteConfirmation { .. } => "y:confirm n:cancel",
            Mode::DocumentDetail { .. } => "esc/q:back arrows/jk:scroll",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CreateStep {
    Id,
    Body,
}

/// Cursor movement within a list or the detail view
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Movement {
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
}

impl Movement {
    /// Apply the movement to `position` within `0..len`, paging by `page`.
    pub fn apply(self, position: usize, len: usize, page: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let last = len - 1;
        let page = page.max(1);
        let next = match self {
            Movement::Up => position.saturating_sub(1),
            Movement::Down => position.saturating_add(1),
            Movement::PageUp => position.saturating_sub(page),
            Movement::PageDown => position.saturating_add(page),
            Movement::Home => 0,
            Movement::End => last,
        };
        next.min(last)
    }
}

/// A document row as shown in the document list
#[derive(Clone, Debug, PartialEq, Default)]
pub struct DocumentItem {
    pub record: DocumentRecord,
    pub preview: String,
}

impl DocumentItem {
    pub fn new(record: DocumentRecord) -> Self {
        let preview = preview_compact_json(&record.source, DEFAULT_PREVIEW_LEN);
        Self { record, preview }
    }

    pub fn id(&self) -> &str {
        &self.record.id
    }

    pub fn title(&self) -> &str {
        display_document_title(&self.record.id)
    }
}

/// A fetched page plus the field paths seen in its payloads
#[derive(Clone, Debug, PartialEq, Default)]
pub struct DocumentPage {
    pub items: Vec<DocumentItem>,
    pub took: Duration,
    pub fields: Vec<String>,
}

/// Completion of a query-page fetch, tagged with what it was computed for
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentsLoaded {
    pub collection: String,
    pub query: String,
    pub outcome: Result<DocumentPage, String>,
}

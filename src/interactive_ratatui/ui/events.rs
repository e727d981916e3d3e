use crate::gateway::CollectionSummary;
use crate::interactive_ratatui::domain::models::{DocumentsLoaded, Movement};
use crossterm::event::{Event, KeyEvent};

/// Everything the UI loop drains from its single queue
#[derive(Clone, Debug)]
pub enum AppEvent {
    Input(Event),
    Message(Message),
}

#[derive(Clone, Debug)]
pub enum Message {
    // Navigation
    Navigate(Movement),
    Resize(u16, u16),

    // Index browsing
    RefreshCollections,
    OpenCollection,

    // Document browsing
    BackToCollections,
    RefreshDocuments,
    OpenQueryEditor,
    NewDocument,
    RequestDelete,
    ViewDocument,

    // Query editor
    EditQuery(KeyEvent),
    SubmitQuery,
    CancelQuery,

    // Document creator
    EditCreator(KeyEvent),
    SubmitCreator,
    CancelCreate,

    // Delete confirmation
    ConfirmDelete,
    DeclineDelete,

    // Detail view
    CloseDetail,

    // Command completions
    CollectionsLoaded(Result<Vec<CollectionSummary>, String>),
    DocumentsLoaded(DocumentsLoaded),
    FieldsLoaded(Result<Vec<String>, String>),
    DocumentCreated(Result<String, String>),
    DocumentDeleted {
        id: String,
        outcome: Result<(), String>,
    },

    Quit,
}

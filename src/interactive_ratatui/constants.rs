//! Constants for the interactive browser
//!
//! Layout sizes and the fixed texts shown by the query editor and creator.

// Timing constants
/// Event polling interval in milliseconds
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

// UI Layout constants
/// Height of the title bar above list views
pub const TITLE_BAR_HEIGHT: u16 = 1;

/// Height of the `status | error | help` footer
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Rows taken by list and detail borders
pub const BORDER_ROWS: u16 = 2;

/// Terminal lines each list entry occupies
pub const LIST_ITEM_HEIGHT: usize = 2;

/// Viewport assumed before the first resize event arrives
pub const DEFAULT_VIEWPORT: (u16, u16) = (80, 24);

// Query editor texts
pub const QUERY_SYNTAX_HELP: &str = "Use Elasticsearch query_string syntax (blank => match_all)";

pub const QUERY_EXAMPLES: &str =
    "Examples: status:200, host:api* AND duration:[0 TO 50], (error OR warning) AND service:web";

// Document creator texts
/// Body the creator starts from on every fresh entry
pub const NEW_DOCUMENT_TEMPLATE: &str = r#"{"field": "value"}"#;

pub const ID_PROMPT: &str = "Document ID (blank => auto):";

pub const BODY_PROMPT: &str = "Document body (compact JSON):";

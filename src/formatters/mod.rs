pub mod json_formatter;


pub use json_formatter::{
    DEFAULT_PREVIEW_LEN, EMPTY_SOURCE, GENERATED_ID_TITLE, JsonStyles, MAX_FIELDS_DISPLAY,
    collect_field_paths, display_document_title, empty_query_placeholder, format_full_json,
    payload_field_paths, preview_compact_json, render_field_hint, styled_json_lines,
    truncate_chars,
};

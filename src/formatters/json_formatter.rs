use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// Default bound for single-line document previews
pub const DEFAULT_PREVIEW_LEN: usize = 160;

/// Shown in place of an empty `_source`
pub const EMPTY_SOURCE: &str = "(no _source)";

/// Title used for documents without an id
pub const GENERATED_ID_TITLE: &str = "<generated id>";

/// Maximum number of field names listed in the query hint
pub const MAX_FIELDS_DISPLAY: usize = 25;

const INDENT: &str = "  ";
const TRUNCATION_SUFFIX: &str = "...";

/// Token colours for the detail view
pub struct JsonStyles;

impl JsonStyles {
    pub fn key() -> Style {
        Style::default().fg(Color::Indexed(75))
    }

    pub fn string() -> Style {
        Style::default().fg(Color::Indexed(214))
    }

    pub fn number() -> Style {
        Style::default().fg(Color::Indexed(81))
    }

    pub fn boolean() -> Style {
        Style::default().fg(Color::Indexed(205))
    }

    pub fn null() -> Style {
        Style::default().fg(Color::Indexed(244))
    }
}

#[derive(Default)]
struct LineBuilder {
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
}

impl LineBuilder {
    fn push(&mut self, text: impl Into<String>, style: Style) {
        self.current.push(Span::styled(text.into(), style));
    }

    fn raw(&mut self, text: impl Into<String>) {
        self.current.push(Span::raw(text.into()));
    }

    fn indent(&mut self, depth: usize) {
        if depth > 0 {
            self.raw(INDENT.repeat(depth));
        }
    }

    fn newline(&mut self) {
        let spans = std::mem::take(&mut self.current);
        self.lines.push(Line::from(spans));
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        if !self.current.is_empty() {
            self.newline();
        }
        self.lines
    }
}

/// Pretty-print a payload as coloured lines with keys in sorted order.
pub fn styled_json_lines(payload: &Map<String, Value>) -> Vec<Line<'static>> {
    if payload.is_empty() {
        return vec![Line::from(EMPTY_SOURCE)];
    }
    let mut builder = LineBuilder::default();
    render_object(payload, 0, &mut builder);
    builder.finish()
}

/// Plain-text form of [`styled_json_lines`].
pub fn format_full_json(payload: &Map<String, Value>) -> String {
    styled_json_lines(payload)
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_value(value: &Value, depth: usize, builder: &mut LineBuilder) {
    match value {
        Value::Object(map) => render_object(map, depth, builder),
        Value::Array(items) => {
            if items.is_empty() {
                builder.raw("[]");
                return;
            }
            builder.raw("[");
            builder.newline();
            for (i, item) in items.iter().enumerate() {
                builder.indent(depth + 1);
                render_value(item, depth + 1, builder);
                if i + 1 < items.len() {
                    builder.raw(",");
                }
                builder.newline();
            }
            builder.indent(depth);
            builder.raw("]");
        }
        Value::String(s) => builder.push(quote(s), JsonStyles::string()),
        Value::Number(n) => builder.push(n.to_string(), JsonStyles::number()),
        Value::Bool(b) => builder.push(b.to_string(), JsonStyles::boolean()),
        Value::Null => builder.push("null", JsonStyles::null()),
    }
}

fn render_object(map: &Map<String, Value>, depth: usize, builder: &mut LineBuilder) {
    if map.is_empty() {
        builder.raw("{}");
        return;
    }

    let mut keys: Vec<&String> = map.keys().collect();
    keys.sort();

    builder.raw("{");
    builder.newline();
    for (i, key) in keys.iter().enumerate() {
        builder.indent(depth + 1);
        builder.push(quote(key), JsonStyles::key());
        builder.raw(": ");
        render_value(&map[key.as_str()], depth + 1, builder);
        if i + 1 < keys.len() {
            builder.raw(",");
        }
        builder.newline();
    }
    builder.indent(depth);
    builder.raw("}");
}

fn quote(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| format!("\"{value}\""))
}

/// Compact single-line JSON bounded to `max_len` characters.
pub fn preview_compact_json(payload: &Map<String, Value>, max_len: usize) -> String {
    if payload.is_empty() {
        return EMPTY_SOURCE.to_string();
    }
    let compact = serde_json::to_string(payload).unwrap_or_else(|_| format_full_json(payload));
    truncate_chars(&compact, max_len)
}

/// Truncate to at most `max_len` characters, ending with `...` when cut.
///
/// A bound of zero disables truncation.
pub fn truncate_chars(value: &str, max_len: usize) -> String {
    if max_len == 0 || value.chars().count() <= max_len {
        return value.to_string();
    }
    if max_len <= TRUNCATION_SUFFIX.len() {
        return value.chars().take(max_len).collect();
    }
    let kept: String = value
        .chars()
        .take(max_len - TRUNCATION_SUFFIX.len())
        .collect();
    format!("{kept}{TRUNCATION_SUFFIX}")
}

/// Collect dotted field paths from `value` into `out`.
///
/// Arrays are walked transparently: their indices never appear in a path.
pub fn collect_field_paths(value: &Value, prefix: &str, out: &mut BTreeSet<String>) {
    match value {
        Value::Object(map) => collect_object_paths(map, prefix, out),
        Value::Array(items) => {
            for item in items {
                collect_field_paths(item, prefix, out);
            }
        }
        _ => {}
    }
}

/// Field paths referenced by a document payload
pub fn payload_field_paths(payload: &Map<String, Value>, out: &mut BTreeSet<String>) {
    collect_object_paths(payload, "", out);
}

fn collect_object_paths(map: &Map<String, Value>, prefix: &str, out: &mut BTreeSet<String>) {
    for (key, child) in map {
        let field = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        collect_field_paths(child, &field, out);
        out.insert(field);
    }
}

pub fn display_document_title(id: &str) -> &str {
    if id.trim().is_empty() {
        GENERATED_ID_TITLE
    } else {
        id
    }
}

pub fn empty_query_placeholder(query: &str) -> &str {
    if query.trim().is_empty() {
        "match_all"
    } else {
        query
    }
}

/// One-line hint listing known field names
pub fn render_field_hint(fields: &[String]) -> String {
    if fields.is_empty() {
        return String::new();
    }
    let shown = fields.len().min(MAX_FIELDS_DISPLAY);
    let mut text = format!("Fields: {}", fields[..shown].join(", "));
    if fields.len() > MAX_FIELDS_DISPLAY {
        text.push_str(&format!(" … (+{} more)", fields.len() - MAX_FIELDS_DISPLAY));
    }
    text
}

//! Parsing and formatting of index store sizes.
//!
//! `_cat/indices` reports sizes either as a raw byte count or as a decimal
//! number followed by a unit suffix. Both use binary (1024-based) multipliers.

const UNITS: [(&str, u64); 6] = [
    ("pb", 1 << 50),
    ("tb", 1 << 40),
    ("gb", 1 << 30),
    ("mb", 1 << 20),
    ("kb", 1 << 10),
    ("b", 1),
];

const DISPLAY_UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

/// Parse a store size such as `512`, `10kb` or `1.5GB` into bytes.
///
/// Unparsable input yields 0.
pub fn parse_store_size(value: &str) -> u64 {
    let value = value.trim().to_ascii_lowercase();
    if value.is_empty() {
        return 0;
    }
    if let Ok(bytes) = value.parse::<u64>() {
        return bytes;
    }

    for (suffix, factor) in UNITS {
        if let Some(number) = value.strip_suffix(suffix) {
            if let Ok(parsed) = number.trim().parse::<f64>() {
                if parsed.is_finite() && parsed >= 0.0 {
                    return (parsed * factor as f64) as u64;
                }
            }
        }
    }
    0
}

/// Format a byte count with binary prefixes, e.g. `1.50 KB`.
pub fn human_bytes(value: u64) -> String {
    if value == 0 {
        return "0 B".to_string();
    }

    let mut scaled = value as f64;
    let mut unit = 0;
    while scaled >= 1024.0 && unit < DISPLAY_UNITS.len() - 1 {
        scaled /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{value} {}", DISPLAY_UNITS[0])
    } else {
        format!("{scaled:.2} {}", DISPLAY_UNITS[unit])
    }
}

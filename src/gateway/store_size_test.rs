#[cfg(test)]
mod tests {
    use super::super::models::{CollectionSummary, Health, IndexStatus};
    use super::super::store_size::{human_bytes, parse_store_size};

    fn summary(store_size: &str, store_bytes: u64) -> CollectionSummary {
        CollectionSummary {
            name: "logs".to_string(),
            health: Health::Green,
            status: IndexStatus::Open,
            docs_count: 3,
            store_size: store_size.to_string(),
            store_bytes,
        }
    }

    #[test]
    fn test_parse_units() {
        assert_eq!(parse_store_size("10kb"), 10240);
        assert_eq!(parse_store_size("1gb"), 1_073_741_824);
        assert_eq!(parse_store_size("2mb"), 2 * 1024 * 1024);
        assert_eq!(parse_store_size("3b"), 3);
        assert_eq!(parse_store_size("1pb"), 1 << 50);
    }

    #[test]
    fn test_parse_bare_integer() {
        assert_eq!(parse_store_size("512"), 512);
        assert_eq!(parse_store_size("  42 "), 42);
    }

    #[test]
    fn test_parse_is_case_insensitive_and_fractional() {
        assert_eq!(parse_store_size("1.5KB"), 1536);
        assert_eq!(parse_store_size("0.5 mb"), 512 * 1024);
        assert_eq!(parse_store_size("2TB"), 2 * (1 << 40));
    }

    #[test]
    fn test_parse_garbage_is_zero() {
        assert_eq!(parse_store_size("bogus"), 0);
        assert_eq!(parse_store_size(""), 0);
        assert_eq!(parse_store_size("kb"), 0);
        assert_eq!(parse_store_size("-1kb"), 0);
    }

    #[test]
    fn test_human_bytes() {
        assert_eq!(human_bytes(0), "0 B");
        assert_eq!(human_bytes(512), "512 B");
        assert_eq!(human_bytes(1536), "1.50 KB");
        assert_eq!(human_bytes(1_073_741_824), "1.00 GB");
    }

    #[test]
    fn test_display_size_fallbacks() {
        assert_eq!(summary("10kb", 10240).display_size(), "10.00 KB");
        assert_eq!(summary("weird", 0).display_size(), "weird");
        assert_eq!(summary("  ", 0).display_size(), "n/a");
    }

    #[test]
    fn test_health_and_status_parsing() {
        assert_eq!(Health::parse("GREEN"), Health::Green);
        assert_eq!(Health::parse("yellow"), Health::Yellow);
        assert_eq!(Health::parse("red"), Health::Red);
        assert_eq!(Health::parse(""), Health::Unknown);
        assert_eq!(IndexStatus::parse("open"), IndexStatus::Open);
        assert_eq!(IndexStatus::parse("close"), IndexStatus::Close);
        assert_eq!(IndexStatus::parse("frozen"), IndexStatus::Unknown);
    }
}

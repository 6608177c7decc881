//! Shared formatting helpers for terminal output

use chrono::NaiveDateTime;

/// Format a byte count in human-readable form
///
/// Uses binary units and trims a trailing ".0" so round sizes read
/// naturally (2048 -> "2 KB", 2560 -> "2.5 KB").
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    let (value, unit) = if bytes >= GB {
        (bytes as f64 / GB as f64, "GB")
    } else if bytes >= MB {
        (bytes as f64 / MB as f64, "MB")
    } else if bytes >= KB {
        (bytes as f64 / KB as f64, "KB")
    } else {
        return format!("{} B", bytes);
    };

    let formatted = format!("{:.1}", value);
    let trimmed = formatted.strip_suffix(".0").unwrap_or(&formatted);
    format!("{} {}", trimmed, unit)
}

/// Format a fraction as a percentage with one decimal
///
/// A zero denominator reads as 0%.
pub fn format_percent(part: u64, whole: u64) -> String {
    if whole == 0 {
        return "0%".to_string();
    }
    let pct = (part as f64 / whole as f64) * 100.0;
    let formatted = format!("{:.1}", pct);
    let trimmed = formatted.strip_suffix(".0").unwrap_or(&formatted);
    format!("{}%", trimmed)
}

/// Format how long ago a server timestamp was, in coarse units
pub fn format_age(timestamp: NaiveDateTime) -> String {
    let now = chrono::Utc::now().naive_utc();
    let duration = now.signed_duration_since(timestamp);
    let total_seconds = duration.num_seconds().max(0);

    if total_seconds < 60 {
        return format!("{}s", total_seconds);
    }

    let minutes = total_seconds / 60;
    if minutes < 60 {
        return format!("{}m", minutes);
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("{}h", hours);
    }

    let days = hours / 24;
    if days < 30 {
        return format!("{}d", days);
    }

    let months = days / 30;
    format!("{}mo", months)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_format_size_round_values_trim_decimal() {
        assert_eq!(format_size(2048), "2 KB");
        assert_eq!(format_size(1024 * 1024), "1 MB");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024), "3 GB");
    }

    #[test]
    fn test_format_size_fractions() {
        assert_eq!(format_size(2560), "2.5 KB");
        assert_eq!(format_size(1536 * 1024), "1.5 MB");
    }

    #[test]
    fn test_format_size_bytes() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1023), "1023 B");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(1, 4), "25%");
        assert_eq!(format_percent(1, 3), "33.3%");
        assert_eq!(format_percent(0, 10), "0%");
        assert_eq!(format_percent(5, 0), "0%");
    }

    #[test]
    fn test_format_age() {
        let now = chrono::Utc::now().naive_utc();
        assert_eq!(format_age(now - Duration::seconds(30)), "30s");
        assert_eq!(format_age(now - Duration::minutes(5)), "5m");
        assert_eq!(format_age(now - Duration::hours(3)), "3h");
        assert_eq!(format_age(now - Duration::days(2)), "2d");
        assert_eq!(format_age(now - Duration::days(90)), "3mo");
    }
}

use chrono::{DateTime, Utc};

/// Epoch milliseconds as `YYYY-MM-DD HH:MM:SS UTC`.
pub fn format_timestamp(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| millis.to_string())
}

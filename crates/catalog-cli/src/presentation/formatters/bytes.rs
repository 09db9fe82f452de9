const KB: f64 = 1024.0;
const MB: f64 = 1024.0 * 1024.0;

pub fn format_bytes(bytes: usize) -> String {
    let value = bytes as f64;
    if value >= MB {
        format!("{:.1} MB", value / MB)
    } else if value >= KB {
        format!("{:.1} KB", value / KB)
    } else {
        format!("{} B", bytes)
    }
}

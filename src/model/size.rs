//! Human-readable byte sizes.

const KB: f64 = 1024.0;
const MB: f64 = KB * 1024.0;
const GB: f64 = MB * 1024.0;

/// Format a byte count with two decimals in binary units (`"1.46 KB"`).
///
/// Zero and unknown sizes both render as `"unknown"`: an empty module cache
/// directory is indistinguishable from one that was never measured.
pub fn format_size(bytes: Option<u64>) -> String {
    let bytes = match bytes {
        Some(0) | None => return "unknown".to_string(),
        Some(b) => b as f64,
    };

    if bytes >= GB {
        format!("{:.2} GB", bytes / GB)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes / MB)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes / KB)
    } else {
        format!("{bytes:.2} B")
    }
}

//! Utility functions for the client.

/// Format duration in milliseconds to human readable string
pub fn format_duration(duration_ms: u64) -> String {
    if duration_ms < 1000 {
        format!("{duration_ms}ms")
    } else {
        let seconds = duration_ms as f64 / 1000.0;
        if seconds.fract() == 0.0 {
            format!("{}s", seconds as u64)
        } else {
            format!("{seconds:.1}s")
        }
    }
}

/// Get current timestamp in milliseconds
pub fn current_time_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// Milliseconds since `start_ms`; zero if the wall clock stepped backwards
pub fn elapsed_since(start_ms: u64) -> u64 {
    current_time_millis().saturating_sub(start_ms)
}

/// Trim surrounding slashes off a path segment; `None` when nothing is left.
///
/// Segments are otherwise used verbatim; index and type names are not validated.
pub(crate) fn path_segment(raw: &str) -> Option<&str> {
    let trimmed = raw.trim_matches('/');
    (!trimmed.is_empty()).then_some(trimmed)
}

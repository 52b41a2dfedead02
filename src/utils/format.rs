//! Formatting utilities for human-readable output
//!
//! Provides consistent formatting functions for the application.

/// Format bytes into human-readable size string (e.g., "1.5 KB", "256 B")
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Normalize a slug by replacing non-alphanumeric chars with hyphens
/// and collapsing multiple hyphens into one
pub fn normalize_slug(slug: &str) -> String {
    slug.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Count the lines of an artifact body, ignoring a trailing newline
pub fn count_lines(content: &str) -> usize {
    content.lines().count()
}

//! Formatting utilities for terminal output

use std::time::Duration;

/// Space-separate letters: "act" becomes "a c t"
#[must_use]
pub fn spaced_letters(letters: &str) -> String {
    let mut result = String::with_capacity(letters.len() * 2);
    for (i, ch) in letters.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(ch);
    }
    result
}

/// Comma-join letters: ['a', 's'] becomes "a, s"
#[must_use]
pub fn comma_letters(letters: &[char]) -> String {
    let mut result = String::with_capacity(letters.len() * 3);
    for (i, ch) in letters.iter().enumerate() {
        if i > 0 {
            result.push_str(", ");
        }
        result.push(*ch);
    }
    result
}

/// Create a ratio bar string
#[must_use]
pub fn ratio_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a duration adaptively, from microseconds up to seconds
#[must_use]
pub fn human_duration(duration: Duration) -> String {
    let secs = duration.as_secs_f64();
    if secs < 0.001 {
        format!("{:.1}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else {
        format!("{secs:.2}s")
    }
}

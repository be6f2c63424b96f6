// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Display formatting helpers.

/// Format a byte count using the largest unit that keeps the magnitude
/// below 1024, rounded to at most two decimal places.
///
/// Zero renders as `0 Bytes`.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".into();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = (value * 100.0).round() / 100.0;
    // Trim trailing zeros so 1.00 KB reads as 1 KB and 1.50 KB as 1.5 KB.
    let mut text = format!("{rounded:.2}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    format!("{} {}", text, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_bytes() {
        assert_eq!(format_size(0), "0 Bytes");
    }

    #[test]
    fn below_one_kilobyte() {
        assert_eq!(format_size(1), "1 Bytes");
        assert_eq!(format_size(1023), "1023 Bytes");
    }

    #[test]
    fn exact_units() {
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(1024 * 1024), "1 MB");
        assert_eq!(format_size(1024 * 1024 * 1024), "1 GB");
    }

    #[test]
    fn fractional_values_round_to_two_places() {
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1259), "1.23 KB");
        assert_eq!(format_size(5_452_595), "5.2 MB");
    }

    #[test]
    fn stays_in_gigabytes_at_the_top() {
        assert_eq!(format_size(2_199_023_255_552), "2048 GB");
    }
}

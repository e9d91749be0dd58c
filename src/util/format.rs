// Copyright (c) 2026, Filmroom Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Display formatting helpers.

/// Format a playback position in seconds as "m:ss".
///
/// Negative input clamps to "0:00"; fractional seconds are floored.
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time_minute_rollover() {
        assert_eq!(format_time(65.0), "1:05");
        assert_eq!(format_time(59.0), "0:59");
        assert_eq!(format_time(600.0), "10:00");
    }

    #[test]
    fn test_format_time_zero() {
        assert_eq!(format_time(0.0), "0:00");
    }

    #[test]
    fn test_format_time_negative_clamps() {
        assert_eq!(format_time(-12.0), "0:00");
    }

    #[test]
    fn test_format_time_floors_fractions() {
        assert_eq!(format_time(65.9), "1:05");
    }

    #[test]
    fn test_format_time_non_finite_clamps() {
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
    }
}

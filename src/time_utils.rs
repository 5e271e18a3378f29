// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 with millisecond precision and a `Z`
/// suffix, matching the `createdAt`/`updatedAt` format of the site's API.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_uses_z_and_millis() {
        let date = DateTime::from_timestamp(1_704_103_200, 5_000_000).unwrap();
        assert_eq!(format_utc_rfc3339(date), "2024-01-01T10:00:00.005Z");
    }
}

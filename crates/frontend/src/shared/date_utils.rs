/// Utilities for date and time formatting
///
/// Provides consistent, locale-aware date formatting across the application
use chrono::{DateTime, Utc};

use crate::shared::i18n::Locale;

/// Format a timestamp as a calendar date
/// Example: 2024-03-15T14:02:26Z -> "15/03/2024" (pt-BR), "03/15/2024" (en)
pub fn format_date(dt: &DateTime<Utc>, locale: Locale) -> String {
    match locale {
        Locale::PtBr => dt.format("%d/%m/%Y").to_string(),
        Locale::En => dt.format("%m/%d/%Y").to_string(),
    }
}

/// Format a timestamp with minutes
/// Example: 2024-03-15T14:02:26Z -> "15/03/2024 14:02" (pt-BR)
pub fn format_datetime(dt: &DateTime<Utc>, locale: Locale) -> String {
    format!("{} {}", format_date(dt, locale), dt.format("%H:%M"))
}

/// Elapsed time in fractional days
pub fn days_between(from: &DateTime<Utc>, to: &DateTime<Utc>) -> f64 {
    (*to - *from).num_seconds() as f64 / 86_400.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 2, 26).unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(&at(2024, 3, 15, 14), Locale::PtBr), "15/03/2024");
        assert_eq!(format_date(&at(2024, 3, 15, 14), Locale::En), "03/15/2024");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime(&at(2024, 12, 31, 23), Locale::PtBr),
            "31/12/2024 23:02"
        );
    }

    #[test]
    fn test_days_between() {
        assert_eq!(days_between(&at(2024, 3, 1, 0), &at(2024, 3, 4, 0)), 3.0);
        assert_eq!(days_between(&at(2024, 3, 1, 0), &at(2024, 3, 1, 12)), 0.5);
    }
}

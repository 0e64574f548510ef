//! Approximate Gregorian to Tamil date conversion.
//!
//! Tamil month boundaries are fixed day-of-month thresholds, one per
//! Gregorian month, hand-picked to sit near the traditional sankranti dates.
//! The conversion drifts by a day or two against the true lunar boundaries in
//! any given year. That drift is an accepted property of this variant, not a
//! defect to be fixed silently.

use chrono::{Datelike, NaiveDate};
use shared::{TamilDate, TamilMonth};

/// Boundary of a Tamil month inside one Gregorian month.
struct MonthBoundary {
    /// Gregorian day-of-month on which the Tamil month begins.
    threshold: u32,
    /// Tamil day assigned to the threshold date itself.
    day_offset: u32,
    /// Tamil month beginning at the threshold.
    month: TamilMonth,
}

/// One entry per Gregorian month, January first.
///
/// Thai carries a day offset of 14 so its day numbering follows the January
/// day-of-month (Bhogi = 14, Pongal = 15, Mattu Pongal = 16), matching the
/// festival table.
const MONTH_BOUNDARIES: [MonthBoundary; 12] = [
    MonthBoundary { threshold: 14, day_offset: 14, month: TamilMonth::Thai },
    MonthBoundary { threshold: 13, day_offset: 1, month: TamilMonth::Maasi },
    MonthBoundary { threshold: 14, day_offset: 1, month: TamilMonth::Panguni },
    MonthBoundary { threshold: 14, day_offset: 1, month: TamilMonth::Chithirai },
    MonthBoundary { threshold: 15, day_offset: 1, month: TamilMonth::Vaikasi },
    MonthBoundary { threshold: 15, day_offset: 1, month: TamilMonth::Aani },
    MonthBoundary { threshold: 16, day_offset: 1, month: TamilMonth::Aadi },
    MonthBoundary { threshold: 17, day_offset: 1, month: TamilMonth::Avani },
    MonthBoundary { threshold: 17, day_offset: 1, month: TamilMonth::Purattasi },
    MonthBoundary { threshold: 18, day_offset: 1, month: TamilMonth::Aippasi },
    MonthBoundary { threshold: 16, day_offset: 1, month: TamilMonth::Karthigai },
    MonthBoundary { threshold: 16, day_offset: 1, month: TamilMonth::Margazhi },
];

/// Convert a Gregorian date to an approximate Tamil date.
///
/// A date on or after its Gregorian month's threshold belongs to the Tamil
/// month that begins there; earlier dates continue the count of the Tamil
/// month that began in the previous Gregorian month.
pub fn to_tamil_date(date: NaiveDate) -> TamilDate {
    let g_month = date.month() as usize;
    let g_day = date.day();
    let boundary = &MONTH_BOUNDARIES[g_month - 1];

    let (month, day) = if g_day >= boundary.threshold {
        (boundary.month, g_day - boundary.threshold + boundary.day_offset)
    } else {
        let prev_index = if g_month == 1 { 11 } else { g_month - 2 };
        let prev = &MONTH_BOUNDARIES[prev_index];
        let prev_year = if g_month == 1 { date.year() - 1 } else { date.year() };
        let prev_len = days_in_month(prev_index as u32 + 1, prev_year);
        (prev.month, g_day + prev_len - prev.threshold + prev.day_offset)
    };

    TamilDate {
        month,
        day,
        year: tamil_year(date),
        tithi: None,
        is_amavasai: false,
        is_pournami: false,
    }
}

/// Tamil year for a Gregorian date.
///
/// The Tamil year rolls over at the April 14 New Year boundary: on or after
/// it the year is `gregorian - 1956`, before it `gregorian - 1957`.
pub fn tamil_year(date: NaiveDate) -> i32 {
    if (date.month(), date.day()) >= (4, 14) {
        date.year() - 1956
    } else {
        date.year() - 1957
    }
}

/// Number of days in a Gregorian month.
pub fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Check if a year is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(1, 2025), 31);
        assert_eq!(days_in_month(4, 2025), 30);
        assert_eq!(days_in_month(2, 2025), 28);
        assert_eq!(days_in_month(2, 2024), 29);
    }

    #[test]
    fn test_is_leap_year() {
        assert!(!is_leap_year(2025));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
    }

    #[test]
    fn test_april_14_is_chithirai_day_1() {
        for year in [2020, 2024, 2025, 2030] {
            let tamil = to_tamil_date(date(year, 4, 14));
            assert_eq!(tamil.month, TamilMonth::Chithirai);
            assert_eq!(tamil.day, 1);
        }
    }

    #[test]
    fn test_tamil_year_epoch_offsets() {
        assert_eq!(to_tamil_date(date(2024, 4, 14)).year, 2024 - 1956);
        assert_eq!(to_tamil_date(date(2024, 4, 13)).year, 2024 - 1957);
        assert_eq!(to_tamil_date(date(2024, 1, 15)).year, 2024 - 1957);
        assert_eq!(to_tamil_date(date(2024, 12, 31)).year, 2024 - 1956);
    }

    #[test]
    fn test_pongal_day_numbering() {
        let tamil = to_tamil_date(date(2024, 1, 15));
        assert_eq!(tamil.month, TamilMonth::Thai);
        assert_eq!(tamil.day, 15);

        let bhogi = to_tamil_date(date(2024, 1, 14));
        assert_eq!(bhogi.month, TamilMonth::Thai);
        assert_eq!(bhogi.day, 14);
    }

    #[test]
    fn test_before_threshold_continues_previous_month() {
        // Jan 13 is still Margazhi, which began Dec 16.
        let tamil = to_tamil_date(date(2024, 1, 13));
        assert_eq!(tamil.month, TamilMonth::Margazhi);
        assert_eq!(tamil.day, 29);

        // May 14 is the last Chithirai day before Vaikasi begins May 15.
        let tamil = to_tamil_date(date(2025, 5, 14));
        assert_eq!(tamil.month, TamilMonth::Chithirai);
        assert_eq!(tamil.day, 31);

        let tamil = to_tamil_date(date(2025, 5, 15));
        assert_eq!(tamil.month, TamilMonth::Vaikasi);
        assert_eq!(tamil.day, 1);
    }

    #[test]
    fn test_all_twelve_months_reachable() {
        let mut seen = std::collections::HashSet::new();
        for month in 1..=12 {
            let boundary_day = match month {
                1 => 14,
                2 => 13,
                3 | 4 => 14,
                5 | 6 => 15,
                7 => 16,
                8 | 9 => 17,
                10 => 18,
                _ => 16,
            };
            seen.insert(to_tamil_date(date(2025, month, boundary_day)).month);
        }
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn test_conversion_is_deterministic() {
        let d = date(2024, 7, 20);
        assert_eq!(to_tamil_date(d), to_tamil_date(d));
    }

    #[test]
    fn test_approximate_variant_sets_no_tithi() {
        let tamil = to_tamil_date(date(2024, 7, 20));
        assert!(tamil.tithi.is_none());
        assert!(!tamil.is_amavasai);
        assert!(!tamil.is_pournami);
    }
}

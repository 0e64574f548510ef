//! Festival resolution for the temple calendar display.
//!
//! Resolves a Gregorian date to a Tamil date through one of two named
//! conversion strategies and matches it against the static festival table.
//! Pure computation over static data: no caching, no persistence, every call
//! recomputes from scratch.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Weekday};
use shared::{
    FestivalMatch, FestivalRecord, FestivalType, GeoLocation, Importance, TamilDate, TamilMonth,
};
use tracing::debug;

use crate::domain::festival_table::festivals_for_month;
use crate::domain::panchang::{AccurateConverter, PanchangProvider};
use crate::domain::tamil_calendar;

/// How a Gregorian date is resolved to a Tamil date.
///
/// The approximate and accurate strategies disagree on month-start thresholds
/// and tithi semantics. They are kept separate on purpose; the caller picks
/// one at construction time.
#[derive(Clone)]
enum ResolutionStrategy {
    Approximate,
    Accurate(AccurateConverter),
}

/// Calendar resolution service exposed to the UI layer.
#[derive(Clone)]
pub struct FestivalService {
    strategy: ResolutionStrategy,
}

impl FestivalService {
    /// Service using the fixed-threshold approximate conversion.
    pub fn approximate() -> Self {
        Self {
            strategy: ResolutionStrategy::Approximate,
        }
    }

    /// Service delegating lunar-solar computation to a panchang provider.
    pub fn accurate(provider: Arc<dyn PanchangProvider>, location: GeoLocation) -> Self {
        Self {
            strategy: ResolutionStrategy::Accurate(AccurateConverter::new(provider, location)),
        }
    }

    /// Resolve a Gregorian date to a Tamil date.
    ///
    /// `None` means calendar data is unavailable; the approximate strategy
    /// never returns it.
    pub fn resolve_tamil_date(&self, date: NaiveDate) -> Option<TamilDate> {
        match &self.strategy {
            ResolutionStrategy::Approximate => Some(tamil_calendar::to_tamil_date(date)),
            ResolutionStrategy::Accurate(converter) => converter.to_tamil_date(date),
        }
    }

    /// Festivals falling on a Gregorian date.
    ///
    /// Static table matches come first, in table order, followed by any
    /// synthesized special days (accurate strategy only). The approximate
    /// strategy matches table entries by day of the Tamil month, the accurate
    /// strategy by tithi name.
    pub fn festivals_for_date(&self, date: NaiveDate) -> Vec<FestivalMatch> {
        let Some(tamil) = self.resolve_tamil_date(date) else {
            return Vec::new();
        };

        let accurate = matches!(&self.strategy, ResolutionStrategy::Accurate(_));
        let mut records: Vec<FestivalRecord> = festivals_for_month(tamil.month.english_name())
            .iter()
            .filter(|record| {
                if accurate {
                    record.tithi.is_some() && record.tithi == tamil.tithi
                } else {
                    record.day == Some(tamil.day)
                }
            })
            .cloned()
            .collect();

        if accurate {
            records.extend(synthesized_festivals(&tamil, date.weekday()));
        }

        debug!("{} festival(s) matched for {} ({})", records.len(), date, tamil);

        records
            .into_iter()
            .map(|festival| FestivalMatch {
                festival,
                gregorian_date: date,
                tamil_month: tamil.month,
                tamil_day: tamil.day,
            })
            .collect()
    }
}

impl Default for FestivalService {
    fn default() -> Self {
        Self::approximate()
    }
}

/// Fixed (month, tithi/weekday) decision table for special days the static
/// table does not carry, evaluated after the static lookup.
fn synthesized_festivals(tamil: &TamilDate, weekday: Weekday) -> Vec<FestivalRecord> {
    let mut extra = Vec::new();

    if tamil.is_pournami {
        let month_special = match tamil.month {
            TamilMonth::Chithirai => Some(("Chitra Pournami", "சித்ரா பௌர்ணமி")),
            TamilMonth::Karthigai => Some(("Karthigai Deepam", "கார்த்திகை தீபம்")),
            TamilMonth::Thai => Some(("Thaipusam", "தைப்பூசம்")),
            TamilMonth::Maasi => Some(("Maasi Magam", "மாசி மகம்")),
            TamilMonth::Panguni => Some(("Panguni Uthiram", "பங்குனி உத்திரம்")),
            _ => None,
        };
        if let Some((name, tamil_name)) = month_special {
            extra.push(special(
                name,
                tamil_name,
                Some("Pournami"),
                FestivalType::Major,
                Importance::Major,
            ));
        }
        extra.push(special(
            "Pournami",
            "பௌர்ணமி",
            Some("Pournami"),
            FestivalType::Pournami,
            Importance::Medium,
        ));
    }

    if tamil.is_amavasai {
        let month_special = match tamil.month {
            TamilMonth::Aadi => Some(("Aadi Amavasai", "ஆடி அமாவாசை")),
            TamilMonth::Thai => Some(("Thai Amavasai", "தை அமாவாசை")),
            _ => None,
        };
        if let Some((name, tamil_name)) = month_special {
            extra.push(special(
                name,
                tamil_name,
                Some("Amavasai"),
                FestivalType::Ancestor,
                Importance::High,
            ));
        }
        extra.push(special(
            "Amavasai",
            "அமாவாசை",
            Some("Amavasai"),
            FestivalType::Amavasai,
            Importance::Medium,
        ));
    }

    if tamil.month == TamilMonth::Purattasi && weekday == Weekday::Sat {
        extra.push(special(
            "Purattasi Sani",
            "புரட்டாசி சனி",
            None,
            FestivalType::Weekly,
            Importance::Medium,
        ));
    }

    extra
}

fn special(
    name: &str,
    tamil_name: &str,
    tithi: Option<&str>,
    festival_type: FestivalType,
    importance: Importance,
) -> FestivalRecord {
    FestivalRecord {
        day: None,
        tithi: tithi.map(str::to_string),
        name: name.to_string(),
        tamil_name: tamil_name.to_string(),
        festival_type,
        description: None,
        importance: Some(importance),
    }
}

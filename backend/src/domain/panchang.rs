//! Astronomically accurate Tamil date resolution.
//!
//! Lunar-solar computation is delegated to an injected [`PanchangProvider`].
//! This module reshapes the provider's Sanskrit vocabulary into Tamil month
//! and tithi names, and derives the Tamil day-of-month with a bounded
//! backward scan over the provider's masa classification.

use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use shared::{GeoLocation, TamilDate, TamilMonth};
use thiserror::Error;
use tracing::{error, warn};

use crate::domain::tamil_calendar::tamil_year;

/// How far back to look for the start of the current lunar month.
const MONTH_SCAN_WINDOW_DAYS: i64 = 35;

/// Tamil name of the new moon tithi.
pub const AMAVASAI: &str = "Amavasai";
/// Tamil name of the full moon tithi.
pub const POURNAMI: &str = "Pournami";

/// Lunar-solar elements for one date and location, in the provider's own
/// (Sanskrit) vocabulary.
#[derive(Debug, Clone, PartialEq)]
pub struct PanchangSnapshot {
    pub masa: String,
    pub tithi: String,
    pub paksha: String,
    pub nakshatra: String,
    pub yoga: String,
    pub karana: String,
    pub raasi: String,
    pub ritu: String,
}

#[derive(Debug, Error)]
pub enum PanchangError {
    #[error("panchang computation failed for {date}: {reason}")]
    Computation { date: NaiveDate, reason: String },
    #[error("unknown masa name from provider: {0}")]
    UnknownMasa(String),
    #[error("unknown tithi name from provider: {0}")]
    UnknownTithi(String),
}

/// External ephemeris capability computing lunar-solar elements for a date
/// and location. Implementations wrap a real astronomical library; tests
/// substitute a fixed-output mock.
pub trait PanchangProvider: Send + Sync {
    fn calendar(
        &self,
        date: NaiveDate,
        location: GeoLocation,
    ) -> Result<PanchangSnapshot, PanchangError>;
}

/// Map a Sanskrit masa name to its Tamil month (amanta naming).
pub fn tamil_month_for_masa(masa: &str) -> Option<TamilMonth> {
    let month = match masa {
        "Chaitra" => TamilMonth::Chithirai,
        "Vaishakha" => TamilMonth::Vaikasi,
        "Jyeshtha" => TamilMonth::Aani,
        "Ashadha" => TamilMonth::Aadi,
        "Shravana" => TamilMonth::Avani,
        "Bhadrapada" => TamilMonth::Purattasi,
        "Ashwina" => TamilMonth::Aippasi,
        "Kartika" => TamilMonth::Karthigai,
        "Margashirsha" => TamilMonth::Margazhi,
        "Pausha" => TamilMonth::Thai,
        "Magha" => TamilMonth::Maasi,
        "Phalguna" => TamilMonth::Panguni,
        _ => return None,
    };
    Some(month)
}

/// Map a Sanskrit tithi name to its Tamil name. Fixed translation table
/// covering the common alternate spellings of the full moon and first tithi.
pub fn tamil_tithi_name(tithi: &str) -> Option<&'static str> {
    Some(match tithi {
        "Pratipada" | "Prathama" => "Prathamai",
        "Dwitiya" => "Thuthiyai",
        "Tritiya" => "Thritiyai",
        "Chaturthi" => "Chaturthi",
        "Panchami" => "Panchami",
        "Shashthi" => "Sashti",
        "Saptami" => "Sapthami",
        "Ashtami" => "Ashtami",
        "Navami" => "Navami",
        "Dashami" => "Dasami",
        "Ekadashi" => "Ekadasi",
        "Dwadashi" => "Dvadasi",
        "Trayodashi" => "Thrayodasi",
        "Chaturdashi" => "Chaturdasi",
        "Purnima" | "Pournima" => POURNAMI,
        "Amavasya" => AMAVASAI,
        _ => return None,
    })
}

/// Accurate Gregorian to Tamil conversion backed by an injected panchang
/// provider.
#[derive(Clone)]
pub struct AccurateConverter {
    provider: Arc<dyn PanchangProvider>,
    location: GeoLocation,
}

impl AccurateConverter {
    pub fn new(provider: Arc<dyn PanchangProvider>, location: GeoLocation) -> Self {
        Self { provider, location }
    }

    /// Resolve a Gregorian date to an accurate Tamil date.
    ///
    /// Returns `None` when the provider fails or emits vocabulary outside the
    /// translation tables; callers treat `None` as "calendar data
    /// unavailable" and suppress dependent display rather than crash.
    pub fn to_tamil_date(&self, date: NaiveDate) -> Option<TamilDate> {
        match self.resolve(date) {
            Ok(tamil) => Some(tamil),
            Err(err) => {
                error!("tamil date resolution failed for {}: {}", date, err);
                None
            }
        }
    }

    fn resolve(&self, date: NaiveDate) -> Result<TamilDate, PanchangError> {
        let snapshot = self.provider.calendar(date, self.location)?;
        let month = tamil_month_for_masa(&snapshot.masa)
            .ok_or_else(|| PanchangError::UnknownMasa(snapshot.masa.clone()))?;
        let tithi = tamil_tithi_name(&snapshot.tithi)
            .ok_or_else(|| PanchangError::UnknownTithi(snapshot.tithi.clone()))?;
        let day = self.day_of_lunar_month(date, &snapshot.masa)?;

        Ok(TamilDate {
            month,
            day,
            year: tamil_year(date),
            tithi: Some(tithi.to_string()),
            is_amavasai: tithi == AMAVASAI,
            is_pournami: tithi == POURNAMI,
        })
    }

    /// Scan backward until the provider's masa classification changes; that
    /// boundary is the start of the current Tamil month, so the day number is
    /// the scan offset. Falls back to day 1 if no boundary shows up inside
    /// the window.
    fn day_of_lunar_month(&self, date: NaiveDate, masa: &str) -> Result<u32, PanchangError> {
        for offset in 1..=MONTH_SCAN_WINDOW_DAYS {
            let earlier = date - Duration::days(offset);
            let snapshot = self.provider.calendar(earlier, self.location)?;
            if snapshot.masa != masa {
                return Ok(offset as u32);
            }
        }
        warn!(
            "no masa boundary within {} days of {}, defaulting to day 1",
            MONTH_SCAN_WINDOW_DAYS, date
        );
        Ok(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Provider whose masa flips at a fixed boundary date.
    struct ScriptedProvider {
        month_start: NaiveDate,
        masa: &'static str,
        previous_masa: &'static str,
        tithi: &'static str,
    }

    impl PanchangProvider for ScriptedProvider {
        fn calendar(
            &self,
            date: NaiveDate,
            _location: GeoLocation,
        ) -> Result<PanchangSnapshot, PanchangError> {
            let masa = if date >= self.month_start {
                self.masa
            } else {
                self.previous_masa
            };
            Ok(PanchangSnapshot {
                masa: masa.to_string(),
                tithi: self.tithi.to_string(),
                paksha: "Shukla".to_string(),
                nakshatra: "Rohini".to_string(),
                yoga: "Siddha".to_string(),
                karana: "Bava".to_string(),
                raasi: "Mesha".to_string(),
                ritu: "Vasanta".to_string(),
            })
        }
    }

    struct FailingProvider;

    impl PanchangProvider for FailingProvider {
        fn calendar(
            &self,
            date: NaiveDate,
            _location: GeoLocation,
        ) -> Result<PanchangSnapshot, PanchangError> {
            Err(PanchangError::Computation {
                date,
                reason: "ephemeris unavailable".to_string(),
            })
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_masa_mapping_covers_all_twelve_months() {
        let masas = [
            "Chaitra",
            "Vaishakha",
            "Jyeshtha",
            "Ashadha",
            "Shravana",
            "Bhadrapada",
            "Ashwina",
            "Kartika",
            "Margashirsha",
            "Pausha",
            "Magha",
            "Phalguna",
        ];
        let mut seen = std::collections::HashSet::new();
        for masa in masas {
            seen.insert(tamil_month_for_masa(masa).unwrap());
        }
        assert_eq!(seen.len(), 12);
        assert_eq!(tamil_month_for_masa("Adhika Jyeshtha"), None);
    }

    #[test]
    fn test_tithi_mapping_and_aliases() {
        assert_eq!(tamil_tithi_name("Amavasya"), Some("Amavasai"));
        assert_eq!(tamil_tithi_name("Purnima"), Some("Pournami"));
        assert_eq!(tamil_tithi_name("Pournima"), Some("Pournami"));
        assert_eq!(tamil_tithi_name("Pratipada"), Some("Prathamai"));
        assert_eq!(tamil_tithi_name("Ekadashi"), Some("Ekadasi"));
        assert_eq!(tamil_tithi_name("NotATithi"), None);
    }

    #[test]
    fn test_day_of_month_from_masa_boundary() {
        let provider = ScriptedProvider {
            month_start: date(2024, 7, 10),
            masa: "Ashadha",
            previous_masa: "Jyeshtha",
            tithi: "Panchami",
        };
        let converter = AccurateConverter::new(Arc::new(provider), GeoLocation::default());

        let tamil = converter.to_tamil_date(date(2024, 7, 14)).unwrap();
        assert_eq!(tamil.month, TamilMonth::Aadi);
        assert_eq!(tamil.day, 5);
        assert_eq!(tamil.tithi.as_deref(), Some("Panchami"));

        // First day of the lunar month.
        let tamil = converter.to_tamil_date(date(2024, 7, 10)).unwrap();
        assert_eq!(tamil.day, 1);
    }

    #[test]
    fn test_day_falls_back_to_one_without_boundary() {
        let provider = ScriptedProvider {
            month_start: date(2000, 1, 1),
            masa: "Pausha",
            previous_masa: "Pausha",
            tithi: "Purnima",
        };
        let converter = AccurateConverter::new(Arc::new(provider), GeoLocation::default());
        let tamil = converter.to_tamil_date(date(2024, 1, 25)).unwrap();
        assert_eq!(tamil.day, 1);
        assert!(tamil.is_pournami);
    }

    #[test]
    fn test_amavasya_sets_flag() {
        let provider = ScriptedProvider {
            month_start: date(2024, 7, 10),
            masa: "Ashadha",
            previous_masa: "Jyeshtha",
            tithi: "Amavasya",
        };
        let converter = AccurateConverter::new(Arc::new(provider), GeoLocation::default());
        let tamil = converter.to_tamil_date(date(2024, 8, 4)).unwrap();
        assert!(tamil.is_amavasai);
        assert!(!tamil.is_pournami);
        assert_eq!(tamil.tithi.as_deref(), Some("Amavasai"));
    }

    #[test]
    fn test_provider_failure_yields_none() {
        let converter = AccurateConverter::new(Arc::new(FailingProvider), GeoLocation::default());
        assert_eq!(converter.to_tamil_date(date(2024, 7, 14)), None);
    }

    #[test]
    fn test_unknown_vocabulary_yields_none() {
        let provider = ScriptedProvider {
            month_start: date(2024, 7, 10),
            masa: "Adhika Shravana",
            previous_masa: "Ashadha",
            tithi: "Panchami",
        };
        let converter = AccurateConverter::new(Arc::new(provider), GeoLocation::default());
        assert_eq!(converter.to_tamil_date(date(2024, 7, 20)), None);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let make = || {
            AccurateConverter::new(
                Arc::new(ScriptedProvider {
                    month_start: date(2024, 7, 10),
                    masa: "Ashadha",
                    previous_masa: "Jyeshtha",
                    tithi: "Saptami",
                }),
                GeoLocation::default(),
            )
        };
        let d = date(2024, 7, 16);
        assert_eq!(make().to_tamil_date(d), make().to_tamil_date(d));
    }
}

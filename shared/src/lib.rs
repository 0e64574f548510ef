use serde::{Deserialize, Serialize};
use std::fmt;

use chrono::NaiveDate;

/// The twelve months of the Tamil calendar, in fixed ordinal order starting
/// at Chithirai (the month containing mid-April, the Tamil New Year).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TamilMonth {
    Chithirai,
    Vaikasi,
    Aani,
    Aadi,
    Avani,
    Purattasi,
    Aippasi,
    Karthigai,
    Margazhi,
    Thai,
    Maasi,
    Panguni,
}

impl TamilMonth {
    /// All twelve months in calendar order.
    pub const ALL: [TamilMonth; 12] = [
        TamilMonth::Chithirai,
        TamilMonth::Vaikasi,
        TamilMonth::Aani,
        TamilMonth::Aadi,
        TamilMonth::Avani,
        TamilMonth::Purattasi,
        TamilMonth::Aippasi,
        TamilMonth::Karthigai,
        TamilMonth::Margazhi,
        TamilMonth::Thai,
        TamilMonth::Maasi,
        TamilMonth::Panguni,
    ];

    /// Position within the Tamil year, 1-based (Chithirai = 1).
    pub fn ordinal(&self) -> u32 {
        *self as u32 + 1
    }

    pub fn english_name(&self) -> &'static str {
        match self {
            TamilMonth::Chithirai => "Chithirai",
            TamilMonth::Vaikasi => "Vaikasi",
            TamilMonth::Aani => "Aani",
            TamilMonth::Aadi => "Aadi",
            TamilMonth::Avani => "Avani",
            TamilMonth::Purattasi => "Purattasi",
            TamilMonth::Aippasi => "Aippasi",
            TamilMonth::Karthigai => "Karthigai",
            TamilMonth::Margazhi => "Margazhi",
            TamilMonth::Thai => "Thai",
            TamilMonth::Maasi => "Maasi",
            TamilMonth::Panguni => "Panguni",
        }
    }

    /// Month name in Tamil script.
    pub fn tamil_name(&self) -> &'static str {
        match self {
            TamilMonth::Chithirai => "சித்திரை",
            TamilMonth::Vaikasi => "வைகாசி",
            TamilMonth::Aani => "ஆனி",
            TamilMonth::Aadi => "ஆடி",
            TamilMonth::Avani => "ஆவணி",
            TamilMonth::Purattasi => "புரட்டாசி",
            TamilMonth::Aippasi => "ஐப்பசி",
            TamilMonth::Karthigai => "கார்த்திகை",
            TamilMonth::Margazhi => "மார்கழி",
            TamilMonth::Thai => "தை",
            TamilMonth::Maasi => "மாசி",
            TamilMonth::Panguni => "பங்குனி",
        }
    }

    pub fn short_form(&self) -> &'static str {
        match self {
            TamilMonth::Chithirai => "Chi",
            TamilMonth::Vaikasi => "Vai",
            TamilMonth::Aani => "Aan",
            TamilMonth::Aadi => "Aad",
            TamilMonth::Avani => "Ava",
            TamilMonth::Purattasi => "Pur",
            TamilMonth::Aippasi => "Aip",
            TamilMonth::Karthigai => "Kar",
            TamilMonth::Margazhi => "Mar",
            TamilMonth::Thai => "Tha",
            TamilMonth::Maasi => "Maa",
            TamilMonth::Panguni => "Pan",
        }
    }

    /// Informational only. Real month boundaries drift a day or two per year
    /// relative to these fixed ranges.
    pub fn approx_gregorian_range(&self) -> &'static str {
        match self {
            TamilMonth::Chithirai => "Apr 14 - May 14",
            TamilMonth::Vaikasi => "May 15 - Jun 14",
            TamilMonth::Aani => "Jun 15 - Jul 15",
            TamilMonth::Aadi => "Jul 16 - Aug 16",
            TamilMonth::Avani => "Aug 17 - Sep 16",
            TamilMonth::Purattasi => "Sep 17 - Oct 17",
            TamilMonth::Aippasi => "Oct 18 - Nov 15",
            TamilMonth::Karthigai => "Nov 16 - Dec 15",
            TamilMonth::Margazhi => "Dec 16 - Jan 13",
            TamilMonth::Thai => "Jan 14 - Feb 12",
            TamilMonth::Maasi => "Feb 13 - Mar 13",
            TamilMonth::Panguni => "Mar 14 - Apr 13",
        }
    }

    /// One of the six Tamil seasons, two months each.
    pub fn season(&self) -> &'static str {
        match self {
            TamilMonth::Chithirai | TamilMonth::Vaikasi => "Ilavenil (late spring)",
            TamilMonth::Aani | TamilMonth::Aadi => "Mudhuvenil (high summer)",
            TamilMonth::Avani | TamilMonth::Purattasi => "Kaar (monsoon)",
            TamilMonth::Aippasi | TamilMonth::Karthigai => "Kulir (cool season)",
            TamilMonth::Margazhi | TamilMonth::Thai => "Munpani (early winter)",
            TamilMonth::Maasi | TamilMonth::Panguni => "Pinpani (late winter)",
        }
    }

    /// Look up a month by its English name (the festival table key).
    pub fn from_english_name(name: &str) -> Option<TamilMonth> {
        TamilMonth::ALL
            .iter()
            .copied()
            .find(|m| m.english_name() == name)
    }
}

impl fmt::Display for TamilMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.english_name())
    }
}

/// A resolved Tamil calendar date. Derived on demand from a Gregorian date,
/// never persisted, recomputed on every query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TamilDate {
    pub month: TamilMonth,
    /// Day of the Tamil month. Approximately 1-30; the approximate converter
    /// does not validate against true lunar month length.
    pub day: u32,
    /// Tamil year (Gregorian year minus the 1956/1957 epoch offset).
    pub year: i32,
    /// Lunar day name, only present in the astronomically accurate variant.
    pub tithi: Option<String>,
    /// True when the resolved tithi is the new moon (accurate variant only).
    pub is_amavasai: bool,
    /// True when the resolved tithi is the full moon (accurate variant only).
    pub is_pournami: bool,
}

impl fmt::Display for TamilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}, {}", self.month.english_name(), self.day, self.year)
    }
}

/// Category tag for a festival table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FestivalType {
    Major,
    Festival,
    Temple,
    Vratham,
    Pournami,
    Amavasai,
    Weekly,
    Harvest,
    Devotion,
    Ancestor,
    Auspicious,
    MonthStart,
    National,
}

/// Rough importance rank for display ordering decisions in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    Major,
    High,
    Medium,
}

/// A single entry in the static festival table. Keyed either by a day of the
/// Tamil month or by a tithi name, never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FestivalRecord {
    /// Day of the Tamil month this festival falls on (approximate variant).
    pub day: Option<u32>,
    /// Tamil tithi name this festival falls on (accurate variant).
    pub tithi: Option<String>,
    pub name: String,
    /// Festival name in Tamil script.
    pub tamil_name: String,
    pub festival_type: FestivalType,
    pub description: Option<String>,
    pub importance: Option<Importance>,
}

/// A festival record matched against a concrete Gregorian date.
///
/// Matches are returned in festival table insertion order; there is no
/// guaranteed sort by importance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FestivalMatch {
    pub festival: FestivalRecord,
    pub gregorian_date: NaiveDate,
    pub tamil_month: TamilMonth,
    pub tamil_day: u32,
}

/// Geographic coordinate handed to the panchang provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for GeoLocation {
    /// Chennai, the default observation point for panchang computation.
    fn default() -> Self {
        Self {
            latitude: 13.0827,
            longitude: 80.2707,
        }
    }
}

/// A named fund category with its running balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fund {
    pub name: String,
    pub balance: f64,
}

/// A completed transfer between two named funds.
///
/// Transfer ID format: "transfer-<epoch_millis>-<hex suffix>".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundTransfer {
    pub id: String,
    pub from_fund: String,
    pub to_fund: String,
    pub amount: f64,
    /// Human-readable timestamp (RFC 3339).
    pub date: String,
    pub note: String,
}

/// Request to move money between two named funds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferFundsRequest {
    pub from_fund: String,
    pub to_fund: String,
    pub amount: f64,
    pub note: Option<String>,
}

/// Snapshot of all fund balances, in stable name order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundBalancesResponse {
    pub funds: Vec<Fund>,
}

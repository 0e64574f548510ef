//! Static festival table, keyed by English Tamil-month name.
//!
//! Hand-authored reference data, built once at process start and read-only at
//! runtime. Entries are keyed either by a day of the Tamil month (matched by
//! the approximate variant) or by a tithi name (matched by the accurate
//! variant); the two keying schemes are deliberately not reconciled.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use shared::{FestivalRecord, FestivalType, Importance, TamilMonth};

fn day_entry(
    day: u32,
    name: &str,
    tamil_name: &str,
    festival_type: FestivalType,
    importance: Importance,
    description: Option<&str>,
) -> FestivalRecord {
    FestivalRecord {
        day: Some(day),
        tithi: None,
        name: name.to_string(),
        tamil_name: tamil_name.to_string(),
        festival_type,
        description: description.map(str::to_string),
        importance: Some(importance),
    }
}

fn tithi_entry(
    tithi: &str,
    name: &str,
    tamil_name: &str,
    festival_type: FestivalType,
    importance: Importance,
    description: Option<&str>,
) -> FestivalRecord {
    FestivalRecord {
        day: None,
        tithi: Some(tithi.to_string()),
        name: name.to_string(),
        tamil_name: tamil_name.to_string(),
        festival_type,
        description: description.map(str::to_string),
        importance: Some(importance),
    }
}

/// The festival table. Order within a month is preserved in resolver output.
pub static FESTIVAL_TABLE: Lazy<HashMap<&'static str, Vec<FestivalRecord>>> = Lazy::new(|| {
    let mut table = HashMap::new();

    table.insert(
        TamilMonth::Chithirai.english_name(),
        vec![
            day_entry(
                1,
                "Tamil New Year (Puthandu)",
                "புத்தாண்டு",
                FestivalType::MonthStart,
                Importance::Major,
                Some("First day of the Tamil year"),
            ),
            day_entry(
                15,
                "Chithirai Thiruvizha",
                "சித்திரைத் திருவிழா",
                FestivalType::Temple,
                Importance::Medium,
                Some("Annual temple festival season, celebrated grandly in Madurai"),
            ),
        ],
    );

    table.insert(
        TamilMonth::Vaikasi.english_name(),
        vec![day_entry(
            11,
            "Vaikasi Visakam",
            "வைகாசி விசாகம்",
            FestivalType::Major,
            Importance::Major,
            Some("Birth of Lord Murugan"),
        )],
    );

    table.insert(
        TamilMonth::Aani.english_name(),
        vec![day_entry(
            15,
            "Aani Thirumanjanam",
            "ஆனித் திருமஞ்சனம்",
            FestivalType::Temple,
            Importance::Medium,
            Some("Sacred abhishekam of Lord Nataraja"),
        )],
    );

    table.insert(
        TamilMonth::Aadi.english_name(),
        vec![
            day_entry(
                1,
                "Aadi Pirappu",
                "ஆடிப் பிறப்பு",
                FestivalType::MonthStart,
                Importance::High,
                None,
            ),
            day_entry(
                14,
                "Aadi Pooram",
                "ஆடிப் பூரம்",
                FestivalType::Devotion,
                Importance::High,
                Some("Birth of Andal"),
            ),
            day_entry(
                18,
                "Aadi Perukku",
                "ஆடிப் பெருக்கு",
                FestivalType::Harvest,
                Importance::High,
                Some("Thanksgiving for the rising waters of the Kaveri"),
            ),
        ],
    );

    table.insert(
        TamilMonth::Avani.english_name(),
        vec![
            tithi_entry(
                "Chaturthi",
                "Vinayagar Chaturthi",
                "விநாயகர் சதுர்த்தி",
                FestivalType::Major,
                Importance::Major,
                None,
            ),
            tithi_entry(
                "Ashtami",
                "Krishna Jayanthi",
                "கிருஷ்ண ஜெயந்தி",
                FestivalType::Major,
                Importance::Major,
                Some("Gokulashtami, birth of Lord Krishna"),
            ),
            tithi_entry(
                "Pournami",
                "Avani Avittam",
                "ஆவணி அவிட்டம்",
                FestivalType::Auspicious,
                Importance::High,
                Some("Renewal of the sacred thread"),
            ),
        ],
    );

    table.insert(
        TamilMonth::Purattasi.english_name(),
        vec![
            tithi_entry(
                "Prathamai",
                "Navaratri Begins",
                "நவராத்திரி தொடக்கம்",
                FestivalType::Festival,
                Importance::High,
                None,
            ),
            tithi_entry(
                "Navami",
                "Saraswathi Poojai",
                "சரஸ்வதி பூஜை",
                FestivalType::Devotion,
                Importance::High,
                None,
            ),
            tithi_entry(
                "Dasami",
                "Vijayadasami",
                "விஜயதசமி",
                FestivalType::Major,
                Importance::Major,
                Some("Victory of good over evil; auspicious for new beginnings"),
            ),
            day_entry(
                16,
                "Gandhi Jayanthi",
                "காந்தி ஜெயந்தி",
                FestivalType::National,
                Importance::Medium,
                None,
            ),
        ],
    );

    table.insert(
        TamilMonth::Aippasi.english_name(),
        vec![
            tithi_entry(
                "Amavasai",
                "Deepavali",
                "தீபாவளி",
                FestivalType::Major,
                Importance::Major,
                Some("Festival of lights"),
            ),
            tithi_entry(
                "Sashti",
                "Kantha Sashti",
                "கந்த சஷ்டி",
                FestivalType::Vratham,
                Importance::High,
                Some("Six-day fast ending with Soorasamharam"),
            ),
            tithi_entry(
                "Pournami",
                "Annabishekam",
                "அன்னாபிஷேகம்",
                FestivalType::Temple,
                Importance::Medium,
                Some("Abhishekam of cooked rice for Lord Shiva"),
            ),
        ],
    );

    table.insert(
        TamilMonth::Karthigai.english_name(),
        vec![day_entry(
            1,
            "Karthigai Pirappu",
            "கார்த்திகைப் பிறப்பு",
            FestivalType::MonthStart,
            Importance::Medium,
            None,
        )],
    );

    table.insert(
        TamilMonth::Margazhi.english_name(),
        vec![
            day_entry(
                1,
                "Margazhi Pirappu",
                "மார்கழிப் பிறப்பு",
                FestivalType::MonthStart,
                Importance::Medium,
                Some("Month of Thiruppavai and Thiruvempavai recital"),
            ),
            tithi_entry(
                "Ekadasi",
                "Vaikunta Ekadasi",
                "வைகுண்ட ஏகாதசி",
                FestivalType::Major,
                Importance::Major,
                Some("The Paramapada Vasal is opened"),
            ),
            tithi_entry(
                "Pournami",
                "Arudra Darisanam",
                "ஆருத்ரா தரிசனம்",
                FestivalType::Major,
                Importance::Major,
                Some("Cosmic dance of Lord Nataraja"),
            ),
        ],
    );

    table.insert(
        TamilMonth::Thai.english_name(),
        vec![
            day_entry(
                14,
                "Bhogi",
                "போகி",
                FestivalType::Festival,
                Importance::High,
                Some("Old belongings are discarded ahead of Pongal"),
            ),
            day_entry(
                15,
                "Pongal",
                "பொங்கல்",
                FestivalType::Harvest,
                Importance::Major,
                Some("Harvest thanksgiving to Surya"),
            ),
            day_entry(
                16,
                "Mattu Pongal",
                "மாட்டுப் பொங்கல்",
                FestivalType::Harvest,
                Importance::High,
                Some("Honouring of cattle"),
            ),
            day_entry(
                17,
                "Kaanum Pongal",
                "காணும் பொங்கல்",
                FestivalType::Festival,
                Importance::Medium,
                Some("Family visiting day"),
            ),
            day_entry(
                26,
                "Republic Day",
                "குடியரசு தினம்",
                FestivalType::National,
                Importance::Medium,
                None,
            ),
        ],
    );

    table.insert(
        TamilMonth::Maasi.english_name(),
        vec![tithi_entry(
            "Chaturdasi",
            "Maha Shivaratri",
            "மகா சிவராத்திரி",
            FestivalType::Major,
            Importance::Major,
            Some("Night-long vigil for Lord Shiva"),
        )],
    );

    table.insert(
        TamilMonth::Panguni.english_name(),
        vec![day_entry(
            1,
            "Karadaiyan Nonbu",
            "காரடையான் நோன்பு",
            FestivalType::Vratham,
            Importance::High,
            Some("Observed at the Maasi-Panguni transition"),
        )],
    );

    table
});

/// Festivals recorded for a Tamil month, looked up by English name.
///
/// Unknown month names return an empty slice.
pub fn festivals_for_month(month_name: &str) -> &'static [FestivalRecord] {
    FESTIVAL_TABLE
        .get(month_name)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

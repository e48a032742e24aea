//! Weather and language advice keyed by destination and travel month.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::destinations::{SeasonalWeather, find_preset};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    /// December to February
    Winter,
    /// March to May
    Spring,
    /// June to August
    Summer,
    /// September to November
    Autumn,
}

impl Season {
    pub fn from_month(month: u32) -> Self {
        match month {
            12 | 1 | 2 => Season::Winter,
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            _ => Season::Autumn,
        }
    }

    fn pick(self, table: &SeasonalWeather) -> &'static str {
        match self {
            Season::Winter => table.winter,
            Season::Spring => table.spring,
            Season::Summer => table.summer,
            Season::Autumn => table.autumn,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelAdvice {
    pub weather: String,
    pub language: String,
}

/// Canned advice for a destination on a travel date. Pure: no I/O, no randomness.
pub fn travel_advice(destination: &str, date: NaiveDate) -> TravelAdvice {
    let month = date.format("%B").to_string();

    match find_preset(destination) {
        Some(profile) => {
            let line = Season::from_month(date.month()).pick(&profile.weather);
            TravelAdvice {
                weather: line.replace("{month}", &month),
                language: profile.language.to_string(),
            }
        }
        None => TravelAdvice {
            weather: format!(
                "Weather in {destination} during {month} can be variable – please check the forecast and pack accordingly."
            ),
            language: format!(
                "Local languages in {destination} may vary – consider learning a few basic phrases or using a translation app."
            ),
        },
    }
}

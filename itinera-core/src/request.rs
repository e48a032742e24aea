//! Trip request: the structured input handed over by the form/CLI layer.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::PlanError;

pub const BUDGET_RANGE: RangeInclusive<u32> = 5_000..=100_000;
pub const DURATION_RANGE: RangeInclusive<usize> = 1..=14;

/// Normalize "Family Trip", "family-trip", "family_trip" to one key.
fn tag_key(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

macro_rules! labelled_tag {
    ($name:ident, $kind:literal, { $($variant:ident => $label:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = PlanError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let key = tag_key(s);
                Self::ALL
                    .iter()
                    .copied()
                    .find(|t| tag_key(t.label()) == key)
                    .ok_or_else(|| PlanError::UnknownTag {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

labelled_tag!(TravelPurpose, "travel purpose", {
    Vacation => "Vacation",
    Business => "Business",
    FamilyTrip => "Family Trip",
    SoloTravel => "Solo Travel",
    Honeymoon => "Honeymoon",
    Adventure => "Adventure",
    CulturalExploration => "Cultural Exploration",
    WellnessRetreat => "Wellness Retreat",
});

labelled_tag!(Interest, "interest", {
    Nature => "Nature",
    Culture => "Culture",
    Adventure => "Adventure",
    Relaxation => "Relaxation",
    HistoricalSites => "Historical Sites",
    FoodAndCuisine => "Food & Cuisine",
    Nightlife => "Nightlife",
    Shopping => "Shopping",
    ArtsAndEntertainment => "Arts & Entertainment",
    LocalExperiences => "Local Experiences",
    OffbeatDestinations => "Offbeat Destinations",
});

/// Everything the planner needs for one "generate" action.
///
/// `purposes` and `interests` are carried for display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRequest {
    /// Preset name or free text; used literally, may be empty.
    pub destination: String,
    pub start_location: String,
    pub budget: u32,
    /// Trip length in days.
    pub duration: usize,
    pub travel_date: NaiveDate,
    #[serde(default)]
    pub purposes: Vec<TravelPurpose>,
    #[serde(default)]
    pub interests: Vec<Interest>,
}

impl TripRequest {
    pub fn new(destination: impl Into<String>, duration: usize, travel_date: NaiveDate) -> Self {
        Self {
            destination: destination.into(),
            start_location: String::new(),
            budget: 50_000,
            duration,
            travel_date,
            purposes: Vec::new(),
            interests: Vec::new(),
        }
    }

    pub fn with_start_location(mut self, start: impl Into<String>) -> Self {
        self.start_location = start.into();
        self
    }

    pub fn with_budget(mut self, budget: u32) -> Self {
        self.budget = budget;
        self
    }

    pub fn with_purposes(mut self, purposes: Vec<TravelPurpose>) -> Self {
        self.purposes = purposes;
        self
    }

    pub fn with_interests(mut self, interests: Vec<Interest>) -> Self {
        self.interests = interests;
        self
    }

    pub fn validate(&self) -> Result<(), PlanError> {
        if !BUDGET_RANGE.contains(&self.budget) {
            return Err(PlanError::InvalidRequest(format!(
                "budget {} outside {}..={}",
                self.budget,
                BUDGET_RANGE.start(),
                BUDGET_RANGE.end()
            )));
        }
        if !DURATION_RANGE.contains(&self.duration) {
            return Err(PlanError::InvalidRequest(format!(
                "duration {} outside {}..={} days",
                self.duration,
                DURATION_RANGE.start(),
                DURATION_RANGE.end()
            )));
        }
        Ok(())
    }

    /// Whether departure/return flights should be added: the start location is
    /// non-blank and differs from the destination, ignoring case and
    /// surrounding whitespace on both sides.
    pub fn needs_flights(&self) -> bool {
        let start = self.start_location.trim();
        !start.is_empty() && start.to_lowercase() != self.destination.trim().to_lowercase()
    }
}

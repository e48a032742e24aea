//! Trip planner: turns a request into a day-by-day itinerary plus advice.
//!
//! Flow:
//! 1) preset destinations draw from their curated list
//! 2) anything else asks the live [`SuggestionSource`]; a failed fetch
//!    degrades to a synthetic-only pool, never an error
//! 3) the pool is padded with fallback items, sampled into days, and
//!    annotated with flights and the budget tip

use anyhow::Result;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::advice::{TravelAdvice, travel_advice};
use crate::budget::budget_tip;
use crate::destinations::find_preset;
use crate::error::PlanError;
use crate::fallback::fallback_list;
use crate::pool::{build_pool, dedupe_preserving_order};
use crate::request::TripRequest;
use crate::sampler::{Day, TASKS_PER_DAY, sample_days};

/// Live source of candidate activities for non-preset destinations.
pub trait SuggestionSource {
    /// Return up to roughly `limit` suggestions for `destination`.
    fn suggestions(&self, destination: &str, limit: usize) -> Result<Vec<String>>;
}

/// A source that always fails; forces synthetic itineraries.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLiveSource;

impl SuggestionSource for NoLiveSource {
    fn suggestions(&self, _destination: &str, _limit: usize) -> Result<Vec<String>> {
        anyhow::bail!("live search disabled")
    }
}

/// Where the real (non-fallback) candidates came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanSource {
    Preset,
    Live,
    /// Live fetch failed; fallback items only.
    Synthetic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripPlan {
    pub request: TripRequest,
    pub itinerary: Vec<Day>,
    pub advice: TravelAdvice,
    pub budget_tip: String,
    pub source: PlanSource,
    /// User-visible notices about degraded paths.
    pub warnings: Vec<String>,
}

pub fn departure_line(start: &str, destination: &str) -> String {
    format!("Take a flight from {start} to {destination}.")
}

pub fn return_line(start: &str, destination: &str) -> String {
    format!("Take a flight from {destination} back to {start}.")
}

pub fn budget_line(tip: &str) -> String {
    format!("Budget Tip: {tip}")
}

/// Generate a full trip plan. All randomness comes from `rng`.
pub fn plan_trip<S, R>(request: &TripRequest, source: &S, rng: &mut R) -> Result<TripPlan, PlanError>
where
    S: SuggestionSource + ?Sized,
    R: Rng + ?Sized,
{
    request.validate()?;

    let destination = request.destination.as_str();
    let required = request.duration * TASKS_PER_DAY;
    let mut warnings = Vec::new();

    let (candidates, plan_source) = match find_preset(destination) {
        Some(profile) => (dedupe_preserving_order(&profile.candidates()), PlanSource::Preset),
        None => match source.suggestions(destination, required) {
            Ok(found) => {
                info!(destination, found = found.len(), "live suggestions fetched");
                (dedupe_preserving_order(&found), PlanSource::Live)
            }
            Err(e) => {
                warn!(destination, error = %e, "live fetch failed; using synthetic itinerary");
                warnings.push(format!("Error fetching live itinerary: {e:#}"));
                warnings.push(
                    "No live itinerary found. Using a generic itinerary based on your details."
                        .to_string(),
                );
                (Vec::new(), PlanSource::Synthetic)
            }
        },
    };

    let fallback = fallback_list(rng, destination);
    if fallback.is_short() {
        warnings.push(format!(
            "Only {} of {} fallback activities could be generated for {destination}.",
            fallback.len(),
            fallback.requested
        ));
    }

    let pool = build_pool(rng, &candidates, &fallback.items, required)?;
    let mut itinerary = sample_days(rng, &pool, request.duration, TASKS_PER_DAY)?;

    if request.needs_flights() {
        let start = request.start_location.trim();
        if let Some(first) = itinerary.first_mut() {
            first.activities.insert(0, departure_line(start, destination));
        }
        if let Some(last) = itinerary.last_mut() {
            last.activities.push(return_line(start, destination));
        }
    }

    let tip = budget_tip(request.budget);
    for day in &mut itinerary {
        day.activities.push(budget_line(tip));
    }

    Ok(TripPlan {
        request: request.clone(),
        itinerary,
        advice: travel_advice(destination, request.travel_date),
        budget_tip: tip.to_string(),
        source: plan_source,
        warnings,
    })
}

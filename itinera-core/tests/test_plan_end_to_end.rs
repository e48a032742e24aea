use chrono::NaiveDate;
use itinera_core::{
    NoLiveSource, PlanSource, SuggestionSource, TripRequest, budget_tip, find_preset, plan_trip,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::collections::HashSet;

fn travel_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 12, 20).unwrap()
}

/// Goa from Mumbai: flights bracket the trip and every day closes with the tip.
#[test]
fn test_goa_two_days_from_mumbai() {
    let req = TripRequest::new("Goa", 2, travel_date())
        .with_start_location("Mumbai")
        .with_budget(50_000);

    let plan = plan_trip(&req, &NoLiveSource, &mut SmallRng::seed_from_u64(2026)).unwrap();
    assert_eq!(plan.source, PlanSource::Preset);
    assert_eq!(plan.itinerary.len(), 2);

    let day1 = &plan.itinerary[0];
    assert_eq!(day1.index, 1);
    assert_eq!(day1.activities[0], "Take a flight from Mumbai to Goa.");

    let last = plan.itinerary.last().unwrap();
    let n = last.activities.len();
    assert_eq!(last.activities[n - 2], "Take a flight from Goa back to Mumbai.");
    assert_eq!(
        last.activities[n - 1],
        format!("Budget Tip: {}", budget_tip(50_000))
    );

    // 3 sampled per day, no repeats across the trip, all from the Goa table
    let goa = find_preset("Goa").unwrap().candidates();
    let sampled: Vec<&String> = plan
        .itinerary
        .iter()
        .flat_map(|d| d.activities.iter())
        .filter(|a| !a.starts_with("Take a flight") && !a.starts_with("Budget Tip"))
        .collect();
    assert_eq!(sampled.len(), 6);
    assert_eq!(sampled.iter().collect::<HashSet<_>>().len(), 6);
    assert!(sampled.iter().all(|a| goa.iter().any(|g| *g == a.as_str())));

    assert!(plan.advice.weather.starts_with("In December, Goa is cooler"));
}

/// Long trips to a preset outgrow the curated list and get padded.
#[test]
fn test_two_week_preset_trip_is_padded() {
    let req = TripRequest::new("Tokyo", 14, travel_date());
    let plan = plan_trip(&req, &NoLiveSource, &mut SmallRng::seed_from_u64(14)).unwrap();
    assert_eq!(plan.itinerary.len(), 14);

    let sampled: Vec<&String> = plan
        .itinerary
        .iter()
        .flat_map(|d| d.activities.iter().take(3))
        .collect();
    assert_eq!(sampled.iter().collect::<HashSet<_>>().len(), 42);

    // 15 curated entries, the rest synthetic
    let tokyo = find_preset("Tokyo").unwrap().candidates();
    let curated = sampled.iter().filter(|a| tokyo.iter().any(|t| *t == a.as_str())).count();
    assert_eq!(curated, tokyo.len());
}

struct Flaky;

impl SuggestionSource for Flaky {
    fn suggestions(&self, _destination: &str, _limit: usize) -> anyhow::Result<Vec<String>> {
        Err(anyhow::anyhow!("HTTP 503 Service Unavailable"))
    }
}

#[test]
fn test_empty_other_destination_still_plans() {
    let req = TripRequest::new("", 2, travel_date()).with_start_location("Pune");
    let plan = plan_trip(&req, &Flaky, &mut SmallRng::seed_from_u64(8)).unwrap();
    assert_eq!(plan.source, PlanSource::Synthetic);
    assert_eq!(plan.itinerary[0].activities[0], "Take a flight from Pune to .");
    assert!(plan.warnings[0].ends_with("HTTP 503 Service Unavailable"));
}

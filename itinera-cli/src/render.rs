//! Plain-text presentation of a trip plan.

use itinera_core::{TripPlan, TripRequest};

fn join_labels<T: std::fmt::Display>(tags: &[T]) -> String {
    tags.iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn or_not_specified(value: &str) -> &str {
    if value.trim().is_empty() { "Not specified" } else { value }
}

pub fn render_selections(req: &TripRequest) -> String {
    let mut s = String::from("## Your Current Selections\n\n");
    s.push_str(&format!("Destination:       {}\n", or_not_specified(&req.destination)));
    s.push_str(&format!("Travel Date:       {}\n", req.travel_date));
    s.push_str(&format!("Starting Location: {}\n", or_not_specified(&req.start_location)));
    s.push_str(&format!("Budget (INR):      {}\n", req.budget));
    s.push_str(&format!("Duration:          {} day(s)\n", req.duration));
    if !req.purposes.is_empty() {
        s.push_str(&format!("Purpose(s):        {}\n", join_labels(&req.purposes)));
    }
    if !req.interests.is_empty() {
        s.push_str(&format!("Interest(s):       {}\n", join_labels(&req.interests)));
    }
    s
}

pub fn render_plan(plan: &TripPlan) -> String {
    let mut s = render_selections(&plan.request);

    for w in &plan.warnings {
        s.push_str(&format!("\n! {w}\n"));
    }

    s.push_str("\n## Your Travel Itinerary\n");
    for day in &plan.itinerary {
        s.push_str(&format!("\nDay {}\n", day.index));
        for activity in &day.activities {
            s.push_str(&format!("  • {activity}\n"));
        }
    }

    s.push_str("\n## Additional Travel Information\n\n");
    s.push_str(&format!("Weather Advice: {}\n", plan.advice.weather));
    s.push_str(&format!("Language Tips:  {}\n", plan.advice.language));
    s
}

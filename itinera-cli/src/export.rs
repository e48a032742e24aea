//! JSON and CSV exports of a trip plan.

use anyhow::{Context, Result};
use clap::ValueEnum;
use itinera_core::TripPlan;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

/// One CSV row: an activity and where it sits in the trip.
#[derive(Debug, Serialize)]
struct ActivityRow<'a> {
    day: usize,
    order: usize,
    activity: &'a str,
}

pub fn write_json<W: Write>(plan: &TripPlan, out: W) -> Result<()> {
    serde_json::to_writer_pretty(out, plan).context("serialize plan as json")
}

pub fn write_csv<W: Write>(plan: &TripPlan, out: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    for day in &plan.itinerary {
        for (i, activity) in day.activities.iter().enumerate() {
            wtr.serialize(ActivityRow {
                day: day.index,
                order: i + 1,
                activity,
            })
            .context("write csv row")?;
        }
    }
    wtr.flush().context("flush csv")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use itinera_core::{NoLiveSource, TripRequest, plan_trip};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn plan() -> TripPlan {
        let req = TripRequest::new("Goa", 2, NaiveDate::from_ymd_opt(2026, 5, 5).unwrap())
            .with_start_location("Mumbai");
        plan_trip(&req, &NoLiveSource, &mut SmallRng::seed_from_u64(3)).unwrap()
    }

    #[test]
    fn test_csv_has_header_and_one_row_per_activity() {
        let plan = plan();
        let mut buf = Vec::new();
        write_csv(&plan, &mut buf).unwrap();

        let mut rdr = csv::Reader::from_reader(buf.as_slice());
        assert_eq!(
            rdr.headers().unwrap(),
            vec!["day", "order", "activity"]
        );
        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        let total: usize = plan.itinerary.iter().map(|d| d.activities.len()).sum();
        assert_eq!(rows.len(), total);
        assert_eq!(&rows[0][0], "1");
        assert_eq!(&rows[0][2], "Take a flight from Mumbai to Goa.");
    }

    #[test]
    fn test_json_round_trips() {
        let plan = plan();
        let mut buf = Vec::new();
        write_json(&plan, &mut buf).unwrap();
        let back: TripPlan = serde_json::from_slice(&buf).unwrap();
        assert_eq!(back, plan);
    }
}

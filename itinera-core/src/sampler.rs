//! Day sampler: draw activities without replacement and group them by day.

use rand::Rng;
use rand::seq::index;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::PlanError;

/// Sampled activities per day, before any annotations are appended.
pub const TASKS_PER_DAY: usize = 3;

/// One trip day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    /// 1-based position in the trip.
    pub index: usize,
    pub activities: Vec<String>,
}

/// Draw `days * per_day` items uniformly without replacement and split them
/// into `days` groups in draw order.
pub fn sample_days<R: Rng + ?Sized>(
    rng: &mut R,
    pool: &[String],
    days: usize,
    per_day: usize,
) -> Result<Vec<Day>, PlanError> {
    if days == 0 || per_day == 0 {
        return Err(PlanError::InvalidRequest(format!(
            "cannot sample {days} days of {per_day} activities"
        )));
    }

    let required = days * per_day;
    if pool.len() < required {
        return Err(PlanError::PoolCapacity {
            required,
            available: pool.len(),
        });
    }

    // index::sample yields a uniformly random subset in random order.
    let drawn: Vec<String> = index::sample(rng, pool.len(), required)
        .into_iter()
        .map(|i| pool[i].clone())
        .collect();

    debug!(pool = pool.len(), drawn = drawn.len(), days, "sampled activities");

    Ok(drawn
        .chunks(per_day)
        .enumerate()
        .map(|(i, group)| Day {
            index: i + 1,
            activities: group.to_vec(),
        })
        .collect())
}

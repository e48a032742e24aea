//! Pool builder: dedupe real candidates, then pad with fallback items.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::error::PlanError;

/// Remove duplicates, keeping the first occurrence of each item.
pub fn dedupe_preserving_order<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(items.len());
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        let item = item.as_ref();
        if seen.insert(item) {
            out.push(item.to_string());
        }
    }
    out
}

/// Build the activity pool for a trip.
///
/// Candidates are kept in order with duplicates dropped. If fewer than
/// `required` remain, uniformly random fallback items not yet present are
/// appended until the pool holds exactly `required`. Candidates beyond
/// `required` are all kept.
///
/// Returns [`PlanError::PoolCapacity`] when candidates plus the unused unique
/// fallback items cannot reach `required`.
pub fn build_pool<R, S, F>(
    rng: &mut R,
    candidates: &[S],
    fallback: &[F],
    required: usize,
) -> Result<Vec<String>, PlanError>
where
    R: Rng + ?Sized,
    S: AsRef<str>,
    F: AsRef<str>,
{
    let mut pool = dedupe_preserving_order(candidates);
    if pool.len() >= required {
        debug!(size = pool.len(), required, "pool filled from candidates alone");
        return Ok(pool);
    }

    let present: HashSet<&str> = pool.iter().map(String::as_str).collect();
    let mut seen = HashSet::with_capacity(fallback.len());
    let mut unused: Vec<&str> = fallback
        .iter()
        .map(|f| f.as_ref())
        .filter(|f| !present.contains(f) && seen.insert(*f))
        .collect();

    let missing = required - pool.len();
    if unused.len() < missing {
        return Err(PlanError::PoolCapacity {
            required,
            available: pool.len() + unused.len(),
        });
    }

    let (picked, _) = unused.partial_shuffle(rng, missing);
    let padded = picked.len();
    pool.extend(picked.iter().map(|s| s.to_string()));

    debug!(size = pool.len(), padded, required, "pool padded with fallback items");
    Ok(pool)
}

//! Synthetic activity generator used to pad thin candidate lists.
//!
//! Each item is a template with the destination substituted in, optionally
//! decorated with an adjective ("a charming Lisbon").

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, warn};

/// Standard fallback source size for one trip.
pub const FALLBACK_POOL_SIZE: usize = 50;

/// Draw budget per requested item.
const ATTEMPTS_PER_ITEM: usize = 10;

/// Chance that a draw gets an adjective prefix.
const ADJECTIVE_PROBABILITY: f64 = 0.6;

const TEMPLATES: &[&str] = &[
    "Explore local art galleries in {}",
    "Attend a live music concert in {}",
    "Experience a local music festival in {}",
    "Relax in a scenic park in {}",
    "Visit a quirky museum in {}",
    "Discover historical heritage at a museum in {}",
    "Shop at local markets in {}",
    "Browse boutique shops in {}",
    "Join a guided historical tour in {}",
    "Take a local cooking class in {}",
    "Discover hidden alleys in {}",
    "Stroll along the coastline in {}",
    "Enjoy an evening cruise in {}",
    "Attend an art exhibition in {}",
    "Join a street art tour in {}",
    "Visit an open-air festival in {}",
    "Savor regional street food in {}",
    "Take a bicycle tour in {}",
    "Join a cultural workshop in {}",
    "Discover local handicrafts in {}",
];

const ADJECTIVES: &[&str] = &[
    "amazing",
    "unforgettable",
    "charming",
    "historic",
    "vibrant",
    "quaint",
    "dynamic",
    "bustling",
    "splendid",
    "exciting",
    "remarkable",
];

/// Output of the generator. May hold fewer than `requested` items when the
/// draw budget ran out before enough unique phrasings were found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackList {
    pub items: Vec<String>,
    pub requested: usize,
    /// Number of draws actually made.
    pub attempts: usize,
}

impl FallbackList {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_short(&self) -> bool {
        self.items.len() < self.requested
    }
}

fn render<R: Rng + ?Sized>(rng: &mut R, destination: &str) -> String {
    // Both tables are non-empty constants.
    let template = TEMPLATES.choose(rng).copied().unwrap_or(TEMPLATES[0]);
    let subject = if rng.gen_bool(ADJECTIVE_PROBABILITY) {
        let adjective = ADJECTIVES.choose(rng).copied().unwrap_or(ADJECTIVES[0]);
        format!("{adjective} {destination}")
    } else {
        destination.to_string()
    };
    template.replace("{}", &subject)
}

/// Generate up to `count` unique synthetic activities for `destination`.
///
/// Makes at most `10 * count` draws; the result is best-effort and reports
/// shortness through [`FallbackList::is_short`].
pub fn generate_fallback<R: Rng + ?Sized>(
    rng: &mut R,
    destination: &str,
    count: usize,
) -> FallbackList {
    let budget = count * ATTEMPTS_PER_ITEM;
    let mut seen = HashSet::with_capacity(count);
    let mut items = Vec::with_capacity(count);
    let mut attempts = 0;

    while items.len() < count && attempts < budget {
        let item = render(rng, destination);
        if seen.insert(item.clone()) {
            items.push(item);
        }
        attempts += 1;
    }

    let out = FallbackList {
        items,
        requested: count,
        attempts,
    };
    if out.is_short() {
        warn!(
            destination,
            requested = count,
            produced = out.len(),
            attempts,
            "fallback generator ran out of draws before reaching the requested count"
        );
    } else {
        debug!(destination, produced = out.len(), attempts, "fallback list ready");
    }
    out
}

/// The standard fallback source: 50 items for the destination.
pub fn fallback_list<R: Rng + ?Sized>(rng: &mut R, destination: &str) -> FallbackList {
    generate_fallback(rng, destination, FALLBACK_POOL_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    /// Upper bound on distinct phrasings the generator can produce.
    fn max_unique_phrasings() -> usize {
        TEMPLATES.len() * (ADJECTIVES.len() + 1)
    }

    #[test]
    fn test_fifty_items_all_mention_destination() {
        let mut rng = SmallRng::seed_from_u64(7);
        let list = fallback_list(&mut rng, "Lisbon");
        assert!(list.len() <= 50);
        assert!(list.items.iter().all(|s| s.contains("Lisbon")));

        let unique: HashSet<_> = list.items.iter().collect();
        assert_eq!(unique.len(), list.len());
    }

    #[test]
    fn test_short_when_count_exceeds_phrasings() {
        let mut rng = SmallRng::seed_from_u64(1);
        let want = max_unique_phrasings() + 10;
        let list = generate_fallback(&mut rng, "Oslo", want);
        assert!(list.is_short());
        assert!(list.len() <= max_unique_phrasings());
        assert_eq!(list.attempts, want * ATTEMPTS_PER_ITEM);
    }

    #[test]
    fn test_zero_count_is_empty() {
        let mut rng = SmallRng::seed_from_u64(3);
        let list = generate_fallback(&mut rng, "Rome", 0);
        assert!(list.is_empty());
        assert!(!list.is_short());
        assert_eq!(list.attempts, 0);
    }

    #[test]
    fn test_empty_destination_is_literal() {
        let mut rng = SmallRng::seed_from_u64(11);
        let list = generate_fallback(&mut rng, "", 5);
        assert!(!list.is_empty());
        assert!(list.items.iter().all(|s| TEMPLATES.iter().any(|t| {
            let stem = t.trim_end_matches("{}");
            s.starts_with(stem)
        })));
    }

    #[test]
    fn test_same_seed_same_output() {
        let a = fallback_list(&mut SmallRng::seed_from_u64(42), "Kyoto");
        let b = fallback_list(&mut SmallRng::seed_from_u64(42), "Kyoto");
        assert_eq!(a, b);
    }
}

//! itinera-core: itinerary pool construction, day sampling and canned travel advice

pub mod advice;
pub mod budget;
pub mod destinations;
pub mod error;
pub mod fallback;
pub mod planner;
pub mod pool;
pub mod request;
pub mod sampler;

pub use advice::{Season, TravelAdvice, travel_advice};
pub use budget::{BudgetTier, budget_tip};
pub use destinations::{DestinationProfile, PRESETS, find_preset};
pub use error::PlanError;
pub use fallback::{FALLBACK_POOL_SIZE, FallbackList, fallback_list, generate_fallback};
pub use planner::{NoLiveSource, PlanSource, SuggestionSource, TripPlan, plan_trip};
pub use pool::{build_pool, dedupe_preserving_order};
pub use request::{BUDGET_RANGE, DURATION_RANGE, Interest, TravelPurpose, TripRequest};
pub use sampler::{Day, TASKS_PER_DAY, sample_days};

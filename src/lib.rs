//! Facade crate for the Sojourn itinerary planner.
//!
//! This crate re-exports the core domain types together with the greedy and
//! exhaustive planners, so applications can depend on a single crate.
//!
//! # Examples
//! ```
//! use sojourn::{Catalog, PlanningRequest, plan_trip};
//!
//! let catalog = Catalog::kathmandu();
//! let request = PlanningRequest {
//!     budget: 300.0,
//!     total_hours: 5.0,
//!     start_hour: 9.0,
//!     interests: ["culture"].into_iter().collect(),
//! };
//! request.validate()?;
//! let plan = plan_trip(&catalog, &request);
//! assert_eq!(plan.greedy.len(), plan.rationales().len());
//! # Ok::<(), sojourn::PlanningRequestError>(())
//! ```

#![forbid(unsafe_code)]

pub use sojourn_core::{
    CITY_CENTRE, Catalog, CatalogError, Comparison, InterestSet, Itinerary, ItineraryMetrics,
    ItineraryStep, ItineraryViolation, OpeningHours, Planner, PlannerConfig, PlanningRequest,
    PlanningRequestError, ScoreBreakdown, ScoreWeights, Scorer, Site, SiteBuilder, SiteError,
    WeightedScorer, distance_km, verify_itinerary,
};

#[cfg(feature = "serde")]
pub use sojourn_core::SiteRecord;

pub use sojourn_planner::{
    DEFAULT_SEARCH_CAP, ExhaustiveConfig, ExhaustivePlanner, GreedyPlanner, SearchOutcome,
    SearchReport, TripOptions, TripPlan, plan_trip, plan_trip_with,
};

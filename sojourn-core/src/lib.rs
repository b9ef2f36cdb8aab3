//! Core domain types for the Sojourn itinerary engine.
//!
//! The crate models a catalog of [`Site`]s, a caller's [`PlanningRequest`]
//! and the [`Itinerary`] a planner produces. It also provides the pure
//! building blocks planners share: the flat-earth [`distance_km`] function,
//! the [`feasibility`] checker, the [`Scorer`] trait with its default
//! [`WeightedScorer`], the [`Comparison`] metrics and the
//! [`verify_itinerary`] invariant check.
//!
//! Nothing in this crate performs I/O or mutates a catalog once it has been
//! built.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog;
mod config;
pub mod dataset;
mod distance;
pub mod feasibility;
mod interests;
mod itinerary;
mod metrics;
mod planner;
mod request;
mod scorer;
mod site;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;
mod verify;

pub use catalog::{Catalog, CatalogError};
#[cfg(feature = "serde")]
pub use catalog::SiteRecord;
pub use config::{PlannerConfig, ScoreWeights, ScoreWeightsError};
pub use distance::{CITY_CENTRE, KM_PER_DEGREE, distance_km};
pub use feasibility::{Infeasibility, PlanState};
pub use interests::InterestSet;
pub use itinerary::{Itinerary, ItineraryStep, Visit};
pub use metrics::{Comparison, ItineraryMetrics};
pub use planner::Planner;
pub use request::{PlanningRequest, PlanningRequestError};
pub use scorer::{ScoreBreakdown, Scorer, WeightedScorer};
pub use site::{OpeningHours, Site, SiteBuilder, SiteError, Tags};
pub use verify::{ItineraryViolation, VERIFY_TOLERANCE, verify_itinerary};

//! Itinerary planners for Sojourn.
//!
//! Two [`Planner`](sojourn_core::Planner) implementations share the feasibility
//! rules from `sojourn-core`:
//!
//! - [`GreedyPlanner`] repeatedly appends the best-scoring feasible site and
//!   records a rationale for each choice. It is fast but can be trapped by an
//!   attractive first pick.
//! - [`ExhaustivePlanner`] searches every ordering of a capped catalog prefix
//!   and returns the one with the most interest matches, breaking ties by
//!   length and then by catalog order.
//!
//! [`plan_trip`] runs both and compares their results.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod exhaustive;
mod greedy;
mod trip;

pub use exhaustive::{
    DEFAULT_SEARCH_CAP, ExhaustiveConfig, ExhaustivePlanner, SearchOutcome, SearchReport,
};
pub use greedy::GreedyPlanner;
pub use trip::{TripOptions, TripPlan, plan_trip, plan_trip_with};

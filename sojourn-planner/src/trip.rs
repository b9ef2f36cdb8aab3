//! Run both planners for one request and compare the results.

use log::info;
use sojourn_core::{Catalog, Comparison, Itinerary, Planner, PlannerConfig, PlanningRequest};

use crate::{ExhaustiveConfig, ExhaustivePlanner, GreedyPlanner, SearchReport};

/// Configuration for [`plan_trip_with`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TripOptions {
    /// Shared planner policy.
    pub planner: PlannerConfig,
    /// Exhaustive search limits.
    pub exhaustive: ExhaustiveConfig,
}

/// Greedy and exhaustive itineraries for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct TripPlan<'c> {
    /// Itinerary from the greedy planner, with rationales.
    pub greedy: Itinerary<'c>,
    /// Itinerary from the exhaustive planner.
    pub exhaustive: Itinerary<'c>,
    /// Metrics for both itineraries.
    pub comparison: Comparison,
    /// Statistics from the exhaustive search.
    pub search: SearchReport,
}

impl TripPlan<'_> {
    /// Greedy rationales in visiting order.
    #[must_use]
    pub fn rationales(&self) -> Vec<&str> {
        self.greedy.rationales().collect()
    }
}

/// Plan `request` with default configuration.
///
/// # Examples
/// ```
/// use sojourn_core::{Catalog, InterestSet, PlanningRequest};
/// use sojourn_planner::plan_trip;
///
/// let catalog = Catalog::kathmandu();
/// let request = PlanningRequest {
///     budget: 1500.0,
///     total_hours: 8.0,
///     start_hour: 9.0,
///     interests: ["culture", "nature"].into_iter().collect(),
/// };
/// let plan = plan_trip(&catalog, &request);
/// assert!(plan.comparison.exhaustive.interest_match >= plan.comparison.greedy.interest_match);
/// assert_eq!(plan.rationales().len(), plan.greedy.len());
/// ```
#[must_use]
pub fn plan_trip<'c>(catalog: &'c Catalog, request: &PlanningRequest) -> TripPlan<'c> {
    plan_trip_with(catalog, request, &TripOptions::default())
}

/// Plan `request` with explicit configuration.
///
/// Callers are expected to validate `request` first; an invalid request
/// simply yields empty itineraries.
#[must_use]
pub fn plan_trip_with<'c>(
    catalog: &'c Catalog,
    request: &PlanningRequest,
    options: &TripOptions,
) -> TripPlan<'c> {
    let greedy = GreedyPlanner::with_config(options.planner).plan(catalog, request);
    let outcome =
        ExhaustivePlanner::with_config(options.planner, options.exhaustive).search(catalog, request);
    let comparison = Comparison::between(&greedy, &outcome.itinerary, &request.interests);

    info!(
        "planned trip: greedy {} sites (match {}), exhaustive {} sites (match {})",
        comparison.greedy.site_count,
        comparison.greedy.interest_match,
        comparison.exhaustive.site_count,
        comparison.exhaustive.interest_match
    );

    TripPlan {
        greedy,
        exhaustive: outcome.itinerary,
        comparison,
        search: outcome.report,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use sojourn_core::test_support::{greedy_trap_catalog, scenario_catalog, scenario_request, trap_request};

    #[rstest]
    fn scenario_plans_agree() {
        let catalog = scenario_catalog();
        let plan = plan_trip(&catalog, &scenario_request());

        assert_eq!(plan.greedy.site_ids(), vec![1, 2]);
        assert_eq!(plan.exhaustive.site_ids(), vec![1, 2]);
        assert_eq!(plan.comparison.greedy.total_fee, 300.0);
        assert_eq!(plan.comparison.greedy.interest_match, 2);
        assert_eq!(plan.comparison.interest_gap(), 0);
        assert_eq!(plan.rationales().len(), 2);
        assert!(plan.search.completed);
    }

    #[rstest]
    fn comparison_exposes_the_greedy_gap() {
        let catalog = greedy_trap_catalog();
        let plan = plan_trip(&catalog, &trap_request());

        assert_eq!(plan.comparison.interest_gap(), 1);
        assert_eq!(plan.comparison.fee_gap(), -500.0);
    }

    #[rstest]
    fn options_reach_both_planners() {
        let catalog = scenario_catalog();
        let options = TripOptions {
            planner: PlannerConfig {
                travel_buffer_hours: 0.0,
                ..PlannerConfig::default()
            },
            exhaustive: ExhaustiveConfig {
                cap: 2,
                ..ExhaustiveConfig::default()
            },
        };
        let plan = plan_trip_with(&catalog, &scenario_request(), &options);

        assert_eq!(plan.greedy.travel_buffer_hours(), 0.0);
        assert_eq!(plan.exhaustive.travel_buffer_hours(), 0.0);
        assert_eq!(plan.search.sites_considered, 2);
    }
}

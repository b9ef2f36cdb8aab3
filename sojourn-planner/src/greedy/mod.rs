//! `GreedyPlanner`: repeatedly take the best-scoring feasible site.
//!
//! Each step scores every feasible, unvisited site from the visitor's
//! current position and appends the winner. Ties go to the site listed first
//! in the catalog. Planning stops as soon as nothing is feasible.

use geo::Coord;
use log::{debug, trace};
use sojourn_core::{
    Catalog, Itinerary, PlanState, Planner, PlannerConfig, PlanningRequest, Scorer, Site,
    WeightedScorer, verify_itinerary,
};

/// Greedy planner generic over its [`Scorer`].
///
/// # Examples
/// ```
/// use sojourn_core::{Catalog, InterestSet, Planner, PlanningRequest};
/// use sojourn_planner::GreedyPlanner;
///
/// let catalog = Catalog::kathmandu();
/// let request = PlanningRequest {
///     budget: 1500.0,
///     total_hours: 8.0,
///     start_hour: 9.0,
///     interests: InterestSet::new().with_tag("culture"),
/// };
/// let itinerary = GreedyPlanner::new().plan(&catalog, &request);
/// assert_eq!(itinerary.sites().next().map(|site| site.id()), Some(1));
/// assert_eq!(itinerary.rationales().count(), itinerary.len());
/// ```
#[derive(Debug, Clone)]
pub struct GreedyPlanner<S = WeightedScorer>
where
    S: Scorer,
{
    scorer: S,
    config: PlannerConfig,
}

impl GreedyPlanner<WeightedScorer> {
    /// Construct a planner with default weights, buffer and origin.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(PlannerConfig::default())
    }

    /// Construct a planner scoring with `config.weights`.
    #[must_use]
    pub const fn with_config(config: PlannerConfig) -> Self {
        Self::with_scorer(WeightedScorer::new(config.weights), config)
    }
}

impl Default for GreedyPlanner<WeightedScorer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> GreedyPlanner<S>
where
    S: Scorer,
{
    /// Construct a planner with a custom scorer.
    ///
    /// `config.weights` is ignored; `scorer` decides every score.
    #[must_use]
    pub const fn with_scorer(scorer: S, config: PlannerConfig) -> Self {
        Self { scorer, config }
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// The best feasible site from `position`, if any.
    fn select<'c>(
        &self,
        catalog: &'c Catalog,
        state: &PlanState,
        position: Coord<f64>,
        request: &PlanningRequest,
    ) -> Option<&'c Site> {
        let mut best: Option<(&'c Site, f64)> = None;
        for site in catalog {
            if let Err(reason) = state.check(site, request.total_hours) {
                trace!("skipping {} ({}): {reason}", site.name(), site.id());
                continue;
            }
            let score = self.scorer.score(site, position, &request.interests);
            if !score.is_finite() {
                trace!("skipping {} ({}): non-finite score", site.name(), site.id());
                continue;
            }
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((site, score));
            }
        }
        best.map(|(site, _)| site)
    }
}

impl<S> Planner for GreedyPlanner<S>
where
    S: Scorer,
{
    fn plan<'c>(&self, catalog: &'c Catalog, request: &PlanningRequest) -> Itinerary<'c> {
        let buffer = self.config.travel_buffer_hours;
        let mut itinerary = Itinerary::empty(request.start_hour, buffer);
        let mut state = PlanState::new(request);
        let mut position = self.config.origin;

        while let Some(site) = self.select(catalog, &state, position, request) {
            let breakdown = self.scorer.explain(site, position, &request.interests);
            debug!(
                "greedy step {}: {} at {:.2}h ({breakdown})",
                itinerary.len() + 1,
                site.name(),
                state.clock_hour()
            );
            itinerary.push(site, Some(breakdown.to_string()));
            state.record_visit(site, buffer);
            position = site.location();
        }

        debug_assert!(
            verify_itinerary(&itinerary, request).is_ok(),
            "greedy itinerary violates the request: {:?}",
            verify_itinerary(&itinerary, request)
        );
        itinerary
    }
}

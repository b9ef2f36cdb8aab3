//! `ExhaustivePlanner`: optimal itineraries over a capped catalog prefix.
//!
//! Every ordering of every subset of the first `cap` sites is considered.
//! Feasible orderings are ranked by interest matches, then length, then the
//! lexicographically smallest index sequence, so the result is unique and
//! independent of evaluation order. That lets the top-level branches run on
//! the rayon pool without changing the answer.

use std::time::{Duration, Instant};

use log::{debug, warn};
use rayon::prelude::*;
use sojourn_core::{Catalog, Itinerary, Planner, PlannerConfig, PlanningRequest, verify_itinerary};

mod search;

use search::{BranchResult, Candidate, Deadline, Limits, search_branch};

/// Number of catalog sites the exhaustive search considers by default.
///
/// Beyond roughly eight sites the factorial growth of orderings makes the
/// search impractical.
pub const DEFAULT_SEARCH_CAP: usize = 6;

/// Configuration for [`ExhaustivePlanner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExhaustiveConfig {
    /// Number of leading catalog sites to search.
    pub cap: usize,
    /// Wall-clock limit after which the best ordering so far is returned.
    ///
    /// A search cut short is neither guaranteed optimal nor deterministic.
    pub deadline: Option<Duration>,
    /// Explore top-level branches on the rayon thread pool.
    pub parallel: bool,
}

impl Default for ExhaustiveConfig {
    fn default() -> Self {
        Self {
            cap: DEFAULT_SEARCH_CAP,
            deadline: None,
            parallel: false,
        }
    }
}

/// Statistics from one exhaustive search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SearchReport {
    /// Sites taken from the front of the catalog.
    pub sites_considered: usize,
    /// Feasible orderings (including prefixes) evaluated.
    pub orderings_evaluated: u64,
    /// `false` when the deadline stopped the search early.
    pub completed: bool,
}

/// The chosen itinerary together with its [`SearchReport`].
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<'c> {
    /// Best feasible itinerary; empty when nothing is feasible.
    pub itinerary: Itinerary<'c>,
    /// How the search went.
    pub report: SearchReport,
}

/// Bounded exhaustive planner.
///
/// # Examples
/// ```
/// use sojourn_core::{Catalog, InterestSet, Planner, PlanningRequest};
/// use sojourn_planner::ExhaustivePlanner;
///
/// let catalog = Catalog::kathmandu();
/// let request = PlanningRequest {
///     budget: 300.0,
///     total_hours: 5.0,
///     start_hour: 9.0,
///     interests: InterestSet::new().with_tag("culture"),
/// };
/// let outcome = ExhaustivePlanner::new().search(&catalog, &request);
/// assert!(outcome.report.completed);
/// assert!(!outcome.itinerary.is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ExhaustivePlanner {
    config: PlannerConfig,
    options: ExhaustiveConfig,
}

impl ExhaustivePlanner {
    /// Construct a planner with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a planner with explicit configuration.
    ///
    /// Only the travel buffer of `config` affects the search; weights and
    /// origin are used by greedy planning alone. The buffer is expected to
    /// be non-negative.
    #[must_use]
    pub const fn with_config(config: PlannerConfig, options: ExhaustiveConfig) -> Self {
        Self { config, options }
    }

    /// Search configuration in use.
    #[must_use]
    pub const fn search_config(&self) -> &ExhaustiveConfig {
        &self.options
    }

    /// Run the search and report how it went.
    #[must_use]
    pub fn search<'c>(&self, catalog: &'c Catalog, request: &PlanningRequest) -> SearchOutcome<'c> {
        let started_at = Instant::now();
        let sites = catalog.prefix(self.options.cap);
        if sites.len() < catalog.len() {
            debug!(
                "exhaustive search considers the first {} of {} sites",
                sites.len(),
                catalog.len()
            );
        }

        let candidates: Vec<Candidate> = sites
            .iter()
            .map(|site| {
                Candidate::new(site, &request.interests, self.config.travel_buffer_hours)
            })
            .collect();
        let limits = Limits::from(request);
        let deadline = Deadline::new(
            self.options
                .deadline
                .and_then(|limit| started_at.checked_add(limit)),
        );

        let run_branch = |first: usize| {
            if deadline.has_expired() {
                BranchResult::default()
            } else {
                search_branch(&candidates, limits, &deadline, first)
            }
        };
        let result = if self.options.parallel {
            (0..candidates.len())
                .into_par_iter()
                .map(run_branch)
                .reduce(BranchResult::default, BranchResult::merge)
        } else {
            (0..candidates.len())
                .map(run_branch)
                .fold(BranchResult::default(), BranchResult::merge)
        };

        let completed = !deadline.has_expired();
        if !completed {
            warn!(
                "exhaustive search stopped at its deadline after {} orderings; result may be suboptimal",
                result.evaluated
            );
        }

        let itinerary = Itinerary::from_sites(
            request.start_hour,
            self.config.travel_buffer_hours,
            result
                .best
                .order
                .iter()
                .filter_map(|&index| sites.get(index)),
        );
        debug_assert!(
            verify_itinerary(&itinerary, request).is_ok(),
            "exhaustive itinerary violates the request: {:?}",
            verify_itinerary(&itinerary, request)
        );
        debug!(
            "exhaustive search evaluated {} orderings in {:?}",
            result.evaluated,
            started_at.elapsed()
        );

        SearchOutcome {
            itinerary,
            report: SearchReport {
                sites_considered: sites.len(),
                orderings_evaluated: result.evaluated,
                completed,
            },
        }
    }
}

impl Planner for ExhaustivePlanner {
    fn plan<'c>(&self, catalog: &'c Catalog, request: &PlanningRequest) -> Itinerary<'c> {
        self.search(catalog, request).itinerary
    }
}

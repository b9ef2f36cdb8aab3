//! Decide whether a site can be appended to an itinerary under construction.
//!
//! [`PlanState`] tracks the clock, the remaining budget and the sites already
//! visited. [`PlanState::check`] is a pure predicate over that state and a
//! candidate site; it never mutates anything. Planners call
//! [`PlanState::record_visit`] only after choosing a site.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::{PlanningRequest, Site};

/// Why a candidate site cannot be appended.
///
/// Rules are checked in declaration order and the first failure is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Infeasibility {
    /// The site is already part of the itinerary.
    #[error("already visited")]
    AlreadyVisited,
    /// The fee exceeds the remaining budget.
    #[error("fee exceeds the remaining budget")]
    OverBudget,
    /// The site is not open yet at the current clock hour.
    #[error("not open yet")]
    NotYetOpen,
    /// The visit would end after the site closes.
    #[error("closes before the visit would end")]
    ClosesTooEarly,
    /// The visit would end after the time horizon.
    #[error("visit would exceed the time horizon")]
    ExceedsHorizon,
}

/// Mutable progress of a planner through a single request.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use sojourn_core::{InterestSet, PlanState, PlanningRequest, Site};
///
/// let request = PlanningRequest {
///     budget: 100.0,
///     total_hours: 4.0,
///     start_hour: 9.0,
///     interests: InterestSet::new().with_tag("art"),
/// };
/// let site = Site::builder(1, "Gallery", Coord { x: 0.0, y: 0.0 })
///     .fee(80.0)
///     .opening_hours(9.0, 17.0)
///     .visit_hours(2.0)
///     .tag("art")
///     .build()?;
///
/// let mut state = PlanState::new(&request);
/// assert!(state.is_feasible(&site, request.total_hours));
/// state.record_visit(&site, 0.3);
/// assert!(!state.is_feasible(&site, request.total_hours));
/// # Ok::<(), sojourn_core::SiteError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PlanState {
    start_hour: f64,
    clock_hour: f64,
    remaining_budget: f64,
    visited: BTreeSet<u64>,
}

impl PlanState {
    /// Initial state for `request`: clock at the start hour, full budget.
    #[must_use]
    pub const fn new(request: &PlanningRequest) -> Self {
        Self {
            start_hour: request.start_hour,
            clock_hour: request.start_hour,
            remaining_budget: request.budget,
            visited: BTreeSet::new(),
        }
    }

    /// Current clock hour.
    #[must_use]
    pub const fn clock_hour(&self) -> f64 {
        self.clock_hour
    }

    /// Budget not yet spent.
    #[must_use]
    pub const fn remaining_budget(&self) -> f64 {
        self.remaining_budget
    }

    /// Hours elapsed since the start hour, including travel buffers already
    /// taken.
    #[expect(
        clippy::float_arithmetic,
        reason = "elapsed time is the clock offset from the start hour"
    )]
    #[must_use]
    pub fn elapsed_hours(&self) -> f64 {
        self.clock_hour - self.start_hour
    }

    /// Report whether `site` has been recorded.
    #[must_use]
    pub fn has_visited(&self, site: &Site) -> bool {
        self.visited.contains(&site.id())
    }

    /// Check every feasibility rule for `site`.
    ///
    /// The candidate's own travel buffer is not counted against the horizon;
    /// it is only added once the visit is recorded.
    ///
    /// # Errors
    /// Returns the first [`Infeasibility`] that applies.
    #[expect(
        clippy::float_arithmetic,
        reason = "horizon check adds the visit duration to elapsed time"
    )]
    pub fn check(&self, site: &Site, total_hours: f64) -> Result<(), Infeasibility> {
        if self.has_visited(site) {
            return Err(Infeasibility::AlreadyVisited);
        }
        if site.fee() > self.remaining_budget {
            return Err(Infeasibility::OverBudget);
        }
        let opening = site.opening();
        if self.clock_hour < opening.open() {
            return Err(Infeasibility::NotYetOpen);
        }
        if !opening.admits(self.clock_hour, site.visit_hours()) {
            return Err(Infeasibility::ClosesTooEarly);
        }
        if self.elapsed_hours() + site.visit_hours() > total_hours {
            return Err(Infeasibility::ExceedsHorizon);
        }
        Ok(())
    }

    /// Predicate form of [`PlanState::check`].
    #[must_use]
    pub fn is_feasible(&self, site: &Site, total_hours: f64) -> bool {
        self.check(site, total_hours).is_ok()
    }

    /// Record a visit to `site`: spend its fee and advance the clock by the
    /// visit duration plus `travel_buffer_hours`.
    #[expect(
        clippy::float_arithmetic,
        reason = "bookkeeping subtracts fees and advances the clock"
    )]
    pub fn record_visit(&mut self, site: &Site, travel_buffer_hours: f64) {
        self.remaining_budget -= site.fee();
        self.clock_hour += site.visit_hours() + travel_buffer_hours;
        self.visited.insert(site.id());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InterestSet;
    use geo::Coord;
    use rstest::{fixture, rstest};

    #[fixture]
    fn request() -> PlanningRequest {
        PlanningRequest {
            budget: 300.0,
            total_hours: 5.0,
            start_hour: 9.0,
            interests: InterestSet::new().with_tag("culture"),
        }
    }

    fn site(fee: f64, open: f64, close: f64, hours: f64) -> Site {
        Site::builder(1, "Candidate", Coord { x: 0.0, y: 0.0 })
            .fee(fee)
            .opening_hours(open, close)
            .visit_hours(hours)
            .tag("culture")
            .build()
            .expect("valid site")
    }

    #[rstest]
    #[case::fits(site(100.0, 6.0, 18.0, 1.5), Ok(()))]
    #[case::fee_equal_to_budget(site(300.0, 6.0, 18.0, 1.5), Ok(()))]
    #[case::over_budget(site(300.5, 6.0, 18.0, 1.5), Err(Infeasibility::OverBudget))]
    #[case::not_open(site(0.0, 10.0, 18.0, 1.0), Err(Infeasibility::NotYetOpen))]
    #[case::closes(site(0.0, 6.0, 10.0, 1.5), Err(Infeasibility::ClosesTooEarly))]
    #[case::ends_at_close(site(0.0, 6.0, 10.5, 1.5), Ok(()))]
    #[case::horizon(site(0.0, 0.0, 24.0, 5.5), Err(Infeasibility::ExceedsHorizon))]
    #[case::fills_horizon(site(0.0, 0.0, 24.0, 5.0), Ok(()))]
    fn check_applies_each_rule(
        request: PlanningRequest,
        #[case] candidate: Site,
        #[case] expected: Result<(), Infeasibility>,
    ) {
        let state = PlanState::new(&request);
        assert_eq!(state.check(&candidate, request.total_hours), expected);
    }

    #[rstest]
    fn record_visit_spends_budget_and_advances_clock(request: PlanningRequest) {
        let candidate = site(100.0, 6.0, 18.0, 1.5);
        let mut state = PlanState::new(&request);
        state.record_visit(&candidate, 0.3);

        assert_eq!(state.remaining_budget(), 200.0);
        assert!((state.clock_hour() - 10.8).abs() < 1e-12);
        assert!((state.elapsed_hours() - 1.8).abs() < 1e-12);
        assert_eq!(
            state.check(&candidate, request.total_hours),
            Err(Infeasibility::AlreadyVisited)
        );
    }

    #[rstest]
    fn elapsed_time_counts_buffers_of_recorded_visits(request: PlanningRequest) {
        let first = site(0.0, 0.0, 24.0, 1.5);
        let mut state = PlanState::new(&request);
        state.record_visit(&first, 0.3);

        let second = Site::builder(2, "Second", Coord { x: 0.0, y: 0.0 })
            .visit_hours(3.3)
            .tag("culture")
            .build()
            .expect("valid site");
        // 1.8h elapsed + 3.3h visit exceeds the 5h horizon.
        assert_eq!(
            state.check(&second, request.total_hours),
            Err(Infeasibility::ExceedsHorizon)
        );
    }
}

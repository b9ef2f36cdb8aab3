//! Independent check that an itinerary honours a request.
//!
//! Planners `debug_assert!` their output against [`verify_itinerary`]; tests
//! call it directly on every itinerary they see.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::{Itinerary, PlanningRequest};

/// Slack allowed on floating-point comparisons.
pub const VERIFY_TOLERANCE: f64 = 1e-9;

/// A broken itinerary invariant.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ItineraryViolation {
    /// A site appears more than once.
    #[error("site {id} is visited more than once")]
    DuplicateSite {
        /// Repeated site identifier.
        id: u64,
    },
    /// The itinerary begins before the requested start hour.
    #[error("itinerary starts at {start_hour} before the requested {requested}")]
    StartsEarly {
        /// Hour the itinerary starts.
        start_hour: f64,
        /// Hour the request allows.
        requested: f64,
    },
    /// A visit begins before the previous one ends.
    #[error("step {position} starts at {start_hour} before the previous visit ends at {previous_end}")]
    Overlap {
        /// One-based position of the offending step.
        position: usize,
        /// Start hour of the offending step.
        start_hour: f64,
        /// End hour of the previous step.
        previous_end: f64,
    },
    /// A visit falls outside its site's opening hours.
    #[error("site {id} is visited from {start_hour} to {end_hour}, outside its opening hours")]
    OutsideOpeningHours {
        /// Site identifier.
        id: u64,
        /// Start of the visit.
        start_hour: f64,
        /// End of the visit.
        end_hour: f64,
    },
    /// Entry fees exceed the budget.
    #[error("total fee {total_fee} exceeds the budget {budget}")]
    OverBudget {
        /// Sum of fees.
        total_fee: f64,
        /// Requested budget.
        budget: f64,
    },
    /// A visit ends after the time horizon.
    #[error("site {id} ends {elapsed} hours after the start, beyond the {total_hours} hour horizon")]
    ExceedsHorizon {
        /// Site identifier.
        id: u64,
        /// Hours from the requested start to the end of the visit.
        elapsed: f64,
        /// Requested horizon.
        total_hours: f64,
    },
}

/// Check `itinerary` against every constraint of `request`.
///
/// Each visit must end within `total_hours` of the requested start; the
/// travel buffer after the last visit is not counted.
///
/// # Errors
/// Returns the first [`ItineraryViolation`] found, walking the steps in order
/// and checking the budget last.
///
/// # Examples
/// ```
/// use sojourn_core::{Catalog, InterestSet, Itinerary, PlanningRequest, verify_itinerary};
///
/// let catalog = Catalog::kathmandu();
/// let request = PlanningRequest {
///     budget: 100.0,
///     total_hours: 2.0,
///     start_hour: 9.0,
///     interests: InterestSet::new().with_tag("culture"),
/// };
/// let itinerary = Itinerary::from_sites(9.0, 0.3, catalog.prefix(1));
/// assert!(verify_itinerary(&itinerary, &request).is_ok());
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "verification compares derived clock times"
)]
pub fn verify_itinerary(
    itinerary: &Itinerary<'_>,
    request: &PlanningRequest,
) -> Result<(), ItineraryViolation> {
    if itinerary.start_hour() + VERIFY_TOLERANCE < request.start_hour {
        return Err(ItineraryViolation::StartsEarly {
            start_hour: itinerary.start_hour(),
            requested: request.start_hour,
        });
    }

    let mut seen = BTreeSet::new();
    let mut previous_end: Option<f64> = None;
    for step in itinerary.steps() {
        let id = step.site.id();
        if !seen.insert(id) {
            return Err(ItineraryViolation::DuplicateSite { id });
        }
        if let Some(end) = previous_end
            && step.start_hour + VERIFY_TOLERANCE < end
        {
            return Err(ItineraryViolation::Overlap {
                position: step.position,
                start_hour: step.start_hour,
                previous_end: end,
            });
        }
        let opening = step.site.opening();
        if step.start_hour + VERIFY_TOLERANCE < opening.open()
            || step.end_hour > opening.close() + VERIFY_TOLERANCE
        {
            return Err(ItineraryViolation::OutsideOpeningHours {
                id,
                start_hour: step.start_hour,
                end_hour: step.end_hour,
            });
        }
        let elapsed = step.end_hour - request.start_hour;
        if elapsed > request.total_hours + VERIFY_TOLERANCE {
            return Err(ItineraryViolation::ExceedsHorizon {
                id,
                elapsed,
                total_hours: request.total_hours,
            });
        }
        previous_end = Some(step.end_hour);
    }

    let total_fee = itinerary.total_fee();
    if total_fee > request.budget + VERIFY_TOLERANCE {
        return Err(ItineraryViolation::OverBudget {
            total_fee,
            budget: request.budget,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::scenario_catalog;
    use crate::{Catalog, InterestSet, Site};
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

    #[fixture]
    fn catalog() -> Catalog {
        scenario_catalog()
    }

    fn pick<'c>(catalog: &'c Catalog, ids: &[u64]) -> Vec<&'c Site> {
        ids.iter()
            .map(|id| catalog.get(*id).expect("site present"))
            .collect()
    }

    #[rstest]
    fn accepts_scenario_plan(request: PlanningRequest, catalog: Catalog) {
        let itinerary = Itinerary::from_sites(9.0, 0.3, pick(&catalog, &[1, 2]));
        assert_eq!(verify_itinerary(&itinerary, &request), Ok(()));
    }

    #[rstest]
    fn accepts_empty_itinerary(request: PlanningRequest) {
        assert_eq!(verify_itinerary(&Itinerary::empty(9.0, 0.3), &request), Ok(()));
    }

    #[rstest]
    fn rejects_duplicates(request: PlanningRequest, catalog: Catalog) {
        let itinerary = Itinerary::from_sites(9.0, 0.3, pick(&catalog, &[1, 1]));
        assert_eq!(
            verify_itinerary(&itinerary, &request),
            Err(ItineraryViolation::DuplicateSite { id: 1 })
        );
    }

    #[rstest]
    fn rejects_over_budget(catalog: Catalog) {
        let tight = PlanningRequest {
            budget: 250.0,
            total_hours: 5.0,
            start_hour: 9.0,
            interests: InterestSet::new().with_tag("culture"),
        };
        let itinerary = Itinerary::from_sites(9.0, 0.3, pick(&catalog, &[1, 2]));
        assert!(matches!(
            verify_itinerary(&itinerary, &tight),
            Err(ItineraryViolation::OverBudget { .. })
        ));
    }

    #[rstest]
    fn rejects_visits_past_the_horizon(request: PlanningRequest, catalog: Catalog) {
        let itinerary = Itinerary::from_sites(9.0, 0.3, pick(&catalog, &[1, 2, 3]));
        assert!(matches!(
            verify_itinerary(&itinerary, &request),
            Err(ItineraryViolation::ExceedsHorizon { id: 3, .. })
        ));
    }

    #[rstest]
    fn rejects_visits_outside_opening_hours(request: PlanningRequest, catalog: Catalog) {
        let early = PlanningRequest {
            start_hour: 6.0,
            ..request
        };
        // Site 2 opens at 7.
        let itinerary = Itinerary::from_sites(6.0, 0.3, pick(&catalog, &[2]));
        assert!(matches!(
            verify_itinerary(&itinerary, &early),
            Err(ItineraryViolation::OutsideOpeningHours { id: 2, .. })
        ));
    }

    #[rstest]
    fn rejects_itinerary_starting_early(request: PlanningRequest, catalog: Catalog) {
        let itinerary = Itinerary::from_sites(8.0, 0.3, pick(&catalog, &[1]));
        assert!(matches!(
            verify_itinerary(&itinerary, &request),
            Err(ItineraryViolation::StartsEarly { .. })
        ));
    }

    #[rstest]
    fn rejects_negative_buffer_overlap(request: PlanningRequest) {
        let sites: Vec<Site> = (1..=2)
            .map(|id| {
                Site::builder(id, "Hall", Coord { x: 0.0, y: 0.0 })
                    .tag("culture")
                    .build()
                    .expect("valid site")
            })
            .collect();
        let itinerary = Itinerary::from_sites(9.0, -0.5, &sites);
        assert!(matches!(
            verify_itinerary(&itinerary, &request),
            Err(ItineraryViolation::Overlap { position: 2, .. })
        ));
    }
}

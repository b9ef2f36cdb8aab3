//! Ordered itineraries produced by planners.
//!
//! An itinerary borrows its sites from the [`Catalog`](crate::Catalog) it was
//! planned against. Visit start times are not stored; they are derived by
//! walking the visits from the start hour and adding each visit duration plus
//! the travel buffer.

use crate::{InterestSet, Site};

/// A single scheduled site with an optional explanation.
#[derive(Debug, Clone, PartialEq)]
pub struct Visit<'c> {
    /// Site being visited.
    pub site: &'c Site,
    /// Human-readable reason the site was chosen, if the planner gives one.
    pub rationale: Option<String>,
}

/// A visit positioned on the clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItineraryStep<'i> {
    /// One-based position in the itinerary.
    pub position: usize,
    /// Site being visited.
    pub site: &'i Site,
    /// Clock hour at which the visit begins.
    pub start_hour: f64,
    /// Clock hour at which the visit ends, excluding travel.
    pub end_hour: f64,
    /// Explanation recorded by the planner.
    pub rationale: Option<&'i str>,
}

/// An ordered sequence of visits beginning at a fixed hour.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use sojourn_core::{Itinerary, Site};
///
/// let site = Site::builder(1, "Stupa", Coord { x: 0.0, y: 0.0 })
///     .fee(200.0)
///     .visit_hours(1.5)
///     .tag("culture")
///     .build()?;
/// let mut itinerary = Itinerary::empty(9.0, 0.3);
/// itinerary.push(&site, None);
///
/// assert_eq!(itinerary.site_ids(), vec![1]);
/// assert_eq!(itinerary.total_fee(), 200.0);
/// # Ok::<(), sojourn_core::SiteError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary<'c> {
    start_hour: f64,
    travel_buffer_hours: f64,
    visits: Vec<Visit<'c>>,
}

impl<'c> Itinerary<'c> {
    /// An itinerary with no visits.
    #[must_use]
    pub const fn empty(start_hour: f64, travel_buffer_hours: f64) -> Self {
        Self {
            start_hour,
            travel_buffer_hours,
            visits: Vec::new(),
        }
    }

    /// Build an itinerary from sites in visiting order, without rationales.
    #[must_use]
    pub fn from_sites<I>(start_hour: f64, travel_buffer_hours: f64, sites: I) -> Self
    where
        I: IntoIterator<Item = &'c Site>,
    {
        Self {
            start_hour,
            travel_buffer_hours,
            visits: sites
                .into_iter()
                .map(|site| Visit {
                    site,
                    rationale: None,
                })
                .collect(),
        }
    }

    /// Append a visit.
    pub fn push(&mut self, site: &'c Site, rationale: Option<String>) {
        self.visits.push(Visit { site, rationale });
    }

    /// Clock hour at which the first visit begins.
    #[must_use]
    pub const fn start_hour(&self) -> f64 {
        self.start_hour
    }

    /// Transit time inserted after every visit.
    #[must_use]
    pub const fn travel_buffer_hours(&self) -> f64 {
        self.travel_buffer_hours
    }

    /// Visits in order.
    #[must_use]
    pub fn visits(&self) -> &[Visit<'c>] {
        &self.visits
    }

    /// Sites in visiting order.
    pub fn sites(&self) -> impl Iterator<Item = &'c Site> + '_ {
        self.visits.iter().map(|visit| visit.site)
    }

    /// Identifiers in visiting order.
    #[must_use]
    pub fn site_ids(&self) -> Vec<u64> {
        self.sites().map(Site::id).collect()
    }

    /// Number of visits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.visits.len()
    }

    /// Report whether there are no visits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    /// Sum of entry fees.
    #[must_use]
    pub fn total_fee(&self) -> f64 {
        self.sites().map(Site::fee).sum()
    }

    /// Time consumed: every visit duration plus one travel buffer per visit.
    #[expect(
        clippy::float_arithmetic,
        reason = "time used sums visit durations and buffers"
    )]
    #[must_use]
    pub fn time_used_hours(&self) -> f64 {
        self.sites()
            .map(|site| site.visit_hours() + self.travel_buffer_hours)
            .sum()
    }

    /// Total interest matches across all visits.
    #[must_use]
    pub fn interest_match(&self, interests: &InterestSet) -> usize {
        self.sites().map(|site| interests.match_count(site)).sum()
    }

    /// Rationales in visiting order, skipping visits without one.
    pub fn rationales(&self) -> impl Iterator<Item = &str> {
        self.visits
            .iter()
            .filter_map(|visit| visit.rationale.as_deref())
    }

    /// Visits with their derived clock times.
    #[expect(
        clippy::float_arithmetic,
        reason = "step times accumulate visit durations and buffers"
    )]
    #[must_use]
    pub fn steps(&self) -> Vec<ItineraryStep<'_>> {
        let mut clock = self.start_hour;
        self.visits
            .iter()
            .enumerate()
            .map(|(index, visit)| {
                let start_hour = clock;
                let end_hour = start_hour + visit.site.visit_hours();
                clock = end_hour + self.travel_buffer_hours;
                ItineraryStep {
                    position: index + 1,
                    site: visit.site,
                    start_hour,
                    end_hour,
                    rationale: visit.rationale.as_deref(),
                }
            })
            .collect()
    }
}

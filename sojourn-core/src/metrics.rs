//! Summary figures for itineraries and side-by-side comparison.

use crate::{InterestSet, Itinerary};

/// Headline figures for one itinerary.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ItineraryMetrics {
    /// Number of sites visited.
    pub site_count: usize,
    /// Sum of entry fees.
    pub total_fee: f64,
    /// Visit durations plus one travel buffer per visit.
    pub time_used_hours: f64,
    /// Total interest matches across all visits.
    pub interest_match: usize,
}

impl ItineraryMetrics {
    /// Measure `itinerary` against `interests`.
    ///
    /// # Examples
    /// ```
    /// use sojourn_core::{InterestSet, Itinerary, ItineraryMetrics};
    ///
    /// let empty = Itinerary::empty(9.0, 0.3);
    /// let metrics = ItineraryMetrics::measure(&empty, &InterestSet::new());
    /// assert_eq!(metrics.site_count, 0);
    /// assert_eq!(metrics.total_fee, 0.0);
    /// ```
    #[must_use]
    pub fn measure(itinerary: &Itinerary<'_>, interests: &InterestSet) -> Self {
        Self {
            site_count: itinerary.len(),
            total_fee: itinerary.total_fee(),
            time_used_hours: itinerary.time_used_hours(),
            interest_match: itinerary.interest_match(interests),
        }
    }
}

/// Metrics for the greedy and exhaustive itineraries of one request.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Comparison {
    /// Figures for the greedy itinerary.
    pub greedy: ItineraryMetrics,
    /// Figures for the exhaustive itinerary.
    pub exhaustive: ItineraryMetrics,
}

impl Comparison {
    /// Measure both itineraries against the same interests.
    #[must_use]
    pub fn between(
        greedy: &Itinerary<'_>,
        exhaustive: &Itinerary<'_>,
        interests: &InterestSet,
    ) -> Self {
        Self {
            greedy: ItineraryMetrics::measure(greedy, interests),
            exhaustive: ItineraryMetrics::measure(exhaustive, interests),
        }
    }

    /// Exhaustive interest match minus greedy interest match.
    ///
    /// Positive when the exhaustive search found a better itinerary.
    #[expect(
        clippy::cast_possible_wrap,
        reason = "interest totals are far below isize::MAX"
    )]
    #[must_use]
    pub const fn interest_gap(&self) -> isize {
        self.exhaustive.interest_match as isize - self.greedy.interest_match as isize
    }

    /// Exhaustive total fee minus greedy total fee.
    #[expect(clippy::float_arithmetic, reason = "fee gap is a difference of sums")]
    #[must_use]
    pub fn fee_gap(&self) -> f64 {
        self.exhaustive.total_fee - self.greedy.total_fee
    }
}

//! Score candidate sites for greedy selection.
//!
//! The [`Scorer`] trait assigns a desirability to a [`Site`] given the
//! visitor's current position and [`InterestSet`]. Higher is better; scores
//! may be negative.

use std::fmt;

use geo::Coord;

use crate::{InterestSet, ScoreWeights, Site, distance_km};

/// Calculate a desirability score for a candidate site.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so planners can be
/// shared across threads. Scores should be finite; planners skip candidates
/// whose score is NaN or infinite.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use sojourn_core::{InterestSet, Scorer, Site};
///
/// struct CheapestFirst;
///
/// impl Scorer for CheapestFirst {
///     fn score(&self, site: &Site, _position: Coord<f64>, _interests: &InterestSet) -> f64 {
///         -site.fee()
///     }
/// }
///
/// let site = Site::builder(1, "Museum", Coord { x: 0.0, y: 0.0 })
///     .fee(50.0)
///     .tag("art")
///     .build()?;
/// let score = CheapestFirst.score(&site, Coord { x: 0.0, y: 0.0 }, &InterestSet::new());
/// assert_eq!(score, -50.0);
/// # Ok::<(), sojourn_core::SiteError>(())
/// ```
pub trait Scorer: Send + Sync {
    /// Return a score for visiting `site` from `position`.
    fn score(&self, site: &Site, position: Coord<f64>, interests: &InterestSet) -> f64;

    /// Describe how the score was reached, for rationale strings.
    ///
    /// The default reports matched tags, distance and fee around
    /// [`Scorer::score`].
    fn explain(&self, site: &Site, position: Coord<f64>, interests: &InterestSet) -> ScoreBreakdown {
        ScoreBreakdown {
            matched: interests.matched(site).map(str::to_owned).collect(),
            distance_km: distance_km(position, site.location()),
            fee: site.fee(),
            score: self.score(site, position, interests),
        }
    }
}

/// Linear scorer rewarding interest matches and penalising distance and fee.
///
/// `score = interest × matches − distance × km − fee / fee_divisor`
///
/// # Examples
/// ```
/// use geo::Coord;
/// use sojourn_core::{InterestSet, Scorer, Site, WeightedScorer};
///
/// let origin = Coord { x: 85.3488, y: 27.7104 };
/// let temple = Site::builder(1, "Temple", origin)
///     .fee(100.0)
///     .tags(["culture", "religious"])
///     .build()?;
/// let interests = InterestSet::new().with_tag("culture");
///
/// assert_eq!(WeightedScorer::default().score(&temple, origin, &interests), 19.0);
/// # Ok::<(), sojourn_core::SiteError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WeightedScorer {
    weights: ScoreWeights,
}

impl WeightedScorer {
    /// Construct a scorer from weights.
    #[must_use]
    pub const fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    /// The weights in use.
    #[must_use]
    pub const fn weights(&self) -> ScoreWeights {
        self.weights
    }
}

impl Scorer for WeightedScorer {
    #[expect(
        clippy::float_arithmetic,
        reason = "score is a weighted linear combination"
    )]
    #[expect(
        clippy::cast_precision_loss,
        reason = "match counts are bounded by the interest set size"
    )]
    fn score(&self, site: &Site, position: Coord<f64>, interests: &InterestSet) -> f64 {
        let matches = interests.match_count(site) as f64;
        let distance = distance_km(position, site.location());
        self.weights.interest * matches
            - self.weights.distance * distance
            - site.fee() / self.weights.fee_divisor
    }
}

/// The terms behind a single score, rendered as a rationale.
///
/// # Examples
/// ```
/// use sojourn_core::ScoreBreakdown;
///
/// let breakdown = ScoreBreakdown {
///     matched: vec!["culture".into()],
///     distance_km: 0.0,
///     fee: 100.0,
///     score: 19.0,
/// };
/// assert_eq!(
///     breakdown.to_string(),
///     "Interest match (culture), dist=0.00km, fee=Rs.100, score=19.0",
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    /// Interest tags the site matched, sorted.
    pub matched: Vec<String>,
    /// Distance from the current position in kilometres.
    pub distance_km: f64,
    /// Entry fee.
    pub fee: f64,
    /// Final score.
    pub score: f64,
}

impl fmt::Display for ScoreBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let matched = if self.matched.is_empty() {
            "none".to_owned()
        } else {
            self.matched.join(", ")
        };
        write!(
            f,
            "Interest match ({matched}), dist={:.2}km, fee=Rs.{}, score={:.1}",
            self.distance_km, self.fee, self.score
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CITY_CENTRE;
    use rstest::{fixture, rstest};

    #[fixture]
    fn interests() -> InterestSet {
        InterestSet::new().with_tag("culture")
    }

    fn site(lon: f64, lat: f64, fee: f64, tags: &[&str]) -> Site {
        Site::builder(1, "Candidate", Coord { x: lon, y: lat })
            .fee(fee)
            .tags(tags.iter().copied())
            .build()
            .expect("valid site")
    }

    #[rstest]
    #[case::matching_at_origin(site(85.3488, 27.7104, 100.0, &["culture", "religious"]), 19.0)]
    #[case::nothing_matched(site(85.3488, 27.7104, 0.0, &["nature"]), 0.0)]
    #[case::fee_only(site(85.3488, 27.7104, 250.0, &["nature"]), -2.5)]
    fn weighted_score_matches_formula(
        interests: InterestSet,
        #[case] candidate: Site,
        #[case] expected: f64,
    ) {
        let score = WeightedScorer::default().score(&candidate, CITY_CENTRE, &interests);
        assert!((score - expected).abs() < 1e-9, "got {score}");
    }

    #[rstest]
    fn distance_penalty_uses_current_position(interests: InterestSet) {
        let stupa = site(85.2906, 27.7149, 200.0, &["culture", "heritage"]);
        let score = WeightedScorer::default().score(&stupa, CITY_CENTRE, &interests);
        let expected = 20.0 - 3.0 * distance_km(CITY_CENTRE, stupa.location()) - 2.0;
        assert!((score - expected).abs() < 1e-9);
        assert!((score - -1.438_46).abs() < 1e-3, "got {score}");
    }

    #[rstest]
    fn custom_weights_change_the_score(interests: InterestSet) {
        let scorer = WeightedScorer::new(ScoreWeights {
            interest: 1.0,
            distance: 0.0,
            fee_divisor: 50.0,
        });
        let temple = site(85.3488, 27.7104, 100.0, &["culture"]);
        assert_eq!(scorer.score(&temple, CITY_CENTRE, &interests), -1.0);
    }

    #[rstest]
    #[case(vec![], "Interest match (none), dist=6.48km, fee=Rs.200, score=-1.4")]
    #[case(
        vec!["culture".to_owned(), "heritage".to_owned()],
        "Interest match (culture, heritage), dist=6.48km, fee=Rs.200, score=-1.4"
    )]
    fn breakdown_renders_rationale(#[case] matched: Vec<String>, #[case] expected: &str) {
        let breakdown = ScoreBreakdown {
            matched,
            distance_km: 6.479_487,
            fee: 200.0,
            score: -1.438_46,
        };
        assert_eq!(breakdown.to_string(), expected);
    }

    #[rstest]
    fn explain_reports_score_terms(interests: InterestSet) {
        let stupa = site(85.2906, 27.7149, 200.0, &["culture", "heritage"]);
        let scorer = WeightedScorer::default();
        let breakdown = scorer.explain(&stupa, CITY_CENTRE, &interests);

        assert_eq!(breakdown.matched, vec!["culture".to_owned()]);
        assert_eq!(breakdown.fee, 200.0);
        assert_eq!(breakdown.score, scorer.score(&stupa, CITY_CENTRE, &interests));
    }
}

//! Tunable planning policy: score weights, travel buffer and origin.

use geo::Coord;
use thiserror::Error;

use crate::CITY_CENTRE;

/// Default transit time added after every visit, in hours.
const DEFAULT_TRAVEL_BUFFER_HOURS: f64 = 0.3;

/// Weights applied by [`WeightedScorer`](crate::WeightedScorer).
///
/// `score = interest × matches − distance × km − fee / fee_divisor`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    /// Reward per interest tag matched.
    pub interest: f64,
    /// Penalty per kilometre travelled from the current position.
    pub distance: f64,
    /// Fee units that cost one score point.
    pub fee_divisor: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            interest: 20.0,
            distance: 3.0,
            fee_divisor: 100.0,
        }
    }
}

/// Errors returned by [`ScoreWeights::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreWeightsError {
    /// A weight was NaN or infinite.
    #[error("score weights must be finite")]
    NonFinite,
    /// The fee divisor was zero or negative.
    #[error("fee divisor must be positive, got {0}")]
    NonPositiveFeeDivisor(f64),
}

impl ScoreWeights {
    /// Validate the weights and return a copy.
    ///
    /// Negative interest or distance weights are allowed so that callers can
    /// probe inverted strategies; only non-finite values and a non-positive
    /// fee divisor are rejected.
    ///
    /// # Errors
    /// Returns [`ScoreWeightsError`] describing the first invalid weight.
    pub fn validate(self) -> Result<Self, ScoreWeightsError> {
        let finite =
            self.interest.is_finite() && self.distance.is_finite() && self.fee_divisor.is_finite();
        if !finite {
            return Err(ScoreWeightsError::NonFinite);
        }
        if self.fee_divisor <= 0.0 {
            return Err(ScoreWeightsError::NonPositiveFeeDivisor(self.fee_divisor));
        }
        Ok(self)
    }
}

/// Policy shared by every planner.
///
/// # Examples
/// ```
/// use sojourn_core::PlannerConfig;
///
/// let config = PlannerConfig::default();
/// assert_eq!(config.travel_buffer_hours, 0.3);
/// assert_eq!(config.weights.interest, 20.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannerConfig {
    /// Score weights for greedy selection.
    pub weights: ScoreWeights,
    /// Transit time added after each visit, independent of distance.
    pub travel_buffer_hours: f64,
    /// Position the visitor starts from.
    pub origin: Coord<f64>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            travel_buffer_hours: DEFAULT_TRAVEL_BUFFER_HOURS,
            origin: CITY_CENTRE,
        }
    }
}

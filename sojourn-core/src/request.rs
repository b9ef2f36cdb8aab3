use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::InterestSet;

/// Parameters for a single planning run.
///
/// The request captures the spending budget, the time horizon in hours, the
/// clock hour the visitor sets off and the interests guiding selection.
/// Planners treat it as read-only and assume it has passed
/// [`PlanningRequest::validate`].
///
/// # Examples
/// ```rust
/// use sojourn_core::{InterestSet, PlanningRequest};
///
/// let request = PlanningRequest {
///     budget: 1500.0,
///     total_hours: 8.0,
///     start_hour: 9.0,
///     interests: InterestSet::new().with_tag("culture"),
/// };
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanningRequest {
    /// Maximum total entry fees.
    pub budget: f64,
    /// Time available from the start hour, in hours.
    pub total_hours: f64,
    /// Clock hour (0–24) at which the first visit may begin.
    pub start_hour: f64,
    /// Interest tags guiding selection.
    pub interests: InterestSet,
}

/// Validation failures for [`PlanningRequest`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanningRequestError {
    /// The budget was negative or not finite.
    #[error("budget must be a non-negative number, got {0}")]
    InvalidBudget(f64),
    /// The time horizon was zero, negative or not finite.
    #[error("total hours must be a positive number, got {0}")]
    InvalidTotalHours(f64),
    /// The start hour fell outside the 24-hour clock.
    #[error("start hour must be between 0 and 24, got {0}")]
    InvalidStartHour(f64),
    /// No interest tags were supplied.
    #[error("at least one interest tag is required")]
    NoInterests,
}

impl PlanningRequest {
    /// Check the caller-boundary preconditions.
    ///
    /// Planners never call this themselves: an empty interest set simply
    /// yields zero interest matches, and an out-of-range start hour yields no
    /// feasible sites. Callers should reject such input before planning.
    ///
    /// # Errors
    /// Returns the first [`PlanningRequestError`] found.
    pub fn validate(&self) -> Result<(), PlanningRequestError> {
        if !self.budget.is_finite() || self.budget < 0.0 {
            return Err(PlanningRequestError::InvalidBudget(self.budget));
        }
        if !self.total_hours.is_finite() || self.total_hours <= 0.0 {
            return Err(PlanningRequestError::InvalidTotalHours(self.total_hours));
        }
        if !(0.0..=24.0).contains(&self.start_hour) {
            return Err(PlanningRequestError::InvalidStartHour(self.start_hour));
        }
        if self.interests.is_empty() {
            return Err(PlanningRequestError::NoInterests);
        }
        Ok(())
    }
}

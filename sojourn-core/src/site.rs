//! Visitable sites and their opening hours.

use std::collections::BTreeSet;

use geo::Coord;
use thiserror::Error;

/// Normalised category tags attached to a [`Site`].
///
/// A sorted set keeps rationale strings and reports stable across runs.
pub type Tags = BTreeSet<String>;

/// Errors returned while building a [`Site`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SiteError {
    /// The display name was empty or whitespace.
    #[error("site {id} must have a non-blank name")]
    BlankName {
        /// Identifier of the rejected site.
        id: u64,
    },
    /// The coordinate contained a non-finite component.
    #[error("site {id} has a non-finite location")]
    NonFiniteLocation {
        /// Identifier of the rejected site.
        id: u64,
    },
    /// The entry fee was negative or not finite.
    #[error("site {id} has an invalid entry fee {fee}")]
    InvalidFee {
        /// Identifier of the rejected site.
        id: u64,
        /// Offending fee.
        fee: f64,
    },
    /// Opening hours were outside `0..=24` or not strictly increasing.
    #[error("site opening hours [{open}, {close}) must satisfy 0 <= open < close <= 24")]
    InvalidOpeningHours {
        /// Offending opening hour.
        open: f64,
        /// Offending closing hour.
        close: f64,
    },
    /// The visit duration was zero, negative or not finite.
    #[error("site {id} has an invalid visit duration of {hours} hours")]
    InvalidVisitDuration {
        /// Identifier of the rejected site.
        id: u64,
        /// Offending duration in hours.
        hours: f64,
    },
    /// A tag was empty once trimmed.
    #[error("site {id} has a blank tag")]
    BlankTag {
        /// Identifier of the rejected site.
        id: u64,
    },
    /// No tags were supplied.
    #[error("site {id} must have at least one tag")]
    MissingTags {
        /// Identifier of the rejected site.
        id: u64,
    },
}

/// Half-open daily window `[open, close)` on a 24-hour clock.
///
/// # Examples
/// ```
/// use sojourn_core::OpeningHours;
///
/// let hours = OpeningHours::new(9.0, 17.0)?;
/// assert!(hours.admits(9.0, 8.0));
/// assert!(!hours.admits(8.5, 1.0));
/// assert!(!hours.admits(16.5, 1.0));
/// # Ok::<(), sojourn_core::SiteError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpeningHours {
    open: f64,
    close: f64,
}

impl OpeningHours {
    /// Validate and construct an opening window.
    ///
    /// # Errors
    /// Returns [`SiteError::InvalidOpeningHours`] unless
    /// `0 <= open < close <= 24`.
    pub fn new(open: f64, close: f64) -> Result<Self, SiteError> {
        let valid = open.is_finite()
            && close.is_finite()
            && (0.0..=24.0).contains(&open)
            && (0.0..=24.0).contains(&close)
            && open < close;
        if valid {
            Ok(Self { open, close })
        } else {
            Err(SiteError::InvalidOpeningHours { open, close })
        }
    }

    /// A window spanning the whole day.
    #[must_use]
    pub const fn all_day() -> Self {
        Self {
            open: 0.0,
            close: 24.0,
        }
    }

    /// Opening hour.
    #[must_use]
    pub const fn open(&self) -> f64 {
        self.open
    }

    /// Closing hour.
    #[must_use]
    pub const fn close(&self) -> f64 {
        self.close
    }

    /// Report whether a visit starting at `start` and lasting `visit_hours`
    /// fits inside the window.
    #[expect(
        clippy::float_arithmetic,
        reason = "window checks add the visit duration to the start hour"
    )]
    #[must_use]
    pub fn admits(&self, start: f64, visit_hours: f64) -> bool {
        start >= self.open && start + visit_hours <= self.close
    }
}

/// A point of interest that a planner may schedule.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. Sites are
/// immutable once built; planners only ever borrow them from a
/// [`Catalog`](crate::Catalog).
///
/// # Examples
/// ```
/// use geo::Coord;
/// use sojourn_core::Site;
///
/// let site = Site::builder(1, "Pashupatinath Temple", Coord { x: 85.3488, y: 27.7104 })
///     .fee(100.0)
///     .opening_hours(6.0, 18.0)
///     .visit_hours(1.5)
///     .tags(["Culture", "religious"])
///     .build()?;
///
/// assert_eq!(site.id(), 1);
/// assert!(site.tags().contains("culture"));
/// # Ok::<(), sojourn_core::SiteError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    id: u64,
    name: String,
    location: Coord<f64>,
    fee: f64,
    opening: OpeningHours,
    visit_hours: f64,
    tags: Tags,
}

impl Site {
    /// Start building a site with the mandatory identity fields.
    pub fn builder(id: u64, name: impl Into<String>, location: Coord<f64>) -> SiteBuilder {
        SiteBuilder {
            id,
            name: name.into(),
            location,
            fee: 0.0,
            opening: (0.0, 24.0),
            visit_hours: 1.0,
            tags: Vec::new(),
        }
    }

    /// Unique identifier within a catalog.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Geographic position.
    #[must_use]
    pub const fn location(&self) -> Coord<f64> {
        self.location
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.location.y
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.location.x
    }

    /// Entry fee in the catalog's currency.
    #[must_use]
    pub const fn fee(&self) -> f64 {
        self.fee
    }

    /// Daily opening window.
    #[must_use]
    pub const fn opening(&self) -> OpeningHours {
        self.opening
    }

    /// Time spent on site, in hours.
    #[must_use]
    pub const fn visit_hours(&self) -> f64 {
        self.visit_hours
    }

    /// Category tags.
    #[must_use]
    pub const fn tags(&self) -> &Tags {
        &self.tags
    }
}

/// Builder returned by [`Site::builder`].
///
/// Unset fields default to a free, all-day site with a one hour visit.
#[derive(Debug, Clone)]
pub struct SiteBuilder {
    id: u64,
    name: String,
    location: Coord<f64>,
    fee: f64,
    opening: (f64, f64),
    visit_hours: f64,
    tags: Vec<String>,
}

impl SiteBuilder {
    /// Set the entry fee.
    #[must_use]
    pub const fn fee(mut self, fee: f64) -> Self {
        self.fee = fee;
        self
    }

    /// Set the daily opening window.
    #[must_use]
    pub const fn opening_hours(mut self, open: f64, close: f64) -> Self {
        self.opening = (open, close);
        self
    }

    /// Set the visit duration in hours.
    #[must_use]
    pub const fn visit_hours(mut self, hours: f64) -> Self {
        self.visit_hours = hours;
        self
    }

    /// Add a single tag.
    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Add several tags.
    #[must_use]
    pub fn tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Validate the collected fields and build the [`Site`].
    ///
    /// Tags are trimmed and lowercased; duplicates collapse.
    ///
    /// # Errors
    /// Returns the first [`SiteError`] describing an invalid field.
    pub fn build(self) -> Result<Site, SiteError> {
        let Self {
            id,
            name,
            location,
            fee,
            opening,
            visit_hours,
            tags,
        } = self;

        if name.trim().is_empty() {
            return Err(SiteError::BlankName { id });
        }
        if !(location.x.is_finite() && location.y.is_finite()) {
            return Err(SiteError::NonFiniteLocation { id });
        }
        if !fee.is_finite() || fee < 0.0 {
            return Err(SiteError::InvalidFee { id, fee });
        }
        let (open, close) = opening;
        let window = OpeningHours::new(open, close)?;
        if !visit_hours.is_finite() || visit_hours <= 0.0 {
            return Err(SiteError::InvalidVisitDuration {
                id,
                hours: visit_hours,
            });
        }
        let normalised = tags
            .iter()
            .map(|raw| normalise_tag(raw).ok_or(SiteError::BlankTag { id }))
            .collect::<Result<Tags, _>>()?;
        if normalised.is_empty() {
            return Err(SiteError::MissingTags { id });
        }

        Ok(Site {
            id,
            name: name.trim().to_owned(),
            location,
            fee,
            opening: window,
            visit_hours,
            tags: normalised,
        })
    }
}

/// Trim and lowercase a tag, returning `None` when nothing remains.
pub(crate) fn normalise_tag(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

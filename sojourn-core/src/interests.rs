//! Interest sets: the category tags a visitor cares about.
//!
//! Tags are normalised the same way as [`Site`] tags so matching is a plain
//! set intersection.

use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Site;
use crate::site::normalise_tag;

/// A visitor's chosen interest tags.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use sojourn_core::{InterestSet, Site};
///
/// let interests = InterestSet::new().with_tag("Culture").with_tag("nature");
/// let site = Site::builder(1, "Stupa", Coord { x: 0.0, y: 0.0 })
///     .tags(["culture", "heritage"])
///     .build()?;
///
/// assert_eq!(interests.match_count(&site), 1);
/// # Ok::<(), sojourn_core::SiteError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct InterestSet {
    tags: BTreeSet<String>,
}

impl InterestSet {
    /// Construct an empty set.
    ///
    /// An empty set is representable but planning with it is a caller error;
    /// see [`PlanningRequest::validate`](crate::PlanningRequest::validate).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a tag, ignoring blanks. Returns whether the set changed.
    pub fn insert(&mut self, tag: &str) -> bool {
        normalise_tag(tag).is_some_and(|normalised| self.tags.insert(normalised))
    }

    /// Add a tag while returning `self` for chaining.
    #[must_use]
    pub fn with_tag(mut self, tag: &str) -> Self {
        self.insert(tag);
        self
    }

    /// Report whether `tag` is part of the set.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        normalise_tag(tag).is_some_and(|normalised| self.tags.contains(&normalised))
    }

    /// Number of tags in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Report whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Iterate over the tags in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Tags shared by `site` and this set, in sorted order.
    pub fn matched<'s>(&'s self, site: &'s Site) -> impl Iterator<Item = &'s str> {
        site.tags()
            .intersection(&self.tags)
            .map(String::as_str)
    }

    /// The interest-match score: `|site.tags ∩ interests|`.
    #[must_use]
    pub fn match_count(&self, site: &Site) -> usize {
        self.matched(site).count()
    }
}

impl<S: AsRef<str>> FromIterator<S> for InterestSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for tag in iter {
            set.insert(tag.as_ref());
        }
        set
    }
}

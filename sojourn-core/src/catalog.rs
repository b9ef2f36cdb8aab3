//! Ordered, read-only collections of sites.
//!
//! Catalog order is meaningful: planners break ties by it and the exhaustive
//! search only considers a prefix of it. A catalog is passed explicitly to
//! every planner so that tests can supply synthetic datasets.

use std::collections::BTreeSet;

use thiserror::Error;

#[cfg(feature = "serde")]
use geo::Coord;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Site, SiteError};

/// Errors returned while assembling a [`Catalog`].
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two sites shared an identifier.
    #[error("site id {id} appears more than once")]
    DuplicateId {
        /// The repeated identifier.
        id: u64,
    },
    /// A record described an invalid site.
    #[error("catalog entry {position} ({name:?}) is invalid: {source}")]
    InvalidSite {
        /// One-based position of the record.
        position: usize,
        /// Name given in the record.
        name: String,
        /// Validation failure.
        #[source]
        source: SiteError,
    },
    /// The catalog payload could not be decoded.
    #[cfg(feature = "serde")]
    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[source] serde_json::Error),
}

/// An ordered collection of uniquely identified sites.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use sojourn_core::{Catalog, Site};
///
/// let site = Site::builder(1, "Stupa", Coord { x: 0.0, y: 0.0 })
///     .tag("culture")
///     .build()?;
/// let catalog = Catalog::new(vec![site])?;
/// assert_eq!(catalog.len(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    sites: Vec<Site>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate identifiers.
    ///
    /// # Errors
    /// Returns [`CatalogError::DuplicateId`] for the first repeated id.
    pub fn new(sites: Vec<Site>) -> Result<Self, CatalogError> {
        let mut seen = BTreeSet::new();
        for site in &sites {
            if !seen.insert(site.id()) {
                return Err(CatalogError::DuplicateId { id: site.id() });
            }
        }
        Ok(Self { sites })
    }

    /// Sites in catalog order.
    #[must_use]
    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    /// Iterate over sites in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Site> {
        self.sites.iter()
    }

    /// Number of sites.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    /// Report whether the catalog has no sites.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Look up a site by identifier.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Site> {
        self.sites.iter().find(|site| site.id() == id)
    }

    /// The first `len` sites, or the whole catalog when it is shorter.
    #[must_use]
    pub fn prefix(&self, len: usize) -> &[Site] {
        self.sites.get(..len).unwrap_or(&self.sites)
    }

    /// Sorted union of every site's tags.
    #[must_use]
    pub fn all_tags(&self) -> BTreeSet<&str> {
        self.sites
            .iter()
            .flat_map(|site| site.tags().iter().map(String::as_str))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Site;
    type IntoIter = std::slice::Iter<'a, Site>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Serialisable description of a site, as found in catalog files.
///
/// Records carry no identifier; [`Catalog::from_records`] numbers them from
/// one in file order.
#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteRecord {
    /// Display name.
    pub name: String,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
    /// Entry fee.
    pub fee: f64,
    /// Opening hour.
    pub open: f64,
    /// Closing hour.
    pub close: f64,
    /// Visit duration in hours.
    pub duration: f64,
    /// Category tags.
    pub tags: Vec<String>,
}

#[cfg(feature = "serde")]
impl SiteRecord {
    fn into_site(self, id: u64) -> Result<Site, SiteError> {
        Site::builder(id, self.name, Coord { x: self.lon, y: self.lat })
            .fee(self.fee)
            .opening_hours(self.open, self.close)
            .visit_hours(self.duration)
            .tags(self.tags)
            .build()
    }
}

#[cfg(feature = "serde")]
impl From<&Site> for SiteRecord {
    fn from(site: &Site) -> Self {
        Self {
            name: site.name().to_owned(),
            lat: site.latitude(),
            lon: site.longitude(),
            fee: site.fee(),
            open: site.opening().open(),
            close: site.opening().close(),
            duration: site.visit_hours(),
            tags: site.tags().iter().cloned().collect(),
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl Catalog {
    /// Build a catalog from records, numbering sites from one.
    ///
    /// # Errors
    /// Returns [`CatalogError::InvalidSite`] for the first invalid record.
    pub fn from_records(records: Vec<SiteRecord>) -> Result<Self, CatalogError> {
        let sites = records
            .into_iter()
            .zip(1_u64..)
            .map(|(record, id)| {
                let name = record.name.clone();
                record
                    .into_site(id)
                    .map_err(|source| CatalogError::InvalidSite {
                        position: usize::try_from(id).unwrap_or(usize::MAX),
                        name,
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(sites)
    }

    /// Decode a JSON array of [`SiteRecord`]s.
    ///
    /// # Errors
    /// Returns [`CatalogError::Parse`] for malformed JSON and
    /// [`CatalogError::InvalidSite`] for records that fail validation.
    pub fn from_json_reader<R: std::io::Read>(reader: R) -> Result<Self, CatalogError> {
        let records: Vec<SiteRecord> =
            serde_json::from_reader(reader).map_err(CatalogError::Parse)?;
        Self::from_records(records)
    }

    /// Convert the catalog back into records.
    #[must_use]
    pub fn to_records(&self) -> Vec<SiteRecord> {
        self.sites.iter().map(SiteRecord::from).collect()
    }
}

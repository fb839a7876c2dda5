//! The catalogued product record.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// A catalogued financial product.
///
/// Field length rules (name 5-100, description 10-200) are enforced by the
/// form layer at entry time, not here; records read back from a backend are
/// taken as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// User-chosen identifier, immutable once created.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Short description of the product.
    pub description: String,

    /// Logo URL.
    pub logo: String,

    /// Date the product becomes available.
    pub release_date: NaiveDate,

    /// Date the product terms are revised.
    ///
    /// Always `release_date` plus one year; see [`revision_date_for`].
    pub revision_date: NaiveDate,
}

impl Product {
    /// Assemble a product, deriving the revision date from the release date.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        description: impl Into<String>,
        logo: impl Into<String>,
        release_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            logo: logo.into(),
            release_date,
            revision_date: revision_date_for(release_date),
        }
    }
}

/// Compute the revision date for a release date.
///
/// The revision date is exactly one year after release, preserving day and
/// month. Feb 29 has no counterpart in the following year and rolls over to
/// Mar 1, matching calendar overflow rather than clamping to Feb 28.
pub fn revision_date_for(release: NaiveDate) -> NaiveDate {
    release.with_year(release.year() + 1).unwrap_or_else(|| {
        // Only Feb 29 has no counterpart in the following year.
        NaiveDate::from_ymd_opt(release.year() + 1, 3, 1).expect("Mar 1 exists in every year")
    })
}

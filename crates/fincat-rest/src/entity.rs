//! Wire format of the product catalog API.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use fincat_core::{DomainError, Product, ProductId};

/// Envelope the service wraps most payloads in.
#[derive(Debug, Deserialize)]
pub(crate) struct DataEnvelope<T> {
    pub data: T,
}

/// A product as the service sends and receives it.
///
/// The service names the date fields `date_release` and `date_revision`, and
/// has been observed emitting both plain dates and full RFC 3339 timestamps,
/// so parsing accepts either form.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ProductEntity {
    pub id: String,
    pub name: String,
    pub description: String,
    pub logo: String,
    pub date_release: String,
    pub date_revision: String,
}

impl ProductEntity {
    /// Convert the wire representation into a validated [`Product`].
    pub fn into_product(self) -> Result<Product, DomainError> {
        Ok(Product {
            id: ProductId::new(&self.id)?,
            name: self.name,
            description: self.description,
            logo: self.logo,
            release_date: parse_wire_date(&self.date_release)?,
            revision_date: parse_wire_date(&self.date_revision)?,
        })
    }
}

impl From<&Product> for ProductEntity {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            description: product.description.clone(),
            logo: product.logo.clone(),
            date_release: product.release_date.to_string(),
            date_revision: product.revision_date.to_string(),
        }
    }
}

/// Parse a wire date, accepting `YYYY-MM-DD` or a full RFC 3339 timestamp.
fn parse_wire_date(value: &str) -> Result<NaiveDate, DomainError> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(value)
        .map(|timestamp| timestamp.date_naive())
        .map_err(|_| DomainError::new(format!("The product service sent an unreadable date '{value}'.")))
}

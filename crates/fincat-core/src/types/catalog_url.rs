//! Catalog URL type.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::DomainError;

/// A validated catalog base URL.
///
/// This type supports both network catalogs (HTTPS/HTTP) and local
/// filesystem catalogs (`file://`).
///
/// # Network URLs
///
/// Network URLs must use HTTPS (or HTTP for localhost) and point at a
/// server exposing the product REST API.
///
/// # File URLs
///
/// File URLs (`file:///path/to/catalog`) select a catalog stored on the
/// local filesystem, which enables offline use and testing without a
/// running backend.
///
/// # Example
///
/// ```
/// use fincat_core::CatalogUrl;
///
/// // Network catalog
/// let catalog = CatalogUrl::new("https://products.example.com").unwrap();
/// assert_eq!(
///     catalog.endpoint(&["bp", "products"]).as_str(),
///     "https://products.example.com/bp/products"
/// );
///
/// // Local filesystem catalog
/// let local = CatalogUrl::new("file:///tmp/catalog").unwrap();
/// assert!(local.is_local());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CatalogUrl(Url);

impl CatalogUrl {
    /// Create a new catalog URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, DomainError> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| invalid(s, &e.to_string()))?;

        Self::validate(&url, s)?;

        // Normalize: remove trailing slash
        let normalized = if url.path() == "/" {
            let mut u = url.clone();
            u.set_path("");
            u
        } else {
            url
        };

        Ok(Self(normalized))
    }

    /// Build an endpoint URL under the catalog base from path segments.
    ///
    /// Segments are percent-encoded, so raw user input (such as an id being
    /// probed for existence) is safe to pass through.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.0.clone();
        {
            let mut parts = url
                .path_segments_mut()
                .expect("catalog URL is always a valid base");
            parts.pop_if_empty();
            parts.extend(segments);
        }
        url
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the inner URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    /// Returns the URL scheme (e.g., "https", "http", "file").
    pub fn scheme(&self) -> &str {
        self.0.scheme()
    }

    /// Returns true if this is a local filesystem catalog (file:// URL).
    pub fn is_local(&self) -> bool {
        self.0.scheme() == "file"
    }

    /// Returns true if this is a network catalog (http:// or https:// URL).
    pub fn is_network(&self) -> bool {
        let scheme = self.0.scheme();
        scheme == "http" || scheme == "https"
    }

    /// Returns the filesystem path for file:// URLs.
    ///
    /// Returns `None` for non-file URLs.
    pub fn to_file_path(&self) -> Option<PathBuf> {
        if self.is_local() {
            self.0.to_file_path().ok()
        } else {
            None
        }
    }

    fn validate(url: &Url, original: &str) -> Result<(), DomainError> {
        // Must be absolute
        if url.cannot_be_a_base() {
            return Err(invalid(original, "must be an absolute URL"));
        }

        let scheme = url.scheme();

        // Handle file:// URLs
        if scheme == "file" {
            // file:// URLs don't need a host, just a path
            if url.path().is_empty() {
                return Err(invalid(original, "file:// URL must have a path"));
            }
            return Ok(());
        }

        // Must be HTTPS (or HTTP for localhost)
        let is_localhost = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "::1");

        if scheme != "https" && !(scheme == "http" && is_localhost) {
            return Err(invalid(
                original,
                "must use HTTPS (HTTP allowed only for localhost)",
            ));
        }

        // Must have a host for network URLs
        if url.host_str().is_none() {
            return Err(invalid(original, "must have a host"));
        }

        Ok(())
    }
}

fn invalid(value: &str, reason: &str) -> DomainError {
    DomainError::new(format!("Invalid catalog URL '{value}': {reason}."))
}

impl fmt::Display for CatalogUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CatalogUrl {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for CatalogUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for CatalogUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CatalogUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for CatalogUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

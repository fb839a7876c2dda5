//! Catalog selection storage and repository construction.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use fincat_core::{CatalogUrl, ProductRepository};
use fincat_file::FileRepository;
use fincat_rest::RestRepository;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Environment variable that overrides the stored catalog selection.
pub const CATALOG_ENV: &str = "FINCAT_CATALOG";

/// Stored catalog configuration.
#[derive(Debug, Serialize, Deserialize)]
struct StoredConfig {
    catalog: String,
}

/// Get the config file path.
fn config_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "fincat").context("Could not determine config directory")?;

    let data_dir = dirs.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data directory")?;

    Ok(data_dir.join("config.json"))
}

/// Save the selected catalog to disk.
pub fn save_catalog(catalog: &CatalogUrl) -> Result<()> {
    let stored = StoredConfig {
        catalog: catalog.to_string(),
    };

    let path = config_path()?;
    let json = serde_json::to_string_pretty(&stored)?;

    // Stage in a sibling file and rename, so the config is replaced atomically.
    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, &json).context("Failed to write config file")?;

    // Set restrictive permissions before the file is moved into place (Unix only)
    #[cfg(unix)]
    {
        let mut perms = fs::metadata(&temp_path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(&temp_path, perms)?;
    }

    fs::rename(&temp_path, &path).context("Failed to write config file")?;

    Ok(())
}

/// Load the stored catalog selection, if any.
fn load_catalog() -> Result<Option<CatalogUrl>> {
    let path = config_path()?;

    if !path.exists() {
        return Ok(None);
    }

    let json = fs::read_to_string(&path).context("Failed to read config file")?;
    let stored: StoredConfig = serde_json::from_str(&json).context("Invalid config file")?;
    let catalog = CatalogUrl::new(&stored.catalog).context("Invalid catalog URL in config")?;

    Ok(Some(catalog))
}

/// Resolve the catalog to operate on.
///
/// Precedence: the `--catalog` flag, then the `FINCAT_CATALOG` environment
/// variable, then the stored selection.
pub fn resolve_catalog(flag: Option<&str>) -> Result<CatalogUrl> {
    if let Some(value) = flag {
        return CatalogUrl::new(value).context("Invalid catalog URL");
    }

    if let Ok(value) = std::env::var(CATALOG_ENV) {
        debug!(catalog = %value, "Using catalog from environment");
        return CatalogUrl::new(&value).context("Invalid catalog URL in FINCAT_CATALOG");
    }

    load_catalog()?.context("No catalog selected. Run 'fincat catalog connect <url>' first.")
}

/// Open the repository a catalog URL points at.
pub fn open_repository(catalog: &CatalogUrl) -> Result<Arc<dyn ProductRepository>> {
    if catalog.is_local() {
        debug!(catalog = %catalog, "Opening file-backed catalog");
        Ok(Arc::new(FileRepository::open(catalog)?))
    } else {
        debug!(catalog = %catalog, "Opening REST-backed catalog");
        Ok(Arc::new(RestRepository::new(catalog.clone())))
    }
}

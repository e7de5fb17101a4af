//! Route catalog loading
//!
//! The lookup table is a JSON document with the namespaces `ferrovia`,
//! `locais` and `classes`, each mapping names to numeric codes:
//!
//! ```json
//! {
//!   "ferrovia": { "Estrada de Ferro Vitoria a Minas": 1 },
//!   "locais": { "Governador Valadares": 14, "Pedro Nolasco": 2 },
//!   "classes": { "Executiva": 1 }
//! }
//! ```

use std::path::{Path, PathBuf};

use domain::RouteCatalog;
use thiserror::Error;
use tracing::{debug, instrument};

/// Default location of the lookup table
pub const DEFAULT_CATALOG_PATH: &str = "config/codigos.json";

/// Errors raised while loading the lookup table
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The file could not be read
    #[error("Cannot read lookup table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid lookup table
    #[error("Invalid lookup table {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The file contains no entries at all
    #[error("Lookup table {0} is empty")]
    Empty(PathBuf),
}

/// Load the lookup table from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON of the
/// expected shape, or has no entries.
#[instrument]
pub fn load_route_catalog(path: &Path) -> Result<RouteCatalog, CatalogError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = parse_route_catalog(&contents).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if catalog.is_empty() {
        return Err(CatalogError::Empty(path.to_path_buf()));
    }

    debug!(locations = catalog.location_names().len(), "Lookup table loaded");
    Ok(catalog)
}

/// Parse a lookup table from JSON text
///
/// # Errors
///
/// Returns an error if the text is not a valid lookup table.
pub fn parse_route_catalog(json: &str) -> Result<RouteCatalog, serde_json::Error> {
    serde_json::from_str(json)
}

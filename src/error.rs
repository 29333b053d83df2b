use std::path::PathBuf;

use thiserror::Error;

/// Failures reading or validating a star catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("reading catalog {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing catalog JSON")]
    Parse(#[from] serde_json::Error),

    #[error("catalog field `{field}` has {found} entries, expected {expected}")]
    SchemaMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("palette entry {index} has {found} components, expected 3")]
    PaletteEntry { index: usize, found: usize },

    #[error("catalog color palette is empty")]
    EmptyPalette,

    #[error("catalog field `{field}` has a non-finite value at index {index}")]
    NonFinite { field: &'static str, index: usize },

    #[error("star index {index} out of range for catalog of {len} stars")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Rejected build options.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("`{field}` must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("`{field}` must be finite")]
    NonFinite { field: &'static str },
}

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::CatalogError;
use crate::types::{EQPoint, Rgb};

// On-disk layout: parallel arrays keyed in camelCase, plus the palette.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogFile {
    right_ascension: Vec<f64>,
    declination: Vec<f64>,
    apparent_magnitude: Vec<f64>,
    #[serde(rename = "colorIndexBV")]
    color_index_bv: Vec<f64>,
    color: Vec<Vec<f64>>,
}

/// A validated star catalog.
///
/// The four per-star sequences always have the same length, the palette is
/// non-empty, and every value is finite. Palette values are kept in whatever
/// range the file uses.
#[derive(Debug, Clone)]
pub struct StarCatalog {
    right_ascension: Vec<f64>,
    declination: Vec<f64>,
    apparent_magnitude: Vec<f64>,
    color_index_bv: Vec<f64>,
    palette: Vec<Rgb>,
}

/// One star's catalog values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarRecord {
    pub coords: EQPoint,
    pub magnitude: f64,
    pub color_index_bv: f64,
}

fn check_finite(field: &'static str, values: &[f64]) -> Result<(), CatalogError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(CatalogError::NonFinite { field, index }),
        None => Ok(()),
    }
}

impl StarCatalog {
    pub fn new(
        right_ascension: Vec<f64>,
        declination: Vec<f64>,
        apparent_magnitude: Vec<f64>,
        color_index_bv: Vec<f64>,
        palette: Vec<[f64; 3]>,
    ) -> Result<Self, CatalogError> {
        let expected = right_ascension.len();
        for (field, found) in [
            ("declination", declination.len()),
            ("apparentMagnitude", apparent_magnitude.len()),
            ("colorIndexBV", color_index_bv.len()),
        ] {
            if found != expected {
                return Err(CatalogError::SchemaMismatch {
                    field,
                    expected,
                    found,
                });
            }
        }

        check_finite("rightAscension", &right_ascension)?;
        check_finite("declination", &declination)?;
        check_finite("apparentMagnitude", &apparent_magnitude)?;
        check_finite("colorIndexBV", &color_index_bv)?;

        if palette.is_empty() {
            return Err(CatalogError::EmptyPalette);
        }
        let palette = palette
            .iter()
            .enumerate()
            .map(|(index, c)| {
                check_finite("color", c).map_err(|_| CatalogError::NonFinite {
                    field: "color",
                    index,
                })?;
                Ok(Rgb::new(c[0] as f32, c[1] as f32, c[2] as f32))
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;

        Ok(Self {
            right_ascension,
            declination,
            apparent_magnitude,
            color_index_bv,
            palette,
        })
    }

    fn from_file(file: CatalogFile) -> Result<Self, CatalogError> {
        let palette = file
            .color
            .iter()
            .enumerate()
            .map(|(index, c)| match c.as_slice() {
                [r, g, b] => Ok([*r, *g, *b]),
                _ => Err(CatalogError::PaletteEntry {
                    index,
                    found: c.len(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(
            file.right_ascension,
            file.declination,
            file.apparent_magnitude,
            file.color_index_bv,
            palette,
        )
    }

    pub fn len(&self) -> usize {
        self.right_ascension.len()
    }

    pub fn is_empty(&self) -> bool {
        self.right_ascension.is_empty()
    }

    pub fn palette(&self) -> &[Rgb] {
        &self.palette
    }

    pub fn star(&self, index: usize) -> Result<StarRecord, CatalogError> {
        if index >= self.len() {
            return Err(CatalogError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        Ok(self.record(index))
    }

    /// Stars in catalog order.
    pub fn stars(&self) -> impl Iterator<Item = StarRecord> + '_ {
        (0..self.len()).map(|i| self.record(i))
    }

    fn record(&self, i: usize) -> StarRecord {
        StarRecord {
            coords: EQPoint {
                ra: self.right_ascension[i],
                dec: self.declination[i],
            },
            magnitude: self.apparent_magnitude[i],
            color_index_bv: self.color_index_bv[i],
        }
    }
}

pub fn parse_catalog_from_reader<R: Read>(rdr: R) -> Result<StarCatalog, CatalogError> {
    let file: CatalogFile = serde_json::from_reader(rdr)?;
    StarCatalog::from_file(file)
}

fn is_gzipped(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

/// Load and validate a catalog. Paths ending in `.gz` are decompressed.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<StarCatalog, CatalogError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let rdr = BufReader::new(file);

    let catalog = if is_gzipped(path) {
        debug!(path = %path.display(), "decompressing gzip catalog");
        parse_catalog_from_reader(GzDecoder::new(rdr))?
    } else {
        parse_catalog_from_reader(rdr)?
    };

    info!(
        path = %path.display(),
        stars = catalog.len(),
        palette = catalog.palette().len(),
        "loaded star catalog"
    );
    Ok(catalog)
}

//! Antenna catalog configuration
//!
//! A catalog is a TOML document listing the antennas a run needs. Each
//! `[[antenna]]` entry is tagged by `model`:
//!
//! ```toml
//! [[antenna]]
//! model = "itu_f1245"
//! id = "dish-38"
//! max_gain_dbi = 38.0
//!
//! [[antenna]]
//! model = "boresight_file"
//! path = "repeaters.csv"
//!
//! [[antenna]]
//! model = "combined"
//! id = "panel"
//! tilt_deg = -2.0
//! horizontal = [[-180.0, -25.0], [0.0, 0.0], [90.0, -10.0]]
//! vertical = [[-90.0, -20.0], [0.0, 0.0], [90.0, -20.0]]
//! ```
//!
//! Sample pairs are `[angle_deg, gain_db]`. Relative file paths resolve
//! against the directory holding the catalog.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::antenna::{AntennaPattern, BoresightLoader, EnvelopeModel};
use crate::error::{GainError, Result};

/// One catalog entry
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "model")]
pub enum AntennaEntry {
    #[serde(rename = "omni")]
    Omni { id: String },

    /// Every column of the file becomes one antenna
    #[serde(rename = "boresight_file")]
    BoresightFile { path: PathBuf },

    #[serde(rename = "itu_f1245")]
    ItuF1245 { id: String, max_gain_dbi: f64 },

    #[serde(rename = "fcc")]
    Fcc { id: String, max_gain_dbi: f64 },

    #[serde(rename = "etsi_class4")]
    EtsiClass4 { id: String, max_gain_dbi: f64 },

    #[serde(rename = "itu_f1336_omni")]
    ItuF1336Omni {
        id: String,
        max_gain_dbi: f64,
        #[serde(default)]
        frequency_hz: f64,
    },

    #[serde(rename = "horizontal")]
    Horizontal { id: String, samples: Vec<[f64; 2]> },

    #[serde(rename = "vertical")]
    Vertical { id: String, samples: Vec<[f64; 2]> },

    #[serde(rename = "combined")]
    Combined {
        id: String,
        tilt_deg: f64,
        horizontal: Vec<[f64; 2]>,
        vertical: Vec<[f64; 2]>,
    },
}

impl AntennaEntry {
    fn build(&self, base_dir: Option<&Path>, loader: &BoresightLoader) -> Result<Vec<AntennaPattern>> {
        let pattern = match self {
            Self::Omni { id } => AntennaPattern::omni(id.clone()),
            Self::BoresightFile { path } => {
                let path = match base_dir {
                    Some(dir) if path.is_relative() => dir.join(path),
                    _ => path.clone(),
                };
                return loader.load_file(path);
            }
            Self::ItuF1245 { id, max_gain_dbi } => {
                AntennaPattern::from_envelope(id.clone(), EnvelopeModel::ItuF1245, *max_gain_dbi, 0.0)
            }
            Self::Fcc { id, max_gain_dbi } => {
                AntennaPattern::from_envelope(id.clone(), EnvelopeModel::Fcc, *max_gain_dbi, 0.0)
            }
            Self::EtsiClass4 { id, max_gain_dbi } => AntennaPattern::from_envelope(
                id.clone(),
                EnvelopeModel::EtsiClass4,
                *max_gain_dbi,
                0.0,
            ),
            Self::ItuF1336Omni {
                id,
                max_gain_dbi,
                frequency_hz,
            } => AntennaPattern::from_envelope(
                id.clone(),
                EnvelopeModel::ItuF1336Omni,
                *max_gain_dbi,
                *frequency_hz,
            ),
            Self::Horizontal { id, samples } => {
                AntennaPattern::horizontal(id.clone(), &to_radians(id, samples)?)?
            }
            Self::Vertical { id, samples } => {
                AntennaPattern::vertical(id.clone(), &to_radians(id, samples)?)?
            }
            Self::Combined {
                id,
                tilt_deg,
                horizontal,
                vertical,
            } => AntennaPattern::combined(
                id.clone(),
                &to_radians(id, horizontal)?,
                &to_radians(id, vertical)?,
                tilt_deg.to_radians(),
            )?,
        };
        Ok(vec![pattern])
    }
}

/// List of antennas to build
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AntennaCatalog {
    #[serde(default, rename = "antenna")]
    pub antennas: Vec<AntennaEntry>,

    /// Directory relative file paths resolve against
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

impl AntennaCatalog {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| GainError::Io {
            file: path.display().to_string(),
            source,
        })?;
        let mut catalog = Self::from_toml_str(&text)?;
        catalog.base_dir = path.parent().map(Path::to_path_buf);
        Ok(catalog)
    }

    /// Build every pattern in catalog order
    ///
    /// Fails without returning anything if any entry fails or two patterns
    /// share an id.
    pub fn build_patterns(&self, loader: &BoresightLoader) -> Result<Vec<AntennaPattern>> {
        let mut patterns = Vec::new();
        for entry in &self.antennas {
            patterns.extend(entry.build(self.base_dir.as_deref(), loader)?);
        }

        let duplicate = {
            let mut seen = HashSet::new();
            patterns
                .iter()
                .find(|p| !seen.insert(p.id()))
                .map(|p| p.id().to_string())
        };
        if let Some(id) = duplicate {
            return Err(GainError::Config(format!(
                "antenna id '{}' is defined more than once",
                id
            )));
        }

        Ok(patterns)
    }
}

fn to_radians(id: &str, samples: &[[f64; 2]]) -> Result<Vec<(f64, f64)>> {
    if samples.is_empty() {
        return Err(GainError::Config(format!("antenna '{}' has no samples", id)));
    }
    Ok(samples
        .iter()
        .map(|&[angle_deg, gain_db]| (angle_deg.to_radians(), gain_db))
        .collect())
}

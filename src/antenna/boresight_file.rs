//! Multi-antenna boresight gain files
//!
//! Layout (comma- or tab-separated):
//!
//! ```text
//! # comment lines and blank lines are skipped
//! Off-axis angle (deg),AntA,AntB
//! 0,38.0,32.5
//! 1,37.2,32.1
//! ...
//! ```
//!
//! The first column is the off-axis angle in degrees; every other column is
//! one antenna, named by its header cell.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::pattern::AntennaPattern;
use crate::error::{GainError, Result};

/// Required text of the first header cell
pub const BORESIGHT_HEADER: &str = "Off-axis angle (deg)";

const DEFAULT_LOG_TARGET: &str = "rfgain::antenna";

/// Loads boresight antenna tables
///
/// Log output goes to the target given at construction, so callers can
/// route or silence loader diagnostics independently of the rest of the
/// crate.
#[derive(Debug, Clone)]
pub struct BoresightLoader {
    log_target: String,
}

impl Default for BoresightLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl BoresightLoader {
    pub fn new() -> Self {
        Self::with_log_target(DEFAULT_LOG_TARGET)
    }

    pub fn with_log_target(target: impl Into<String>) -> Self {
        Self {
            log_target: target.into(),
        }
    }

    pub fn log_target(&self) -> &str {
        &self.log_target
    }

    /// Load every antenna in the file. Any error aborts the whole load.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<Vec<AntennaPattern>> {
        let path = path.as_ref();
        let name = path.display().to_string();
        let file = File::open(path).map_err(|source| GainError::Io {
            file: name.clone(),
            source,
        })?;
        self.load_reader(BufReader::new(file), &name)
    }

    /// Load from any line source; `name` is used in diagnostics
    pub fn load_reader<R: BufRead>(&self, reader: R, name: &str) -> Result<Vec<AntennaPattern>> {
        let target = self.log_target.as_str();

        let mut ids: Option<Vec<String>> = None;
        let mut columns: Vec<Vec<(f64, f64)>> = Vec::new();
        let mut last_line = 0;

        for (index, line) in reader.lines().enumerate() {
            let line_no = index + 1;
            last_line = line_no;
            let line = line.map_err(|source| GainError::Io {
                file: name.to_string(),
                source,
            })?;

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let cells = split_cells(trimmed);

            if ids.is_none() {
                let header = parse_header(&cells, name, line_no)?;
                columns = vec![Vec::new(); header.len()];
                ids = Some(header);
                continue;
            }

            if cells.len() != columns.len() + 1 {
                return Err(parse_error(
                    name,
                    line_no,
                    format!(
                        "expected {} fields, found {}",
                        columns.len() + 1,
                        cells.len()
                    ),
                ));
            }

            let angle_deg = parse_number(cells[0], name, line_no)?;
            let angle = angle_deg.to_radians();
            for (column, cell) in columns.iter_mut().zip(&cells[1..]) {
                column.push((angle, parse_number(cell, name, line_no)?));
            }
        }

        let Some(ids) = ids else {
            return Err(parse_error(name, last_line, "missing header row".to_string()));
        };
        if columns.first().is_none_or(|c| c.is_empty()) {
            return Err(parse_error(name, last_line, "no data rows".to_string()));
        }

        let mut patterns = Vec::with_capacity(ids.len());
        for (id, samples) in ids.into_iter().zip(columns) {
            let (lo, hi) = samples
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(a, _)| {
                    (lo.min(a), hi.max(a))
                });
            log::debug!(
                target: target,
                "{}: fitting '{}' from {} samples over {:.1}..{:.1} deg",
                name,
                id,
                samples.len(),
                lo.to_degrees(),
                hi.to_degrees()
            );
            patterns.push(AntennaPattern::boresight(id, &samples)?);
        }

        log::info!(
            target: target,
            "loaded {} boresight antenna(s) from {}",
            patterns.len(),
            name
        );
        Ok(patterns)
    }
}

/// Load every antenna in a boresight file with the default loader
pub fn build_from_boresight_file(path: impl AsRef<Path>) -> Result<Vec<AntennaPattern>> {
    BoresightLoader::new().load_file(path)
}

fn split_cells(line: &str) -> Vec<&str> {
    let sep = if line.contains(',') { ',' } else { '\t' };
    line.split(sep)
        .map(|c| c.trim().trim_matches('"').trim())
        .collect()
}

fn parse_header(cells: &[&str], name: &str, line_no: usize) -> Result<Vec<String>> {
    if cells[0] != BORESIGHT_HEADER {
        return Err(parse_error(
            name,
            line_no,
            format!(
                "first header cell must be \"{}\", found \"{}\"",
                BORESIGHT_HEADER, cells[0]
            ),
        ));
    }
    if cells.len() < 2 {
        return Err(parse_error(name, line_no, "no antenna columns".to_string()));
    }
    if let Some(blank) = cells[1..].iter().position(|c| c.is_empty()) {
        return Err(parse_error(
            name,
            line_no,
            format!("antenna column {} has no name", blank + 1),
        ));
    }
    Ok(cells[1..].iter().map(|c| c.to_string()).collect())
}

fn parse_number(cell: &str, name: &str, line_no: usize) -> Result<f64> {
    match cell.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(parse_error(
            name,
            line_no,
            format!("invalid number \"{}\"", cell),
        )),
    }
}

fn parse_error(name: &str, line: usize, message: String) -> GainError {
    GainError::Parse {
        file: name.to_string(),
        line,
        message,
    }
}

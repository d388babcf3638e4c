use std::f64::consts::{PI, TAU};
use std::fmt;

use super::envelope::EnvelopeModel;
use super::gain_table::{AngleDomain, GainTable};
use crate::error::{GainError, Result};

/// Variant tag of an [`AntennaPattern`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    Omni,
    Horizontal,
    Vertical,
    Combined,
    Boresight,
}

impl PatternKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Omni => "omni",
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::Combined => "combined",
            Self::Boresight => "boresight",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Horizontal and vertical tables blended by azimuth offset
///
/// The forward-hemisphere vertical cut dominates near φ = 0, the rear cut
/// (elevation reflected through π − θ) dominates near φ = ±π. Each cut is
/// taken relative to its reference gain before the horizontal pattern is
/// added.
#[derive(Debug, Clone)]
pub struct CombinedPattern {
    pub horizontal: GainTable,
    pub vertical: GainTable,
    /// Mechanical downtilt in radians
    pub tilt_rad: f64,
    /// Vertical gain at elevation = tilt
    pub forward_gain_db: f64,
    /// Vertical gain at elevation = π − tilt
    pub back_gain_db: f64,
}

impl CombinedPattern {
    pub fn new(horizontal: GainTable, vertical: GainTable, tilt_rad: f64) -> Self {
        let forward_gain_db = vertical.lookup(tilt_rad);
        let back_gain_db = vertical.lookup(wrap_to_pi(PI - tilt_rad));
        Self {
            horizontal,
            vertical,
            tilt_rad,
            forward_gain_db,
            back_gain_db,
        }
    }

    fn gain_at(&self, phi: f64, theta: f64) -> f64 {
        let phi = wrap_to_pi(phi);
        let theta_back = wrap_to_pi(PI - theta);

        let gv_front = self.vertical.lookup(theta);
        let gv_back = self.vertical.lookup(theta_back);
        let gh = self.horizontal.lookup(phi);

        let back_weight = phi.abs() / PI;
        let front_weight = 1.0 - back_weight;

        front_weight * (gv_front - self.forward_gain_db)
            + back_weight * (gv_back - self.back_gain_db)
            + gh
    }
}

/// Directional response of one antenna
///
/// Built once (from a measured table or an analytic envelope) and then only
/// queried. Each variant owns exactly the tables it needs.
#[derive(Debug, Clone)]
pub enum AntennaPattern {
    /// 0 dB in every direction
    Omni { id: String },
    /// Gain depends only on azimuth offset from boresight
    Horizontal { id: String, table: GainTable },
    /// Gain depends only on elevation
    Vertical { id: String, table: GainTable },
    /// Azimuth and elevation blended
    Combined { id: String, pattern: CombinedPattern },
    /// Gain depends only on the off-boresight angle in [0, π]
    Boresight { id: String, table: GainTable },
}

impl AntennaPattern {
    pub fn omni(id: impl Into<String>) -> Self {
        Self::Omni { id: id.into() }
    }

    /// Horizontal pattern from `(azimuth_rad, gain_db)` samples
    pub fn horizontal(id: impl Into<String>, samples: &[(f64, f64)]) -> Result<Self> {
        Ok(Self::Horizontal {
            id: id.into(),
            table: GainTable::from_samples(samples, AngleDomain::Azimuth)?,
        })
    }

    /// Vertical pattern from `(elevation_rad, gain_db)` samples
    pub fn vertical(id: impl Into<String>, samples: &[(f64, f64)]) -> Result<Self> {
        Ok(Self::Vertical {
            id: id.into(),
            table: GainTable::from_samples(samples, AngleDomain::Elevation)?,
        })
    }

    /// Combined pattern; forward/back reference gains are read from the
    /// vertical table at `tilt_rad` and `π − tilt_rad`
    pub fn combined(
        id: impl Into<String>,
        horizontal: &[(f64, f64)],
        vertical: &[(f64, f64)],
        tilt_rad: f64,
    ) -> Result<Self> {
        let horizontal = GainTable::from_samples(horizontal, AngleDomain::Azimuth)?;
        let vertical = GainTable::from_samples(vertical, AngleDomain::Elevation)?;
        Ok(Self::Combined {
            id: id.into(),
            pattern: CombinedPattern::new(horizontal, vertical, tilt_rad),
        })
    }

    /// Boresight pattern from `(off_axis_rad, gain_db)` samples
    pub fn boresight(id: impl Into<String>, samples: &[(f64, f64)]) -> Result<Self> {
        Ok(Self::Boresight {
            id: id.into(),
            table: GainTable::from_samples(samples, AngleDomain::OffBoresight)?,
        })
    }

    /// Sample a standardized envelope into a table
    ///
    /// Elevation envelopes (F.1336) become vertical patterns, the others
    /// become boresight patterns.
    pub fn from_envelope(
        id: impl Into<String>,
        model: EnvelopeModel,
        max_gain_dbi: f64,
        frequency_hz: f64,
    ) -> Self {
        let id = id.into();
        let gain_at = |angle: f64| model.gain_db(angle.to_degrees(), max_gain_dbi, frequency_hz);
        if model.is_elevation_pattern() {
            Self::Vertical {
                id,
                table: GainTable::from_fn(AngleDomain::Elevation, gain_at),
            }
        } else {
            Self::Boresight {
                id,
                table: GainTable::from_fn(AngleDomain::OffBoresight, gain_at),
            }
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Omni { id }
            | Self::Horizontal { id, .. }
            | Self::Vertical { id, .. }
            | Self::Combined { id, .. }
            | Self::Boresight { id, .. } => id,
        }
    }

    pub fn kind(&self) -> PatternKind {
        match self {
            Self::Omni { .. } => PatternKind::Omni,
            Self::Horizontal { .. } => PatternKind::Horizontal,
            Self::Vertical { .. } => PatternKind::Vertical,
            Self::Combined { .. } => PatternKind::Combined,
            Self::Boresight { .. } => PatternKind::Boresight,
        }
    }

    /// Gain (dB) toward direction `(dx, dy, dz)`
    ///
    /// Azimuth is `atan2(dy, dx)` measured against `boresight_azimuth_rad`;
    /// elevation is the angle above the x-y plane.
    pub fn gain_toward(&self, dx: f64, dy: f64, dz: f64, boresight_azimuth_rad: f64) -> Result<f64> {
        if let Self::Boresight { .. } = self {
            return Err(self.wrong_query("direction-vector"));
        }
        let phi = dy.atan2(dx) - boresight_azimuth_rad;
        let theta = dz.atan2(dx.hypot(dy));
        self.gain_at(phi, theta)
    }

    /// Gain (dB) at azimuth offset `phi` and elevation `theta`, radians
    pub fn gain_at(&self, phi: f64, theta: f64) -> Result<f64> {
        match self {
            Self::Omni { .. } => Ok(0.0),
            Self::Horizontal { table, .. } => Ok(table.lookup(wrap_to_pi(phi))),
            Self::Vertical { table, .. } => Ok(table.lookup(theta)),
            Self::Combined { pattern, .. } => Ok(pattern.gain_at(phi, theta)),
            Self::Boresight { .. } => Err(self.wrong_query("azimuth/elevation")),
        }
    }

    /// Gain (dB) at off-boresight angle `theta` in [0, π]
    ///
    /// Angles outside [0, π] are clamped to the nearest end of the table.
    pub fn gain_off_boresight(&self, theta: f64) -> Result<f64> {
        match self {
            Self::Boresight { table, .. } => Ok(table.lookup(theta)),
            _ => Err(self.wrong_query("off-boresight")),
        }
    }

    /// The pattern's tables, for inspection and reporting
    pub fn tables(&self) -> Vec<(&'static str, &GainTable)> {
        match self {
            Self::Omni { .. } => Vec::new(),
            Self::Horizontal { table, .. } => vec![("horizontal", table)],
            Self::Vertical { table, .. } => vec![("vertical", table)],
            Self::Combined { pattern, .. } => vec![
                ("horizontal", &pattern.horizontal),
                ("vertical", &pattern.vertical),
            ],
            Self::Boresight { table, .. } => vec![("boresight", table)],
        }
    }

    fn wrong_query(&self, query: &'static str) -> GainError {
        GainError::InvalidConfiguration {
            id: self.id().to_string(),
            kind: self.kind(),
            query,
        }
    }
}

/// Reduce an angle in radians into [-π, π)
pub fn wrap_to_pi(angle: f64) -> f64 {
    if (-PI..PI).contains(&angle) {
        angle
    } else {
        -PI + (angle + PI).rem_euclid(TAU)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cardioid_horizontal() -> Vec<(f64, f64)> {
        (0..36)
            .map(|k| {
                let a = -PI + k as f64 * TAU / 36.0;
                (a, 10.0 * (a.cos() - 1.0))
            })
            .collect()
    }

    fn tilted_vertical() -> Vec<(f64, f64)> {
        (0..72)
            .map(|k| {
                let a = -PI + k as f64 * TAU / 72.0;
                (a, 15.0 * a.cos())
            })
            .collect()
    }

    #[test]
    fn test_wrap_to_pi() {
        assert_eq!(wrap_to_pi(0.5), 0.5);
        assert_eq!(wrap_to_pi(-PI), -PI);
        assert!((wrap_to_pi(PI) + PI).abs() < 1e-12);
        assert!((wrap_to_pi(3.0 * PI / 2.0) + PI / 2.0).abs() < 1e-12);
        assert!((wrap_to_pi(-3.0 * PI / 2.0) - PI / 2.0).abs() < 1e-12);
        assert!((wrap_to_pi(10.0 * TAU + 1.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_omni_is_zero() {
        let omni = AntennaPattern::omni("iso");
        assert_eq!(omni.gain_toward(1.0, 2.0, 3.0, 0.7).unwrap(), 0.0);
        assert_eq!(omni.gain_at(2.0, -0.3).unwrap(), 0.0);
        assert_eq!(omni.kind(), PatternKind::Omni);
    }

    #[test]
    fn test_horizontal_uses_boresight_offset() {
        let pattern = AntennaPattern::horizontal("sector", &cardioid_horizontal()).unwrap();

        // Pointing east, boresight east: on axis
        let on_axis = pattern.gain_toward(1.0, 0.0, 0.0, 0.0).unwrap();
        assert!(on_axis.abs() < 1e-6);

        // Pointing north, boresight north: also on axis
        let rotated = pattern.gain_toward(0.0, 1.0, 0.5, PI / 2.0).unwrap();
        assert!(rotated.abs() < 1e-6);

        // Directly behind
        let behind = pattern.gain_toward(-1.0, 0.0, 0.0, 0.0).unwrap();
        assert!((behind + 20.0).abs() < 1e-6);
    }

    #[test]
    fn test_vertical_ignores_azimuth() {
        let pattern = AntennaPattern::vertical("mast", &tilted_vertical()).unwrap();
        let a = pattern.gain_toward(1.0, 0.0, 1.0, 0.0).unwrap();
        let b = pattern.gain_toward(0.0, -1.0, 1.0, 1.3).unwrap();
        assert!((a - b).abs() < 1e-12);
        assert!((a - 15.0 * (PI / 4.0).cos()).abs() < 0.05);
    }

    #[test]
    fn test_combined_reference_gains() {
        let tilt = -3f64.to_radians();
        let pattern =
            AntennaPattern::combined("panel", &cardioid_horizontal(), &tilted_vertical(), tilt)
                .unwrap();
        let AntennaPattern::Combined { pattern: c, .. } = &pattern else {
            panic!("expected combined pattern");
        };
        assert_eq!(c.forward_gain_db, c.vertical.lookup(tilt));
        assert_eq!(c.back_gain_db, c.vertical.lookup(wrap_to_pi(PI - tilt)));

        // On boresight at the tilt angle the normalized vertical term vanishes
        let g = pattern.gain_at(0.0, tilt).unwrap();
        assert!((g - c.horizontal.lookup(0.0)).abs() < 1e-12);
    }

    #[test]
    fn test_boresight_rejects_directional_queries() {
        let pattern = AntennaPattern::boresight("bb", &[(0.0, 20.0), (PI, -5.0)]).unwrap();
        let err = pattern.gain_toward(1.0, 0.0, 0.0, 0.0).unwrap_err();
        assert!(err.is_configuration_fault());
        assert!(pattern.gain_at(0.0, 0.0).unwrap_err().is_configuration_fault());
        assert!((pattern.gain_off_boresight(0.0).unwrap() - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_off_boresight_rejected_for_other_kinds() {
        let omni = AntennaPattern::omni("iso");
        let err = omni.gain_off_boresight(0.1).unwrap_err();
        assert!(err.is_configuration_fault());
        assert!(err.to_string().contains("iso"));
    }

    #[test]
    fn test_from_envelope_kinds() {
        let dish = AntennaPattern::from_envelope("dish", EnvelopeModel::ItuF1245, 38.0, 6e9);
        assert_eq!(dish.kind(), PatternKind::Boresight);
        assert!((dish.gain_off_boresight(0.0).unwrap() - 38.0).abs() < 1e-12);

        let omni = AntennaPattern::from_envelope("omni", EnvelopeModel::ItuF1336Omni, 6.0, 6e9);
        assert_eq!(omni.kind(), PatternKind::Vertical);
        assert!((omni.gain_at(1.0, 0.0).unwrap() - 6.0).abs() < 1e-9);
    }
}

use std::f64::consts::{PI, TAU};

use super::spline::CubicSpline;
use crate::constants::{LUT_POINTS, PERIOD_EPSILON_RAD};
use crate::error::{GainError, Result};

/// How a table treats angles outside its nominal domain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgePolicy {
    /// Reduce modulo 2π into the domain (azimuth, elevation)
    Wrap,
    /// Hold the end sample (off-boresight angle)
    Clamp,
}

/// Angular domain a table is built over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleDomain {
    /// Azimuth offset from boresight, [-π, π], wrapping
    Azimuth,
    /// Elevation angle, [-π, π], wrapping (the rear hemisphere lives past ±π/2)
    Elevation,
    /// Off-boresight angle, [0, π], clamped
    ///
    /// Resampling does not phase-wrap these samples: a fit whose first
    /// sample lies past 0° holds that sample's gain down to 0° instead of
    /// reading the far end of the curve.
    OffBoresight,
}

impl AngleDomain {
    pub fn bounds(self) -> (f64, f64) {
        match self {
            Self::Azimuth | Self::Elevation => (-PI, PI),
            Self::OffBoresight => (0.0, PI),
        }
    }

    pub fn edge_policy(self) -> EdgePolicy {
        match self {
            Self::Azimuth | Self::Elevation => EdgePolicy::Wrap,
            Self::OffBoresight => EdgePolicy::Clamp,
        }
    }
}

/// Uniformly sampled angle → gain (dB) lookup table
///
/// Lookup is linear interpolation between the two bracketing samples.
/// Immutable once built, so it can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct GainTable {
    start: f64,
    end: f64,
    step: f64,
    gains: Vec<f64>,
    edge: EdgePolicy,
}

impl GainTable {
    /// Build a table from measured `(angle_rad, gain_db)` samples
    ///
    /// Samples are sorted, fit with a natural cubic spline and resampled at
    /// [`LUT_POINTS`] uniform points across the domain. For wrapping domains
    /// the first sample is repeated one period later so the fit closes on
    /// itself. A single sample yields a constant table.
    pub fn from_samples(samples: &[(f64, f64)], domain: AngleDomain) -> Result<Self> {
        if samples.is_empty() {
            return Err(GainError::InsufficientData {
                needed: 1,
                available: 0,
            });
        }
        if let Some(&(angle, gain)) = samples.iter().find(|(a, g)| !a.is_finite() || !g.is_finite())
        {
            return Err(GainError::Config(format!(
                "non-finite gain sample ({}, {})",
                angle, gain
            )));
        }

        let mut sorted = samples.to_vec();
        sorted.sort_by(|a, b| a.0.total_cmp(&b.0));
        let before = sorted.len();
        sorted.dedup_by(|later, earlier| later.0 == earlier.0);
        if sorted.len() != before {
            log::warn!(
                "dropped {} duplicate angle sample(s), keeping the first of each",
                before - sorted.len()
            );
        }

        let (start, end) = domain.bounds();
        let edge = domain.edge_policy();

        if sorted.len() == 1 {
            return Ok(Self::constant(sorted[0].1, domain));
        }

        if edge == EdgePolicy::Wrap {
            let phase0 = sorted[0].0;
            let span = sorted[sorted.len() - 1].0 - phase0;
            if span > TAU + PERIOD_EPSILON_RAD {
                return Err(GainError::Config(format!(
                    "samples span {:.3} rad, more than one full turn",
                    span
                )));
            }
            if span < TAU - PERIOD_EPSILON_RAD {
                sorted.push((phase0 + TAU, sorted[0].1));
            }
        }

        let (xs, ys): (Vec<f64>, Vec<f64>) = sorted.into_iter().unzip();
        let spline = CubicSpline::fit(xs, ys)?;
        let gains = spline.resample(start, end, LUT_POINTS, edge == EdgePolicy::Wrap);

        Ok(Self {
            start,
            end,
            step: (end - start) / (LUT_POINTS - 1) as f64,
            gains,
            edge,
        })
    }

    /// Build a table by evaluating `gain_at(angle_rad)` on the uniform grid
    pub fn from_fn<F>(domain: AngleDomain, gain_at: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        let (start, end) = domain.bounds();
        let step = (end - start) / (LUT_POINTS - 1) as f64;
        let gains = (0..LUT_POINTS)
            .map(|k| gain_at(start + k as f64 * step))
            .collect();
        Self {
            start,
            end,
            step,
            gains,
            edge: domain.edge_policy(),
        }
    }

    /// Table returning the same gain at every angle
    pub fn constant(gain_db: f64, domain: AngleDomain) -> Self {
        let (start, end) = domain.bounds();
        Self {
            start,
            end,
            step: end - start,
            gains: vec![gain_db],
            edge: domain.edge_policy(),
        }
    }

    /// Interpolated gain (dB) at `angle` radians
    pub fn lookup(&self, angle: f64) -> f64 {
        let n = self.gains.len();
        if n == 1 {
            return self.gains[0];
        }

        let angle = match self.edge {
            EdgePolicy::Wrap if angle < self.start || angle >= self.end => {
                self.start + (angle - self.start).rem_euclid(self.end - self.start)
            }
            EdgePolicy::Wrap => angle,
            EdgePolicy::Clamp => angle.clamp(self.start, self.end),
        };

        let pos = (angle - self.start) / self.step;
        let i = (pos.floor() as usize).min(n - 2);
        let frac = pos - i as f64;
        self.gains[i] + frac * (self.gains[i + 1] - self.gains[i])
    }

    pub fn len(&self) -> usize {
        self.gains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gains.is_empty()
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn edge_policy(&self) -> EdgePolicy {
        self.edge
    }

    pub fn gains(&self) -> &[f64] {
        &self.gains
    }

    /// Angle of the k-th sample
    pub fn angle(&self, k: usize) -> f64 {
        self.start + k as f64 * self.step
    }

    /// `(angle_rad, gain_db)` pairs in table order
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.gains
            .iter()
            .enumerate()
            .map(|(k, &g)| (self.angle(k), g))
    }
}

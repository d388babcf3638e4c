use std::f64::consts::TAU;

use crate::error::{GainError, Result};

/// Natural cubic spline through a set of strictly increasing knots
///
/// Used only while building a [`GainTable`](super::GainTable): raw measured
/// samples are fit once, evaluated on a uniform grid, and the spline is
/// then dropped.
pub struct CubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Second derivative at each knot
    curvature: Vec<f64>,
}

impl CubicSpline {
    /// Fit a natural spline (zero curvature at both ends)
    ///
    /// Knots must be strictly increasing. Two knots give a straight line.
    pub fn fit(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(GainError::Config(format!(
                "spline needs matching knot counts, got {} angles and {} gains",
                xs.len(),
                ys.len()
            )));
        }
        if xs.len() < 2 {
            return Err(GainError::InsufficientData {
                needed: 2,
                available: xs.len(),
            });
        }
        if let Some(w) = xs.windows(2).find(|w| w[1] <= w[0]) {
            return Err(GainError::Config(format!(
                "spline knots must be strictly increasing ({} follows {})",
                w[1], w[0]
            )));
        }

        let curvature = solve_natural_curvature(&xs, &ys);
        Ok(Self { xs, ys, curvature })
    }

    /// Evaluate the spline. Outside the knot range the end values are held.
    pub fn eval(&self, x: f64) -> f64 {
        let n = self.xs.len();
        if x <= self.xs[0] {
            return self.ys[0];
        }
        if x >= self.xs[n - 1] {
            return self.ys[n - 1];
        }

        // First knot strictly greater than x, so x lies in [xs[i], xs[i + 1])
        let i = self.xs.partition_point(|&k| k <= x) - 1;
        let (x0, x1) = (self.xs[i], self.xs[i + 1]);
        let (y0, y1) = (self.ys[i], self.ys[i + 1]);
        let (m0, m1) = (self.curvature[i], self.curvature[i + 1]);
        let h = x1 - x0;
        let a = x1 - x;
        let b = x - x0;

        m0 * a * a * a / (6.0 * h)
            + m1 * b * b * b / (6.0 * h)
            + (y0 / h - m0 * h / 6.0) * a
            + (y1 / h - m1 * h / 6.0) * b
    }

    /// Evaluate at `points` uniformly spaced positions spanning `[start, end]`
    ///
    /// With `wrap` set, each position is first reduced into
    /// `[phase0, phase0 + 2π)`, where `phase0` is the first knot, so tables
    /// fit on `[0, 2π)` can be read on `[-π, π]` and vice versa.
    pub fn resample(&self, start: f64, end: f64, points: usize, wrap: bool) -> Vec<f64> {
        let phase0 = self.xs[0];
        let step = if points > 1 {
            (end - start) / (points - 1) as f64
        } else {
            0.0
        };

        (0..points)
            .map(|k| {
                let angle = start + k as f64 * step;
                if wrap {
                    self.eval(phase0 + (angle - phase0).rem_euclid(TAU))
                } else {
                    self.eval(angle)
                }
            })
            .collect()
    }
}

/// Thomas algorithm on the natural-spline tridiagonal system
fn solve_natural_curvature(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    let n = xs.len();
    let mut m = vec![0.0; n];
    if n < 3 {
        return m;
    }

    let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();

    // Interior rows 1..n-1, stored at index i - 1
    let inner = n - 2;
    let mut diag = vec![0.0; inner];
    let mut upper = vec![0.0; inner];
    let mut rhs = vec![0.0; inner];

    for i in 1..n - 1 {
        let row = i - 1;
        diag[row] = 2.0 * (h[i - 1] + h[i]);
        upper[row] = h[i];
        rhs[row] = 6.0 * ((ys[i + 1] - ys[i]) / h[i] - (ys[i] - ys[i - 1]) / h[i - 1]);
    }

    // Forward sweep; the sub-diagonal of row r is h[r]
    for row in 1..inner {
        let w = h[row] / diag[row - 1];
        diag[row] -= w * upper[row - 1];
        rhs[row] -= w * rhs[row - 1];
    }

    // Back substitution
    m[inner] = rhs[inner - 1] / diag[inner - 1];
    for row in (0..inner - 1).rev() {
        m[row + 1] = (rhs[row] - upper[row] * m[row + 2]) / diag[row];
    }

    m
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_passes_through_knots() {
        let xs = vec![0.0, 0.5, 1.3, 2.0, 3.1];
        let ys = vec![1.0, -2.0, 0.5, 4.0, 3.0];
        let s = CubicSpline::fit(xs.clone(), ys.clone()).unwrap();

        for (x, y) in xs.iter().zip(&ys) {
            assert!((s.eval(*x) - y).abs() < 1e-12, "knot {} -> {}", x, s.eval(*x));
        }
    }

    #[test]
    fn test_two_knots_is_linear() {
        let s = CubicSpline::fit(vec![0.0, 2.0], vec![10.0, 20.0]).unwrap();
        assert!((s.eval(0.5) - 12.5).abs() < 1e-12);
        assert!((s.eval(1.0) - 15.0).abs() < 1e-12);
    }

    #[test]
    fn test_reproduces_linear_data() {
        // A natural spline through collinear points has zero curvature everywhere
        let xs: Vec<f64> = (0..6).map(|i| i as f64 * 0.7).collect();
        let ys: Vec<f64> = xs.iter().map(|x| 3.0 * x - 1.0).collect();
        let s = CubicSpline::fit(xs, ys).unwrap();

        for x in [0.1, 0.9, 1.75, 3.2] {
            assert!((s.eval(x) - (3.0 * x - 1.0)).abs() < 1e-10);
        }
    }

    #[test]
    fn test_holds_end_values() {
        let s = CubicSpline::fit(vec![1.0, 2.0, 3.0], vec![5.0, 7.0, 6.0]).unwrap();
        assert_eq!(s.eval(-10.0), 5.0);
        assert_eq!(s.eval(10.0), 6.0);
    }

    #[test]
    fn test_rejects_bad_knots() {
        assert!(CubicSpline::fit(vec![0.0], vec![1.0]).is_err());
        assert!(CubicSpline::fit(vec![0.0, 1.0], vec![1.0]).is_err());
        assert!(CubicSpline::fit(vec![0.0, 1.0, 1.0], vec![1.0, 2.0, 3.0]).is_err());
        assert!(CubicSpline::fit(vec![0.0, 2.0, 1.0], vec![1.0, 2.0, 3.0]).is_err());
    }

    #[test]
    fn test_resample_wraps_into_phase_window() {
        // Knots over [0, 2π]; reading at -π/2 must land on 3π/2
        let xs: Vec<f64> = (0..=8).map(|i| i as f64 * PI / 4.0).collect();
        let ys: Vec<f64> = (0..=8).map(|i| i as f64).collect();
        let s = CubicSpline::fit(xs, ys).unwrap();

        let table = s.resample(-PI, PI, 5, true);
        assert_eq!(table.len(), 5);
        assert!((table[1] - s.eval(1.5 * PI)).abs() < 1e-12);
        assert!((table[2] - s.eval(0.0)).abs() < 1e-12);
        assert!((table[3] - s.eval(0.5 * PI)).abs() < 1e-12);
    }

    #[test]
    fn test_resample_without_wrap_holds_ends() {
        let s = CubicSpline::fit(vec![0.5, 1.0, 2.0], vec![4.0, 2.0, 1.0]).unwrap();
        let table = s.resample(0.0, PI, 3, false);
        assert_eq!(table[0], 4.0);
        assert_eq!(table[2], 1.0);
    }
}

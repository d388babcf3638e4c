//! Physical and numerical constants
//!
//! Ellipsoid parameters are WGS-84 expressed in kilometers, the length unit
//! used throughout the crate.

/// WGS-84 semi-major axis (equatorial radius) in km
pub const WGS84_A_KM: f64 = 6378.137;

/// WGS-84 semi-minor axis (polar radius) in km
pub const WGS84_B_KM: f64 = 6356.7523142;

/// WGS-84 first eccentricity squared
pub const WGS84_E2: f64 = 6.69437999014e-3;

/// WGS-84 second eccentricity squared
pub const WGS84_EP2: f64 = 6.73949674228e-3;

/// Number of points in a resampled gain table.
/// 1° resolution over a full turn, 0.5° over the off-boresight half turn.
pub const LUT_POINTS: usize = 361;

/// Distance from the polar axis (km) below which a point is treated as lying on it.
pub const POLAR_AXIS_EPSILON_KM: f64 = 1e-12;

/// Tolerance (rad) when deciding whether wrapping samples already cover a full turn.
pub const PERIOD_EPSILON_RAD: f64 = 1e-9;

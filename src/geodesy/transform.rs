//! Geodetic ↔ ECEF conversion on the WGS-84 ellipsoid
//!
//! Public signatures take degrees and kilometers. Internal math is in radians.

use super::types::{EcefVector, GeodeticCoordinate};
use crate::constants::{POLAR_AXIS_EPSILON_KM, WGS84_A_KM, WGS84_B_KM, WGS84_E2, WGS84_EP2};

/// Convert geodetic latitude/longitude (degrees) and height (km) to ECEF (km)
///
/// # Example
/// ```
/// use rfgain::geodesy::geodetic_to_ecef;
///
/// let p = geodetic_to_ecef(0.0, 0.0, 0.0);
/// assert!((p.x - 6378.137).abs() < 1e-9);
/// ```
pub fn geodetic_to_ecef(lat_deg: f64, lon_deg: f64, height_km: f64) -> EcefVector {
    let (sin_lat, cos_lat) = lat_deg.to_radians().sin_cos();
    let (sin_lon, cos_lon) = lon_deg.to_radians().sin_cos();

    // Prime vertical radius of curvature is a / chi
    let chi = (1.0 - WGS84_E2 * sin_lat * sin_lat).sqrt();
    let n = WGS84_A_KM / chi;

    EcefVector::new(
        (n + height_km) * cos_lat * cos_lon,
        (n + height_km) * cos_lat * sin_lon,
        (n * (1.0 - WGS84_E2) + height_km) * sin_lat,
    )
}

/// Convert an ECEF position (km) to geodetic coordinates
///
/// Closed-form Heikkinen solution; no iteration. Points on the polar axis
/// (where the longitude is undefined) are reported at latitude ±90° by the
/// sign of z, longitude 0°, and height |z| − b.
pub fn ecef_to_geodetic(v: &EcefVector) -> GeodeticCoordinate {
    let a = WGS84_A_KM;
    let b = WGS84_B_KM;
    let e2 = WGS84_E2;

    let (x, y, z) = (v.x, v.y, v.z);
    let r = x.hypot(y);

    if r < POLAR_AXIS_EPSILON_KM {
        let latitude_deg = if z < 0.0 { -90.0 } else { 90.0 };
        return GeodeticCoordinate::new(latitude_deg, 0.0, z.abs() - b);
    }

    let r2 = r * r;
    let z2 = z * z;
    let big_e2 = a * a - b * b;
    let f = 54.0 * b * b * z2;
    let g = r2 + (1.0 - e2) * z2 - e2 * big_e2;
    let c = e2 * e2 * f * r2 / (g * g * g);
    let s = (1.0 + c + (c * c + 2.0 * c).sqrt()).cbrt();
    let k = s + 1.0 / s + 1.0;
    let p = f / (3.0 * k * k * g * g);
    let q = (1.0 + 2.0 * e2 * e2 * p).sqrt();
    let r0 = -(p * e2 * r) / (1.0 + q)
        + (0.5 * a * a * (1.0 + 1.0 / q) - p * (1.0 - e2) * z2 / (q * (1.0 + q)) - 0.5 * p * r2)
            .sqrt();
    let re = r - e2 * r0;
    let u = (re * re + z2).sqrt();
    let v_ = (re * re + (1.0 - e2) * z2).sqrt();
    let z0 = b * b * z / (a * v_);

    let height_km = u * (1.0 - b * b / (a * v_));
    let latitude = ((z + WGS84_EP2 * z0) / r).atan();
    let longitude = y.atan2(x);

    GeodeticCoordinate::new(latitude.to_degrees(), longitude.to_degrees(), height_km)
}

/// Outward unit normal to the ellipsoid at a geodetic point
pub fn local_vertical(point: &GeodeticCoordinate) -> EcefVector {
    let (sin_lat, cos_lat) = point.latitude_deg.to_radians().sin_cos();
    let (sin_lon, cos_lon) = point.longitude_deg.to_radians().sin_cos();
    EcefVector::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat)
}

/// Elevation (radians, positive up) of a line-of-sight vector relative to
/// the horizontal plane whose normal is `up`
pub fn elevation_angle(line_of_sight: &EcefVector, up: &EcefVector) -> f64 {
    let n = line_of_sight.norm() * up.norm();
    if n == 0.0 {
        return 0.0;
    }
    (line_of_sight.dot(up) / n).clamp(-1.0, 1.0).asin()
}

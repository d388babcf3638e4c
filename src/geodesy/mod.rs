mod transform;
mod types;

pub use transform::{ecef_to_geodetic, elevation_angle, geodetic_to_ecef, local_vertical};
pub use types::{EcefVector, GeodeticCoordinate};

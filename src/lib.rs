pub mod antenna;
pub mod config;
pub mod constants;
pub mod error;
pub mod geodesy;
pub mod output;

pub use antenna::{AntennaPattern, BoresightLoader, GainTable, PatternKind, build_from_boresight_file};
pub use config::AntennaCatalog;
pub use error::{GainError, Result};
pub use geodesy::{EcefVector, GeodeticCoordinate, ecef_to_geodetic, geodetic_to_ecef, local_vertical};

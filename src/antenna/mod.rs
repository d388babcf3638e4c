pub mod boresight_file;
pub mod envelope;
pub mod gain_table;
pub mod pattern;
mod spline;

pub use boresight_file::{BoresightLoader, build_from_boresight_file};
pub use envelope::{
    EnvelopeModel, etsi_class4, fcc_pattern, itu_f1245, itu_f1245_psi_m, itu_f1336_omni_average,
};
pub use gain_table::{AngleDomain, EdgePolicy, GainTable};
pub use pattern::{AntennaPattern, CombinedPattern, PatternKind, wrap_to_pi};

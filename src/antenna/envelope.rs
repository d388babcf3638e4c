//! Standardized antenna envelope patterns
//!
//! Closed-form reference patterns from ITU-R F.1245, ITU-R F.1336-4, the FCC
//! Part 101 category A mask and the ETSI Class 4 radiation pattern envelope.
//! All functions take an off-axis (or elevation) angle in degrees and a peak
//! gain in dBi and return a gain in dBi. The angle is first reduced into
//! [0°, 180°]; patterns are symmetric about boresight.
//!
//! Breakpoints and coefficients are part of the regulatory contract and must
//! not be rounded or refactored into "equivalent" forms.

use std::fmt;

/// Selects one of the standardized envelope patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum EnvelopeModel {
    /// ITU-R F.1245 point-to-point reference pattern
    ItuF1245,
    /// FCC Part 101 category A step mask
    Fcc,
    /// ETSI Class 4 radiation pattern envelope
    EtsiClass4,
    /// ITU-R F.1336-4 average omnidirectional elevation pattern
    ItuF1336Omni,
}

impl EnvelopeModel {
    /// Envelope gain (dBi) at `angle_deg`
    ///
    /// `frequency_hz` is only meaningful for F.1336 and is ignored by the
    /// sub-case implemented here.
    pub fn gain_db(self, angle_deg: f64, max_gain_dbi: f64, frequency_hz: f64) -> f64 {
        match self {
            Self::ItuF1245 => itu_f1245(angle_deg, max_gain_dbi),
            Self::Fcc => fcc_pattern(angle_deg, max_gain_dbi),
            Self::EtsiClass4 => etsi_class4(angle_deg, max_gain_dbi),
            Self::ItuF1336Omni => itu_f1336_omni_average(angle_deg, max_gain_dbi, frequency_hz),
        }
    }

    /// True for patterns of elevation angle rather than off-boresight angle
    pub fn is_elevation_pattern(self) -> bool {
        matches!(self, Self::ItuF1336Omni)
    }
}

impl fmt::Display for EnvelopeModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ItuF1245 => "ITU-R F.1245",
            Self::Fcc => "FCC",
            Self::EtsiClass4 => "ETSI Class 4",
            Self::ItuF1336Omni => "ITU-R F.1336 omni",
        };
        f.write_str(name)
    }
}

/// Reduce an angle in degrees into [0, 180], mirroring about 180°
pub fn normalize_off_axis_deg(angle_deg: f64) -> f64 {
    let a = angle_deg.rem_euclid(360.0);
    if a > 180.0 { 360.0 - a } else { a }
}

/// D/λ estimated from peak gain
fn d_over_lambda(max_gain_dbi: f64) -> f64 {
    10f64.powf((max_gain_dbi - 7.7) / 20.0)
}

/// End of the near-boresight parabolic region (ψM) of F.1245, in degrees
pub fn itu_f1245_psi_m(max_gain_dbi: f64) -> f64 {
    let dlambda = d_over_lambda(max_gain_dbi);
    let g1 = 2.0 + 15.0 * dlambda.log10();
    (20.0 / dlambda) * (max_gain_dbi - g1).sqrt()
}

/// ITU-R F.1245 reference radiation pattern
pub fn itu_f1245(angle_deg: f64, max_gain_dbi: f64) -> f64 {
    let angle = normalize_off_axis_deg(angle_deg);

    let dlambda = d_over_lambda(max_gain_dbi);
    let g1 = 2.0 + 15.0 * dlambda.log10();
    let psi_m = (20.0 / dlambda) * (max_gain_dbi - g1).sqrt();
    let psi_r = 12.02 * dlambda.powf(-0.6);
    let plateau_end = psi_m.max(psi_r);

    if dlambda > 100.0 {
        if angle < psi_m {
            max_gain_dbi - 2.5e-3 * (dlambda * angle).powi(2)
        } else if angle < plateau_end {
            g1
        } else if angle <= 48.0 {
            29.0 - 25.0 * angle.log10()
        } else {
            -13.0
        }
    } else if angle < psi_m {
        max_gain_dbi - 2.5e-3 * (dlambda * angle).powi(2)
    } else if angle < plateau_end {
        g1
    } else if angle <= 48.0 {
        39.0 - 5.0 * dlambda.log10() - 25.0 * angle.log10()
    } else {
        -3.0 - 5.0 * dlambda.log10()
    }
}

/// FCC category A mask: F.1245 inside 5°, fixed discrimination steps beyond
pub fn fcc_pattern(angle_deg: f64, max_gain_dbi: f64) -> f64 {
    let angle = normalize_off_axis_deg(angle_deg);

    if angle < 5.0 {
        itu_f1245(angle, max_gain_dbi)
    } else if angle < 10.0 {
        max_gain_dbi - 25.0
    } else if angle < 15.0 {
        max_gain_dbi - 29.0
    } else if angle < 20.0 {
        max_gain_dbi - 33.0
    } else if angle < 30.0 {
        max_gain_dbi - 36.0
    } else if angle < 100.0 {
        max_gain_dbi - 42.0
    } else {
        max_gain_dbi - 55.0
    }
}

/// ETSI Class 4 envelope breakpoints: (angle°, gain relative to peak in dB)
const ETSI_CLASS4_POINTS: [(f64, f64); 7] = [
    (5.0, -16.0),
    (10.0, -20.0),
    (20.0, -23.0),
    (50.0, -26.0),
    (70.0, -27.0),
    (85.0, -28.0),
    (105.0, -30.0),
];

/// Floor relative to peak beyond the last breakpoint
const ETSI_CLASS4_FLOOR_DB: f64 = -30.0;

/// ETSI Class 4 envelope: F.1245 inside 5°, piecewise linear in dB beyond
pub fn etsi_class4(angle_deg: f64, max_gain_dbi: f64) -> f64 {
    let angle = normalize_off_axis_deg(angle_deg);

    if angle < 5.0 {
        return itu_f1245(angle, max_gain_dbi);
    }

    let relative = ETSI_CLASS4_POINTS
        .windows(2)
        .find(|w| angle < w[1].0)
        .map(|w| {
            let (a0, g0) = w[0];
            let (a1, g1) = w[1];
            g0 + (angle - a0) * (g1 - g0) / (a1 - a0)
        })
        .unwrap_or(ETSI_CLASS4_FLOOR_DB);

    max_gain_dbi + relative
}

/// ITU-R F.1336-4 §2.2 average side-lobe pattern for omnidirectional antennas
///
/// Gain as a function of elevation angle. The near-in side-lobe parameter k
/// is fixed at 0.
pub fn itu_f1336_omni_average(el_angle_deg: f64, max_gain_dbi: f64, _frequency_hz: f64) -> f64 {
    let theta = normalize_off_axis_deg(el_angle_deg);

    let k = 0.0f64;
    let theta3 = 107.6 * (-max_gain_dbi * std::f64::consts::LN_10 / 10.0).exp();
    let theta5 = theta3 * (1.25 - (k + 1.0).log10() / 1.2).sqrt();

    if theta < theta3 {
        max_gain_dbi - 12.0 * (theta / theta3).powi(2)
    } else if theta < theta5 {
        max_gain_dbi - 15.0 + 10.0 * (k + 1.0).log10()
    } else {
        max_gain_dbi - 15.0 + 10.0 * ((theta / theta3).powf(-1.5) + k).log10()
    }
}

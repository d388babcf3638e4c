use approx::assert_relative_eq;

use rfgain::antenna::{
    AntennaPattern, EnvelopeModel, etsi_class4, fcc_pattern, itu_f1245, itu_f1245_psi_m,
    itu_f1336_omni_average,
};

const PEAK: f64 = 30.0;

fn dlambda(peak: f64) -> f64 {
    10f64.powf((peak - 7.7) / 20.0)
}

#[test]
fn test_f1245_thirty_dbi_regions() {
    let d = dlambda(PEAK);
    assert!(d < 100.0);

    assert_eq!(itu_f1245(0.0, PEAK), PEAK);

    let psi_m = itu_f1245_psi_m(PEAK);
    assert!(psi_m > 5.0 && psi_m < 5.3, "psi_m = {}", psi_m);

    let inside = itu_f1245(2.0, PEAK);
    assert_relative_eq!(inside, PEAK - 2.5e-3 * (d * 2.0).powi(2), epsilon = 1e-12);

    // 48° belongs to the decaying region
    let at_48 = itu_f1245(48.0, PEAK);
    assert_relative_eq!(
        at_48,
        39.0 - 5.0 * d.log10() - 25.0 * 48f64.log10(),
        epsilon = 1e-12
    );

    let far = itu_f1245(120.0, PEAK);
    assert_relative_eq!(far, -3.0 - 5.0 * d.log10(), epsilon = 1e-12);
}

#[test]
fn test_f1245_is_symmetric() {
    for angle in [1.0, 7.5, 33.0, 48.0, 90.0, 179.0] {
        assert_eq!(itu_f1245(angle, PEAK), itu_f1245(-angle, PEAK));
        assert_eq!(itu_f1245(angle, PEAK), itu_f1245(360.0 - angle, PEAK));
    }
}

#[test]
fn test_masks_agree_with_f1245_near_boresight() {
    for tenth in 0..50 {
        let angle = tenth as f64 * 0.1;
        let reference = itu_f1245(angle, PEAK);
        assert_eq!(fcc_pattern(angle, PEAK), reference);
        assert_eq!(etsi_class4(angle, PEAK), reference);
    }
}

#[test]
fn test_fcc_steps() {
    assert_eq!(fcc_pattern(7.0, PEAK), PEAK - 25.0);
    assert_eq!(fcc_pattern(25.0, PEAK), PEAK - 36.0);
    assert_eq!(fcc_pattern(150.0, PEAK), PEAK - 55.0);
}

#[test]
fn test_etsi_monotone_beyond_five_degrees() {
    let mut previous = etsi_class4(5.0, PEAK);
    for angle in 6..=180 {
        let g = etsi_class4(angle as f64, PEAK);
        assert!(g <= previous + 1e-12, "rise at {}°", angle);
        previous = g;
    }
    assert_eq!(etsi_class4(150.0, PEAK), PEAK - 30.0);
}

#[test]
fn test_f1336_peak_and_falloff() {
    let g = 10.0;
    assert_eq!(itu_f1336_omni_average(0.0, g, 6e9), g);
    let mut previous = g;
    for el in 1..=90 {
        let v = itu_f1336_omni_average(el as f64, g, 6e9);
        assert!(v <= previous + 1e-12);
        previous = v;
    }
    assert_eq!(
        itu_f1336_omni_average(-20.0, g, 6e9),
        itu_f1336_omni_average(20.0, g, 6e9)
    );
}

#[test]
fn test_envelope_patterns_sample_the_mask() {
    let dish = AntennaPattern::from_envelope("dish", EnvelopeModel::ItuF1245, PEAK, 0.0);
    assert_relative_eq!(dish.gain_off_boresight(0.0).unwrap(), PEAK, epsilon = 1e-9);
    let at_90 = dish.gain_off_boresight(90f64.to_radians()).unwrap();
    assert_relative_eq!(at_90, itu_f1245(90.0, PEAK), epsilon = 1e-9);

    let omni = AntennaPattern::from_envelope("omni", EnvelopeModel::ItuF1336Omni, 8.0, 2.4e9);
    assert_relative_eq!(omni.gain_at(1.2, 0.0).unwrap(), 8.0, epsilon = 1e-9);
}

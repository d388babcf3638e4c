//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::f64::consts::{PI, TAU};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

static FILE_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Write `contents` to a fresh file under the system temp directory
pub fn write_temp_file(stem: &str, contents: &str) -> PathBuf {
    let n = FILE_COUNTER.fetch_add(1, Ordering::SeqCst);
    let dir = std::env::temp_dir().join(format!("rfgain-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join(format!("{}-{}", n, stem));
    std::fs::write(&path, contents).expect("write temp file");
    path
}

/// Sector-like horizontal cut: 0 dB on boresight, -20 dB behind, 10° samples
pub fn sector_horizontal() -> Vec<(f64, f64)> {
    (0..36)
        .map(|k| {
            let a = -PI + k as f64 * TAU / 36.0;
            (a, 10.0 * (a.cos() - 1.0))
        })
        .collect()
}

/// Vertical cut peaking at the horizon, 5° samples over the full circle
pub fn fan_vertical() -> Vec<(f64, f64)> {
    (0..72)
        .map(|k| {
            let a = -PI + k as f64 * TAU / 72.0;
            (a, 12.0 * a.cos() - 4.0)
        })
        .collect()
}

/// Boresight file text for two dish-like antennas measured every 10°
pub fn two_dish_file() -> String {
    let mut text = String::from("# two dishes\n\"Off-axis angle (deg)\",\"DishA\",\"DishB\"\n");
    for deg in (0..=180).step_by(10) {
        let a = deg as f64;
        let gain_a = 38.0 - 0.3 * a;
        let gain_b = 32.0 - 0.2 * a;
        text.push_str(&format!("{},{:.2},{:.2}\n", deg, gain_a, gain_b));
    }
    text
}

mod test_patterns;

use approx::assert_abs_diff_eq;

use rfgain::antenna::{BoresightLoader, PatternKind};
use rfgain::{AntennaCatalog, GainError};
use test_patterns::{two_dish_file, write_temp_file};

#[test]
fn test_catalog_resolves_relative_boresight_file() {
    let data = write_temp_file("catalog-dishes.csv", &two_dish_file());
    let file_name = data.file_name().unwrap().to_str().unwrap();

    let text = format!(
        r#"
        [[antenna]]
        model = "boresight_file"
        path = "{}"

        [[antenna]]
        model = "combined"
        id = "panel"
        tilt_deg = -2.0
        horizontal = [[-180.0, -25.0], [0.0, 0.0], [90.0, -10.0]]
        vertical = [[-90.0, -20.0], [0.0, 0.0], [90.0, -20.0]]

        [[antenna]]
        model = "etsi_class4"
        id = "link"
        max_gain_dbi = 34.0
        "#,
        file_name
    );
    let catalog_path = write_temp_file("catalog.toml", &text);

    // The data file sits next to the catalog
    assert_eq!(data.parent(), catalog_path.parent());

    let catalog = AntennaCatalog::load(&catalog_path).unwrap();
    let patterns = catalog.build_patterns(&BoresightLoader::new()).unwrap();

    let ids: Vec<&str> = patterns.iter().map(|p| p.id()).collect();
    assert_eq!(ids, vec!["DishA", "DishB", "panel", "link"]);
    assert_eq!(patterns[2].kind(), PatternKind::Combined);
    assert_abs_diff_eq!(
        patterns[3].gain_off_boresight(0.0).unwrap(),
        34.0,
        epsilon = 1e-9
    );
}

#[test]
fn test_missing_catalog_file() {
    let err = AntennaCatalog::load("/nonexistent/antennas.toml").unwrap_err();
    assert!(matches!(err, GainError::Io { .. }));
}

#[test]
fn test_missing_data_file_fails_whole_catalog() {
    let text = "[[antenna]]\nmodel = \"omni\"\nid = \"w\"\n\n[[antenna]]\nmodel = \"boresight_file\"\npath = \"no-such-file.csv\"\n";
    let catalog_path = write_temp_file("broken.toml", text);
    let catalog = AntennaCatalog::load(&catalog_path).unwrap();
    assert!(catalog.build_patterns(&BoresightLoader::new()).is_err());
}

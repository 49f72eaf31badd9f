//! End-to-end behaviour of the optical and SAR index calculators on
//! synthetic Sentinel-2 style scenes (integer reflectance, 0-10000).

use approx::assert_relative_eq;
use bandix_algorithms::imagery::{
    optical_indices, optical_indices_in_place, sar_indices, sar_indices_in_place, IndexFormula,
    OpticalIndex, OpticalParams, SarParams,
};
use bandix_core::{Dataset, Error};
use ndarray::Array2;

const ROWS: usize = 6;
const COLS: usize = 5;

/// Reflectance varying per pixel so that every cell is distinct.
fn scaled_scene() -> Dataset {
    let band = |base: f64, step: f64| {
        Array2::from_shape_fn((ROWS, COLS), |(r, c)| base + step * (r * COLS + c) as f64)
    };
    Dataset::new()
        .with_band("blue", band(400.0, 3.0))
        .with_band("green", band(700.0, 5.0))
        .with_band("red", band(550.0, 4.0))
        .with_band("nir", band(3500.0, 20.0))
        .with_band("swir1", band(1800.0, 9.0))
        .with_band("swir2", band(900.0, 6.0))
}

fn unit_scene() -> Dataset {
    &scaled_scene() / 10000.0
}

#[test]
fn ratio_indices_are_invariant_to_normalisation() {
    let raw = optical_indices(&scaled_scene(), &OpticalParams::new(["NDVI", "NBR", "CMR"])).unwrap();
    let unit = optical_indices(
        &unit_scene(),
        &OpticalParams {
            normalise: false,
            ..OpticalParams::new(["NDVI", "NBR", "CMR"])
        },
    )
    .unwrap();

    for name in ["NDVI", "NBR", "CMR"] {
        let a = raw.dataset.get(name).unwrap();
        let b = unit.dataset.get(name).unwrap();
        for (x, y) in a.iter().zip(b.iter()) {
            assert_relative_eq!(*x, *y, epsilon = 1e-12);
        }
    }
    // ratios do not warn
    assert!(unit.report.warnings.is_empty());
}

#[test]
fn coefficient_indices_depend_on_normalisation() {
    let scene = scaled_scene();
    let normalised = optical_indices(&scene, &OpticalParams::new("EVI")).unwrap();
    let raw = optical_indices(
        &scene,
        &OpticalParams {
            normalise: false,
            ..OpticalParams::new("EVI")
        },
    )
    .unwrap();

    let a = normalised.dataset.get("EVI").unwrap()[[2, 3]];
    let b = raw.dataset.get("EVI").unwrap()[[2, 3]];
    assert!((a - b).abs() > 1e-3, "EVI should change with scaling: {} vs {}", a, b);

    assert!(normalised.report.warnings.is_empty());
    assert_eq!(raw.report.warnings.len(), 1);
    assert_eq!(raw.report.warnings[0].index, "EVI");
}

#[test]
fn normalised_values_match_unit_reflectance_formula() {
    let out = optical_indices(&scaled_scene(), &OpticalParams::new(OpticalIndex::EVI.name())).unwrap();
    let unit = unit_scene();

    let (b, r, n) = (
        unit.get("blue").unwrap()[[4, 1]],
        unit.get("red").unwrap()[[4, 1]],
        unit.get("nir").unwrap()[[4, 1]],
    );
    let expected = 2.5 * (n - r) / (n + 6.0 * r - 7.5 * b + 1.0);
    assert_relative_eq!(out.dataset.get("EVI").unwrap()[[4, 1]], expected, epsilon = 1e-12);
}

#[test]
fn single_identifier_equals_one_element_list() {
    let scene = scaled_scene();
    let single = optical_indices(&scene, &OpticalParams::new("NDVI")).unwrap();
    let list = optical_indices(&scene, &OpticalParams::new(vec!["NDVI"])).unwrap();
    assert_eq!(single.dataset, list.dataset);
    assert_eq!(single.report, list.report);
}

#[test]
fn every_optical_index_computes_on_a_full_scene() {
    let names: Vec<&str> = OpticalIndex::ALL.iter().map(|i| i.name()).collect();
    let out = optical_indices(&scaled_scene(), &OpticalParams::new(names.clone())).unwrap();

    assert_eq!(out.report.written, names);
    for name in names {
        let band = out.dataset.get(name).unwrap();
        assert_eq!(band.shape(), &[ROWS, COLS]);
        assert!(band.iter().all(|v| v.is_finite()), "{} produced non-finite values", name);
    }
}

#[test]
fn drop_inputs_keeps_only_new_bands() {
    let scene = scaled_scene();
    let before = scene.band_names();
    let out = optical_indices(
        &scene,
        &OpticalParams {
            drop_inputs: true,
            ..OpticalParams::new(["NDWI", "BSI"])
        },
    )
    .unwrap();

    assert_eq!(out.dataset.band_names(), vec!["BSI", "NDWI"]);
    assert_eq!(out.report.dropped, before);
}

#[test]
fn copy_leaves_original_untouched() {
    let scene = scaled_scene();
    let snapshot = scene.clone();

    let out = optical_indices(
        &scene,
        &OpticalParams {
            drop_inputs: true,
            ..OpticalParams::new("NDVI")
        },
    )
    .unwrap();

    assert_eq!(scene, snapshot);
    assert!(!scene.contains("NDVI"));
    assert!(out.dataset.contains("NDVI"));
}

#[test]
fn in_place_mutates_callers_dataset() {
    let mut scene = scaled_scene();
    let report = optical_indices_in_place(&mut scene, &OpticalParams::new(["NDMI", "TCG"])).unwrap();

    assert_eq!(report.written, vec!["NDMI", "TCG"]);
    assert!(scene.contains("NDMI"));
    assert!(scene.contains("TCG"));
    assert!(scene.contains("nir"));
}

#[test]
fn unknown_index_writes_nothing() {
    let mut scene = scaled_scene();
    let before = scene.clone();

    let result = optical_indices_in_place(&mut scene, &OpticalParams::new("FOO"));
    match result {
        Err(err @ Error::UnknownIndex { .. }) => assert!(err.is_validation()),
        other => panic!("expected UnknownIndex, got {:?}", other),
    }
    assert_eq!(scene, before);
}

#[test]
fn missing_band_fails_without_writing() {
    let mut scene = scaled_scene();
    scene.remove("red");
    let before = scene.clone();

    let result = optical_indices_in_place(&mut scene, &OpticalParams::new("NDVI"));
    match result {
        Err(Error::MissingBands { index, bands }) => {
            assert_eq!(index, "NDVI");
            assert_eq!(bands, vec!["red"]);
        }
        other => panic!("expected MissingBands, got {:?}", other),
    }
    assert_eq!(scene, before);
}

#[test]
fn sar_ratios_in_place_with_drop() {
    let mut scene = Dataset::new()
        .with_band("VV", Array2::from_shape_fn((3, 3), |(r, c)| 0.05 + 0.01 * (r + c) as f64))
        .with_band("VH", Array2::from_elem((3, 3), 0.01));

    let report = sar_indices_in_place(
        &mut scene,
        &SarParams {
            drop_inputs: true,
            ..SarParams::new(["VHVV", "VVVH"])
        },
    )
    .unwrap();

    assert_eq!(report.dropped, vec!["VH", "VV"]);
    assert_eq!(scene.band_names(), vec!["VHVV", "VVVH"]);
    assert_relative_eq!(scene.get("VVVH").unwrap()[[2, 2]], 9.0, epsilon = 1e-9);
    assert_relative_eq!(scene.get("VHVV").unwrap()[[0, 0]], 0.2, epsilon = 1e-12);
}

#[test]
fn sar_missing_polarisation_fails_without_writing() {
    let mut scene = Dataset::new().with_band("VV", Array2::from_elem((3, 3), 0.08));
    let before = scene.clone();

    let result = sar_indices_in_place(&mut scene, &SarParams::new("VHVV"));
    match result {
        Err(Error::MissingBands { index, bands }) => {
            assert_eq!(index, "VHVV");
            assert_eq!(bands, vec!["VH"]);
        }
        other => panic!("expected MissingBands, got {:?}", other),
    }
    assert_eq!(scene, before);
}

#[test]
fn sar_copy_leaves_original_untouched() {
    let scene = Dataset::new()
        .with_band("VV", Array2::from_elem((2, 4), 0.12))
        .with_band("VH", Array2::from_elem((2, 4), 0.03));
    let snapshot = scene.clone();

    let out = sar_indices(
        &scene,
        &SarParams {
            drop_inputs: true,
            ..SarParams::new("VVVH")
        },
    )
    .unwrap();

    assert_eq!(scene, snapshot);
    assert!(!scene.contains("VVVH"));
    assert_eq!(out.dataset.band_names(), vec!["VVVH"]);
    assert_relative_eq!(out.dataset.get("VVVH").unwrap()[[1, 3]], 4.0, epsilon = 1e-12);
}

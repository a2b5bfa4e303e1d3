// tests/calculator_tests.rs
use ndarray::{array, Array2};
use vegi::*;

/// Helper returning a full band set of 1x2 reflectance rasters
fn test_bands() -> [(Band, Array2<f32>); 6] {
    [
        (Band::Blue, array![[0.1f32, 0.05]]),
        (Band::Green, array![[0.3f32, 0.2]]),
        (Band::Red, array![[0.2f32, 0.1]]),
        (Band::RedEdge, array![[0.4f32, 0.3]]),
        (Band::Nir, array![[0.6f32, 0.5]]),
        (Band::Thermal, array![[3.0f32, 2.0]]),
    ]
}

fn band_set(bands: &[(Band, Array2<f32>)]) -> BandSet<'_, ndarray::Ix2> {
    bands
        .iter()
        .fold(BandSet::new(), |set, (band, data)| set.with(*band, data))
}

#[test]
fn test_every_index_calculates_from_full_band_set() {
    let bands = test_bands();
    let set = band_set(&bands);

    for index in VegetationIndex::ALL {
        let result = index.calculate(&set).unwrap();
        assert_eq!(result.shape(), &[1, 2], "{}", index);
    }
}

#[test]
fn test_dispatch_matches_direct_call() {
    let bands = test_bands();
    let set = band_set(&bands);
    let (blue, green, red, nir) = (&bands[0].1, &bands[1].1, &bands[2].1, &bands[4].1);

    assert_eq!(
        VegetationIndex::Ndvi.calculate(&set).unwrap(),
        ndvi(red, nir).unwrap()
    );
    assert_eq!(
        VegetationIndex::Savi { l: 0.25 }.calculate(&set).unwrap(),
        savi(red, nir, 0.25).unwrap()
    );
    assert_eq!(
        VegetationIndex::Gari { gamma: 1.0 }.calculate(&set).unwrap(),
        gari(blue, green, red, nir, 1.0).unwrap()
    );
    assert_eq!(
        VegetationIndex::Evi(EviParams::default())
            .calculate(&set)
            .unwrap(),
        evi(blue, red, nir, EviParams::default()).unwrap()
    );
}

#[test]
fn test_vi_by_name() {
    let bands = test_bands();
    let set = band_set(&bands);

    assert_eq!(
        vi("ndvi", &set).unwrap(),
        ndvi(&bands[2].1, &bands[4].1).unwrap()
    );
    assert_eq!(vi("VNDVI", &set).unwrap(), vi("grvi", &set).unwrap());
    assert_eq!(vi("vdvi", &set).unwrap(), vi("gli", &set).unwrap());

    let err = vi("ndxx", &set).unwrap_err();
    assert!(err.to_string().contains("Unknown vegetation index"));
}

#[test]
fn test_missing_band_is_an_error() {
    let red = array![[0.2f32]];
    let set = BandSet::new().with(Band::Red, &red);

    let err = VegetationIndex::Ndvi.calculate(&set).unwrap_err();
    assert!(err.to_string().contains("Nir"), "{}", err);

    assert!(set.get(Band::Blue).is_err());
    assert!(set.get(Band::Red).is_ok());
}

#[test]
fn test_mismatched_band_set_is_an_error() {
    let red = Array2::<f32>::zeros((2, 2));
    let nir = Array2::<f32>::zeros((3, 2));
    let set = BandSet::new().with(Band::Red, &red).with(Band::Nir, &nir);

    assert!(VegetationIndex::Ndvi.calculate(&set).is_err());
}

#[test]
fn test_band_set_accessors() {
    let blue = array![[0.1f32, 0.2]];
    let nir = array![[0.5f32, 0.6]];
    let mut set = BandSet::new();
    assert!(set.is_empty());
    assert_eq!(set.shape(), None);

    set.insert(Band::Nir, &nir);
    set.insert(Band::Blue, blue.view());

    assert_eq!(set.len(), 2);
    assert!(set.contains(Band::Blue));
    assert!(!set.contains(Band::Red));
    assert_eq!(set.bands().collect::<Vec<_>>(), vec![Band::Blue, Band::Nir]);
    assert_eq!(set.shape(), Some(&[1usize, 2][..]));
}

#[test]
fn test_required_bands() {
    assert_eq!(
        VegetationIndex::Ndvi.required_bands(),
        &[Band::Red, Band::Nir]
    );
    assert_eq!(
        VegetationIndex::Ndre.required_bands(),
        &[Band::RedEdge, Band::Nir]
    );
    assert_eq!(
        VegetationIndex::Gari { gamma: 1.7 }.required_bands().len(),
        4
    );
    assert_eq!(
        VegetationIndex::Tvx.required_bands(),
        &[Band::Red, Band::Nir, Band::Thermal]
    );
}

#[test]
fn test_parse_index_names() {
    for index in VegetationIndex::ALL {
        let parsed: VegetationIndex = index.name().parse().unwrap();
        assert_eq!(parsed, index);
    }

    assert_eq!(
        "vndvi".parse::<VegetationIndex>().unwrap(),
        VegetationIndex::Grvi
    );
    assert_eq!(
        " Savi ".parse::<VegetationIndex>().unwrap(),
        VegetationIndex::Savi { l: 0.5 }
    );
    assert!("bsi".parse::<VegetationIndex>().is_err());
}

#[test]
fn test_index_deserializes_with_defaults() {
    let savi: VegetationIndex = serde_json::from_str(r#"{"type": "savi"}"#).unwrap();
    assert_eq!(savi, VegetationIndex::Savi { l: 0.5 });

    let savi: VegetationIndex = serde_json::from_str(r#"{"type": "savi", "l": 0.25}"#).unwrap();
    assert_eq!(savi, VegetationIndex::Savi { l: 0.25 });

    let evi: VegetationIndex = serde_json::from_str(r#"{"type": "evi", "g": 2.0}"#).unwrap();
    assert_eq!(
        evi,
        VegetationIndex::Evi(EviParams {
            g: 2.0,
            ..EviParams::default()
        })
    );

    let tsavi: VegetationIndex =
        serde_json::from_str(r#"{"type": "tsavi", "intercept": 0.04}"#).unwrap();
    assert_eq!(
        tsavi,
        VegetationIndex::Tsavi(TsaviParams {
            slope: 0.5,
            intercept: 0.04
        })
    );

    let grvi: VegetationIndex = serde_json::from_str(r#"{"type": "vndvi"}"#).unwrap();
    assert_eq!(grvi, VegetationIndex::Grvi);

    assert!(serde_json::from_str::<VegetationIndex>(r#"{"type": "bsi"}"#).is_err());
}

#[test]
fn test_recipe_from_json() {
    let recipe = Recipe::from_json(
        r#"{
            "name": "canopy",
            "index": { "type": "gari", "gamma": 1.5 },
            "rescale": { "low": -1.0, "high": 1.0, "bounds": [0.0, 1.0] },
            "fill": -1.0
        }"#,
    )
    .unwrap();

    assert_eq!(recipe.name(), "canopy");
    assert_eq!(recipe.index, VegetationIndex::Gari { gamma: 1.5 });
    assert_eq!(
        recipe.rescale,
        Some(RescaleOptions {
            low: -1.0,
            high: 1.0,
            bounds: Some((0.0, 1.0)),
        })
    );
    assert_eq!(recipe.fill, Some(-1.0));
    assert_eq!(recipe.required_bands().len(), 4);

    let minimal = Recipe::from_json(r#"{"index": {"type": "ndvi"}}"#).unwrap();
    assert_eq!(minimal, Recipe::new(VegetationIndex::Ndvi));
    assert_eq!(minimal.name(), "NDVI");

    assert!(Recipe::from_json(r#"{"name": "no index"}"#).is_err());
}

#[test]
fn test_recipe_json_round_trip() {
    let recipe = Recipe::new(VegetationIndex::Evi2(Evi2Params::default()))
        .with_name("evi2")
        .with_fill(0.0);

    let json = recipe.to_json().unwrap();

    assert_eq!(Recipe::from_json(&json).unwrap(), recipe);
}

#[test]
fn test_recipe_rescales_and_fills() {
    let red = array![[0.2f32, 0.0]];
    let nir = array![[0.6f32, 0.0]];
    let set = BandSet::new().with(Band::Red, &red).with(Band::Nir, &nir);

    // NDVI 0.5 stretched from [-1, 1] to [0, 1] gives 0.75; 0/0 is zeroed
    // before the stretch, so it lands on the midpoint
    let stretched = Recipe::new(VegetationIndex::Ndvi)
        .with_rescale(RescaleOptions {
            low: -1.0,
            high: 1.0,
            bounds: None,
        })
        .calculate(&set)
        .unwrap();
    assert!((stretched[[0, 0]] - 0.75).abs() < 1e-6);
    assert!((stretched[[0, 1]] - 0.5).abs() < 1e-6);

    // Fill replaces the NaN left by the raw index
    let filled = Recipe::new(VegetationIndex::Ndvi)
        .with_fill(-9.0)
        .calculate(&set)
        .unwrap();
    assert!((filled[[0, 0]] - 0.5).abs() < 1e-6);
    assert_eq!(filled[[0, 1]], -9.0);

    // Raw index keeps NaN
    let raw = Recipe::new(VegetationIndex::Ndvi).calculate(&set).unwrap();
    assert!(raw[[0, 1]].is_nan());
}

#[test]
fn test_recipe_reports_index_failure() {
    let red = array![[0.2f32]];
    let set = BandSet::new().with(Band::Red, &red);

    let err = Recipe::new(VegetationIndex::Ndvi)
        .with_name("plot-7")
        .calculate(&set)
        .unwrap_err();
    assert!(err.to_string().contains("plot-7"), "{}", err);
}

#[test]
fn test_index_accepts_formula_parameter_names() {
    let savi: VegetationIndex = serde_json::from_str(r#"{"type": "savi", "L": 0.25}"#).unwrap();
    assert_eq!(savi, VegetationIndex::Savi { l: 0.25 });

    let gosavi: VegetationIndex = serde_json::from_str(r#"{"type": "gosavi", "L": 0.1}"#).unwrap();
    assert_eq!(gosavi, VegetationIndex::Gosavi { l: 0.1 });

    let tsavi: VegetationIndex =
        serde_json::from_str(r#"{"type": "tsavi", "m": 0.3, "b": 0.1}"#).unwrap();
    assert_eq!(
        tsavi,
        VegetationIndex::Tsavi(TsaviParams {
            slope: 0.3,
            intercept: 0.1
        })
    );

    let gari: VegetationIndex = serde_json::from_str(r#"{"type": "gari", "y": 1.0}"#).unwrap();
    assert_eq!(gari, VegetationIndex::Gari { gamma: 1.0 });

    let method: PansharpenMethod =
        serde_json::from_str(r#"{"method": "brovey", "W": 0.3}"#).unwrap();
    assert_eq!(method, PansharpenMethod::Brovey { weight: 0.3 });
}

#[test]
fn test_unknown_parameters_are_rejected() {
    for json in [
        r#"{"type": "savi", "soil": 0.25}"#,
        r#"{"type": "gari", "gama": 1.0}"#,
        r#"{"type": "tsavi", "slope": 0.3, "offset": 0.1}"#,
        r#"{"type": "evi", "gain": 2.0}"#,
        r#"{"type": "evi2", "c2": 7.5}"#,
    ] {
        assert!(
            serde_json::from_str::<VegetationIndex>(json).is_err(),
            "{}",
            json
        );
    }

    assert!(serde_json::from_str::<PansharpenMethod>(r#"{"method": "brovey", "wieght": 0.2}"#).is_err());

    assert!(Recipe::from_json(
        r#"{"index": {"type": "ndvi"}, "rescale": {"lo": -1.0, "hi": 1.0}}"#
    )
    .is_err());
    assert!(Recipe::from_json(r#"{"index": {"type": "ndvi"}, "fil": 0.0}"#).is_err());
}

#[test]
fn test_dispatch_ignores_bands_the_index_does_not_read() {
    let blue = Array2::<f32>::zeros((4, 4));
    let red = array![[0.1f32, 0.2]];
    let nir = array![[0.5f32, 0.4]];
    let set = BandSet::new()
        .with(Band::Blue, &blue)
        .with(Band::Red, &red)
        .with(Band::Nir, &nir);

    let result = VegetationIndex::Ndvi.calculate(&set).unwrap();

    assert_eq!(result, ndvi(&red, &nir).unwrap());
    assert!(VegetationIndex::Evi(EviParams::default())
        .calculate(&set)
        .is_err());
}

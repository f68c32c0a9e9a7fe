use proptest::prelude::*;
use treasure_gen::terrain::DEFAULT_BANDS;
use treasure_gen::{BandTable, ConfigError, Palette, Rgba, Terrain, TerrainBand};

#[test]
fn default_ladder_boundaries_use_strict_less_than() {
    let t = BandTable::default();
    assert_eq!(t.classify(0.0), Terrain::DeepWater);
    assert_eq!(t.classify(0.299_999), Terrain::DeepWater);
    assert_eq!(t.classify(0.3), Terrain::ShallowWater);
    assert_eq!(t.classify(0.4), Terrain::Sand);
    assert_eq!(t.classify(0.45), Terrain::LightGrass);
    assert_eq!(t.classify(0.5), Terrain::DarkGrass);
    assert_eq!(t.classify(0.65), Terrain::Trees);
    assert_eq!(t.classify(0.75), Terrain::Stone);
    assert_eq!(t.classify(0.999), Terrain::Stone);
}

#[test]
fn one_is_absorbed_by_last_band_and_beyond_falls_back() {
    let t = BandTable::default();
    assert_eq!(t.classify(1.0), Terrain::Stone);
    assert_eq!(t.classify(1.000_1), Terrain::Fallback);
    assert_eq!(t.classify(f32::NAN), Terrain::Fallback);
    assert_eq!(Palette::default().color(Terrain::Fallback), Rgba::WHITE);
}

#[test]
fn palette_matches_sketch_colors() {
    let p = Palette::default();
    assert_eq!(p.color(Terrain::DeepWater), Rgba::from_hex("#008dc4").unwrap());
    assert_eq!(p.color(Terrain::Stone), Rgba::from_hex("#736C6C").unwrap());
    assert_eq!(p.marker, Rgba::from_hex("#DF0000").unwrap());
    assert_eq!(p.title, Rgba::from_hex("#160800").unwrap());
}

#[test]
fn rejects_unsorted_or_open_tables() {
    let unsorted = vec![
        TerrainBand::new(0.5, Terrain::Sand),
        TerrainBand::new(0.4, Terrain::Trees),
        TerrainBand::new(1.0, Terrain::Stone),
    ];
    assert!(matches!(
        BandTable::new(unsorted),
        Err(ConfigError::InvalidBands(_))
    ));
    let open = vec![TerrainBand::new(0.9, Terrain::Stone)];
    assert!(BandTable::new(open).is_err());
    assert!(BandTable::new(Vec::new()).is_err());
    let dup = vec![
        TerrainBand::new(0.5, Terrain::Sand),
        TerrainBand::new(0.5, Terrain::Trees),
        TerrainBand::new(1.0, Terrain::Stone),
    ];
    assert!(BandTable::new(dup).is_err());
    let with_fallback = vec![TerrainBand::new(1.0, Terrain::Fallback)];
    assert!(BandTable::new(with_fallback).is_err());
}

#[test]
fn default_table_validates() {
    assert_eq!(BandTable::new(DEFAULT_BANDS.to_vec()).unwrap(), BandTable::default());
}

proptest! {
    #[test]
    fn low_heights_are_deep_water(h in 0.0f32..0.3) {
        prop_assert_eq!(BandTable::default().classify(h), Terrain::DeepWater);
    }

    // Exactly one band contains each height, and classify picks it.
    #[test]
    fn bands_partition_unit_interval(h in 0.0f32..1.0) {
        let t = BandTable::default();
        let mut lower = 0.0f32;
        let mut hits = Vec::new();
        for band in t.bands() {
            if h >= lower && h < band.upper {
                hits.push(band.terrain);
            }
            lower = band.upper;
        }
        prop_assert_eq!(hits.len(), 1);
        prop_assert_eq!(t.classify(h), hits[0]);
        prop_assert_ne!(t.classify(h), Terrain::Fallback);
    }
}

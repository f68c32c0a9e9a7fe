//! Height bands and the terrain palette.

use crate::color::Rgba;
use crate::config::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Terrain {
    DeepWater = 0,
    ShallowWater = 1,
    Sand = 2,
    LightGrass = 3,
    DarkGrass = 4,
    Trees = 5,
    Stone = 6,
    /// Heights outside the band table (above 1.0 or NaN).
    Fallback = 7,
}

impl Terrain {
    pub const COUNT: usize = 8;

    pub const ALL: [Terrain; Terrain::COUNT] = [
        Terrain::DeepWater,
        Terrain::ShallowWater,
        Terrain::Sand,
        Terrain::LightGrass,
        Terrain::DarkGrass,
        Terrain::Trees,
        Terrain::Stone,
        Terrain::Fallback,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Terrain::DeepWater => "deep_water",
            Terrain::ShallowWater => "shallow_water",
            Terrain::Sand => "sand",
            Terrain::LightGrass => "light_grass",
            Terrain::DarkGrass => "dark_grass",
            Terrain::Trees => "trees",
            Terrain::Stone => "stone",
            Terrain::Fallback => "fallback",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TerrainBand {
    /// Exclusive upper bound, except for the last band which also takes 1.0.
    pub upper: f32,
    pub terrain: Terrain,
}

impl TerrainBand {
    pub const fn new(upper: f32, terrain: Terrain) -> Self {
        Self { upper, terrain }
    }
}

pub const DEFAULT_BANDS: [TerrainBand; 7] = [
    TerrainBand::new(0.30, Terrain::DeepWater),
    TerrainBand::new(0.40, Terrain::ShallowWater),
    TerrainBand::new(0.45, Terrain::Sand),
    TerrainBand::new(0.50, Terrain::LightGrass),
    TerrainBand::new(0.65, Terrain::DarkGrass),
    TerrainBand::new(0.75, Terrain::Trees),
    TerrainBand::new(1.0, Terrain::Stone),
];

/// Ordered threshold ladder covering [0, 1].
#[derive(Clone, Debug, PartialEq)]
pub struct BandTable {
    bands: Vec<TerrainBand>,
}

impl Default for BandTable {
    fn default() -> Self {
        Self {
            bands: DEFAULT_BANDS.to_vec(),
        }
    }
}

impl BandTable {
    pub fn new(bands: Vec<TerrainBand>) -> Result<Self, ConfigError> {
        let Some(last) = bands.last() else {
            return Err(ConfigError::InvalidBands("band table is empty".into()));
        };
        if last.upper != 1.0 {
            return Err(ConfigError::InvalidBands(format!(
                "last band ({}) must end at 1.0, got {}",
                last.terrain.name(),
                last.upper
            )));
        }
        let mut prev = 0.0_f32;
        for band in &bands {
            if !band.upper.is_finite() || band.upper <= prev {
                return Err(ConfigError::InvalidBands(format!(
                    "band {} upper bound {} must be finite and greater than {}",
                    band.terrain.name(),
                    band.upper,
                    prev
                )));
            }
            if band.terrain == Terrain::Fallback {
                return Err(ConfigError::InvalidBands(
                    "fallback cannot be used as a band".into(),
                ));
            }
            prev = band.upper;
        }
        Ok(Self { bands })
    }

    pub fn bands(&self) -> &[TerrainBand] {
        &self.bands
    }

    /// First band whose upper bound exceeds `height`; 1.0 lands in the last band.
    pub fn classify(&self, height: f32) -> Terrain {
        for band in &self.bands {
            if height < band.upper {
                return band.terrain;
            }
        }
        match self.bands.last() {
            Some(last) if height == last.upper => last.terrain,
            _ => Terrain::Fallback,
        }
    }
}

/// Terrain colors plus the overlay accents.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    terrain: [Rgba; Terrain::COUNT],
    pub marker: Rgba,
    pub title: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            terrain: [
                Rgba::rgb(0x00, 0x8d, 0xc4),
                Rgba::rgb(0x00, 0xa9, 0xcc),
                Rgba::rgb(0xee, 0xcd, 0xa3),
                Rgba::rgb(0xc2, 0xd5, 0x8d),
                Rgba::rgb(0x79, 0xbd, 0x4f),
                Rgba::rgb(0x61, 0x87, 0x49),
                Rgba::rgb(0x73, 0x6c, 0x6c),
                Rgba::WHITE,
            ],
            marker: Rgba::rgb(0xdf, 0x00, 0x00),
            title: Rgba::rgb(0x16, 0x08, 0x00),
        }
    }
}

impl Palette {
    #[inline]
    pub fn color(&self, terrain: Terrain) -> Rgba {
        self.terrain[terrain.index()]
    }

    pub fn set_color(&mut self, terrain: Terrain, color: Rgba) {
        self.terrain[terrain.index()] = color;
    }
}

//! Fixed lucky-tile and lucky-yaku tables
//!
//! Pure data lookup: the seed indexes the tables directly, no weighting.

use crate::core::seed::DateSeed;

/// The 34 distinct tiles, in man → sou → pin → honors order
pub const TILES: [&str; 34] = [
    "1-man", "2-man", "3-man", "4-man", "5-man", "6-man", "7-man", "8-man", "9-man",
    "1-sou", "2-sou", "3-sou", "4-sou", "5-sou", "6-sou", "7-sou", "8-sou", "9-sou",
    "1-pin", "2-pin", "3-pin", "4-pin", "5-pin", "6-pin", "7-pin", "8-pin", "9-pin",
    "east", "south", "west", "north", "haku", "hatsu", "chun",
];

/// The yaku a daily fortune can feature
pub const YAKU: [&str; 17] = [
    "riichi",
    "tanyao",
    "pinfu",
    "iipeiko",
    "sanshoku doujun",
    "ittsuu",
    "honitsu",
    "chinitsu",
    "toitoi",
    "sanankou",
    "sanshoku doukou",
    "chiitoitsu",
    "shousangen",
    "honroutou",
    "chinroutou",
    "sankantsu",
    "yakuhai",
];

/// The day's lucky tile and yaku (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LuckyPick {
    pub tile: &'static str,
    pub yaku: &'static str,
}

impl LuckyPick {
    /// Index the tables with the seed: `|seed| % tiles`, `|seed * 2| % yaku`
    pub fn from_seed(seed: &DateSeed) -> Self {
        let value = seed.value();
        let tile = TILES[value.unsigned_abs() as usize % TILES.len()];
        let yaku = YAKU[value.wrapping_mul(2).unsigned_abs() as usize % YAKU.len()];
        Self { tile, yaku }
    }
}

//! Effect descriptions: color/size tables plus the three ranges that shape a burst
//!
//! Presets scale with the requested effect width so a 100 px explosion
//! throws particles further (and larger) than a 20 px one.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EffectError;
use crate::render::Color;

/// Width in pixels used when a preset size is not given
pub const DEFAULT_EFFECT_SIZE: u32 = 50;

/// Closed numeric range; reversed bounds are swapped on construction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawRange")]
pub struct NumberRange {
    pub min: f32,
    pub max: f32,
}

impl NumberRange {
    pub fn new(min: f32, max: f32) -> Self {
        if min > max {
            Self { min: max, max: min }
        } else {
            Self { min, max }
        }
    }

    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    fn invalid(&self, name: &'static str) -> EffectError {
        EffectError::InvalidRange {
            name,
            min: self.min,
            max: self.max,
        }
    }
}

/// Deserialization shim so ranges read from JSON get normalized too
#[derive(Deserialize)]
struct RawRange {
    min: f32,
    max: f32,
}

impl From<RawRange> for NumberRange {
    fn from(raw: RawRange) -> Self {
        NumberRange::new(raw.min, raw.max)
    }
}

/// Everything needed to start a circular effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectData {
    /// Colors from spawn to expiry
    pub color_lut: Vec<Color>,
    /// Sizes from spawn to expiry
    pub size_lut: Vec<u8>,
    /// Initial distance from the anchor (px)
    pub spawn: NumberRange,
    /// Distance travelled over a full particle lifespan (px)
    pub spread: NumberRange,
    /// Particle lifespan (ms)
    pub duration: NumberRange,
}

impl EffectData {
    pub fn new(
        color_lut: Vec<Color>,
        size_lut: Vec<u8>,
        spawn: NumberRange,
        spread: NumberRange,
        duration: NumberRange,
    ) -> Self {
        Self {
            color_lut,
            size_lut,
            spawn,
            spread,
            duration,
        }
    }

    /// Build from one of the shape presets, scaled to `size` px across
    pub fn preset(color_lut: Vec<Color>, shape: PresetShape, size: u32) -> Self {
        let radius = (size / 2) as f32;
        let pmax = radius * 0.75;
        match shape {
            PresetShape::Spark => Self::new(
                color_lut,
                vec![6, 6, 4, 2, 1],
                NumberRange::new(0.0, 0.0),
                NumberRange::new(12.0, (radius * 1.5).floor()),
                NumberRange::new(300.0, 400.0),
            ),
            PresetShape::Explosion => Self::new(
                color_lut,
                vec![
                    10,
                    scaled_size(pmax, 16),
                    scaled_size(pmax * 0.5, 14),
                    12,
                    6,
                    4,
                    2,
                    1,
                ],
                NumberRange::new(0.0, (radius * 0.5).floor()),
                NumberRange::new((radius * 0.5).floor(), (radius * 0.75).floor()),
                NumberRange::new(400.0, 600.0),
            ),
            PresetShape::Cloud => Self::new(
                color_lut,
                vec![
                    4,
                    scaled_size(pmax, 16),
                    scaled_size(pmax * 0.75, 14),
                    scaled_size(pmax * 0.5, 12),
                    14,
                    16,
                    12,
                    8,
                    4,
                ],
                NumberRange::new(0.0, (radius * 0.5).floor()),
                NumberRange::new((radius * 0.33).floor(), (radius * 0.33).floor()),
                NumberRange::new(800.0, 1200.0),
            ),
        }
    }

    /// Preset palette and preset shape
    pub fn preset_color(color: PresetColor, shape: PresetShape, size: u32) -> Self {
        Self::preset(color.color_table(), shape, size)
    }

    /// One color throughout, preset shape
    pub fn single_color(color: Color, shape: PresetShape, size: u32) -> Self {
        Self::preset(single_color_table(color), shape, size)
    }

    /// Parse and check the tables and ranges
    pub fn from_json(json: &str) -> Result<Self, EffectError> {
        let data: EffectData = serde_json::from_str(json)?;
        data.validate()?;
        Ok(data)
    }

    pub fn validate(&self) -> Result<(), EffectError> {
        if self.color_lut.is_empty() {
            return Err(EffectError::EmptyTable("color"));
        }
        if self.size_lut.is_empty() {
            return Err(EffectError::EmptyTable("size"));
        }
        if !self.spawn.is_finite() {
            return Err(self.spawn.invalid("spawn"));
        }
        if !self.spread.is_finite() {
            return Err(self.spread.invalid("spread"));
        }
        // Durations become whole milliseconds
        if !self.duration.is_finite() || self.duration.min <= 0.0 || self.duration.max > i32::MAX as f32 {
            return Err(self.duration.invalid("duration"));
        }
        Ok(())
    }
}

/// `max(floor(v), min)` as a size code
fn scaled_size(v: f32, min: u8) -> u8 {
    (v.floor() as u8).max(min)
}

/// Built-in palettes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetColor {
    #[default]
    Fire,
    Ice,
    Toxic,
    Electric,
    Poison,
    Smoke,
}

impl PresetColor {
    pub const ALL: [PresetColor; 6] = [
        PresetColor::Fire,
        PresetColor::Ice,
        PresetColor::Toxic,
        PresetColor::Electric,
        PresetColor::Poison,
        PresetColor::Smoke,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PresetColor::Fire => "fire",
            PresetColor::Ice => "ice",
            PresetColor::Toxic => "toxic",
            PresetColor::Electric => "electric",
            PresetColor::Poison => "poison",
            PresetColor::Smoke => "smoke",
        }
    }

    /// Palette indices from spawn to expiry
    pub fn color_table(&self) -> Vec<Color> {
        match self {
            PresetColor::Fire => vec![1, 5, 4, 2, 10, 10],
            PresetColor::Ice => vec![1, 1, 1, 9, 9, 6, 8],
            PresetColor::Toxic => vec![5, 7, 7, 6, 6, 8],
            PresetColor::Electric => vec![1, 5, 4, 5, 1, 5, 1, 5, 1, 5, 4],
            PresetColor::Poison => vec![10, 10, 12],
            PresetColor::Smoke => vec![1, 1, 13, 11],
        }
    }
}

impl FromStr for PresetColor {
    type Err = EffectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PresetColor::ALL
            .into_iter()
            .find(|c| c.as_str() == s.to_lowercase())
            .ok_or_else(|| EffectError::UnknownPreset {
                kind: "color",
                name: s.to_string(),
            })
    }
}

/// Built-in burst shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetShape {
    Spark,
    #[default]
    Explosion,
    Cloud,
}

impl PresetShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            PresetShape::Spark => "spark",
            PresetShape::Explosion => "explosion",
            PresetShape::Cloud => "cloud",
        }
    }

    /// Unscaled size table for the shape
    pub fn size_table(&self) -> Vec<u8> {
        match self {
            PresetShape::Spark => vec![6, 6, 4, 2, 1],
            PresetShape::Explosion => vec![10, 16, 14, 12, 6, 4, 2, 1],
            PresetShape::Cloud => vec![4, 16, 14, 12, 14, 16, 12, 8, 4],
        }
    }
}

impl FromStr for PresetShape {
    type Err = EffectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "spark" => Ok(PresetShape::Spark),
            "explosion" | "boom" => Ok(PresetShape::Explosion),
            "cloud" => Ok(PresetShape::Cloud),
            _ => Err(EffectError::UnknownPreset {
                kind: "shape",
                name: s.to_string(),
            }),
        }
    }
}

pub fn single_color_table(color: Color) -> Vec<Color> {
    vec![color]
}

/// `max, max - 1, ..., 1`
pub fn shrinking_sizes(max: u8) -> Vec<u8> {
    (1..=max).rev().collect()
}

/// `1, 2, ..., max`
pub fn growing_sizes(max: u8) -> Vec<u8> {
    (1..=max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_swaps_reversed_bounds() {
        let r = NumberRange::new(400.0, 200.0);
        assert_eq!((r.min, r.max), (200.0, 400.0));
    }

    #[test]
    fn test_range_json_normalized() {
        let r: NumberRange = serde_json::from_str(r#"{"min": 20, "max": 5}"#).unwrap();
        assert_eq!((r.min, r.max), (5.0, 20.0));
    }

    #[test]
    fn test_explosion_preset_default_size() {
        let data = EffectData::preset_color(PresetColor::Toxic, PresetShape::Explosion, DEFAULT_EFFECT_SIZE);
        // radius 25, pmax 18.75
        assert_eq!(data.color_lut, vec![5, 7, 7, 6, 6, 8]);
        assert_eq!(data.size_lut, vec![10, 18, 14, 12, 6, 4, 2, 1]);
        assert_eq!(data.spawn, NumberRange::new(0.0, 12.0));
        assert_eq!(data.spread, NumberRange::new(12.0, 18.0));
        assert_eq!(data.duration, NumberRange::new(400.0, 600.0));
    }

    #[test]
    fn test_small_explosion_keeps_minimum_sizes() {
        let data = EffectData::single_color(2, PresetShape::Explosion, 20);
        assert_eq!(data.size_lut, PresetShape::Explosion.size_table());
        assert_eq!(data.color_lut, vec![2]);
    }

    #[test]
    fn test_spark_and_cloud_presets() {
        let spark = EffectData::single_color(5, PresetShape::Spark, 100);
        assert_eq!(spark.size_lut, PresetShape::Spark.size_table());
        assert_eq!(spark.spawn, NumberRange::new(0.0, 0.0));
        assert_eq!(spark.spread, NumberRange::new(12.0, 75.0));
        assert_eq!(spark.duration, NumberRange::new(300.0, 400.0));

        // radius 50, pmax 37.5
        let cloud = EffectData::single_color(5, PresetShape::Cloud, 100);
        assert_eq!(cloud.size_lut, vec![4, 37, 28, 18, 14, 16, 12, 8, 4]);
        assert_eq!(cloud.spread, NumberRange::new(16.0, 16.0));
        assert_eq!(cloud.duration, NumberRange::new(800.0, 1200.0));
    }

    #[test]
    fn test_preset_names() {
        assert_eq!("Fire".parse::<PresetColor>().unwrap(), PresetColor::Fire);
        assert_eq!("cloud".parse::<PresetShape>().unwrap(), PresetShape::Cloud);
        assert!(matches!(
            "lava".parse::<PresetColor>(),
            Err(EffectError::UnknownPreset { kind: "color", .. })
        ));
        for color in PresetColor::ALL {
            assert_eq!(color.as_str().parse::<PresetColor>().unwrap(), color);
        }
    }

    #[test]
    fn test_size_tables() {
        assert_eq!(shrinking_sizes(4), vec![4, 3, 2, 1]);
        assert_eq!(growing_sizes(3), vec![1, 2, 3]);
        assert!(shrinking_sizes(0).is_empty());
        assert_eq!(single_color_table(9), vec![9]);
    }

    #[test]
    fn test_from_json_rejects_empty_tables() {
        let json = r#"{
            "color_lut": [],
            "size_lut": [4, 2, 1],
            "spawn": {"min": 0, "max": 4},
            "spread": {"min": 10, "max": 20},
            "duration": {"min": 300, "max": 500}
        }"#;
        assert!(matches!(EffectData::from_json(json), Err(EffectError::EmptyTable("color"))));
    }

    #[test]
    fn test_validate_rejects_bad_durations() {
        let json = r#"{
            "color_lut": [1],
            "size_lut": [1],
            "spawn": {"min": 0, "max": 4},
            "spread": {"min": 10, "max": 20},
            "duration": {"min": -3e9, "max": -3e9}
        }"#;
        assert!(matches!(
            EffectData::from_json(json),
            Err(EffectError::InvalidRange { name: "duration", .. })
        ));

        let mut data = EffectData::single_color(1, PresetShape::Spark, 20);
        data.duration = NumberRange::new(0.0, 300.0);
        assert!(matches!(data.validate(), Err(EffectError::InvalidRange { name: "duration", .. })));
        data.duration = NumberRange::new(300.0, 1e12);
        assert!(matches!(data.validate(), Err(EffectError::InvalidRange { name: "duration", .. })));
        data.duration = NumberRange::new(300.0, f32::NAN);
        assert!(data.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite_distances() {
        let mut data = EffectData::single_color(1, PresetShape::Explosion, 50);
        assert!(data.validate().is_ok());

        data.spawn = NumberRange::new(0.0, f32::INFINITY);
        assert!(matches!(data.validate(), Err(EffectError::InvalidRange { name: "spawn", .. })));

        data.spawn = NumberRange::new(0.0, 4.0);
        data.spread = NumberRange::new(f32::NAN, 10.0);
        assert!(matches!(data.validate(), Err(EffectError::InvalidRange { name: "spread", .. })));
    }

    #[test]
    fn test_from_json_round_trip() {
        let data = EffectData::preset_color(PresetColor::Ice, PresetShape::Cloud, 60);
        let json = serde_json::to_string(&data).unwrap();
        assert_eq!(EffectData::from_json(&json).unwrap(), data);
    }
}

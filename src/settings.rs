//! Run settings for the demo binary
//!
//! Loaded from a JSON file; every field has a default so partial files work.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::effects::data::{DEFAULT_EFFECT_SIZE, EffectData, PresetColor, PresetShape};
use crate::error::EffectError;

/// Demo run settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed (same seed, same burst)
    pub seed: u64,

    // === Timing ===
    /// Frame step in ms
    pub frame_ms: i32,
    /// Number of frames to simulate
    pub frames: u32,

    // === Effect ===
    /// Anchor position in pixels
    pub x: f32,
    pub y: f32,
    /// Total effect time in ms
    pub duration: i32,
    /// Particles per effect (boosted for short effects)
    pub density: f32,
    pub color: PresetColor,
    pub shape: PresetShape,
    /// Effect width in pixels
    pub size: u32,
    /// Custom effect data; overrides the presets when present
    pub effect: Option<EffectData>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0x5eed,

            frame_ms: 20,
            frames: 60,

            x: 80.0,
            y: 60.0,
            duration: 100,
            density: 20.0,
            color: PresetColor::Fire,
            shape: PresetShape::Explosion,
            size: DEFAULT_EFFECT_SIZE,
            effect: None,
        }
    }
}

impl Settings {
    /// Read settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, EffectError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn from_json(json: &str) -> Result<Self, EffectError> {
        let settings: Settings = serde_json::from_str(json)?;
        if let Some(effect) = &settings.effect {
            effect.validate()?;
        }
        Ok(settings)
    }

    /// The effect to run: custom data if given, otherwise the preset
    pub fn effect_data(&self) -> EffectData {
        match &self.effect {
            Some(effect) => effect.clone(),
            None => EffectData::preset_color(self.color, self.shape, self.size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{"seed": 7, "color": "ice", "shape": "cloud"}"#).unwrap();
        assert_eq!(settings.seed, 7);
        assert_eq!(settings.frame_ms, 20);
        assert_eq!(settings.color, PresetColor::Ice);
        assert_eq!(settings.effect_data().color_lut, PresetColor::Ice.color_table());
        assert_eq!(settings.effect_data().duration.max, 1200.0);
    }

    #[test]
    fn test_custom_effect_overrides_preset() {
        let json = r#"{
            "effect": {
                "color_lut": [3],
                "size_lut": [1],
                "spawn": {"min": 0, "max": 0},
                "spread": {"min": 5, "max": 5},
                "duration": {"min": 100, "max": 200}
            }
        }"#;
        let settings = Settings::from_json(json).unwrap();
        assert_eq!(settings.effect_data().color_lut, vec![3]);
    }

    #[test]
    fn test_invalid_settings() {
        assert!(matches!(Settings::from_json("{"), Err(EffectError::Json(_))));
        assert!(matches!(
            Settings::from_json(r#"{"shape": "blob"}"#),
            Err(EffectError::Json(_))
        ));
        assert!(matches!(
            Settings::load(Path::new("/nonexistent/burst.json")),
            Err(EffectError::Io(_))
        ));
    }
}

//! Errors for loading effect data and settings
//!
//! The particle core itself never fails; only parsing and validation of
//! caller-supplied data can.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EffectError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Preset name not recognized
    #[error("Unknown {kind} preset: {name}")]
    UnknownPreset { kind: &'static str, name: String },

    /// A color or size table with no entries
    #[error("{0} table must not be empty")]
    EmptyTable(&'static str),

    /// A range with non-finite bounds, or a non-positive duration
    #[error("Invalid {name} range {min}..{max}")]
    InvalidRange { name: &'static str, min: f32, max: f32 },
}

//! Effect assembly and preset effect data

pub mod create;
pub mod data;

pub use create::{calculate_density, create_circular_effect, start_explosive_effect};
pub use data::{
    EffectData, NumberRange, PresetColor, PresetShape, growing_sizes, shrinking_sizes,
    single_color_table,
};

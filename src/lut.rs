//! Quantized range tables
//!
//! A continuous `[min, max)` range is reduced to `LUT_SLICES` evenly spaced
//! fixed-point samples so picking a random value is a single index draw.

use crate::consts::LUT_SLICES;
use crate::fx::Fx8;

/// Fixed-length sample table over a numeric range
pub type RangeLut = [Fx8; LUT_SLICES];

/// Entry k is `min + (max - min) * k / LUT_SLICES`; entry 0 is `min`
pub fn range_lut(min: f32, max: f32) -> RangeLut {
    let mut table = [Fx8::ZERO; LUT_SLICES];
    for (k, entry) in table.iter_mut().enumerate() {
        *entry = Fx8::from_f32(min + (max - min) * k as f32 / LUT_SLICES as f32);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_entries() {
        let lut = range_lut(0.0, 10.0);
        assert_eq!(lut.len(), LUT_SLICES);
        assert_eq!(lut[0], Fx8::ZERO);
        assert_eq!(lut[10], Fx8::from_int(5));
        assert_eq!(lut[19], Fx8::from_f32(9.5));
    }

    #[test]
    fn test_degenerate_range() {
        let lut = range_lut(7.0, 7.0);
        assert!(lut.iter().all(|v| *v == Fx8::from_int(7)));
    }

    proptest! {
        #[test]
        fn prop_monotonic_from_min(min in -100.0f32..100.0, span in 0.0f32..200.0) {
            let max = min + span;
            let lut = range_lut(min, max);
            prop_assert_eq!(lut[0], Fx8::from_f32(min));
            for pair in lut.windows(2) {
                prop_assert!(pair[0] <= pair[1]);
            }
        }
    }
}

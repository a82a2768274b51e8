//! Fixed-point sine/cosine over a fixed angular resolution

use std::f64::consts::TAU;
use std::sync::OnceLock;

use crate::consts::NUM_SLICES;
use crate::fx::Fx8;

/// Cosine and sine sampled at `NUM_SLICES` evenly spaced angles
#[derive(Debug)]
pub struct TrigCache {
    cos: [Fx8; NUM_SLICES],
    sin: [Fx8; NUM_SLICES],
}

impl TrigCache {
    fn build() -> Self {
        let mut cos = [Fx8::ZERO; NUM_SLICES];
        let mut sin = [Fx8::ZERO; NUM_SLICES];
        for i in 0..NUM_SLICES {
            let theta = TAU * i as f64 / NUM_SLICES as f64;
            cos[i] = Fx8::from_f32(theta.cos() as f32);
            sin[i] = Fx8::from_f32(theta.sin() as f32);
        }
        log::debug!("Built trig cache ({} slices)", NUM_SLICES);
        Self { cos, sin }
    }

    /// Cosine of angle bucket `i` (panics if `i >= NUM_SLICES`)
    #[inline]
    pub fn cos(&self, i: usize) -> Fx8 {
        self.cos[i]
    }

    #[inline]
    pub fn sin(&self, i: usize) -> Fx8 {
        self.sin[i]
    }

    /// Unit direction for angle bucket `i` as (cos, sin)
    #[inline]
    pub fn direction(&self, i: usize) -> (Fx8, Fx8) {
        (self.cos[i], self.sin[i])
    }

    pub fn cos_table(&self) -> &[Fx8] {
        &self.cos
    }

    pub fn sin_table(&self) -> &[Fx8] {
        &self.sin
    }
}

static TRIG: OnceLock<TrigCache> = OnceLock::new();

/// Shared trig tables, built on first call
pub fn trig_cache() -> &'static TrigCache {
    TRIG.get_or_init(TrigCache::build)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_table_length() {
        assert_eq!(trig_cache().cos_table().len(), NUM_SLICES);
        assert_eq!(trig_cache().sin_table().len(), NUM_SLICES);
    }

    #[test]
    fn test_cardinal_angles() {
        let t = trig_cache();
        assert_eq!(t.cos(0), Fx8::ONE);
        assert_eq!(t.sin(0), Fx8::ZERO);
        // 90 slices: bucket 45 is pi
        assert_eq!(t.cos(45), -Fx8::ONE);
        // Quarter turn is bucket 22.5, so bucket 22 is just short of it
        assert!(t.sin(22).to_f32() > 0.99);
    }

    #[test]
    fn test_shared_instance() {
        assert!(std::ptr::eq(trig_cache(), trig_cache()));
    }

    proptest! {
        #[test]
        fn prop_unit_circle(i in 0usize..NUM_SLICES) {
            let (c, s) = trig_cache().direction(i);
            let len_sq = c * c + s * s;
            // Truncation loses at most a couple of LSBs per term
            prop_assert!((len_sq.raw() - Fx8::ONE.raw()).abs() <= 6, "bucket {} gave {}", i, len_sq.raw());
        }
    }
}

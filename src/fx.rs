//! 8-bit fractional fixed-point numbers
//!
//! Positions and velocities are stored as `Fx8` so particle math stays in
//! integers. Truncation and shifting behave the same on every target, which
//! keeps seeded runs reproducible.

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Number of fractional bits
pub const FRACTION_BITS: u32 = 8;

/// Fixed-point value with 8 fractional bits (1.0 == 256)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fx8(i32);

impl Fx8 {
    pub const ZERO: Fx8 = Fx8(0);
    pub const ONE: Fx8 = Fx8(1 << FRACTION_BITS);
    pub const TWO: Fx8 = Fx8(2 << FRACTION_BITS);

    /// Wrap a raw fixed-point value
    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        Fx8(raw)
    }

    /// The underlying raw value
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    #[inline]
    pub const fn from_int(v: i32) -> Self {
        Fx8(v << FRACTION_BITS)
    }

    /// Convert from float, truncating toward zero
    #[inline]
    pub fn from_f32(v: f32) -> Self {
        Fx8((v * (1 << FRACTION_BITS) as f32) as i32)
    }

    /// Integer part, rounded toward negative infinity
    #[inline]
    pub const fn to_int(self) -> i32 {
        self.0 >> FRACTION_BITS
    }

    #[inline]
    pub fn to_f32(self) -> f32 {
        self.0 as f32 / (1 << FRACTION_BITS) as f32
    }
}

impl Add for Fx8 {
    type Output = Fx8;

    #[inline]
    fn add(self, rhs: Fx8) -> Fx8 {
        Fx8(self.0.wrapping_add(rhs.0))
    }
}

impl AddAssign for Fx8 {
    #[inline]
    fn add_assign(&mut self, rhs: Fx8) {
        *self = *self + rhs;
    }
}

impl Sub for Fx8 {
    type Output = Fx8;

    #[inline]
    fn sub(self, rhs: Fx8) -> Fx8 {
        Fx8(self.0.wrapping_sub(rhs.0))
    }
}

impl SubAssign for Fx8 {
    #[inline]
    fn sub_assign(&mut self, rhs: Fx8) {
        *self = *self - rhs;
    }
}

impl Neg for Fx8 {
    type Output = Fx8;

    #[inline]
    fn neg(self) -> Fx8 {
        Fx8(self.0.wrapping_neg())
    }
}

impl Mul for Fx8 {
    type Output = Fx8;

    /// `(a * b) >> 8`, computed wide
    #[inline]
    fn mul(self, rhs: Fx8) -> Fx8 {
        Fx8(((self.0 as i64 * rhs.0 as i64) >> FRACTION_BITS) as i32)
    }
}

impl Div for Fx8 {
    type Output = Fx8;

    /// `(a << 8) / b`, truncated toward zero
    #[inline]
    fn div(self, rhs: Fx8) -> Fx8 {
        Fx8((((self.0 as i64) << FRACTION_BITS) / rhs.0 as i64) as i32)
    }
}

use ark_bn254::Fr;
use ark_ff::{BigInteger, Field, PrimeField};
use core::{
    fmt,
    fmt::{Debug, Display, Formatter},
    iter::{Product, Sum},
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use num_traits::{Inv, One, Zero};

/// An element of the BN254 scalar field.
///
/// A transparent wrapper around [`ark_bn254::Fr`] so that wire-format
/// conversions and trait impls can live on a local type.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BNScalar(pub Fr);

/// The largest `2^k - 1` strictly below the BN254 scalar modulus.
///
/// ANDing a uniform 32-byte string with this mask yields a canonical field
/// element without a modular reduction; the transcript draws every challenge
/// this way.
pub const MODULUS_MASK: [u8; 32] = [
    0x1f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
];

impl BNScalar {
    /// Interprets a big-endian byte string as a field element, reducing mod p.
    pub fn from_be_bytes_mod_order(bytes: &[u8]) -> Self {
        Self(Fr::from_be_bytes_mod_order(bytes))
    }

    /// The canonical 32-byte big-endian word of this element.
    ///
    /// # Panics
    /// Never: the canonical representative of an `Fr` always fits 32 bytes.
    pub fn to_be_bytes(self) -> [u8; 32] {
        let mut word = [0u8; 32];
        word.copy_from_slice(&self.0.into_bigint().to_bytes_be());
        word
    }
}

// --------------------------------------------------------------------------------
// Operator impls, written out so the wrapper stays dependency-light.
// --------------------------------------------------------------------------------
impl Add for BNScalar {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}
impl Sub for BNScalar {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}
impl Mul for BNScalar {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}
impl AddAssign for BNScalar {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}
impl SubAssign for BNScalar {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}
impl MulAssign for BNScalar {
    fn mul_assign(&mut self, rhs: Self) {
        self.0 *= rhs.0;
    }
}
impl Neg for BNScalar {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}
impl Sum for BNScalar {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|x| x.0).sum())
    }
}
impl Product for BNScalar {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|x| x.0).product())
    }
}
impl Zero for BNScalar {
    fn zero() -> Self {
        Self(Fr::zero())
    }
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}
impl One for BNScalar {
    fn one() -> Self {
        Self(Fr::one())
    }
}
impl Inv for BNScalar {
    type Output = Option<Self>;
    fn inv(self) -> Option<Self> {
        self.0.inverse().map(Self)
    }
}
impl Debug for BNScalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BNScalar").field(&self.0).finish()
    }
}
impl Display for BNScalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

macro_rules! bn_scalar_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BNScalar {
                fn from(value: $t) -> Self {
                    Self(Fr::from(value))
                }
            }
        )*
    };
}
// Signed types lift negative values to `p + x`, which is what the wire
// format's sign extension requires.
bn_scalar_from_int!(bool, u8, u16, u32, u64, i8, i16, i32, i64);

use crate::backends::error::ScalarError;
use crate::curves::ed25519;
use crate::traits::Scalar as ScalarTrait;

use core::fmt;
use std::ops::Add;
use std::ops::Mul;
use std::ops::Neg;
use std::ops::Sub;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Scalar(pub(super) curve25519_dalek::Scalar);

impl ScalarTrait for Scalar {
    // wide reduction keeps the bias negligible
    const UNIFORM_BYTES: usize = 64;

    fn zero() -> Self {
        Self(curve25519_dalek::Scalar::ZERO)
    }

    fn one() -> Self {
        Self(curve25519_dalek::Scalar::ONE)
    }

    fn from_u64(val: u64) -> Self {
        Self(curve25519_dalek::Scalar::from(val))
    }

    fn from_uniform_bytes(bytes: &[u8]) -> Option<Self> {
        let wide: &[u8; 64] = bytes.try_into().ok()?;

        Some(Self(curve25519_dalek::Scalar::from_bytes_mod_order_wide(
            wide,
        )))
    }

    fn serialize(&self) -> Vec<u8> {
        self.0.to_bytes().to_vec()
    }

    fn deserialize(bytes: &[u8]) -> Result<Self, ScalarError> {
        let bytes: [u8; ed25519::SCALAR_SIZE] =
            bytes
                .try_into()
                .map_err(|_| ScalarError::InvalidInputLength {
                    expected: ed25519::SCALAR_SIZE,
                    received: bytes.len(),
                })?;

        let scalar = Option::<curve25519_dalek::Scalar>::from(
            curve25519_dalek::Scalar::from_canonical_bytes(bytes),
        )
        .ok_or(ScalarError::NonCanonicalInput)?;

        Ok(Self(scalar))
    }
}

impl Add for Scalar {
    type Output = Scalar;

    #[inline]
    fn add(self, rhs: Scalar) -> Scalar {
        Scalar(self.0 + rhs.0)
    }
}

impl Sub for Scalar {
    type Output = Scalar;

    #[inline]
    fn sub(self, rhs: Scalar) -> Scalar {
        Scalar(self.0 - rhs.0)
    }
}

impl Mul for Scalar {
    type Output = Scalar;

    #[inline]
    fn mul(self, rhs: Scalar) -> Scalar {
        Scalar(self.0 * rhs.0)
    }
}

impl Neg for Scalar {
    type Output = Scalar;

    #[inline]
    fn neg(self) -> Scalar {
        Scalar(-self.0)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", &hex::encode(self.0.as_bytes()))
    }
}

use crate::backends::error::ScalarError;
use crate::curves::p256 as curve;
use crate::traits::Scalar as ScalarTrait;

use core::fmt;
use group::ff::PrimeField;
use std::ops::Add;
use std::ops::Mul;
use std::ops::Neg;
use std::ops::Sub;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Scalar(pub(super) ::p256::Scalar);

impl ScalarTrait for Scalar {
    // rejection sampling, the order is close enough to 2^256
    const UNIFORM_BYTES: usize = curve::SCALAR_SIZE;

    fn zero() -> Self {
        Self(::p256::Scalar::ZERO)
    }

    fn one() -> Self {
        Self(::p256::Scalar::ONE)
    }

    fn from_u64(val: u64) -> Self {
        Self(::p256::Scalar::from(val))
    }

    fn from_uniform_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != curve::SCALAR_SIZE {
            return None;
        }
        let repr = ::p256::FieldBytes::clone_from_slice(bytes);

        Option::<::p256::Scalar>::from(::p256::Scalar::from_repr(repr)).map(Self)
    }

    fn serialize(&self) -> Vec<u8> {
        self.0.to_repr().to_vec()
    }

    fn deserialize(bytes: &[u8]) -> Result<Self, ScalarError> {
        if bytes.len() != curve::SCALAR_SIZE {
            return Err(ScalarError::InvalidInputLength {
                expected: curve::SCALAR_SIZE,
                received: bytes.len(),
            });
        }
        let repr = ::p256::FieldBytes::clone_from_slice(bytes);

        let scalar = Option::<::p256::Scalar>::from(::p256::Scalar::from_repr(repr))
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
        write!(f, "{}", &hex::encode(self.0.to_repr()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn big_endian_encoding() {
        let bytes = Scalar::from_u64(0x0102).serialize();
        assert_eq!(bytes.len(), 32);
        assert_eq!(&bytes[30..], &[0x01, 0x02]);
        assert!(bytes[..30].iter().all(|b| *b == 0));
    }

    #[test]
    fn rejects_values_above_order() {
        let bytes = [0xffu8; 32];
        assert_eq!(
            Scalar::deserialize(&bytes).unwrap_err(),
            ScalarError::NonCanonicalInput
        );
        assert!(Scalar::from_uniform_bytes(&bytes).is_none());
    }
}

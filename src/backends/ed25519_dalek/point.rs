use super::scalar::Scalar;
use crate::backends::error::PointError;
use crate::backends::error::RandomnessError;
use crate::curves::ed25519;
use crate::traits::Point as PointTrait;

use core::fmt;
use curve25519_dalek::constants::ED25519_BASEPOINT_POINT;
use curve25519_dalek::edwards::CompressedEdwardsY;
use curve25519_dalek::edwards::EdwardsPoint;
use curve25519_dalek::traits::Identity;
use rand_core::CryptoRng;
use rand_core::RngCore;
use std::ops::Add;
use std::ops::Mul;
use std::ops::Neg;
use std::ops::Sub;

/// Element of the prime-order subgroup of edwards25519.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Point(pub(super) EdwardsPoint);

impl PointTrait for Point {
    type Scalar = Scalar;

    const EMBED_LEN: usize = ed25519::EMBED_LEN;

    fn identity() -> Self {
        Self(EdwardsPoint::identity())
    }

    fn generator() -> Self {
        Self(ED25519_BASEPOINT_POINT)
    }

    fn mul_base(s: &Scalar) -> Self {
        Self(EdwardsPoint::mul_base(&s.0))
    }

    // Layout of the compressed y coordinate: [len, data.., random..].
    // Candidates are redrawn until they decode canonically into the subgroup.
    fn embed<R: RngCore + CryptoRng + ?Sized>(
        data: &[u8],
        rng: &mut R,
    ) -> Result<Self, RandomnessError> {
        let dl = data.len().min(Self::EMBED_LEN);
        let mut bytes = [0u8; ed25519::POINT_SIZE];
        let mut attempts = 0u32;

        loop {
            attempts += 1;
            rng.try_fill_bytes(&mut bytes)?;
            bytes[0] = dl as u8;
            bytes[1..1 + dl].copy_from_slice(&data[..dl]);

            let Some(point) = CompressedEdwardsY(bytes).decompress() else {
                continue;
            };
            if point.compress().to_bytes() != bytes || !point.is_torsion_free() {
                continue;
            }

            tracing::trace!(attempts, len = dl, "embedded data into ed25519 point");
            return Ok(Self(point));
        }
    }

    fn data(&self) -> Result<Vec<u8>, PointError> {
        let bytes = self.0.compress().to_bytes();
        let dl = bytes[0] as usize;
        if dl > Self::EMBED_LEN {
            return Err(PointError::InvalidEmbedding {
                len: dl,
                max: Self::EMBED_LEN,
            });
        }

        Ok(bytes[1..1 + dl].to_vec())
    }

    fn serialize(&self) -> Vec<u8> {
        self.0.compress().to_bytes().to_vec()
    }

    fn deserialize(bytes: &[u8]) -> Result<Self, PointError> {
        let bytes: [u8; ed25519::POINT_SIZE] =
            bytes
                .try_into()
                .map_err(|_| PointError::InvalidInputLength {
                    expected: ed25519::POINT_SIZE,
                    received: bytes.len(),
                })?;

        let point = CompressedEdwardsY(bytes)
            .decompress()
            .ok_or(PointError::InvalidPoint)?;

        if point.compress().to_bytes() != bytes {
            return Err(PointError::NonCanonicalInput);
        }
        if !point.is_torsion_free() {
            return Err(PointError::InvalidPoint);
        }

        Ok(Self(point))
    }
}

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point(self.0 + rhs.0)
    }
}

impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point(self.0 - rhs.0)
    }
}

impl Neg for Point {
    type Output = Point;

    #[inline]
    fn neg(self) -> Point {
        Point(-self.0)
    }
}

impl Mul<&Scalar> for Point {
    type Output = Point;

    #[inline]
    fn mul(self, rhs: &Scalar) -> Point {
        Point(self.0 * rhs.0)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", &hex::encode(self.0.compress().as_bytes()))
    }
}

use super::scalar::Scalar;
use crate::backends::error::PointError;
use crate::backends::error::RandomnessError;
use crate::curves::p256 as curve;
use crate::traits::Point as PointTrait;

use ::p256::ProjectivePoint;
use core::fmt;
use group::GroupEncoding;
use rand_core::CryptoRng;
use rand_core::RngCore;
use std::ops::Add;
use std::ops::Mul;
use std::ops::Neg;
use std::ops::Sub;

type Repr = <ProjectivePoint as GroupEncoding>::Repr;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Point(pub(super) ProjectivePoint);

impl PointTrait for Point {
    type Scalar = Scalar;

    const EMBED_LEN: usize = curve::EMBED_LEN;

    fn identity() -> Self {
        Self(ProjectivePoint::IDENTITY)
    }

    fn generator() -> Self {
        Self(ProjectivePoint::GENERATOR)
    }

    // Big-endian x coordinate: [random.., data.., len], random y parity.
    // P-256 has cofactor one so any decodable candidate is a valid element.
    fn embed<R: RngCore + CryptoRng + ?Sized>(
        data: &[u8],
        rng: &mut R,
    ) -> Result<Self, RandomnessError> {
        let dl = data.len().min(Self::EMBED_LEN);
        let last = curve::POINT_SIZE - 1;
        let mut repr = Repr::default();
        let mut attempts = 0u32;

        loop {
            attempts += 1;
            let bytes: &mut [u8] = repr.as_mut();
            rng.try_fill_bytes(bytes)?;
            bytes[0] = 0x02 | (bytes[0] & 1);
            bytes[last] = dl as u8;
            bytes[last - dl..last].copy_from_slice(&data[..dl]);

            let Some(point) = Option::<ProjectivePoint>::from(ProjectivePoint::from_bytes(&repr))
            else {
                continue;
            };

            tracing::trace!(attempts, len = dl, "embedded data into p256 point");
            return Ok(Self(point));
        }
    }

    fn data(&self) -> Result<Vec<u8>, PointError> {
        let repr = self.0.to_bytes();
        let bytes: &[u8] = repr.as_ref();
        let last = curve::POINT_SIZE - 1;
        let dl = bytes[last] as usize;
        if dl > Self::EMBED_LEN {
            return Err(PointError::InvalidEmbedding {
                len: dl,
                max: Self::EMBED_LEN,
            });
        }

        Ok(bytes[last - dl..last].to_vec())
    }

    fn serialize(&self) -> Vec<u8> {
        AsRef::<[u8]>::as_ref(&self.0.to_bytes()).to_vec()
    }

    fn deserialize(bytes: &[u8]) -> Result<Self, PointError> {
        if bytes.len() != curve::POINT_SIZE {
            return Err(PointError::InvalidInputLength {
                expected: curve::POINT_SIZE,
                received: bytes.len(),
            });
        }
        let mut repr = Repr::default();
        AsMut::<[u8]>::as_mut(&mut repr).copy_from_slice(bytes);

        let point = Option::<ProjectivePoint>::from(ProjectivePoint::from_bytes(&repr))
            .ok_or(PointError::InvalidPoint)?;

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
        write!(f, "{}", &hex::encode(self.0.to_bytes()))
    }
}

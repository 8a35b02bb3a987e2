use crate::backends::error::PointError;
use crate::backends::error::RandomnessError;
use crate::backends::error::ScalarError;
use crate::xof::Xof;

use std::fmt::Debug;
use std::fmt::Display;
use std::ops::Add;
use std::ops::Mul;
use std::ops::Neg;
use std::ops::Sub;

use rand_core::CryptoRng;
use rand_core::RngCore;

/// Prime-order group together with its point and scalar types.
///
/// Implementors are zero-sized values which are passed explicitly to every
/// scheme operation, there is no global group instance.
pub trait Group: Debug + Send + Sync {
    const NAME: &'static str;
    /// Domain separation tag keying the group XOF.
    const DST: &'static [u8];
    const POINT_SIZE: usize;
    const SCALAR_SIZE: usize;

    type Scalar: Scalar;
    type Point: Point<Scalar = Self::Scalar>;

    fn generator(&self) -> Self::Point {
        Self::Point::generator()
    }

    fn pick_scalar<R: RngCore + CryptoRng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Self::Scalar, RandomnessError> {
        Self::Scalar::pick(rng)
    }

    fn embed_len(&self) -> usize {
        Self::Point::EMBED_LEN
    }

    fn embed<R: RngCore + CryptoRng + ?Sized>(
        &self,
        data: &[u8],
        rng: &mut R,
    ) -> Result<Self::Point, RandomnessError> {
        Self::Point::embed(data, rng)
    }

    /// Keyed extendable-output hash seeded with `seed`.
    fn xof(&self, seed: &[u8]) -> Xof {
        Xof::new(Self::DST, seed)
    }
}

pub trait Scalar:
    Copy
    + Debug
    + Display
    + PartialEq
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// Number of uniform bytes consumed by one [`Scalar::from_uniform_bytes`] attempt.
    const UNIFORM_BYTES: usize;

    fn zero() -> Self;
    fn one() -> Self;
    fn from_u64(val: u64) -> Self;

    /// Maps `UNIFORM_BYTES` uniformly random bytes to a scalar.
    /// Returns `None` when the candidate is rejected and fresh bytes must be drawn.
    fn from_uniform_bytes(bytes: &[u8]) -> Option<Self>;

    /// Canonical fixed-length encoding.
    fn serialize(&self) -> Vec<u8>;
    fn deserialize(bytes: &[u8]) -> Result<Self, ScalarError>;

    /// Draws a uniformly distributed scalar from a cryptographically secure source.
    fn pick<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Result<Self, RandomnessError> {
        let mut buf = vec![0u8; Self::UNIFORM_BYTES];
        loop {
            rng.try_fill_bytes(&mut buf)?;
            if let Some(scalar) = Self::from_uniform_bytes(&buf) {
                return Ok(scalar);
            }
        }
    }
}

pub trait Point:
    Clone
    + Debug
    + Display
    + PartialEq
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + for<'a> Mul<&'a Self::Scalar, Output = Self>
{
    type Scalar: Scalar;

    /// Maximum number of bytes a single point can carry via [`Point::embed`].
    const EMBED_LEN: usize;

    fn identity() -> Self;
    fn generator() -> Self;

    /// Fixed-base multiplication `s·G`.
    fn mul_base(s: &Self::Scalar) -> Self {
        Self::generator() * s
    }

    /// Uniformly random group element.
    fn pick<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Result<Self, RandomnessError> {
        Ok(Self::mul_base(&Self::Scalar::pick(rng)?))
    }

    /// Embeds up to `EMBED_LEN` bytes of `data` into a point, the rest of `data` is ignored.
    fn embed<R: RngCore + CryptoRng + ?Sized>(
        data: &[u8],
        rng: &mut R,
    ) -> Result<Self, RandomnessError>;

    /// Extracts the bytes previously embedded with [`Point::embed`].
    fn data(&self) -> Result<Vec<u8>, PointError>;

    /// Canonical fixed-length encoding.
    fn serialize(&self) -> Vec<u8>;
    fn deserialize(bytes: &[u8]) -> Result<Self, PointError>;
}

use super::error::SchnorrError;
use super::hash;
use crate::traits::Group;
use crate::traits::Point;
use crate::traits::Scalar;

use rand_core::CryptoRng;
use rand_core::RngCore;

// Schnorr signature with a single public key (no anonymity set)
// ref: https://github.com/dedis/kyber/blob/master/sign/anon/sig.go

/// Challenge and response of a signature, `c || r` on the wire.
pub struct Signature<G: Group> {
    pub c: G::Scalar,
    pub r: G::Scalar,
}

impl<G: Group> Clone for Signature<G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G: Group> Copy for Signature<G> {}

impl<G: Group> PartialEq for Signature<G> {
    fn eq(&self, other: &Self) -> bool {
        self.c == other.c && self.r == other.r
    }
}

impl<G: Group> std::fmt::Debug for Signature<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signature")
            .field("c", &self.c)
            .field("r", &self.r)
            .finish()
    }
}

impl<G: Group> Signature<G> {
    pub const SIZE: usize = 2 * G::SCALAR_SIZE;

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = self.c.serialize();
        bytes.extend_from_slice(&self.r.serialize());

        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SchnorrError> {
        if bytes.len() != Self::SIZE {
            return Err(SchnorrError::InvalidInputLength {
                expected: Self::SIZE,
                received: bytes.len(),
            });
        }
        let (c_bytes, r_bytes) = bytes.split_at(G::SCALAR_SIZE);

        Ok(Self {
            c: G::Scalar::deserialize(c_bytes)?,
            r: G::Scalar::deserialize(r_bytes)?,
        })
    }
}

pub fn sign_signature<G, R>(
    group: &G,
    rng: &mut R,
    msg: &[u8],
    private: &G::Scalar,
) -> Result<Signature<G>, SchnorrError>
where
    G: Group,
    R: RngCore + CryptoRng + ?Sized,
{
    // create random secret v and public point commitment t
    let v = group.pick_scalar(rng)?;
    let t = G::Point::mul_base(&v);

    // challenge c = H(t, msg)
    let c = hash::derive(group, msg, &t);

    // response r = v - c*x, the verifier recovers t as r*G + c*X
    let r = v - c * *private;

    Ok(Signature { c, r })
}

pub fn sign<G, R>(
    group: &G,
    rng: &mut R,
    msg: &[u8],
    private: &G::Scalar,
) -> Result<Vec<u8>, SchnorrError>
where
    G: Group,
    R: RngCore + CryptoRng + ?Sized,
{
    Ok(sign_signature(group, rng, msg, private)?.to_bytes())
}

pub fn verify_signature<G: Group>(
    group: &G,
    msg: &[u8],
    public: &G::Point,
    sig: &Signature<G>,
) -> Result<(), SchnorrError> {
    // recompute commitment t = r*G + c*X
    let t = G::Point::mul_base(&sig.r) + public.clone() * &sig.c;

    // the challenge must match H(t, msg)
    if hash::derive(group, msg, &t) != sig.c {
        tracing::debug!(group = G::NAME, "schnorr: challenge mismatch");
        return Err(SchnorrError::FailedVerification);
    }

    Ok(())
}

pub fn verify<G: Group>(
    group: &G,
    msg: &[u8],
    public: &G::Point,
    sig: &[u8],
) -> Result<(), SchnorrError> {
    let sig = Signature::<G>::from_bytes(sig)?;

    verify_signature(group, msg, public, &sig)
}

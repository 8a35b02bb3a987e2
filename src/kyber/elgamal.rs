use super::error::ElGamalError;
use crate::traits::Group;
use crate::traits::Point;

use rand_core::CryptoRng;
use rand_core::RngCore;

// ElGamal encryption of data embedded into a group element
// ref: https://github.com/dedis/kyber/blob/master/examples/enc_test.go

/// Ephemeral key `K`, blinded message `C` and the plaintext suffix which did not
/// fit into a single point.
///
/// `remainder` is carried in the clear. Messages longer than
/// [`Group::embed_len`] have to be split into several encryptions by the caller.
pub struct Ciphertext<G: Group> {
    pub k: G::Point,
    pub c: G::Point,
    pub remainder: Vec<u8>,
}

impl<G: Group> Clone for Ciphertext<G> {
    fn clone(&self) -> Self {
        Self {
            k: self.k.clone(),
            c: self.c.clone(),
            remainder: self.remainder.clone(),
        }
    }
}

impl<G: Group> PartialEq for Ciphertext<G> {
    fn eq(&self, other: &Self) -> bool {
        self.k == other.k && self.c == other.c && self.remainder == other.remainder
    }
}

impl<G: Group> std::fmt::Debug for Ciphertext<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ciphertext")
            .field("k", &self.k)
            .field("c", &self.c)
            .field("remainder", &hex::encode(&self.remainder))
            .finish()
    }
}

impl<G: Group> Ciphertext<G> {
    /// `K || C || remainder`. The encoding is not self-delimiting,
    /// the blob length has to be framed by the transport.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = self.k.serialize();
        bytes.extend_from_slice(&self.c.serialize());
        bytes.extend_from_slice(&self.remainder);

        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ElGamalError> {
        let expected = 2 * G::POINT_SIZE;
        if bytes.len() < expected {
            return Err(ElGamalError::InvalidInputLength {
                expected,
                received: bytes.len(),
            });
        }
        let (k_bytes, rest) = bytes.split_at(G::POINT_SIZE);
        let (c_bytes, remainder) = rest.split_at(G::POINT_SIZE);

        Ok(Self {
            k: G::Point::deserialize(k_bytes)?,
            c: G::Point::deserialize(c_bytes)?,
            remainder: remainder.to_vec(),
        })
    }

    /// Decrypts the embedded part, `remainder` is left to the caller.
    pub fn decrypt(&self, group: &G, private: &G::Scalar) -> Result<Vec<u8>, ElGamalError> {
        decrypt(group, private, &self.k, &self.c)
    }
}

pub fn encrypt<G, R>(
    group: &G,
    rng: &mut R,
    public: &G::Point,
    msg: &[u8],
) -> Result<Ciphertext<G>, ElGamalError>
where
    G: Group,
    R: RngCore + CryptoRng + ?Sized,
{
    // embed as much of the message as fits into a single point
    let max = group.embed_len().min(msg.len());
    let m = group.embed(&msg[..max], rng)?;
    let remainder = msg[max..].to_vec();

    // ephemeral DH key pair, shared secret blinds the message point
    let k = group.pick_scalar(rng)?;
    let eph = G::Point::mul_base(&k);
    let shared = public.clone() * &k;
    let c = shared + m;

    Ok(Ciphertext {
        k: eph,
        c,
        remainder,
    })
}

pub fn decrypt<G: Group>(
    _group: &G,
    private: &G::Scalar,
    k: &G::Point,
    c: &G::Point,
) -> Result<Vec<u8>, ElGamalError> {
    // regenerate the shared secret and unblind
    let shared = k.clone() * private;
    let m = c.clone() - shared;

    m.data().map_err(|err| {
        tracing::debug!(group = G::NAME, %err, "elgamal: failed to extract embedded data");
        ElGamalError::Point(err)
    })
}

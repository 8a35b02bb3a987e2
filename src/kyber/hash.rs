use crate::traits::Group;
use crate::traits::Point;
use crate::traits::Scalar;

/// Derives a scalar from a message and a point.
///
/// The canonical encoding of `point` seeds the group XOF, `message` is absorbed
/// next and the scalar is sampled from the output stream with the same
/// procedure [`Scalar::pick`] applies to a CSPRNG.
pub fn derive<G: Group>(group: &G, message: &[u8], point: &G::Point) -> G::Scalar {
    let mut xof = group.xof(&point.serialize());
    xof.update(message);
    let mut stream = xof.finalize();

    let mut buf = vec![0u8; G::Scalar::UNIFORM_BYTES];
    loop {
        stream.read(&mut buf);
        if let Some(scalar) = G::Scalar::from_uniform_bytes(&buf) {
            return scalar;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[cfg(feature = "ed25519")]
    use crate::curves::ed25519::Ed25519;
    #[cfg(feature = "p256")]
    use crate::curves::p256::P256;

    fn deterministic<G: Group>(group: &G) {
        let t = G::Point::mul_base(&G::Scalar::from_u64(42));
        assert_eq!(derive(group, b"msg", &t), derive(group, b"msg", &t));
    }

    fn input_sensitive<G: Group>(group: &G) {
        let t = G::Point::mul_base(&G::Scalar::from_u64(42));
        let u = G::Point::mul_base(&G::Scalar::from_u64(43));
        let base = derive(group, b"msg", &t);

        assert_ne!(base, derive(group, b"msh", &t));
        assert_ne!(base, derive(group, b"msg", &u));
        assert_ne!(base, derive(group, b"", &t));
    }

    #[test]
    fn test_derive_deterministic() {
        #[cfg(feature = "ed25519")]
        deterministic(&Ed25519);
        #[cfg(feature = "p256")]
        deterministic(&P256);
    }

    #[test]
    fn test_derive_input_sensitive() {
        #[cfg(feature = "ed25519")]
        input_sensitive(&Ed25519);
        #[cfg(feature = "p256")]
        input_sensitive(&P256);
    }
}

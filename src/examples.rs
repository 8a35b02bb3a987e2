//! End-to-end scenarios run against every enabled group,
//! both backends are enabled by default:
//!    cargo test
//! or restricted to a single one:
//!    cargo test --no-default-features --features p256

#[cfg(test)]
mod tests {
    #[cfg(feature = "ed25519")]
    use crate::curves::ed25519::Ed25519;
    #[cfg(feature = "p256")]
    use crate::curves::p256::P256;
    use crate::kyber::codec;
    use crate::kyber::elgamal;
    use crate::kyber::schnorr;
    use crate::kyber::SchnorrError;
    use crate::traits::Group;
    use crate::traits::Point;
    use crate::traits::Scalar;

    fn hi_with_key_three<G: Group>(group: &G) {
        let mut rng = rand::thread_rng();
        let private = G::Scalar::from_u64(3);
        let public = group.generator() * &private;
        assert_eq!(
            public,
            group.generator() + group.generator() + group.generator()
        );

        let sig = schnorr::sign(group, &mut rng, b"hi", &private).unwrap();
        assert!(schnorr::verify(group, b"hi", &public, &sig).is_ok());
        assert_eq!(
            schnorr::verify(group, b"bye", &public, &sig).unwrap_err(),
            SchnorrError::FailedVerification
        );
    }

    #[test]
    fn test_hi_with_key_three() {
        #[cfg(feature = "ed25519")]
        hi_with_key_three(&Ed25519);
        #[cfg(feature = "p256")]
        hi_with_key_three(&P256);
    }

    // signed ElGamal ciphertext shipped as a point list plus remainder
    fn signed_envelope<G: Group>(group: &G) {
        let mut rng = rand::thread_rng();
        let sender = group.pick_scalar(&mut rng).unwrap();
        let sender_pub = G::Point::mul_base(&sender);
        let receiver = group.pick_scalar(&mut rng).unwrap();
        let receiver_pub = G::Point::mul_base(&receiver);

        let msg = b"a payload which is longer than one point can carry";
        let ct = elgamal::encrypt(group, &mut rng, &receiver_pub, msg).unwrap();
        let wire = codec::encode_points(&[ct.k.clone(), ct.c.clone()]);
        let sig = schnorr::sign(group, &mut rng, &wire, &sender).unwrap();

        // receiving side
        assert!(schnorr::verify(group, &wire, &sender_pub, &sig).is_ok());
        let points = codec::decode_group_points(group, &wire).unwrap();
        assert_eq!(points.len(), 2);

        let mut plain = elgamal::decrypt(group, &receiver, &points[0], &points[1]).unwrap();
        plain.extend_from_slice(&ct.remainder);
        assert_eq!(plain, msg);
    }

    #[test]
    fn test_signed_envelope() {
        for _ in 0..5 {
            #[cfg(feature = "ed25519")]
            signed_envelope(&Ed25519);
            #[cfg(feature = "p256")]
            signed_envelope(&P256);
        }
    }

    fn scalar_arithmetic<G: Group>() {
        let two = G::Scalar::from_u64(2);
        let five = G::Scalar::from_u64(5);

        assert_eq!(two + five, G::Scalar::from_u64(7));
        assert_eq!(five - two, G::Scalar::from_u64(3));
        assert_eq!(two * five, G::Scalar::from_u64(10));
        assert_eq!(two - five + G::Scalar::from_u64(3), G::Scalar::zero());
        assert_eq!(-G::Scalar::one() + G::Scalar::one(), G::Scalar::zero());
        assert_eq!(
            G::Scalar::deserialize(&five.serialize()).unwrap(),
            five
        );
        assert_eq!(five.serialize().len(), G::SCALAR_SIZE);
    }

    #[test]
    fn test_scalar_arithmetic() {
        #[cfg(feature = "ed25519")]
        scalar_arithmetic::<Ed25519>();
        #[cfg(feature = "p256")]
        scalar_arithmetic::<P256>();
    }

    fn point_arithmetic<G: Group>(group: &G) {
        let mut rng = rand::thread_rng();
        let a = group.pick_scalar(&mut rng).unwrap();
        let b = group.pick_scalar(&mut rng).unwrap();
        let pa = G::Point::mul_base(&a);
        let pb = G::Point::mul_base(&b);

        assert_eq!(pa.clone() + pb.clone(), G::Point::mul_base(&(a + b)));
        assert_eq!(pa.clone() - pb.clone(), G::Point::mul_base(&(a - b)));
        assert_eq!(pa.clone() * &b, pb.clone() * &a);
        assert_eq!(pa.clone() + (-pa.clone()), G::Point::identity());
        assert_eq!(
            G::Point::mul_base(&G::Scalar::zero()),
            G::Point::identity()
        );

        let bytes = pa.serialize();
        assert_eq!(bytes.len(), G::POINT_SIZE);
        assert_eq!(G::Point::deserialize(&bytes).unwrap(), pa);
        assert_eq!(hex::encode(&bytes), pa.to_string());
    }

    #[test]
    fn test_point_arithmetic() {
        #[cfg(feature = "ed25519")]
        point_arithmetic(&Ed25519);
        #[cfg(feature = "p256")]
        point_arithmetic(&P256);
    }

    fn random_points_differ<G: Group>() {
        let mut rng = rand::thread_rng();
        let first = G::Point::pick(&mut rng).unwrap();
        let second = G::Point::pick(&mut rng).unwrap();

        assert_ne!(first, second);
        assert_ne!(first, G::Point::identity());
    }

    #[test]
    fn test_random_points_differ() {
        #[cfg(feature = "ed25519")]
        random_points_differ::<Ed25519>();
        #[cfg(feature = "p256")]
        random_points_differ::<P256>();
    }

    #[test]
    fn test_embed_capacity() {
        #[cfg(feature = "ed25519")]
        assert_eq!(Ed25519.embed_len(), 29);
        #[cfg(feature = "p256")]
        assert_eq!(P256.embed_len(), 30);
    }
}

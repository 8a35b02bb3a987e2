pub mod error;

#[cfg(feature = "ed25519")]
mod ed25519_dalek {
    mod point;
    mod scalar;

    use crate::curves::ed25519;
    super::impl_group!(ed25519, Ed25519, "ed25519");
}

#[cfg(feature = "p256")]
mod p256_rustcrypto {
    mod point;
    mod scalar;

    use crate::curves::p256;
    super::impl_group!(p256, P256, "p256");
}

macro_rules! impl_group {
    ($curve:ident, $group:ident, $name:literal) => {
        use crate::traits::Group;

        impl Group for $curve::$group {
            const NAME: &'static str = $name;
            const DST: &'static [u8] = $curve::DST;
            const POINT_SIZE: usize = $curve::POINT_SIZE;
            const SCALAR_SIZE: usize = $curve::SCALAR_SIZE;

            type Point = point::Point;
            type Scalar = scalar::Scalar;
        }
    };
}

#[allow(unused_imports)]
pub(in crate::backends) use impl_group;

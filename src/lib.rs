mod backends;
pub mod curves;
pub mod examples;
pub mod kyber;
pub mod traits;
pub mod xof;

pub mod errors {
    pub use crate::backends::error::PointError;
    pub use crate::backends::error::RandomnessError;
    pub use crate::backends::error::ScalarError;
    pub use crate::kyber::error::CodecError;
    pub use crate::kyber::error::ElGamalError;
    pub use crate::kyber::error::SchnorrError;
}

pub mod points {
    use crate::traits::Group;

    /// Group element of `G`
    pub type Point<G> = <G as Group>::Point;

    /// Scalar modulo the order of `G`
    pub type Scalar<G> = <G as Group>::Scalar;
}

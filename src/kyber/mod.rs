//! Schemes over an abstract prime-order group, modelled after the
//! dedis/kyber toolkit.

pub mod codec;
pub mod elgamal;
pub mod error;
pub mod hash;
pub mod schnorr;

#[cfg(test)]
mod testing;

pub use error::CodecError;
pub use error::ElGamalError;
pub use error::SchnorrError;

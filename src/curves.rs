pub mod ed25519 {
    pub const DST: &[u8] = b"KYBERLITE_ED25519_SHAKE256_XOF_";

    pub const POINT_SIZE: usize = 32;
    pub const SCALAR_SIZE: usize = 32;
    /// 255-bit y coordinate minus one length byte and one byte of randomness.
    pub const EMBED_LEN: usize = (255 - 8 - 8) / 8;

    /// Prime-order subgroup of the edwards25519 curve.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct Ed25519;
}

pub mod p256 {
    pub const DST: &[u8] = b"KYBERLITE_P256_SHAKE256_XOF_";

    /// SEC1 compressed encoding, identity is encoded as all zeroes.
    pub const POINT_SIZE: usize = 33;
    pub const SCALAR_SIZE: usize = 32;
    /// 256-bit x coordinate minus one length byte and one byte of randomness.
    pub const EMBED_LEN: usize = (256 - 8 - 8) / 8;

    /// NIST P-256.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct P256;
}

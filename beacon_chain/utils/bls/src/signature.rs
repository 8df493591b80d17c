use super::{blst_core, BlstError, Error, PublicKey, DST};
use std::fmt;

/// The byte-length of a BLS signature when serialized in compressed form.
pub const SIGNATURE_BYTES_LEN: usize = 96;

/// The compressed encoding of the point at infinity.
pub const INFINITY_SIGNATURE: [u8; SIGNATURE_BYTES_LEN] = {
    let mut bytes = [0; SIGNATURE_BYTES_LEN];
    bytes[0] = 0xc0;
    bytes
};

#[derive(Clone)]
pub struct Signature(blst_core::Signature);

impl Signature {
    pub(crate) fn from_point(point: blst_core::Signature) -> Self {
        Signature(point)
    }

    pub(crate) fn point(&self) -> &blst_core::Signature {
        &self.0
    }

    pub fn as_bytes(&self) -> [u8; SIGNATURE_BYTES_LEN] {
        self.0.to_bytes()
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != SIGNATURE_BYTES_LEN {
            return Err(Error::InvalidByteLength {
                got: bytes.len(),
                expected: SIGNATURE_BYTES_LEN,
            });
        }
        blst_core::Signature::from_bytes(bytes)
            .map(Signature)
            .map_err(Into::into)
    }

    /// Verify that `self` is a signature across `msg` by the secret key of `pubkey`.
    pub fn verify(&self, msg: &[u8], pubkey: &PublicKey) -> bool {
        self.0.verify(true, msg, DST, &[], pubkey.point(), true) == BlstError::BLST_SUCCESS
    }
}

impl PartialEq for Signature {
    fn eq(&self, other: &Signature) -> bool {
        self.as_bytes()[..] == other.as_bytes()[..]
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{}", hex::encode(&self.as_bytes()[..]))
    }
}

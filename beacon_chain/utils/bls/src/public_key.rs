use super::{blst_core, Error};
use ssz::{Decodable, DecodeError, Encodable, SszStream, TreeHash};
use std::fmt;

/// The byte-length of a BLS public key when serialized in compressed form.
pub const PUBLIC_KEY_BYTES_LEN: usize = 48;

#[derive(Clone, PartialEq)]
pub struct PublicKey(blst_core::PublicKey);

impl PublicKey {
    pub(crate) fn from_point(point: blst_core::PublicKey) -> Self {
        PublicKey(point)
    }

    pub(crate) fn point(&self) -> &blst_core::PublicKey {
        &self.0
    }

    /// Returns the compressed encoding of the key.
    pub fn as_bytes(&self) -> [u8; PUBLIC_KEY_BYTES_LEN] {
        self.0.compress()
    }

    /// Decode a compressed public key.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != PUBLIC_KEY_BYTES_LEN {
            return Err(Error::InvalidByteLength {
                got: bytes.len(),
                expected: PUBLIC_KEY_BYTES_LEN,
            });
        }
        blst_core::PublicKey::uncompress(bytes)
            .map(PublicKey)
            .map_err(Into::into)
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.as_bytes()))
    }
}

impl Encodable for PublicKey {
    fn ssz_append(&self, s: &mut SszStream) {
        s.append_encoded_raw(&self.as_bytes());
    }
}

impl Decodable for PublicKey {
    fn ssz_decode(bytes: &[u8], i: usize) -> Result<(Self, usize), DecodeError> {
        let end = i + PUBLIC_KEY_BYTES_LEN;
        let slice = bytes.get(i..end).ok_or(DecodeError::TooShort)?;
        let pubkey =
            PublicKey::from_bytes(slice).map_err(|e| DecodeError::Invalid(format!("{:?}", e)))?;
        Ok((pubkey, end))
    }
}

impl TreeHash for PublicKey {
    fn tree_hash(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

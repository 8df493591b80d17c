use super::{
    blst_core, AggregatePublicKey, Error, Signature, INFINITY_SIGNATURE, SIGNATURE_BYTES_LEN,
};
use ssz::{Decodable, DecodeError, Encodable, SszStream, TreeHash};
use std::fmt;

/// An aggregate of zero or more signatures.
///
/// An aggregate with no signatures ("empty") serializes as the point at infinity and never
/// verifies.
#[derive(Clone)]
pub struct AggregateSignature {
    point: Option<blst_core::AggregateSignature>,
}

impl AggregateSignature {
    /// Instantiate a new, empty aggregate.
    pub fn new() -> Self {
        Self { point: None }
    }

    pub fn is_empty(&self) -> bool {
        self.point.is_none()
    }

    /// Add some signature to the aggregate.
    pub fn add(&mut self, signature: &Signature) {
        match self.point.as_mut() {
            Some(agg) => {
                // Group membership is checked at verification.
                let _ = agg.add_signature(signature.point(), false);
            }
            None => {
                self.point = Some(blst_core::AggregateSignature::from_signature(
                    signature.point(),
                ))
            }
        }
    }

    pub fn as_bytes(&self) -> [u8; SIGNATURE_BYTES_LEN] {
        match &self.point {
            Some(agg) => agg.to_signature().to_bytes(),
            None => INFINITY_SIGNATURE,
        }
    }

    /// Decode an aggregate. The point at infinity decodes to the empty aggregate.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != SIGNATURE_BYTES_LEN {
            return Err(Error::InvalidByteLength {
                got: bytes.len(),
                expected: SIGNATURE_BYTES_LEN,
            });
        }
        if bytes == &INFINITY_SIGNATURE[..] {
            return Ok(Self::new());
        }
        let sig = Signature::from_bytes(bytes)?;
        Ok(Self {
            point: Some(blst_core::AggregateSignature::from_signature(sig.point())),
        })
    }

    /// Verify the aggregate against a message signed by every key in `aggregate_public_key`.
    pub fn verify(&self, msg: &[u8], aggregate_public_key: &AggregatePublicKey) -> bool {
        match &self.point {
            Some(agg) => Signature::from_point(agg.to_signature())
                .verify(msg, &aggregate_public_key.to_public_key()),
            None => false,
        }
    }
}

impl Default for AggregateSignature {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for AggregateSignature {
    fn eq(&self, other: &AggregateSignature) -> bool {
        self.as_bytes()[..] == other.as_bytes()[..]
    }
}

impl fmt::Debug for AggregateSignature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{}", hex::encode(&self.as_bytes()[..]))
    }
}

impl Encodable for AggregateSignature {
    fn ssz_append(&self, s: &mut SszStream) {
        s.append_encoded_raw(&self.as_bytes());
    }
}

impl Decodable for AggregateSignature {
    fn ssz_decode(bytes: &[u8], i: usize) -> Result<(Self, usize), DecodeError> {
        let end = i + SIGNATURE_BYTES_LEN;
        let slice = bytes.get(i..end).ok_or(DecodeError::TooShort)?;
        let agg_sig = AggregateSignature::from_bytes(slice)
            .map_err(|e| DecodeError::Invalid(format!("{:?}", e)))?;
        Ok((agg_sig, end))
    }
}

impl TreeHash for AggregateSignature {
    fn tree_hash(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

use super::ssz::{Decodable, DecodeError, Encodable, SszStream, TreeHash};
use super::{hash_record_fields, Hash256};

#[derive(Debug, Clone, PartialEq)]
pub struct CrosslinkRecord {
    pub dynasty: u64,
    pub slot: u64,
    pub hash: Hash256,
}

impl CrosslinkRecord {
    /// Generates a new instance where `dynasty`, `slot` and `hash` are all zero.
    pub fn zero() -> Self {
        Self {
            dynasty: 0,
            slot: 0,
            hash: Hash256::zero(),
        }
    }
}

impl Encodable for CrosslinkRecord {
    fn ssz_append(&self, s: &mut SszStream) {
        s.append(&self.dynasty);
        s.append(&self.slot);
        s.append(&self.hash);
    }
}

impl Decodable for CrosslinkRecord {
    fn ssz_decode(bytes: &[u8], i: usize) -> Result<(Self, usize), DecodeError> {
        let (dynasty, i) = <_>::ssz_decode(bytes, i)?;
        let (slot, i) = <_>::ssz_decode(bytes, i)?;
        let (hash, i) = <_>::ssz_decode(bytes, i)?;
        Ok((
            Self {
                dynasty,
                slot,
                hash,
            },
            i,
        ))
    }
}

impl TreeHash for CrosslinkRecord {
    fn tree_hash(&self) -> Vec<u8> {
        hash_record_fields(&[
            self.dynasty.tree_hash(),
            self.hash.tree_hash(),
            self.slot.tree_hash(),
        ])
    }
}

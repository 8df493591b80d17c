use super::ssz::{
    decode_length, decode_uint24, merkle_hash, uint24_bytes, Decodable, DecodeError, Encodable,
    SszStream, TreeHash, LENGTH_BYTES,
};
use super::hash_record_fields;

#[derive(Clone, Debug, PartialEq)]
pub struct ShardAndCommittee {
    pub shard_id: u16,
    /// Validator indices, in bitfield order. Each index is encoded as a `uint24`.
    pub committee: Vec<usize>,
}

impl ShardAndCommittee {
    /// Returns a new instance where the `shard_id` is zero and the
    /// committee is an empty vector.
    pub fn zero() -> Self {
        Self {
            shard_id: 0,
            committee: vec![],
        }
    }
}

impl Encodable for ShardAndCommittee {
    fn ssz_append(&self, s: &mut SszStream) {
        s.append(&self.shard_id);
        s.append_list_length(self.committee.len());
        for index in &self.committee {
            s.append_encoded_raw(&uint24_bytes(*index as u32));
        }
    }
}

impl Decodable for ShardAndCommittee {
    fn ssz_decode(bytes: &[u8], i: usize) -> Result<(Self, usize), DecodeError> {
        let (shard_id, i) = u16::ssz_decode(bytes, i)?;
        let count = decode_length(bytes, i, LENGTH_BYTES)?;
        let mut i = i + LENGTH_BYTES;
        if count.saturating_mul(3) > bytes.len().saturating_sub(i) {
            return Err(DecodeError::TooShort);
        }

        let mut committee = Vec::with_capacity(count);
        for _ in 0..count {
            let (index, next) = decode_uint24(bytes, i)?;
            committee.push(index as usize);
            i = next;
        }
        Ok((Self { shard_id, committee }, i))
    }
}

impl TreeHash for ShardAndCommittee {
    fn tree_hash(&self) -> Vec<u8> {
        let committee_items: Vec<Vec<u8>> = self
            .committee
            .iter()
            .map(|index| uint24_bytes(*index as u32).to_vec())
            .collect();
        hash_record_fields(&[merkle_hash(&committee_items), self.shard_id.tree_hash()])
    }
}

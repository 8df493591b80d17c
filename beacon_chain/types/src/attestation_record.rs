use super::bls::{AggregateSignature, SIGNATURE_BYTES_LEN};
use super::ssz::{Decodable, DecodeError, Encodable, SszStream, TreeHash};
use super::{hash_record_fields, Bitfield, Hash256};

pub const MIN_SSZ_ATTESTATION_RECORD_LENGTH: usize = {
    8 +             // slot
    2 +             // shard_id
    4 +             // oblique_parent_hashes (empty list)
    32 +            // shard_block_hash
    4 +             // attester_bitfield (empty)
    8 +             // justified_slot
    32 +            // justified_block_hash
    SIGNATURE_BYTES_LEN // aggregate sig
};

#[derive(Debug, Clone, PartialEq)]
pub struct AttestationRecord {
    pub slot: u64,
    pub shard_id: u16,
    pub oblique_parent_hashes: Vec<Hash256>,
    pub shard_block_hash: Hash256,
    pub attester_bitfield: Bitfield,
    pub justified_slot: u64,
    pub justified_block_hash: Hash256,
    pub aggregate_sig: AggregateSignature,
}

impl Encodable for AttestationRecord {
    fn ssz_append(&self, s: &mut SszStream) {
        s.append(&self.slot);
        s.append(&self.shard_id);
        s.append_vec(&self.oblique_parent_hashes);
        s.append(&self.shard_block_hash);
        s.append(&self.attester_bitfield);
        s.append(&self.justified_slot);
        s.append(&self.justified_block_hash);
        s.append(&self.aggregate_sig);
    }
}

impl Decodable for AttestationRecord {
    fn ssz_decode(bytes: &[u8], i: usize) -> Result<(Self, usize), DecodeError> {
        let (slot, i) = <_>::ssz_decode(bytes, i)?;
        let (shard_id, i) = <_>::ssz_decode(bytes, i)?;
        let (oblique_parent_hashes, i) = <_>::ssz_decode(bytes, i)?;
        let (shard_block_hash, i) = <_>::ssz_decode(bytes, i)?;
        let (attester_bitfield, i) = <_>::ssz_decode(bytes, i)?;
        let (justified_slot, i) = <_>::ssz_decode(bytes, i)?;
        let (justified_block_hash, i) = <_>::ssz_decode(bytes, i)?;
        let (aggregate_sig, i) = <_>::ssz_decode(bytes, i)?;

        let attestation_record = Self {
            slot,
            shard_id,
            oblique_parent_hashes,
            shard_block_hash,
            attester_bitfield,
            justified_slot,
            justified_block_hash,
            aggregate_sig,
        };
        Ok((attestation_record, i))
    }
}

impl TreeHash for AttestationRecord {
    fn tree_hash(&self) -> Vec<u8> {
        hash_record_fields(&[
            self.aggregate_sig.tree_hash(),
            self.attester_bitfield.tree_hash(),
            self.justified_block_hash.tree_hash(),
            self.justified_slot.tree_hash(),
            self.oblique_parent_hashes.tree_hash(),
            self.shard_block_hash.tree_hash(),
            self.shard_id.tree_hash(),
            self.slot.tree_hash(),
        ])
    }
}

impl AttestationRecord {
    pub fn zero() -> Self {
        Self {
            slot: 0,
            shard_id: 0,
            oblique_parent_hashes: vec![],
            shard_block_hash: Hash256::zero(),
            attester_bitfield: Bitfield::new(),
            justified_slot: 0,
            justified_block_hash: Hash256::zero(),
            aggregate_sig: AggregateSignature::new(),
        }
    }
}

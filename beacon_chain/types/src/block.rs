use super::ssz::{ssz_encode, Decodable, DecodeError, Encodable, SszStream, TreeHash};
use super::{hash256, hash_record_fields, AttestationRecord, Hash256};

#[derive(Debug, PartialEq, Clone)]
pub struct Block {
    pub parent_hash: Hash256,
    pub slot_number: u64,
    pub randao_reveal: Hash256,
    pub attestations: Vec<AttestationRecord>,
    pub pow_chain_ref: Hash256,
    pub active_state_root: Hash256,
    pub crystallized_state_root: Hash256,
}

impl Block {
    pub fn zero() -> Self {
        Self {
            parent_hash: Hash256::zero(),
            slot_number: 0,
            randao_reveal: Hash256::zero(),
            attestations: vec![],
            pow_chain_ref: Hash256::zero(),
            active_state_root: Hash256::zero(),
            crystallized_state_root: Hash256::zero(),
        }
    }

    /// The hash which identifies this block: `H(ssz(block))`.
    pub fn canonical_hash(&self) -> Hash256 {
        hash256(&ssz_encode(self))
    }
}

impl Encodable for Block {
    fn ssz_append(&self, s: &mut SszStream) {
        s.append(&self.parent_hash);
        s.append(&self.slot_number);
        s.append(&self.randao_reveal);
        s.append_vec(&self.attestations);
        s.append(&self.pow_chain_ref);
        s.append(&self.active_state_root);
        s.append(&self.crystallized_state_root);
    }
}

impl Decodable for Block {
    fn ssz_decode(bytes: &[u8], i: usize) -> Result<(Self, usize), DecodeError> {
        let (parent_hash, i) = <_>::ssz_decode(bytes, i)?;
        let (slot_number, i) = <_>::ssz_decode(bytes, i)?;
        let (randao_reveal, i) = <_>::ssz_decode(bytes, i)?;
        let (attestations, i) = <_>::ssz_decode(bytes, i)?;
        let (pow_chain_ref, i) = <_>::ssz_decode(bytes, i)?;
        let (active_state_root, i) = <_>::ssz_decode(bytes, i)?;
        let (crystallized_state_root, i) = <_>::ssz_decode(bytes, i)?;

        Ok((
            Self {
                parent_hash,
                slot_number,
                randao_reveal,
                attestations,
                pow_chain_ref,
                active_state_root,
                crystallized_state_root,
            },
            i,
        ))
    }
}

impl TreeHash for Block {
    fn tree_hash(&self) -> Vec<u8> {
        hash_record_fields(&[
            self.active_state_root.tree_hash(),
            self.attestations.tree_hash(),
            self.crystallized_state_root.tree_hash(),
            self.parent_hash.tree_hash(),
            self.pow_chain_ref.tree_hash(),
            self.randao_reveal.tree_hash(),
            self.slot_number.tree_hash(),
        ])
    }
}

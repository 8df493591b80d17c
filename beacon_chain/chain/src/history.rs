use attestation_validation::ChainHistory;
use std::collections::BTreeMap;
use types::Hash256;

/// The hashes of the blocks on the canonical chain, by slot.
#[derive(Debug, Clone, Default)]
pub struct CanonicalHistory {
    blocks: BTreeMap<u64, Hash256>,
}

impl CanonicalHistory {
    pub fn insert(&mut self, slot: u64, hash: Hash256) {
        self.blocks.insert(slot, hash);
    }
}

impl ChainHistory for CanonicalHistory {
    /// The hash of the latest canonical block at or before `slot`.
    fn block_hash_at_slot(&self, slot: u64) -> Option<Hash256> {
        self.blocks
            .range(..=slot)
            .next_back()
            .map(|(_, hash)| *hash)
    }
}

use super::ChainTester;
use attestation_validation::{
    attestation_signing_message, get_signed_parent_hashes, recent_block_hash, ChainHistory,
};
use beacon_chain::BlockStatus;
use bls::AggregateSignature;
use state_transition::{compute_state_transition_with_history, fill_recent_block_hashes};
use types::{AttestationRecord, Bitfield, Block, Hash256};

impl ChainTester {
    /// One fully signed attestation per committee of the head slot, for inclusion in a block
    /// at `slot`.
    pub fn attestations_for(&self, slot: u64) -> Vec<AttestationRecord> {
        let head = &self.chain.head;
        let cycle_length = self.chain.config.cycle_length;
        let attestation_slot = head.block.slot_number;
        let window = fill_recent_block_hashes(
            &head.active_state.recent_block_hashes,
            attestation_slot,
            slot,
            head.head_hash,
        );

        let state = &head.crystallized_state;
        let justified_slot = state.last_justified_slot;
        let justified_block_hash =
            recent_block_hash(&window, slot, cycle_length, justified_slot as i64)
                .or_else(|| self.chain.canonical.block_hash_at_slot(justified_slot))
                .unwrap();

        let index = attestation_slot + cycle_length - state.last_state_recalc;
        state.shard_and_committee_for_slots[index as usize]
            .iter()
            .map(|sac| {
                let mut attestation = AttestationRecord {
                    slot: attestation_slot,
                    shard_id: sac.shard_id,
                    oblique_parent_hashes: vec![],
                    shard_block_hash: Hash256::from_low_u64_be(sac.shard_id as u64 + 1),
                    attester_bitfield: Bitfield::empty(sac.committee.len()),
                    justified_slot,
                    justified_block_hash,
                    aggregate_sig: AggregateSignature::new(),
                };
                let parent_hashes =
                    get_signed_parent_hashes(&window, slot, cycle_length, &attestation).unwrap();
                let message = attestation_signing_message(
                    attestation.slot,
                    &parent_hashes,
                    attestation.shard_id,
                    &attestation.shard_block_hash,
                    attestation.justified_slot,
                );
                for (bit, validator) in sac.committee.iter().enumerate() {
                    attestation.attester_bitfield.set_voted(bit);
                    attestation
                        .aggregate_sig
                        .add(&self.validator_keypairs[*validator].sk.sign(&message));
                }
                attestation
            })
            .collect()
    }

    /// Produce a fully attested block at `slot` on the head and import it.
    pub fn extend_to(&mut self, slot: u64) -> Block {
        let attestations = self.attestations_for(slot);
        let block = self
            .chain
            .produce_block(slot, attestations, Hash256::zero())
            .unwrap();
        assert_eq!(
            self.chain.process_block(block.clone()),
            Ok(BlockStatus::NewBlock)
        );
        block
    }

    /// Import fully attested blocks in every slot up to and including `slot`.
    pub fn extend_each_slot_to(&mut self, slot: u64) {
        while self.chain.head.block.slot_number < slot {
            self.extend_to(self.chain.head.block.slot_number + 1);
        }
    }

    /// A block without attestations at `slot` on top of any stored block, with correct roots.
    pub fn empty_block_on(&self, parent_hash: Hash256, slot: u64) -> Block {
        let parent_block = self.chain.store.get_block(&parent_hash).unwrap().clone();
        let (crystallized_state, active_state) =
            self.chain.states_for_block(&parent_hash).unwrap();

        let mut block = Block {
            parent_hash,
            slot_number: slot,
            randao_reveal: Hash256::zero(),
            attestations: vec![],
            pow_chain_ref: parent_block.pow_chain_ref,
            active_state_root: Hash256::zero(),
            crystallized_state_root: Hash256::zero(),
        };
        let (new_crystallized_state, new_active_state) = compute_state_transition_with_history(
            crystallized_state,
            active_state,
            &parent_block,
            &block,
            &self.chain.config,
            &self.chain.canonical,
        )
        .unwrap();

        block.active_state_root = new_active_state.canonical_hash();
        block.crystallized_state_root = if &new_crystallized_state == crystallized_state {
            parent_block.crystallized_state_root
        } else {
            new_crystallized_state.canonical_hash()
        };
        block
    }
}

use attestation_validation::{
    attestation_signing_message, get_signed_parent_hashes, recent_block_hash, ChainHistory,
};
use bls::{AggregateSignature, Keypair};
use state_transition::{
    compute_state_transition_with_history, fill_recent_block_hashes, genesis_block,
    genesis_states, StateTransitionError,
};
use std::collections::HashMap;
use types::{
    ActiveState, AttestationRecord, Bitfield, Block, ChainConfig, CrystallizedState, Hash256,
    ValidatorRecord,
};

pub const VALIDATOR_COUNT: u64 = 40;

/// The canonical block hash of every slot imported so far.
#[derive(Default)]
pub struct MapHistory(pub HashMap<u64, Hash256>);

impl ChainHistory for MapHistory {
    fn block_hash_at_slot(&self, slot: u64) -> Option<Hash256> {
        self.0.get(&slot).copied()
    }
}

/// A single chain built on a genesis of `VALIDATOR_COUNT` validators, where every committee
/// attests in every slot.
pub struct ChainRig {
    pub config: ChainConfig,
    pub keypairs: Vec<Keypair>,
    pub crystallized_state: CrystallizedState,
    pub active_state: ActiveState,
    pub head: Block,
    pub history: MapHistory,
}

impl ChainRig {
    pub fn new() -> Self {
        let config = ChainConfig::minimal();
        let keypairs: Vec<Keypair> = (0..VALIDATOR_COUNT).map(Keypair::deterministic).collect();
        let validators = keypairs
            .iter()
            .map(|kp| ValidatorRecord {
                pubkey: kp.pk.clone(),
                withdrawal_shard: 0,
                withdrawal_address: Default::default(),
                randao_commitment: Hash256::zero(),
                balance: config.deposit_size,
                start_dynasty: 1,
                end_dynasty: config.default_end_dynasty,
            })
            .collect();

        let (crystallized_state, active_state) = genesis_states(validators, &config).unwrap();
        let head = genesis_block(&crystallized_state, &active_state);
        let mut history = MapHistory::default();
        history.0.insert(0, head.canonical_hash());

        Self {
            config,
            keypairs,
            crystallized_state,
            active_state,
            head,
            history,
        }
    }

    /// The `recent_block_hashes` window a child of the head at `slot` will see.
    fn window_for(&self, slot: u64) -> Vec<Hash256> {
        fill_recent_block_hashes(
            &self.active_state.recent_block_hashes,
            self.head.slot_number,
            slot,
            self.head.canonical_hash(),
        )
    }

    /// One fully signed attestation per committee of the head slot, for inclusion in a block
    /// at `slot`.
    pub fn attestations_for(&self, slot: u64) -> Vec<AttestationRecord> {
        let cycle_length = self.config.cycle_length;
        let attestation_slot = self.head.slot_number;
        let window = self.window_for(slot);

        let state = &self.crystallized_state;
        let justified_slot = state.last_justified_slot;
        let justified_block_hash =
            recent_block_hash(&window, slot, cycle_length, justified_slot as i64)
                .or_else(|| self.history.block_hash_at_slot(justified_slot))
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
                        .add(&self.keypairs[*validator].sk.sign(&message));
                }
                attestation
            })
            .collect()
    }

    pub fn build_block(&self, slot: u64, attestations: Vec<AttestationRecord>) -> Block {
        Block {
            parent_hash: self.head.canonical_hash(),
            slot_number: slot,
            randao_reveal: Hash256::zero(),
            attestations,
            pow_chain_ref: Hash256::zero(),
            active_state_root: Hash256::zero(),
            crystallized_state_root: Hash256::zero(),
        }
    }

    /// Apply `block` and make it the new head.
    pub fn apply(&mut self, block: Block) -> Result<(), StateTransitionError> {
        let (crystallized_state, active_state) = compute_state_transition_with_history(
            &self.crystallized_state,
            &self.active_state,
            &self.head,
            &block,
            &self.config,
            &self.history,
        )?;

        let mut block = block;
        block.active_state_root = active_state.canonical_hash();
        block.crystallized_state_root = crystallized_state.canonical_hash();

        let parent_hash = self.head.canonical_hash();
        for skipped in self.head.slot_number + 1..block.slot_number {
            self.history.0.insert(skipped, parent_hash);
        }
        self.history
            .0
            .insert(block.slot_number, block.canonical_hash());

        self.crystallized_state = crystallized_state;
        self.active_state = active_state;
        self.head = block;
        Ok(())
    }

    /// Produce and apply a fully attested block at `slot`.
    pub fn extend_to(&mut self, slot: u64) {
        let attestations = self.attestations_for(slot);
        let block = self.build_block(slot, attestations);
        self.apply(block).unwrap();
    }

    /// Produce and apply fully attested blocks in every slot up to and including `slot`.
    pub fn extend_each_slot_to(&mut self, slot: u64) {
        while self.head.slot_number < slot {
            self.extend_to(self.head.slot_number + 1);
            self.assert_invariants();
        }
    }

    pub fn assert_invariants(&self) {
        let window = 2 * self.config.cycle_length as usize;
        let state = &self.crystallized_state;
        assert_eq!(state.shard_and_committee_for_slots.len(), window);
        assert_eq!(self.active_state.recent_block_hashes.len(), window);
        assert!(state.last_finalized_slot <= state.last_justified_slot);
        assert!(state.last_justified_slot <= state.last_state_recalc);
        for index in state
            .shard_and_committee_for_slots
            .iter()
            .flatten()
            .flat_map(|sac| sac.committee.iter())
        {
            assert!(*index < state.validators.len());
        }
    }
}

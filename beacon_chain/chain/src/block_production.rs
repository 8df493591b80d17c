use super::block_processing::crystallized_state_root;
use super::{BeaconChain, BeaconChainError};
use state_transition::compute_state_transition_with_history;
use types::{AttestationRecord, Block, Hash256};

impl BeaconChain {
    /// Produce a block at `slot` on top of the present head, committing to the states that
    /// result from it.
    ///
    /// The block references the same proof-of-work block as the head.
    pub fn produce_block(
        &self,
        slot: u64,
        attestations: Vec<AttestationRecord>,
        randao_reveal: Hash256,
    ) -> Result<Block, BeaconChainError> {
        let parent_block = &self.head.block;

        let mut block = Block {
            parent_hash: self.head.head_hash,
            slot_number: slot,
            randao_reveal,
            attestations,
            pow_chain_ref: parent_block.pow_chain_ref,
            active_state_root: Hash256::zero(),
            crystallized_state_root: Hash256::zero(),
        };

        let (crystallized_state, active_state) = compute_state_transition_with_history(
            &self.head.crystallized_state,
            &self.head.active_state,
            parent_block,
            &block,
            &self.config,
            &self.canonical,
        )?;

        block.active_state_root = active_state.canonical_hash();
        block.crystallized_state_root = crystallized_state_root(
            &crystallized_state,
            &self.head.crystallized_state,
            parent_block.crystallized_state_root,
        );

        Ok(block)
    }
}

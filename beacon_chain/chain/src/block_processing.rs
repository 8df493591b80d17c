use super::{BeaconChain, BeaconChainError, ChainHead};
use attestation_validation::ChainHistory;
use ssz::decode;
use state_transition::{compute_state_transition_with_history, BlockPrecondition};
use types::{ActiveState, Block, CrystallizedState, Hash256};

#[derive(Debug, PartialEq)]
pub enum BlockStatus {
    NewBlock,
    KnownBlock,
}

impl BeaconChain {
    /// Decode an SSZ-encoded block and import it.
    pub fn process_ssz_block(&mut self, bytes: &[u8]) -> Result<BlockStatus, BeaconChainError> {
        let block: Block = decode(bytes)?;
        self.process_block(block)
    }

    /// Import a block, computing its states from those of its parent.
    ///
    /// The block is rejected if its parent or proof-of-work reference is unknown, if the state
    /// transition fails, or if the state roots it declares differ from those computed. The head
    /// moves to the block when it extends the present head.
    pub fn process_block(&mut self, block: Block) -> Result<BlockStatus, BeaconChainError> {
        let block_hash = block.canonical_hash();

        if self.store.block_exists(&block_hash) {
            return Ok(BlockStatus::KnownBlock);
        }

        let parent_block = self
            .store
            .get_block(&block.parent_hash)
            .ok_or(BlockPrecondition::UnknownParent(block.parent_hash))?;

        if !self.pow_chain.contains(&block.pow_chain_ref) {
            return Err(BlockPrecondition::UnknownPowChainRef(block.pow_chain_ref).into());
        }

        let parent_active_state = self
            .store
            .get_active_state(&parent_block.active_state_root)
            .ok_or(BeaconChainError::MissingParentState(block.parent_hash))?;
        let parent_crystallized_state = self
            .store
            .get_crystallized_state(&parent_block.crystallized_state_root)
            .ok_or(BeaconChainError::MissingParentState(block.parent_hash))?;

        let (crystallized_state, active_state) = compute_state_transition_with_history(
            parent_crystallized_state,
            parent_active_state,
            parent_block,
            &block,
            &self.config,
            &self.canonical,
        )?;

        let active_state_root = active_state.canonical_hash();
        if active_state_root != block.active_state_root {
            return Err(BeaconChainError::InvalidActiveStateRoot {
                expected: active_state_root,
                got: block.active_state_root,
            });
        }

        let crystallized_state_root = crystallized_state_root(
            &crystallized_state,
            parent_crystallized_state,
            parent_block.crystallized_state_root,
        );
        if crystallized_state_root != block.crystallized_state_root {
            return Err(BeaconChainError::InvalidCrystallizedStateRoot {
                expected: crystallized_state_root,
                got: block.crystallized_state_root,
            });
        }

        let previous = self.head.crystallized_state.clone();
        let extends_head = block.parent_hash == self.head.head_hash;

        debug!(
            self.log,
            "Block imported";
            "slot" => block.slot_number,
            "attestations" => block.attestations.len(),
            "hash" => format!("{:?}", block_hash),
            "extends_head" => extends_head,
        );

        self.store.put_block(block_hash, block.clone());
        self.store
            .put_active_state(active_state_root, active_state.clone());
        self.store
            .put_crystallized_state(crystallized_state_root, crystallized_state.clone());

        if extends_head {
            self.canonical.insert(block.slot_number, block_hash);
            self.head = ChainHead {
                head_hash: block_hash,
                block,
                active_state,
                crystallized_state,
            };
            self.log_head_changes(&previous);
        }

        Ok(BlockStatus::NewBlock)
    }

    fn log_head_changes(&self, previous: &CrystallizedState) {
        let state = &self.head.crystallized_state;

        if state.last_state_recalc != previous.last_state_recalc {
            info!(
                self.log,
                "Cycle transition";
                "last_state_recalc" => state.last_state_recalc,
                "slot" => self.head.block.slot_number,
            );
        }
        if state.last_justified_slot != previous.last_justified_slot {
            info!(
                self.log,
                "Justified slot advanced";
                "justified_streak" => state.justified_streak,
                "last_justified_slot" => state.last_justified_slot,
            );
        }
        if state.last_finalized_slot != previous.last_finalized_slot {
            info!(
                self.log,
                "Finalized slot advanced";
                "last_finalized_slot" => state.last_finalized_slot,
            );
        }
        if state.current_dynasty != previous.current_dynasty {
            info!(
                self.log,
                "Dynasty transition";
                "active_validators" => state.active_validator_indices().len(),
                "dynasty_start" => state.dynasty_start,
                "dynasty" => state.current_dynasty,
            );
        }
    }

    /// The hash of the canonical block at or before `slot`.
    pub fn canonical_block_hash(&self, slot: u64) -> Option<Hash256> {
        self.canonical.block_hash_at_slot(slot)
    }

    /// The states committed to by a stored block.
    pub fn states_for_block(
        &self,
        block_hash: &Hash256,
    ) -> Option<(&CrystallizedState, &ActiveState)> {
        let block = self.store.get_block(block_hash)?;
        Some((
            self.store
                .get_crystallized_state(&block.crystallized_state_root)?,
            self.store.get_active_state(&block.active_state_root)?,
        ))
    }
}

/// The crystallized state root keeps the parent's root while the state is unchanged.
pub(crate) fn crystallized_state_root(
    state: &CrystallizedState,
    parent_state: &CrystallizedState,
    parent_root: Hash256,
) -> Hash256 {
    if state == parent_state {
        parent_root
    } else {
        state.canonical_hash()
    }
}

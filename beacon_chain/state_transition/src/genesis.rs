use super::transition::verify_validator_count;
use super::StateTransitionError;
use types::{
    ActiveState, Block, BlockVoteCache, ChainConfig, CrosslinkRecord, CrystallizedState, Hash256,
    ValidatorRecord,
};
use validator_shuffling::get_new_shuffling;

/// The dynasty in which the chain starts.
pub const GENESIS_DYNASTY: u64 = 1;

/// Build the states of a new chain over the given validators.
pub fn genesis_states(
    validators: Vec<ValidatorRecord>,
    config: &ChainConfig,
) -> Result<(CrystallizedState, ActiveState), StateTransitionError> {
    config.validate()?;
    verify_validator_count(validators.len())?;

    /*
     * Assign the validators to shards, using all zeros as the seed.
     *
     * The crystallized state stores two cycles, so the same assignment is repeated twice.
     */
    let dynasty_seed = Hash256::zero();
    let shard_and_committee_for_slots = {
        let cycle = get_new_shuffling(&dynasty_seed, &validators, GENESIS_DYNASTY, 0, config)?;
        let mut slots = cycle.clone();
        slots.extend(cycle);
        slots
    };

    let crystallized_state = CrystallizedState {
        validators,
        last_state_recalc: 0,
        shard_and_committee_for_slots,
        last_justified_slot: 0,
        justified_streak: 0,
        last_finalized_slot: 0,
        current_dynasty: GENESIS_DYNASTY,
        crosslink_records: vec![CrosslinkRecord::zero(); config.shard_count as usize],
        dynasty_seed,
        dynasty_start: 0,
    };

    let active_state = ActiveState {
        pending_attestations: vec![],
        recent_block_hashes: vec![Hash256::zero(); 2 * config.cycle_length as usize],
        block_vote_cache: BlockVoteCache::new(),
    };

    Ok((crystallized_state, active_state))
}

/// The block at slot 0, committing to the genesis states.
pub fn genesis_block(crystallized_state: &CrystallizedState, active_state: &ActiveState) -> Block {
    Block {
        parent_hash: Hash256::zero(),
        slot_number: 0,
        randao_reveal: Hash256::zero(),
        attestations: vec![],
        pow_chain_ref: Hash256::zero(),
        active_state_root: active_state.canonical_hash(),
        crystallized_state_root: crystallized_state.canonical_hash(),
    }
}

use crate::StateTransitionError;
use hashing::canonical_hash;
use types::{ChainConfig, CrystallizedState, Hash256, ShardAndCommittee};
use validator_shuffling::get_new_shuffling;

/// Returns `true` if the validator set may change: the dynasty has lasted long enough, something
/// was finalized during it and every scheduled shard was crosslinked during it.
pub fn should_change_dynasty(state: &CrystallizedState, config: &ChainConfig) -> bool {
    if state.last_state_recalc.saturating_sub(state.dynasty_start) < config.min_dynasty_length {
        return false;
    }

    if state.last_finalized_slot <= state.dynasty_start {
        return false;
    }

    state
        .shard_and_committee_for_slots
        .iter()
        .flatten()
        .all(|sac| {
            state
                .crosslink_records
                .get(sac.shard_id as usize)
                .map_or(false, |crosslink| crosslink.slot > state.dynasty_start)
        })
}

/// Begin a new dynasty if `should_change_dynasty` allows it.
///
/// Validators whose balance fell below `ejection_balance` leave the set and the committees of
/// the current cycle are reshuffled with the new seed.
pub fn process_dynasty_transition(
    state: &mut CrystallizedState,
    parent_hash: &Hash256,
    config: &ChainConfig,
) -> Result<(), StateTransitionError> {
    if !should_change_dynasty(state, config) {
        return Ok(());
    }

    state.current_dynasty += 1;
    state.dynasty_start = state.last_state_recalc;
    state.dynasty_seed = next_dynasty_seed(&state.dynasty_seed, parent_hash);

    let dynasty = state.current_dynasty;
    for validator in state
        .validators
        .iter_mut()
        .filter(|v| v.is_active_in(dynasty) && v.balance < config.ejection_balance)
    {
        validator.end_dynasty = dynasty;
    }

    let cycle_length = config.cycle_length as usize;
    let start_shard = next_start_shard(&state.shard_and_committee_for_slots, config.shard_count);
    let shuffling = get_new_shuffling(
        &state.dynasty_seed,
        &state.validators,
        dynasty,
        start_shard,
        config,
    )?;
    state.shard_and_committee_for_slots.truncate(cycle_length);
    state.shard_and_committee_for_slots.extend(shuffling);

    Ok(())
}

/// `H(seed || parent_hash)`.
pub fn next_dynasty_seed(seed: &Hash256, parent_hash: &Hash256) -> Hash256 {
    let mut preimage = Vec::with_capacity(64);
    preimage.extend_from_slice(seed.as_bytes());
    preimage.extend_from_slice(parent_hash.as_bytes());
    Hash256::from_slice(&canonical_hash(&preimage))
}

/// The shard following the last scheduled shard.
fn next_start_shard(
    shard_and_committee_for_slots: &[Vec<ShardAndCommittee>],
    shard_count: u16,
) -> u16 {
    shard_and_committee_for_slots
        .iter()
        .rev()
        .find_map(|slot| slot.last())
        .map_or(0, |sac| ((sac.shard_id as u32 + 1) % shard_count as u32) as u16)
}

use super::StateTransitionError;
use attestation_validation::{recent_block_hash, ChainHistory};
use std::collections::HashSet;
use types::{ActiveState, Block, ChainConfig, CrystallizedState, Hash256};

pub use crosslinks::process_crosslinks;
pub use dynasty::{process_dynasty_transition, should_change_dynasty};
pub use justification::{is_justified, process_justification_and_finalization};
pub use rewards::{process_rewards_and_penalties, Delta};

pub mod crosslinks;
pub mod dynasty;
pub mod justification;
pub mod rewards;

/// The votes for the canonical block of a slot leaving the committee window.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SlotVotes {
    /// Slots before genesis are negative.
    pub slot: i64,
    pub voters: HashSet<usize>,
    pub voted_deposits: u64,
}

/// Advance the states by a single cycle.
///
/// `block` is the block whose slot triggered the transition. Its `recent_block_hashes` window
/// resolves the canonical hashes of the retiring slots.
pub fn process_cycle<H: ChainHistory + ?Sized>(
    state: &mut CrystallizedState,
    active_state: &mut ActiveState,
    block: &Block,
    config: &ChainConfig,
    history: &H,
) -> Result<(), StateTransitionError> {
    let last_state_recalc = state.last_state_recalc;
    let total_deposits = state.total_deposits();
    let retiring = retiring_slot_votes(
        active_state,
        block.slot_number,
        last_state_recalc,
        config,
        history,
    );

    process_justification_and_finalization(
        state,
        &retiring,
        total_deposits,
        config.cycle_length,
    );
    process_crosslinks(state, &active_state.pending_attestations, config)?;
    process_rewards_and_penalties(
        state,
        &retiring,
        total_deposits,
        last_state_recalc,
        config,
    )?;

    active_state
        .pending_attestations
        .retain(|a| a.slot >= last_state_recalc);

    let cycle_length = config.cycle_length as usize;
    let current_cycle = state.shard_and_committee_for_slots[cycle_length..].to_vec();
    state.shard_and_committee_for_slots = current_cycle.clone();
    state.shard_and_committee_for_slots.extend(current_cycle);
    state.last_state_recalc = last_state_recalc + config.cycle_length;

    process_dynasty_transition(state, &block.parent_hash, config)?;

    Ok(())
}

/// Drop the vote cache entries for hashes which have left `recent_block_hashes`.
///
/// Must only run once every cycle triggered by a block has been processed, since a later cycle
/// may still resolve an older hash through the chain history.
pub fn prune_block_vote_cache(active_state: &mut ActiveState) {
    let recent: HashSet<Hash256> = active_state.recent_block_hashes.iter().copied().collect();
    active_state
        .block_vote_cache
        .retain(|hash, _| recent.contains(hash));
}

/// The votes for each of the slots `last_state_recalc - cycle_length .. last_state_recalc`.
///
/// A slot whose canonical hash is unknown gets no votes.
pub fn retiring_slot_votes<H: ChainHistory + ?Sized>(
    active_state: &ActiveState,
    block_slot: u64,
    last_state_recalc: u64,
    config: &ChainConfig,
    history: &H,
) -> Vec<SlotVotes> {
    let cycle_length = config.cycle_length as i64;
    let end = last_state_recalc as i64;

    (end - cycle_length..end)
        .map(|slot| {
            let hash = recent_block_hash(
                &active_state.recent_block_hashes,
                block_slot,
                config.cycle_length,
                slot,
            )
            .or_else(|| {
                u64::try_from(slot)
                    .ok()
                    .and_then(|slot| history.block_hash_at_slot(slot))
            });

            match hash.and_then(|hash| active_state.block_vote_cache.get(&hash)) {
                Some(entry) => SlotVotes {
                    slot,
                    voters: entry.voter_indices.clone(),
                    voted_deposits: entry.total_voter_deposits,
                },
                None => SlotVotes {
                    slot,
                    ..SlotVotes::default()
                },
            }
        })
        .collect()
}

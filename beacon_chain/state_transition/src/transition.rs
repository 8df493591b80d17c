use super::cycle::{process_cycle, prune_block_vote_cache};
use super::recent_block_hashes::fill_recent_block_hashes;
use super::{BlockPrecondition, StateTransitionError};
use attestation_validation::{
    update_block_vote_cache, AttestationValidationContext, ChainHistory, NoHistory, Outcome,
    ValidatedAttestation,
};
use rayon::prelude::*;
use std::sync::RwLock;
use types::{
    ActiveState, AttestationRecord, Block, ChainConfig, CrystallizedState,
    MAX_VALIDATOR_COUNT_LIMIT,
};

/// Compute the states which result from applying `block` on top of `parent_block`.
///
/// The given states are those of `parent_block` and are not modified. Justified hashes older
/// than the `recent_block_hashes` window cannot be resolved; see
/// `compute_state_transition_with_history`.
pub fn compute_state_transition(
    crystallized_state: &CrystallizedState,
    active_state: &ActiveState,
    parent_block: &Block,
    block: &Block,
    config: &ChainConfig,
) -> Result<(CrystallizedState, ActiveState), StateTransitionError> {
    compute_state_transition_with_history(
        crystallized_state,
        active_state,
        parent_block,
        block,
        config,
        &NoHistory,
    )
}

/// As `compute_state_transition`, resolving hashes older than the window through `history`.
pub fn compute_state_transition_with_history<H: ChainHistory + ?Sized>(
    crystallized_state: &CrystallizedState,
    active_state: &ActiveState,
    parent_block: &Block,
    block: &Block,
    config: &ChainConfig,
    history: &H,
) -> Result<(CrystallizedState, ActiveState), StateTransitionError> {
    config.validate()?;
    verify_preconditions(crystallized_state, active_state, parent_block, block, config)?;

    let recent_block_hashes = fill_recent_block_hashes(
        &active_state.recent_block_hashes,
        parent_block.slot_number,
        block.slot_number,
        block.parent_hash,
    );

    let validated_attestations = {
        let context = AttestationValidationContext {
            block_slot: block.slot_number,
            parent_block_slot: parent_block.slot_number,
            recent_block_hashes: &recent_block_hashes,
            crystallized_state,
            config,
            history,
        };
        validate_attestations(&context, &block.attestations)?
    };

    /*
     * Votes are applied in block order so the cache is independent of validation order.
     */
    let mut block_vote_cache = active_state.block_vote_cache.clone();
    for attestation in &validated_attestations {
        update_block_vote_cache(
            &mut block_vote_cache,
            attestation,
            &crystallized_state.validators,
        )?;
    }

    let mut pending_attestations = active_state.pending_attestations.clone();
    pending_attestations.extend_from_slice(&block.attestations);

    let mut active_state = ActiveState {
        pending_attestations,
        recent_block_hashes,
        block_vote_cache,
    };
    let mut crystallized_state = crystallized_state.clone();

    let mut cycles = 0;
    while block.slot_number >= crystallized_state.last_state_recalc + config.cycle_length {
        process_cycle(
            &mut crystallized_state,
            &mut active_state,
            block,
            config,
            history,
        )?;
        cycles += 1;
    }

    if cycles > 0 {
        prune_block_vote_cache(&mut active_state);
    }

    Ok((crystallized_state, active_state))
}

fn verify_preconditions(
    crystallized_state: &CrystallizedState,
    active_state: &ActiveState,
    parent_block: &Block,
    block: &Block,
    config: &ChainConfig,
) -> Result<(), BlockPrecondition> {
    if block.parent_hash != parent_block.canonical_hash() {
        return Err(BlockPrecondition::ParentHashMismatch);
    }

    if block.slot_number <= parent_block.slot_number {
        return Err(BlockPrecondition::SlotNotAfterParent {
            parent_slot: parent_block.slot_number,
            slot: block.slot_number,
        });
    }

    let window = 2 * config.cycle_length as usize;
    if active_state.recent_block_hashes.len() != window {
        return Err(BlockPrecondition::RecentBlockHashesLength {
            expected: window,
            got: active_state.recent_block_hashes.len(),
        });
    }
    if crystallized_state.shard_and_committee_for_slots.len() != window {
        return Err(BlockPrecondition::ShardAndCommitteeLength {
            expected: window,
            got: crystallized_state.shard_and_committee_for_slots.len(),
        });
    }
    if crystallized_state.crosslink_records.len() != config.shard_count as usize {
        return Err(BlockPrecondition::CrosslinkRecordCount {
            expected: config.shard_count as usize,
            got: crystallized_state.crosslink_records.len(),
        });
    }

    let validator_count = crystallized_state.validators.len();
    verify_validator_count(validator_count)?;
    if let Some(index) = crystallized_state
        .shard_and_committee_for_slots
        .iter()
        .flatten()
        .flat_map(|sac| sac.committee.iter())
        .find(|index| **index >= validator_count)
    {
        return Err(BlockPrecondition::CommitteeIndexOutOfBounds(*index));
    }

    if crystallized_state.last_finalized_slot > crystallized_state.last_justified_slot
        || crystallized_state.last_justified_slot > crystallized_state.last_state_recalc
    {
        return Err(BlockPrecondition::CheckpointOrdering);
    }

    Ok(())
}

/// Committee indices are serialized as `uint24`, so larger validator sets cannot be encoded.
pub(crate) fn verify_validator_count(count: usize) -> Result<(), BlockPrecondition> {
    if count as u64 > MAX_VALIDATOR_COUNT_LIMIT {
        return Err(BlockPrecondition::ValidatorCountTooLarge(count));
    }
    Ok(())
}

/// Validate every attestation in a block, returning the validated attestations in block order.
///
/// This uses the `rayon` library to do "sometimes" parallelization: if there are spare threads
/// the attestations are validated concurrently.
///
/// The `failure` variable holds the lowest index of an attestation known to be invalid. Any
/// thread reaching a later attestation skips it, while every earlier attestation is still
/// validated. The error reported is therefore always that of the first invalid attestation in
/// the block.
fn validate_attestations<H: ChainHistory + ?Sized>(
    context: &AttestationValidationContext<H>,
    attestations: &[AttestationRecord],
) -> Result<Vec<ValidatedAttestation>, StateTransitionError> {
    let failure: RwLock<Option<usize>> = RwLock::new(None);

    let results: Vec<Option<Result<ValidatedAttestation, StateTransitionError>>> = attestations
        .par_iter()
        .enumerate()
        .map(|(index, attestation)| {
            if let Ok(first_failure) = failure.read() {
                if matches!(*first_failure, Some(first) if first < index) {
                    return None;
                }
            }

            let result = match context.validate_attestation(attestation) {
                Ok(Outcome::Valid(validated)) => Ok(validated),
                Ok(Outcome::Invalid(reason)) => {
                    Err(StateTransitionError::AttestationInvalid { index, reason })
                }
                Err(e) => Err(StateTransitionError::from(e)),
            };

            if result.is_err() {
                if let Ok(mut first_failure) = failure.write() {
                    let first = first_failure.map_or(index, |first| first.min(index));
                    *first_failure = Some(first);
                }
            }
            Some(result)
        })
        .collect();

    failure
        .into_inner()
        .map_err(|_| StateTransitionError::RwLockPoisoned)?;

    results.into_iter().flatten().collect()
}

use crate::StateTransitionError;
use std::collections::{BTreeMap, BTreeSet};
use types::{
    AttestationRecord, ChainConfig, CrosslinkRecord, CrystallizedState, Hash256, ValidatorRecord,
};

/// Adopt a new crosslink for every shard whose committees in the retiring cycle attested to the
/// same shard block with at least two thirds of their balance.
///
/// A shard is crosslinked at most once per dynasty.
pub fn process_crosslinks(
    state: &mut CrystallizedState,
    pending_attestations: &[AttestationRecord],
    config: &ChainConfig,
) -> Result<(), StateTransitionError> {
    let last_state_recalc = state.last_state_recalc;
    let cycle_length = config.cycle_length;
    let retiring_committees = &state.shard_and_committee_for_slots[..cycle_length as usize];

    /*
     * Collect the distinct voters for each `(shard, shard_block_hash)`.
     */
    let mut tallies: BTreeMap<(u16, Hash256), BTreeSet<usize>> = BTreeMap::new();
    for attestation in pending_attestations
        .iter()
        .filter(|a| a.slot < last_state_recalc)
    {
        let index = attestation.slot as i64 - (last_state_recalc as i64 - cycle_length as i64);
        let committee = usize::try_from(index)
            .ok()
            .and_then(|i| retiring_committees.get(i))
            .and_then(|slot| slot.iter().find(|sac| sac.shard_id == attestation.shard_id));

        if let Some(sac) = committee {
            tallies
                .entry((attestation.shard_id, attestation.shard_block_hash))
                .or_default()
                .extend(
                    attestation
                        .attester_bitfield
                        .set_indices()
                        .filter_map(|bit| sac.committee.get(bit).copied()),
                );
        }
    }

    let mut shard_committees: BTreeMap<u16, BTreeSet<usize>> = BTreeMap::new();
    for sac in retiring_committees.iter().flatten() {
        shard_committees
            .entry(sac.shard_id)
            .or_default()
            .extend(sac.committee.iter().copied());
    }

    for ((shard_id, shard_block_hash), voters) in &tallies {
        let committee_balance = match shard_committees.get(shard_id) {
            Some(committee) => total_balance(&state.validators, committee)?,
            None => continue,
        };
        let voted_balance = total_balance(&state.validators, voters)?;

        let current_dynasty = state.current_dynasty;
        let crosslink = state
            .crosslink_records
            .get_mut(*shard_id as usize)
            .ok_or(StateTransitionError::UnknownShard(*shard_id))?;

        if committee_balance > 0
            && 3 * voted_balance as u128 >= 2 * committee_balance as u128
            && crosslink.dynasty < current_dynasty
        {
            *crosslink = CrosslinkRecord {
                dynasty: current_dynasty,
                slot: last_state_recalc + cycle_length,
                hash: *shard_block_hash,
            };
        }
    }

    Ok(())
}

fn total_balance(
    validators: &[ValidatorRecord],
    indices: &BTreeSet<usize>,
) -> Result<u64, StateTransitionError> {
    indices.iter().try_fold(0u64, |total, i| {
        validators
            .get(*i)
            .map(|v| total.saturating_add(v.balance))
            .ok_or(StateTransitionError::UnknownValidator(*i))
    })
}

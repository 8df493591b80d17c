use super::active_validator_indices::active_validator_indices;
use honey_badger_split::SplitExt;
use types::{ChainConfig, Hash256, ShardAndCommittee, ValidatorRecord};
use vec_shuffle::{shuffle, ShuffleErr};

type DelegatedCycle = Vec<Vec<ShardAndCommittee>>;

#[derive(Debug, PartialEq)]
pub enum ValidatorAssignmentError {
    ShuffleInputTooLarge { count: usize, max: u64 },
    Shuffle(ShuffleErr),
}

impl From<ShuffleErr> for ValidatorAssignmentError {
    fn from(e: ShuffleErr) -> ValidatorAssignmentError {
        ValidatorAssignmentError::Shuffle(e)
    }
}

/// Delegates active validators into slots for a single cycle, starting at `start_shard`.
///
/// Returns `cycle_length` lists of committees, one list per slot.
pub fn get_new_shuffling(
    seed: &Hash256,
    validators: &[ValidatorRecord],
    dynasty: u64,
    start_shard: u16,
    config: &ChainConfig,
) -> Result<DelegatedCycle, ValidatorAssignmentError> {
    let active = active_validator_indices(dynasty, validators);
    if active.len() as u64 > config.max_validator_count {
        return Err(ValidatorAssignmentError::ShuffleInputTooLarge {
            count: active.len(),
            max: config.max_validator_count,
        });
    }

    let cycle_length = config.cycle_length as usize;
    let (committees_per_slot, slots_per_committee) =
        committee_shape(active.len(), cycle_length, config.min_committee_size as usize);

    let shuffled = shuffle(seed.as_bytes(), active)?;
    Ok(generate_cycle(
        &shuffled,
        start_shard,
        cycle_length,
        committees_per_slot,
        slots_per_committee,
        config.shard_count,
    ))
}

/// Returns `(committees_per_slot, slots_per_committee)` for `active_count` validators.
///
/// Large validator sets are spread over several committees per slot. Small sets keep one
/// committee per slot and each shard is crosslinked every `slots_per_committee` slots.
fn committee_shape(
    active_count: usize,
    cycle_length: usize,
    min_committee_size: usize,
) -> (usize, usize) {
    let target = cycle_length * min_committee_size;
    if active_count >= target {
        (active_count / cycle_length / (min_committee_size * 2) + 1, 1)
    } else {
        let mut slots_per_committee = 1;
        while active_count * slots_per_committee < target && slots_per_committee < cycle_length {
            slots_per_committee *= 2;
        }
        (1, slots_per_committee)
    }
}

fn generate_cycle(
    shuffled: &[usize],
    start_shard: u16,
    cycle_length: usize,
    committees_per_slot: usize,
    slots_per_committee: usize,
    shard_count: u16,
) -> DelegatedCycle {
    shuffled
        .honey_badger_split(cycle_length)
        .enumerate()
        .map(|(i, slot_indices)| {
            let shard_offset = start_shard as usize + i * committees_per_slot / slots_per_committee;
            slot_indices
                .honey_badger_split(committees_per_slot)
                .enumerate()
                .map(|(j, committee)| ShardAndCommittee {
                    shard_id: ((shard_offset + j) % shard_count as usize) as u16,
                    committee: committee.to_vec(),
                })
                .collect()
        })
        .collect()
}

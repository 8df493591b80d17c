use super::SlotVotes;
use types::CrystallizedState;

/// Returns `true` if `voted_deposits` is at least two thirds of `total_deposits`.
///
/// Nothing is justified while there are no deposits.
pub fn is_justified(voted_deposits: u64, total_deposits: u64) -> bool {
    total_deposits > 0 && 3 * voted_deposits as u128 >= 2 * total_deposits as u128
}

/// Update the justified slot, the justified streak and the finalized slot from the votes of
/// the retiring slots, oldest first.
pub fn process_justification_and_finalization(
    state: &mut CrystallizedState,
    retiring: &[SlotVotes],
    total_deposits: u64,
    cycle_length: u64,
) {
    for slot_votes in retiring {
        if is_justified(slot_votes.voted_deposits, total_deposits) {
            if slot_votes.slot > state.last_justified_slot as i64 {
                state.last_justified_slot = slot_votes.slot as u64;
            }
            state.justified_streak += 1;
        } else {
            state.justified_streak = 0;
        }

        if state.justified_streak >= cycle_length + 1 {
            let finalized = slot_votes.slot - cycle_length as i64 - 1;
            if finalized > state.last_finalized_slot as i64 {
                state.last_finalized_slot = finalized as u64;
            }
        }
    }
}

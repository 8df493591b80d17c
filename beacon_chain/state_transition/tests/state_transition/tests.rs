use super::helpers::*;

use attestation_validation::Invalid;
use state_transition::{compute_state_transition, BlockPrecondition, StateTransitionError};
use types::Hash256;

#[test]
fn test_first_cycle_justifies_genesis_window() {
    let mut rig = ChainRig::new();

    rig.extend_each_slot_to(19);
    assert_eq!(rig.crystallized_state.last_state_recalc, 0);
    assert_eq!(rig.crystallized_state.justified_streak, 0);

    rig.extend_each_slot_to(20);
    let state = &rig.crystallized_state;
    assert_eq!(state.last_state_recalc, 20);
    assert_eq!(state.justified_streak, rig.config.cycle_length);
    assert_eq!(state.last_justified_slot, 0);
    assert_eq!(state.last_finalized_slot, 0);
}

#[test]
fn test_full_participation_finalizes() {
    let mut rig = ChainRig::new();

    rig.extend_each_slot_to(40);
    let state = &rig.crystallized_state;
    assert_eq!(state.last_state_recalc, 40);
    assert_eq!(state.justified_streak, 40);
    assert_eq!(state.last_justified_slot, 19);
    assert_eq!(state.last_finalized_slot, 0);

    // The justified slot now predates the window and resolves through the history.
    rig.extend_each_slot_to(60);
    let state = &rig.crystallized_state;
    assert_eq!(state.last_state_recalc, 60);
    assert_eq!(state.justified_streak, 60);
    assert_eq!(state.last_justified_slot, 39);
    assert_eq!(state.last_finalized_slot, 18);

    rig.extend_each_slot_to(80);
    let state = &rig.crystallized_state;
    assert_eq!(state.last_justified_slot, 59);
    assert_eq!(state.last_finalized_slot, 38);
}

#[test]
fn test_crosslinks_and_dynasty_transition() {
    let mut rig = ChainRig::new();

    rig.extend_each_slot_to(40);
    let state = &rig.crystallized_state;
    assert_eq!(state.current_dynasty, 1);
    // Shards 0, 1 and 2 are scheduled in the first cycle and each committee attested.
    for shard in 0..3 {
        let crosslink = &state.crosslink_records[shard];
        assert_eq!(crosslink.dynasty, 1);
        assert_eq!(crosslink.slot, 40);
        assert_eq!(crosslink.hash, Hash256::from_low_u64_be(shard as u64 + 1));
    }
    assert_eq!(state.crosslink_records[3].slot, 0);

    let seed_before = state.dynasty_seed;
    let parent_of_transition = {
        rig.extend_each_slot_to(59);
        rig.head.canonical_hash()
    };
    rig.extend_each_slot_to(60);
    let state = &rig.crystallized_state;
    assert_eq!(state.current_dynasty, 2);
    assert_eq!(state.dynasty_start, 60);
    assert_ne!(state.dynasty_seed, seed_before);
    assert_eq!(
        state.dynasty_seed,
        state_transition::cycle::dynasty::next_dynasty_seed(&seed_before, &parent_of_transition)
    );

    // Committees of the last cycle of dynasty 1 crosslink again in dynasty 2.
    rig.extend_each_slot_to(80);
    let state = &rig.crystallized_state;
    assert_eq!(state.current_dynasty, 2);
    for shard in 0..3 {
        assert_eq!(state.crosslink_records[shard].dynasty, 2);
        assert_eq!(state.crosslink_records[shard].slot, 80);
    }
}

#[test]
fn test_full_participation_is_rewarded() {
    let mut rig = ChainRig::new();
    let deposit_size = rig.config.deposit_size;

    /*
     * The committee of slot 19 signs no pre-genesis hash, so it is the only committee which
     * missed votes in the first cycle.
     */
    rig.extend_each_slot_to(20);
    let validators = &rig.crystallized_state.validators;
    let (rewarded, penalized): (Vec<_>, Vec<_>) =
        validators.iter().partition(|v| v.balance > deposit_size);
    assert_eq!(rewarded.len(), 38);
    assert_eq!(penalized.len(), 2);

    rig.extend_each_slot_to(40);
    assert!(rig.crystallized_state.total_deposits() > VALIDATOR_COUNT * deposit_size);
}

#[test]
fn test_vote_cache_only_holds_recent_hashes() {
    let mut rig = ChainRig::new();
    rig.extend_each_slot_to(40);

    let recent = &rig.active_state.recent_block_hashes;
    assert!(!rig.active_state.block_vote_cache.is_empty());
    for hash in rig.active_state.block_vote_cache.keys() {
        assert!(recent.contains(hash));
    }
}

#[test]
fn test_pending_attestations_are_retired() {
    let mut rig = ChainRig::new();
    rig.extend_each_slot_to(40);

    // Attestations for the cycle which just became the previous one are kept.
    let previous_cycle_start =
        rig.crystallized_state.last_state_recalc - rig.config.cycle_length;
    let pending = &rig.active_state.pending_attestations;
    assert!(pending.iter().all(|a| a.slot >= previous_cycle_start));
    assert!(pending.iter().any(|a| a.slot == previous_cycle_start));
}

#[test]
fn test_skipped_slots_run_every_cycle() {
    let mut rig = ChainRig::new();
    rig.extend_each_slot_to(10);

    rig.extend_to(45);
    let state = &rig.crystallized_state;
    assert_eq!(state.last_state_recalc, 40);
    rig.assert_invariants();

    // Skipped slots resolve to the parent block.
    let window = &rig.active_state.recent_block_hashes;
    let parent = rig.history.0[&10];
    assert_eq!(window[window.len() - 35..], vec![parent; 35][..]);

    rig.extend_each_slot_to(50);
}

#[test]
fn test_block_spanning_cycles_keeps_votes_for_later_cycles() {
    let mut rig = ChainRig::new();
    rig.extend_each_slot_to(59);
    assert_eq!(rig.crystallized_state.last_state_recalc, 40);
    assert_eq!(rig.crystallized_state.last_justified_slot, 19);

    // Block 100 runs the cycles retiring 20..40, 40..60 and 60..80. The hashes of slots
    // 40..60 are outside its window and resolve through the history.
    let block = rig.build_block(100, vec![]);
    rig.apply(block).unwrap();

    let state = &rig.crystallized_state;
    assert_eq!(state.last_state_recalc, 100);
    // Slot `s` in 40..60 was voted for by the committees of slots s..59, so 40..=45 still
    // hold a two-thirds majority.
    assert_eq!(state.last_justified_slot, 45);
    assert_eq!(state.last_finalized_slot, 45 - rig.config.cycle_length - 1);
    assert_eq!(state.justified_streak, 0);

    let recent = &rig.active_state.recent_block_hashes;
    for hash in rig.active_state.block_vote_cache.keys() {
        assert!(recent.contains(hash));
    }
    rig.assert_invariants();
}

#[test]
fn test_parent_states_are_not_modified() {
    let mut rig = ChainRig::new();
    rig.extend_each_slot_to(19);

    let crystallized_state = rig.crystallized_state.clone();
    let active_state = rig.active_state.clone();
    let block = rig.build_block(20, rig.attestations_for(20));

    let (new_crystallized_state, new_active_state) = compute_state_transition(
        &rig.crystallized_state,
        &rig.active_state,
        &rig.head,
        &block,
        &rig.config,
    )
    .unwrap();

    assert_eq!(rig.crystallized_state, crystallized_state);
    assert_eq!(rig.active_state, active_state);
    assert_ne!(new_crystallized_state, crystallized_state);
    assert_ne!(new_active_state, active_state);
}

#[test]
fn test_transition_is_deterministic() {
    let mut rig = ChainRig::new();
    rig.extend_each_slot_to(25);

    let block = rig.build_block(26, rig.attestations_for(26));
    let first = compute_state_transition(
        &rig.crystallized_state,
        &rig.active_state,
        &rig.head,
        &block,
        &rig.config,
    )
    .unwrap();
    let second = compute_state_transition(
        &rig.crystallized_state,
        &rig.active_state,
        &rig.head,
        &block,
        &rig.config,
    )
    .unwrap();
    assert_eq!(first, second);
    assert_eq!(first.0.canonical_hash(), second.0.canonical_hash());
}

#[test]
fn test_first_invalid_attestation_is_reported() {
    let mut rig = ChainRig::new();
    rig.extend_each_slot_to(5);

    let valid = rig.attestations_for(6).remove(0);
    let mut too_new = valid.clone();
    too_new.slot = 6;
    let mut bad_signature = valid.clone();
    bad_signature.shard_block_hash = Hash256::repeat_byte(0xee);

    let block = rig.build_block(6, vec![valid, too_new, bad_signature]);
    assert_eq!(
        rig.apply(block),
        Err(StateTransitionError::AttestationInvalid {
            index: 1,
            reason: Invalid::AttestationSlotOutOfRange,
        })
    );
    assert_eq!(rig.head.slot_number, 5);
}

#[test]
fn test_unjustified_slot_rejects_block() {
    let mut rig = ChainRig::new();
    rig.extend_each_slot_to(5);

    let mut attestations = rig.attestations_for(6);
    attestations[0].justified_slot = 1;
    let block = rig.build_block(6, attestations);

    assert_eq!(
        rig.apply(block),
        Err(StateTransitionError::AttestationInvalid {
            index: 0,
            reason: Invalid::AttestationJustificationInvalid,
        })
    );
}

#[test]
fn test_wrong_parent_hash() {
    let mut rig = ChainRig::new();
    rig.extend_each_slot_to(3);

    let mut block = rig.build_block(4, vec![]);
    block.parent_hash = Hash256::repeat_byte(1);

    assert_eq!(
        rig.apply(block),
        Err(StateTransitionError::BlockPreconditionFailed(
            BlockPrecondition::ParentHashMismatch
        ))
    );
}

#[test]
fn test_block_slot_must_advance() {
    let mut rig = ChainRig::new();
    rig.extend_each_slot_to(3);

    let block = rig.build_block(3, vec![]);
    assert_eq!(
        rig.apply(block),
        Err(StateTransitionError::BlockPreconditionFailed(
            BlockPrecondition::SlotNotAfterParent {
                parent_slot: 3,
                slot: 3
            }
        ))
    );
}

#[test]
fn test_malformed_parent_state() {
    let mut rig = ChainRig::new();
    rig.active_state.recent_block_hashes.pop();

    let block = rig.build_block(1, vec![]);
    assert_eq!(
        rig.apply(block),
        Err(StateTransitionError::BlockPreconditionFailed(
            BlockPrecondition::RecentBlockHashesLength {
                expected: 40,
                got: 39
            }
        ))
    );
}

#[test]
fn test_empty_blocks_do_not_justify() {
    let mut rig = ChainRig::new();
    rig.extend_each_slot_to(19);

    for slot in 20..=40 {
        let block = rig.build_block(slot, vec![]);
        rig.apply(block).unwrap();
    }

    // Slots 0..19 carry votes from the first cycle only up to slot 19.
    let state = &rig.crystallized_state;
    assert_eq!(state.last_state_recalc, 40);
    assert!(state.last_justified_slot < 19);
    assert_eq!(state.last_finalized_slot, 0);
}

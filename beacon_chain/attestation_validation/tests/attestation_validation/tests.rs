use super::helpers::*;

use attestation_validation::{Error, Invalid, Outcome, ValidatedAttestation};
use types::Hash256;

#[test]
fn test_attestation_validation_valid() {
    let rig = setup_attestation_validation_test(10, 2);

    let result = rig.context().validate_attestation(&rig.attestation);

    assert_eq!(
        result,
        Ok(Outcome::Valid(ValidatedAttestation {
            voters: vec![0, 1],
            parent_hashes: rig.parent_hashes_for(rig.attestation.slot),
        }))
    );
}

#[test]
fn test_attestation_validation_partial_committee() {
    let mut rig = setup_attestation_validation_test(10, 8);
    rig.sign_attestation(&[2, 5]);

    let result = rig.context().validate_attestation(&rig.attestation);

    match result {
        Ok(Outcome::Valid(validated)) => assert_eq!(validated.voters, vec![2, 5]),
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[test]
fn test_attestation_validation_invalid_slot_too_high() {
    let mut rig = setup_attestation_validation_test(10, 2);

    rig.attestation.slot = rig.parent_block_slot + 1;

    let result = rig.context().validate_attestation(&rig.attestation);
    assert_eq!(
        result,
        Ok(Outcome::Invalid(Invalid::AttestationSlotOutOfRange))
    );
}

#[test]
fn test_attestation_validation_invalid_slot_too_low() {
    let mut rig = setup_attestation_validation_test(10, 2);

    rig.attestation.slot = rig.parent_block_slot - rig.config.cycle_length;
    let result = rig.context().validate_attestation(&rig.attestation);
    assert_eq!(
        result,
        Ok(Outcome::Invalid(Invalid::AttestationSlotOutOfRange))
    );
}

#[test]
fn test_attestation_validation_oldest_allowed_slot() {
    let mut rig = setup_attestation_validation_test(10, 3);

    rig.attestation.slot = rig.parent_block_slot - rig.config.cycle_length + 1;
    rig.sign_attestation(&[0, 1, 2]);

    let result = rig.context().validate_attestation(&rig.attestation);
    assert!(matches!(result, Ok(Outcome::Valid(_))));
}

#[test]
fn test_attestation_validation_invalid_justified_slot_incorrect() {
    let mut rig = setup_attestation_validation_test(10, 2);

    rig.attestation.justified_slot = rig.crystallized_state.last_justified_slot + 1;
    rig.sign_attestation(&[0, 1]);

    let result = rig.context().validate_attestation(&rig.attestation);
    assert_eq!(
        result,
        Ok(Outcome::Invalid(Invalid::AttestationJustificationInvalid))
    );
}

#[test]
fn test_attestation_validation_invalid_unknown_justified_block_hash() {
    let mut rig = setup_attestation_validation_test(10, 2);

    rig.attestation.justified_block_hash = Hash256::repeat_byte(0xee);
    rig.sign_attestation(&[0, 1]);

    let result = rig.context().validate_attestation(&rig.attestation);
    assert_eq!(
        result,
        Ok(Outcome::Invalid(Invalid::AttestationJustificationInvalid))
    );
}

#[test]
fn test_attestation_validation_justified_hash_from_history() {
    let mut rig = setup_attestation_validation_test(10, 2);

    let old_hash = Hash256::repeat_byte(0x42);
    rig.attestation.justified_slot = 64;
    rig.attestation.justified_block_hash = old_hash;
    rig.sign_attestation(&[0, 1]);

    // Older than the window and unknown to the history.
    let result = rig.context().validate_attestation(&rig.attestation);
    assert_eq!(
        result,
        Ok(Outcome::Invalid(Invalid::AttestationJustificationInvalid))
    );

    rig.history.0.insert(64, old_hash);
    let result = rig.context().validate_attestation(&rig.attestation);
    assert!(matches!(result, Ok(Outcome::Valid(_))));
}

#[test]
fn test_attestation_validation_invalid_no_committee_for_shard() {
    let mut rig = setup_attestation_validation_test(10, 2);

    rig.attestation.shard_id = 11;
    rig.sign_attestation(&[0, 1]);

    let result = rig.context().validate_attestation(&rig.attestation);
    assert_eq!(
        result,
        Ok(Outcome::Invalid(Invalid::NoCommitteeForShard))
    );
}

#[test]
fn test_attestation_validation_invalid_committee_slot_not_in_state() {
    let mut rig = setup_attestation_validation_test(10, 2);

    rig.crystallized_state.last_state_recalc += 2 * rig.config.cycle_length;

    let result = rig.context().validate_attestation(&rig.attestation);
    assert_eq!(
        result,
        Ok(Outcome::Invalid(Invalid::AttestationSlotOutOfRange))
    );
}

#[test]
fn test_attestation_validation_invalid_bad_bitfield_length() {
    let mut rig = setup_attestation_validation_test(10, 2);

    /*
     * Extend the bitfield by one byte
     *
     * This is a little hacky and makes assumptions about the internals
     * of the bitfield.
     */
    let mut bytes = rig.attestation.attester_bitfield.to_bytes();
    bytes.push(0);
    rig.attestation.attester_bitfield = types::Bitfield::from_bytes(&bytes);

    let result = rig.context().validate_attestation(&rig.attestation);
    assert_eq!(
        result,
        Ok(Outcome::Invalid(Invalid::AttestationBitfieldInvalid))
    );
}

#[test]
fn test_attestation_validation_invalid_trailing_bit_set() {
    let mut rig = setup_attestation_validation_test(10, 10);

    rig.attestation.attester_bitfield.set_voted(15);

    let result = rig.context().validate_attestation(&rig.attestation);
    assert_eq!(
        result,
        Ok(Outcome::Invalid(Invalid::AttestationBitfieldInvalid))
    );
}

#[test]
fn test_attestation_validation_invalid_bad_signature() {
    let mut rig = setup_attestation_validation_test(10, 3);

    /*
     * Claim a vote from a validator who did not sign.
     */
    rig.sign_attestation(&[0, 1]);
    rig.attestation.attester_bitfield.set_voted(2);

    let result = rig.context().validate_attestation(&rig.attestation);
    assert_eq!(
        result,
        Ok(Outcome::Invalid(Invalid::AttestationSignatureInvalid))
    );
}

#[test]
fn test_attestation_validation_invalid_signed_other_message() {
    let mut rig = setup_attestation_validation_test(10, 3);

    rig.attestation.shard_block_hash = Hash256::repeat_byte(0x01);

    let result = rig.context().validate_attestation(&rig.attestation);
    assert_eq!(
        result,
        Ok(Outcome::Invalid(Invalid::AttestationSignatureInvalid))
    );
}

#[test]
fn test_attestation_validation_invalid_no_voters() {
    let mut rig = setup_attestation_validation_test(10, 3);

    rig.sign_attestation(&[]);

    let result = rig.context().validate_attestation(&rig.attestation);
    assert_eq!(
        result,
        Ok(Outcome::Invalid(Invalid::AttestationSignatureInvalid))
    );
}

#[test]
fn test_attestation_validation_unknown_validator() {
    let mut rig = setup_attestation_validation_test(10, 2);

    rig.crystallized_state.validators.truncate(1);

    let result = rig.context().validate_attestation(&rig.attestation);
    assert_eq!(result, Err(Error::UnknownValidator(1)));
}

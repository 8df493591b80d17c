use super::{Error, Invalid, Outcome};
use boolean_bitfield::BooleanBitfield;

/// Check that the bitfield is exactly as long as the committee requires and that no bit past the
/// end of the committee is set.
pub fn validate_attester_bitfield(
    bitfield: &BooleanBitfield,
    committee_len: usize,
) -> Result<Outcome<()>, Error> {
    verify_or!(
        bitfield.num_bytes() == BooleanBitfield::bytes_for(committee_len),
        reject!(Invalid::AttestationBitfieldInvalid)
    );

    verify_or!(
        bitfield
            .highest_set_bit()
            .map_or(true, |highest| highest < committee_len),
        reject!(Invalid::AttestationBitfieldInvalid)
    );

    accept!()
}

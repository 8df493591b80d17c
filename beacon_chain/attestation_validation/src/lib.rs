extern crate bls;
extern crate boolean_bitfield;
extern crate hashing;
extern crate ssz;
extern crate types;

#[macro_use]
mod macros;
mod context;
mod enums;
mod history;
mod message;
mod validate_bitfield;
mod validate_for_block;
mod validate_justification;
mod validate_signature;
mod vote_cache;

pub use crate::context::{AttestationValidationContext, ValidatedAttestation};
pub use crate::enums::{Error, Invalid, Outcome};
pub use crate::history::{recent_block_hash, ChainHistory, NoHistory};
pub use crate::message::{attestation_signing_message, get_signed_parent_hashes};
pub use crate::validate_bitfield::validate_attester_bitfield;
pub use crate::validate_for_block::validate_attestation_for_block;
pub use crate::validate_justification::validate_justification;
pub use crate::validate_signature::validate_attestation_signature;
pub use crate::vote_cache::update_block_vote_cache;

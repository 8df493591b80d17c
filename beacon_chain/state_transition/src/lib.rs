extern crate attestation_validation;
extern crate hashing;
extern crate integer_sqrt;
extern crate rayon;
extern crate types;
extern crate validator_shuffling;

pub mod cycle;
mod errors;
mod genesis;
mod recent_block_hashes;
mod transition;

pub use crate::errors::{BlockPrecondition, StateTransitionError};
pub use crate::genesis::{genesis_block, genesis_states, GENESIS_DYNASTY};
pub use crate::recent_block_hashes::fill_recent_block_hashes;
pub use crate::transition::{compute_state_transition, compute_state_transition_with_history};

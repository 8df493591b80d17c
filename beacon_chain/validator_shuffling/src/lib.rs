extern crate honey_badger_split;
extern crate types;
extern crate vec_shuffle;

mod active_validator_indices;
mod shuffle;

pub use crate::active_validator_indices::active_validator_indices;
pub use crate::shuffle::{get_new_shuffling, ValidatorAssignmentError};

extern crate bls;
extern crate types;

mod inductor;
mod registration;

pub use crate::inductor::{ValidatorInductionError, ValidatorInductor};
pub use crate::registration::ValidatorRegistration;

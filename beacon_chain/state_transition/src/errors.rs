use attestation_validation::{Error as AttestationValidationError, Invalid};
use types::{ChainConfigError, Hash256};
use validator_shuffling::ValidatorAssignmentError;

/// A block which cannot be applied to its parent at all.
#[derive(Debug, PartialEq)]
pub enum BlockPrecondition {
    UnknownParent(Hash256),
    UnknownPowChainRef(Hash256),
    ParentHashMismatch,
    SlotNotAfterParent { parent_slot: u64, slot: u64 },
    RecentBlockHashesLength { expected: usize, got: usize },
    ShardAndCommitteeLength { expected: usize, got: usize },
    CrosslinkRecordCount { expected: usize, got: usize },
    CommitteeIndexOutOfBounds(usize),
    /// More validator records than a `uint24` committee index can address.
    ValidatorCountTooLarge(usize),
    /// `last_finalized_slot <= last_justified_slot <= last_state_recalc` does not hold.
    CheckpointOrdering,
}

#[derive(Debug, PartialEq)]
pub enum StateTransitionError {
    BlockPreconditionFailed(BlockPrecondition),
    InvalidConfig(ChainConfigError),
    /// The attestation at `index` in the block was rejected.
    AttestationInvalid { index: usize, reason: Invalid },
    AttestationValidation(AttestationValidationError),
    ValidatorAssignment(ValidatorAssignmentError),
    UnknownValidator(usize),
    UnknownShard(u16),
    RwLockPoisoned,
}

impl From<BlockPrecondition> for StateTransitionError {
    fn from(e: BlockPrecondition) -> StateTransitionError {
        StateTransitionError::BlockPreconditionFailed(e)
    }
}

impl From<AttestationValidationError> for StateTransitionError {
    fn from(e: AttestationValidationError) -> StateTransitionError {
        match e {
            AttestationValidationError::UnknownValidator(i) => {
                StateTransitionError::UnknownValidator(i)
            }
            e => StateTransitionError::AttestationValidation(e),
        }
    }
}

impl From<ValidatorAssignmentError> for StateTransitionError {
    fn from(e: ValidatorAssignmentError) -> StateTransitionError {
        StateTransitionError::ValidatorAssignment(e)
    }
}

impl From<ChainConfigError> for StateTransitionError {
    fn from(e: ChainConfigError) -> StateTransitionError {
        StateTransitionError::InvalidConfig(e)
    }
}

use ssz::{DecodeError, SerializationError};
use state_transition::{BlockPrecondition, StateTransitionError};
use types::Hash256;

#[derive(Debug, PartialEq)]
pub enum BeaconChainError {
    BlockPreconditionFailed(BlockPrecondition),
    /// The block's parent is known but its states are not.
    MissingParentState(Hash256),
    InvalidActiveStateRoot { expected: Hash256, got: Hash256 },
    InvalidCrystallizedStateRoot { expected: Hash256, got: Hash256 },
    SerializationError(SerializationError),
    StateTransition(StateTransitionError),
}

impl From<BlockPrecondition> for BeaconChainError {
    fn from(e: BlockPrecondition) -> BeaconChainError {
        BeaconChainError::BlockPreconditionFailed(e)
    }
}

impl From<StateTransitionError> for BeaconChainError {
    fn from(e: StateTransitionError) -> BeaconChainError {
        match e {
            StateTransitionError::BlockPreconditionFailed(e) => {
                BeaconChainError::BlockPreconditionFailed(e)
            }
            e => BeaconChainError::StateTransition(e),
        }
    }
}

impl From<SerializationError> for BeaconChainError {
    fn from(e: SerializationError) -> BeaconChainError {
        BeaconChainError::SerializationError(e)
    }
}

impl From<DecodeError> for BeaconChainError {
    fn from(e: DecodeError) -> BeaconChainError {
        BeaconChainError::SerializationError(SerializationError::from(e))
    }
}

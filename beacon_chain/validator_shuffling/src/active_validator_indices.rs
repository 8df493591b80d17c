use types::ValidatorRecord;

/// Returns the indices of each validator active in `dynasty`.
pub fn active_validator_indices(dynasty: u64, validators: &[ValidatorRecord]) -> Vec<usize> {
    validators
        .iter()
        .enumerate()
        .filter_map(|(i, validator)| {
            if validator.is_active_in(dynasty) {
                Some(i)
            } else {
                None
            }
        })
        .collect()
}

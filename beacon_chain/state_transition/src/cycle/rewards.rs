use super::SlotVotes;
use crate::StateTransitionError;
use integer_sqrt::IntegerSquareRoot;
use types::{ChainConfig, CrystallizedState};

/// The rewards and penalties owed to one validator.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct Delta {
    pub rewards: u64,
    pub penalties: u64,
}

impl Delta {
    pub fn reward(&mut self, amount: u64) {
        self.rewards = self.rewards.saturating_add(amount);
    }

    pub fn penalize(&mut self, amount: u64) {
        self.penalties = self.penalties.saturating_add(amount);
    }

    pub fn combine(&mut self, other: Delta) {
        self.reward(other.rewards);
        self.penalize(other.penalties);
    }

    /// The balance after applying the delta, clamped to `0..=u64::MAX`.
    pub fn apply(&self, balance: u64) -> u64 {
        let balance = balance as i128 + self.rewards as i128 - self.penalties as i128;
        balance.clamp(0, u64::MAX as i128) as u64
    }
}

/// `max(1, base_reward_quotient * isqrt(total_deposits / gwei_per_eth))`.
pub fn reward_quotient(total_deposits: u64, config: &ChainConfig) -> u64 {
    let total_eth = total_deposits / config.gwei_per_eth.max(1);
    config
        .base_reward_quotient
        .saturating_mul(total_eth.integer_sqrt())
        .max(1)
}

/// `max(1, isqrt(sqrt_e_drop_time / slot_duration))`.
pub fn quadratic_penalty_quotient(config: &ChainConfig) -> u64 {
    (config.sqrt_e_drop_time / config.slot_duration.max(1))
        .integer_sqrt()
        .max(1)
}

/// Reward the voters and penalize the non-voters of every retiring slot.
///
/// All deltas are computed from the balances as they were at the start of the cycle and applied
/// once. While finality is recent (`last_state_recalc - last_finalized_slot <= 2 *
/// cycle_length`) voters earn a share of the base reward proportional to the voting deposits
/// and non-voters lose the base reward. Otherwise voters are left as they are and non-voters
/// additionally suffer a penalty growing with the time since finality.
pub fn process_rewards_and_penalties(
    state: &mut CrystallizedState,
    retiring: &[SlotVotes],
    total_deposits: u64,
    last_state_recalc: u64,
    config: &ChainConfig,
) -> Result<(), StateTransitionError> {
    if total_deposits == 0 {
        return Ok(());
    }

    let reward_quotient = reward_quotient(total_deposits, config) as u128;
    let quadratic_penalty_quotient = quadratic_penalty_quotient(config) as u128;
    let time_since_finality = last_state_recalc.saturating_sub(state.last_finalized_slot);
    let finality_is_recent = time_since_finality <= 2 * config.cycle_length;

    let active = state.active_validator_indices();
    let mut deltas = vec![Delta::default(); state.validators.len()];

    for slot_votes in retiring {
        for &index in &active {
            let balance = state
                .validators
                .get(index)
                .ok_or(StateTransitionError::UnknownValidator(index))?
                .balance as u128;
            let base_reward = balance / reward_quotient;
            let voted = slot_votes.voters.contains(&index);

            let mut delta = Delta::default();
            if finality_is_recent {
                if voted {
                    let reward =
                        base_reward * slot_votes.voted_deposits as u128 / total_deposits as u128;
                    delta.reward(saturate(reward));
                } else {
                    delta.penalize(saturate(base_reward));
                }
            } else if !voted {
                let quadratic_penalty = balance * time_since_finality as u128
                    / (quadratic_penalty_quotient * quadratic_penalty_quotient);
                delta.penalize(saturate(base_reward + quadratic_penalty));
            }

            deltas
                .get_mut(index)
                .ok_or(StateTransitionError::UnknownValidator(index))?
                .combine(delta);
        }
    }

    for (validator, delta) in state.validators.iter_mut().zip(deltas.iter()) {
        validator.balance = delta.apply(validator.balance);
    }

    Ok(())
}

fn saturate(amount: u128) -> u64 {
    u64::try_from(amount).unwrap_or(u64::MAX)
}

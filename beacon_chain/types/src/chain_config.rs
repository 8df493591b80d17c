use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

/// The largest validator set a committee index (serialized as `uint24`) can address.
pub const MAX_VALIDATOR_COUNT_LIMIT: u64 = 1 << 24;

/// Protocol parameters shared by every component of the chain.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct ChainConfig {
    /*
     * Time parameters
     */
    pub cycle_length: u64,
    pub min_dynasty_length: u64,
    pub slot_duration: u64,
    /*
     * Committees
     */
    pub min_committee_size: u64,
    pub shard_count: u16,
    pub max_validator_count: u64,
    /*
     * Balances, in Gwei
     */
    pub deposit_size: u64,
    pub gwei_per_eth: u64,
    pub ejection_balance: u64,
    /*
     * Reward and penalty quotients
     */
    pub base_reward_quotient: u64,
    pub sqrt_e_drop_time: u64,
    pub default_end_dynasty: u64,
}

#[derive(Debug, PartialEq, Clone)]
pub enum ChainConfigError {
    ZeroCycleLength,
    ZeroShardCount,
    ZeroCommitteeSize,
    MaxValidatorCountTooLarge(u64),
}

#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Yaml(serde_yaml::Error),
    Invalid(ChainConfigError),
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> LoadError {
        LoadError::Io(e)
    }
}

impl From<serde_yaml::Error> for LoadError {
    fn from(e: serde_yaml::Error) -> LoadError {
        LoadError::Yaml(e)
    }
}

impl From<ChainConfigError> for LoadError {
    fn from(e: ChainConfigError) -> LoadError {
        LoadError::Invalid(e)
    }
}

impl ChainConfig {
    pub fn standard() -> Self {
        Self {
            cycle_length: 64,
            min_dynasty_length: 256,
            slot_duration: 8,
            min_committee_size: 128,
            shard_count: 1_024,
            max_validator_count: MAX_VALIDATOR_COUNT_LIMIT,
            deposit_size: 32 * u64::pow(10, 9),
            gwei_per_eth: u64::pow(10, 9),
            ejection_balance: 16 * u64::pow(10, 9),
            base_reward_quotient: 32_768,
            sqrt_e_drop_time: u64::pow(2, 16),
            default_end_dynasty: 9_999_999_999_999_999_999,
        }
    }

    /// Parameters small enough to run a handful of cycles in a test.
    pub fn minimal() -> Self {
        Self {
            cycle_length: 20,
            min_dynasty_length: 40,
            min_committee_size: 10,
            shard_count: 4,
            ..Self::standard()
        }
    }

    /// Load and validate a config from a YAML file with `UPPERCASE` keys.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let file = File::open(path)?;
        let config: ChainConfig = serde_yaml::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ChainConfigError> {
        if self.cycle_length == 0 {
            return Err(ChainConfigError::ZeroCycleLength);
        }
        if self.shard_count == 0 {
            return Err(ChainConfigError::ZeroShardCount);
        }
        if self.min_committee_size == 0 {
            return Err(ChainConfigError::ZeroCommitteeSize);
        }
        if self.max_validator_count > MAX_VALIDATOR_COUNT_LIMIT {
            return Err(ChainConfigError::MaxValidatorCountTooLarge(
                self.max_validator_count,
            ));
        }
        Ok(())
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self::standard()
    }
}

//! Token staking instruction payloads.

use ghostspeak_types::records::StakeCategory;

use crate::discriminator::staking;
use crate::wire::WireWriter;

/// `initialize_vault(min_stake_amount, lock_period_seconds, weight_multiplier)`.
pub fn initialize_vault(
    min_stake_amount: u64,
    lock_period_seconds: i64,
    weight_multiplier: u16,
) -> Vec<u8> {
    let mut writer = WireWriter::with_capacity(8 + 8 + 8 + 2);
    writer.write_bytes(&staking::INITIALIZE_VAULT);
    writer.write_u64(min_stake_amount);
    writer.write_i64(lock_period_seconds);
    writer.write_u16(weight_multiplier);
    writer.finish()
}

/// `stake_tokens(amount, category)`.
pub fn stake_tokens(amount: u64, category: StakeCategory) -> Vec<u8> {
    let mut writer = WireWriter::with_capacity(8 + 8 + 1);
    writer.write_bytes(&staking::STAKE_TOKENS);
    writer.write_u64(amount);
    writer.write_u8(category.to_wire());
    writer.finish()
}

/// `unstake_tokens(amount)`.
pub fn unstake_tokens(amount: u64) -> Vec<u8> {
    let mut writer = WireWriter::with_capacity(8 + 8);
    writer.write_bytes(&staking::UNSTAKE_TOKENS);
    writer.write_u64(amount);
    writer.finish()
}

/// `update_vault_config(min_stake_amount?, lock_period_seconds?, weight_multiplier?)`.
///
/// Options encode as a presence byte followed by the value when present.
pub fn update_vault_config(
    min_stake_amount: Option<u64>,
    lock_period_seconds: Option<i64>,
    weight_multiplier: Option<u16>,
) -> Vec<u8> {
    let mut writer = WireWriter::with_capacity(8 + 9 + 9 + 3);
    writer.write_bytes(&staking::UPDATE_VAULT_CONFIG);
    match min_stake_amount {
        Some(v) => {
            writer.write_u8(1);
            writer.write_u64(v);
        }
        None => writer.write_u8(0),
    }
    match lock_period_seconds {
        Some(v) => {
            writer.write_u8(1);
            writer.write_i64(v);
        }
        None => writer.write_u8(0),
    }
    match weight_multiplier {
        Some(v) => {
            writer.write_u8(1);
            writer.write_u16(v);
        }
        None => writer.write_u8(0),
    }
    writer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stake_tokens_layout() {
        let data = stake_tokens(2_500_000, StakeCategory::Reliability);
        assert_eq!(&data[..8], &staking::STAKE_TOKENS);
        assert_eq!(u64::from_le_bytes(data[8..16].try_into().unwrap()), 2_500_000);
        assert_eq!(data[16], 2); // Reliability tag
        assert_eq!(data.len(), 17);
    }

    #[test]
    fn update_vault_config_option_encoding() {
        let all_none = update_vault_config(None, None, None);
        assert_eq!(&all_none[8..], &[0, 0, 0]);

        let mixed = update_vault_config(Some(7), None, Some(150));
        assert_eq!(mixed[8], 1);
        assert_eq!(u64::from_le_bytes(mixed[9..17].try_into().unwrap()), 7);
        assert_eq!(mixed[17], 0);
        assert_eq!(mixed[18], 1);
        assert_eq!(u16::from_le_bytes(mixed[19..21].try_into().unwrap()), 150);
    }

    #[test]
    fn unstake_layout() {
        let data = unstake_tokens(1);
        assert_eq!(&data[..8], &staking::UNSTAKE_TOKENS);
        assert_eq!(data.len(), 16);
    }
}

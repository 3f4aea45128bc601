//! Deterministic program-derived address (PDA) computation.
//!
//! A derived address is the first SHA-256 image of
//! `seeds ‖ [nonce] ‖ program_id ‖ "ProgramDerivedAddress"` (trying the
//! trailing nonce from 255 down to 0) that does **not** decompress to a valid
//! ed25519 curve point. Off-curve addresses cannot correspond to a wallet
//! keypair, which is how the host chain guarantees the address is
//! program-owned. The winning nonce is returned alongside the address as the
//! "bump".
//!
//! The search is deterministic: identical seeds and program identifier always
//! yield the identical `(address, bump)` pair, across processes and
//! implementations. The exact-match vectors in the test module pin this
//! against the host chain's own derivation.

use curve25519_dalek::edwards::CompressedEdwardsY;
use ghostspeak_types::error::DeriveError;
use ghostspeak_types::{seeds, Address, ProgramRegistry};

use crate::hash::sha256;

/// The host chain's derivation rejects seed lists longer than this.
pub const MAX_SEEDS: usize = 16;
/// The host chain's derivation rejects individual seeds longer than this.
pub const MAX_SEED_LEN: usize = 32;

/// Domain separator appended to every derivation preimage.
const PDA_MARKER: &[u8] = b"ProgramDerivedAddress";

/// Whether 32 bytes decompress to a valid ed25519 curve point.
fn is_on_curve(bytes: &[u8; 32]) -> bool {
    CompressedEdwardsY(*bytes).decompress().is_some()
}

/// Derives the program-owned address for `seeds` under `program_id`.
///
/// Returns the address and the bump nonce that produced it. Fails fast on
/// over-long seed lists, and with [`DeriveError::Exhausted`] in the
/// statistically unreachable case that every nonce lands on-curve.
pub fn derive_address(
    program_id: &Address,
    seed_list: &[&[u8]],
) -> Result<(Address, u8), DeriveError> {
    if seed_list.len() > MAX_SEEDS {
        return Err(DeriveError::TooManySeeds {
            count: seed_list.len(),
        });
    }
    for (index, seed) in seed_list.iter().enumerate() {
        if seed.len() > MAX_SEED_LEN {
            return Err(DeriveError::SeedTooLong {
                index,
                len: seed.len(),
            });
        }
    }

    let mut preimage = Vec::with_capacity(
        seed_list.iter().map(|s| s.len()).sum::<usize>() + 1 + 32 + PDA_MARKER.len(),
    );
    for seed in seed_list {
        preimage.extend_from_slice(seed);
    }
    let seeds_len = preimage.len();

    for nonce in (0..=u8::MAX).rev() {
        preimage.truncate(seeds_len);
        preimage.push(nonce);
        preimage.extend_from_slice(program_id.as_ref());
        preimage.extend_from_slice(PDA_MARKER);

        let candidate = sha256(&preimage);
        if !is_on_curve(&candidate) {
            return Ok((Address::new(candidate), nonce));
        }
    }
    Err(DeriveError::Exhausted)
}

/// Address of an agent's identity record.
pub fn agent_identity_address(
    registry: &ProgramRegistry,
    agent: &Address,
) -> Result<(Address, u8), DeriveError> {
    derive_address(&registry.identity, &[seeds::AGENT_SEED, agent.as_ref()])
}

/// Address of an agent's reputation record.
pub fn reputation_address(
    registry: &ProgramRegistry,
    agent: &Address,
) -> Result<(Address, u8), DeriveError> {
    derive_address(
        &registry.reputation,
        &[seeds::REPUTATION_SEED, agent.as_ref()],
    )
}

/// Address of the reputation registry's authority singleton.
pub fn reputation_authority_address(
    registry: &ProgramRegistry,
) -> Result<(Address, u8), DeriveError> {
    derive_address(&registry.reputation, &[seeds::AUTHORITY_SEED])
}

/// Address of an endpoint's validation record. The endpoint URL is hashed
/// into the seed, so arbitrarily long URLs derive fine.
pub fn validation_address(
    registry: &ProgramRegistry,
    endpoint_url: &str,
) -> Result<(Address, u8), DeriveError> {
    let endpoint_hash = sha256(endpoint_url.as_bytes());
    derive_address(&registry.validation, &[seeds::VALIDATION_SEED, &endpoint_hash])
}

/// Address of the validation registry's authority singleton.
pub fn validation_authority_address(
    registry: &ProgramRegistry,
) -> Result<(Address, u8), DeriveError> {
    derive_address(&registry.validation, &[seeds::AUTHORITY_SEED])
}

/// Address of a transaction receipt. The payment signature is hashed into
/// the final seed.
pub fn transaction_receipt_address(
    registry: &ProgramRegistry,
    payer: &Address,
    recipient: &Address,
    signature: &str,
) -> Result<(Address, u8), DeriveError> {
    let signature_hash = sha256(signature.as_bytes());
    derive_address(
        &registry.vote,
        &[
            seeds::TX_RECEIPT_SEED,
            payer.as_ref(),
            recipient.as_ref(),
            &signature_hash,
        ],
    )
}

/// Address of the peer vote attached to a transaction receipt.
pub fn peer_vote_address(
    registry: &ProgramRegistry,
    transaction_receipt: &Address,
) -> Result<(Address, u8), DeriveError> {
    derive_address(
        &registry.vote,
        &[seeds::PEER_VOTE_SEED, transaction_receipt.as_ref()],
    )
}

/// Address of a content rating. The raw signature string is the seed, so
/// signatures above 32 bytes are rejected by the derivation itself. The
/// deployed program shares the same limit.
pub fn content_rating_address(
    registry: &ProgramRegistry,
    x402_signature: &str,
) -> Result<(Address, u8), DeriveError> {
    derive_address(
        &registry.vote,
        &[seeds::CONTENT_RATING_SEED, x402_signature.as_bytes()],
    )
}

/// Address of an endorsement from one agent to another.
pub fn endorsement_address(
    registry: &ProgramRegistry,
    endorser: &Address,
    endorsed: &Address,
) -> Result<(Address, u8), DeriveError> {
    derive_address(
        &registry.vote,
        &[seeds::ENDORSEMENT_SEED, endorser.as_ref(), endorsed.as_ref()],
    )
}

/// Address of the staking vault for a (target agent, token mint) pair.
pub fn staking_vault_address(
    registry: &ProgramRegistry,
    target_agent: &Address,
    token_mint: &Address,
) -> Result<(Address, u8), DeriveError> {
    derive_address(
        &registry.staking,
        &[seeds::VAULT_SEED, target_agent.as_ref(), token_mint.as_ref()],
    )
}

/// Address of a vault's token account.
pub fn vault_token_address(
    registry: &ProgramRegistry,
    vault: &Address,
) -> Result<(Address, u8), DeriveError> {
    derive_address(&registry.staking, &[seeds::VAULT_TOKEN_SEED, vault.as_ref()])
}

/// Address of a staker's position in a vault.
pub fn stake_position_address(
    registry: &ProgramRegistry,
    vault: &Address,
    staker: &Address,
) -> Result<(Address, u8), DeriveError> {
    derive_address(
        &registry.staking,
        &[seeds::STAKE_SEED, vault.as_ref(), staker.as_ref()],
    )
}

/// Address of the multisig configuration singleton.
pub fn multisig_authority_address(
    registry: &ProgramRegistry,
) -> Result<(Address, u8), DeriveError> {
    derive_address(&registry.reputation, &[seeds::MULTISIG_AUTHORITY_SEED])
}

/// Address of a multisig proposal by id.
pub fn multisig_proposal_address(
    registry: &ProgramRegistry,
    proposal_id: u64,
) -> Result<(Address, u8), DeriveError> {
    derive_address(
        &registry.reputation,
        &[seeds::MULTISIG_PROPOSAL_SEED, &proposal_id.to_le_bytes()],
    )
}

#[cfg(test)]
mod tests;

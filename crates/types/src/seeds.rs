//! Defines constants for the seed tags used in address derivation.
//!
//! These constants provide a single source of truth for the ASCII tags that
//! prefix every derived-address seed list. Using these constants prevents
//! typos and ensures the derivation helpers and any ad-hoc callers agree on
//! the exact bytes the deployed programs expect.

/// Seed tag for an agent identity record: `["agent", agent_address]`.
pub const AGENT_SEED: &[u8] = b"agent";

/// Seed tag for an agent reputation record: `["reputation", agent_address]`.
pub const REPUTATION_SEED: &[u8] = b"reputation";

/// Seed tag for the singleton authority record of the reputation and
/// validation registries: `["authority"]`.
pub const AUTHORITY_SEED: &[u8] = b"authority";

/// Seed tag for an endpoint validation record:
/// `["validation", sha256(endpoint_url)]`.
pub const VALIDATION_SEED: &[u8] = b"validation";

/// Seed tag for a transaction receipt:
/// `["tx_receipt", payer, recipient, sha256(signature)]`.
pub const TX_RECEIPT_SEED: &[u8] = b"tx_receipt";

/// Seed tag for a peer vote: `["peer_vote", transaction_receipt_address]`.
pub const PEER_VOTE_SEED: &[u8] = b"peer_vote";

/// Seed tag for a content rating: `["content_rating", x402_signature_bytes]`.
pub const CONTENT_RATING_SEED: &[u8] = b"content_rating";

/// Seed tag for an endorsement: `["endorsement", endorser, endorsed]`.
pub const ENDORSEMENT_SEED: &[u8] = b"endorsement";

/// Seed tag for a staking vault: `["vault", target_agent, token_mint]`.
pub const VAULT_SEED: &[u8] = b"vault";

/// Seed tag for a vault's token account: `["vault_token", vault_address]`.
pub const VAULT_TOKEN_SEED: &[u8] = b"vault_token";

/// Seed tag for a stake position: `["stake", vault_address, staker]`.
pub const STAKE_SEED: &[u8] = b"stake";

/// Seed tag for the multisig configuration singleton: `["multisig_authority"]`.
pub const MULTISIG_AUTHORITY_SEED: &[u8] = b"multisig_authority";

/// Seed tag for a multisig proposal:
/// `["multisig_proposal", proposal_id_le_bytes]`.
pub const MULTISIG_PROPOSAL_SEED: &[u8] = b"multisig_proposal";

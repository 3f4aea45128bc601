//! The 8-byte discriminator tables for the five registry programs.
//!
//! These values are external contract constants: they prefix every account
//! buffer and instruction payload the deployed programs emit or accept, and
//! they are not derivable from the names at runtime. Reproduce byte-for-byte;
//! do not edit without a corresponding redeployment of the programs.

/// Account-record discriminators (first 8 bytes of every account buffer).
pub mod account {
    /// `AgentIdentity` accounts.
    pub const AGENT_IDENTITY: [u8; 8] = [11, 149, 31, 27, 186, 76, 241, 72];
    /// `AgentReputation` accounts.
    pub const AGENT_REPUTATION: [u8; 8] = [245, 56, 239, 246, 36, 231, 227, 67];
    /// `ReputationAuthority` accounts.
    pub const REPUTATION_AUTHORITY: [u8; 8] = [183, 54, 47, 15, 181, 70, 163, 28];
    /// `EndpointValidation` accounts.
    pub const ENDPOINT_VALIDATION: [u8; 8] = [31, 57, 134, 51, 12, 222, 76, 203];
    /// `ValidationAuthority` accounts.
    pub const VALIDATION_AUTHORITY: [u8; 8] = [41, 7, 177, 166, 81, 24, 79, 232];
    /// `PeerVote` accounts.
    pub const PEER_VOTE: [u8; 8] = [177, 149, 245, 151, 69, 50, 108, 31];
    /// `ContentRating` accounts.
    pub const CONTENT_RATING: [u8; 8] = [181, 35, 88, 199, 55, 175, 220, 122];
    /// `AgentEndorsement` accounts.
    pub const AGENT_ENDORSEMENT: [u8; 8] = [190, 224, 16, 164, 116, 182, 59, 165];
    /// `TransactionReceipt` accounts.
    pub const TRANSACTION_RECEIPT: [u8; 8] = [37, 63, 7, 219, 140, 138, 66, 178];
    /// `StakingVault` accounts.
    pub const STAKING_VAULT: [u8; 8] = [68, 141, 118, 28, 87, 84, 213, 233];
    /// `StakePosition` accounts.
    pub const STAKE_POSITION: [u8; 8] = [78, 165, 30, 111, 171, 125, 11, 220];
    /// `MultisigAuthority` accounts (the client's `MultisigConfig`).
    pub const MULTISIG_AUTHORITY: [u8; 8] = [187, 180, 56, 5, 95, 54, 31, 243];
    /// `MultisigProposal` accounts.
    pub const MULTISIG_PROPOSAL: [u8; 8] = [13, 15, 144, 55, 252, 164, 83, 208];
}

/// Instruction discriminators for the identity registry.
pub mod identity {
    /// `register_agent`.
    pub const REGISTER_AGENT: [u8; 8] = [135, 157, 66, 195, 2, 113, 175, 30];
    /// `update_identity`.
    pub const UPDATE_IDENTITY: [u8; 8] = [130, 54, 88, 104, 222, 124, 238, 252];
    /// `verify_identity`.
    pub const VERIFY_IDENTITY: [u8; 8] = [177, 162, 9, 111, 44, 84, 80, 21];
    /// `deactivate_agent`.
    pub const DEACTIVATE_AGENT: [u8; 8] = [205, 171, 239, 225, 82, 126, 96, 166];
}

/// Instruction discriminators for the reputation registry.
pub mod reputation {
    /// `initialize_authority`.
    pub const INITIALIZE_AUTHORITY: [u8; 8] = [13, 186, 25, 16, 218, 31, 90, 1];
    /// `initialize_reputation`.
    pub const INITIALIZE_REPUTATION: [u8; 8] = [150, 240, 109, 53, 147, 42, 152, 162];
    /// `update_reputation`.
    pub const UPDATE_REPUTATION: [u8; 8] = [194, 220, 43, 201, 54, 209, 49, 178];
    /// `record_payment_proof`.
    pub const RECORD_PAYMENT_PROOF: [u8; 8] = [225, 6, 44, 34, 208, 255, 224, 82];
    /// `get_reputation`.
    pub const GET_REPUTATION: [u8; 8] = [46, 251, 16, 79, 119, 77, 230, 230];
}

/// Instruction discriminators for the validation registry.
pub mod validation {
    /// `initialize_authority`. Same preimage as the reputation registry's,
    /// so the bytes coincide; each program only accepts its own id.
    pub const INITIALIZE_AUTHORITY: [u8; 8] = [13, 186, 25, 16, 218, 31, 90, 1];
    /// `submit_validation`.
    pub const SUBMIT_VALIDATION: [u8; 8] = [224, 75, 32, 63, 177, 137, 242, 221];
    /// `query_validations`.
    pub const QUERY_VALIDATIONS: [u8; 8] = [163, 117, 85, 0, 163, 254, 58, 54];
    /// `calculate_consensus`.
    pub const CALCULATE_CONSENSUS: [u8; 8] = [87, 74, 198, 240, 8, 148, 101, 185];
    /// `issue_validation_stamp`.
    pub const ISSUE_VALIDATION_STAMP: [u8; 8] = [157, 211, 53, 131, 210, 78, 253, 176];
}

/// Instruction discriminators for the vote registry.
pub mod vote {
    /// `create_transaction_receipt`.
    pub const CREATE_TRANSACTION_RECEIPT: [u8; 8] = [67, 122, 43, 192, 180, 76, 15, 151];
    /// `cast_peer_vote`.
    pub const CAST_PEER_VOTE: [u8; 8] = [134, 128, 196, 183, 241, 250, 33, 45];
    /// `rate_content`.
    pub const RATE_CONTENT: [u8; 8] = [237, 161, 216, 135, 145, 73, 46, 59];
    /// `endorse_agent`.
    pub const ENDORSE_AGENT: [u8; 8] = [150, 194, 86, 132, 94, 161, 156, 198];
}

/// Instruction discriminators for the token staking program.
pub mod staking {
    /// `initialize_vault`.
    pub const INITIALIZE_VAULT: [u8; 8] = [48, 191, 163, 44, 71, 129, 63, 164];
    /// `stake_tokens`.
    pub const STAKE_TOKENS: [u8; 8] = [136, 126, 91, 162, 40, 131, 13, 127];
    /// `unstake_tokens`.
    pub const UNSTAKE_TOKENS: [u8; 8] = [58, 119, 215, 143, 203, 223, 32, 86];
    /// `update_vault_config`.
    pub const UPDATE_VAULT_CONFIG: [u8; 8] = [122, 3, 21, 222, 158, 255, 238, 157];
}

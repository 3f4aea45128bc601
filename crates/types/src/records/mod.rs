//! Account-record structs for the five registry programs.
//!
//! Each record mirrors, field for field, the on-chain account layout of the
//! deployed program that owns it. Records are read-only from this layer's
//! perspective: the client decodes them and builds the instructions that
//! cause the programs to mutate them, but never mutates chain state itself.
//!
//! Wire enums carry an explicit `Unknown(u8)` variant. An out-of-range tag
//! byte decodes to `Unknown` instead of silently aliasing to the first known
//! tag, so wire-format drift is visible to callers rather than masked.

/// The identity registry's account records.
pub mod identity;
/// The multisig configuration and proposal records.
pub mod multisig;
/// The reputation registry's account records.
pub mod reputation;
/// The token staking program's account records.
pub mod staking;
/// The validation registry's account records.
pub mod validation;
/// The vote registry's account records.
pub mod vote;

pub use identity::AgentIdentity;
pub use multisig::{MultisigConfig, MultisigProposal, ProposalStatus, ProposalType};
pub use reputation::{AgentReputation, ComponentScores, ReputationAuthority, ReputationStats};
pub use staking::{StakeCategory, StakePosition, StakingVault};
pub use validation::{EndpointValidation, TestResult, ValidationAuthority};
pub use vote::{
    AgentEndorsement, ContentRating, ContentType, EndorsementCategory, PeerVote, QualityScores,
    TransactionReceipt, VoteType,
};

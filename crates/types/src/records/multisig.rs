//! Multisig configuration and proposals guarding reputation updates.

use crate::address::Address;
use serde::{Deserialize, Serialize};

use super::reputation::{ComponentScores, ReputationStats};

/// Maximum number of multisig signers.
pub const MAX_MULTISIG_SIGNERS: usize = 7;
/// Proposals expire 48 hours after creation.
pub const PROPOSAL_EXPIRY_SECONDS: i64 = 48 * 60 * 60;

/// What a multisig proposal asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposalType {
    /// Update an agent's reputation scores.
    UpdateReputation,
    /// Add a signer.
    AddSigner,
    /// Remove a signer.
    RemoveSigner,
    /// Change the approval threshold.
    UpdateThreshold,
    /// Emergency pause.
    EmergencyPause,
    /// A tag byte outside the known range, preserved verbatim.
    Unknown(u8),
}

impl ProposalType {
    /// Decodes a wire tag byte.
    pub fn from_wire(tag: u8) -> Self {
        match tag {
            0 => Self::UpdateReputation,
            1 => Self::AddSigner,
            2 => Self::RemoveSigner,
            3 => Self::UpdateThreshold,
            4 => Self::EmergencyPause,
            other => Self::Unknown(other),
        }
    }

    /// Encodes back to the wire tag byte. `Unknown` round-trips its raw byte.
    pub fn to_wire(self) -> u8 {
        match self {
            Self::UpdateReputation => 0,
            Self::AddSigner => 1,
            Self::RemoveSigner => 2,
            Self::UpdateThreshold => 3,
            Self::EmergencyPause => 4,
            Self::Unknown(raw) => raw,
        }
    }
}

/// Where a proposal is in its lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposalStatus {
    /// Awaiting approvals.
    #[default]
    Pending,
    /// Reached quorum.
    Approved,
    /// Executed.
    Executed,
    /// Rejected.
    Rejected,
    /// Expired before quorum.
    Expired,
    /// A tag byte outside the known range, preserved verbatim.
    Unknown(u8),
}

impl ProposalStatus {
    /// Decodes a wire tag byte.
    pub fn from_wire(tag: u8) -> Self {
        match tag {
            0 => Self::Pending,
            1 => Self::Approved,
            2 => Self::Executed,
            3 => Self::Rejected,
            4 => Self::Expired,
            other => Self::Unknown(other),
        }
    }

    /// Encodes back to the wire tag byte. `Unknown` round-trips its raw byte.
    pub fn to_wire(self) -> u8 {
        match self {
            Self::Pending => 0,
            Self::Approved => 1,
            Self::Executed => 2,
            Self::Rejected => 3,
            Self::Expired => 4,
            Self::Unknown(raw) => raw,
        }
    }
}

/// The multisig signer set, derived at `["multisig_authority"]`.
///
/// The on-chain account is named `MultisigAuthority`; the client keeps the
/// configuration-oriented name since that is what it is to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultisigConfig {
    /// Authorized signers, up to [`MAX_MULTISIG_SIGNERS`].
    pub signers: Vec<Address>,
    /// Signatures required to execute.
    pub threshold: u8,
    /// Total proposals ever created (source of unique proposal ids).
    pub proposal_count: u64,
    /// The admin who can add/remove signers.
    pub admin: Address,
    /// Whether the multisig is active.
    pub is_active: bool,
    /// Creation timestamp.
    pub created_at: i64,
    /// Derivation bump.
    pub bump: u8,
}

impl MultisigConfig {
    /// Position of a signer in the set, if present. The index doubles as the
    /// signer's bit in a proposal's approval bitmap.
    pub fn signer_index(&self, signer: &Address) -> Option<u8> {
        self.signers.iter().position(|s| s == signer).map(|i| i as u8)
    }
}

/// A pending multisig proposal, derived at
/// `["multisig_proposal", proposal_id_le_bytes]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultisigProposal {
    /// Unique proposal id.
    pub proposal_id: u64,
    /// What the proposal asks for.
    pub proposal_type: ProposalType,
    /// Who proposed it.
    pub proposer: Address,
    /// Target agent, for reputation updates.
    pub target_agent: Address,
    /// Proposed overall score, for reputation updates.
    pub proposed_score: u16,
    /// Proposed component scores, for reputation updates.
    pub proposed_components: ComponentScores,
    /// Proposed stats, for reputation updates.
    pub proposed_stats: ReputationStats,
    /// Proposed merkle root, for reputation updates.
    pub proposed_merkle_root: [u8; 32],
    /// The signer address, for add/remove-signer proposals.
    pub target_signer: Address,
    /// The new threshold, for threshold updates.
    pub new_threshold: u8,
    /// Bitmap of signers who approved.
    pub approval_bitmap: u8,
    /// Number of approvals received.
    pub approval_count: u8,
    /// Lifecycle status.
    pub status: ProposalStatus,
    /// Creation timestamp.
    pub created_at: i64,
    /// Execution timestamp, zero if not executed.
    pub executed_at: i64,
    /// Derivation bump.
    pub bump: u8,
}

impl MultisigProposal {
    /// Whether the signer at `signer_index` has approved.
    pub fn has_approved(&self, signer_index: u8) -> bool {
        (self.approval_bitmap & (1 << signer_index)) != 0
    }

    /// Whether the proposal has passed its expiry window.
    pub fn is_expired(&self, now: i64) -> bool {
        now > self.created_at.saturating_add(PROPOSAL_EXPIRY_SECONDS)
    }

    /// Whether enough approvals have accumulated.
    pub fn has_quorum(&self, threshold: u8) -> bool {
        self.approval_count >= threshold
    }
}

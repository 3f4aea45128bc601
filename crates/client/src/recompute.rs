//! Explicit score-recomputation trigger.
//!
//! After a vote, rating, or stake change lands, the affected agent's Ghost
//! Score should be recomputed "as soon as possible, at most once per cause".
//! Instead of a hidden fire-and-forget task, the trigger is a visible queue:
//! producers enqueue a [`RecomputeRequest`], a scoring/persistence consumer
//! drains the receiver. Delivery is at-least-once: the unbounded channel
//! never drops a request while a consumer lives, and a closed consumer is
//! logged, not ignored.

use ghostspeak_types::Address;
use tokio::sync::mpsc;

/// Why a recomputation was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecomputeReason {
    /// A peer vote was cast against the agent.
    VoteCast,
    /// A content rating was recorded for the agent.
    ContentRated,
    /// An endorsement toward the agent changed.
    EndorsementChanged,
    /// A stake for the agent was placed, withdrawn, or slashed.
    StakeChanged,
}

/// One recomputation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecomputeRequest {
    /// The agent whose score should be recomputed.
    pub agent: Address,
    /// What happened.
    pub reason: RecomputeReason,
}

/// Producer side of the recompute channel.
#[derive(Clone)]
pub struct RecomputeQueue {
    sender: mpsc::UnboundedSender<RecomputeRequest>,
}

impl RecomputeQueue {
    /// Creates the queue and its consumer end.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<RecomputeRequest>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    /// Enqueues a request. Returns whether a consumer was still attached;
    /// a `false` here means the request was lost and is worth surfacing.
    pub fn enqueue(&self, request: RecomputeRequest) -> bool {
        let agent = request.agent;
        match self.sender.send(request) {
            Ok(()) => {
                log::debug!("[Recompute] enqueued recomputation for {agent}");
                true
            }
            Err(_) => {
                log::warn!("[Recompute] consumer gone, dropping recomputation for {agent}");
                false
            }
        }
    }
}

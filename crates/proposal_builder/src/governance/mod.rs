//! Calls to the governor contract and the proposal records read back from
//! the indexer.

use alloy_primitives::{Address, B256, U256};
use alloy_sol_types::SolCall;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{solidity::IGovernor, state::EncodedCall};

pub mod decode;
pub mod proposal;

pub use decode::*;
pub use proposal::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VoteSupport {
    Against = 0,
    For = 1,
    Abstain = 2,
}

impl VoteSupport {
    pub fn as_u256(self) -> U256 {
        U256::from(self as u8)
    }

    pub fn label(self) -> &'static str {
        match self {
            VoteSupport::Against => "Against",
            VoteSupport::For => "For",
            VoteSupport::Abstain => "Abstain",
        }
    }
}

impl TryFrom<u8> for VoteSupport {
    type Error = GovernanceError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(VoteSupport::Against),
            1 => Ok(VoteSupport::For),
            2 => Ok(VoteSupport::Abstain),
            other => Err(GovernanceError::InvalidSupport(other)),
        }
    }
}

/// `castVoteWithReason` when a reason is given, `castVote` otherwise.
pub fn cast_vote(
    governor: Address,
    proposal_id: B256,
    support: VoteSupport,
    reason: &str,
) -> EncodedCall {
    let calldata = if reason.is_empty() {
        IGovernor::castVoteCall {
            proposalId: proposal_id,
            support: support.as_u256(),
        }
        .abi_encode()
    } else {
        IGovernor::castVoteWithReasonCall {
            proposalId: proposal_id,
            support: support.as_u256(),
            reason: reason.to_string(),
        }
        .abi_encode()
    };
    EncodedCall::call(governor, calldata)
}

pub fn queue(governor: Address, proposal_id: B256) -> EncodedCall {
    EncodedCall::call(
        governor,
        IGovernor::queueCall {
            proposalId: proposal_id,
        }
        .abi_encode(),
    )
}

pub fn execute(governor: Address, proposal_id: B256) -> EncodedCall {
    EncodedCall::call(
        governor,
        IGovernor::executeCall {
            proposalId: proposal_id,
        }
        .abi_encode(),
    )
}

pub fn cancel(governor: Address, proposal_id: B256) -> EncodedCall {
    EncodedCall::call(
        governor,
        IGovernor::cancelCall {
            proposalId: proposal_id,
        }
        .abi_encode(),
    )
}

/// Voting weight of `account` at `timestamp`, usually the proposal's creation time.
pub fn get_votes_call(governor: Address, account: Address, timestamp: u64) -> EncodedCall {
    EncodedCall::call(
        governor,
        IGovernor::getVotesCall {
            account,
            timestamp: U256::from(timestamp),
        }
        .abi_encode(),
    )
}

pub fn decode_votes(data: &[u8]) -> Result<U256, GovernanceError> {
    Ok(IGovernor::getVotesCall::abi_decode_returns(data, true)?._0)
}

pub fn proposal_threshold_call(governor: Address) -> EncodedCall {
    EncodedCall::call(governor, IGovernor::proposalThresholdCall {}.abi_encode())
}

pub fn decode_proposal_threshold(data: &[u8]) -> Result<U256, GovernanceError> {
    Ok(IGovernor::proposalThresholdCall::abi_decode_returns(data, true)?._0)
}

/// Proposers need strictly more votes than the threshold.
pub fn meets_threshold(votes: U256, threshold: U256) -> bool {
    votes > threshold
}

#[derive(Debug, Error)]
pub enum GovernanceError {
    #[error("Failed to decode governor response: {0}")]
    Decode(#[from] alloy_sol_types::Error),
    #[error("Unknown vote support {0}")]
    InvalidSupport(u8),
}

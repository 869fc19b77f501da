use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolCall;
use thiserror::Error;

use crate::{
    constants::{DESCRIPTION_SEPARATOR, MIN_TITLE_LENGTH},
    solidity::IGovernor,
    state::{EncodedCall, TransactionDescriptor},
};

/// Stable identity of a draft row. Ids are never reused within a draft, so a
/// late simulation result can not land on a different row after a delete.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(u64);

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum SimulationStatus {
    #[default]
    Unset,
    Pending,
    Success,
    Fail,
}

/// What the last finished simulation of a row reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulationReport {
    pub message: Option<String>,
    pub simulation_url: Option<String>,
    /// Transport or service error detail, kept for diagnostics.
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftTransaction {
    pub id: RowId,
    pub descriptor: TransactionDescriptor,
    pub call: EncodedCall,
    pub status: SimulationStatus,
    pub report: Option<SimulationReport>,
    pub expanded: bool,
}

/// The proposal being composed. Rows execute on-chain in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProposalDraft {
    pub title: String,
    pub description: String,
    rows: Vec<DraftTransaction>,
    next_id: u64,
}

impl ProposalDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, descriptor: TransactionDescriptor, call: EncodedCall) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        self.rows.push(DraftTransaction {
            id,
            descriptor,
            call,
            status: SimulationStatus::Unset,
            report: None,
            expanded: false,
        });
        id
    }

    /// Empties the draft for the next proposal. Row ids keep counting up so
    /// results of simulations started before the reset are still discarded.
    pub fn reset(&mut self) {
        self.title.clear();
        self.description.clear();
        self.rows.clear();
    }

    /// Removes the row at `index`; later rows shift down by one together with
    /// their simulation status.
    pub fn remove(&mut self, index: usize) -> Result<DraftTransaction, DraftError> {
        if index >= self.rows.len() {
            return Err(DraftError::IndexOutOfBounds {
                index,
                len: self.rows.len(),
            });
        }
        Ok(self.rows.remove(index))
    }

    pub fn rows(&self) -> &[DraftTransaction] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&DraftTransaction> {
        self.rows.get(index)
    }

    pub fn row_mut(&mut self, index: usize) -> Option<&mut DraftTransaction> {
        self.rows.get_mut(index)
    }

    pub fn position(&self, id: RowId) -> Option<usize> {
        self.rows.iter().position(|row| row.id == id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn calls(&self) -> impl Iterator<Item = &EncodedCall> {
        self.rows.iter().map(|row| &row.call)
    }

    pub fn statuses(&self) -> Vec<SimulationStatus> {
        self.rows.iter().map(|row| row.status).collect()
    }

    pub fn title_is_valid(&self) -> bool {
        self.title.trim().chars().count() > MIN_TITLE_LENGTH
    }

    /// Simulation results are advisory and do not affect this.
    pub fn can_submit(&self) -> bool {
        self.title_is_valid() && !self.is_empty()
    }

    pub fn submission(&self) -> Result<ProposalSubmission, DraftError> {
        if !self.title_is_valid() {
            return Err(DraftError::TitleTooShort);
        }
        if self.is_empty() {
            return Err(DraftError::NoTransactions);
        }

        Ok(ProposalSubmission {
            targets: self.calls().map(|call| call.target).collect(),
            values: self.calls().map(|call| call.value).collect(),
            calldatas: self.calls().map(|call| call.calldata.clone()).collect(),
            description: format!(
                "{}{}{}",
                self.title.trim(),
                DESCRIPTION_SEPARATOR,
                self.description
            ),
        })
    }
}

/// Arguments of the governor's `propose` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalSubmission {
    pub targets: Vec<Address>,
    pub values: Vec<U256>,
    pub calldatas: Vec<Bytes>,
    /// `title&&description`.
    pub description: String,
}

impl ProposalSubmission {
    pub fn propose_calldata(&self) -> Vec<u8> {
        IGovernor::proposeCall {
            targets: self.targets.clone(),
            values: self.values.clone(),
            calldatas: self.calldatas.clone(),
            description: self.description.clone(),
        }
        .abi_encode()
    }

    /// The call to send to `governor` to create the proposal.
    pub fn propose_call(&self, governor: Address) -> EncodedCall {
        EncodedCall::call(governor, self.propose_calldata())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("No transaction at index {index} (draft has {len})")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("Title must be longer than 5 characters")]
    TitleTooShort,
    #[error("Proposal has no transactions")]
    NoTransactions,
}

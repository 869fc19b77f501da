//! The compose flow: one user drafting one proposal.

use alloy_primitives::{Address, B256};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    config::BuilderConfig,
    form::{FormAction, FormError, FormState},
    internal::EncodeContext,
    simulation::{SimulationError, SimulationOutcome, SimulationRequest, Simulator},
    state::{
        DraftError, DraftTransaction, EncodedCall, ProposalDraft, ProposalSubmission, RowId,
        SimulationReport, SimulationStatus,
    },
    wallet::{WalletContext, WalletError},
};

/// Sends the governor `propose` call on behalf of the connected wallet.
pub trait ProposalWriter {
    /// Returns the hash of the submitted transaction.
    fn propose(&self, from: Address, call: &EncodedCall) -> Result<B256, SubmissionError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("Transaction rejected in wallet")]
    Rejected,
    #[error("Proposal transaction failed: {0}")]
    Failed(String),
}

/// A dismissible message about something that went wrong in the background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub detail: String,
}

/// Handed out when a row starts simulating and redeemed with its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationTicket {
    pub row: RowId,
    pub request: SimulationRequest,
}

#[derive(Debug)]
pub struct ComposeSession {
    config: BuilderConfig,
    ctx: EncodeContext,
    wallet: WalletContext,
    draft: ProposalDraft,
    form: FormState,
    notices: Vec<Notice>,
}

impl ComposeSession {
    pub fn new(config: BuilderConfig, wallet: WalletContext) -> Self {
        let ctx = config.encode_context();
        Self {
            config,
            ctx,
            wallet,
            draft: ProposalDraft::new(),
            form: FormState::Idle,
            notices: Vec::new(),
        }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    pub fn draft(&self) -> &ProposalDraft {
        &self.draft
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn wallet(&self) -> &WalletContext {
        &self.wallet
    }

    pub fn set_wallet(&mut self, wallet: WalletContext) {
        self.wallet = wallet;
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn dismiss_notice(&mut self, index: usize) -> Option<Notice> {
        (index < self.notices.len()).then(|| self.notices.remove(index))
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    /// Advances the add-transaction form. Returns the id of the row added by
    /// a successful submit.
    pub fn dispatch(&mut self, action: FormAction) -> Result<Option<RowId>, SessionError> {
        let transition = self.form.apply(action, &self.ctx)?;
        self.form = transition.state;

        Ok(transition.added.map(|added| {
            let kind = added.descriptor.kind();
            let row = self.draft.push(added.descriptor, added.call);
            info!(row = ?row, %kind, rows = self.draft.len(), "transaction added");
            row
        }))
    }

    pub fn delete(&mut self, index: usize) -> Result<DraftTransaction, SessionError> {
        self.require_idle()?;
        let removed = self.draft.remove(index)?;
        if removed.status == SimulationStatus::Pending {
            debug!(row = ?removed.id, "deleted row with simulation in flight");
        }
        info!(row = ?removed.id, index, rows = self.draft.len(), "transaction removed");
        Ok(removed)
    }

    /// Flips the row's detail view; returns whether it is now expanded.
    pub fn toggle_expand(&mut self, index: usize) -> Result<bool, SessionError> {
        self.require_idle()?;
        let row = self.row_mut(index)?;
        row.expanded = !row.expanded;
        Ok(row.expanded)
    }

    /// Marks the row as pending and builds the request to send. A row can
    /// not have two simulations in flight.
    pub fn begin_simulation(&mut self, index: usize) -> Result<SimulationTicket, SessionError> {
        let ctx = self.ctx;
        let row = self.row_mut(index)?;
        if row.status == SimulationStatus::Pending {
            return Err(SessionError::SimulationPending(index));
        }

        row.status = SimulationStatus::Pending;
        row.report = None;
        debug!(row = ?row.id, index, kind = %row.descriptor.kind(), "simulation started");

        Ok(SimulationTicket {
            row: row.id,
            request: SimulationRequest::for_row(row, &ctx),
        })
    }

    /// Records a simulation result. Results for rows deleted in the meantime
    /// are dropped and `None` is returned.
    pub fn finish_simulation(
        &mut self,
        ticket: SimulationTicket,
        result: Result<SimulationOutcome, SimulationError>,
    ) -> Option<SimulationStatus> {
        let Some(index) = self.draft.position(ticket.row) else {
            debug!(row = ?ticket.row, "discarding simulation result for deleted row");
            return None;
        };

        let (status, report, notice) = match result {
            Ok(outcome) => {
                let status = if outcome.success {
                    SimulationStatus::Success
                } else {
                    SimulationStatus::Fail
                };
                let report = SimulationReport {
                    message: outcome.message,
                    simulation_url: outcome.simulation_url,
                    error: None,
                };
                (status, report, None)
            }
            Err(err) => {
                warn!(row = ?ticket.row, error = %err, "simulation error");
                let detail = err.detail();
                let notice = Notice {
                    title: format!("Simulation of transaction {} failed", index + 1),
                    detail: detail.clone(),
                };
                let report = SimulationReport {
                    message: Some(err.to_string()),
                    simulation_url: None,
                    error: Some(detail),
                };
                (SimulationStatus::Fail, report, Some(notice))
            }
        };

        if let Some(row) = self.draft.row_mut(index) {
            row.status = status;
            row.report = Some(report);
        }
        self.notices.extend(notice);
        info!(row = ?ticket.row, index, status = ?status, "simulation finished");

        Some(status)
    }

    /// Runs a simulation of the row at `index` to completion.
    pub fn simulate(
        &mut self,
        index: usize,
        simulator: &dyn Simulator,
    ) -> Result<Option<SimulationStatus>, SessionError> {
        let ticket = self.begin_simulation(index)?;
        let result = simulator.simulate(&ticket.request);
        Ok(self.finish_simulation(ticket, result))
    }

    /// Simulation results are advisory and never gate this.
    pub fn can_submit(&self) -> bool {
        self.draft.can_submit()
    }

    pub fn submission(&self) -> Result<ProposalSubmission, SessionError> {
        Ok(self.draft.submission()?)
    }

    /// Sends the proposal. The draft is kept on any error so the user can
    /// retry, and cleared once the writer accepts it.
    pub fn submit(&mut self, writer: &dyn ProposalWriter) -> Result<B256, SessionError> {
        let from = self.wallet.require_signer(self.config.chain_id)?;
        let call = self.draft.submission()?.propose_call(self.config.governor);

        match writer.propose(from, &call) {
            Ok(tx_hash) => {
                info!(%tx_hash, rows = self.draft.len(), "proposal submitted");
                self.draft.reset();
                self.form = FormState::Idle;
                Ok(tx_hash)
            }
            Err(err) => {
                warn!(error = %err, "proposal submission failed");
                Err(err.into())
            }
        }
    }

    fn require_idle(&self) -> Result<(), SessionError> {
        if self.form.is_idle() {
            Ok(())
        } else {
            Err(SessionError::FormOpen)
        }
    }

    fn row_mut(&mut self, index: usize) -> Result<&mut DraftTransaction, SessionError> {
        let len = self.draft.len();
        self.draft
            .row_mut(index)
            .ok_or(SessionError::Draft(DraftError::IndexOutOfBounds { index, len }))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Draft(#[from] DraftError),
    #[error(transparent)]
    Wallet(#[from] WalletError),
    #[error(transparent)]
    Submission(#[from] SubmissionError),
    #[error("Finish or cancel the open transaction form first")]
    FormOpen,
    #[error("Transaction {0} is already being simulated")]
    SimulationPending(usize),
}

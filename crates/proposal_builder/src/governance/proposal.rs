use alloy_primitives::{Address, Bytes, B256, U256};
use common::{normalize_calldata, parse_calldata, CalldataError};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::{constants::DESCRIPTION_SEPARATOR, governance::VoteSupport, state::EncodedCall};

/// A proposal as served by the indexer. Numeric fields arrive either as JSON
/// numbers or as decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalRecord {
    pub proposal_id: B256,
    #[serde(deserialize_with = "number_or_string")]
    pub proposal_number: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub proposer: Address,
    #[serde(deserialize_with = "number_or_string")]
    pub for_votes: u64,
    #[serde(deserialize_with = "number_or_string")]
    pub against_votes: u64,
    #[serde(deserialize_with = "number_or_string")]
    pub abstain_votes: u64,
    #[serde(deserialize_with = "number_or_string")]
    pub vote_start: u64,
    #[serde(deserialize_with = "number_or_string")]
    pub vote_end: u64,
    /// Snapshot time for voting weight.
    #[serde(default, deserialize_with = "number_or_string")]
    pub time_created: u64,
    pub targets: Vec<Address>,
    pub values: Vec<String>,
    pub calldatas: Calldatas,
    #[serde(default)]
    pub votes: Vec<VoteRecord>,
}

/// Calldatas are either a list or a single `:`-joined string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Calldatas {
    List(Vec<String>),
    Delimited(String),
}

impl Calldatas {
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            Calldatas::List(list) => list.clone(),
            Calldatas::Delimited(joined) => joined.split(':').map(str::to_string).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRecord {
    pub voter: Address,
    pub support: VoteSupport,
    #[serde(deserialize_with = "number_or_string")]
    pub weight: u64,
    #[serde(default)]
    pub reason: Option<String>,
}

impl ProposalRecord {
    /// The calls the proposal executes, in order.
    pub fn transactions(&self) -> Result<Vec<EncodedCall>, ProposalError> {
        let calldatas = self.calldatas.to_vec();
        if self.targets.len() != self.values.len() || self.targets.len() != calldatas.len() {
            return Err(ProposalError::Inconsistent {
                targets: self.targets.len(),
                values: self.values.len(),
                calldatas: calldatas.len(),
            });
        }

        self.targets
            .iter()
            .zip(&self.values)
            .zip(&calldatas)
            .map(|((target, value), calldata)| {
                Ok(EncodedCall {
                    target: *target,
                    value: parse_value(value)?,
                    calldata: parse_stored_calldata(calldata)?,
                })
            })
            .collect()
    }

    pub fn voting_window(&self) -> VotingWindow {
        VotingWindow {
            start: self.vote_start,
            end: self.vote_end,
        }
    }

    /// The vote `voter` cast, if any.
    pub fn voter_record(&self, voter: Address) -> Option<&VoteRecord> {
        self.votes.iter().find(|vote| vote.voter == voter)
    }

    /// Applies a just-confirmed vote to the local copy, ahead of the indexer.
    pub fn record_vote(&mut self, vote: VoteRecord) {
        let tally = match vote.support {
            VoteSupport::For => &mut self.for_votes,
            VoteSupport::Against => &mut self.against_votes,
            VoteSupport::Abstain => &mut self.abstain_votes,
        };
        *tally = tally.saturating_add(vote.weight);
        self.votes.push(vote);
    }

    /// Title and body, falling back to the `title&&body` description format
    /// when the indexer has no separate title.
    pub fn title_and_body(&self) -> (String, String) {
        let (title, body) = split_description(&self.description);
        if self.title.is_empty() {
            (title.to_string(), body.to_string())
        } else {
            (self.title.clone(), body.to_string())
        }
    }
}

/// Unix-second bounds of the voting period.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct VotingWindow {
    pub start: u64,
    pub end: u64,
}

impl VotingWindow {
    pub fn has_started(&self, now: u64) -> bool {
        now > self.start
    }

    pub fn has_ended(&self, now: u64) -> bool {
        now > self.end
    }

    pub fn is_open(&self, now: u64) -> bool {
        self.has_started(now) && !self.has_ended(now)
    }
}

/// Splits `title&&body` at the first separator. Descriptions without one are
/// all title.
pub fn split_description(description: &str) -> (&str, &str) {
    description
        .split_once(DESCRIPTION_SEPARATOR)
        .unwrap_or((description, ""))
}

pub fn parse_proposal_id(raw: &str) -> Result<B256, ProposalError> {
    let raw = raw.trim();
    match raw.strip_prefix("0x") {
        Some(digits) if digits.len() == 64 => raw
            .parse()
            .map_err(|_| ProposalError::InvalidProposalId(raw.to_string())),
        _ => Err(ProposalError::InvalidProposalId(raw.to_string())),
    }
}

fn parse_value(raw: &str) -> Result<U256, ProposalError> {
    raw.trim()
        .parse()
        .map_err(|_| ProposalError::InvalidValue(raw.to_string()))
}

fn parse_stored_calldata(raw: &str) -> Result<Bytes, ProposalError> {
    Ok(parse_calldata(&normalize_calldata(raw))?)
}

fn number_or_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(u64),
        String(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProposalError {
    #[error(
        "Proposal data is inconsistent: {targets} targets, {values} values, {calldatas} calldatas"
    )]
    Inconsistent {
        targets: usize,
        values: usize,
        calldatas: usize,
    },
    #[error("Invalid transaction value `{0}`")]
    InvalidValue(String),
    #[error(transparent)]
    Calldata(#[from] CalldataError),
    #[error("Invalid proposal id `{0}`")]
    InvalidProposalId(String),
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::test_utils::{recipient, RECIPIENT};

    const PROPOSAL_ID: &str = "0x6e2a8f1c4b3d5e7f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3c4d5e6f7a8b9c0d1e2f";

    fn record(calldatas: serde_json::Value) -> ProposalRecord {
        serde_json::from_value(json!({
            "proposalId": PROPOSAL_ID,
            "proposalNumber": "87",
            "title": "",
            "description": "Fund the skatepark&&Ramps for everyone.",
            "proposer": RECIPIENT,
            "forVotes": 12,
            "againstVotes": "3",
            "abstainVotes": 0,
            "voteStart": "1735689600",
            "voteEnd": 1736294400,
            "timeCreated": "1735603200",
            "targets": [RECIPIENT, "0x833589fcd6edb6e08f4c7c32d4f71b54bda02913"],
            "values": ["100000000000000000", "0"],
            "calldatas": calldatas,
            "votes": [
                { "voter": RECIPIENT.to_lowercase(), "support": "FOR", "weight": "4", "reason": "yes" }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_numeric_fields_accept_numbers_and_strings() {
        let record = record(json!(["0x", "0xd09de08a"]));
        assert_eq!(record.proposal_number, 87);
        assert_eq!(record.against_votes, 3);
        assert_eq!(record.vote_start, 1_735_689_600);
        assert_eq!(record.vote_end, 1_736_294_400);
        assert_eq!(record.time_created, 1_735_603_200);
        assert_eq!(record.votes[0].weight, 4);
    }

    #[test]
    fn test_transactions_from_list_and_delimited_calldatas() {
        let from_list = record(json!(["0", "0xd09de08a"])).transactions().unwrap();
        let from_string = record(json!("0x:0xd09de08a")).transactions().unwrap();

        assert_eq!(from_list, from_string);
        assert_eq!(from_list.len(), 2);
        assert!(from_list[0].is_plain_transfer());
        assert_eq!(from_list[0].value_string(), "100000000000000000");
        assert_eq!(from_list[1].calldata_hex(), "0xd09de08a");
    }

    #[test]
    fn test_inconsistent_lengths() {
        assert_eq!(
            record(json!(["0x"])).transactions(),
            Err(ProposalError::Inconsistent {
                targets: 2,
                values: 2,
                calldatas: 1
            })
        );
    }

    #[test]
    fn test_voter_record_ignores_case() {
        let record = record(json!(["0x", "0x"]));
        let vote = record.voter_record(recipient()).unwrap();
        assert_eq!(vote.support, VoteSupport::For);
        assert!(record.voter_record(Address::ZERO).is_none());
    }

    #[test]
    fn test_record_vote_updates_tally() {
        let mut record = record(json!(["0x", "0x"]));
        record.record_vote(VoteRecord {
            voter: Address::repeat_byte(0x11),
            support: VoteSupport::Against,
            weight: 2,
            reason: None,
        });

        assert_eq!(record.against_votes, 5);
        assert_eq!(record.for_votes, 12);
        assert_eq!(record.votes.len(), 2);
        assert!(record.voter_record(Address::repeat_byte(0x11)).is_some());
    }

    #[test]
    fn test_voting_window() {
        let window = record(json!(["0x", "0x"])).voting_window();
        assert!(!window.has_started(1_735_689_600));
        assert!(window.is_open(1_735_689_601));
        assert!(window.is_open(1_736_294_400));
        assert!(window.has_ended(1_736_294_401));
    }

    #[test]
    fn test_title_from_description() {
        let record = record(json!(["0x", "0x"]));
        assert_eq!(
            record.title_and_body(),
            (
                "Fund the skatepark".to_string(),
                "Ramps for everyone.".to_string()
            )
        );
        assert_eq!(split_description("No body"), ("No body", ""));
        assert_eq!(split_description("a&&b&&c"), ("a", "b&&c"));
    }

    #[test]
    fn test_parse_proposal_id() {
        assert!(parse_proposal_id(PROPOSAL_ID).is_ok());
        assert!(parse_proposal_id("0x1234").is_err());
        assert!(parse_proposal_id(&PROPOSAL_ID[2..]).is_err());
    }
}

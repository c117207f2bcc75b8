use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::{base58_decode_32, base58_encode, UtilsError};

/// A single request made from the command line: which slot, and optionally
/// which account to look for.
#[derive(Clone, Debug, PartialEq)]
pub struct SlotQuery {
    pub slot_number: u64,
    pub account_address: Option<String>,
}

impl SlotQuery {
    pub fn new(slot_number: u64, account_address: Option<String>) -> Self {
        SlotQuery {
            slot_number,
            account_address,
        }
    }
    /// The address to check participation for. An empty address is treated
    /// as no address.
    pub fn address_to_check(&self) -> Option<&str> {
        self.account_address.as_deref().filter(|a| !a.is_empty())
    }
}

/// Block data for a slot, as written to disk.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SlotReport {
    pub slot: u64,
    /// Block as returned by the node, not validated.
    pub block_info: Value,
    pub account_participation: bool,
    pub account_address: Option<String>,
}

/// Outcome of a fetch that did not produce block data.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SlotFailure {
    pub error: String,
    pub slot: u64,
    pub account_address: Option<String>,
}

/// Either a report or a failure. Serialized without a tag so that both
/// look like a flat JSON object.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SlotResult {
    Failed(SlotFailure),
    Found(SlotReport),
}

impl SlotResult {
    pub fn slot(&self) -> u64 {
        match self {
            SlotResult::Failed(failure) => failure.slot,
            SlotResult::Found(report) => report.slot,
        }
    }
    pub fn error(&self) -> Option<&str> {
        match self {
            SlotResult::Failed(failure) => Some(&failure.error),
            SlotResult::Found(_) => None,
        }
    }
}

/// An ed25519 public key (32 bytes), displayed as base58.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Pubkey([u8; 32]);

impl Pubkey {
    pub fn to_bytes(self) -> [u8; 32] {
        self.0
    }
}

impl FromStr for Pubkey {
    type Err = UtilsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Pubkey(base58_decode_32(s)?))
    }
}

impl Display for Pubkey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", base58_encode(self.0))
    }
}

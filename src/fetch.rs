//! Calls a node for a single block and checks it for an account.
use std::str::FromStr;

use log::{debug, info, warn};
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use url::{ParseError, Url};

use crate::{
    rpc::{get_block, BlockResponse},
    types::{Pubkey, SlotFailure, SlotQuery, SlotReport, SlotResult},
    utils::UtilsError,
};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Url error {0}")]
    Url(#[from] ParseError),
    #[error("Reqwest error {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("RPC request error: {message}")]
    Rpc { message: String },
    #[error("Invalid account address {address}: {source}")]
    InvalidAddress { address: String, source: UtilsError },
}

/// Fetches the block for a slot and, if an address is given, whether that
/// address appears in any transaction of the block.
///
/// Every failure is folded into a [`SlotFailure`] carrying the error message.
pub async fn fetch_slot(url: &str, query: &SlotQuery) -> SlotResult {
    match try_fetch_slot(url, query).await {
        Ok(report) => SlotResult::Found(report),
        Err(e) => {
            warn!("Fetch for slot {} failed: {e}", query.slot_number);
            SlotResult::Failed(SlotFailure {
                error: e.to_string(),
                slot: query.slot_number,
                account_address: query.account_address.clone(),
            })
        }
    }
}

/// As [`fetch_slot`], but keeps the error kind.
pub async fn try_fetch_slot(url: &str, query: &SlotQuery) -> Result<SlotReport, FetchError> {
    let slot = query.slot_number;
    let client = Client::new();
    info!("Sending RPC request for block {slot}");
    debug!("Target node {url}");
    let response = client
        .post(Url::parse(url)?)
        .json(&get_block(slot))
        .send()
        .await?
        .json::<BlockResponse>()
        .await?;

    if let Some(error) = response.error {
        return Err(FetchError::Rpc {
            message: error.message,
        });
    }
    let block_info = response.result;
    info!("Block information received");

    let mut report = SlotReport {
        slot,
        block_info,
        account_participation: false,
        account_address: query.account_address.clone(),
    };

    if let Some(address) = query.address_to_check() {
        let pubkey = Pubkey::from_str(address).map_err(|source| FetchError::InvalidAddress {
            address: address.to_owned(),
            source,
        })?;
        info!("Checking participation of account: {pubkey}");
        report.account_participation = account_participates(&report.block_info, address);
    }
    Ok(report)
}

/// Returns true if any transaction in the block lists the address among
/// its message account keys.
///
/// Missing fields at any level are treated as "no accounts".
pub fn account_participates(block_info: &Value, address: &str) -> bool {
    let Some(transactions) = block_info.get("transactions").and_then(Value::as_array) else {
        return false;
    };
    debug!("Scanning {} transactions", transactions.len());
    transactions.iter().any(|tx| {
        tx.get("transaction")
            .and_then(|t| t.get("message"))
            .and_then(|m| m.get("accountKeys"))
            .and_then(Value::as_array)
            .map_or(false, |keys| {
                keys.iter().any(|key| key.as_str() == Some(address))
            })
    })
}

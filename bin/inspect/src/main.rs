use std::io::{self, Write};

use anyhow::Result;
use clap::{error::ErrorKind, Parser};
use solslot::{
    fetch::fetch_slot,
    store::save_slot_report,
    types::{SlotQuery, SlotResult},
};

use crate::cli::{AppArgs, EXAMPLE, USAGE};

mod cli;

/// Get a Solana block for a slot and save it as slot_<slot>.json.
///
/// If an account is given, reports whether the account appears in any
/// transaction of the block.
/// ```command
/// solslot_inspect 123456789 9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin
/// ```
/// Failures are printed and the process still exits normally.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    let mut stdout = io::stdout();
    if let Err(e) = start(&mut stdout).await {
        println!("Unexpected error: {e}");
    }
}

async fn start<W: Write>(out: &mut W) -> Result<()> {
    let args = match AppArgs::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    run(args, out).await
}

/// Fetches, saves and reports on one slot. Expected failures (bad input,
/// node errors) are written to `out` rather than returned.
async fn run<W: Write>(args: AppArgs, out: &mut W) -> Result<()> {
    let Some(raw_slot) = args.slot_number.as_deref() else {
        writeln!(out, "{USAGE}")?;
        writeln!(out, "{EXAMPLE}")?;
        return Ok(());
    };
    let Ok(slot_number) = raw_slot.trim().parse::<u64>() else {
        writeln!(out, "Error: the slot number must be an integer")?;
        return Ok(());
    };
    let query = SlotQuery::new(slot_number, args.account_address);

    writeln!(out, "Fetching information for slot {slot_number}...")?;
    if let Some(address) = query.address_to_check() {
        writeln!(out, "Checking participation of account: {address}")?;
    }

    let report = match fetch_slot(args.rpc_url.as_str(), &query).await {
        SlotResult::Found(report) => report,
        SlotResult::Failed(failure) => {
            writeln!(out, "Error: {}", failure.error)?;
            return Ok(());
        }
    };

    let filename = save_slot_report(&report, args.output.as_deref())?;
    writeln!(out, "Information saved to: {}", filename.display())?;

    if let Some(address) = query.address_to_check() {
        if report.account_participation {
            writeln!(out, "✓ Account {address} participated in slot {slot_number}")?;
        } else {
            writeln!(out, "✗ Account {address} did not participate in slot {slot_number}")?;
        }
    }
    Ok(())
}

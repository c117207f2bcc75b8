//! For Command Line Interface for solslot_inspect

use std::path::PathBuf;

use clap::Parser;
use solslot::rpc::MAINNET_RPC_URL;
use url::Url;

pub const USAGE: &str = "Usage: solslot_inspect <slot_number> [account_address]";
pub const EXAMPLE: &str =
    "Example: solslot_inspect 123456789 9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct AppArgs {
    /// Slot to get the block for
    #[clap(allow_negative_numbers = true)]
    pub slot_number: Option<String>,
    /// Account to look for among the transaction account keys of the block
    pub account_address: Option<String>,
    /// Url of node for getBlock requests
    #[clap(long, env = "SOLSLOT_RPC_URL", default_value_t = Url::parse(MAINNET_RPC_URL).expect("Couldn't read node"))]
    pub rpc_url: Url,
    /// File to create. Defaults to slot_<slot_number>.json in the working directory
    #[clap(short, long)]
    pub output: Option<PathBuf>,
}

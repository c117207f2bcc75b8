pub mod fetch;
pub mod rpc;
pub mod store;
pub mod types;
pub mod utils;

//! AWS Systems Manager backend for paramsync.

mod client;
mod error;
mod store;

pub use client::ClientOptions;
pub use error::AwsError;
pub use store::SsmStore;

//! Static file handlers for a federated-learning data station.
//!
//! A data station node exposes two remote procedures to analyses running in
//! the federation: one lists the files an operator placed in the configured
//! static-file folder, one fetches a single file's raw bytes. Both are
//! stateless and read their configuration from the node environment on every
//! invocation.
//!
//! The node runtime itself (task scheduling, result encryption, transport) is
//! not part of this crate; the `v6-static-files` binary only implements the
//! container side of the contract: read a JSON request from `INPUT_FILE`,
//! dispatch, write the reply to `OUTPUT_FILE`.

pub mod config;
pub mod denylist;
pub mod handler;
pub mod logger;
pub mod rpc;

pub use config::Settings;
pub use rpc::{dispatch, DispatchError, RpcRequest};

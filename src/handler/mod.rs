//! Remote-procedure handlers exposed by the data station.
//!
//! Each handler is stateless and runs once per task: the node passes the
//! caller's keyword arguments, the handler reads the filesystem and returns
//! a reply value that the node encrypts and ships back to the server.

pub mod fetch;
pub mod list;

pub use fetch::{fetch_static_file, FetchReply};
pub use list::list_static_files;

//! weft-util - Text helpers built around a greedy line wrapper.
//!
//! The centrepiece is [`strings::wrap_with`], a single-pass reflow engine
//! with soft and hard breaks. The crate also carries string predicates and
//! slicing helpers, case conversion, a key/value parser and a SQL Server
//! connection-URI parser.

pub mod fuzzer;
pub mod sql_uri;
pub mod strings;

// Re-exports for convenience
pub use fuzzer::Fuzzer;
pub use sql_uri::{parse_sql_server_uri, SqlServerConnection, SqlUriError};
pub use strings::{wrap, wrap_with, BreakSet, Reflow, WrapError, WrapMethod, WrapOptions};

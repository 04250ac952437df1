//! Forwarding orchestration for multi-hop transfers.
//!
//! Given a parsed forwarding instruction and the received token, the
//! [`Forwarder`] splits off the protocol fee, funds the chain's fee pool,
//! and issues the onward transfer. One linear pass per invocation, no
//! retries, no persistent state: fee funding strictly precedes the send,
//! and a fee-funding failure aborts the forward entirely.

pub mod error;
pub mod fee;
pub mod forwarder;
pub mod metrics;

pub use error::ForwardError;
pub use fee::{split_fee, FeeSplit};
pub use forwarder::{default_transfer_timeout, Forwarder, DEFAULT_TIMEOUT_NANOS};
pub use metrics::ForwardMetrics;

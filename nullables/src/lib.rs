//! Nullable infrastructure for deterministic testing.
//!
//! The forwarding middleware's external dependencies (clock, fee pool,
//! transfer sender, parameter store) are abstracted behind traits. This
//! crate provides test-friendly implementations that:
//! - Return deterministic values
//! - Record every call for later inspection
//! - Can be programmed to fail with a chosen message
//! - Never touch the filesystem or network
//!
//! Usage: swap real host-ledger implementations for nullables in tests.

pub mod clock;
pub mod ledger;
pub mod params;

pub use clock::NullClock;
pub use ledger::{FundCall, NullFeePool, NullTransferSender, SendCall};
pub use params::NullParams;

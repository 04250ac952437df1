//! Fundamental types for the waypoint forwarding middleware.
//!
//! This crate defines the types shared across every other crate in the
//! workspace: validated chain addresses and the codec that produces them,
//! coins, timestamps, forwarding parameters, and the traits through which
//! the middleware reaches into the host chain's ledger.

pub mod address;
pub mod coin;
pub mod host;
pub mod params;
pub mod time;

pub use address::{AddressCodec, AddressError, Bech32Codec, ChainAddress};
pub use coin::Coin;
pub use host::{FeeParamSource, FeePoolFunder, HostError, TimeoutHeight, TransferSender};
pub use params::{ForwardParams, ParamsError, MAX_FEE_BPS};
pub use time::Timestamp;

//! Receiver-field parsing for multi-hop forwarding.
//!
//! An incoming transfer's receiver field is overloaded: it is either a
//! plain address on this chain, or a forwarding instruction of the shape
//! `<address>|<port>/<channel>:<destination>` meaning "receive here, pay
//! the protocol fee, then re-send the remainder on that channel to that
//! destination".
//!
//! Parsing is a pure function of the input string and the address codec.
//! It runs inside replayed, consensus-verified state transitions, so every
//! node must classify identical input identically.

pub mod error;
pub mod receiver;

pub use error::ParseError;
pub use receiver::{ForwardInstruction, ParsedReceiver, ReceiverParser};

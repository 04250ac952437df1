//! Interfaces to the host chain's ledger subsystems.
//!
//! The forwarding middleware never owns balances or parameters. It reads
//! the fee ratio through [`FeeParamSource`] and mutates state only through
//! [`FeePoolFunder`] and [`TransferSender`], all injected at construction.
//! Both mutators execute synchronously inside the same atomic state
//! transition as the middleware itself.

use crate::address::ChainAddress;
use crate::coin::Coin;
use std::sync::Arc;

/// Errors surfaced by host-ledger collaborators.
///
/// The middleware wraps these without inspecting them, preserving the
/// host's diagnostic text for the caller.
pub type HostError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Height-based expiry for an outbound transfer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TimeoutHeight {
    pub revision_number: u64,
    pub revision_height: u64,
}

impl TimeoutHeight {
    /// A zero height disables height-based expiry, leaving only the
    /// wall-clock timestamp deadline in force.
    pub const DISABLED: Self = Self {
        revision_number: 0,
        revision_height: 0,
    };

    pub fn is_disabled(&self) -> bool {
        *self == Self::DISABLED
    }
}

/// Read access to the current fee ratio, in basis points.
pub trait FeeParamSource {
    fn fee_bps(&self) -> u32;
}

/// Moves coins from a payer account into the chain's collective fee pool.
pub trait FeePoolFunder {
    fn fund_fee_pool(&self, fees: &[Coin], payer: &ChainAddress) -> Result<(), HostError>;
}

/// Issues an outbound cross-chain transfer on a channel end.
pub trait TransferSender {
    #[allow(clippy::too_many_arguments)]
    fn send_transfer(
        &self,
        port: &str,
        channel: &str,
        token: &Coin,
        sender: &ChainAddress,
        receiver: &str,
        timeout_height: TimeoutHeight,
        timeout_timestamp_nanos: u64,
    ) -> Result<(), HostError>;
}

impl<T: FeeParamSource + ?Sized> FeeParamSource for Arc<T> {
    fn fee_bps(&self) -> u32 {
        (**self).fee_bps()
    }
}

impl<T: FeePoolFunder + ?Sized> FeePoolFunder for Arc<T> {
    fn fund_fee_pool(&self, fees: &[Coin], payer: &ChainAddress) -> Result<(), HostError> {
        (**self).fund_fee_pool(fees, payer)
    }
}

impl<T: TransferSender + ?Sized> TransferSender for Arc<T> {
    fn send_transfer(
        &self,
        port: &str,
        channel: &str,
        token: &Coin,
        sender: &ChainAddress,
        receiver: &str,
        timeout_height: TimeoutHeight,
        timeout_timestamp_nanos: u64,
    ) -> Result<(), HostError> {
        (**self).send_transfer(
            port,
            channel,
            token,
            sender,
            receiver,
            timeout_height,
            timeout_timestamp_nanos,
        )
    }
}

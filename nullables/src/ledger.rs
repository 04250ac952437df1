//! Nullable host-ledger mutators — record calls, fail on demand.

use std::sync::Mutex;
use waypoint_types::{
    ChainAddress, Coin, FeePoolFunder, HostError, TimeoutHeight, TransferSender,
};

/// One recorded `fund_fee_pool` invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FundCall {
    pub fees: Vec<Coin>,
    pub payer: ChainAddress,
}

/// An in-memory fee pool that records every funding call.
///
/// Thread-safe; a programmed failure message makes the next calls fail
/// with that text until cleared.
pub struct NullFeePool {
    calls: Mutex<Vec<FundCall>>,
    failure: Mutex<Option<String>>,
}

impl NullFeePool {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: Mutex::new(None),
        }
    }

    /// Make subsequent funding calls fail with `message`.
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.failure.lock().unwrap() = Some(message.into());
    }

    pub fn clear_failure(&self) {
        *self.failure.lock().unwrap() = None;
    }

    /// All successfully recorded funding calls, in order.
    pub fn calls(&self) -> Vec<FundCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for NullFeePool {
    fn default() -> Self {
        Self::new()
    }
}

impl FeePoolFunder for NullFeePool {
    fn fund_fee_pool(&self, fees: &[Coin], payer: &ChainAddress) -> Result<(), HostError> {
        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(message.into());
        }
        self.calls.lock().unwrap().push(FundCall {
            fees: fees.to_vec(),
            payer: payer.clone(),
        });
        Ok(())
    }
}

/// One recorded `send_transfer` invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SendCall {
    pub port: String,
    pub channel: String,
    pub token: Coin,
    pub sender: ChainAddress,
    pub receiver: String,
    pub timeout_height: TimeoutHeight,
    pub timeout_timestamp_nanos: u64,
}

/// An in-memory transfer sender that records every outbound send.
pub struct NullTransferSender {
    calls: Mutex<Vec<SendCall>>,
    failure: Mutex<Option<String>>,
}

impl NullTransferSender {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: Mutex::new(None),
        }
    }

    /// Make subsequent sends fail with `message`.
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.failure.lock().unwrap() = Some(message.into());
    }

    pub fn clear_failure(&self) {
        *self.failure.lock().unwrap() = None;
    }

    /// All successfully recorded sends, in order.
    pub fn calls(&self) -> Vec<SendCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for NullTransferSender {
    fn default() -> Self {
        Self::new()
    }
}

impl TransferSender for NullTransferSender {
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
        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(message.into());
        }
        self.calls.lock().unwrap().push(SendCall {
            port: port.to_owned(),
            channel: channel.to_owned(),
            token: token.clone(),
            sender: sender.clone(),
            receiver: receiver.to_owned(),
            timeout_height,
            timeout_timestamp_nanos,
        });
        Ok(())
    }
}

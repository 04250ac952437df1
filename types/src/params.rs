//! Forwarding parameters.
//!
//! The protocol fee ratio is expressed in basis points (1 bps = 0.01%),
//! keeping fee arithmetic in deterministic integers. Persistence of these
//! parameters belongs to the host chain's parameter store; this type is
//! only the in-memory shape plus its validation rule.

use crate::host::FeeParamSource;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One hundred percent, in basis points.
pub const MAX_FEE_BPS: u32 = 10_000;

/// Governable parameters of the forwarding middleware.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForwardParams {
    /// Fraction of each forwarded amount retained as a protocol fee,
    /// in basis points (0..=10_000).
    pub fee_bps: u32,
}

impl ForwardParams {
    pub fn new(fee_bps: u32) -> Self {
        Self { fee_bps }
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.fee_bps > MAX_FEE_BPS {
            return Err(ParamsError::FeeOutOfRange(self.fee_bps));
        }
        Ok(())
    }
}

impl Default for ForwardParams {
    fn default() -> Self {
        Self { fee_bps: 0 }
    }
}

/// A fixed parameter set is itself a valid parameter source.
impl FeeParamSource for ForwardParams {
    fn fee_bps(&self) -> u32 {
        self.fee_bps
    }
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ParamsError {
    #[error("fee ratio {0} bps exceeds {MAX_FEE_BPS} bps (100%)")]
    FeeOutOfRange(u32),
}

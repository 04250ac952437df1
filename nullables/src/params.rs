//! Nullable parameter source — a settable fee ratio.

use std::sync::atomic::{AtomicU32, Ordering};
use waypoint_types::FeeParamSource;

/// A parameter source whose fee ratio can be changed mid-test.
pub struct NullParams {
    fee_bps: AtomicU32,
}

impl NullParams {
    pub fn new(fee_bps: u32) -> Self {
        Self {
            fee_bps: AtomicU32::new(fee_bps),
        }
    }

    pub fn set_fee_bps(&self, fee_bps: u32) {
        self.fee_bps.store(fee_bps, Ordering::Relaxed);
    }
}

impl FeeParamSource for NullParams {
    fn fee_bps(&self) -> u32 {
        self.fee_bps.load(Ordering::Relaxed)
    }
}

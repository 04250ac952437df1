//! Protocol fee arithmetic.
//!
//! All arithmetic is integer-only and overflow-free: the split runs
//! inside consensus-critical transaction processing, where every node
//! must compute bit-for-bit identical results.

use waypoint_types::MAX_FEE_BPS;

/// The two halves of a forwarded amount: the protocol fee retained on
/// this chain and the remainder sent onward.
///
/// `fee + forward` always equals the original amount exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeeSplit {
    pub fee: u128,
    pub forward: u128,
}

/// Split `amount` by a fee ratio given in basis points.
///
/// The fee is `amount * fee_bps / 10_000` rounded half up, computed via
/// quotient/remainder decomposition so the intermediate products cannot
/// overflow `u128` for any input. Ratios above 100% are clamped.
pub fn split_fee(amount: u128, fee_bps: u32) -> FeeSplit {
    let bps = u128::from(fee_bps.min(MAX_FEE_BPS));
    let scale = u128::from(MAX_FEE_BPS);
    let fee = (amount / scale) * bps + ((amount % scale) * bps + scale / 2) / scale;
    FeeSplit {
        fee,
        forward: amount - fee,
    }
}

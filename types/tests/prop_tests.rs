use proptest::prelude::*;

use waypoint_types::{Coin, ForwardParams, Timestamp, MAX_FEE_BPS};

proptest! {
    /// Timestamp ordering mirrors the ordering of the raw nanosecond values.
    #[test]
    fn timestamp_ordering(a in any::<u64>(), b in any::<u64>()) {
        let ta = Timestamp::from_nanos(a);
        let tb = Timestamp::from_nanos(b);
        prop_assert_eq!(ta <= tb, a <= b);
        prop_assert_eq!(ta == tb, a == b);
    }

    /// saturating_add_nanos never moves a timestamp backwards.
    #[test]
    fn timestamp_add_is_monotone(base in any::<u64>(), delta in any::<u64>()) {
        let ts = Timestamp::from_nanos(base);
        prop_assert!(ts.saturating_add_nanos(delta) >= ts);
    }

    /// checked_sub after checked_add restores the original amount.
    #[test]
    fn coin_add_sub_roundtrip(amount in 0u128..=u128::MAX / 2, delta in 0u128..=u128::MAX / 2) {
        let coin = Coin::new("uatom", amount);
        let bumped = coin.checked_add(delta).unwrap();
        prop_assert_eq!(bumped.checked_sub(delta).unwrap().amount, amount);
    }

    /// Parameter validation accepts exactly the 0..=10_000 bps range.
    #[test]
    fn params_validation_bound(bps in 0u32..=3 * MAX_FEE_BPS) {
        let params = ForwardParams::new(bps);
        prop_assert_eq!(params.validate().is_ok(), bps <= MAX_FEE_BPS);
    }
}

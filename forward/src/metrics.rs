//! Prometheus metrics for forwarding activity.
//!
//! Best-effort observability: the orchestrator records into these after a
//! forward has already succeeded, so metric state can never influence the
//! outcome of an invocation. The owning [`Registry`] can be encoded into
//! the Prometheus text exposition format by the host's metrics endpoint.

use prometheus::{
    register_gauge_vec_with_registry, register_int_counter_with_registry, GaugeVec, IntCounter,
    Opts, Registry,
};
use waypoint_types::Coin;

/// Collection of forwarding metrics, registered under a dedicated
/// [`Registry`].
pub struct ForwardMetrics {
    pub registry: Registry,

    /// Total number of transfers successfully forwarded.
    pub forwards_total: IntCounter,
    /// Amount of the most recently forwarded token, per denomination.
    pub last_forwarded_amount: GaugeVec,
}

impl ForwardMetrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let forwards_total = register_int_counter_with_registry!(
            Opts::new(
                "waypoint_forwards_total",
                "Total transfers successfully forwarded to the next hop"
            ),
            registry
        )
        .expect("failed to register forwards_total counter");

        let last_forwarded_amount = register_gauge_vec_with_registry!(
            Opts::new(
                "waypoint_last_forwarded_amount",
                "Amount of the most recently forwarded token, keyed by denomination"
            ),
            &["denom"],
            registry
        )
        .expect("failed to register last_forwarded_amount gauge");

        Self {
            registry,
            forwards_total,
            last_forwarded_amount,
        }
    }

    /// Record one successful forward of `token`.
    pub fn record_forward(&self, token: &Coin) {
        self.last_forwarded_amount
            .with_label_values(&[token.denom.as_str()])
            .set(token.amount as f64);
        self.forwards_total.inc();
    }
}

impl Default for ForwardMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_counter_and_gauge() {
        let metrics = ForwardMetrics::new();
        metrics.record_forward(&Coin::new("uatom", 950));
        metrics.record_forward(&Coin::new("uatom", 120));
        metrics.record_forward(&Coin::new("uosmo", 7));

        assert_eq!(metrics.forwards_total.get(), 3);
        assert_eq!(
            metrics
                .last_forwarded_amount
                .with_label_values(&["uatom"])
                .get(),
            120.0
        );
        assert_eq!(
            metrics
                .last_forwarded_amount
                .with_label_values(&["uosmo"])
                .get(),
            7.0
        );
    }
}

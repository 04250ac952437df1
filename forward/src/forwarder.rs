//! The forwarding orchestrator.

use crate::error::ForwardError;
use crate::fee::split_fee;
use crate::metrics::ForwardMetrics;
use std::sync::Arc;
use waypoint_parser::ForwardInstruction;
use waypoint_types::{
    Coin, FeeParamSource, FeePoolFunder, TimeoutHeight, Timestamp, TransferSender,
};

/// Wall-clock lifetime granted to each onward transfer: 30 minutes.
pub const DEFAULT_TIMEOUT_NANOS: u64 = 30 * 60 * 1_000_000_000;

/// The nanosecond deadline attached to an onward transfer issued at `now`.
///
/// Height-based expiry is disabled ([`TimeoutHeight::DISABLED`]); this
/// wall-clock deadline is the only one in force.
pub fn default_transfer_timeout(now: Timestamp) -> u64 {
    now.saturating_add_nanos(DEFAULT_TIMEOUT_NANOS).as_nanos()
}

/// Executes forwarding instructions against the host ledger.
///
/// All collaborators are injected at construction: the fee-ratio source,
/// the fee-pool funder, and the transfer sender. The forwarder itself
/// holds no mutable state; each invocation is one linear pass.
pub struct Forwarder<P, F, T> {
    params: P,
    fee_pool: F,
    transfer: T,
    metrics: Option<Arc<ForwardMetrics>>,
}

impl<P, F, T> Forwarder<P, F, T>
where
    P: FeeParamSource,
    F: FeePoolFunder,
    T: TransferSender,
{
    pub fn new(params: P, fee_pool: F, transfer: T) -> Self {
        Self {
            params,
            fee_pool,
            transfer,
            metrics: None,
        }
    }

    /// Attach a metrics observer, recorded into only after a forward
    /// succeeds.
    pub fn with_metrics(mut self, metrics: Arc<ForwardMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Pay the protocol fee out of the received token, then re-send the
    /// remainder on the instruction's channel end.
    ///
    /// Fee funding strictly precedes the send; if it fails the send is
    /// never attempted. If the send fails after a successful fee payment,
    /// the fee is not rolled back here; the enclosing transaction's
    /// atomicity is the only backstop.
    pub fn forward_packet(
        &self,
        instruction: &ForwardInstruction,
        token: &Coin,
        now: Timestamp,
    ) -> Result<(), ForwardError> {
        let split = split_fee(token.amount, self.params.fee_bps());

        if split.fee > 0 {
            let fee = Coin::new(token.denom.clone(), split.fee);
            if let Err(err) = self
                .fee_pool
                .fund_fee_pool(std::slice::from_ref(&fee), &instruction.receiver)
            {
                tracing::warn!(payer = %instruction.receiver, %fee, error = %err, "fee payment failed");
                return Err(ForwardError::FeePayment(err));
            }
        }

        let forward = Coin::new(token.denom.clone(), split.forward);
        if let Err(err) = self.transfer.send_transfer(
            &instruction.port,
            &instruction.channel,
            &forward,
            &instruction.receiver,
            &instruction.final_destination,
            TimeoutHeight::DISABLED,
            default_transfer_timeout(now),
        ) {
            tracing::warn!(
                port = %instruction.port,
                channel = %instruction.channel,
                error = %err,
                "forward transfer failed"
            );
            return Err(ForwardError::SendFailed(err));
        }

        tracing::debug!(
            port = %instruction.port,
            channel = %instruction.channel,
            receiver = %instruction.final_destination,
            amount = %forward,
            fee = %split.fee,
            "forwarded transfer"
        );
        if let Some(metrics) = &self.metrics {
            metrics.record_forward(token);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waypoint_nullables::{NullClock, NullFeePool, NullParams, NullTransferSender};
    use waypoint_parser::{ParsedReceiver, ReceiverParser};
    use waypoint_types::Bech32Codec;

    const ALICE: &str = "cosmos1vzxkv3lxccnttr9rs0002s93sgw72h7ghukuhs";
    const BOB: &str = "cosmos16plylpsgxechajltx9yeseqexzdzut9g8vla4k";

    fn instruction() -> ForwardInstruction {
        let raw = format!("{ALICE}|transfer/channel-0:{BOB}");
        match ReceiverParser::new(Bech32Codec::new("cosmos"))
            .parse(&raw)
            .unwrap()
        {
            ParsedReceiver::Forward(instruction) => instruction,
            ParsedReceiver::Local(_) => unreachable!(),
        }
    }

    fn forwarder(
        fee_bps: u32,
    ) -> (
        Forwarder<NullParams, Arc<NullFeePool>, Arc<NullTransferSender>>,
        Arc<NullFeePool>,
        Arc<NullTransferSender>,
    ) {
        let pool = Arc::new(NullFeePool::new());
        let sender = Arc::new(NullTransferSender::new());
        let fwd = Forwarder::new(NullParams::new(fee_bps), Arc::clone(&pool), Arc::clone(&sender));
        (fwd, pool, sender)
    }

    #[test]
    fn splits_fee_and_forwards_remainder() {
        let (fwd, pool, sender) = forwarder(500);
        fwd.forward_packet(&instruction(), &Coin::new("uatom", 1000), Timestamp::EPOCH)
            .unwrap();

        let funds = pool.calls();
        assert_eq!(funds.len(), 1);
        assert_eq!(funds[0].fees, vec![Coin::new("uatom", 50)]);
        assert_eq!(funds[0].payer.as_str(), ALICE);

        let sends = sender.calls();
        assert_eq!(sends.len(), 1);
        assert_eq!(sends[0].port, "transfer");
        assert_eq!(sends[0].channel, "channel-0");
        assert_eq!(sends[0].token, Coin::new("uatom", 950));
        assert_eq!(sends[0].sender.as_str(), ALICE);
        assert_eq!(sends[0].receiver, BOB);
    }

    #[test]
    fn zero_fee_skips_fee_pool_entirely() {
        let (fwd, pool, sender) = forwarder(0);
        fwd.forward_packet(&instruction(), &Coin::new("uatom", 1000), Timestamp::EPOCH)
            .unwrap();

        assert!(pool.calls().is_empty());
        assert_eq!(sender.calls()[0].token, Coin::new("uatom", 1000));
    }

    #[test]
    fn fee_failure_aborts_before_send() {
        let (fwd, pool, sender) = forwarder(500);
        pool.fail_with("insufficient funds");

        let err = fwd
            .forward_packet(&instruction(), &Coin::new("uatom", 1000), Timestamp::EPOCH)
            .unwrap_err();

        assert!(matches!(err, ForwardError::FeePayment(_)));
        assert!(err.to_string().contains("insufficient funds"));
        assert!(sender.calls().is_empty(), "send must not run after a fee failure");
    }

    #[test]
    fn send_failure_surfaces_after_fee_was_charged() {
        let (fwd, pool, sender) = forwarder(500);
        sender.fail_with("channel closed");

        let err = fwd
            .forward_packet(&instruction(), &Coin::new("uatom", 1000), Timestamp::EPOCH)
            .unwrap_err();

        assert!(matches!(err, ForwardError::SendFailed(_)));
        assert!(err.to_string().contains("channel closed"));
        // The fee call happened and is not rolled back by the forwarder.
        assert_eq!(pool.calls().len(), 1);
    }

    #[test]
    fn timeout_is_wall_clock_only() {
        let (fwd, _pool, sender) = forwarder(0);
        let clock = NullClock::new(Timestamp::from_secs(1_700_000_000).as_nanos());
        fwd.forward_packet(&instruction(), &Coin::new("uatom", 5), clock.now())
            .unwrap();

        let send = &sender.calls()[0];
        assert!(send.timeout_height.is_disabled());
        assert_eq!(
            send.timeout_timestamp_nanos,
            clock.now().as_nanos() + DEFAULT_TIMEOUT_NANOS
        );

        // A later invocation carries a later deadline.
        clock.advance_secs(60);
        fwd.forward_packet(&instruction(), &Coin::new("uatom", 5), clock.now())
            .unwrap();
        assert_eq!(
            sender.calls()[1].timeout_timestamp_nanos,
            send.timeout_timestamp_nanos + 60 * 1_000_000_000
        );
    }

    #[test]
    fn full_ratio_still_issues_an_empty_send() {
        let (fwd, pool, sender) = forwarder(10_000);
        fwd.forward_packet(&instruction(), &Coin::new("uatom", 42), Timestamp::EPOCH)
            .unwrap();

        assert_eq!(pool.calls()[0].fees, vec![Coin::new("uatom", 42)]);
        assert_eq!(sender.calls()[0].token, Coin::new("uatom", 0));
    }

    #[test]
    fn fee_ratio_is_read_per_invocation() {
        let params = Arc::new(NullParams::new(0));
        let pool = Arc::new(NullFeePool::new());
        let sender = Arc::new(NullTransferSender::new());
        let fwd = Forwarder::new(Arc::clone(&params), Arc::clone(&pool), Arc::clone(&sender));

        fwd.forward_packet(&instruction(), &Coin::new("uatom", 1000), Timestamp::EPOCH)
            .unwrap();
        assert!(pool.calls().is_empty());

        params.set_fee_bps(100);
        fwd.forward_packet(&instruction(), &Coin::new("uatom", 1000), Timestamp::EPOCH)
            .unwrap();
        assert_eq!(pool.calls()[0].fees, vec![Coin::new("uatom", 10)]);
    }

    #[test]
    fn metrics_record_only_on_success() {
        let metrics = Arc::new(ForwardMetrics::new());
        let pool = Arc::new(NullFeePool::new());
        let sender = Arc::new(NullTransferSender::new());
        let fwd = Forwarder::new(NullParams::new(500), Arc::clone(&pool), Arc::clone(&sender))
            .with_metrics(Arc::clone(&metrics));

        sender.fail_with("channel closed");
        let _ = fwd.forward_packet(&instruction(), &Coin::new("uatom", 1000), Timestamp::EPOCH);
        assert_eq!(metrics.forwards_total.get(), 0);

        sender.clear_failure();
        fwd.forward_packet(&instruction(), &Coin::new("uatom", 1000), Timestamp::EPOCH)
            .unwrap();
        assert_eq!(metrics.forwards_total.get(), 1);
        assert_eq!(
            metrics
                .last_forwarded_amount
                .with_label_values(&["uatom"])
                .get(),
            1000.0
        );
    }
}

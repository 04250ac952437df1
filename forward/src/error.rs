use thiserror::Error;
use waypoint_types::HostError;

/// Failure of one forwarding invocation.
///
/// Both variants wrap the host collaborator's error so the transfer-receive
/// handler can branch on the stage while keeping the original diagnostic.
#[derive(Debug, Error)]
pub enum ForwardError {
    /// Funding the fee pool failed; the onward send was never attempted.
    #[error("fee payment failed: {0}")]
    FeePayment(#[source] HostError),

    /// The onward transfer-send failed. A fee charged in the same
    /// invocation is not rolled back here; the enclosing transaction's
    /// atomicity is the only backstop.
    #[error("forward transfer failed: {0}")]
    SendFailed(#[source] HostError),
}

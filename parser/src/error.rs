use thiserror::Error;
use waypoint_types::AddressError;

/// Receiver-field classification failure.
///
/// All variants are terminal: a receiver field that fails to parse will
/// fail identically on every retry.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The field cannot be classified at all (empty, or separator counts
    /// that match neither grammar form).
    #[error("unparsable receiver: {0}")]
    Unparsable(String),

    /// The field was recognized as an attempted forwarding instruction
    /// but violates the descriptor grammar.
    #[error("formatting incorrect: {0}")]
    InvalidFormat(String),

    /// The address segment failed codec validation. The codec's own
    /// diagnostic is surfaced verbatim.
    #[error(transparent)]
    Address(#[from] AddressError),
}

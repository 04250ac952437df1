//! The receiver-field grammar and its parser.

use crate::error::ParseError;
use waypoint_types::{AddressCodec, ChainAddress};

/// A fully validated forwarding instruction: receive on this chain, then
/// re-send on `port`/`channel` to `final_destination`.
///
/// All fields are non-empty by construction; `final_destination` belongs
/// to the next-hop chain's address space and is deliberately not validated
/// against this chain's codec.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForwardInstruction {
    /// The intermediate receiver on this chain; pays the fee and acts as
    /// sender of the onward transfer.
    pub receiver: ChainAddress,
    pub port: String,
    pub channel: String,
    pub final_destination: String,
}

/// Classification of an incoming transfer's receiver field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParsedReceiver {
    /// Terminal receipt: the transfer ends on this chain.
    Local(ChainAddress),
    /// The funds must be forwarded one more hop.
    Forward(ForwardInstruction),
}

impl ParsedReceiver {
    pub fn is_transfer(&self) -> bool {
        matches!(self, Self::Forward(_))
    }

    /// The receiver on this chain, whichever form the field took.
    pub fn receiver_address(&self) -> &ChainAddress {
        match self {
            Self::Local(addr) => addr,
            Self::Forward(instruction) => &instruction.receiver,
        }
    }

    pub fn instruction(&self) -> Option<&ForwardInstruction> {
        match self {
            Self::Local(_) => None,
            Self::Forward(instruction) => Some(instruction),
        }
    }
}

/// Parses receiver fields against one chain's address codec.
pub struct ReceiverParser<C> {
    codec: C,
}

impl<C: AddressCodec> ReceiverParser<C> {
    pub fn new(codec: C) -> Self {
        Self { codec }
    }

    /// Classify a raw receiver field.
    ///
    /// Grammar:
    /// - plain form: `<address>` (no `|`, no `:`)
    /// - forwarding form: `<address>|<port>/<channel>:<destination>`,
    ///   exactly one `|`, and inside the descriptor exactly one `/`
    ///   strictly before exactly one `:`, all three parts non-empty.
    pub fn parse(&self, raw: &str) -> Result<ParsedReceiver, ParseError> {
        if raw.matches('|').count() > 1 {
            return Err(ParseError::Unparsable("multiple separators".into()));
        }
        match raw.split_once('|') {
            Some((address_part, descriptor)) => {
                let receiver = self.codec.decode(address_part)?;
                let (port, channel, final_destination) =
                    split_descriptor(descriptor).ok_or_else(|| {
                        ParseError::InvalidFormat("expected port/channel:destination".into())
                    })?;
                Ok(ParsedReceiver::Forward(ForwardInstruction {
                    receiver,
                    port: port.to_owned(),
                    channel: channel.to_owned(),
                    final_destination: final_destination.to_owned(),
                }))
            }
            None => {
                if raw.is_empty() {
                    return Err(ParseError::Unparsable("empty input".into()));
                }
                match raw.matches(':').count() {
                    0 => Ok(ParsedReceiver::Local(self.codec.decode(raw)?)),
                    // A lone colon signals an attempted forwarding
                    // descriptor missing its address prefix and pipe.
                    1 => Err(ParseError::InvalidFormat(
                        "missing separator before forwarding descriptor".into(),
                    )),
                    _ => Err(ParseError::Unparsable("ambiguous input".into())),
                }
            }
        }
    }
}

/// Split `<port>/<channel>:<destination>`, enforcing exactly one `/`
/// before exactly one `:` and three non-empty components.
fn split_descriptor(descriptor: &str) -> Option<(&str, &str, &str)> {
    if descriptor.matches('/').count() != 1 || descriptor.matches(':').count() != 1 {
        return None;
    }
    let (port, rest) = descriptor.split_once('/')?;
    // If the colon preceded the slash it ended up inside `port`, and
    // `rest` has none left; split_once fails and the ordering rule holds.
    let (channel, destination) = rest.split_once(':')?;
    if port.is_empty() || channel.is_empty() || destination.is_empty() {
        return None;
    }
    Some((port, channel, destination))
}

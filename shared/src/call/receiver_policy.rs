use volley_serde::{BitReader, BitWrite, Serde, SerdeErr};

use crate::{call::error::EnvelopeError, types::ConnectionId};

/// Who a call is meant for. Independent of how it is delivered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReceiverPolicy {
    /// One specific connection
    Target(ConnectionId),
    /// Every connection allowed to see the calling object
    All,
    /// The server alone
    ServerOnly,
}

impl ReceiverPolicy {
    pub const TARGET_TAG: u8 = 0;
    pub const ALL_TAG: u8 = 1;
    pub const SERVER_ONLY_TAG: u8 = 2;

    pub fn tag(&self) -> u8 {
        match self {
            ReceiverPolicy::Target(_) => Self::TARGET_TAG,
            ReceiverPolicy::All => Self::ALL_TAG,
            ReceiverPolicy::ServerOnly => Self::SERVER_ONLY_TAG,
        }
    }

    /// Reads a tag and, for `Target`, the packed connection id following it
    pub fn read(reader: &mut BitReader) -> Result<Self, EnvelopeError> {
        let tag = u8::de(reader).map_err(|_| EnvelopeError::Header)?;
        match tag {
            Self::TARGET_TAG => {
                let connection_id = ConnectionId::de(reader).map_err(|_| EnvelopeError::Header)?;
                Ok(ReceiverPolicy::Target(connection_id))
            }
            Self::ALL_TAG => Ok(ReceiverPolicy::All),
            Self::SERVER_ONLY_TAG => Ok(ReceiverPolicy::ServerOnly),
            tag => Err(EnvelopeError::UnknownReceiverTag { tag }),
        }
    }
}

impl Serde for ReceiverPolicy {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.tag().ser(writer);
        if let ReceiverPolicy::Target(connection_id) = self {
            connection_id.ser(writer);
        }
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        Self::read(reader).map_err(|_| SerdeErr)
    }

    fn bit_length(&self) -> u32 {
        let mut output = self.tag().bit_length();
        if let ReceiverPolicy::Target(connection_id) = self {
            output += connection_id.bit_length();
        }
        output
    }
}

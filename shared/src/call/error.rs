use thiserror::Error;

use crate::{
    function::error::CodecError,
    types::{FunctionId, ObjectRef},
};

/// Errors raised while writing or reading an invocation envelope
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvelopeError {
    /// The owner reference or function id could not be read
    #[error("Envelope header is truncated or malformed (possible malformed or malicious data)")]
    Header,

    /// The routing tag of a client envelope is not a known receiver policy
    #[error("Unknown receiver tag {tag} in envelope routing header")]
    UnknownReceiverTag { tag: u8 },

    /// An unreliable envelope would not fit in a single packet
    #[error("Envelope of {size} bytes exceeds the unreliable limit of {limit} bytes. Use a reliable DeliveryGuarantee or send fewer parameters")]
    EnvelopeTooLarge { size: usize, limit: usize },

    /// Parameter marshaling failed
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Errors returned from the outgoing call entry points
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Envelope(#[from] EnvelopeError),
}

/// Errors returned while handling a received envelope. The packet that caused
/// one is never partially applied beyond the parameter slots.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReceiveError {
    #[error(transparent)]
    Envelope(#[from] EnvelopeError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Call(#[from] CallError),

    /// No local behaviour answers to the envelope's owner reference
    #[error("No behaviour found for object {} component {}. The object may not be spawned on this host yet", owner.object_id, owner.component_index)]
    ObjectNotFound { owner: ObjectRef },

    /// The behaviour has no function with the envelope's id
    #[error("Function id {function_id} not registered on object {} component {}", owner.object_id, owner.component_index)]
    FunctionNotFound {
        owner: ObjectRef,
        function_id: FunctionId,
    },
}


//! # Volley Shared
//! Typed remote function calls for networked objects: parameter marshaling,
//! call envelopes and receiver routing.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub use volley_serde::{
    BitReader, BitWrite, BitWriter, ConstBitLength, Serde, SerdeErr, SignedInteger,
    SignedVariableInteger, UnsignedInteger, UnsignedVariableInteger, MTU_SIZE_BITS,
    MTU_SIZE_BYTES,
};

mod call;
mod connection;
mod constants;
mod function;
mod types;

pub use call::{
    behaviour_resolver::{BehaviourResolver, ResolvedBehaviour},
    call_config::CallConfig,
    call_context::{CallContext, CallReport},
    call_target::CallTarget,
    envelope::{EnvelopeHeader, InvocationEnvelope},
    error::{CallError, EnvelopeError, ReceiveError},
    receiver_policy::ReceiverPolicy,
    router::{CallRouter, Delivery, RoutePlan},
};
pub use connection::{
    delivery_guarantee::DeliveryGuarantee, message_kind::MessageKind, transport::Transport,
};
pub use constants::FRAGMENTATION_LIMIT_BYTES;
pub use function::{
    callback::{ErasedCallback, FunctionCallback},
    codec::{CodecTable, ParamCodec},
    descriptor::FunctionDescriptor,
    error::{CodecError, RegistryError},
    param::Param,
    param_type::ParamType,
    param_value::{CustomParam, DynParam, ParamValue},
    registry::FunctionRegistry,
};
pub use types::{ComponentIndex, ConnectionId, FunctionId, HostType, ObjectId, ObjectRef};

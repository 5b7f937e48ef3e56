use thiserror::Error;

use crate::{function::param_type::ParamType, types::FunctionId};

/// Errors raised while marshaling parameter values. These are programming or
/// protocol faults and are always surfaced to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A value's runtime type differs from its slot's declared type
    #[error("Parameter {slot} was declared as {expected} but holds a {found} value")]
    TypeMismatch {
        slot: usize,
        expected: ParamType,
        found: ParamType,
    },

    /// No codec is registered for a declared type
    #[error("No codec registered for parameter type {param_type}. Register one with CodecTable::add_codec() or CodecTable::add_serde()")]
    UnsupportedType { param_type: ParamType },

    /// The buffer ran out before every declared parameter was read
    #[error("Input ended while reading parameter {slot}. Sender and receiver likely disagree on the function's parameter types")]
    TruncatedInput { slot: usize },

    /// The bytes of a parameter could not form a value of its type
    #[error("Parameter {slot} of type {param_type} could not be decoded from the input (possible malformed or malicious data)")]
    MalformedValue { slot: usize, param_type: ParamType },

    /// A different number of values than declared parameters was supplied
    #[error("Expected {expected} parameter values but got {found}")]
    ArityMismatch { expected: usize, found: usize },
}

/// Errors raised while building or querying a FunctionRegistry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A function is already registered under this id
    #[error("Function id {function_id} is already registered in this scope")]
    DuplicateFunctionId { function_id: FunctionId },

    /// A function is already registered under this name
    #[error("Function name {name:?} is already registered in this scope")]
    DuplicateFunctionName { name: String },

    /// A parameter type has no codec
    #[error("Function {function_id} declares parameter {slot} of type {param_type}, which has no registered codec")]
    UnsupportedType {
        function_id: FunctionId,
        slot: usize,
        param_type: ParamType,
    },

    /// The registry is locked and cannot be modified
    #[error("FunctionRegistry is already locked. FunctionRegistry.lock() has been called and no further functions may be registered")]
    AlreadyLocked,

    /// No function is registered under this id
    #[error("Function id {function_id} not found in registry. Both ends must register the same functions before any call")]
    FunctionNotFound { function_id: FunctionId },
}

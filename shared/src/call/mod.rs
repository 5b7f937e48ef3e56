pub mod behaviour_resolver;
pub mod call_config;
pub mod call_context;
pub mod call_target;
pub mod envelope;
pub mod error;
pub mod receiver_policy;
pub mod router;

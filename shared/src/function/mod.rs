pub mod callback;
pub mod codec;
pub mod descriptor;
pub mod error;
pub mod param;
pub mod param_type;
pub mod param_value;
pub mod registry;

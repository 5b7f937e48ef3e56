use crate::{
    connection::delivery_guarantee::DeliveryGuarantee, constants::FRAGMENTATION_LIMIT_BYTES,
};

/// Contains Config properties which will be used by a CallContext
#[derive(Clone, Debug)]
pub struct CallConfig {
    /// Delivery used by `call_target` and the other shorthand entry points
    pub default_delivery: DeliveryGuarantee,
    /// Largest envelope, in bytes, that may be sent over an unreliable
    /// delivery. Unreliable packets are never fragmented.
    pub max_unreliable_bytes: usize,
}

impl Default for CallConfig {
    fn default() -> Self {
        Self {
            default_delivery: DeliveryGuarantee::ReliableOrdered,
            max_unreliable_bytes: FRAGMENTATION_LIMIT_BYTES,
        }
    }
}

/// Largest envelope, in bytes, that may be sent on an unreliable delivery
/// guarantee. Reliable sends are left to the transport to fragment.
pub const FRAGMENTATION_LIMIT_BYTES: usize = volley_serde::MTU_SIZE_BYTES;

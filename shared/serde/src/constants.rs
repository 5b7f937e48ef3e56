/// Largest payload, in bytes, a single datagram is expected to carry without
/// being fragmented by the transport
pub const MTU_SIZE_BYTES: usize = 400;
pub const MTU_SIZE_BITS: u32 = (MTU_SIZE_BYTES as u32) * 8;

/// Reliability and ordering class requested for a single send. Variants are
/// ordered from weakest to strongest guarantee.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum DeliveryGuarantee {
    /// May be dropped, duplicated or reordered
    Unreliable,
    /// May be dropped; stale packets are discarded on arrival
    SequencedUnreliable,
    /// Always arrives, in any order
    ReliableUnordered,
    /// Always arrives; only the newest is kept when several arrive late
    ReliableSequenced,
    /// Always arrives, in send order
    #[default]
    ReliableOrdered,
}

impl DeliveryGuarantee {
    pub fn reliable(&self) -> bool {
        match self {
            DeliveryGuarantee::Unreliable | DeliveryGuarantee::SequencedUnreliable => false,
            DeliveryGuarantee::ReliableUnordered
            | DeliveryGuarantee::ReliableSequenced
            | DeliveryGuarantee::ReliableOrdered => true,
        }
    }

    pub fn ordered(&self) -> bool {
        *self == DeliveryGuarantee::ReliableOrdered
    }
}

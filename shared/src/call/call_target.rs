use crate::types::{ConnectionId, ObjectRef};

/// The identity and ownership view of one networked behaviour, provided by
/// whatever object system hosts it.
pub trait CallTarget {
    /// Reference written into every envelope this behaviour sends
    fn object_ref(&self) -> ObjectRef;

    /// False once the behaviour is destroyed or not yet spawned. Calls made
    /// through an invalid target are dropped without error.
    fn is_valid(&self) -> bool;

    /// True when `connection_id` either owns this object or is subscribed to
    /// it. Only such connections receive its calls.
    fn is_subscribed_or_owning(&self, connection_id: &ConnectionId) -> bool;
}

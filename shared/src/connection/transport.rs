use crate::{
    connection::{delivery_guarantee::DeliveryGuarantee, message_kind::MessageKind},
    types::{ConnectionId, HostType},
};

/// The packet layer underneath function calls. Implementations own the
/// connection table and are expected to enqueue sends without blocking.
pub trait Transport {
    /// True when this process runs the authoritative server
    fn is_server(&self) -> bool;

    /// True when this process has a client connected to a server. A server
    /// which also runs a local client (host mode) reports true.
    fn is_client_connected(&self) -> bool;

    /// Connection id of this process's own client, if it has one
    fn local_connection_id(&self) -> Option<ConnectionId>;

    /// All live connections, server side
    fn connection_ids(&self) -> Vec<ConnectionId>;

    fn contains_connection_id(&self, connection_id: &ConnectionId) -> bool;

    fn server_send_packet(
        &mut self,
        connection_id: &ConnectionId,
        delivery: DeliveryGuarantee,
        kind: MessageKind,
        payload: &[u8],
    );

    fn client_send_packet(
        &mut self,
        delivery: DeliveryGuarantee,
        kind: MessageKind,
        payload: &[u8],
    );

    fn host_type(&self) -> HostType {
        if self.is_server() {
            HostType::Server
        } else {
            HostType::Client
        }
    }
}

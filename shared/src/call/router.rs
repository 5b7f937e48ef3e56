use log::debug;

use crate::{
    call::{call_target::CallTarget, receiver_policy::ReceiverPolicy},
    connection::transport::Transport,
    types::ConnectionId,
};

/// One place a call ends up
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delivery {
    /// Sent by the server to one connection
    Connection(ConnectionId),
    /// Sent by a client to its server
    Server,
    /// The callback runs in this process
    Local,
}

/// Every delivery one call resolves to
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoutePlan {
    deliveries: Vec<Delivery>,
}

impl RoutePlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, delivery: Delivery) {
        self.deliveries.push(delivery);
    }

    pub fn deliveries(&self) -> &[Delivery] {
        &self.deliveries
    }

    pub fn is_empty(&self) -> bool {
        self.deliveries.is_empty()
    }

    /// Number of deliveries that go over the network
    pub fn sends(&self) -> usize {
        self.deliveries
            .iter()
            .filter(|delivery| !matches!(delivery, Delivery::Local))
            .count()
    }

    pub fn invokes_locally(&self) -> bool {
        self.deliveries.contains(&Delivery::Local)
    }
}

/// Decides where a call goes. Pure: reads the transport's role and
/// connection table but never sends.
pub struct CallRouter;

impl CallRouter {
    pub fn route(
        transport: &dyn Transport,
        target: &dyn CallTarget,
        receivers: ReceiverPolicy,
    ) -> RoutePlan {
        let mut plan = RoutePlan::new();

        if !transport.is_server() {
            if transport.is_client_connected() {
                plan.push(Delivery::Server);
            } else {
                debug!(
                    "Dropping call from {:?}: client is not connected",
                    target.object_ref()
                );
            }
            return plan;
        }

        match receivers {
            ReceiverPolicy::Target(connection_id) => {
                if !transport.contains_connection_id(&connection_id) {
                    debug!(
                        "Dropping call from {:?}: connection {:?} does not exist",
                        target.object_ref(),
                        connection_id
                    );
                } else if !target.is_subscribed_or_owning(&connection_id) {
                    debug!(
                        "Dropping call from {:?}: connection {:?} neither owns nor subscribes to it",
                        target.object_ref(),
                        connection_id
                    );
                } else {
                    plan.push(Delivery::Connection(connection_id));
                }
            }
            ReceiverPolicy::All => {
                for connection_id in transport.connection_ids() {
                    if target.is_subscribed_or_owning(&connection_id) {
                        plan.push(Delivery::Connection(connection_id));
                    }
                }
                // A host's own client receives the broadcast over the wire
                if !transport.is_client_connected() {
                    plan.push(Delivery::Local);
                }
            }
            ReceiverPolicy::ServerOnly => {
                plan.push(Delivery::Local);
            }
        }

        plan
    }
}

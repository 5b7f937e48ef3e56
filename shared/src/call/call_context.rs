use log::{debug, trace, warn};
use volley_serde::BitReader;

use crate::{
    call::{
        behaviour_resolver::BehaviourResolver,
        call_config::CallConfig,
        call_target::CallTarget,
        envelope::{EnvelopeHeader, InvocationEnvelope},
        error::{CallError, EnvelopeError, ReceiveError},
        receiver_policy::ReceiverPolicy,
        router::{CallRouter, Delivery, RoutePlan},
    },
    connection::{
        delivery_guarantee::DeliveryGuarantee, message_kind::MessageKind, transport::Transport,
    },
    function::{codec::CodecTable, descriptor::FunctionDescriptor, param_value::ParamValue},
    types::ConnectionId,
};

/// What one call or received envelope ended up doing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CallReport {
    /// Envelopes handed to the transport
    pub sends: usize,
    /// Whether the callback ran in this process
    pub invoked_locally: bool,
}

impl CallReport {
    pub fn is_noop(&self) -> bool {
        self.sends == 0 && !self.invoked_locally
    }
}

/// Entry point for every outgoing call and every received envelope. Borrows
/// the transport, codec table and config for as long as it is used, so one is
/// typically built per tick.
pub struct CallContext<'a> {
    transport: &'a mut dyn Transport,
    codecs: &'a CodecTable,
    config: &'a CallConfig,
}

impl<'a> CallContext<'a> {
    pub fn new(
        transport: &'a mut dyn Transport,
        codecs: &'a CodecTable,
        config: &'a CallConfig,
    ) -> Self {
        Self {
            transport,
            codecs,
            config,
        }
    }

    pub fn transport(&self) -> &dyn Transport {
        &*self.transport
    }

    pub fn codecs(&self) -> &CodecTable {
        self.codecs
    }

    pub fn config(&self) -> &CallConfig {
        self.config
    }

    /// Sets `values` on `function` and routes the call
    pub fn call(
        &mut self,
        target: &dyn CallTarget,
        function: &mut FunctionDescriptor,
        delivery: DeliveryGuarantee,
        receivers: ReceiverPolicy,
        values: Vec<ParamValue>,
    ) -> Result<CallReport, CallError> {
        if !target.is_valid() {
            debug!("Dropping call to function {}: target is not valid", function.id());
            return Ok(CallReport::default());
        }
        function.set_parameters(values)?;
        self.call_without_parameters_set(target, function, delivery, receivers)
    }

    /// Calls `function` on one connection with the default delivery
    pub fn call_target(
        &mut self,
        target: &dyn CallTarget,
        function: &mut FunctionDescriptor,
        connection_id: ConnectionId,
        values: Vec<ParamValue>,
    ) -> Result<CallReport, CallError> {
        let delivery = self.config.default_delivery;
        self.call(
            target,
            function,
            delivery,
            ReceiverPolicy::Target(connection_id),
            values,
        )
    }

    /// Routes a call using whatever values `function`'s slots already hold
    pub fn call_without_parameters_set(
        &mut self,
        target: &dyn CallTarget,
        function: &mut FunctionDescriptor,
        delivery: DeliveryGuarantee,
        receivers: ReceiverPolicy,
    ) -> Result<CallReport, CallError> {
        if !target.is_valid() {
            debug!("Dropping call to function {}: target is not valid", function.id());
            return Ok(CallReport::default());
        }

        let plan = CallRouter::route(&*self.transport, target, receivers);
        self.execute(target, function, delivery, receivers, &plan)
    }

    pub fn call_target_without_parameters_set(
        &mut self,
        target: &dyn CallTarget,
        function: &mut FunctionDescriptor,
        connection_id: ConnectionId,
    ) -> Result<CallReport, CallError> {
        let delivery = self.config.default_delivery;
        self.call_without_parameters_set(
            target,
            function,
            delivery,
            ReceiverPolicy::Target(connection_id),
        )
    }

    /// Handles one envelope the transport received with
    /// `MessageKind::CALL_FUNCTION`.
    ///
    /// A client runs the addressed function. A server runs `ServerOnly` calls
    /// and routes `All` and `Target` calls onward as if the addressed object
    /// had made them itself, so subscription and ownership are checked again.
    pub fn receive(
        &mut self,
        objects: &mut dyn BehaviourResolver,
        delivery: DeliveryGuarantee,
        payload: &[u8],
    ) -> Result<CallReport, ReceiveError> {
        let is_server = self.transport.is_server();
        let mut reader = BitReader::new(payload);

        let header = EnvelopeHeader::read(&mut reader, is_server).map_err(|error| {
            warn!("Dropping malformed function call: {}", error);
            error
        })?;

        let Some(resolved) = objects.resolve(&header.owner) else {
            warn!(
                "Dropping call to function {}: no behaviour for {:?}",
                header.function_id, header.owner
            );
            return Err(ReceiveError::ObjectNotFound {
                owner: header.owner,
            });
        };

        let Some(function) = resolved.functions.get_mut(header.function_id) else {
            warn!(
                "Dropping call: function {} is not registered on {:?}",
                header.function_id, header.owner
            );
            return Err(ReceiveError::FunctionNotFound {
                owner: header.owner,
                function_id: header.function_id,
            });
        };

        let values = self
            .codecs
            .decode(&mut reader, function.param_types())
            .map_err(|error| {
                warn!(
                    "Dropping call to function {} on {:?}: {}",
                    header.function_id, header.owner, error
                );
                error
            })?;
        function.set_decoded(values);

        match header.receivers {
            Some(receivers) => Ok(self.call_without_parameters_set(
                resolved.target,
                function,
                delivery,
                receivers,
            )?),
            None => {
                function.fire()?;
                Ok(CallReport {
                    sends: 0,
                    invoked_locally: true,
                })
            }
        }
    }

    /// Carries out `plan`. The envelope is encoded and size-checked first,
    /// then the local callback runs, then the network sends go out. Any error
    /// along the way returns before a single packet is handed to the
    /// transport.
    fn execute(
        &mut self,
        target: &dyn CallTarget,
        function: &mut FunctionDescriptor,
        delivery: DeliveryGuarantee,
        receivers: ReceiverPolicy,
        plan: &RoutePlan,
    ) -> Result<CallReport, CallError> {
        self.codecs
            .check(function.values(), function.param_types())?;

        let payload = if plan.sends() > 0 {
            self.encode(target, function, delivery, receivers)?
        } else {
            Vec::new()
        };

        let mut report = CallReport::default();
        if plan.invokes_locally() {
            function.fire()?;
            report.invoked_locally = true;
        }

        for step in plan.deliveries() {
            match step {
                Delivery::Connection(connection_id) => {
                    trace!(
                        "Sending function {} of {:?} to {:?} ({} bytes)",
                        function.id(),
                        target.object_ref(),
                        connection_id,
                        payload.len()
                    );
                    self.transport.server_send_packet(
                        connection_id,
                        delivery,
                        MessageKind::CALL_FUNCTION,
                        &payload,
                    );
                    report.sends += 1;
                }
                Delivery::Server => {
                    trace!(
                        "Sending function {} of {:?} to server ({} bytes)",
                        function.id(),
                        target.object_ref(),
                        payload.len()
                    );
                    self.transport
                        .client_send_packet(delivery, MessageKind::CALL_FUNCTION, &payload);
                    report.sends += 1;
                }
                // already fired above
                Delivery::Local => {}
            }
        }

        Ok(report)
    }

    // Encoded once, then the same bytes go to every connection in the plan
    fn encode(
        &self,
        target: &dyn CallTarget,
        function: &FunctionDescriptor,
        delivery: DeliveryGuarantee,
        receivers: ReceiverPolicy,
    ) -> Result<Vec<u8>, EnvelopeError> {
        let routing = if self.transport.is_server() {
            None
        } else {
            Some(receivers)
        };
        let header = EnvelopeHeader::new(target.object_ref(), function.id(), routing);
        let payload = InvocationEnvelope::encode(
            &header,
            self.codecs,
            function.param_types(),
            function.values(),
        )?;

        if !delivery.reliable() && payload.len() > self.config.max_unreliable_bytes {
            return Err(EnvelopeError::EnvelopeTooLarge {
                size: payload.len(),
                limit: self.config.max_unreliable_bytes,
            });
        }

        Ok(payload)
    }
}

use volley_shared::{
    CallConfig, CallContext, CallError, CallReport, CodecTable, ConnectionId, DeliveryGuarantee,
    FunctionId, FunctionRegistry, ObjectRef, ParamValue, ReceiveError, ReceiverPolicy,
};

use crate::{LocalTransport, SentPacket, TestBehaviour, TestWorld};

/// One process in a test: its transport, its objects, and the tables every
/// CallContext it builds borrows
pub struct TestEndpoint {
    pub transport: LocalTransport,
    pub world: TestWorld,
    pub codecs: CodecTable,
    pub config: CallConfig,
}

impl TestEndpoint {
    pub fn new(transport: LocalTransport) -> Self {
        Self {
            transport,
            world: TestWorld::new(),
            codecs: CodecTable::default(),
            config: CallConfig::default(),
        }
    }

    /// Spawns an object whose functions are built by `build`, then locks them
    pub fn spawn(
        &mut self,
        behaviour: TestBehaviour,
        build: impl FnOnce(&CodecTable, &mut FunctionRegistry),
    ) {
        let mut functions = FunctionRegistry::new();
        build(&self.codecs, &mut functions);
        functions.lock();
        self.world.spawn(behaviour, functions);
    }

    pub fn behaviour_mut(&mut self, owner: &ObjectRef) -> &mut TestBehaviour {
        &mut self
            .world
            .object_mut(owner)
            .expect("object is not spawned on this endpoint")
            .behaviour
    }

    pub fn call(
        &mut self,
        owner: &ObjectRef,
        function_id: FunctionId,
        delivery: DeliveryGuarantee,
        receivers: ReceiverPolicy,
        values: Vec<ParamValue>,
    ) -> Result<CallReport, CallError> {
        let object = self
            .world
            .object_mut(owner)
            .expect("object is not spawned on this endpoint");
        let function = object
            .functions
            .get_mut(function_id)
            .expect("function is not registered on this object");

        let mut context = CallContext::new(&mut self.transport, &self.codecs, &self.config);
        context.call(&object.behaviour, function, delivery, receivers, values)
    }

    pub fn call_target(
        &mut self,
        owner: &ObjectRef,
        function_id: FunctionId,
        connection_id: ConnectionId,
        values: Vec<ParamValue>,
    ) -> Result<CallReport, CallError> {
        let object = self
            .world
            .object_mut(owner)
            .expect("object is not spawned on this endpoint");
        let function = object
            .functions
            .get_mut(function_id)
            .expect("function is not registered on this object");

        let mut context = CallContext::new(&mut self.transport, &self.codecs, &self.config);
        context.call_target(&object.behaviour, function, connection_id, values)
    }

    pub fn call_without_parameters_set(
        &mut self,
        owner: &ObjectRef,
        function_id: FunctionId,
        delivery: DeliveryGuarantee,
        receivers: ReceiverPolicy,
    ) -> Result<CallReport, CallError> {
        let object = self
            .world
            .object_mut(owner)
            .expect("object is not spawned on this endpoint");
        let function = object
            .functions
            .get_mut(function_id)
            .expect("function is not registered on this object");

        let mut context = CallContext::new(&mut self.transport, &self.codecs, &self.config);
        context.call_without_parameters_set(&object.behaviour, function, delivery, receivers)
    }

    pub fn call_target_without_parameters_set(
        &mut self,
        owner: &ObjectRef,
        function_id: FunctionId,
        connection_id: ConnectionId,
    ) -> Result<CallReport, CallError> {
        let object = self
            .world
            .object_mut(owner)
            .expect("object is not spawned on this endpoint");
        let function = object
            .functions
            .get_mut(function_id)
            .expect("function is not registered on this object");

        let mut context = CallContext::new(&mut self.transport, &self.codecs, &self.config);
        context.call_target_without_parameters_set(&object.behaviour, function, connection_id)
    }

    pub fn receive(&mut self, packet: &SentPacket) -> Result<CallReport, ReceiveError> {
        let mut context = CallContext::new(&mut self.transport, &self.codecs, &self.config);
        context.receive(&mut self.world, packet.delivery, &packet.payload)
    }
}

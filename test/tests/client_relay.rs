//! Client calls travelling through the server

use volley_shared::{
    params, CallError, CallReport, CodecError, ConnectionId, DeliveryGuarantee, EnvelopeError,
    ObjectRef, ParamType, ReceiveError, ReceiverPolicy,
};
use volley_test::{
    client_to_server, server_to_clients, CallLog, LocalTransport, SentPacket, TestBehaviour,
    TestEndpoint,
};

const OBJECT: ObjectRef = ObjectRef {
    object_id: 5,
    component_index: 0,
};
const A: ConnectionId = ConnectionId::new(1);
const B: ConnectionId = ConnectionId::new(2);
const C: ConnectionId = ConnectionId::new(3);

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn spawn_chat(endpoint: &mut TestEndpoint, behaviour: TestBehaviour) -> CallLog<String> {
    let log = CallLog::new();
    let log_in = log.clone();
    endpoint.spawn(behaviour, move |codecs, functions| {
        functions
            .register_named(codecs, "chat", move |line: String| log_in.record(line))
            .unwrap();
    });
    log
}

struct Session {
    server: TestEndpoint,
    client_a: TestEndpoint,
    client_b: TestEndpoint,
    client_c: TestEndpoint,
    server_log: CallLog<String>,
    log_a: CallLog<String>,
    log_b: CallLog<String>,
    log_c: CallLog<String>,
}

// A owns the object, B subscribes to it, C can't see it
fn session() -> Session {
    let mut server = TestEndpoint::new(LocalTransport::headless_server(&[A, B, C]));
    let mut client_a = TestEndpoint::new(LocalTransport::client(A));
    let mut client_b = TestEndpoint::new(LocalTransport::client(B));
    let mut client_c = TestEndpoint::new(LocalTransport::client(C));

    let mut behaviour = TestBehaviour::new(OBJECT).owned_by(A);
    behaviour.subscribe(B);
    let server_log = spawn_chat(&mut server, behaviour);
    let log_a = spawn_chat(&mut client_a, TestBehaviour::new(OBJECT));
    let log_b = spawn_chat(&mut client_b, TestBehaviour::new(OBJECT));
    let log_c = spawn_chat(&mut client_c, TestBehaviour::new(OBJECT));

    Session {
        server,
        client_a,
        client_b,
        client_c,
        server_log,
        log_a,
        log_b,
        log_c,
    }
}

impl Session {
    fn relay(&mut self) {
        for result in client_to_server(&mut self.client_a, &mut self.server) {
            result.unwrap();
        }
        for result in server_to_clients(
            &mut self.server,
            &mut [&mut self.client_a, &mut self.client_b, &mut self.client_c],
        ) {
            result.unwrap();
        }
    }
}

#[test]
fn relayed_broadcast_respects_subscriptions() {
    init_logging();
    let mut session = session();

    session
        .client_a
        .call(
            &OBJECT,
            0,
            DeliveryGuarantee::ReliableOrdered,
            ReceiverPolicy::All,
            params!["gg".to_string()],
        )
        .unwrap();
    session.relay();

    assert_eq!(session.log_a.calls(), vec!["gg".to_string()]);
    assert_eq!(session.log_b.calls(), vec!["gg".to_string()]);
    assert!(session.log_c.is_empty());
    // Headless server runs broadcasts itself
    assert_eq!(session.server_log.calls(), vec!["gg".to_string()]);
}

#[test]
fn relayed_target_is_gated_on_the_server() {
    init_logging();
    let mut session = session();

    session
        .client_a
        .call_target(&OBJECT, 0, C, params!["psst".to_string()])
        .unwrap();
    assert_eq!(session.client_a.transport.sent().len(), 1);

    let results = client_to_server(&mut session.client_a, &mut session.server);
    assert_eq!(results, vec![Ok(CallReport::default())]);
    assert!(session.server.transport.sent().is_empty());
    assert!(session.log_c.is_empty());
}

#[test]
fn relayed_target_reaches_subscriber() {
    init_logging();
    let mut session = session();

    session
        .client_a
        .call_target(&OBJECT, 0, B, params!["hi b".to_string()])
        .unwrap();
    session.relay();

    assert_eq!(session.log_b.calls(), vec!["hi b".to_string()]);
    assert!(session.log_a.is_empty());
    assert!(session.server_log.is_empty());
}

#[test]
fn relayed_server_only_stays_on_server() {
    init_logging();
    let mut session = session();

    session
        .client_a
        .call(
            &OBJECT,
            0,
            DeliveryGuarantee::Unreliable,
            ReceiverPolicy::ServerOnly,
            params!["ready".to_string()],
        )
        .unwrap();

    let results = client_to_server(&mut session.client_a, &mut session.server);

    assert_eq!(
        results,
        vec![Ok(CallReport {
            sends: 0,
            invoked_locally: true
        })]
    );
    assert_eq!(session.server_log.calls(), vec!["ready".to_string()]);
    assert!(session.server.transport.sent().is_empty());
}

#[test]
fn relay_keeps_delivery_guarantee() {
    init_logging();
    let mut session = session();

    session
        .client_a
        .call(
            &OBJECT,
            0,
            DeliveryGuarantee::SequencedUnreliable,
            ReceiverPolicy::Target(B),
            params!["pos".to_string()],
        )
        .unwrap();
    client_to_server(&mut session.client_a, &mut session.server);

    let sent = session.server.transport.sent_to(&B);
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].delivery, DeliveryGuarantee::SequencedUnreliable);
}

#[test]
fn unknown_object_is_reported() {
    init_logging();
    let mut session = session();
    session
        .client_a
        .call(
            &OBJECT,
            0,
            DeliveryGuarantee::ReliableOrdered,
            ReceiverPolicy::All,
            params!["gg".to_string()],
        )
        .unwrap();
    session.server.world.despawn(&OBJECT);

    let results = client_to_server(&mut session.client_a, &mut session.server);

    assert_eq!(
        results,
        vec![Err(ReceiveError::ObjectNotFound { owner: OBJECT })]
    );
}

#[test]
fn unknown_function_is_reported() {
    init_logging();
    let mut session = session();
    session
        .client_a
        .call(
            &OBJECT,
            0,
            DeliveryGuarantee::ReliableOrdered,
            ReceiverPolicy::All,
            params!["gg".to_string()],
        )
        .unwrap();
    let mut packet = session.client_a.transport.take_sent().remove(0);
    // Owner is 3 bytes, then the function id
    packet.payload[3] = 9;

    let result = session.server.receive(&packet);

    assert_eq!(
        result,
        Err(ReceiveError::FunctionNotFound {
            owner: OBJECT,
            function_id: 9
        })
    );
}

#[test]
fn truncated_envelope_is_reported() {
    init_logging();
    let mut session = session();
    session
        .client_a
        .call(
            &OBJECT,
            0,
            DeliveryGuarantee::ReliableOrdered,
            ReceiverPolicy::All,
            params!["gg".to_string()],
        )
        .unwrap();
    let mut packet: SentPacket = session.client_a.transport.take_sent().remove(0);
    packet.payload.pop();

    let result = session.server.receive(&packet);

    assert_eq!(
        result,
        Err(ReceiveError::Codec(CodecError::TruncatedInput { slot: 0 }))
    );
    assert!(session.server_log.is_empty());
}

#[test]
fn oversized_unreliable_call_sends_nothing() {
    init_logging();
    let mut session = session();
    let line = "x".repeat(1000);

    let result = session.client_a.call(
        &OBJECT,
        0,
        DeliveryGuarantee::Unreliable,
        ReceiverPolicy::All,
        params![line.clone()],
    );

    match result {
        Err(CallError::Envelope(EnvelopeError::EnvelopeTooLarge { limit, .. })) => {
            assert_eq!(limit, session.client_a.config.max_unreliable_bytes);
        }
        other => panic!("Expected EnvelopeTooLarge error, got {:?}", other),
    }
    assert!(session.client_a.transport.sent().is_empty());

    // Reliable deliveries are left to the transport to fragment
    let report = session
        .client_a
        .call(
            &OBJECT,
            0,
            DeliveryGuarantee::ReliableOrdered,
            ReceiverPolicy::All,
            params![line],
        )
        .unwrap();
    assert_eq!(report.sends, 1);
}

#[test]
fn wrong_parameter_type_sends_nothing() {
    init_logging();
    let mut session = session();

    let result = session.client_a.call(
        &OBJECT,
        0,
        DeliveryGuarantee::ReliableOrdered,
        ReceiverPolicy::All,
        params![3u8],
    );

    assert_eq!(
        result,
        Err(CallError::Codec(CodecError::TypeMismatch {
            slot: 0,
            expected: ParamType::String,
            found: ParamType::U8,
        }))
    );
    assert!(session.client_a.transport.sent().is_empty());
}

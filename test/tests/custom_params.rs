//! User types registered into the codec table travel like builtins

use volley_shared::{
    custom_param, params, BitReader, BitWrite, CodecError, ConnectionId, DeliveryGuarantee,
    ObjectRef, ParamType, ReceiveError, ReceiverPolicy, Serde, SerdeErr,
};
use volley_test::{server_to_clients, CallLog, LocalTransport, TestBehaviour, TestEndpoint};

#[derive(Clone, Debug, Default, PartialEq)]
struct Loadout {
    weapon: String,
    ammo: u16,
}

impl Serde for Loadout {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.weapon.ser(writer);
        self.ammo.ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        let weapon = String::de(reader)?;
        let ammo = u16::de(reader)?;
        Ok(Self { weapon, ammo })
    }

    fn bit_length(&self) -> u32 {
        self.weapon.bit_length() + self.ammo.bit_length()
    }
}

custom_param!(Loadout, "Loadout");

const OBJECT: ObjectRef = ObjectRef {
    object_id: 3,
    component_index: 2,
};
const A: ConnectionId = ConnectionId::new(7);

fn endpoint(
    transport: LocalTransport,
    behaviour: TestBehaviour,
) -> (TestEndpoint, CallLog<(Loadout, u8)>) {
    let mut endpoint = TestEndpoint::new(transport);
    endpoint.codecs.add_serde::<Loadout>("Loadout");

    let log = CallLog::new();
    let log_in = log.clone();
    endpoint.spawn(behaviour, move |codecs, functions| {
        functions
            .register_named(codecs, "equip", move |loadout: Loadout, hand: u8| {
                log_in.record((loadout, hand))
            })
            .unwrap();
    });
    (endpoint, log)
}

#[test]
fn custom_param_reaches_client() {
    let _ = env_logger::builder().is_test(true).try_init();

    let (mut server, _) = endpoint(
        LocalTransport::headless_server(&[A]),
        TestBehaviour::new(OBJECT).owned_by(A),
    );
    let (mut client, client_log) = endpoint(LocalTransport::client(A), TestBehaviour::new(OBJECT));

    let loadout = Loadout {
        weapon: "crossbow".to_string(),
        ammo: 12,
    };
    server
        .call_target(&OBJECT, 0, A, params![loadout.clone(), 1u8])
        .unwrap();
    let results = server_to_clients(&mut server, &mut [&mut client]);

    assert!(results.iter().all(Result::is_ok));
    assert_eq!(client_log.calls(), vec![(loadout, 1)]);
}

#[test]
fn custom_param_defaults_when_omitted() {
    let _ = env_logger::builder().is_test(true).try_init();

    let (mut server, server_log) = endpoint(
        LocalTransport::headless_server(&[]),
        TestBehaviour::new(OBJECT),
    );

    server
        .call(
            &OBJECT,
            0,
            DeliveryGuarantee::ReliableOrdered,
            ReceiverPolicy::ServerOnly,
            params![],
        )
        .unwrap();

    assert_eq!(server_log.calls(), vec![(Loadout::default(), 0)]);
}

#[test]
fn receiver_without_the_codec_cannot_register() {
    let codecs = volley_shared::CodecTable::default();
    let mut functions = volley_shared::FunctionRegistry::new();

    let result = functions.register_named(&codecs, "equip", |_: Loadout| {});

    assert_eq!(
        result,
        Err(volley_shared::RegistryError::UnsupportedType {
            function_id: 0,
            slot: 0,
            param_type: ParamType::Custom("Loadout"),
        })
    );
}

#[test]
fn malformed_custom_param_is_reported() {
    let _ = env_logger::builder().is_test(true).try_init();

    let (mut server, _) = endpoint(
        LocalTransport::headless_server(&[A]),
        TestBehaviour::new(OBJECT).owned_by(A),
    );
    let (mut client, client_log) = endpoint(LocalTransport::client(A), TestBehaviour::new(OBJECT));

    server
        .call_target(
            &OBJECT,
            0,
            A,
            params![
                Loadout {
                    weapon: "ab".to_string(),
                    ammo: 1,
                },
                0u8
            ],
        )
        .unwrap();
    let mut packet = server.transport.take_sent().remove(0);
    // Header is 5 bytes, then the weapon length; corrupt its text
    packet.payload[6] = 0xC3;
    packet.payload[7] = 0x28;

    let result = client.receive(&packet);

    assert_eq!(
        result,
        Err(ReceiveError::Codec(CodecError::MalformedValue {
            slot: 0,
            param_type: ParamType::Custom("Loadout"),
        }))
    );
    assert!(client_log.is_empty());
}

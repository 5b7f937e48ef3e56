/// Tag the transport uses to dispatch an incoming packet to its handler
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MessageKind(u16);

impl MessageKind {
    /// Packets carrying a serialized function call envelope
    pub const CALL_FUNCTION: MessageKind = MessageKind(0);

    /// Value a transport writes ahead of the payload
    pub fn to_u16(&self) -> u16 {
        self.0
    }
}

use volley_serde::{BitReader, BitWrite, Serde, SerdeErr, UnsignedVariableInteger};

pub type FunctionId = u16;
pub type ObjectId = u32;
pub type ComponentIndex = i16;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HostType {
    Server,
    Client,
}

/// Identifies one remote peer as seen by the transport
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(u64);

impl ConnectionId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn to_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ConnectionId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

// Packed, since most connection ids are small
impl Serde for ConnectionId {
    fn ser(&self, writer: &mut dyn BitWrite) {
        UnsignedVariableInteger::<7>::new(self.0).ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        let packed = UnsignedVariableInteger::<7>::de(reader)?;
        packed.try_to::<u64>().map(Self).ok_or(SerdeErr)
    }

    fn bit_length(&self) -> u32 {
        UnsignedVariableInteger::<7>::new(self.0).bit_length()
    }
}

/// Addresses one behaviour (component) of a networked object
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObjectRef {
    pub object_id: ObjectId,
    pub component_index: ComponentIndex,
}

impl ObjectRef {
    pub fn new(object_id: ObjectId, component_index: ComponentIndex) -> Self {
        Self {
            object_id,
            component_index,
        }
    }
}

impl Serde for ObjectRef {
    fn ser(&self, writer: &mut dyn BitWrite) {
        UnsignedVariableInteger::<7>::new(self.object_id).ser(writer);
        self.component_index.ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        let object_id = UnsignedVariableInteger::<7>::de(reader)?
            .try_to::<ObjectId>()
            .ok_or(SerdeErr)?;
        let component_index = ComponentIndex::de(reader)?;
        Ok(Self {
            object_id,
            component_index,
        })
    }

    fn bit_length(&self) -> u32 {
        UnsignedVariableInteger::<7>::new(self.object_id).bit_length()
            + self.component_index.bit_length()
    }
}

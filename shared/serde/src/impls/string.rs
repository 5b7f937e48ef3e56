use crate::{BitReader, BitWrite, Serde, SerdeErr, UnsignedVariableInteger};

impl Serde for String {
    fn ser(&self, writer: &mut dyn BitWrite) {
        let length = UnsignedVariableInteger::<7>::new(self.len() as u64);
        length.ser(writer);
        writer.write_bytes(self.as_bytes());
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        let length = UnsignedVariableInteger::<7>::de(reader)?;
        let Some(length) = length.try_to::<usize>() else {
            return Err(SerdeErr);
        };
        // length comes off the wire, don't trust it for the allocation
        let mut bytes = Vec::with_capacity(length.min(reader.bits_remaining() / 8));
        for _ in 0..length {
            bytes.push(reader.read_byte()?);
        }
        String::from_utf8(bytes).map_err(|_| SerdeErr)
    }

    fn bit_length(&self) -> u32 {
        let length = UnsignedVariableInteger::<7>::new(self.len() as u64);
        length.bit_length() + (self.len() as u32) * 8
    }
}

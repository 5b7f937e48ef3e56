use crate::{BitReader, BitWrite, Serde, SerdeErr, UnsignedVariableInteger};

impl<T: Serde> Serde for Vec<T> {
    fn ser(&self, writer: &mut dyn BitWrite) {
        let length = UnsignedVariableInteger::<7>::new(self.len() as u64);
        length.ser(writer);
        for item in self {
            item.ser(writer);
        }
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        let length = UnsignedVariableInteger::<7>::de(reader)?;
        let Some(length) = length.try_to::<usize>() else {
            return Err(SerdeErr);
        };
        // every item takes at least a bit unless T is zero sized
        let mut output = Vec::with_capacity(length.min(reader.bits_remaining()));
        for _ in 0..length {
            output.push(T::de(reader)?);
        }
        Ok(output)
    }

    fn bit_length(&self) -> u32 {
        let length = UnsignedVariableInteger::<7>::new(self.len() as u64);
        let mut output = length.bit_length();
        for item in self {
            output += item.bit_length();
        }
        output
    }
}

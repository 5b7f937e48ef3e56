use crate::{BitReader, BitWrite, ConstBitLength, Serde, SerdeErr};

impl<T: Serde + Copy + Default, const N: usize> Serde for [T; N] {
    fn ser(&self, writer: &mut dyn BitWrite) {
        for item in self {
            item.ser(writer);
        }
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        let mut output = [T::default(); N];
        for item in output.iter_mut() {
            *item = T::de(reader)?;
        }
        Ok(output)
    }

    fn bit_length(&self) -> u32 {
        self.iter().map(|item| item.bit_length()).sum()
    }
}

impl<T: ConstBitLength, const N: usize> ConstBitLength for [T; N] {
    fn const_bit_length() -> u32 {
        T::const_bit_length() * (N as u32)
    }
}

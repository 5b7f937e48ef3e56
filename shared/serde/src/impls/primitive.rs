use crate::{BitReader, BitWrite, ConstBitLength, Serde, SerdeErr};

// Fixed-width numbers are written as their little-endian bytes.
macro_rules! impl_serde_for_number {
    ($impl_type:ty) => {
        impl Serde for $impl_type {
            fn ser(&self, writer: &mut dyn BitWrite) {
                writer.write_bytes(&self.to_le_bytes());
            }

            fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
                let mut bytes = [0u8; std::mem::size_of::<$impl_type>()];
                for byte in bytes.iter_mut() {
                    *byte = reader.read_byte()?;
                }
                Ok(<$impl_type>::from_le_bytes(bytes))
            }

            fn bit_length(&self) -> u32 {
                <Self as ConstBitLength>::const_bit_length()
            }
        }

        impl ConstBitLength for $impl_type {
            fn const_bit_length() -> u32 {
                (std::mem::size_of::<$impl_type>() as u32) * 8
            }
        }
    };
}

impl_serde_for_number!(u8);
impl_serde_for_number!(u16);
impl_serde_for_number!(u32);
impl_serde_for_number!(u64);
impl_serde_for_number!(i8);
impl_serde_for_number!(i16);
impl_serde_for_number!(i32);
impl_serde_for_number!(i64);
impl_serde_for_number!(f32);
impl_serde_for_number!(f64);

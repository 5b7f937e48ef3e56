use crate::error::SerdeErr;

/// Reads bits back out of a buffer produced by a `BitWriter`
pub struct BitReader<'b> {
    buffer: &'b [u8],
    byte_index: usize,
    bit_index: u8,
    overrun: bool,
}

impl<'b> BitReader<'b> {
    pub fn new(buffer: &'b [u8]) -> Self {
        Self {
            buffer,
            byte_index: 0,
            bit_index: 0,
            overrun: false,
        }
    }

    pub fn read_bit(&mut self) -> Result<bool, SerdeErr> {
        let Some(byte) = self.buffer.get(self.byte_index) else {
            self.overrun = true;
            return Err(SerdeErr);
        };

        let bit = (byte >> self.bit_index) & 1 != 0;

        self.bit_index += 1;
        if self.bit_index == 8 {
            self.bit_index = 0;
            self.byte_index += 1;
        }

        Ok(bit)
    }

    pub fn read_byte(&mut self) -> Result<u8, SerdeErr> {
        if self.bit_index == 0 {
            let Some(byte) = self.buffer.get(self.byte_index) else {
                self.overrun = true;
                return Err(SerdeErr);
            };
            self.byte_index += 1;
            return Ok(*byte);
        }

        let mut output: u8 = 0;
        for i in 0..8 {
            if self.read_bit()? {
                output |= 1 << i;
            }
        }
        Ok(output)
    }

    /// Bits left in the buffer, including any padding in the final byte
    pub fn bits_remaining(&self) -> usize {
        let total = self.buffer.len() * 8;
        let consumed = self.byte_index * 8 + self.bit_index as usize;
        total.saturating_sub(consumed)
    }

    pub fn is_exhausted(&self) -> bool {
        self.bits_remaining() == 0
    }

    /// True once any read has asked for more bits than the buffer holds.
    /// Lets a caller tell a short buffer apart from bytes that were all
    /// present but formed an invalid value.
    pub fn overran(&self) -> bool {
        self.overrun
    }
}

//! Reading and writing of MSB-first bit strings, as used by H.264 RBSP data.

/// A bit reader over RBSP bytes (emulation prevention already removed).
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    cur_pos: usize,
}

impl<'a> BitReader<'a> {
    /// Create a new bit reader.
    #[inline]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, cur_pos: 0 }
    }

    /// Read a single bit.
    #[inline(always)]
    pub fn read_bit(&mut self) -> Option<u32> {
        let byte = *self.data.get(self.byte_pos())?;
        let bit = (byte >> (7 - self.bit_pos())) & 1;
        self.cur_pos += 1;

        Some(bit as u32)
    }

    /// Read the given number of bits, most significant bit first.
    ///
    /// Returns `None` if `bit_size` > 32 or if the data runs out, in which case
    /// the position of the reader is left unchanged.
    #[inline]
    pub fn read(&mut self, bit_size: u8) -> Option<u32> {
        if bit_size > 32 || self.bits_left() < bit_size as usize {
            return None;
        }

        let mut value = 0_u64;

        for _ in 0..bit_size {
            value = (value << 1) | self.read_bit()? as u64;
        }

        Some(value as u32)
    }

    /// Align the reader to the next byte boundary.
    #[inline]
    pub fn align(&mut self) {
        let bit_pos = self.bit_pos();

        if bit_pos != 0 {
            self.cur_pos += 8 - bit_pos;
        }
    }

    /// The number of bits that can still be read.
    #[inline]
    pub fn bits_left(&self) -> usize {
        (self.data.len() * 8).saturating_sub(self.cur_pos)
    }

    #[inline]
    fn byte_pos(&self) -> usize {
        self.cur_pos / 8
    }

    #[inline]
    fn bit_pos(&self) -> usize {
        self.cur_pos % 8
    }

    /// Get the current position in bits.
    #[inline]
    pub fn cur_pos(&self) -> usize {
        self.cur_pos
    }
}

fn bit_mask(bit_size: u8) -> u32 {
    ((1_u64 << bit_size as u64) - 1) as u32
}

/// A bit writer with a fixed symbol size.
#[derive(Debug)]
pub struct BitWriter<'a> {
    data: &'a mut [u8],
    cur_pos: usize,
    bit_size: u8,
}

impl<'a> BitWriter<'a> {
    /// Create a new bit writer for a fixed bit size between 1 and 32 (inclusive).
    #[inline]
    pub fn new(data: &'a mut [u8], bit_size: u8) -> Option<Self> {
        if !(1..=32).contains(&bit_size) {
            return None;
        }

        Some(Self {
            data,
            bit_size,
            cur_pos: 0,
        })
    }

    /// Write the given number into the buffer, most significant bit first.
    ///
    /// Returns `None` if the buffer is too small.
    #[inline]
    pub fn write(&mut self, val: u32) -> Option<()> {
        let value = val & bit_mask(self.bit_size);

        if self.cur_pos + self.bit_size as usize > self.data.len() * 8 {
            return None;
        }

        for shift in (0..self.bit_size).rev() {
            let bit = ((value >> shift) & 1) as u8;
            let byte = self.data.get_mut(self.cur_pos / 8)?;
            let mask = 0x80 >> (self.cur_pos % 8);

            *byte = if bit == 1 { *byte | mask } else { *byte & !mask };
            self.cur_pos += 1;
        }

        Some(())
    }

    /// Write multiple numbers at once.
    #[inline]
    pub fn write_bits(&mut self, bits: impl IntoIterator<Item = u32>) -> Option<()> {
        for bit in bits {
            self.write(bit)?;
        }

        Some(())
    }
}

//! The source of the arithmetic-coded bits.

use avc_common::bit::BitReader;

/// A source of the raw bits of the slice data.
///
/// The bits are expected to start at the first bit after `cabac_alignment_one_bit`,
/// with emulation prevention bytes already removed.
pub trait BitSource {
    /// Read the next bit, or `None` if the data is exhausted.
    fn read_bit(&mut self) -> Option<u32>;

    /// Read `bit_size` bits (at most 32), most significant bit first.
    fn read_bits(&mut self, bit_size: u8) -> Option<u32> {
        let mut value = 0;

        for _ in 0..bit_size {
            value = (value << 1) | self.read_bit()?;
        }

        Some(value)
    }
}

impl BitSource for BitReader<'_> {
    #[inline(always)]
    fn read_bit(&mut self) -> Option<u32> {
        Self::read_bit(self)
    }

    fn read_bits(&mut self, bit_size: u8) -> Option<u32> {
        self.read(bit_size)
    }
}

impl<T: BitSource + ?Sized> BitSource for &mut T {
    #[inline(always)]
    fn read_bit(&mut self) -> Option<u32> {
        (**self).read_bit()
    }

    fn read_bits(&mut self, bit_size: u8) -> Option<u32> {
        (**self).read_bits(bit_size)
    }
}

//! Debinarization: rebuilding the value of a syntax element from its bins (9.3.2).
//!
//! Every scheme pulls exactly the bins that its bin string consists of, so a decoder
//! never reads past the end of an element.

use crate::assignment::Binarization;
use crate::error::{BinarizationError, Result, bail};
use crate::settings::{SliceSettings, SliceType};

/// A supply of bins for the element that is being decoded.
pub(crate) trait Bins {
    /// Decode the next bin of the current part of the bin string.
    fn next_bin(&mut self) -> Result<u8>;

    /// Switch from the prefix to the suffix of the bin string. `binIdx` starts from 0
    /// again for the suffix.
    fn begin_suffix(&mut self);
}

/// Decode a value with the given binarization.
pub(crate) fn decode_value(
    binarization: Binarization,
    bins: &mut impl Bins,
    settings: &SliceSettings,
) -> Result<i32> {
    let value = match binarization {
        Binarization::FixedLength(c_max) => fixed_length(bins, c_max)? as i32,
        Binarization::TruncatedUnary(c_max) => truncated_unary(bins, c_max)? as i32,
        Binarization::Unary => unary(bins, settings.max_unary_bins)? as i32,
        Binarization::Uegk { signed, u_coff, k } => uegk(bins, signed, u_coff, k)?,
        Binarization::MbType(slice_type) => mb_type(bins, slice_type)? as i32,
        Binarization::SubMbType(slice_type) => sub_mb_type(bins, slice_type)? as i32,
        Binarization::CodedBlockPattern => {
            coded_block_pattern(bins, settings.chroma_array_type)? as i32
        }
        Binarization::MappedUnary => mapped_unary(bins, settings.max_unary_bins)?,
    };

    Ok(value)
}

/// FL binarization (9.3.2.5), least significant bit first.
fn fixed_length(bins: &mut impl Bins, c_max: u32) -> Result<u32> {
    let fixed_length = u32::BITS - c_max.leading_zeros();
    let mut value = 0;

    for i in 0..fixed_length {
        value |= u32::from(bins.next_bin()?) << i;
    }

    Ok(value)
}

/// TU binarization (9.3.2.2).
fn truncated_unary(bins: &mut impl Bins, c_max: u32) -> Result<u32> {
    let mut value = 0;

    while value < c_max && bins.next_bin()? == 1 {
        value += 1;
    }

    Ok(value)
}

/// U binarization (9.3.2.1), with at most `max_bins` bins equal to 1.
fn unary(bins: &mut impl Bins, max_bins: u32) -> Result<u32> {
    let mut value = 0;

    while bins.next_bin()? == 1 {
        value += 1;

        if value > max_bins {
            lwarn!("unary bin string is longer than {} bins", max_bins);
            bail!(BinarizationError::UnaryOverflow);
        }
    }

    Ok(value)
}

/// UEGk binarization (9.3.2.3).
///
/// The prefix is a TU bin string with `cMax = uCoff`. The Exp-Golomb suffix and the sign
/// both belong to the suffix of the bin string.
fn uegk(bins: &mut impl Bins, signed: bool, u_coff: u32, k: u32) -> Result<i32> {
    let mut value = truncated_unary(bins, u_coff)?;
    let has_suffix = value == u_coff;

    if has_suffix {
        bins.begin_suffix();

        let mut k = k;

        while bins.next_bin()? == 1 {
            value += 1 << k;
            k += 1;

            if k > 16 {
                lwarn!("Exp-Golomb suffix exponent exceeds 16");
                bail!(BinarizationError::ExpGolombOverflow);
            }
        }

        let mut suffix = 0;

        for _ in 0..k {
            suffix = (suffix << 1) | u32::from(bins.next_bin()?);
        }

        value += suffix;
    }

    let value = value as i32;

    if !signed || value == 0 {
        return Ok(value);
    }

    if !has_suffix {
        bins.begin_suffix();
    }

    Ok(if bins.next_bin()? == 1 { -value } else { value })
}

/// The `mb_type` bin strings of I slices, which also form the suffix of the other slice
/// types (Table 9-36).
fn mb_type_i(bins: &mut impl Bins) -> Result<u32> {
    if bins.next_bin()? == 0 {
        return Ok(0);
    }

    // Decoded with `DecodeTerminate`.
    if bins.next_bin()? == 1 {
        return Ok(25);
    }

    let luma = u32::from(bins.next_bin()?);
    let chroma = if bins.next_bin()? == 1 {
        1 + u32::from(bins.next_bin()?)
    } else {
        0
    };
    let pred_high = u32::from(bins.next_bin()?);
    let pred_low = u32::from(bins.next_bin()?);

    Ok(1 + 12 * luma + 4 * chroma + 2 * pred_high + pred_low)
}

/// `mb_type` (Tables 9-36 and 9-37).
fn mb_type(bins: &mut impl Bins, slice_type: SliceType) -> Result<u32> {
    match slice_type {
        SliceType::I => mb_type_i(bins),
        SliceType::Si => {
            if bins.next_bin()? == 0 {
                return Ok(0);
            }

            bins.begin_suffix();
            Ok(1 + mb_type_i(bins)?)
        }
        SliceType::P | SliceType::Sp => {
            if bins.next_bin()? == 1 {
                bins.begin_suffix();
                return Ok(5 + mb_type_i(bins)?);
            }

            let b1 = bins.next_bin()?;
            let b2 = bins.next_bin()?;

            Ok(match (b1, b2) {
                (0, 0) => 0,
                (0, _) => 3,
                (_, 1) => 1,
                _ => 2,
            })
        }
        SliceType::B => {
            if bins.next_bin()? == 0 {
                return Ok(0);
            }

            if bins.next_bin()? == 0 {
                return Ok(1 + u32::from(bins.next_bin()?));
            }

            let mut bits = 0;

            for _ in 0..4 {
                bits = (bits << 1) | u32::from(bins.next_bin()?);
            }

            Ok(match bits {
                0..=7 => bits + 3,
                13 => {
                    bins.begin_suffix();
                    23 + mb_type_i(bins)?
                }
                14 => 11,
                15 => 22,
                _ => ((bits << 1) | u32::from(bins.next_bin()?)) - 4,
            })
        }
    }
}

/// `sub_mb_type` (Table 9-38).
fn sub_mb_type(bins: &mut impl Bins, slice_type: SliceType) -> Result<u32> {
    match slice_type {
        SliceType::P | SliceType::Sp => {
            if bins.next_bin()? == 1 {
                return Ok(0);
            }

            if bins.next_bin()? == 0 {
                return Ok(1);
            }

            Ok(if bins.next_bin()? == 1 { 2 } else { 3 })
        }
        SliceType::B => {
            if bins.next_bin()? == 0 {
                return Ok(0);
            }

            if bins.next_bin()? == 0 {
                return Ok(1 + u32::from(bins.next_bin()?));
            }

            if bins.next_bin()? == 1 {
                if bins.next_bin()? == 1 {
                    return Ok(11 + u32::from(bins.next_bin()?));
                }

                let high = u32::from(bins.next_bin()?);
                let low = u32::from(bins.next_bin()?);

                return Ok(7 + 2 * high + low);
            }

            let high = u32::from(bins.next_bin()?);
            let low = u32::from(bins.next_bin()?);

            Ok(3 + 2 * high + low)
        }
        SliceType::I | SliceType::Si => {
            lwarn!("sub_mb_type is not present in {:?} slices", slice_type);
            bail!(BinarizationError::InvalidCodeword)
        }
    }
}

/// `coded_block_pattern` (9.3.2.6): a FL prefix for the four 8x8 luma blocks and, for
/// 4:2:0 and 4:2:2 content, a TU suffix for chroma.
fn coded_block_pattern(bins: &mut impl Bins, chroma_array_type: u8) -> Result<u32> {
    let mut luma = 0;

    for b8 in 0..4 {
        luma |= u32::from(bins.next_bin()?) << b8;
    }

    let chroma = if matches!(chroma_array_type, 1 | 2) {
        bins.begin_suffix();
        truncated_unary(bins, 2)?
    } else {
        0
    };

    Ok(luma | (chroma << 4))
}

/// `mb_qp_delta` (9.3.2.7): a U binarization of the value mapped by Table 9-3.
fn mapped_unary(bins: &mut impl Bins, max_bins: u32) -> Result<i32> {
    let mapped = unary(bins, max_bins)? as i32;

    Ok(if mapped % 2 == 1 {
        (mapped + 1) / 2
    } else {
        -(mapped / 2)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DecodeError, ParseError};

    /// Bins taken from a fixed bin string, remembering where the suffix started.
    struct Script<'a> {
        bins: &'a [u8],
        pos: usize,
        suffix_at: Option<usize>,
    }

    impl<'a> Script<'a> {
        fn new(bins: &'a [u8]) -> Self {
            Self {
                bins,
                pos: 0,
                suffix_at: None,
            }
        }
    }

    impl Bins for Script<'_> {
        fn next_bin(&mut self) -> Result<u8> {
            let bin = *self.bins.get(self.pos).ok_or(ParseError::UnexpectedEof)?;
            self.pos += 1;

            Ok(bin)
        }

        fn begin_suffix(&mut self) {
            assert!(self.suffix_at.is_none(), "suffix started twice");
            self.suffix_at = Some(self.pos);
        }
    }

    /// Decode `bins` completely, returning the value and the length of the prefix.
    fn decode_with(
        binarization: Binarization,
        bins: &[u8],
        settings: &SliceSettings,
    ) -> Result<(i32, usize)> {
        let mut script = Script::new(bins);
        let value = decode_value(binarization, &mut script, settings)?;

        assert_eq!(script.pos, bins.len(), "{binarization:?} left bins unread");

        Ok((value, script.suffix_at.unwrap_or(bins.len())))
    }

    fn decode(binarization: Binarization, bins: &[u8]) -> Result<i32> {
        decode_with(binarization, bins, &SliceSettings::default()).map(|(value, _)| value)
    }

    /// The forward binarization of the simple schemes, used to check the inverse.
    fn binarize(binarization: Binarization, value: i32) -> Vec<u8> {
        let unary_bins = |value: u32, c_max: Option<u32>| {
            let mut bins = vec![1; value as usize];

            if c_max != Some(value) {
                bins.push(0);
            }

            bins
        };

        match binarization {
            Binarization::FixedLength(c_max) => (0..u32::BITS - c_max.leading_zeros())
                .map(|i| ((value >> i) & 1) as u8)
                .collect(),
            Binarization::TruncatedUnary(c_max) => unary_bins(value as u32, Some(c_max)),
            Binarization::Unary => unary_bins(value as u32, None),
            Binarization::Uegk { signed, u_coff, k } => {
                let abs = value.unsigned_abs();
                let mut bins = unary_bins(abs.min(u_coff), Some(u_coff));

                if abs >= u_coff {
                    let mut suffix = abs - u_coff;
                    let mut k = k;

                    while suffix >= 1 << k {
                        bins.push(1);
                        suffix -= 1 << k;
                        k += 1;
                    }

                    bins.push(0);
                    bins.extend((0..k).rev().map(|i| ((suffix >> i) & 1) as u8));
                }

                if signed && value != 0 {
                    bins.push(u8::from(value < 0));
                }

                bins
            }
            Binarization::MappedUnary => {
                let mapped = if value > 0 { 2 * value - 1 } else { -2 * value };
                unary_bins(mapped as u32, None)
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn simple_schemes_invert_their_binarization() {
        let ranges: [(Binarization, core::ops::RangeInclusive<i32>); 8] = [
            (Binarization::FixedLength(1), 0..=1),
            (Binarization::FixedLength(7), 0..=7),
            (Binarization::TruncatedUnary(3), 0..=3),
            (Binarization::Unary, 0..=40),
            (Binarization::MappedUnary, -30..=30),
            (
                Binarization::Uegk {
                    signed: true,
                    u_coff: 9,
                    k: 3,
                },
                -600..=600,
            ),
            (
                Binarization::Uegk {
                    signed: false,
                    u_coff: 14,
                    k: 0,
                },
                0..=600,
            ),
            (
                Binarization::Uegk {
                    signed: false,
                    u_coff: 14,
                    k: 0,
                },
                65_000..=65_600,
            ),
        ];

        for (binarization, range) in ranges {
            for value in range {
                let bins = binarize(binarization, value);
                assert_eq!(decode(binarization, &bins), Ok(value), "{binarization:?}");
            }
        }
    }

    #[test]
    fn fixed_length_is_least_significant_bit_first() {
        assert_eq!(decode(Binarization::FixedLength(7), &[1, 0, 0]), Ok(1));
        assert_eq!(decode(Binarization::FixedLength(7), &[0, 1, 1]), Ok(6));
    }

    #[test]
    fn truncated_unary_stops_at_c_max() {
        assert_eq!(decode(Binarization::TruncatedUnary(3), &[1, 1, 1]), Ok(3));
        assert_eq!(decode(Binarization::TruncatedUnary(3), &[1, 0]), Ok(1));
    }

    #[test]
    fn unary_limit() {
        let settings = SliceSettings {
            max_unary_bins: 4,
            ..SliceSettings::default()
        };

        assert_eq!(
            decode_with(Binarization::Unary, &[1, 1, 1, 1, 0], &settings),
            Ok((4, 5))
        );

        let mut script = Script::new(&[1; 10]);
        assert_eq!(
            decode_value(Binarization::Unary, &mut script, &settings),
            Err(DecodeError::Binarization(BinarizationError::UnaryOverflow))
        );
        assert_eq!(script.pos, 5);
    }

    #[test]
    fn mapped_unary_alternates_signs() {
        assert_eq!(decode(Binarization::MappedUnary, &[0]), Ok(0));
        assert_eq!(decode(Binarization::MappedUnary, &[1, 0]), Ok(1));
        assert_eq!(decode(Binarization::MappedUnary, &[1, 1, 0]), Ok(-1));
        assert_eq!(decode(Binarization::MappedUnary, &[1, 1, 1, 0]), Ok(2));
    }

    #[test]
    fn uegk_affixes() {
        let mvd = Binarization::Uegk {
            signed: true,
            u_coff: 9,
            k: 3,
        };
        let settings = SliceSettings::default();

        // Values below uCoff only carry a sign in their suffix.
        assert_eq!(decode_with(mvd, &[1, 1, 0, 1], &settings), Ok((-2, 3)));
        assert_eq!(decode_with(mvd, &[0], &settings), Ok((0, 1)));

        // 9 ones, then the order-3 Exp-Golomb code of 0 and the sign.
        let bins = [1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0];
        assert_eq!(decode_with(mvd, &bins, &settings), Ok((9, 9)));

        // 9 + 8 + 3 = 20.
        let bins = [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 1, 1, 1];
        assert_eq!(decode_with(mvd, &bins, &settings), Ok((-20, 9)));
    }

    #[test]
    fn uegk_overflow() {
        let level = Binarization::Uegk {
            signed: false,
            u_coff: 14,
            k: 0,
        };

        assert_eq!(
            decode(level, &[1; 40]),
            Err(DecodeError::Binarization(BinarizationError::ExpGolombOverflow))
        );
    }

    #[test]
    fn mb_type_i_codewords() {
        let i = Binarization::MbType(SliceType::I);

        assert_eq!(decode(i, &[0]), Ok(0));
        assert_eq!(decode(i, &[1, 1]), Ok(25));
        assert_eq!(decode(i, &[1, 0, 0, 0, 0, 0]), Ok(1));
        assert_eq!(decode(i, &[1, 0, 0, 0, 1, 1]), Ok(4));
        assert_eq!(decode(i, &[1, 0, 0, 1, 0, 0, 0]), Ok(5));
        assert_eq!(decode(i, &[1, 0, 0, 1, 1, 1, 1]), Ok(12));
        assert_eq!(decode(i, &[1, 0, 1, 0, 0, 0]), Ok(13));
        assert_eq!(decode(i, &[1, 0, 1, 1, 0, 1, 0]), Ok(19));
        assert_eq!(decode(i, &[1, 0, 1, 1, 1, 1, 1]), Ok(24));
    }

    #[test]
    fn mb_type_p_and_si_codewords() {
        let p = Binarization::MbType(SliceType::P);
        let settings = SliceSettings::default();

        assert_eq!(decode(p, &[0, 0, 0]), Ok(0));
        assert_eq!(decode(p, &[0, 1, 1]), Ok(1));
        assert_eq!(decode(p, &[0, 1, 0]), Ok(2));
        assert_eq!(decode(p, &[0, 0, 1]), Ok(3));
        assert_eq!(decode_with(p, &[1, 0], &settings), Ok((5, 1)));
        assert_eq!(decode_with(p, &[1, 1, 1], &settings), Ok((30, 1)));
        assert_eq!(decode(Binarization::MbType(SliceType::Sp), &[1, 1, 0, 0, 0, 0, 1]), Ok(7));

        let si = Binarization::MbType(SliceType::Si);
        assert_eq!(decode(si, &[0]), Ok(0));
        assert_eq!(decode_with(si, &[1, 0], &settings), Ok((1, 1)));
        assert_eq!(decode(si, &[1, 1, 1]), Ok(26));
    }

    #[test]
    fn mb_type_b_codewords() {
        let b = Binarization::MbType(SliceType::B);
        let codewords: [&[u8]; 23] = [
            &[0],
            &[1, 0, 0],
            &[1, 0, 1],
            &[1, 1, 0, 0, 0, 0],
            &[1, 1, 0, 0, 0, 1],
            &[1, 1, 0, 0, 1, 0],
            &[1, 1, 0, 0, 1, 1],
            &[1, 1, 0, 1, 0, 0],
            &[1, 1, 0, 1, 0, 1],
            &[1, 1, 0, 1, 1, 0],
            &[1, 1, 0, 1, 1, 1],
            &[1, 1, 1, 1, 1, 0],
            &[1, 1, 1, 0, 0, 0, 0],
            &[1, 1, 1, 0, 0, 0, 1],
            &[1, 1, 1, 0, 0, 1, 0],
            &[1, 1, 1, 0, 0, 1, 1],
            &[1, 1, 1, 0, 1, 0, 0],
            &[1, 1, 1, 0, 1, 0, 1],
            &[1, 1, 1, 0, 1, 1, 0],
            &[1, 1, 1, 0, 1, 1, 1],
            &[1, 1, 1, 1, 0, 0, 0],
            &[1, 1, 1, 1, 0, 0, 1],
            &[1, 1, 1, 1, 1, 1],
        ];

        for (value, bins) in codewords.iter().enumerate() {
            assert_eq!(decode(b, bins), Ok(value as i32), "{bins:?}");
        }

        let settings = SliceSettings::default();
        assert_eq!(decode_with(b, &[1, 1, 1, 1, 0, 1, 0], &settings), Ok((23, 6)));
        assert_eq!(decode_with(b, &[1, 1, 1, 1, 0, 1, 1, 1], &settings), Ok((48, 6)));
    }

    #[test]
    fn sub_mb_type_codewords() {
        let p = Binarization::SubMbType(SliceType::P);
        let p_codewords: [&[u8]; 4] = [&[1], &[0, 0], &[0, 1, 1], &[0, 1, 0]];

        for (value, bins) in p_codewords.iter().enumerate() {
            assert_eq!(decode(p, bins), Ok(value as i32), "{bins:?}");
        }

        let b = Binarization::SubMbType(SliceType::B);
        let b_codewords: [&[u8]; 13] = [
            &[0],
            &[1, 0, 0],
            &[1, 0, 1],
            &[1, 1, 0, 0, 0],
            &[1, 1, 0, 0, 1],
            &[1, 1, 0, 1, 0],
            &[1, 1, 0, 1, 1],
            &[1, 1, 1, 0, 0, 0],
            &[1, 1, 1, 0, 0, 1],
            &[1, 1, 1, 0, 1, 0],
            &[1, 1, 1, 0, 1, 1],
            &[1, 1, 1, 1, 0],
            &[1, 1, 1, 1, 1],
        ];

        for (value, bins) in b_codewords.iter().enumerate() {
            assert_eq!(decode(b, bins), Ok(value as i32), "{bins:?}");
        }

        assert_eq!(
            decode(Binarization::SubMbType(SliceType::I), &[0]),
            Err(DecodeError::Binarization(BinarizationError::InvalidCodeword))
        );
    }

    #[test]
    fn coded_block_pattern_affixes() {
        let cbp = Binarization::CodedBlockPattern;
        let settings = SliceSettings::default();

        assert_eq!(decode_with(cbp, &[1, 0, 1, 1, 0], &settings), Ok((0b1101, 4)));
        assert_eq!(decode_with(cbp, &[0, 0, 0, 0, 1, 0], &settings), Ok((0x10, 4)));
        assert_eq!(decode_with(cbp, &[1, 1, 1, 1, 1, 1], &settings), Ok((0x2f, 4)));

        // Monochrome and 4:4:4 content have no chroma suffix.
        for chroma_array_type in [0, 3] {
            let settings = SliceSettings {
                chroma_array_type,
                ..SliceSettings::default()
            };
            assert_eq!(decode_with(cbp, &[0, 1, 0, 0], &settings), Ok((0b0010, 4)));
        }
    }

    #[test]
    fn truncated_input() {
        assert_eq!(
            decode(Binarization::MbType(SliceType::I), &[1, 0, 1]),
            Err(DecodeError::Parse(ParseError::UnexpectedEof))
        );
    }
}

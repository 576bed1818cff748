//! Context index assignment: the mapping from syntax elements to context index offsets
//! and binarizations (9.3.2, 9.3.3.1, Table 9-34).

use crate::error::{AssignmentError, Result, bail};
use crate::settings::SliceType;
use crate::syntax::SyntaxElement;

/// The context index offsets that use the per-element ctxIdxInc rules of Table 9-39,
/// as opposed to the ctxBlockCat-based offsets of residual block syntax elements.
pub const NEIGHBOUR_DERIVED_OFFSETS: [u16; 22] = [
    0, 3, 11, 14, 17, 21, 24, 27, 32, 36, 40, 47, 54, 60, 64, 68, 69, 70, 73, 77, 276, 399,
];

/// Whether `ctx_idx_offset` is one of [`NEIGHBOUR_DERIVED_OFFSETS`].
pub fn is_neighbour_derived(ctx_idx_offset: u16) -> bool {
    NEIGHBOUR_DERIVED_OFFSETS.contains(&ctx_idx_offset)
}

/// A context index offset or `maxBinIdxCtx` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextIndexValue {
    /// A single value that applies to every bin.
    Integer(u16),
    /// Separate values for the prefix and the suffix of the bin string.
    ///
    /// A suffix of `None` means that the suffix bins are bypass-coded.
    Affix {
        /// The value for the prefix.
        prefix: u16,
        /// The value for the suffix.
        suffix: Option<u16>,
    },
    /// All bins are bypass-coded.
    Bypass,
}

impl ContextIndexValue {
    /// Whether some bins of the element are decoded with the bypass process.
    pub fn uses_bypass(self) -> bool {
        matches!(self, Self::Bypass | Self::Affix { suffix: None, .. })
    }

    /// Whether the bin string consists of a prefix and a suffix.
    pub fn has_suffix(self) -> bool {
        matches!(self, Self::Affix { .. })
    }

    /// The value for one part of the bin string, or `None` for bypass-coded bins.
    pub fn get(self, affix: Affix) -> Option<u16> {
        match (self, affix) {
            (Self::Integer(value), _) => Some(value),
            (Self::Affix { prefix, .. }, Affix::Prefix) => Some(prefix),
            (Self::Affix { suffix, .. }, Affix::Suffix) => suffix,
            (Self::Bypass, _) => None,
        }
    }
}

/// The part of a bin string that is being decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Affix {
    /// The prefix, or the whole bin string for elements without a suffix.
    #[default]
    Prefix,
    /// The suffix.
    Suffix,
}

/// A binarization scheme (9.3.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binarization {
    /// Fixed-length binarization with the given `cMax` (9.3.2.5).
    FixedLength(u32),
    /// Truncated unary binarization with the given `cMax` (9.3.2.2).
    TruncatedUnary(u32),
    /// Unary binarization (9.3.2.1).
    Unary,
    /// Concatenated unary / k-th order Exp-Golomb binarization (9.3.2.3).
    Uegk {
        /// `signedValFlag`.
        signed: bool,
        /// `uCoff`.
        u_coff: u32,
        /// The order of the Exp-Golomb suffix.
        k: u32,
    },
    /// The `mb_type` binarization of the given slice type (9.3.2.5).
    MbType(SliceType),
    /// The `sub_mb_type` binarization of the given slice type (9.3.2.5).
    SubMbType(SliceType),
    /// The `coded_block_pattern` binarization (9.3.2.6).
    CodedBlockPattern,
    /// Unary binarization of the mapped `mb_qp_delta` value (9.3.2.7).
    MappedUnary,
}

/// Everything needed to decode one syntax element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextIndexRecord {
    /// The syntax element.
    pub element: SyntaxElement,
    /// `ctxBlockCat` for residual block syntax elements.
    pub ctx_block_cat: Option<u8>,
    /// `maxBinIdxCtx`.
    pub max_bin_idx_ctx: ContextIndexValue,
    /// `ctxIdxOffset`.
    pub ctx_idx_offset: ContextIndexValue,
    /// The binarization.
    pub binarization: Binarization,
}

/// `ctxIdxBlockCatOffset` of `coded_block_flag` (Table 9-40).
pub const CODED_BLOCK_FLAG_CAT_OFFSETS: [u16; 14] = [0, 4, 8, 12, 16, 0, 0, 4, 8, 4, 0, 4, 8, 8];

/// `ctxIdxBlockCatOffset` of `significant_coeff_flag` and `last_significant_coeff_flag`
/// (Table 9-40).
pub const SIGNIFICANT_COEFF_CAT_OFFSETS: [u16; 14] =
    [0, 15, 29, 44, 47, 0, 0, 15, 29, 0, 0, 15, 29, 0];

/// `ctxIdxBlockCatOffset` of `coeff_abs_level_minus1` (Table 9-40).
pub const COEFF_ABS_LEVEL_CAT_OFFSETS: [u16; 14] =
    [0, 10, 20, 30, 39, 0, 0, 10, 20, 0, 0, 10, 20, 0];

/// `ctxIdxBlockCatOffset` of a residual block syntax element.
pub fn ctx_block_cat_offset(element: SyntaxElement, ctx_block_cat: u8) -> Option<u16> {
    let table = match element {
        SyntaxElement::CodedBlockFlag => &CODED_BLOCK_FLAG_CAT_OFFSETS,
        SyntaxElement::SignificantCoeffFlag | SyntaxElement::LastSignificantCoeffFlag => {
            &SIGNIFICANT_COEFF_CAT_OFFSETS
        }
        SyntaxElement::CoeffAbsLevelMinus1 => &COEFF_ABS_LEVEL_CAT_OFFSETS,
        _ => return None,
    };

    table.get(ctx_block_cat as usize).copied()
}

/// Which of the ranges of Table 9-34 a `ctxBlockCat` falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CatRange {
    /// `ctxBlockCat < 5`.
    Luma,
    /// `ctxBlockCat == 5`.
    Luma8x8,
    /// `5 < ctxBlockCat < 9`.
    Cb,
    /// `ctxBlockCat == 9`.
    Cb8x8,
    /// `9 < ctxBlockCat < 13`.
    Cr,
    /// `ctxBlockCat == 13`.
    Cr8x8,
}

impl CatRange {
    fn new(ctx_block_cat: u8) -> Option<Self> {
        Some(match ctx_block_cat {
            0..=4 => Self::Luma,
            5 => Self::Luma8x8,
            6..=8 => Self::Cb,
            9 => Self::Cb8x8,
            10..=12 => Self::Cr,
            13 => Self::Cr8x8,
            _ => return None,
        })
    }
}

/// Assign the context index offset, `maxBinIdxCtx` and binarization of a syntax element
/// (Table 9-34).
///
/// `ctx_block_cat` is only consulted for residual block syntax elements. `is_frame` selects
/// between the frame and field coded offsets of the significance map.
pub fn assign(
    element: SyntaxElement,
    ctx_block_cat: Option<u8>,
    is_frame: bool,
    slice_type: SliceType,
) -> Result<ContextIndexRecord> {
    use Binarization as Bin;
    use ContextIndexValue::{Affix as Pair, Bypass, Integer};

    let unsupported = AssignmentError::UnsupportedSyntaxElement {
        element,
        slice_type,
        ctx_block_cat,
    };

    let record = |max: ContextIndexValue, offset: ContextIndexValue, binarization| {
        ContextIndexRecord {
            element,
            ctx_block_cat: None,
            max_bin_idx_ctx: max,
            ctx_idx_offset: offset,
            binarization,
        }
    };

    let pair = |prefix, suffix| Pair {
        prefix,
        suffix: Some(suffix),
    };

    let inter = !slice_type.is_intra();

    let record = match element {
        SyntaxElement::MbType => match slice_type {
            SliceType::Si => record(pair(0, 6), pair(0, 3), Bin::MbType(slice_type)),
            SliceType::I => record(Integer(6), Integer(3), Bin::MbType(slice_type)),
            SliceType::P | SliceType::Sp => {
                record(pair(2, 5), pair(14, 17), Bin::MbType(slice_type))
            }
            SliceType::B => record(pair(3, 5), pair(27, 32), Bin::MbType(slice_type)),
        },
        SyntaxElement::MbSkipFlag => match slice_type {
            SliceType::P | SliceType::Sp => record(Integer(0), Integer(11), Bin::FixedLength(1)),
            SliceType::B => record(Integer(0), Integer(24), Bin::FixedLength(1)),
            SliceType::I | SliceType::Si => bail!(unsupported),
        },
        SyntaxElement::SubMbType => match slice_type {
            SliceType::P | SliceType::Sp => {
                record(Integer(2), Integer(21), Bin::SubMbType(slice_type))
            }
            SliceType::B => record(Integer(3), Integer(36), Bin::SubMbType(slice_type)),
            SliceType::I | SliceType::Si => bail!(unsupported),
        },
        SyntaxElement::MvdHorizontal | SyntaxElement::MvdVertical if inter => {
            let offset = if element == SyntaxElement::MvdHorizontal {
                40
            } else {
                47
            };

            record(
                Pair {
                    prefix: 4,
                    suffix: None,
                },
                Pair {
                    prefix: offset,
                    suffix: None,
                },
                Bin::Uegk {
                    signed: true,
                    u_coff: 9,
                    k: 3,
                },
            )
        }
        SyntaxElement::RefIdx if inter => record(Integer(2), Integer(54), Bin::Unary),
        SyntaxElement::MbQpDelta => record(Integer(2), Integer(60), Bin::MappedUnary),
        SyntaxElement::IntraChromaPredMode => {
            record(Integer(1), Integer(64), Bin::TruncatedUnary(3))
        }
        SyntaxElement::PrevIntraPredModeFlag => {
            record(Integer(0), Integer(68), Bin::FixedLength(1))
        }
        SyntaxElement::RemIntraPredMode => record(Integer(0), Integer(69), Bin::FixedLength(7)),
        SyntaxElement::MbFieldDecodingFlag => {
            record(Integer(0), Integer(70), Bin::FixedLength(1))
        }
        SyntaxElement::CodedBlockPattern => {
            record(pair(3, 1), pair(73, 77), Bin::CodedBlockPattern)
        }
        SyntaxElement::TransformSize8x8Flag => {
            record(Integer(0), Integer(399), Bin::FixedLength(1))
        }
        SyntaxElement::EndOfSliceFlag => record(Integer(0), Integer(276), Bin::FixedLength(1)),
        SyntaxElement::CoeffSignFlag => {
            let Some(cat) = ctx_block_cat.filter(|cat| *cat <= 13) else {
                bail!(unsupported);
            };

            ContextIndexRecord {
                ctx_block_cat: Some(cat),
                ..record(Integer(0), Bypass, Bin::FixedLength(1))
            }
        }
        SyntaxElement::CodedBlockFlag
        | SyntaxElement::SignificantCoeffFlag
        | SyntaxElement::LastSignificantCoeffFlag
        | SyntaxElement::CoeffAbsLevelMinus1 => {
            let Some((cat, range)) =
                ctx_block_cat.and_then(|cat| CatRange::new(cat).map(|range| (cat, range)))
            else {
                bail!(unsupported);
            };

            ContextIndexRecord {
                ctx_block_cat: Some(cat),
                ..residual_record(element, range, is_frame)
            }
        }
        SyntaxElement::MvdHorizontal | SyntaxElement::MvdVertical | SyntaxElement::RefIdx => {
            bail!(unsupported)
        }
    };

    Ok(record)
}

/// The record of a residual block syntax element with a valid `ctxBlockCat`.
fn residual_record(element: SyntaxElement, range: CatRange, is_frame: bool) -> ContextIndexRecord {
    use CatRange::*;

    let frame_or_field = |frame, field| if is_frame { frame } else { field };

    let (max, offset, binarization) = match element {
        SyntaxElement::CodedBlockFlag => {
            let offset = match range {
                Luma => 85,
                Cb => 460,
                Cr => 472,
                Luma8x8 | Cb8x8 | Cr8x8 => 1012,
            };

            (
                ContextIndexValue::Integer(0),
                ContextIndexValue::Integer(offset),
                Binarization::FixedLength(1),
            )
        }
        SyntaxElement::SignificantCoeffFlag => {
            let offset = match range {
                Luma => frame_or_field(105, 277),
                Luma8x8 => frame_or_field(402, 436),
                Cb => frame_or_field(484, 776),
                Cb8x8 => frame_or_field(660, 675),
                Cr => frame_or_field(528, 820),
                Cr8x8 => frame_or_field(718, 733),
            };

            (
                ContextIndexValue::Integer(0),
                ContextIndexValue::Integer(offset),
                Binarization::FixedLength(1),
            )
        }
        SyntaxElement::LastSignificantCoeffFlag => {
            let offset = match range {
                Luma => frame_or_field(166, 338),
                Luma8x8 => frame_or_field(417, 451),
                Cb => frame_or_field(572, 864),
                Cb8x8 => frame_or_field(690, 699),
                Cr => frame_or_field(616, 908),
                Cr8x8 => frame_or_field(748, 757),
            };

            (
                ContextIndexValue::Integer(0),
                ContextIndexValue::Integer(offset),
                Binarization::FixedLength(1),
            )
        }
        _ => {
            let offset = match range {
                Luma => 227,
                Luma8x8 => 426,
                Cb => 952,
                Cb8x8 => 708,
                Cr => 982,
                Cr8x8 => 766,
            };

            (
                ContextIndexValue::Affix {
                    prefix: 1,
                    suffix: None,
                },
                ContextIndexValue::Affix {
                    prefix: offset,
                    suffix: None,
                },
                Binarization::Uegk {
                    signed: false,
                    u_coff: 14,
                    k: 0,
                },
            )
        }
    };

    ContextIndexRecord {
        element,
        ctx_block_cat: None,
        max_bin_idx_ctx: max,
        ctx_idx_offset: offset,
        binarization,
    }
}

/// The category of a residual block (Table 9-42).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResidualBlockType {
    /// `Intra16x16DCLevel`.
    Intra16x16DcLevel,
    /// `Intra16x16ACLevel`.
    Intra16x16AcLevel,
    /// `LumaLevel4x4`.
    LumaLevel4x4,
    /// `ChromaDCLevel`.
    ChromaDcLevel,
    /// `ChromaACLevel`.
    ChromaAcLevel,
    /// `LumaLevel8x8`.
    LumaLevel8x8,
    /// `CbIntra16x16DCLevel`.
    CbIntra16x16DcLevel,
    /// `CbIntra16x16ACLevel`.
    CbIntra16x16AcLevel,
    /// `CbLevel4x4`.
    CbLevel4x4,
    /// `CbLevel8x8`.
    CbLevel8x8,
    /// `CrIntra16x16DCLevel`.
    CrIntra16x16DcLevel,
    /// `CrIntra16x16ACLevel`.
    CrIntra16x16AcLevel,
    /// `CrLevel4x4`.
    CrLevel4x4,
    /// `CrLevel8x8`.
    CrLevel8x8,
}

impl ResidualBlockType {
    /// `ctxBlockCat`.
    pub fn ctx_block_cat(self) -> u8 {
        match self {
            Self::Intra16x16DcLevel => 0,
            Self::Intra16x16AcLevel => 1,
            Self::LumaLevel4x4 => 2,
            Self::ChromaDcLevel => 3,
            Self::ChromaAcLevel => 4,
            Self::LumaLevel8x8 => 5,
            Self::CbIntra16x16DcLevel => 6,
            Self::CbIntra16x16AcLevel => 7,
            Self::CbLevel4x4 => 8,
            Self::CbLevel8x8 => 9,
            Self::CrIntra16x16DcLevel => 10,
            Self::CrIntra16x16AcLevel => 11,
            Self::CrLevel4x4 => 12,
            Self::CrLevel8x8 => 13,
        }
    }

    /// `maxNumCoeff`, with `NumC8x8` needed for chroma DC blocks.
    pub fn max_num_coeff(self, num_c8x8: u32) -> u32 {
        match self {
            Self::Intra16x16DcLevel
            | Self::LumaLevel4x4
            | Self::CbIntra16x16DcLevel
            | Self::CbLevel4x4
            | Self::CrIntra16x16DcLevel
            | Self::CrLevel4x4 => 16,
            Self::Intra16x16AcLevel
            | Self::ChromaAcLevel
            | Self::CbIntra16x16AcLevel
            | Self::CrIntra16x16AcLevel => 15,
            Self::ChromaDcLevel => 4 * num_c8x8,
            Self::LumaLevel8x8 | Self::CbLevel8x8 | Self::CrLevel8x8 => 64,
        }
    }
}

/// The colour component (0 for Y, 1 for Cb, 2 for Cr) that a `ctxBlockCat` refers to.
///
/// Chroma DC and AC blocks (categories 3 and 4) take the component from `iCbCr`.
pub(crate) fn colour_component(ctx_block_cat: u8, i_cb_cr: u8) -> usize {
    match ctx_block_cat {
        3 | 4 => 1 + i_cb_cr.min(1) as usize,
        6..=9 => 1,
        10..=13 => 2,
        _ => 0,
    }
}

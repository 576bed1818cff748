//! The macroblock state that context selection reads from neighbouring macroblocks.

use crate::settings::SliceType;

/// The prediction mode of a macroblock or (sub-)macroblock partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredMode {
    /// `Intra_4x4`.
    Intra4x4,
    /// `Intra_8x8`.
    Intra8x8,
    /// `Intra_16x16`.
    Intra16x16,
    /// `Pred_L0`.
    L0,
    /// `Pred_L1`.
    L1,
    /// `BiPred`.
    Bi,
    /// `Direct`.
    Direct,
}

impl PredMode {
    /// Whether a partition with this mode uses reference picture list `list`.
    pub fn uses_list(self, list: RefList) -> bool {
        match (self, list) {
            (Self::Bi, _) => true,
            (Self::L0, RefList::L0) | (Self::L1, RefList::L1) => true,
            _ => false,
        }
    }
}

/// A reference picture list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RefList {
    /// `RefPicList0`.
    #[default]
    L0,
    /// `RefPicList1`.
    L1,
}

impl RefList {
    pub(crate) fn index(self) -> usize {
        match self {
            Self::L0 => 0,
            Self::L1 => 1,
        }
    }
}

/// The type of a macroblock (Tables 7-11 to 7-14).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MbType {
    /// `SI`.
    Si,
    /// `I_NxN`, i.e. `Intra_4x4` or `Intra_8x8` prediction.
    #[default]
    INxN,
    /// `I_16x16_<pred_mode>_<cbp_chroma>_<cbp_luma>`.
    I16x16 {
        /// `Intra16x16PredMode`.
        pred_mode: u8,
        /// `CodedBlockPatternChroma`.
        cbp_chroma: u8,
        /// `CodedBlockPatternLuma`, either 0 or 15.
        cbp_luma: u8,
    },
    /// `I_PCM`.
    IPcm,
    /// `P_L0_16x16`.
    P16x16,
    /// `P_L0_L0_16x8`.
    P16x8,
    /// `P_L0_L0_8x16`.
    P8x16,
    /// `P_8x8`.
    P8x8,
    /// `P_8x8ref0`.
    P8x8Ref0,
    /// `P_Skip`.
    PSkip,
    /// `B_Direct_16x16`.
    BDirect16x16,
    /// `B_<mode>_16x16`.
    B16x16(PredMode),
    /// `B_<mode0>_<mode1>_16x8`.
    B16x8(PredMode, PredMode),
    /// `B_<mode0>_<mode1>_8x16`.
    B8x16(PredMode, PredMode),
    /// `B_8x8`.
    B8x8,
    /// `B_Skip`.
    BSkip,
}

/// The prediction modes of the B partitions with two partitions, in the order of Table 7-14
/// starting at `mb_type` 4.
const B_PAIRS: [(PredMode, PredMode); 9] = [
    (PredMode::L0, PredMode::L0),
    (PredMode::L1, PredMode::L1),
    (PredMode::L0, PredMode::L1),
    (PredMode::L1, PredMode::L0),
    (PredMode::L0, PredMode::Bi),
    (PredMode::L1, PredMode::Bi),
    (PredMode::Bi, PredMode::L0),
    (PredMode::Bi, PredMode::L1),
    (PredMode::Bi, PredMode::Bi),
];

impl MbType {
    /// Map the value of the `mb_type` syntax element to a macroblock type.
    ///
    /// Intra types in P, SP and B slices are offset as described in 7.4.5.
    pub fn from_syntax(slice_type: SliceType, value: u32) -> Option<Self> {
        match slice_type {
            SliceType::I => Self::intra(value),
            SliceType::Si => match value {
                0 => Some(Self::Si),
                _ => Self::intra(value - 1),
            },
            SliceType::P | SliceType::Sp => match value {
                0 => Some(Self::P16x16),
                1 => Some(Self::P16x8),
                2 => Some(Self::P8x16),
                3 => Some(Self::P8x8),
                4 => Some(Self::P8x8Ref0),
                _ => Self::intra(value - 5),
            },
            SliceType::B => match value {
                0 => Some(Self::BDirect16x16),
                1 => Some(Self::B16x16(PredMode::L0)),
                2 => Some(Self::B16x16(PredMode::L1)),
                3 => Some(Self::B16x16(PredMode::Bi)),
                4..=21 => {
                    let (first, second) = B_PAIRS[(value as usize - 4) / 2];

                    if value % 2 == 0 {
                        Some(Self::B16x8(first, second))
                    } else {
                        Some(Self::B8x16(first, second))
                    }
                }
                22 => Some(Self::B8x8),
                _ => Self::intra(value - 23),
            },
        }
    }

    fn intra(value: u32) -> Option<Self> {
        match value {
            0 => Some(Self::INxN),
            1..=24 => {
                let v = (value - 1) as u8;

                Some(Self::I16x16 {
                    pred_mode: v % 4,
                    cbp_chroma: (v / 4) % 3,
                    cbp_luma: if v >= 12 { 15 } else { 0 },
                })
            }
            25 => Some(Self::IPcm),
            _ => None,
        }
    }

    /// Whether the macroblock is intra-predicted (including `SI` and `I_PCM`).
    pub fn is_intra(self) -> bool {
        matches!(self, Self::Si | Self::INxN | Self::I16x16 { .. } | Self::IPcm)
    }

    /// Whether the macroblock is `P_Skip` or `B_Skip`.
    pub fn is_skip(self) -> bool {
        matches!(self, Self::PSkip | Self::BSkip)
    }

    /// Width and height of the macroblock partitions, or `None` for intra macroblocks.
    ///
    /// Direct-predicted B macroblocks report the 8x8 size used for direct inference.
    pub fn mb_part_size(self) -> Option<(u8, u8)> {
        match self {
            Self::P16x16 | Self::PSkip | Self::B16x16(_) => Some((16, 16)),
            Self::P16x8 | Self::B16x8(..) => Some((16, 8)),
            Self::P8x16 | Self::B8x16(..) => Some((8, 16)),
            Self::P8x8 | Self::P8x8Ref0 | Self::B8x8 | Self::BDirect16x16 | Self::BSkip => {
                Some((8, 8))
            }
            Self::Si | Self::INxN | Self::I16x16 { .. } | Self::IPcm => None,
        }
    }

    /// `NumMbPart`.
    pub fn num_mb_part(self) -> usize {
        self.mb_part_size()
            .map(|(w, h)| 256 / (w as usize * h as usize))
            .unwrap_or(1)
    }

    /// Whether the macroblock is split into sub-macroblocks with their own `sub_mb_type`.
    pub fn has_sub_mb_types(self) -> bool {
        matches!(self, Self::P8x8 | Self::P8x8Ref0 | Self::B8x8)
    }

    /// `MbPartPredMode(mb_type, mb_part_idx)`.
    ///
    /// `transform_size_8x8` distinguishes `Intra_4x4` from `Intra_8x8` for `I_NxN`.
    /// Returns `None` for `I_PCM`, for `B_8x8` (whose modes are given by the sub-macroblock
    /// types) and for partition indices that do not exist.
    pub fn mb_part_pred_mode(
        self,
        mb_part_idx: usize,
        transform_size_8x8: bool,
    ) -> Option<PredMode> {
        if mb_part_idx >= self.num_mb_part() {
            return None;
        }

        match self {
            Self::Si => Some(PredMode::Intra4x4),
            Self::INxN if transform_size_8x8 => Some(PredMode::Intra8x8),
            Self::INxN => Some(PredMode::Intra4x4),
            Self::I16x16 { .. } => Some(PredMode::Intra16x16),
            Self::IPcm | Self::B8x8 => None,
            Self::P16x16
            | Self::P16x8
            | Self::P8x16
            | Self::P8x8
            | Self::P8x8Ref0
            | Self::PSkip => Some(PredMode::L0),
            Self::BDirect16x16 | Self::BSkip => Some(PredMode::Direct),
            Self::B16x16(mode) => Some(mode),
            Self::B16x8(first, second) | Self::B8x16(first, second) => {
                Some(if mb_part_idx == 0 { first } else { second })
            }
        }
    }
}

/// The type of a sub-macroblock (Tables 7-17 and 7-18).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubMbType {
    /// `P_L0_8x8`.
    P8x8,
    /// `P_L0_8x4`.
    P8x4,
    /// `P_L0_4x8`.
    P4x8,
    /// `P_L0_4x4`.
    P4x4,
    /// `B_Direct_8x8`.
    BDirect8x8,
    /// `B_<mode>_8x8`.
    B8x8(PredMode),
    /// `B_<mode>_8x4`.
    B8x4(PredMode),
    /// `B_<mode>_4x8`.
    B4x8(PredMode),
    /// `B_<mode>_4x4`.
    B4x4(PredMode),
}

impl SubMbType {
    /// Map the value of the `sub_mb_type` syntax element to a sub-macroblock type.
    pub fn from_syntax(slice_type: SliceType, value: u32) -> Option<Self> {
        use PredMode::{Bi, L0, L1};

        match slice_type {
            SliceType::P | SliceType::Sp => match value {
                0 => Some(Self::P8x8),
                1 => Some(Self::P8x4),
                2 => Some(Self::P4x8),
                3 => Some(Self::P4x4),
                _ => None,
            },
            SliceType::B => match value {
                0 => Some(Self::BDirect8x8),
                1 => Some(Self::B8x8(L0)),
                2 => Some(Self::B8x8(L1)),
                3 => Some(Self::B8x8(Bi)),
                4 => Some(Self::B8x4(L0)),
                5 => Some(Self::B4x8(L0)),
                6 => Some(Self::B8x4(L1)),
                7 => Some(Self::B4x8(L1)),
                8 => Some(Self::B8x4(Bi)),
                9 => Some(Self::B4x8(Bi)),
                10 => Some(Self::B4x4(L0)),
                11 => Some(Self::B4x4(L1)),
                12 => Some(Self::B4x4(Bi)),
                _ => None,
            },
            SliceType::I | SliceType::Si => None,
        }
    }

    /// Width and height of the sub-macroblock partitions.
    pub fn sub_mb_part_size(self) -> (u8, u8) {
        match self {
            Self::P8x8 | Self::B8x8(_) => (8, 8),
            Self::P8x4 | Self::B8x4(_) => (8, 4),
            Self::P4x8 | Self::B4x8(_) => (4, 8),
            Self::P4x4 | Self::B4x4(_) | Self::BDirect8x8 => (4, 4),
        }
    }

    /// `NumSubMbPart`.
    pub fn num_sub_mb_part(self) -> usize {
        let (w, h) = self.sub_mb_part_size();
        64 / (w as usize * h as usize)
    }

    /// `SubMbPredMode`.
    pub fn pred_mode(self) -> PredMode {
        match self {
            Self::P8x8 | Self::P8x4 | Self::P4x8 | Self::P4x4 => PredMode::L0,
            Self::BDirect8x8 => PredMode::Direct,
            Self::B8x8(mode) | Self::B8x4(mode) | Self::B4x8(mode) | Self::B4x4(mode) => mode,
        }
    }
}

/// The `coded_block_flag` values of the residual blocks of a macroblock.
///
/// Index 0 of each array is the luma (Y) component, 1 is Cb and 2 is Cr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CodedBlockFlags {
    /// The DC blocks (`Intra16x16DCLevel`, `ChromaDCLevel` and the 4:4:4 Cb/Cr DC levels).
    pub dc: [bool; 3],
    /// One bit per 4x4 block, indexed by `luma4x4BlkIdx` (or `chroma4x4BlkIdx` for
    /// `ChromaACLevel` when `ChromaArrayType` is 1 or 2).
    ///
    /// AC blocks of `Intra_16x16` macroblocks are stored here as well.
    pub blocks_4x4: [u16; 3],
    /// One bit per 8x8 block, indexed by `luma8x8BlkIdx`.
    pub blocks_8x8: [u8; 3],
}

impl CodedBlockFlags {
    /// Record the flag of a 4x4 block.
    pub fn set_4x4(&mut self, component: usize, blk_idx: usize, flag: bool) {
        set_bit_u16(&mut self.blocks_4x4[component], blk_idx, flag);
    }

    /// Record the flag of an 8x8 block.
    pub fn set_8x8(&mut self, component: usize, blk_idx: usize, flag: bool) {
        let mask = 1 << blk_idx;

        if flag {
            self.blocks_8x8[component] |= mask;
        } else {
            self.blocks_8x8[component] &= !mask;
        }
    }

    /// The flag of a 4x4 block.
    pub fn get_4x4(&self, component: usize, blk_idx: usize) -> bool {
        (self.blocks_4x4[component] >> blk_idx) & 1 != 0
    }

    /// The flag of an 8x8 block.
    pub fn get_8x8(&self, component: usize, blk_idx: usize) -> bool {
        (self.blocks_8x8[component] >> blk_idx) & 1 != 0
    }
}

fn set_bit_u16(value: &mut u16, bit: usize, flag: bool) {
    let mask = 1 << bit;

    if flag {
        *value |= mask;
    } else {
        *value &= !mask;
    }
}

/// The decoded state of a macroblock, as far as CABAC context selection depends on it.
///
/// The caller fills in each value as soon as the corresponding syntax element has been
/// decoded. `ref_idx` is stored per 8x8 quadrant and `mvd` per 4x4 block, so every entry
/// covered by a partition has to be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Macroblock {
    /// `mb_type`.
    pub mb_type: MbType,
    /// `mb_skip_flag`.
    pub mb_skip_flag: bool,
    /// `mb_field_decoding_flag`.
    pub field: bool,
    /// `transform_size_8x8_flag`.
    pub transform_size_8x8: bool,
    /// `coded_block_pattern`, with the luma part in the low four bits and the chroma part
    /// in bits four and five. Ignored for `I_16x16` macroblocks, whose pattern is part of
    /// the type.
    pub coded_block_pattern: u8,
    /// `intra_chroma_pred_mode`.
    pub intra_chroma_pred_mode: u8,
    /// `mb_qp_delta`.
    pub mb_qp_delta: i32,
    /// `sub_mb_type` of each 8x8 quadrant.
    pub sub_mb_types: [Option<SubMbType>; 4],
    /// `ref_idx_l0` and `ref_idx_l1` per 8x8 quadrant.
    pub ref_idx: [[u8; 4]; 2],
    /// The horizontal and vertical components of `mvd_l0` and `mvd_l1` per 4x4 block,
    /// indexed by `luma4x4BlkIdx`.
    pub mvd: [[[i32; 2]; 16]; 2],
    /// The `coded_block_flag` of every residual block.
    pub coded_block_flags: CodedBlockFlags,
}

impl Macroblock {
    /// Create a macroblock of the given type with everything else zeroed.
    pub fn new(mb_type: MbType) -> Self {
        Self {
            mb_type,
            mb_skip_flag: mb_type.is_skip(),
            ..Self::default()
        }
    }

    /// Whether the macroblock was skipped.
    pub fn is_skip(&self) -> bool {
        self.mb_skip_flag || self.mb_type.is_skip()
    }

    /// Whether the macroblock is intra-predicted.
    pub fn is_intra(&self) -> bool {
        !self.is_skip() && self.mb_type.is_intra()
    }

    /// Whether the macroblock is `I_PCM`.
    pub fn is_pcm(&self) -> bool {
        self.mb_type == MbType::IPcm
    }

    /// `CodedBlockPatternLuma`.
    pub fn cbp_luma(&self) -> u8 {
        match self.mb_type {
            MbType::I16x16 { cbp_luma, .. } => cbp_luma,
            _ => self.coded_block_pattern & 0x0f,
        }
    }

    /// `CodedBlockPatternChroma`.
    pub fn cbp_chroma(&self) -> u8 {
        match self.mb_type {
            MbType::I16x16 { cbp_chroma, .. } => cbp_chroma,
            _ => self.coded_block_pattern >> 4,
        }
    }

    /// The prediction mode of the partition that covers the luma sample at `(x, y)`.
    pub fn pred_mode_at(&self, x: i32, y: i32) -> Option<PredMode> {
        let (w, h) = self.mb_type.mb_part_size()?;
        let (x, y) = (x.clamp(0, 15) as usize, y.clamp(0, 15) as usize);
        let parts_per_row = 16 / w as usize;
        let mb_part_idx = (y / h as usize) * parts_per_row + x / w as usize;

        match self.mb_type {
            MbType::B8x8 | MbType::P8x8 | MbType::P8x8Ref0 => self.sub_mb_types[mb_part_idx]
                .map(SubMbType::pred_mode)
                .or_else(|| self.mb_type.mb_part_pred_mode(mb_part_idx, false)),
            mb_type => mb_type.mb_part_pred_mode(mb_part_idx, self.transform_size_8x8),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn i_slice_types() {
        assert_eq!(MbType::from_syntax(SliceType::I, 0), Some(MbType::INxN));
        assert_eq!(
            MbType::from_syntax(SliceType::I, 1),
            Some(MbType::I16x16 {
                pred_mode: 0,
                cbp_chroma: 0,
                cbp_luma: 0
            })
        );
        assert_eq!(
            MbType::from_syntax(SliceType::I, 12),
            Some(MbType::I16x16 {
                pred_mode: 3,
                cbp_chroma: 2,
                cbp_luma: 0
            })
        );
        assert_eq!(
            MbType::from_syntax(SliceType::I, 13),
            Some(MbType::I16x16 {
                pred_mode: 0,
                cbp_chroma: 0,
                cbp_luma: 15
            })
        );
        assert_eq!(
            MbType::from_syntax(SliceType::I, 24),
            Some(MbType::I16x16 {
                pred_mode: 3,
                cbp_chroma: 2,
                cbp_luma: 15
            })
        );
        assert_eq!(MbType::from_syntax(SliceType::I, 25), Some(MbType::IPcm));
        assert_eq!(MbType::from_syntax(SliceType::I, 26), None);
    }

    #[test]
    fn inter_slice_types() {
        assert_eq!(MbType::from_syntax(SliceType::Si, 0), Some(MbType::Si));
        assert_eq!(MbType::from_syntax(SliceType::Si, 1), Some(MbType::INxN));
        assert_eq!(MbType::from_syntax(SliceType::P, 4), Some(MbType::P8x8Ref0));
        assert_eq!(MbType::from_syntax(SliceType::Sp, 30), Some(MbType::IPcm));
        assert_eq!(MbType::from_syntax(SliceType::P, 31), None);

        assert_eq!(
            MbType::from_syntax(SliceType::B, 0),
            Some(MbType::BDirect16x16)
        );
        assert_eq!(
            MbType::from_syntax(SliceType::B, 3),
            Some(MbType::B16x16(PredMode::Bi))
        );
        assert_eq!(
            MbType::from_syntax(SliceType::B, 4),
            Some(MbType::B16x8(PredMode::L0, PredMode::L0))
        );
        assert_eq!(
            MbType::from_syntax(SliceType::B, 11),
            Some(MbType::B8x16(PredMode::L1, PredMode::L0))
        );
        assert_eq!(
            MbType::from_syntax(SliceType::B, 21),
            Some(MbType::B8x16(PredMode::Bi, PredMode::Bi))
        );
        assert_eq!(MbType::from_syntax(SliceType::B, 22), Some(MbType::B8x8));
        assert_eq!(MbType::from_syntax(SliceType::B, 23), Some(MbType::INxN));
        assert_eq!(MbType::from_syntax(SliceType::B, 48), Some(MbType::IPcm));
    }

    #[test]
    fn sub_types() {
        assert_eq!(
            SubMbType::from_syntax(SliceType::P, 2),
            Some(SubMbType::P4x8)
        );
        assert_eq!(
            SubMbType::from_syntax(SliceType::B, 7),
            Some(SubMbType::B4x8(PredMode::L1))
        );
        assert_eq!(SubMbType::from_syntax(SliceType::B, 13), None);
        assert_eq!(SubMbType::from_syntax(SliceType::I, 0), None);

        assert_eq!(SubMbType::P8x4.num_sub_mb_part(), 2);
        assert_eq!(SubMbType::BDirect8x8.num_sub_mb_part(), 4);
        assert_eq!(SubMbType::B8x8(PredMode::Bi).num_sub_mb_part(), 1);
    }

    #[test]
    fn partition_prediction_modes() {
        let mut mb = Macroblock::new(MbType::B16x8(PredMode::L0, PredMode::Bi));
        assert_eq!(mb.pred_mode_at(15, 7), Some(PredMode::L0));
        assert_eq!(mb.pred_mode_at(0, 8), Some(PredMode::Bi));

        mb.mb_type = MbType::B8x16(PredMode::L1, PredMode::L0);
        assert_eq!(mb.pred_mode_at(7, 15), Some(PredMode::L1));
        assert_eq!(mb.pred_mode_at(8, 0), Some(PredMode::L0));

        mb.mb_type = MbType::B8x8;
        mb.sub_mb_types = [
            Some(SubMbType::BDirect8x8),
            Some(SubMbType::B8x4(PredMode::L1)),
            Some(SubMbType::B4x4(PredMode::Bi)),
            None,
        ];
        assert_eq!(mb.pred_mode_at(3, 3), Some(PredMode::Direct));
        assert_eq!(mb.pred_mode_at(12, 4), Some(PredMode::L1));
        assert_eq!(mb.pred_mode_at(4, 12), Some(PredMode::Bi));
        assert_eq!(mb.pred_mode_at(12, 12), None);

        assert_eq!(Macroblock::new(MbType::IPcm).pred_mode_at(0, 0), None);
        assert_eq!(
            Macroblock::new(MbType::PSkip).pred_mode_at(9, 9),
            Some(PredMode::L0)
        );
    }

    #[test]
    fn coded_block_pattern_of_intra_16x16() {
        let mut mb = Macroblock::new(MbType::I16x16 {
            pred_mode: 1,
            cbp_chroma: 2,
            cbp_luma: 15,
        });
        mb.coded_block_pattern = 0;

        assert_eq!(mb.cbp_luma(), 15);
        assert_eq!(mb.cbp_chroma(), 2);

        mb.mb_type = MbType::INxN;
        mb.coded_block_pattern = 0x25;
        assert_eq!(mb.cbp_luma(), 5);
        assert_eq!(mb.cbp_chroma(), 2);
    }

    #[test]
    fn coded_block_flag_bits() {
        let mut flags = CodedBlockFlags::default();
        flags.set_4x4(2, 15, true);
        flags.set_8x8(0, 3, true);

        assert!(flags.get_4x4(2, 15));
        assert!(!flags.get_4x4(2, 14));
        assert!(flags.get_8x8(0, 3));

        flags.set_4x4(2, 15, false);
        assert_eq!(flags.blocks_4x4, [0, 0, 0]);
    }

    #[test]
    fn skip_is_not_intra() {
        assert!(Macroblock::new(MbType::PSkip).is_skip());
        assert!(!Macroblock::new(MbType::PSkip).is_intra());
        assert!(Macroblock::new(MbType::IPcm).is_intra());
    }
}

//! The CABAC-coded syntax elements of the slice data layer.

/// A syntax element that is coded with CABAC (Table 9-34).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxElement {
    /// `mb_type`.
    MbType,
    /// `mb_skip_flag`.
    MbSkipFlag,
    /// `sub_mb_type`.
    SubMbType,
    /// `mb_field_decoding_flag`.
    MbFieldDecodingFlag,
    /// `coded_block_pattern`.
    CodedBlockPattern,
    /// `mb_qp_delta`.
    MbQpDelta,
    /// `prev_intra4x4_pred_mode_flag` and `prev_intra8x8_pred_mode_flag`.
    PrevIntraPredModeFlag,
    /// `rem_intra4x4_pred_mode` and `rem_intra8x8_pred_mode`.
    RemIntraPredMode,
    /// `intra_chroma_pred_mode`.
    IntraChromaPredMode,
    /// `ref_idx_l0` and `ref_idx_l1`.
    RefIdx,
    /// The horizontal component of `mvd_l0` and `mvd_l1`.
    MvdHorizontal,
    /// The vertical component of `mvd_l0` and `mvd_l1`.
    MvdVertical,
    /// `coded_block_flag`.
    CodedBlockFlag,
    /// `significant_coeff_flag`.
    SignificantCoeffFlag,
    /// `last_significant_coeff_flag`.
    LastSignificantCoeffFlag,
    /// `coeff_abs_level_minus1`.
    CoeffAbsLevelMinus1,
    /// `coeff_sign_flag`.
    CoeffSignFlag,
    /// `transform_size_8x8_flag`.
    TransformSize8x8Flag,
    /// `end_of_slice_flag`.
    EndOfSliceFlag,
}

impl SyntaxElement {
    /// Whether the element belongs to a residual block and needs a `ctxBlockCat`.
    pub fn is_residual(self) -> bool {
        matches!(
            self,
            Self::CodedBlockFlag
                | Self::SignificantCoeffFlag
                | Self::LastSignificantCoeffFlag
                | Self::CoeffAbsLevelMinus1
                | Self::CoeffSignFlag
        )
    }
}

//! Slice-level parameters that steer context initialization and selection.

/// The coding type of a slice (Table 7-6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SliceType {
    /// A P slice.
    P,
    /// A B slice.
    B,
    /// An I slice.
    #[default]
    I,
    /// A switching P slice.
    Sp,
    /// A switching I slice.
    Si,
}

impl SliceType {
    /// Map the `slice_type` syntax element (0..=9) to a slice type.
    pub fn from_slice_type(value: u32) -> Option<Self> {
        match value {
            0 | 5 => Some(Self::P),
            1 | 6 => Some(Self::B),
            2 | 7 => Some(Self::I),
            3 | 8 => Some(Self::Sp),
            4 | 9 => Some(Self::Si),
            _ => None,
        }
    }

    /// Whether context variables are initialized from the I slice table.
    pub fn is_intra(self) -> bool {
        matches!(self, Self::I | Self::Si)
    }

    /// Whether the slice uses the P slice binarizations and context offsets.
    pub fn is_predictive(self) -> bool {
        matches!(self, Self::P | Self::Sp)
    }
}

/// Slice parameters needed by the CABAC decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceSettings {
    /// The type of the slice.
    pub slice_type: SliceType,
    /// `cabac_init_idc`, selecting one of three initialization tables for P, SP and B slices.
    pub cabac_init_idc: u8,
    /// SliceQPY, i.e. `26 + pic_init_qp_minus26 + slice_qp_delta`.
    pub slice_qp_y: i32,
    /// Whether the picture uses macroblock-adaptive frame/field coding.
    pub mbaff_frame_flag: bool,
    /// Whether the slice belongs to a field picture.
    pub field_pic_flag: bool,
    /// `constrained_intra_pred_flag` of the active picture parameter set.
    pub constrained_intra_pred_flag: bool,
    /// The NAL unit type carrying the slice data.
    pub nal_unit_type: u8,
    /// `ChromaArrayType` (0 for monochrome or separate planes, 1 for 4:2:0, 2 for 4:2:2,
    /// 3 for 4:4:4).
    pub chroma_array_type: u8,
    /// The maximum number of bins in a unary bin string before decoding is aborted.
    pub max_unary_bins: u32,
}

impl Default for SliceSettings {
    fn default() -> Self {
        Self {
            slice_type: SliceType::I,
            cabac_init_idc: 0,
            slice_qp_y: 26,
            mbaff_frame_flag: false,
            field_pic_flag: false,
            constrained_intra_pred_flag: false,
            nal_unit_type: 1,
            chroma_array_type: 1,
            max_unary_bins: 128,
        }
    }
}

impl SliceSettings {
    /// Whether slice data partitioning is in use (NAL unit types 2 to 4).
    pub(crate) fn uses_data_partitioning(&self) -> bool {
        (2..=4).contains(&self.nal_unit_type)
    }

    /// The width and height of a chroma macroblock (`MbWidthC`, `MbHeightC`).
    pub(crate) fn chroma_mb_size(&self) -> (i32, i32) {
        match self.chroma_array_type {
            2 => (8, 16),
            3 => (16, 16),
            _ => (8, 8),
        }
    }
}

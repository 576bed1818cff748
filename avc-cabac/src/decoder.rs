//! Decoding of whole syntax elements.
//!
//! [`CabacDecoder`] ties the arithmetic decoding engine, the context variables of a slice
//! and the per-bin context selection together. A macroblock layer parser calls
//! [`CabacDecoder::decode`] once per syntax element and keeps the macroblock state that
//! context selection looks at up to date in its [`Neighbourhood`].

use crate::arithmetic_decoder::ArithmeticDecoder;
use crate::assignment::{Affix, ContextIndexRecord, ResidualBlockType, assign};
use crate::binarization::{self, Bins};
use crate::context::{ContextStore, ContextVariable};
use crate::ctx_idx_inc::{BinContext, BinHistory, is_frame_macroblock, select_context};
use crate::error::{BinarizationError, ContextError, Result, bail, err};
use crate::macroblock::{MbType, RefList, SubMbType};
use crate::neighbour::Neighbourhood;
use crate::settings::SliceSettings;
use crate::source::BitSource;
use crate::syntax::SyntaxElement;

/// The position inside the macroblock layer that the next syntax element belongs to.
///
/// Only the fields that matter for the element being decoded have to be set. Everything
/// else can be left at its default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodingVariables {
    /// The reference picture list of `ref_idx_lX` and `mvd_lX`.
    pub list: RefList,
    /// `mbPartIdx` of `ref_idx_lX` and `mvd_lX`.
    pub mb_part_idx: usize,
    /// `subMbPartIdx` of `mvd_lX`.
    pub sub_mb_part_idx: usize,
    /// The residual block that residual syntax elements belong to.
    pub residual_block: Option<ResidualBlockType>,
    /// The index of the 4x4 or 8x8 block within its colour component, or of the chroma
    /// 4x4 block for chroma AC blocks.
    pub blk_idx: usize,
    /// `iCbCr` of chroma DC and AC blocks (0 for Cb, 1 for Cr).
    pub i_cb_cr: u8,
    /// `levelListIdx`, the scanning position of `significant_coeff_flag` and
    /// `last_significant_coeff_flag`.
    pub level_list_idx: u32,
    /// `NumC8x8`, the number of 8x8 chroma blocks per component (`4 / (SubWidthC *
    /// SubHeightC)`).
    pub num_c8x8: u32,
    /// `numDecodAbsLevelEq1`, the number of decoded levels of the current block whose
    /// absolute value is 1.
    pub num_decod_abs_level_eq1: u32,
    /// `numDecodAbsLevelGt1`, the number of decoded levels of the current block whose
    /// absolute value is greater than 1.
    pub num_decod_abs_level_gt1: u32,
}

/// A CABAC decoder for the slice data of one slice.
pub struct CabacDecoder<S: BitSource> {
    engine: ArithmeticDecoder<S>,
    contexts: ContextStore,
}

impl<S: BitSource> CabacDecoder<S> {
    /// Create a decoder for a slice.
    ///
    /// `source` has to be positioned at the first bit of the slice data after
    /// `cabac_alignment_one_bit`.
    pub fn new(source: S, settings: SliceSettings) -> Result<Self> {
        if !settings.slice_type.is_intra() && settings.cabac_init_idc > 2 {
            lwarn!("invalid cabac_init_idc {}", settings.cabac_init_idc);

            bail!(ContextError::InvalidInitializationEntry {
                ctx_idx: 0,
                cabac_init_idc: Some(settings.cabac_init_idc),
            });
        }

        ldebug!(
            "starting {:?} slice with SliceQPY {} and cabac_init_idc {}",
            settings.slice_type,
            settings.slice_qp_y,
            settings.cabac_init_idc
        );

        Ok(Self {
            engine: ArithmeticDecoder::new(source)?,
            contexts: ContextStore::new(settings),
        })
    }

    /// Decode the syntax element `element`.
    ///
    /// `nb` provides the macroblocks around the current one, and `vars` the position
    /// inside the current macroblock.
    pub fn decode<N: Neighbourhood + ?Sized>(
        &mut self,
        element: SyntaxElement,
        nb: &N,
        vars: &DecodingVariables,
    ) -> Result<i32> {
        let settings = *self.contexts.settings();
        let ctx_block_cat = vars.residual_block.map(ResidualBlockType::ctx_block_cat);
        let is_frame = is_frame_macroblock(nb.current(), &settings);
        let record = assign(element, ctx_block_cat, is_frame, settings.slice_type)?;

        let mut bins = ElementDecoder {
            engine: &mut self.engine,
            contexts: &mut self.contexts,
            record: &record,
            affix: Affix::Prefix,
            bin_idx: 0,
            history: BinHistory::new(),
            nb,
            vars,
            settings: &settings,
        };

        let value = binarization::decode_value(record.binarization, &mut bins, &settings)?;

        ldebug!("{:?} = {}", element, value);

        Ok(value)
    }

    /// Decode a syntax element that consists of a single flag.
    pub fn decode_flag<N: Neighbourhood + ?Sized>(
        &mut self,
        element: SyntaxElement,
        nb: &N,
        vars: &DecodingVariables,
    ) -> Result<bool> {
        Ok(self.decode(element, nb, vars)? != 0)
    }

    /// Decode `mb_type` and map it to the macroblock type of the current slice type.
    pub fn decode_mb_type<N: Neighbourhood + ?Sized>(&mut self, nb: &N) -> Result<MbType> {
        let value = self.decode(SyntaxElement::MbType, nb, &DecodingVariables::default())?;
        let slice_type = self.contexts.settings().slice_type;

        match MbType::from_syntax(slice_type, value as u32) {
            Some(mb_type) => Ok(mb_type),
            None => err!(BinarizationError::InvalidCodeword),
        }
    }

    /// Decode `sub_mb_type[mb_part_idx]`.
    pub fn decode_sub_mb_type<N: Neighbourhood + ?Sized>(&mut self, nb: &N) -> Result<SubMbType> {
        let value = self.decode(SyntaxElement::SubMbType, nb, &DecodingVariables::default())?;
        let slice_type = self.contexts.settings().slice_type;

        match SubMbType::from_syntax(slice_type, value as u32) {
            Some(sub_mb_type) => Ok(sub_mb_type),
            None => err!(BinarizationError::InvalidCodeword),
        }
    }

    /// Decode a single bin with the context variable at `ctx_idx`.
    pub fn decode_decision(&mut self, ctx_idx: u16) -> Result<u8> {
        let context = self.contexts.get_mut(ctx_idx)?;

        self.engine.decode_decision(context)
    }

    /// Decode a single bin with equiprobable symbols.
    pub fn decode_bypass(&mut self) -> Result<u8> {
        self.engine.decode_bypass()
    }

    /// Decode a single bin with the terminating context.
    pub fn decode_terminate(&mut self) -> Result<u8> {
        self.engine.decode_terminate()
    }

    /// Restart the arithmetic decoding engine, after the samples of an `I_PCM` macroblock
    /// have been read from [`CabacDecoder::source_mut`].
    ///
    /// The context variables are kept.
    pub fn reinitialize_engine(&mut self) -> Result<()> {
        ldebug!("reinitializing the decoding engine");

        self.engine.initialize()
    }

    /// The context variable at `ctx_idx`, if it has been used in this slice.
    pub fn context(&self, ctx_idx: u16) -> Option<ContextVariable> {
        self.contexts.get(ctx_idx)
    }

    /// The context variables of the slice.
    pub fn contexts(&self) -> &ContextStore {
        &self.contexts
    }

    /// The settings of the slice.
    pub fn settings(&self) -> &SliceSettings {
        self.contexts.settings()
    }

    /// The underlying bit source, for reading the raw samples of `I_PCM` macroblocks.
    pub fn source_mut(&mut self) -> &mut S {
        self.engine.source_mut()
    }

    /// Consume the decoder and return the bit source.
    pub fn into_source(self) -> S {
        self.engine.into_source()
    }
}

/// Supplies the bins of one syntax element to its binarization.
struct ElementDecoder<'a, S, N: ?Sized> {
    engine: &'a mut ArithmeticDecoder<S>,
    contexts: &'a mut ContextStore,
    record: &'a ContextIndexRecord,
    affix: Affix,
    bin_idx: u32,
    history: BinHistory,
    nb: &'a N,
    vars: &'a DecodingVariables,
    settings: &'a SliceSettings,
}

impl<S: BitSource, N: Neighbourhood + ?Sized> Bins for ElementDecoder<'_, S, N> {
    fn next_bin(&mut self) -> Result<u8> {
        let context = select_context(
            self.record,
            self.affix,
            self.bin_idx,
            &self.history,
            self.nb,
            self.vars,
            self.settings,
        )?;

        let bin = match context {
            BinContext::Decision(ctx_idx) => {
                let variable = self.contexts.get_mut(ctx_idx)?;
                let before = *variable;
                let bin = self.engine.decode_decision(variable)?;

                ltrace!(
                    "{:?} {:?} binIdx {}: ctxIdx {} = {} ({}/{} -> {}/{})",
                    self.record.element,
                    self.affix,
                    self.bin_idx,
                    ctx_idx,
                    bin,
                    before.p_state_idx,
                    before.val_mps,
                    variable.p_state_idx,
                    variable.val_mps
                );

                bin
            }
            BinContext::Bypass => {
                let bin = self.engine.decode_bypass()?;
                ltrace!("{:?} binIdx {}: bypass = {}", self.record.element, self.bin_idx, bin);

                bin
            }
            BinContext::Terminate => {
                let bin = self.engine.decode_terminate()?;
                ltrace!("{:?} binIdx {}: terminate = {}", self.record.element, self.bin_idx, bin);

                bin
            }
        };

        self.history.push(bin);
        self.bin_idx += 1;

        Ok(bin)
    }

    fn begin_suffix(&mut self) {
        self.affix = Affix::Suffix;
        self.bin_idx = 0;
        self.history.clear();
    }
}

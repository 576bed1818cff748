//! Derivation of `ctxIdx` for a single bin (9.3.3.1).
//!
//! For most syntax elements, `ctxIdx = ctxIdxOffset + ctxIdxInc`, where `ctxIdxInc` is
//! either a constant, derived from the bins decoded so far, or derived from the
//! neighbouring macroblocks (Table 9-39). Residual block syntax elements additionally add
//! `ctxIdxBlockCatOffset` and derive `ctxIdxInc` from the block category and the scanning
//! position.

mod block;
mod coefficient;
mod macroblock;
mod partition;
mod prior_bins;

use smallvec::SmallVec;

use crate::assignment::{Affix, ContextIndexRecord, ctx_block_cat_offset, is_neighbour_derived};
use crate::decoder::DecodingVariables;
use crate::error::{AssignmentError, ContextError, Result, bail};
use crate::macroblock::Macroblock;
use crate::neighbour::Neighbourhood;
use crate::settings::SliceSettings;
use crate::syntax::SyntaxElement;

/// The bins of the syntax element (or affix) that is currently being decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinHistory {
    bins: SmallVec<[u8; 16]>,
}

impl BinHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a decoded bin.
    pub fn push(&mut self, bin: u8) {
        self.bins.push(bin);
    }

    /// The bin with index `bin_idx`, if it has been decoded already.
    pub fn get(&self, bin_idx: usize) -> Option<u8> {
        self.bins.get(bin_idx).copied()
    }

    /// The number of decoded bins.
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Whether no bin has been decoded yet.
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Forget all bins.
    pub fn clear(&mut self) {
        self.bins.clear();
    }
}

impl From<&[u8]> for BinHistory {
    fn from(bins: &[u8]) -> Self {
        Self {
            bins: SmallVec::from_slice(bins),
        }
    }
}

/// How a bin has to be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinContext {
    /// With `DecodeDecision` and the context variable at the given `ctxIdx`.
    Decision(u16),
    /// With `DecodeBypass`.
    Bypass,
    /// With `DecodeTerminate`.
    Terminate,
}

/// The source of `ctxIdxInc` for one `binIdx` (Table 9-39).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    /// A constant increment.
    Fixed(u16),
    /// Derived from the neighbouring macroblocks, blocks or partitions (9.3.3.1.1).
    Neighbour,
    /// Derived from prior bins of the same element (9.3.3.1.2).
    Prior,
    /// `ctxIdx` 276, decoded with `DecodeTerminate`.
    Terminate,
}

/// The rules of a neighbour-derived `ctxIdxOffset`, indexed by
/// `Min(binIdx, maxBinIdxCtx)`.
fn rules(ctx_idx_offset: u16) -> Option<&'static [Rule]> {
    use Rule::{Fixed as F, Neighbour as N, Prior as P, Terminate as T};

    const NEIGHBOUR_ONLY: &[Rule] = &[N];
    const MB_TYPE_I: &[Rule] = &[N, T, F(3), F(4), P, P, F(7)];
    const MB_TYPE_P_PREFIX: &[Rule] = &[F(0), F(1), P];
    const MB_TYPE_INTRA_SUFFIX: &[Rule] = &[F(0), T, F(1), F(2), P, F(3)];
    const SUB_MB_TYPE_P: &[Rule] = &[F(0), F(1), F(2)];
    const MB_TYPE_B_PREFIX: &[Rule] = &[N, F(3), P, F(5)];
    const SUB_MB_TYPE_B: &[Rule] = &[F(0), F(1), P, F(3)];
    const MVD: &[Rule] = &[N, F(3), F(4), F(5), F(6)];
    const REF_IDX: &[Rule] = &[N, F(4), F(5)];
    const MB_QP_DELTA: &[Rule] = &[N, F(2), F(3)];
    const INTRA_CHROMA_PRED_MODE: &[Rule] = &[N, F(3)];
    const SINGLE_CONTEXT: &[Rule] = &[F(0)];
    const CODED_BLOCK_PATTERN_LUMA: &[Rule] = &[N, N, N, N];
    const CODED_BLOCK_PATTERN_CHROMA: &[Rule] = &[N, N];
    const TERMINATE: &[Rule] = &[T];

    Some(match ctx_idx_offset {
        0 | 11 | 24 | 70 | 399 => NEIGHBOUR_ONLY,
        3 => MB_TYPE_I,
        14 => MB_TYPE_P_PREFIX,
        17 | 32 => MB_TYPE_INTRA_SUFFIX,
        21 => SUB_MB_TYPE_P,
        27 => MB_TYPE_B_PREFIX,
        36 => SUB_MB_TYPE_B,
        40 | 47 => MVD,
        54 => REF_IDX,
        60 => MB_QP_DELTA,
        64 => INTRA_CHROMA_PRED_MODE,
        68 | 69 => SINGLE_CONTEXT,
        73 => CODED_BLOCK_PATTERN_LUMA,
        77 => CODED_BLOCK_PATTERN_CHROMA,
        276 => TERMINATE,
        _ => return None,
    })
}

/// Whether the current macroblock is a frame macroblock, which selects the frame coded
/// significance map contexts.
pub(crate) fn is_frame_macroblock(current: &Macroblock, settings: &SliceSettings) -> bool {
    !settings.field_pic_flag && !(settings.mbaff_frame_flag && current.field)
}

/// Select how the bin `bin_idx` of the given affix of an element has to be decoded.
///
/// `history` holds the bins of the same affix that have been decoded so far. The function
/// does not touch any decoder state, so it can be used to drive an encoder as well.
pub fn select_context<N: Neighbourhood + ?Sized>(
    record: &ContextIndexRecord,
    affix: Affix,
    bin_idx: u32,
    history: &BinHistory,
    nb: &N,
    vars: &DecodingVariables,
    settings: &SliceSettings,
) -> Result<BinContext> {
    let Some(offset) = record.ctx_idx_offset.get(affix) else {
        return Ok(BinContext::Bypass);
    };

    let unreachable = ContextError::UnreachableState {
        ctx_idx_offset: offset,
        bin_idx,
    };

    if is_neighbour_derived(offset) {
        let Some(rules) = rules(offset) else {
            bail!(unreachable);
        };

        let rule = rules[(bin_idx as usize).min(rules.len() - 1)];
        let inc = match rule {
            Rule::Terminate => return Ok(BinContext::Terminate),
            Rule::Fixed(inc) => inc,
            Rule::Prior => prior_bins::ctx_idx_inc(offset, bin_idx, history)?,
            Rule::Neighbour => neighbour_ctx_idx_inc(offset, bin_idx, history, nb, vars, settings)?,
        };

        return Ok(BinContext::Decision(offset + inc));
    }

    let unsupported = AssignmentError::UnsupportedSyntaxElement {
        element: record.element,
        slice_type: settings.slice_type,
        ctx_block_cat: record.ctx_block_cat,
    };

    let Some(cat) = record.ctx_block_cat else {
        bail!(unsupported);
    };

    let Some(cat_offset) = ctx_block_cat_offset(record.element, cat) else {
        bail!(unsupported);
    };

    let is_frame = is_frame_macroblock(nb.current(), settings);
    let inc = match record.element {
        SyntaxElement::CodedBlockFlag => Some(block::coded_block_flag(cat, nb, vars, settings)),
        SyntaxElement::SignificantCoeffFlag => {
            coefficient::significant_coeff_flag(cat, vars, is_frame)
        }
        SyntaxElement::LastSignificantCoeffFlag => {
            coefficient::last_significant_coeff_flag(cat, vars)
        }
        SyntaxElement::CoeffAbsLevelMinus1 => {
            Some(coefficient::coeff_abs_level_minus1(cat, bin_idx, vars))
        }
        _ => bail!(unsupported),
    };

    let Some(inc) = inc else {
        lwarn!(
            "no ctxIdxInc for {:?} at levelListIdx {}",
            record.element,
            vars.level_list_idx
        );

        bail!(ContextError::UnreachableState {
            ctx_idx_offset: offset,
            bin_idx: vars.level_list_idx,
        });
    };

    Ok(BinContext::Decision(offset + cat_offset + inc))
}

/// `ctxIdxInc` of a bin whose rule depends on the neighbourhood (9.3.3.1.1).
fn neighbour_ctx_idx_inc<N: Neighbourhood + ?Sized>(
    offset: u16,
    bin_idx: u32,
    history: &BinHistory,
    nb: &N,
    vars: &DecodingVariables,
    settings: &SliceSettings,
) -> Result<u16> {
    Ok(match offset {
        0 | 3 | 27 => macroblock::mb_type(offset, nb),
        11 | 24 => macroblock::mb_skip_flag(nb),
        70 => macroblock::mb_field_decoding_flag(nb),
        73 => macroblock::coded_block_pattern_luma(bin_idx, history, nb),
        77 => macroblock::coded_block_pattern_chroma(bin_idx, nb),
        60 => macroblock::mb_qp_delta(nb),
        64 => macroblock::intra_chroma_pred_mode(nb),
        399 => macroblock::transform_size_8x8_flag(nb),
        54 => partition::ref_idx(nb, vars, settings),
        40 | 47 => partition::mvd(offset, nb, vars, settings),
        _ => {
            lwarn!("no neighbour rule for ctxIdxOffset {}", offset);

            bail!(ContextError::UnreachableState {
                ctx_idx_offset: offset,
                bin_idx,
            })
        }
    })
}

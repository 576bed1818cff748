//! `ctxIdxInc` of macroblock-level syntax elements that depend on the neighbouring
//! macroblocks (9.3.3.1.1.1 to 9.3.3.1.1.5, 9.3.3.1.1.8, 9.3.3.1.1.10).

use super::BinHistory;
use crate::macroblock::{Macroblock, MbType};
use crate::neighbour::{self, Neighbour, Neighbourhood};

/// `condTermFlagA + condTermFlagB` over the neighbouring macroblocks, where a missing
/// neighbour yields 0.
fn sum<N: Neighbourhood + ?Sized>(nb: &N, cond_term_flag: impl Fn(&Macroblock) -> bool) -> u16 {
    [Neighbour::A, Neighbour::B]
        .into_iter()
        .filter(|n| neighbour::macroblock(nb, *n).is_some_and(&cond_term_flag))
        .count() as u16
}

/// `mb_skip_flag` (9.3.3.1.1.1).
pub(crate) fn mb_skip_flag<N: Neighbourhood + ?Sized>(nb: &N) -> u16 {
    sum(nb, |mb| !mb.is_skip())
}

/// `mb_field_decoding_flag` (9.3.3.1.1.2).
pub(crate) fn mb_field_decoding_flag<N: Neighbourhood + ?Sized>(nb: &N) -> u16 {
    [Neighbour::A, Neighbour::B]
        .into_iter()
        .filter(|n| nb.pair(*n).is_some_and(|mb| mb.field))
        .count() as u16
}

/// `mb_type` (9.3.3.1.1.3).
pub(crate) fn mb_type<N: Neighbourhood + ?Sized>(ctx_idx_offset: u16, nb: &N) -> u16 {
    sum(nb, |mb| match ctx_idx_offset {
        0 => mb.mb_type != MbType::Si,
        3 => mb.mb_type != MbType::INxN,
        _ => !matches!(mb.mb_type, MbType::BSkip | MbType::BDirect16x16) && !mb.is_skip(),
    })
}

/// The prefix bins of `coded_block_pattern` (9.3.3.1.1.4).
///
/// `bin_idx` is the index `b8` of the 8x8 luma block, and `history` holds the bins of the
/// blocks decoded before it.
pub(crate) fn coded_block_pattern_luma<N: Neighbourhood + ?Sized>(
    bin_idx: u32,
    history: &BinHistory,
    nb: &N,
) -> u16 {
    let cond_term_flag = |n| {
        let Some(block) = neighbour::luma_8x8(nb, bin_idx as usize, n) else {
            return 0;
        };

        let mb = block.macroblock;
        let coded = if block.is_current {
            history.get(block.blk_idx).is_some_and(|bin| bin != 0)
        } else {
            !mb.is_skip() && (mb.cbp_luma() >> block.blk_idx) & 1 != 0
        };

        if mb.is_pcm() || coded { 0 } else { 1 }
    };

    cond_term_flag(Neighbour::A) + 2 * cond_term_flag(Neighbour::B)
}

/// The suffix bins of `coded_block_pattern` (9.3.3.1.1.4).
pub(crate) fn coded_block_pattern_chroma<N: Neighbourhood + ?Sized>(bin_idx: u32, nb: &N) -> u16 {
    let cond_term_flag = |n| {
        let Some(mb) = neighbour::macroblock(nb, n) else {
            return 0;
        };

        if mb.is_pcm() {
            return 1;
        }

        if mb.is_skip() {
            return 0;
        }

        let cbp_chroma = mb.cbp_chroma();
        let coded = if bin_idx == 0 {
            cbp_chroma != 0
        } else {
            cbp_chroma == 2
        };

        u16::from(coded)
    };

    let inc = cond_term_flag(Neighbour::A) + 2 * cond_term_flag(Neighbour::B);

    if bin_idx == 1 { inc + 4 } else { inc }
}

/// The first bin of `mb_qp_delta` (9.3.3.1.1.5).
pub(crate) fn mb_qp_delta<N: Neighbourhood + ?Sized>(nb: &N) -> u16 {
    let Some(prev) = nb.previous() else {
        return 0;
    };

    let no_residual = !matches!(prev.mb_type, MbType::I16x16 { .. })
        && prev.cbp_luma() == 0
        && prev.cbp_chroma() == 0;

    if prev.is_skip() || prev.is_pcm() || no_residual || prev.mb_qp_delta == 0 {
        0
    } else {
        1
    }
}

/// The first bin of `intra_chroma_pred_mode` (9.3.3.1.1.8).
pub(crate) fn intra_chroma_pred_mode<N: Neighbourhood + ?Sized>(nb: &N) -> u16 {
    sum(nb, |mb| mb.is_intra() && !mb.is_pcm() && mb.intra_chroma_pred_mode != 0)
}

/// `transform_size_8x8_flag` (9.3.3.1.1.10).
pub(crate) fn transform_size_8x8_flag<N: Neighbourhood + ?Sized>(nb: &N) -> u16 {
    sum(nb, |mb| mb.transform_size_8x8)
}

//! `ctxIdxInc` of `coded_block_flag` (9.3.3.1.1.9).
//!
//! The flag of a neighbouring block is read from [`CodedBlockFlags`] of the macroblock that
//! contains it. When a macroblock uses the 8x8 transform, its 4x4 neighbours resolve to the
//! flag of the enclosing 8x8 block, so callers have to record 8x8 flags even when they are
//! inferred rather than decoded.
//!
//! [`CodedBlockFlags`]: crate::macroblock::CodedBlockFlags

use crate::assignment::colour_component;
use crate::decoder::DecodingVariables;
use crate::macroblock::{Macroblock, MbType};
use crate::neighbour::{self, BlockNeighbour, Neighbour, Neighbourhood};
use crate::settings::SliceSettings;

/// Whether the residual of an 8x8 luma block of `mb` has been transmitted.
fn has_luma_residual(mb: &Macroblock, luma8x8_blk_idx: usize) -> bool {
    !mb.is_skip() && !mb.is_pcm() && (mb.cbp_luma() >> luma8x8_blk_idx) & 1 != 0
}

fn has_chroma_residual(mb: &Macroblock) -> bool {
    !mb.is_skip() && !mb.is_pcm() && mb.cbp_chroma() != 0
}

/// `mbAddrN` together with the flag of `transBlockN`, if that block exists.
fn trans_block<'a, N: Neighbourhood + ?Sized>(
    ctx_block_cat: u8,
    comp: usize,
    nb: &'a N,
    vars: &DecodingVariables,
    settings: &SliceSettings,
    n: Neighbour,
) -> Option<(&'a Macroblock, Option<bool>)> {
    match ctx_block_cat {
        0 | 6 | 10 => {
            let mb = neighbour::macroblock(nb, n)?;
            let flag = matches!(mb.mb_type, MbType::I16x16 { .. })
                .then(|| mb.coded_block_flags.dc[comp]);

            Some((mb, flag))
        }
        1 | 2 | 7 | 8 | 11 | 12 => {
            let BlockNeighbour {
                macroblock: mb,
                blk_idx,
                ..
            } = neighbour::luma_4x4(nb, vars.blk_idx, n)?;
            let flags = &mb.coded_block_flags;
            let flag = has_luma_residual(mb, blk_idx >> 2).then(|| {
                if mb.transform_size_8x8 {
                    flags.get_8x8(comp, blk_idx >> 2)
                } else {
                    flags.get_4x4(comp, blk_idx)
                }
            });

            Some((mb, flag))
        }
        3 => {
            let mb = neighbour::macroblock(nb, n)?;
            let flag = has_chroma_residual(mb).then(|| mb.coded_block_flags.dc[comp]);

            Some((mb, flag))
        }
        4 => {
            let (w, h) = settings.chroma_mb_size();
            let block = neighbour::chroma_4x4(nb, vars.blk_idx, n, w, h)?;
            let mb = block.macroblock;
            let flag = (has_chroma_residual(mb) && mb.cbp_chroma() == 2)
                .then(|| mb.coded_block_flags.get_4x4(comp, block.blk_idx));

            Some((mb, flag))
        }
        _ => {
            let block = neighbour::luma_8x8(nb, vars.blk_idx, n)?;
            let mb = block.macroblock;
            let flag = (has_luma_residual(mb, block.blk_idx) && mb.transform_size_8x8)
                .then(|| mb.coded_block_flags.get_8x8(comp, block.blk_idx));

            Some((mb, flag))
        }
    }
}

/// The first bin of `coded_block_flag` for a block of category `ctx_block_cat`.
pub(crate) fn coded_block_flag<N: Neighbourhood + ?Sized>(
    ctx_block_cat: u8,
    nb: &N,
    vars: &DecodingVariables,
    settings: &SliceSettings,
) -> u16 {
    let comp = colour_component(ctx_block_cat, vars.i_cb_cr);
    let current = nb.current();

    let cond_term_flag = |n| {
        let Some((mb, flag)) = trans_block(ctx_block_cat, comp, nb, vars, settings, n) else {
            return u16::from(current.is_intra());
        };

        if flag.is_none() && !mb.is_pcm() {
            return 0;
        }

        if current.is_intra()
            && settings.constrained_intra_pred_flag
            && !mb.is_intra()
            && settings.uses_data_partitioning()
        {
            return 0;
        }

        if mb.is_pcm() {
            return 1;
        }

        u16::from(flag.unwrap_or(false))
    };

    cond_term_flag(Neighbour::A) + 2 * cond_term_flag(Neighbour::B)
}

//! `ctxIdxInc` of the significance map and of `coeff_abs_level_minus1` (9.3.3.1.3).

use crate::decoder::DecodingVariables;

/// `ctxIdxInc` of `significant_coeff_flag` in frame coded 8x8 blocks, indexed by
/// `levelListIdx` (Table 9-43).
const SIGNIFICANT_8X8_FRAME: [u8; 63] = [
    0, 1, 2, 3, 4, 5, 5, 4, 4, 3, 3, 4, 4, 4, 5, 5, 4, 4, 4, 4, 3, 3, 6, 7, 7, 7, 8, 9, 10, 9, 8,
    7, 7, 6, 11, 12, 13, 11, 6, 7, 8, 9, 14, 10, 9, 8, 6, 11, 12, 13, 11, 6, 9, 14, 10, 9, 11, 12,
    13, 11, 14, 10, 12,
];

/// `ctxIdxInc` of `significant_coeff_flag` in field coded 8x8 blocks.
const SIGNIFICANT_8X8_FIELD: [u8; 63] = [
    0, 1, 1, 2, 2, 3, 3, 4, 5, 6, 7, 7, 7, 8, 4, 5, 6, 9, 10, 10, 8, 11, 12, 11, 9, 9, 10, 10, 8,
    11, 12, 11, 9, 9, 10, 10, 8, 11, 12, 11, 9, 9, 10, 10, 8, 13, 13, 9, 9, 10, 10, 8, 13, 13, 9,
    9, 10, 10, 14, 14, 14, 14, 14,
];

/// `ctxIdxInc` of `last_significant_coeff_flag` in 8x8 blocks, for frame and field coding.
const LAST_8X8: [u8; 63] = [
    0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    3, 3, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 4, 4, 4, 5, 5, 5, 5, 6, 6, 6, 6, 7, 7, 7, 7, 8, 8, 8,
];

fn is_8x8(ctx_block_cat: u8) -> bool {
    matches!(ctx_block_cat, 5 | 9 | 13)
}

/// `ctxIdxInc` of the significance map flags of blocks other than 8x8 ones.
fn significance_map(ctx_block_cat: u8, vars: &DecodingVariables) -> u16 {
    if ctx_block_cat == 3 {
        // Chroma DC: 4 coefficients per 4:2:0 block, 8 per 4:2:2 block.
        (vars.level_list_idx / vars.num_c8x8.max(1)).min(2) as u16
    } else {
        vars.level_list_idx as u16
    }
}

fn lookup(table: &[u8; 63], level_list_idx: u32) -> Option<u16> {
    table.get(level_list_idx as usize).map(|inc| u16::from(*inc))
}

/// `significant_coeff_flag`.
///
/// Returns `None` if `levelListIdx` lies outside of an 8x8 block.
pub(crate) fn significant_coeff_flag(
    ctx_block_cat: u8,
    vars: &DecodingVariables,
    is_frame_macroblock: bool,
) -> Option<u16> {
    if !is_8x8(ctx_block_cat) {
        return Some(significance_map(ctx_block_cat, vars));
    }

    let table = if is_frame_macroblock {
        &SIGNIFICANT_8X8_FRAME
    } else {
        &SIGNIFICANT_8X8_FIELD
    };

    lookup(table, vars.level_list_idx)
}

/// `last_significant_coeff_flag`.
pub(crate) fn last_significant_coeff_flag(
    ctx_block_cat: u8,
    vars: &DecodingVariables,
) -> Option<u16> {
    if !is_8x8(ctx_block_cat) {
        return Some(significance_map(ctx_block_cat, vars));
    }

    lookup(&LAST_8X8, vars.level_list_idx)
}

/// `coeff_abs_level_minus1`, where the first bin depends on the number of levels equal
/// to one and the remaining bins on the number of levels greater than one decoded so far.
pub(crate) fn coeff_abs_level_minus1(
    ctx_block_cat: u8,
    bin_idx: u32,
    vars: &DecodingVariables,
) -> u16 {
    let gt1 = vars.num_decod_abs_level_gt1;

    let inc = if bin_idx == 0 {
        if gt1 != 0 {
            0
        } else {
            (1 + vars.num_decod_abs_level_eq1).min(4)
        }
    } else {
        let max = if ctx_block_cat == 3 { 3 } else { 4 };
        5 + gt1.min(max)
    };

    inc as u16
}

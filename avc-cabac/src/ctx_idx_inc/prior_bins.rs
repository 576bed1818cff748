//! `ctxIdxInc` derived from prior decoded bin values (9.3.3.1.2).

use super::BinHistory;
use crate::error::{ContextError, Result, bail};

/// `ctxIdxInc` for the bins of `mb_type` and `sub_mb_type` that depend on earlier bins of
/// the same bin string.
pub(crate) fn ctx_idx_inc(ctx_idx_offset: u16, bin_idx: u32, history: &BinHistory) -> Result<u16> {
    let b1 = history.get(1);
    let b3 = history.get(3);

    let inc = match (ctx_idx_offset, bin_idx, b1, b3) {
        (3, 4, _, Some(b3)) => {
            if b3 != 0 {
                5
            } else {
                6
            }
        }
        (3, 5, _, Some(b3)) => {
            if b3 != 0 {
                6
            } else {
                7
            }
        }
        (14, 2, Some(b1), _) => {
            if b1 != 1 {
                2
            } else {
                3
            }
        }
        (17 | 32, 4, _, Some(b3)) => {
            if b3 != 0 {
                2
            } else {
                3
            }
        }
        (27, 2, Some(b1), _) => {
            if b1 != 0 {
                4
            } else {
                5
            }
        }
        (36, 2, Some(b1), _) => {
            if b1 != 0 {
                2
            } else {
                3
            }
        }
        _ => {
            lwarn!(
                "no prior bin rule for ctxIdxOffset {} and binIdx {}",
                ctx_idx_offset,
                bin_idx
            );

            bail!(ContextError::UnreachableState {
                ctx_idx_offset,
                bin_idx,
            })
        }
    };

    Ok(inc)
}

//! `ctxIdxInc` of `ref_idx_lX` and `mvd_lX` (9.3.3.1.1.6, 9.3.3.1.1.7).

use crate::decoder::DecodingVariables;
use crate::macroblock::RefList;
use crate::neighbour::{self, Location, Neighbour, Neighbourhood};
use crate::settings::SliceSettings;

/// The neighbouring partition if it is predicted from `list`, i.e. if it is available, not
/// skipped, not intra and its `predFlagLX` is set.
fn predicted_from<'a>(location: Option<Location<'a>>, list: RefList) -> Option<Location<'a>> {
    let location = location?;
    let mb = location.macroblock;

    if mb.is_skip() || mb.is_intra() {
        return None;
    }

    mb.pred_mode_at(location.x, location.y)
        .is_some_and(|mode| mode.uses_list(list))
        .then_some(location)
}

/// The first bin of `ref_idx_lX`.
pub(crate) fn ref_idx<N: Neighbourhood + ?Sized>(
    nb: &N,
    vars: &DecodingVariables,
    settings: &SliceSettings,
) -> u16 {
    let current_field = nb.current().field;

    let cond_term_flag = |n| {
        let location = neighbour::partition(nb, vars.mb_part_idx, vars.sub_mb_part_idx, n);
        let Some(location) = predicted_from(location, vars.list) else {
            return 0;
        };

        let mb = location.macroblock;
        let blk_idx = neighbour::luma_8x8_blk_idx(location.x, location.y);
        let ref_idx = mb.ref_idx[vars.list.index()][blk_idx];

        // A field neighbour of a frame macroblock refers to twice as many fields.
        let threshold = if settings.mbaff_frame_flag && !current_field && mb.field {
            1
        } else {
            0
        };

        u16::from(ref_idx > threshold)
    };

    cond_term_flag(Neighbour::A) + 2 * cond_term_flag(Neighbour::B)
}

/// The first bin of `mvd_lX[][][compIdx]`, where `ctx_idx_offset` 40 selects the
/// horizontal and 47 the vertical component.
pub(crate) fn mvd<N: Neighbourhood + ?Sized>(
    ctx_idx_offset: u16,
    nb: &N,
    vars: &DecodingVariables,
    settings: &SliceSettings,
) -> u16 {
    let comp = usize::from(ctx_idx_offset == 47);
    let current_field = nb.current().field;

    let abs_mvd_comp = |n| {
        let location = neighbour::partition(nb, vars.mb_part_idx, vars.sub_mb_part_idx, n);
        let Some(location) = predicted_from(location, vars.list) else {
            return 0;
        };

        let mb = location.macroblock;
        let blk_idx = neighbour::luma_4x4_blk_idx(location.x, location.y);
        let abs = mb.mvd[vars.list.index()][blk_idx][comp].unsigned_abs();

        if comp == 1 && settings.mbaff_frame_flag {
            match (current_field, mb.field) {
                (false, true) => return abs * 2,
                (true, false) => return abs / 2,
                _ => {}
            }
        }

        abs
    };

    mvd_ctx_idx_inc(abs_mvd_comp(Neighbour::A), abs_mvd_comp(Neighbour::B))
}

/// Map the sum of the absolute neighbouring motion vector differences to `ctxIdxInc`.
fn mvd_ctx_idx_inc(abs_a: u32, abs_b: u32) -> u16 {
    match abs_a.saturating_add(abs_b) {
        0..=2 => 0,
        3..=32 => 1,
        _ => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::macroblock::{Macroblock, MbType, PredMode, SubMbType};
    use crate::neighbour::MacroblockMap;

    /// A 2x2 picture whose current macroblock (address 3) is a `P_L0_16x16` macroblock with
    /// `left` and `above` as neighbours.
    fn picture(left: Macroblock, above: Macroblock, current_field: bool) -> MacroblockMap {
        let mut map = MacroblockMap::new(2, 2);
        map.start(0, 0).unwrap();
        *map.start(1, 0).unwrap() = above;
        *map.start(2, 0).unwrap() = left;

        let current = map.start(3, 0).unwrap();
        current.mb_type = MbType::P16x16;
        current.field = current_field;

        map
    }

    fn inter(mb_type: MbType, ref_idx: u8, mvd: [i32; 2]) -> Macroblock {
        let mut mb = Macroblock::new(mb_type);
        mb.ref_idx = [[ref_idx; 4]; 2];
        mb.mvd = [[mvd; 16]; 2];

        mb
    }

    fn mbaff() -> SliceSettings {
        SliceSettings {
            mbaff_frame_flag: true,
            ..SliceSettings::default()
        }
    }

    #[test]
    fn mvd_thresholds() {
        assert_eq!(mvd_ctx_idx_inc(0, 0), 0);
        assert_eq!(mvd_ctx_idx_inc(2, 0), 0);
        assert_eq!(mvd_ctx_idx_inc(2, 1), 1);
        assert_eq!(mvd_ctx_idx_inc(16, 16), 1);
        assert_eq!(mvd_ctx_idx_inc(20, 20), 2);
        assert_eq!(mvd_ctx_idx_inc(33, 0), 2);
        assert_eq!(mvd_ctx_idx_inc(u32::MAX, 1), 2);
    }

    #[test]
    fn ref_idx_of_neighbours() {
        let vars = DecodingVariables::default();
        let settings = SliceSettings::default();

        let map = picture(
            inter(MbType::P16x16, 1, [0, 0]),
            inter(MbType::P16x16, 0, [0, 0]),
            false,
        );
        assert_eq!(ref_idx(&map, &vars, &settings), 1);

        let map = picture(
            inter(MbType::P16x16, 2, [0, 0]),
            inter(MbType::P8x16, 3, [0, 0]),
            false,
        );
        assert_eq!(ref_idx(&map, &vars, &settings), 3);

        // Skipped and intra neighbours never count.
        let map = picture(
            inter(MbType::PSkip, 2, [0, 0]),
            inter(MbType::INxN, 2, [0, 0]),
            false,
        );
        assert_eq!(ref_idx(&map, &vars, &settings), 0);
    }

    #[test]
    fn ref_idx_of_the_other_list() {
        let settings = SliceSettings::default();
        let map = picture(
            inter(MbType::B16x16(PredMode::L1), 1, [0, 0]),
            inter(MbType::B16x16(PredMode::Bi), 1, [0, 0]),
            false,
        );

        let l0 = DecodingVariables::default();
        assert_eq!(ref_idx(&map, &l0, &settings), 2);

        let l1 = DecodingVariables {
            list: RefList::L1,
            ..DecodingVariables::default()
        };
        assert_eq!(ref_idx(&map, &l1, &settings), 3);
    }

    #[test]
    fn ref_idx_of_field_neighbours() {
        let vars = DecodingVariables::default();
        let mut left = inter(MbType::P16x16, 1, [0, 0]);
        left.field = true;

        let map = picture(left, inter(MbType::P16x16, 0, [0, 0]), false);
        assert_eq!(ref_idx(&map, &vars, &mbaff()), 0);
        assert_eq!(ref_idx(&map, &vars, &SliceSettings::default()), 1);

        // A field macroblock compares its field neighbours against zero.
        let map = picture(left, inter(MbType::P16x16, 0, [0, 0]), true);
        assert_eq!(ref_idx(&map, &vars, &mbaff()), 1);
    }

    #[test]
    fn direct_neighbours_are_not_predicted_from_a_list() {
        let settings = SliceSettings::default();
        let map = picture(
            inter(MbType::BDirect16x16, 1, [40, 40]),
            inter(MbType::BDirect16x16, 1, [40, 40]),
            false,
        );
        let vars = DecodingVariables::default();

        assert_eq!(ref_idx(&map, &vars, &settings), 0);
        assert_eq!(mvd(40, &map, &vars, &settings), 0);
    }

    #[test]
    fn mvd_of_neighbours() {
        let vars = DecodingVariables::default();
        let settings = SliceSettings::default();

        let map = picture(
            inter(MbType::P16x16, 0, [-20, 7]),
            inter(MbType::P16x16, 0, [15, 1]),
            false,
        );
        assert_eq!(mvd(40, &map, &vars, &settings), 2);
        assert_eq!(mvd(47, &map, &vars, &settings), 1);

        let map = picture(
            inter(MbType::P16x16, 0, [1, 0]),
            inter(MbType::INxN, 0, [30, 0]),
            false,
        );
        assert_eq!(mvd(40, &map, &vars, &settings), 0);
    }

    #[test]
    fn mvd_of_sub_partitions() {
        let settings = SliceSettings::default();
        let left = inter(MbType::P16x16, 0, [0, 0]);
        let mut map = picture(left, inter(MbType::P16x16, 0, [0, 0]), false);
        let current = map.current_mut();
        current.mb_type = MbType::P8x8;
        current.sub_mb_types = [None, None, Some(SubMbType::P8x4), None];
        // Sub-macroblock partition 1 of quadrant 2 starts at (0, 12).
        current.mvd[0][10] = [0, 40];

        let vars = DecodingVariables {
            mb_part_idx: 2,
            sub_mb_part_idx: 1,
            ..DecodingVariables::default()
        };
        // A is block 15 of the left macroblock, B is block 8 of the current macroblock.
        assert_eq!(mvd(47, &map, &vars, &settings), 0);

        map.current_mut().mvd[0][8] = [0, 3];
        assert_eq!(mvd(47, &map, &vars, &settings), 1);
    }

    #[test]
    fn vertical_mvd_of_field_neighbours() {
        let vars = DecodingVariables::default();
        let mut left = inter(MbType::P16x16, 0, [0, 17]);
        left.field = true;
        let above = inter(MbType::P16x16, 0, [0, 1]);

        let map = picture(left, above, false);
        assert_eq!(mvd(47, &map, &vars, &SliceSettings::default()), 1);
        assert_eq!(mvd(47, &map, &vars, &mbaff()), 2);
        // The horizontal component is never scaled.
        assert_eq!(mvd(40, &map, &vars, &mbaff()), 0);

        let left = inter(MbType::P16x16, 0, [0, 5]);
        let map = picture(left, above, true);
        assert_eq!(mvd(47, &map, &vars, &mbaff()), 0);
        assert_eq!(mvd(47, &map, &vars, &SliceSettings::default()), 1);
    }
}

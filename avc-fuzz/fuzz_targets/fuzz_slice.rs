#![no_main]

use avc_cabac::neighbour::MacroblockMap;
use avc_cabac::{
    BitSource, CabacDecoder, DecodingVariables, MbType, ParseError, RefList, ResidualBlockType,
    Result, SliceSettings, SliceType, SyntaxElement as S,
};
use avc_common::bit::BitReader;
use libfuzzer_sys::fuzz_target;

const WIDTH_IN_MBS: usize = 4;
const HEIGHT_IN_MBS: usize = 3;

type Decoder<'a> = CabacDecoder<BitReader<'a>>;

// Layout: slice type, QP, cabac_init_idc, flags, then the slice data.
fuzz_target!(|data: &[u8]| {
    let [slice_type, qp, idc, flags, slice_data @ ..] = data else {
        return;
    };

    let Some(slice_type) = SliceType::from_slice_type(u32::from(*slice_type % 10)) else {
        return;
    };

    let settings = SliceSettings {
        slice_type,
        slice_qp_y: i32::from(*qp % 64) - 6,
        cabac_init_idc: *idc % 3,
        field_pic_flag: flags & 1 != 0,
        constrained_intra_pred_flag: flags & 2 != 0,
        chroma_array_type: (flags >> 2) % 4,
        max_unary_bins: 64,
        ..SliceSettings::default()
    };

    let Ok(mut decoder) = CabacDecoder::new(BitReader::new(slice_data), settings) else {
        return;
    };

    let mut map = MacroblockMap::new(WIDTH_IN_MBS, HEIGHT_IN_MBS);

    for mb_addr in 0..WIDTH_IN_MBS * HEIGHT_IN_MBS {
        map.start(mb_addr, 0);

        match macroblock(&mut decoder, &mut map, &settings) {
            Ok(false) => {}
            Ok(true) | Err(_) => break,
        }
    }
});

/// Walk the syntax of one macroblock. Returns `end_of_slice_flag`.
fn macroblock(
    decoder: &mut Decoder<'_>,
    map: &mut MacroblockMap,
    settings: &SliceSettings,
) -> Result<bool> {
    let vars = DecodingVariables::default();

    if !settings.slice_type.is_intra() && decoder.decode_flag(S::MbSkipFlag, map, &vars)? {
        map.current_mut().mb_skip_flag = true;
        map.current_mut().mb_type = match settings.slice_type {
            SliceType::B => MbType::BSkip,
            _ => MbType::PSkip,
        };

        return decoder.decode_flag(S::EndOfSliceFlag, map, &vars);
    }

    let mb_type = decoder.decode_mb_type(map)?;
    map.current_mut().mb_type = mb_type;

    match mb_type {
        MbType::IPcm => {
            let reader = decoder.source_mut();
            reader.align();

            for _ in 0..384 {
                reader.read_bits(8).ok_or(ParseError::UnexpectedEof)?;
            }

            decoder.reinitialize_engine()?;

            return decoder.decode_flag(S::EndOfSliceFlag, map, &vars);
        }
        MbType::INxN => {
            let transform_size_8x8 = decoder.decode_flag(S::TransformSize8x8Flag, map, &vars)?;
            map.current_mut().transform_size_8x8 = transform_size_8x8;

            for _ in 0..if transform_size_8x8 { 4 } else { 16 } {
                if !decoder.decode_flag(S::PrevIntraPredModeFlag, map, &vars)? {
                    decoder.decode(S::RemIntraPredMode, map, &vars)?;
                }
            }
        }
        MbType::Si | MbType::I16x16 { .. } => {}
        mb_type if mb_type.has_sub_mb_types() => sub_macroblocks(decoder, map)?,
        mb_type => {
            for mb_part_idx in 0..mb_type.num_mb_part() {
                let Some(pred_mode) = mb_type.mb_part_pred_mode(mb_part_idx, false) else {
                    continue;
                };

                for list in [RefList::L0, RefList::L1] {
                    if pred_mode.uses_list(list) {
                        let vars = DecodingVariables {
                            list,
                            mb_part_idx,
                            ..vars
                        };
                        prediction(decoder, map, &vars)?;
                    }
                }
            }
        }
    }

    if mb_type.is_intra() && matches!(settings.chroma_array_type, 1 | 2) {
        let mode = decoder.decode(S::IntraChromaPredMode, map, &vars)?;
        map.current_mut().intra_chroma_pred_mode = mode as u8;
    }

    let is_i16x16 = matches!(mb_type, MbType::I16x16 { .. });

    if !is_i16x16 {
        let cbp = decoder.decode(S::CodedBlockPattern, map, &vars)?;
        map.current_mut().coded_block_pattern = cbp as u8;
    }

    let current = *map.current_mut();

    if current.cbp_luma() != 0 || current.cbp_chroma() != 0 || is_i16x16 {
        let qp_delta = decoder.decode(S::MbQpDelta, map, &vars)?;
        map.current_mut().mb_qp_delta = qp_delta;

        if is_i16x16 {
            residual_block(decoder, map, ResidualBlockType::Intra16x16DcLevel, 0)?;
        }

        let luma = if is_i16x16 {
            ResidualBlockType::Intra16x16AcLevel
        } else {
            ResidualBlockType::LumaLevel4x4
        };

        for blk_idx in 0..16 {
            if current.cbp_luma() & (1 << (blk_idx / 4)) != 0 {
                residual_block(decoder, map, luma, blk_idx)?;
            }
        }
    }

    decoder.decode_flag(S::EndOfSliceFlag, map, &vars)
}

fn sub_macroblocks(decoder: &mut Decoder<'_>, map: &mut MacroblockMap) -> Result<()> {
    for mb_part_idx in 0..4 {
        let sub_mb_type = decoder.decode_sub_mb_type(map)?;
        map.current_mut().sub_mb_types[mb_part_idx] = Some(sub_mb_type);
    }

    for mb_part_idx in 0..4 {
        let Some(sub_mb_type) = map.current_mut().sub_mb_types[mb_part_idx] else {
            continue;
        };

        for list in [RefList::L0, RefList::L1] {
            if !sub_mb_type.pred_mode().uses_list(list) {
                continue;
            }

            for sub_mb_part_idx in 0..sub_mb_type.num_sub_mb_part() {
                let vars = DecodingVariables {
                    list,
                    mb_part_idx,
                    sub_mb_part_idx,
                    ..DecodingVariables::default()
                };
                prediction(decoder, map, &vars)?;
            }
        }
    }

    Ok(())
}

/// `ref_idx` and `mvd` of one (sub-)macroblock partition, stored for the whole quadrant.
fn prediction(
    decoder: &mut Decoder<'_>,
    map: &mut MacroblockMap,
    vars: &DecodingVariables,
) -> Result<()> {
    let list = vars.list as usize;
    let quadrant = vars.mb_part_idx.min(3);

    if vars.sub_mb_part_idx == 0 {
        let ref_idx = decoder.decode(S::RefIdx, map, vars)?;
        map.current_mut().ref_idx[list][quadrant] = ref_idx.clamp(0, 255) as u8;
    }

    let mvd_x = decoder.decode(S::MvdHorizontal, map, vars)?;
    let mvd_y = decoder.decode(S::MvdVertical, map, vars)?;

    for blk_idx in quadrant * 4..quadrant * 4 + 4 {
        map.current_mut().mvd[list][blk_idx] = [mvd_x, mvd_y];
    }

    Ok(())
}

fn residual_block(
    decoder: &mut Decoder<'_>,
    map: &mut MacroblockMap,
    block: ResidualBlockType,
    blk_idx: usize,
) -> Result<()> {
    let mut vars = DecodingVariables {
        residual_block: Some(block),
        blk_idx,
        num_c8x8: 1,
        ..DecodingVariables::default()
    };

    let coded = decoder.decode_flag(S::CodedBlockFlag, map, &vars)?;

    match block {
        ResidualBlockType::Intra16x16DcLevel => map.current_mut().coded_block_flags.dc[0] = coded,
        _ => map.current_mut().coded_block_flags.set_4x4(0, blk_idx, coded),
    }

    if !coded {
        return Ok(());
    }

    let max_num_coeff = block.max_num_coeff(1);
    let mut num_coeff = 0;
    let mut last = false;

    for level_list_idx in 0..max_num_coeff - 1 {
        let vars = DecodingVariables {
            level_list_idx,
            ..vars
        };

        if decoder.decode_flag(S::SignificantCoeffFlag, map, &vars)? {
            num_coeff += 1;
            last = decoder.decode_flag(S::LastSignificantCoeffFlag, map, &vars)?;

            if last {
                break;
            }
        }
    }

    // The final coefficient is significant if no earlier one was the last.
    if !last {
        num_coeff += 1;
    }

    for _ in 0..num_coeff {
        let level = decoder.decode(S::CoeffAbsLevelMinus1, map, &vars)?;
        decoder.decode_flag(S::CoeffSignFlag, map, &vars)?;

        if level == 0 {
            vars.num_decod_abs_level_eq1 += 1;
        } else {
            vars.num_decod_abs_level_gt1 += 1;
        }
    }

    Ok(())
}

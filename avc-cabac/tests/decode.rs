//! Round trips through a test encoder and the decoder.

mod common;

use avc_cabac::neighbour::MacroblockMap;
use avc_cabac::{
    Affix, BinContext, BinHistory, BinarizationError, CabacDecoder, DecodeError, DecodingVariables,
    MbType, ParseError, PredMode, RefList, ResidualBlockType, SliceSettings, SliceType,
    SubMbType, SyntaxElement as S, assign, select_context,
};
use avc_common::bit::BitReader;
use common::{Coder, Encoder, Lcg};

fn settings(slice_type: SliceType, slice_qp_y: i32, cabac_init_idc: u8) -> SliceSettings {
    SliceSettings {
        slice_type,
        slice_qp_y,
        cabac_init_idc,
        ..SliceSettings::default()
    }
}

fn assert_same_state(encoder: &Encoder, decoder: CabacDecoder<BitReader<'_>>) {
    for ctx_idx in 0..1024 {
        assert_eq!(encoder.context(ctx_idx), decoder.context(ctx_idx), "ctxIdx {ctx_idx}");
    }

    // The decoder stops right after `rbsp_stop_one_bit`.
    assert_eq!(decoder.into_source().cur_pos(), encoder.bit_len());
}

/// A P macroblock with one partition and two coded luma blocks.
fn inter_walk<C: Coder>(coder: &mut C, map: &mut MacroblockMap) {
    let vars = DecodingVariables::default();
    map.start(0, 0).unwrap();

    let skipped = coder.code(S::MbSkipFlag, map, &vars, 0, &[0], &[]);
    map.current_mut().mb_skip_flag = skipped != 0;

    let mb_type = coder.code(S::MbType, map, &vars, 0, &[0, 0, 0], &[]);
    map.current_mut().mb_type = MbType::from_syntax(SliceType::P, mb_type as u32).unwrap();

    let ref_idx = coder.code(S::RefIdx, map, &vars, 1, &[1, 0], &[]);
    map.current_mut().ref_idx[0] = [ref_idx as u8; 4];

    let mvd_x = coder.code(S::MvdHorizontal, map, &vars, -20, &[1; 9], &[1, 0, 0, 0, 1, 1, 1]);
    let mvd_y = coder.code(S::MvdVertical, map, &vars, 3, &[1, 1, 1, 0], &[0]);
    map.current_mut().mvd[0] = [[mvd_x, mvd_y]; 16];

    let cbp = coder.code(S::CodedBlockPattern, map, &vars, 0x21, &[1, 0, 0, 0], &[1, 1]);
    map.current_mut().coded_block_pattern = cbp as u8;

    let qp_delta = coder.code(S::MbQpDelta, map, &vars, -3, &[1, 1, 1, 1, 1, 1, 0], &[]);
    map.current_mut().mb_qp_delta = qp_delta;

    // Block 0 holds a single level of -21 at scanning position 2.
    let block = DecodingVariables {
        residual_block: Some(ResidualBlockType::LumaLevel4x4),
        num_c8x8: 1,
        ..vars
    };
    let at = |level_list_idx| DecodingVariables {
        level_list_idx,
        ..block
    };

    let coded = coder.code(S::CodedBlockFlag, map, &block, 1, &[1], &[]);
    map.current_mut().coded_block_flags.set_4x4(0, 0, coded != 0);
    coder.code(S::SignificantCoeffFlag, map, &at(0), 0, &[0], &[]);
    coder.code(S::SignificantCoeffFlag, map, &at(1), 0, &[0], &[]);
    coder.code(S::SignificantCoeffFlag, map, &at(2), 1, &[1], &[]);
    coder.code(S::LastSignificantCoeffFlag, map, &at(2), 1, &[1], &[]);
    coder.code(S::CoeffAbsLevelMinus1, map, &block, 20, &[1; 14], &[1, 1, 0, 1, 1]);
    coder.code(S::CoeffSignFlag, map, &block, 1, &[1], &[]);

    // Block 1 holds the levels 1 and -3, decoded in reverse scanning order.
    let block = DecodingVariables { blk_idx: 1, ..block };
    let at = |level_list_idx| DecodingVariables {
        level_list_idx,
        ..block
    };

    let coded = coder.code(S::CodedBlockFlag, map, &block, 1, &[1], &[]);
    map.current_mut().coded_block_flags.set_4x4(0, 1, coded != 0);
    coder.code(S::SignificantCoeffFlag, map, &at(0), 1, &[1], &[]);
    coder.code(S::LastSignificantCoeffFlag, map, &at(0), 0, &[0], &[]);
    coder.code(S::SignificantCoeffFlag, map, &at(1), 1, &[1], &[]);
    coder.code(S::LastSignificantCoeffFlag, map, &at(1), 1, &[1], &[]);
    coder.code(S::CoeffAbsLevelMinus1, map, &block, 2, &[1, 1, 0], &[]);
    coder.code(S::CoeffSignFlag, map, &block, 1, &[1], &[]);
    let second = DecodingVariables {
        num_decod_abs_level_gt1: 1,
        ..block
    };
    coder.code(S::CoeffAbsLevelMinus1, map, &second, 0, &[0], &[]);
    coder.code(S::CoeffSignFlag, map, &second, 0, &[0], &[]);

    coder.code(S::EndOfSliceFlag, map, &vars, 1, &[1], &[]);
}

#[test]
fn inter_macroblock() {
    for cabac_init_idc in 0..=2 {
        for slice_qp_y in [0, 26, 51] {
            let settings = settings(SliceType::P, slice_qp_y, cabac_init_idc);

            let mut encoder = Encoder::new(settings);
            inter_walk(&mut encoder, &mut MacroblockMap::new(1, 1));
            let data = encoder.finish();

            let mut decoder = CabacDecoder::new(BitReader::new(&data), settings).unwrap();
            inter_walk(&mut decoder, &mut MacroblockMap::new(1, 1));

            assert_same_state(&encoder, decoder);
        }
    }
}

/// A B_8x8 macroblock with four different sub-macroblock types.
fn bi_predictive_walk<C: Coder>(coder: &mut C, map: &mut MacroblockMap) {
    let vars = DecodingVariables::default();
    map.start(0, 0).unwrap();

    coder.code(S::MbSkipFlag, map, &vars, 0, &[0], &[]);
    let mb_type = coder.code(S::MbType, map, &vars, 22, &[1, 1, 1, 1, 1, 1], &[]);
    map.current_mut().mb_type = MbType::from_syntax(SliceType::B, mb_type as u32).unwrap();

    let sub_mb_types: [(i32, &[u8]); 4] = [
        (0, &[0]),
        (3, &[1, 1, 0, 0, 0]),
        (12, &[1, 1, 1, 1, 1]),
        (5, &[1, 1, 0, 1, 0]),
    ];

    for (idx, (value, bins)) in sub_mb_types.into_iter().enumerate() {
        let value = coder.code(S::SubMbType, map, &vars, value, bins, &[]);
        map.current_mut().sub_mb_types[idx] = SubMbType::from_syntax(SliceType::B, value as u32);
    }

    // Quadrant 1 is B_Bi_8x8, so it carries indices and differences for both lists.
    let l0 = DecodingVariables {
        mb_part_idx: 1,
        ..vars
    };
    let l1 = DecodingVariables {
        list: RefList::L1,
        ..l0
    };

    let ref_idx = coder.code(S::RefIdx, map, &l0, 0, &[0], &[]);
    map.current_mut().ref_idx[0][1] = ref_idx as u8;
    let ref_idx = coder.code(S::RefIdx, map, &l1, 2, &[1, 1, 0], &[]);
    map.current_mut().ref_idx[1][1] = ref_idx as u8;

    let mvd_x = coder.code(S::MvdHorizontal, map, &l1, 5, &[1, 1, 1, 1, 1, 0], &[0]);
    let mvd_y = coder.code(S::MvdVertical, map, &l1, -1, &[1, 0], &[1]);
    for blk_idx in 4..8 {
        map.current_mut().mvd[1][blk_idx] = [mvd_x, mvd_y];
    }

    // Quadrant 2 is B_Bi_4x4. Its second sub-partition sees the first one as neighbour A.
    let sub = DecodingVariables {
        mb_part_idx: 2,
        ..vars
    };
    let mvd_x = coder.code(S::MvdHorizontal, map, &sub, 40, &[1; 9], &[1, 1, 0, 0, 0, 1, 1, 1, 0]);
    map.current_mut().mvd[0][8] = [mvd_x, 0];
    let second = DecodingVariables {
        sub_mb_part_idx: 1,
        ..sub
    };
    coder.code(S::MvdHorizontal, map, &second, 0, &[0], &[]);

    coder.code(S::CodedBlockPattern, map, &vars, 0, &[0, 0, 0, 0], &[0]);
    coder.code(S::EndOfSliceFlag, map, &vars, 1, &[1], &[]);
}

#[test]
fn bi_predictive_macroblock() {
    let settings = settings(SliceType::B, 30, 1);

    let mut encoder = Encoder::new(settings);
    bi_predictive_walk(&mut encoder, &mut MacroblockMap::new(1, 1));
    let data = encoder.finish();

    let mut decoder = CabacDecoder::new(BitReader::new(&data), settings).unwrap();
    bi_predictive_walk(&mut decoder, &mut MacroblockMap::new(1, 1));

    assert_same_state(&encoder, decoder);
}

/// Two intra macroblocks side by side, so that the second one sees the first as neighbour A.
fn intra_walk<C: Coder>(coder: &mut C, map: &mut MacroblockMap) {
    let vars = DecodingVariables::default();

    map.start(0, 0).unwrap();
    let mb_type = coder.code(S::MbType, map, &vars, 5, &[1, 0, 0, 1, 0, 0, 0], &[]);
    map.current_mut().mb_type = MbType::from_syntax(SliceType::I, mb_type as u32).unwrap();
    let mode = coder.code(S::IntraChromaPredMode, map, &vars, 2, &[1, 1, 0], &[]);
    map.current_mut().intra_chroma_pred_mode = mode as u8;
    let qp_delta = coder.code(S::MbQpDelta, map, &vars, 1, &[1, 0], &[]);
    map.current_mut().mb_qp_delta = qp_delta;

    let dc = DecodingVariables {
        residual_block: Some(ResidualBlockType::Intra16x16DcLevel),
        ..vars
    };
    let coded = coder.code(S::CodedBlockFlag, map, &dc, 1, &[1], &[]);
    map.current_mut().coded_block_flags.dc[0] = coded != 0;
    let at = |level_list_idx| DecodingVariables {
        level_list_idx,
        ..dc
    };
    coder.code(S::SignificantCoeffFlag, map, &at(0), 0, &[0], &[]);
    coder.code(S::SignificantCoeffFlag, map, &at(1), 1, &[1], &[]);
    coder.code(S::LastSignificantCoeffFlag, map, &at(1), 1, &[1], &[]);
    coder.code(S::CoeffAbsLevelMinus1, map, &dc, 0, &[0], &[]);
    coder.code(S::CoeffSignFlag, map, &dc, 0, &[0], &[]);
    coder.code(S::EndOfSliceFlag, map, &vars, 0, &[0], &[]);

    map.start(1, 0).unwrap();
    let mb_type = coder.code(S::MbType, map, &vars, 0, &[0], &[]);
    map.current_mut().mb_type = MbType::from_syntax(SliceType::I, mb_type as u32).unwrap();
    coder.code(S::TransformSize8x8Flag, map, &vars, 0, &[0], &[]);
    coder.code(S::PrevIntraPredModeFlag, map, &vars, 1, &[1], &[]);
    coder.code(S::PrevIntraPredModeFlag, map, &vars, 0, &[0], &[]);
    coder.code(S::RemIntraPredMode, map, &vars, 5, &[1, 0, 1], &[]);
    coder.code(S::IntraChromaPredMode, map, &vars, 0, &[0], &[]);
    let cbp = coder.code(S::CodedBlockPattern, map, &vars, 0x23, &[1, 1, 0, 0], &[1, 1]);
    map.current_mut().coded_block_pattern = cbp as u8;
    coder.code(S::MbQpDelta, map, &vars, 0, &[0], &[]);
    coder.code(S::EndOfSliceFlag, map, &vars, 1, &[1], &[]);
}

#[test]
fn intra_macroblocks_with_neighbours() {
    let settings = settings(SliceType::I, 22, 0);

    let mut encoder = Encoder::new(settings);
    intra_walk(&mut encoder, &mut MacroblockMap::new(2, 1));
    let data = encoder.finish();

    let mut decoder = CabacDecoder::new(BitReader::new(&data), settings).unwrap();
    intra_walk(&mut decoder, &mut MacroblockMap::new(2, 1));

    // mb_type, intra_chroma_pred_mode and mb_qp_delta of the second macroblock each
    // select the context of a coded left neighbour.
    for ctx_idx in [4, 65, 61] {
        assert!(decoder.context(ctx_idx).is_some(), "ctxIdx {ctx_idx}");
    }
    assert!(decoder.context(62).is_some());

    assert_same_state(&encoder, decoder);
}

#[test]
fn coded_block_flag_of_an_isolated_intra_macroblock() {
    let settings = settings(SliceType::I, 26, 0);
    let mut map = MacroblockMap::new(1, 1);
    map.start(0, 0).unwrap();
    let vars = DecodingVariables::default();
    let dc = DecodingVariables {
        residual_block: Some(ResidualBlockType::Intra16x16DcLevel),
        ..vars
    };

    let mut encoder = Encoder::new(settings);
    encoder.encode(S::MbType, &map, &vars, &[0], &[]);
    map.current_mut().mb_type = MbType::INxN;
    encoder.encode(S::CodedBlockFlag, &map, &dc, &[0], &[]);
    encoder.encode(S::EndOfSliceFlag, &map, &vars, &[1], &[]);
    let data = encoder.finish();

    let mut map = MacroblockMap::new(1, 1);
    map.start(0, 0).unwrap();
    let mut decoder = CabacDecoder::new(BitReader::new(&data), settings).unwrap();
    let mb_type = decoder.decode_mb_type(&map).unwrap();
    assert_eq!(mb_type, MbType::INxN);
    map.current_mut().mb_type = mb_type;

    // Both neighbours are unavailable and the macroblock is intra coded, so both
    // condTermFlags are 1.
    let record = assign(S::CodedBlockFlag, Some(0), true, SliceType::I).unwrap();
    let context = select_context(
        &record,
        Affix::Prefix,
        0,
        &BinHistory::new(),
        &map,
        &dc,
        &settings,
    );
    assert_eq!(context, Ok(BinContext::Decision(85 + 3)));

    assert_eq!(decoder.decode_flag(S::CodedBlockFlag, &map, &dc), Ok(false));
    assert!(decoder.context(88).is_some());
    assert_eq!(decoder.decode_flag(S::EndOfSliceFlag, &map, &vars), Ok(true));
}

#[test]
fn switching_intra_slice() {
    let settings = settings(SliceType::Si, 26, 0);
    let vars = DecodingVariables::default();
    let mut map = MacroblockMap::new(2, 1);

    let mut encoder = Encoder::new(settings);
    map.start(0, 0).unwrap();
    encoder.encode(S::MbType, &map, &vars, &[0], &[]);
    map.current_mut().mb_type = MbType::Si;
    encoder.encode(S::EndOfSliceFlag, &map, &vars, &[0], &[]);
    map.start(1, 0).unwrap();
    encoder.encode(S::MbType, &map, &vars, &[1], &[1, 0, 0, 1, 0, 0, 0]);
    encoder.encode(S::EndOfSliceFlag, &map, &vars, &[1], &[]);
    let data = encoder.finish();

    let mut map = MacroblockMap::new(2, 1);
    let mut decoder = CabacDecoder::new(BitReader::new(&data), settings).unwrap();
    map.start(0, 0).unwrap();
    let mb_type = decoder.decode_mb_type(&map).unwrap();
    assert_eq!(mb_type, MbType::Si);
    map.current_mut().mb_type = mb_type;
    assert_eq!(decoder.decode_flag(S::EndOfSliceFlag, &map, &vars), Ok(false));

    map.start(1, 0).unwrap();
    assert_eq!(
        decoder.decode_mb_type(&map),
        Ok(MbType::I16x16 {
            pred_mode: 0,
            cbp_chroma: 1,
            cbp_luma: 0,
        })
    );
    assert_eq!(decoder.decode_flag(S::EndOfSliceFlag, &map, &vars), Ok(true));

    // The prefix uses ctxIdx 0..=2 and the suffix the I slice contexts from 3.
    assert!(decoder.context(0).is_some());
    assert!(decoder.context(3).is_some());
}

#[test]
fn sub_macroblock_types() {
    let settings = settings(SliceType::P, 26, 2);
    let vars = DecodingVariables::default();
    let mut map = MacroblockMap::new(1, 1);
    map.start(0, 0).unwrap();

    let mut encoder = Encoder::new(settings);
    encoder.encode(S::MbType, &map, &vars, &[0, 0, 1], &[]);
    for bins in [&[1][..], &[0, 0], &[0, 1, 1], &[0, 1, 0]] {
        encoder.encode(S::SubMbType, &map, &vars, bins, &[]);
    }
    encoder.encode(S::EndOfSliceFlag, &map, &vars, &[1], &[]);
    let data = encoder.finish();

    let mut decoder = CabacDecoder::new(BitReader::new(&data), settings).unwrap();
    assert_eq!(decoder.decode_mb_type(&map), Ok(MbType::P8x8));

    let expected = [SubMbType::P8x8, SubMbType::P8x4, SubMbType::P4x8, SubMbType::P4x4];
    for sub_mb_type in expected {
        assert_eq!(decoder.decode_sub_mb_type(&map), Ok(sub_mb_type));
        assert_eq!(sub_mb_type.pred_mode(), PredMode::L0);
    }

    assert_eq!(decoder.decode_flag(S::EndOfSliceFlag, &map, &vars), Ok(true));
}

#[test]
fn pcm_samples_restart_the_engine() {
    let settings = settings(SliceType::I, 26, 0);
    let vars = DecodingVariables::default();
    let samples: Vec<u8> = (0..=255).chain(0..128).collect();

    let mut map = MacroblockMap::new(2, 1);
    let mut encoder = Encoder::new(settings);
    map.start(0, 0).unwrap();
    encoder.encode(S::MbType, &map, &vars, &[1, 1], &[]);
    encoder.write_pcm(&samples);
    encoder.restart();
    map.current_mut().mb_type = MbType::IPcm;
    encoder.encode(S::EndOfSliceFlag, &map, &vars, &[0], &[]);
    map.start(1, 0).unwrap();
    encoder.encode(S::MbType, &map, &vars, &[0], &[]);
    encoder.encode(S::EndOfSliceFlag, &map, &vars, &[1], &[]);
    let data = encoder.finish();

    let mut map = MacroblockMap::new(2, 1);
    let mut decoder = CabacDecoder::new(BitReader::new(&data), settings).unwrap();
    map.start(0, 0).unwrap();
    assert_eq!(decoder.decode_mb_type(&map), Ok(MbType::IPcm));

    let reader = decoder.source_mut();
    reader.align();
    let decoded: Vec<u8> = (0..samples.len()).map(|_| reader.read(8).unwrap() as u8).collect();
    assert_eq!(decoded, samples);
    decoder.reinitialize_engine().unwrap();

    map.current_mut().mb_type = MbType::IPcm;
    assert_eq!(decoder.decode_flag(S::EndOfSliceFlag, &map, &vars), Ok(false));
    map.start(1, 0).unwrap();
    assert_eq!(decoder.decode_mb_type(&map), Ok(MbType::INxN));
    assert_eq!(decoder.decode_flag(S::EndOfSliceFlag, &map, &vars), Ok(true));

    // The left neighbour is not I_NxN, so the second mb_type used ctxIdx 4.
    assert!(decoder.context(4).is_some());
}

#[test]
fn runaway_unary_bin_strings() {
    let settings = SliceSettings {
        max_unary_bins: 8,
        ..settings(SliceType::I, 26, 0)
    };
    let vars = DecodingVariables::default();
    let mut map = MacroblockMap::new(1, 1);
    map.start(0, 0).unwrap();

    let mut encoder = Encoder::new(settings);
    encoder.encode(S::MbQpDelta, &map, &vars, &[1; 12], &[]);
    encoder.encode_terminate(1);
    let data = encoder.finish();

    let mut decoder = CabacDecoder::new(BitReader::new(&data), settings).unwrap();
    assert_eq!(
        decoder.decode(S::MbQpDelta, &map, &vars),
        Err(DecodeError::Binarization(BinarizationError::UnaryOverflow))
    );
}

#[derive(Clone, Copy)]
enum Op {
    Decision(u16, u8),
    Bypass(u8),
    Terminate,
}

fn random_ops(seed: u64, len: usize) -> Vec<Op> {
    const CONTEXTS: [u16; 10] = [0, 14, 40, 60, 105, 227, 338, 402, 460, 1012];
    let mut rng = Lcg(seed);

    (0..len)
        .map(|_| match rng.below(20) {
            0..=14 => {
                let ctx_idx = CONTEXTS[rng.below(CONTEXTS.len() as u32) as usize];
                // Skewed towards 0, so that the contexts adapt.
                Op::Decision(ctx_idx, u8::from(rng.below(8) == 0))
            }
            15..=18 => Op::Bypass(rng.below(2) as u8),
            _ => Op::Terminate,
        })
        .collect()
}

fn encode_ops(settings: SliceSettings, ops: &[Op]) -> Encoder {
    let mut encoder = Encoder::new(settings);

    for op in ops {
        match *op {
            Op::Decision(ctx_idx, bin) => encoder.encode_decision(ctx_idx, bin),
            Op::Bypass(bin) => encoder.encode_bypass(bin),
            Op::Terminate => encoder.encode_terminate(0),
        }
    }

    encoder.encode_terminate(1);

    encoder
}

#[test]
fn engine_round_trip() {
    for seed in 0..8 {
        let settings = settings(SliceType::P, 10 + 4 * seed as i32, (seed % 3) as u8);
        let ops = random_ops(seed, 4000);
        let encoder = encode_ops(settings, &ops);
        let data = encoder.finish();

        let mut decoder = CabacDecoder::new(BitReader::new(&data), settings).unwrap();

        for op in &ops {
            match *op {
                Op::Decision(ctx_idx, bin) => assert_eq!(decoder.decode_decision(ctx_idx), Ok(bin)),
                Op::Bypass(bin) => assert_eq!(decoder.decode_bypass(), Ok(bin)),
                Op::Terminate => assert_eq!(decoder.decode_terminate(), Ok(0)),
            }
        }

        assert_eq!(decoder.decode_terminate(), Ok(1));
        assert_same_state(&encoder, decoder);
    }
}

#[test]
fn truncated_slice_data() {
    let settings = settings(SliceType::P, 26, 0);
    let ops = random_ops(99, 2000);
    let data = encode_ops(settings, &ops).finish();
    let truncated = &data[..data.len() / 2];

    let mut decoder = CabacDecoder::new(BitReader::new(truncated), settings).unwrap();
    let error = ops.iter().find_map(|op| {
        let result = match *op {
            Op::Decision(ctx_idx, _) => decoder.decode_decision(ctx_idx),
            Op::Bypass(_) => decoder.decode_bypass(),
            Op::Terminate => decoder.decode_terminate(),
        };

        result.err()
    });

    assert_eq!(error, Some(DecodeError::Parse(ParseError::UnexpectedEof)));
}

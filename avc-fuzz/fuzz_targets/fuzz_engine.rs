#![no_main]

use avc_cabac::{CabacDecoder, SliceSettings, SliceType};
use avc_common::bit::BitReader;
use libfuzzer_sys::fuzz_target;

// Layout: slice type, QP, cabac_init_idc, then the arithmetic codeword.
fuzz_target!(|data: &[u8]| {
    let [slice_type, qp, idc, codeword @ ..] = data else {
        return;
    };

    let Some(slice_type) = SliceType::from_slice_type(u32::from(*slice_type % 10)) else {
        return;
    };

    let settings = SliceSettings {
        slice_type,
        slice_qp_y: i32::from(*qp) - 128,
        cabac_init_idc: *idc,
        ..SliceSettings::default()
    };

    let Ok(mut decoder) = CabacDecoder::new(BitReader::new(codeword), settings) else {
        return;
    };

    let mut ctx_idx = 0_u16;

    loop {
        let result = match ctx_idx % 7 {
            0 => decoder.decode_bypass(),
            1 => decoder.decode_terminate(),
            _ => decoder.decode_decision(ctx_idx),
        };

        match result {
            Ok(bin) => ctx_idx = ctx_idx.wrapping_mul(31).wrapping_add(u16::from(bin) + 1) % 1100,
            Err(_) => break,
        }
    }
});

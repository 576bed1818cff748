//! A CABAC arithmetic encoder (9.3.4.2) for building test streams.

#![allow(dead_code)]

use avc_cabac::neighbour::Neighbourhood;
use avc_cabac::{
    Affix, BinContext, BinHistory, BitSource, CabacDecoder, ContextStore, ContextVariable,
    DecodingVariables, ResidualBlockType, SliceSettings, SyntaxElement, assign, range_tab_lps,
    select_context,
};
use avc_common::bit::BitWriter;

/// Encodes bins into an arithmetic codeword.
pub struct Encoder {
    low: u32,
    range: u32,
    first_bit: bool,
    bits_outstanding: u32,
    bits: Vec<u32>,
    contexts: ContextStore,
}

impl Encoder {
    pub fn new(settings: SliceSettings) -> Self {
        Self {
            low: 0,
            range: 510,
            first_bit: true,
            bits_outstanding: 0,
            bits: Vec::new(),
            contexts: ContextStore::new(settings),
        }
    }

    /// `InitEncoder`, keeping the context variables.
    pub fn restart(&mut self) {
        self.low = 0;
        self.range = 510;
        self.first_bit = true;
        self.bits_outstanding = 0;
    }

    pub fn settings(&self) -> SliceSettings {
        *self.contexts.settings()
    }

    pub fn context(&self, ctx_idx: u16) -> Option<ContextVariable> {
        self.contexts.get(ctx_idx)
    }

    /// `EncodeDecision`.
    pub fn encode_decision(&mut self, ctx_idx: u16, bin: u8) {
        let context = self.contexts.get_mut(ctx_idx).unwrap();
        let q_cod_i_range_idx = ((self.range >> 6) & 3) as u8;
        let range_lps = range_tab_lps(context.p_state_idx(), q_cod_i_range_idx).unwrap();
        let range_lps = u32::from(range_lps);

        self.range -= range_lps;

        if bin != context.val_mps() {
            self.low += self.range;
            self.range = range_lps;
        }

        context.transition(bin);
        self.renormalize();
    }

    /// `EncodeBypass`.
    pub fn encode_bypass(&mut self, bin: u8) {
        self.low <<= 1;

        if bin != 0 {
            self.low += self.range;
        }

        if self.low >= 1024 {
            self.put_bit(1);
            self.low -= 1024;
        } else if self.low < 512 {
            self.put_bit(0);
        } else {
            self.low -= 512;
            self.bits_outstanding += 1;
        }
    }

    /// `EncodeTerminate`, followed by `EncodeFlush` if `bin` is 1.
    pub fn encode_terminate(&mut self, bin: u8) {
        self.range -= 2;

        if bin != 0 {
            self.low += self.range;
            self.flush();
        } else {
            self.renormalize();
        }
    }

    /// Encode the bins of one syntax element, selecting contexts the way the decoder does.
    pub fn encode<N: Neighbourhood + ?Sized>(
        &mut self,
        element: SyntaxElement,
        nb: &N,
        vars: &DecodingVariables,
        prefix: &[u8],
        suffix: &[u8],
    ) {
        let settings = self.settings();
        let ctx_block_cat = vars.residual_block.map(ResidualBlockType::ctx_block_cat);
        let is_frame =
            !settings.field_pic_flag && !(settings.mbaff_frame_flag && nb.current().field);
        let record = assign(element, ctx_block_cat, is_frame, settings.slice_type).unwrap();

        for (affix, bins) in [(Affix::Prefix, prefix), (Affix::Suffix, suffix)] {
            let mut history = BinHistory::new();

            for (bin_idx, bin) in bins.iter().copied().enumerate() {
                let context =
                    select_context(&record, affix, bin_idx as u32, &history, nb, vars, &settings)
                        .unwrap();

                match context {
                    BinContext::Decision(ctx_idx) => self.encode_decision(ctx_idx, bin),
                    BinContext::Bypass => self.encode_bypass(bin),
                    BinContext::Terminate => self.encode_terminate(bin),
                }

                history.push(bin);
            }
        }
    }

    /// Append raw bytes after a flushed codeword, as done for `I_PCM` samples.
    pub fn write_pcm(&mut self, samples: &[u8]) {
        while self.bits.len() % 8 != 0 {
            self.bits.push(0);
        }

        for byte in samples {
            self.bits.extend((0..8).rev().map(|shift| u32::from((byte >> shift) & 1)));
        }
    }

    /// Pack the written bits into bytes, padding the last byte with zeros.
    pub fn finish(&self) -> Vec<u8> {
        let mut data = vec![0; self.bits.len().div_ceil(8)];
        let mut writer = BitWriter::new(&mut data, 1).unwrap();
        writer.write_bits(self.bits.iter().copied()).unwrap();

        data
    }

    /// The number of bits written so far.
    pub fn bit_len(&self) -> usize {
        self.bits.len()
    }

    fn flush(&mut self) {
        self.range = 2;
        self.renormalize();
        self.put_bit((self.low >> 9) & 1);
        // The final bit is `rbsp_stop_one_bit` when this ends a slice.
        self.bits.push((self.low >> 8) & 1);
        self.bits.push(1);
    }

    fn renormalize(&mut self) {
        while self.range < 256 {
            if self.low < 256 {
                self.put_bit(0);
            } else if self.low >= 512 {
                self.low -= 512;
                self.put_bit(1);
            } else {
                self.low -= 256;
                self.bits_outstanding += 1;
            }

            self.range <<= 1;
            self.low <<= 1;
        }
    }

    fn put_bit(&mut self, bit: u32) {
        if self.first_bit {
            self.first_bit = false;
        } else {
            self.bits.push(bit);
        }

        while self.bits_outstanding > 0 {
            self.bits.push(1 - bit);
            self.bits_outstanding -= 1;
        }
    }
}

/// One side of a round trip: the encoder writes the given bins, the decoder decodes the
/// element and checks that it yields `value`.
pub trait Coder {
    fn code<N: Neighbourhood + ?Sized>(
        &mut self,
        element: SyntaxElement,
        nb: &N,
        vars: &DecodingVariables,
        value: i32,
        prefix: &[u8],
        suffix: &[u8],
    ) -> i32;
}

impl Coder for Encoder {
    fn code<N: Neighbourhood + ?Sized>(
        &mut self,
        element: SyntaxElement,
        nb: &N,
        vars: &DecodingVariables,
        value: i32,
        prefix: &[u8],
        suffix: &[u8],
    ) -> i32 {
        self.encode(element, nb, vars, prefix, suffix);

        value
    }
}

impl<S: BitSource> Coder for CabacDecoder<S> {
    fn code<N: Neighbourhood + ?Sized>(
        &mut self,
        element: SyntaxElement,
        nb: &N,
        vars: &DecodingVariables,
        value: i32,
        _prefix: &[u8],
        _suffix: &[u8],
    ) -> i32 {
        let decoded = self.decode(element, nb, vars).unwrap();
        assert_eq!(decoded, value, "{element:?}");

        decoded
    }
}

/// A deterministic pseudo-random sequence for stress tests.
pub struct Lcg(pub u64);

impl Lcg {
    pub fn next_u32(&mut self) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);

        (self.0 >> 33) as u32
    }

    pub fn below(&mut self, bound: u32) -> u32 {
        self.next_u32() % bound
    }
}

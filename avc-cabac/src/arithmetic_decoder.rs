//! The arithmetic decoding engine (9.3.3.2).
//!
//! The engine holds the two registers `codIRange` and `codIOffset`. Every decoded bin
//! narrows `codIRange` to the sub-interval of the decoded symbol, and renormalization
//! keeps it in `[256, 510]` by shifting in one bit of the slice data at a time.

use crate::context::ContextVariable;
use crate::error::{ParseError, Result, bail};
use crate::source::BitSource;

/// The arithmetic decoding engine.
pub(crate) struct ArithmeticDecoder<S> {
    /// The source of the coded bits.
    source: S,
    /// `codIRange`, the width of the current interval.
    range: u32,
    /// `codIOffset`, the position of the coded value inside the current interval.
    offset: u32,
    /// Whether `DecodeTerminate` returned 1 since the last initialization.
    finished: bool,
}

impl<S: BitSource> ArithmeticDecoder<S> {
    pub(crate) fn new(source: S) -> Result<Self> {
        let mut decoder = Self {
            source,
            range: 0,
            offset: 0,
            finished: false,
        };

        decoder.initialize()?;

        Ok(decoder)
    }

    /// The initialization process of the decoding engine (9.3.1.2).
    ///
    /// Invoked at the start of the slice data and again after the samples of an
    /// I_PCM macroblock.
    pub(crate) fn initialize(&mut self) -> Result<()> {
        // "codIRange is set equal to 510 and codIOffset is set equal to the value
        // returned from read_bits( 9 )."
        self.range = 510;
        self.finished = false;
        self.offset = self
            .source
            .read_bits(9)
            .ok_or(ParseError::UnexpectedEof)?;

        // "The bitstream shall not contain data that result in a value of codIOffset
        // being equal to 510 or 511."
        if self.offset >= 510 {
            lwarn!("codIOffset {} is not allowed at initialization", self.offset);
            bail!(ParseError::InvalidOffset);
        }

        ltrace!("initialized engine with codIOffset {}", self.offset);

        Ok(())
    }

    /// `DecodeDecision` (9.3.3.2.1, Figure 9-3).
    #[inline(always)]
    pub(crate) fn decode_decision(&mut self, context: &mut ContextVariable) -> Result<u8> {
        self.check_running()?;

        // "qCodIRangeIdx = ( codIRange >> 6 ) & 3"
        let q_cod_i_range_idx = (self.range >> 6) & 3;
        let entry = &STATE_TABLE[context.p_state_idx as usize];
        let range_lps = entry.range_lps[q_cod_i_range_idx as usize] as u32;

        self.range -= range_lps;

        let bin = if self.offset >= self.range {
            // LPS path.
            self.offset -= self.range;
            self.range = range_lps;

            1 - context.val_mps
        } else {
            context.val_mps
        };

        context.transition(bin);
        self.renormalize()?;

        Ok(bin)
    }

    /// `DecodeBypass` (9.3.3.2.3, Figure 9-5).
    #[inline(always)]
    pub(crate) fn decode_bypass(&mut self) -> Result<u8> {
        self.check_running()?;

        self.offset = (self.offset << 1) | self.read_bit()?;

        if self.offset >= self.range {
            self.offset -= self.range;

            Ok(1)
        } else {
            Ok(0)
        }
    }

    /// `DecodeTerminate` (9.3.3.2.2.3, Figure 9-6).
    ///
    /// When this returns 1, the last bit that was read is the final bit of the
    /// arithmetic codeword. For `end_of_slice_flag` that bit is `rbsp_stop_one_bit`.
    pub(crate) fn decode_terminate(&mut self) -> Result<u8> {
        self.check_running()?;
        self.range -= 2;

        if self.offset >= self.range {
            // "no renormalization is carried out, and the CABAC parsing process is finished"
            self.finished = true;

            Ok(1)
        } else {
            self.renormalize()?;

            Ok(0)
        }
    }

    /// `RenormD` (9.3.3.2.2, Figure 9-4).
    #[inline(always)]
    fn renormalize(&mut self) -> Result<()> {
        while self.range < 256 {
            self.range <<= 1;
            self.offset = (self.offset << 1) | self.read_bit()?;
        }

        Ok(())
    }

    /// The registers are meaningless once the codeword has been terminated.
    #[inline(always)]
    fn check_running(&self) -> Result<()> {
        if self.finished {
            bail!(ParseError::Terminated);
        }

        Ok(())
    }

    #[inline(always)]
    fn read_bit(&mut self) -> Result<u32> {
        Ok(self.source.read_bit().ok_or(ParseError::UnexpectedEof)?)
    }

    pub(crate) fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub(crate) fn into_source(self) -> S {
        self.source
    }

    #[cfg(test)]
    pub(crate) fn registers(&self) -> (u32, u32) {
        (self.range, self.offset)
    }
}

/// Apply the state transition of 9.3.3.2.1.1 after `bin` was decoded.
#[inline(always)]
pub(crate) fn transition(context: &mut ContextVariable, bin: u8) {
    let entry = &STATE_TABLE[context.p_state_idx as usize];

    if bin == context.val_mps {
        context.p_state_idx = entry.next_mps;
    } else {
        if context.p_state_idx == 0 {
            context.val_mps = 1 - context.val_mps;
        }

        context.p_state_idx = entry.next_lps;
    }
}

/// Return `rangeTabLPS[pStateIdx][qCodIRangeIdx]` (Table 9-44).
///
/// Returns `None` if `p_state_idx` > 63 or `q_cod_i_range_idx` > 3.
pub fn range_tab_lps(p_state_idx: u8, q_cod_i_range_idx: u8) -> Option<u8> {
    STATE_TABLE
        .get(p_state_idx as usize)?
        .range_lps
        .get(q_cod_i_range_idx as usize)
        .copied()
}

#[derive(Debug, Clone, Copy)]
struct StateEntry {
    range_lps: [u8; 4],
    next_mps: u8,
    next_lps: u8,
}

macro_rules! state {
    ($($range_lps:expr, $next_mps:expr, $next_lps:expr),+ $(,)?) => {
        [
            $(
                StateEntry {
                    range_lps: $range_lps,
                    next_mps: $next_mps,
                    next_lps: $next_lps,
                }
            ),+
        ]
    };
}

/// `rangeTabLPS` (Table 9-44) together with `transIdxMPS` and `transIdxLPS` (Table 9-45),
/// indexed by `pStateIdx`.
#[rustfmt::skip]
static STATE_TABLE: [StateEntry; 64] = state!(
    /*  0 */ [128, 176, 208, 240],  1,  0,
    /*  1 */ [128, 167, 197, 227],  2,  0,
    /*  2 */ [128, 158, 187, 216],  3,  1,
    /*  3 */ [123, 150, 178, 205],  4,  2,
    /*  4 */ [116, 142, 169, 195],  5,  2,
    /*  5 */ [111, 135, 160, 185],  6,  4,
    /*  6 */ [105, 128, 152, 175],  7,  4,
    /*  7 */ [100, 122, 144, 166],  8,  5,
    /*  8 */ [ 95, 116, 137, 158],  9,  6,
    /*  9 */ [ 90, 110, 130, 150], 10,  7,
    /* 10 */ [ 85, 104, 123, 142], 11,  8,
    /* 11 */ [ 81,  99, 117, 135], 12,  9,
    /* 12 */ [ 77,  94, 111, 128], 13,  9,
    /* 13 */ [ 73,  89, 105, 122], 14, 11,
    /* 14 */ [ 69,  85, 100, 116], 15, 11,
    /* 15 */ [ 66,  80,  95, 110], 16, 12,
    /* 16 */ [ 62,  76,  90, 104], 17, 13,
    /* 17 */ [ 59,  72,  86,  99], 18, 13,
    /* 18 */ [ 56,  69,  81,  94], 19, 15,
    /* 19 */ [ 53,  65,  77,  89], 20, 15,
    /* 20 */ [ 51,  62,  73,  85], 21, 16,
    /* 21 */ [ 48,  59,  69,  80], 22, 16,
    /* 22 */ [ 46,  56,  66,  76], 23, 18,
    /* 23 */ [ 43,  53,  63,  72], 24, 18,
    /* 24 */ [ 41,  50,  59,  69], 25, 19,
    /* 25 */ [ 39,  48,  56,  65], 26, 19,
    /* 26 */ [ 37,  45,  54,  62], 27, 21,
    /* 27 */ [ 35,  43,  51,  59], 28, 21,
    /* 28 */ [ 33,  41,  48,  56], 29, 22,
    /* 29 */ [ 32,  39,  46,  53], 30, 22,
    /* 30 */ [ 30,  37,  43,  50], 31, 23,
    /* 31 */ [ 29,  35,  41,  48], 32, 24,
    /* 32 */ [ 27,  33,  39,  45], 33, 24,
    /* 33 */ [ 26,  31,  37,  43], 34, 25,
    /* 34 */ [ 24,  30,  35,  41], 35, 26,
    /* 35 */ [ 23,  28,  33,  39], 36, 26,
    /* 36 */ [ 22,  27,  32,  37], 37, 27,
    /* 37 */ [ 21,  26,  30,  35], 38, 27,
    /* 38 */ [ 20,  24,  29,  33], 39, 28,
    /* 39 */ [ 19,  23,  27,  31], 40, 29,
    /* 40 */ [ 18,  22,  26,  30], 41, 29,
    /* 41 */ [ 17,  21,  25,  28], 42, 30,
    /* 42 */ [ 16,  20,  23,  27], 43, 30,
    /* 43 */ [ 15,  19,  22,  25], 44, 30,
    /* 44 */ [ 14,  18,  21,  24], 45, 31,
    /* 45 */ [ 14,  17,  20,  23], 46, 32,
    /* 46 */ [ 13,  16,  19,  22], 47, 32,
    /* 47 */ [ 12,  15,  18,  21], 48, 33,
    /* 48 */ [ 12,  14,  17,  20], 49, 33,
    /* 49 */ [ 11,  14,  16,  19], 50, 33,
    /* 50 */ [ 11,  13,  15,  18], 51, 34,
    /* 51 */ [ 10,  12,  15,  17], 52, 34,
    /* 52 */ [ 10,  12,  14,  16], 53, 35,
    /* 53 */ [  9,  11,  13,  15], 54, 35,
    /* 54 */ [  9,  11,  12,  14], 55, 35,
    /* 55 */ [  8,  10,  12,  14], 56, 36,
    /* 56 */ [  8,   9,  11,  13], 57, 36,
    /* 57 */ [  7,   9,  11,  12], 58, 36,
    /* 58 */ [  7,   9,  10,  12], 59, 37,
    /* 59 */ [  7,   8,  10,  11], 60, 37,
    /* 60 */ [  6,   8,   9,  11], 61, 37,
    /* 61 */ [  6,   7,   9,  10], 62, 38,
    /* 62 */ [  6,   7,   8,   9], 62, 38,
    /* 63 */ [  2,   2,   2,   2], 63, 63,
);

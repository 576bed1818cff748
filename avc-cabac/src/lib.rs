/*!
A memory-safe, pure-Rust CABAC entropy decoder for H.264/AVC slice data.

`avc-cabac` implements the context-adaptive binary arithmetic decoding process of
ITU-T H.264 (clause 9.3). Given the slice data of a slice that uses CABAC, it decodes
one syntax element at a time: it selects a context for every bin, runs the arithmetic
decoding engine and turns the resulting bin string back into the value of the element.

The crate does not parse NAL units, slice headers or the macroblock layer itself.
Callers walk the macroblock syntax, ask the decoder for the next element and record the
decoded values in a [`Neighbourhood`](neighbour::Neighbourhood), which is what context
selection looks at. [`MacroblockMap`](neighbour::MacroblockMap) is a ready-made
neighbourhood for pictures without macroblock-adaptive frame/field coding.

# Example
```rust,no_run
use avc_cabac::neighbour::MacroblockMap;
use avc_cabac::{CabacDecoder, DecodingVariables, SliceSettings, SliceType, SyntaxElement};
use avc_common::bit::BitReader;

let slice_data = std::fs::read("slice.bin").unwrap();
let settings = SliceSettings {
    slice_type: SliceType::P,
    slice_qp_y: 28,
    ..SliceSettings::default()
};

let mut decoder = CabacDecoder::new(BitReader::new(&slice_data), settings).unwrap();
let mut map = MacroblockMap::new(20, 15);
let vars = DecodingVariables::default();

map.start(0, 0).unwrap();
let skipped = decoder
    .decode_flag(SyntaxElement::MbSkipFlag, &map, &vars)
    .unwrap();

if !skipped {
    let mb_type = decoder.decode_mb_type(&map).unwrap();
    map.current_mut().mb_type = mb_type;
}
```

# Cargo features
- `std`: enabled by default. Without it the crate is `no_std` and only needs `alloc`.
- `logging`: report decoded bins and elements through the `log` crate.

# Safety
This crate forbids unsafe code via a crate-level attribute.
*/

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

#[macro_use]
mod log;

mod arithmetic_decoder;
mod assignment;
mod binarization;
mod context;
mod context_init_table;
mod ctx_idx_inc;
mod decoder;
mod error;
mod macroblock;
pub mod neighbour;
mod settings;
mod source;
mod syntax;

pub use arithmetic_decoder::range_tab_lps;
pub use assignment::{
    Affix, Binarization, CODED_BLOCK_FLAG_CAT_OFFSETS, COEFF_ABS_LEVEL_CAT_OFFSETS,
    ContextIndexRecord, ContextIndexValue, NEIGHBOUR_DERIVED_OFFSETS, ResidualBlockType,
    SIGNIFICANT_COEFF_CAT_OFFSETS, assign, ctx_block_cat_offset, is_neighbour_derived,
};
pub use context::{CTX_IDX_TERMINATE, ContextStore, ContextVariable, NUM_CONTEXTS};
pub use ctx_idx_inc::{BinContext, BinHistory, select_context};
pub use decoder::{CabacDecoder, DecodingVariables};
pub use error::{AssignmentError, BinarizationError, ContextError, DecodeError, ParseError, Result};
pub use macroblock::{CodedBlockFlags, Macroblock, MbType, PredMode, RefList, SubMbType};
pub use settings::{SliceSettings, SliceType};
pub use source::BitSource;
pub use syntax::SyntaxElement;

//! Error types for CABAC decoding.

use core::fmt;

use crate::settings::SliceType;
use crate::syntax::SyntaxElement;

/// The main error type for CABAC decoding operations.
///
/// Every error is fatal for the slice that is being decoded, since an arithmetic-coded
/// stream offers no point at which decoding could resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Errors related to reading the coded bits.
    Parse(ParseError),
    /// Errors related to context variables.
    Context(ContextError),
    /// Errors related to the context index assignment.
    Assignment(AssignmentError),
    /// Errors related to binarizations.
    Binarization(BinarizationError),
}

/// Errors related to reading the coded bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Unexpected end of input.
    UnexpectedEof,
    /// The first nine bits of the slice data yield a `codIOffset` of 510 or 511.
    InvalidOffset,
    /// A bin was requested after `DecodeTerminate` returned 1 and before the engine was
    /// initialized again.
    Terminated,
}

/// Errors related to context variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextError {
    /// The initialization tables have no `(m, n)` pair for the requested context.
    InvalidInitializationEntry {
        /// The context index.
        ctx_idx: u16,
        /// The `cabac_init_idc` in effect, or `None` for I and SI slices.
        cabac_init_idc: Option<u8>,
    },
    /// A context variable that is already in use was initialized again.
    Reinitialization {
        /// The context index.
        ctx_idx: u16,
    },
    /// A prior-bin dependent `ctxIdxInc` was requested for a bin without a rule.
    UnreachableState {
        /// The context index offset.
        ctx_idx_offset: u16,
        /// The index of the bin.
        bin_idx: u32,
    },
}

/// Errors related to the context index assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentError {
    /// The syntax element cannot appear with the given slice type or block category.
    UnsupportedSyntaxElement {
        /// The syntax element.
        element: SyntaxElement,
        /// The slice type.
        slice_type: SliceType,
        /// The block category, if the element has one.
        ctx_block_cat: Option<u8>,
    },
}

/// Errors related to binarizations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinarizationError {
    /// A unary bin string exceeded the configured maximum length.
    UnaryOverflow,
    /// The Exp-Golomb suffix exponent exceeded 16 bits.
    ExpGolombOverflow,
    /// The bin string does not form a valid codeword.
    InvalidCodeword,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Context(e) => write!(f, "{e}"),
            Self::Assignment(e) => write!(f, "{e}"),
            Self::Binarization(e) => write!(f, "{e}"),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof => write!(f, "unexpected end of input"),
            Self::InvalidOffset => write!(f, "invalid initial arithmetic decoder offset"),
            Self::Terminated => write!(f, "arithmetic codeword has already been terminated"),
        }
    }
}

impl fmt::Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInitializationEntry {
                ctx_idx,
                cabac_init_idc: Some(idc),
            } => write!(
                f,
                "no initialization values for ctxIdx {ctx_idx} with cabac_init_idc {idc}"
            ),
            Self::InvalidInitializationEntry {
                ctx_idx,
                cabac_init_idc: None,
            } => write!(f, "no initialization values for ctxIdx {ctx_idx} in I slices"),
            Self::Reinitialization { ctx_idx } => {
                write!(f, "context variable {ctx_idx} is already initialized")
            }
            Self::UnreachableState {
                ctx_idx_offset,
                bin_idx,
            } => write!(
                f,
                "no ctxIdxInc rule for ctxIdxOffset {ctx_idx_offset} and binIdx {bin_idx}"
            ),
        }
    }
}

impl fmt::Display for AssignmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedSyntaxElement {
                element,
                slice_type,
                ctx_block_cat: Some(cat),
            } => write!(
                f,
                "{element:?} is not supported in {slice_type:?} slices with ctxBlockCat {cat}"
            ),
            Self::UnsupportedSyntaxElement {
                element,
                slice_type,
                ctx_block_cat: None,
            } => write!(f, "{element:?} is not supported in {slice_type:?} slices"),
        }
    }
}

impl fmt::Display for BinarizationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnaryOverflow => write!(f, "unary bin string is too long"),
            Self::ExpGolombOverflow => write!(f, "Exp-Golomb suffix is too long"),
            Self::InvalidCodeword => write!(f, "invalid codeword"),
        }
    }
}

impl core::error::Error for DecodeError {}
impl core::error::Error for ParseError {}
impl core::error::Error for ContextError {}
impl core::error::Error for AssignmentError {}
impl core::error::Error for BinarizationError {}

impl From<ParseError> for DecodeError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<ContextError> for DecodeError {
    fn from(e: ContextError) -> Self {
        Self::Context(e)
    }
}

impl From<AssignmentError> for DecodeError {
    fn from(e: AssignmentError) -> Self {
        Self::Assignment(e)
    }
}

impl From<BinarizationError> for DecodeError {
    fn from(e: BinarizationError) -> Self {
        Self::Binarization(e)
    }
}

/// Result type for CABAC decoding operations.
pub type Result<T> = core::result::Result<T, DecodeError>;

macro_rules! bail {
    ($err:expr) => {
        return Err($err.into())
    };
}

macro_rules! err {
    ($err:expr) => {
        Err($err.into())
    };
}

pub(crate) use bail;
pub(crate) use err;

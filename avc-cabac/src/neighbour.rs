//! Access to neighbouring macroblocks, blocks and partitions (6.4.11, 6.4.12).

use alloc::vec;
use alloc::vec::Vec;

use crate::macroblock::Macroblock;

/// Which neighbour to derive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Neighbour {
    /// The neighbour to the left.
    A,
    /// The neighbour above.
    B,
}

impl Neighbour {
    /// The luma location offset `(xD, yD)` of Table 6-2.
    fn offset(self) -> (i32, i32) {
        match self {
            Self::A => (-1, 0),
            Self::B => (0, -1),
        }
    }
}

/// A sample location resolved to the macroblock that contains it.
#[derive(Debug, Clone, Copy)]
pub struct Location<'a> {
    /// The macroblock `mbAddrN`.
    pub macroblock: &'a Macroblock,
    /// Whether `mbAddrN` is the macroblock that is currently being decoded.
    pub is_current: bool,
    /// `xW`, relative to the upper-left corner of `mbAddrN`.
    pub x: i32,
    /// `yW`, relative to the upper-left corner of `mbAddrN`.
    pub y: i32,
}

/// A neighbouring block resolved to the macroblock that contains it.
#[derive(Debug, Clone, Copy)]
pub struct BlockNeighbour<'a> {
    /// The macroblock `mbAddrN`.
    pub macroblock: &'a Macroblock,
    /// Whether `mbAddrN` is the macroblock that is currently being decoded.
    pub is_current: bool,
    /// The index of the block inside `mbAddrN`.
    pub blk_idx: usize,
}

impl<'a> BlockNeighbour<'a> {
    fn new(location: Location<'a>, blk_idx: usize) -> Self {
        Self {
            macroblock: location.macroblock,
            is_current: location.is_current,
            blk_idx,
        }
    }
}

/// The macroblock state that CABAC context selection may look at.
///
/// Implementations own the decoded macroblocks of the current picture together with the
/// macroblock that is currently being decoded.
pub trait Neighbourhood {
    /// The macroblock that is currently being decoded.
    fn current(&self) -> &Macroblock;

    /// Resolve a location relative to the upper-left corner of the current macroblock
    /// (6.4.12).
    ///
    /// `max_w` and `max_h` are 16 for luma locations and `MbWidthC`/`MbHeightC` for chroma
    /// locations. Returns `None` if the macroblock containing the location is not
    /// available.
    fn locate(&self, x: i32, y: i32, max_w: i32, max_h: i32) -> Option<Location<'_>>;

    /// The top macroblock of the neighbouring macroblock pair (6.4.10).
    ///
    /// Only needed in MBAFF frames. The default implementation returns the neighbouring
    /// macroblock of 6.4.11.1.
    fn pair(&self, n: Neighbour) -> Option<&Macroblock> {
        macroblock(self, n)
    }

    /// The previous macroblock in decoding order within the current slice.
    fn previous(&self) -> Option<&Macroblock>;
}

/// The neighbouring macroblock `mbAddrN` (6.4.11.1).
pub fn macroblock<N: Neighbourhood + ?Sized>(nb: &N, n: Neighbour) -> Option<&Macroblock> {
    let (x, y) = n.offset();
    nb.locate(x, y, 16, 16).map(|location| location.macroblock)
}

/// The neighbouring 8x8 luma block with its `luma8x8BlkIdxN` (6.4.11.2).
pub fn luma_8x8<N: Neighbourhood + ?Sized>(
    nb: &N,
    luma8x8_blk_idx: usize,
    n: Neighbour,
) -> Option<BlockNeighbour<'_>> {
    let (x_d, y_d) = n.offset();
    let x = (luma8x8_blk_idx as i32 % 2) * 8;
    let y = (luma8x8_blk_idx as i32 / 2) * 8;
    let location = nb.locate(x + x_d, y + y_d, 16, 16)?;

    let blk_idx = luma_8x8_blk_idx(location.x, location.y);

    Some(BlockNeighbour::new(location, blk_idx))
}

/// The neighbouring 4x4 luma block with its `luma4x4BlkIdxN` (6.4.11.4).
///
/// The same derivation is used for Cb and Cr blocks when `ChromaArrayType` is 3.
pub fn luma_4x4<N: Neighbourhood + ?Sized>(
    nb: &N,
    luma4x4_blk_idx: usize,
    n: Neighbour,
) -> Option<BlockNeighbour<'_>> {
    let (x_d, y_d) = n.offset();
    let (x, y) = luma_4x4_position(luma4x4_blk_idx);
    let location = nb.locate(x + x_d, y + y_d, 16, 16)?;

    let blk_idx = luma_4x4_blk_idx(location.x, location.y);

    Some(BlockNeighbour::new(location, blk_idx))
}

/// The neighbouring 4x4 chroma block with its `chroma4x4BlkIdxN` (6.4.11.5).
///
/// `mb_width_c` and `mb_height_c` are `MbWidthC` and `MbHeightC`.
pub fn chroma_4x4<N: Neighbourhood + ?Sized>(
    nb: &N,
    chroma4x4_blk_idx: usize,
    n: Neighbour,
    mb_width_c: i32,
    mb_height_c: i32,
) -> Option<BlockNeighbour<'_>> {
    let (x_d, y_d) = n.offset();
    let x = (chroma4x4_blk_idx as i32 % 2) * 4;
    let y = (chroma4x4_blk_idx as i32 / 2) * 4;
    let location = nb.locate(x + x_d, y + y_d, mb_width_c, mb_height_c)?;
    let blk_idx = (2 * (location.y / 4) + location.x / 4) as usize;

    Some(BlockNeighbour::new(location, blk_idx))
}

/// The luma location inside the neighbouring macroblock that covers the neighbouring
/// partition of `mbPartIdx`/`subMbPartIdx` of the current macroblock (6.4.11.7).
///
/// The partition indices of `mbAddrN` follow from the returned location, which is how
/// [`Macroblock::pred_mode_at`] and the per-block `ref_idx`/`mvd` arrays are indexed.
pub fn partition<N: Neighbourhood + ?Sized>(
    nb: &N,
    mb_part_idx: usize,
    sub_mb_part_idx: usize,
    n: Neighbour,
) -> Option<Location<'_>> {
    let current = nb.current();
    let (x, y) = match current.mb_type.mb_part_size() {
        Some((w, h)) => inverse_raster_scan(mb_part_idx, w as i32, h as i32, 16),
        None => (0, 0),
    };

    let (x_s, y_s) = if current.mb_type.has_sub_mb_types() {
        match current.sub_mb_types.get(mb_part_idx).copied().flatten() {
            Some(sub_mb_type) => {
                let (w, h) = sub_mb_type.sub_mb_part_size();
                inverse_raster_scan(sub_mb_part_idx, w as i32, h as i32, 8)
            }
            None => (0, 0),
        }
    } else {
        (0, 0)
    };

    let (x_d, y_d) = n.offset();
    nb.locate(x + x_s + x_d, y + y_s + y_d, 16, 16)
}

/// `InverseRasterScan` for both coordinates (5.7).
fn inverse_raster_scan(idx: usize, width: i32, height: i32, extent: i32) -> (i32, i32) {
    let idx = idx as i32;
    let per_row = extent / width;

    ((idx % per_row) * width, (idx / per_row) * height)
}

/// The upper-left luma sample of a 4x4 luma block (6.4.3).
pub(crate) fn luma_4x4_position(luma4x4_blk_idx: usize) -> (i32, i32) {
    let (x8, y8) = inverse_raster_scan(luma4x4_blk_idx / 4, 8, 8, 16);
    let (x4, y4) = inverse_raster_scan(luma4x4_blk_idx % 4, 4, 4, 8);

    (x8 + x4, y8 + y4)
}

/// `luma4x4BlkIdx` of the block covering a luma location (6.4.13.1).
pub(crate) fn luma_4x4_blk_idx(x: i32, y: i32) -> usize {
    (8 * (y / 8) + 4 * (x / 8) + 2 * ((y % 8) / 4) + ((x % 8) / 4)) as usize
}

/// `luma8x8BlkIdx` of the block covering a luma location (6.4.13.3).
pub(crate) fn luma_8x8_blk_idx(x: i32, y: i32) -> usize {
    (2 * (y / 8) + x / 8) as usize
}

/// A [`Neighbourhood`] for pictures without macroblock-adaptive frame/field coding.
///
/// Macroblocks are stored by address. A macroblock is available to the current one if it
/// precedes it and belongs to the same slice (6.4.8).
#[derive(Debug, Clone)]
pub struct MacroblockMap {
    width_in_mbs: usize,
    macroblocks: Vec<Macroblock>,
    slices: Vec<Option<u32>>,
    current: Macroblock,
    current_addr: usize,
    current_slice: u32,
    previous: Option<usize>,
    started: bool,
}

impl MacroblockMap {
    /// Create a map for a picture of `width_in_mbs` x `height_in_mbs` macroblocks.
    pub fn new(width_in_mbs: usize, height_in_mbs: usize) -> Self {
        let len = width_in_mbs * height_in_mbs;

        Self {
            width_in_mbs,
            macroblocks: vec![Macroblock::default(); len],
            slices: vec![None; len],
            current: Macroblock::default(),
            current_addr: 0,
            current_slice: 0,
            previous: None,
            started: false,
        }
    }

    /// Store the current macroblock and start decoding the macroblock at `mb_addr`.
    ///
    /// Returns `None` if `mb_addr` lies outside of the picture.
    pub fn start(&mut self, mb_addr: usize, slice_id: u32) -> Option<&mut Macroblock> {
        if mb_addr >= self.macroblocks.len() {
            return None;
        }

        self.finish();
        self.previous = self
            .slices
            .get(self.current_addr)
            .copied()
            .flatten()
            .filter(|slice| *slice == slice_id && self.current_addr != mb_addr)
            .map(|_| self.current_addr);
        self.current = Macroblock::default();
        self.current_addr = mb_addr;
        self.current_slice = slice_id;
        self.started = true;

        Some(&mut self.current)
    }

    /// Store the current macroblock, for example at the end of a slice.
    pub fn finish(&mut self) {
        if !self.started {
            return;
        }

        self.macroblocks[self.current_addr] = self.current;
        self.slices[self.current_addr] = Some(self.current_slice);
    }

    /// The macroblock that is currently being decoded.
    pub fn current_mut(&mut self) -> &mut Macroblock {
        &mut self.current
    }

    /// `CurrMbAddr`.
    pub fn current_addr(&self) -> usize {
        self.current_addr
    }

    /// A stored macroblock, regardless of its availability.
    pub fn get(&self, mb_addr: usize) -> Option<&Macroblock> {
        match self.slices.get(mb_addr)? {
            Some(_) => self.macroblocks.get(mb_addr),
            None => None,
        }
    }

    /// The macroblock at `mb_addr` if it is available to the current one (6.4.8).
    fn available(&self, mb_addr: Option<usize>) -> Option<&Macroblock> {
        let mb_addr = mb_addr?;

        if mb_addr >= self.current_addr || self.slices[mb_addr] != Some(self.current_slice) {
            return None;
        }

        self.macroblocks.get(mb_addr)
    }

    /// `mbAddrA` to `mbAddrD` of 6.4.9, without the availability check.
    fn neighbour_addr(&self, dx: i32, dy: i32) -> Option<usize> {
        let width = self.width_in_mbs;

        if width == 0 {
            return None;
        }

        let column = self.current_addr % width;

        let column = match dx {
            -1 => column.checked_sub(1)?,
            1 if column + 1 < width => column + 1,
            1 => return None,
            _ => column,
        };

        let row = self.current_addr / width;
        let row = if dy < 0 { row.checked_sub(1)? } else { row };

        Some(row * width + column)
    }
}

impl Neighbourhood for MacroblockMap {
    fn current(&self) -> &Macroblock {
        &self.current
    }

    fn locate(&self, x: i32, y: i32, max_w: i32, max_h: i32) -> Option<Location<'_>> {
        // Table 6-3.
        let (dx, dy) = match (x, y) {
            (x, y) if x < 0 && y < 0 => (-1, -1),
            (x, y) if x < 0 && y < max_h => (-1, 0),
            (x, _) if x < 0 => return None,
            (x, y) if x < max_w && y < 0 => (0, -1),
            (x, y) if x < max_w && y < max_h => (0, 0),
            (x, _) if x < max_w => return None,
            (_, y) if y < 0 => (1, -1),
            _ => return None,
        };

        let (macroblock, is_current) = if (dx, dy) == (0, 0) {
            (&self.current, true)
        } else {
            (self.available(self.neighbour_addr(dx, dy))?, false)
        };

        Some(Location {
            macroblock,
            is_current,
            x: (x + max_w) % max_w,
            y: (y + max_h) % max_h,
        })
    }

    fn previous(&self) -> Option<&Macroblock> {
        self.available(self.previous)
    }
}

//! World grid module - dense voxel storage and addressing strategies
//!
//! Generation happens on a [`VoxelGrid`], which owns its cells and is the only
//! type with mutating methods. Once a city is built the grid is consumed into a
//! [`VoxelWorld`], a read-only view whose out-of-range behaviour is chosen by an
//! [`Addressing`] strategy:
//!
//! - [`Bounded`]: coordinates outside the grid are empty
//! - [`Wrapping`]: coordinates wrap modulo each extent, tiling the city forever
//!
//! Cells are stored flat in `[y][z][x]` order.

use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ops::Range;

use crate::error::WorldError;
use crate::types::{Block, Cell, Position, Size};

/// Non-negative modulo: `((a % n) + n) % n` for `n > 0`.
///
/// Negative coordinates wrap down, so `wrap(-1, 10) == 9`.
///
/// # Examples
///
/// ```
/// use voxel_city_core::wrap;
///
/// assert_eq!(wrap(-1, 10), 9);
/// assert_eq!(wrap(23, 10), 3);
/// ```
pub fn wrap(a: i32, n: i32) -> i32 {
    debug_assert!(n > 0, "wrap modulus must be positive");
    a.rem_euclid(n)
}

/// Maps one world coordinate onto an index along an axis of `dimension` cells.
pub trait Addressing {
    fn resolve_index(coord: i32, dimension: usize) -> Option<usize>;
}

/// Out-of-range coordinates are empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounded;

/// Out-of-range coordinates wrap modulo the extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Wrapping;

impl Addressing for Bounded {
    #[inline]
    fn resolve_index(coord: i32, dimension: usize) -> Option<usize> {
        usize::try_from(coord).ok().filter(|&i| i < dimension)
    }
}

impl Addressing for Wrapping {
    #[inline]
    fn resolve_index(coord: i32, dimension: usize) -> Option<usize> {
        if dimension == 0 {
            return None;
        }
        let n = i64::try_from(dimension).ok()?;
        usize::try_from(i64::from(coord).rem_euclid(n)).ok()
    }
}

/// Anything the renderer can read voxels from.
pub trait BlockSource {
    /// Number of vertical layers (the y extent).
    fn layers(&self) -> usize;

    /// Block at `position`, or `None` when the cell is empty.
    fn block_at(&self, position: Position) -> Cell;
}

/// Dense, mutable voxel grid used during generation.
#[derive(Clone, PartialEq, Eq)]
pub struct VoxelGrid {
    width: usize,
    depth: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl fmt::Debug for VoxelGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VoxelGrid")
            .field("width", &self.width)
            .field("depth", &self.depth)
            .field("height", &self.height)
            .field("filled", &self.filled_count())
            .finish()
    }
}

impl VoxelGrid {
    /// Allocate an empty grid.
    ///
    /// Fails on a zero extent (nothing could wrap against it), on an extent
    /// that i32 coordinates cannot address, or on a volume that cannot be
    /// allocated.
    pub fn new(width: usize, depth: usize, height: usize) -> Result<Self, WorldError> {
        if width == 0 || depth == 0 || height == 0 {
            return Err(WorldError::ZeroDimension {
                width,
                depth,
                height,
            });
        }
        for (axis, extent) in [("width", width), ("depth", depth), ("height", height)] {
            if i32::try_from(extent).is_err() {
                return Err(WorldError::TooLarge { axis, extent });
            }
        }

        let volume = width
            .checked_mul(depth)
            .and_then(|n| n.checked_mul(height))
            .ok_or(WorldError::TooLarge {
                axis: "volume",
                extent: usize::MAX,
            })?;
        let too_large = WorldError::TooLarge {
            axis: "volume",
            extent: volume,
        };
        let fits = volume
            .checked_mul(mem::size_of::<Cell>())
            .is_some_and(|bytes| bytes <= isize::MAX as usize);
        if !fits {
            return Err(too_large);
        }

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(volume)
            .map_err(|_| too_large)?;
        cells.resize(volume, None);

        Ok(Self {
            width,
            depth,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of non-empty cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    #[inline(always)]
    fn offset(&self, x: usize, z: usize, y: usize) -> usize {
        (y * self.depth + z) * self.width + x
    }

    #[inline(always)]
    fn idx(&self, position: Position) -> Option<usize> {
        let x = Bounded::resolve_index(position.x, self.width)?;
        let z = Bounded::resolve_index(position.z, self.depth)?;
        let y = Bounded::resolve_index(position.y, self.height)?;
        Some(self.offset(x, z, y))
    }

    /// Bounded lookup.
    pub fn block_at(&self, position: Position) -> Cell {
        self.idx(position).and_then(|i| self.cells[i])
    }

    /// Write a single block. Returns `false` (and writes nothing) when
    /// `position` is outside the grid.
    pub fn set_block(&mut self, position: Position, block: Block) -> bool {
        self.put(position, Some(block))
    }

    /// Empty a single cell. Same bounds rule as [`set_block`](Self::set_block).
    pub fn clear_block(&mut self, position: Position) -> bool {
        self.put(position, None)
    }

    fn put(&mut self, position: Position, cell: Cell) -> bool {
        match self.idx(position) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Fill a box with one block, clipped to the grid.
    pub fn fill_region(&mut self, position: Position, size: Size, block: Block) {
        self.fill_region_with(position, size, |_| block);
    }

    /// Fill a box with blocks computed from each cell's absolute position.
    ///
    /// The box is intersected with the grid on every axis first, so the factory
    /// only ever sees in-range positions. Empty or fully outside boxes are a no-op.
    pub fn fill_region_with<F>(&mut self, position: Position, size: Size, mut factory: F)
    where
        F: FnMut(Position) -> Block,
    {
        if size.is_empty() {
            return;
        }
        let xs = clip_axis(position.x, size.width, self.width);
        let zs = clip_axis(position.z, size.depth, self.depth);
        let ys = clip_axis(position.y, size.height, self.height);

        for y in ys {
            for z in zs.clone() {
                for x in xs.clone() {
                    let at = Position::new(x, z, y);
                    let i = self.offset(x as usize, z as usize, y as usize);
                    self.cells[i] = Some(factory(at));
                }
            }
        }
    }

    /// Freeze the grid into a read-only world with the chosen addressing.
    pub fn into_world<A: Addressing>(self) -> VoxelWorld<A> {
        VoxelWorld {
            grid: self,
            _addressing: PhantomData,
        }
    }
}

/// `[start, start + extent) ∩ [0, dimension)` as an i32 range.
fn clip_axis(start: i32, extent: i32, dimension: usize) -> Range<i32> {
    let lo = i64::from(start).max(0);
    let hi = (i64::from(start) + i64::from(extent)).min(dimension as i64);
    if lo >= hi {
        return 0..0;
    }
    // Both bounds lie in [0, dimension] and dimension fits in i32.
    (lo as i32)..(hi as i32)
}

impl BlockSource for VoxelGrid {
    fn layers(&self) -> usize {
        self.height
    }

    fn block_at(&self, position: Position) -> Cell {
        self.idx(position).and_then(|i| self.cells[i])
    }
}

/// Read-only world view with an addressing strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoxelWorld<A = Wrapping> {
    grid: VoxelGrid,
    _addressing: PhantomData<A>,
}

impl<A: Addressing> VoxelWorld<A> {
    pub fn width(&self) -> usize {
        self.grid.width
    }

    pub fn depth(&self) -> usize {
        self.grid.depth
    }

    pub fn height(&self) -> usize {
        self.grid.height
    }

    /// Give the grid back, e.g. to re-freeze it with another addressing.
    pub fn into_grid(self) -> VoxelGrid {
        self.grid
    }

    pub fn block_at(&self, position: Position) -> Cell {
        self.lookup(position)
    }

    #[inline(always)]
    fn lookup(&self, position: Position) -> Cell {
        let x = A::resolve_index(position.x, self.grid.width)?;
        let z = A::resolve_index(position.z, self.grid.depth)?;
        let y = A::resolve_index(position.y, self.grid.height)?;
        self.grid.cells[self.grid.offset(x, z, y)]
    }
}

impl<A: Addressing> BlockSource for VoxelWorld<A> {
    fn layers(&self) -> usize {
        self.grid.height
    }

    fn block_at(&self, position: Position) -> Cell {
        self.lookup(position)
    }
}

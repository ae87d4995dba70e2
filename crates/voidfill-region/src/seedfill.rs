//! Border-reachability void filling
//!
//! Every background cell that can be reached from the grid boundary
//! through face-adjacent background stays background; everything else
//! (foreground and enclosed voids) becomes 1.
//!
//! The sweep is an iterative flood fill that works a row at a time: a
//! popped seed is extended left and right to the ends of its background
//! run, and the rows above, below, in front and behind only get a new seed
//! where a fresh background run starts. That keeps the stack close to the
//! surface area of the background instead of its volume.
//!
//! Bookkeeping lives in a scratch buffer of [`CellState`] owned by the
//! call, so the caller's grid is only written once, at the end.

use crate::error::RegionResult;
use log::{debug, trace};
use voidfill_core::{Dims, Volume, Voxel};

/// Per-cell state during a sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub(crate) enum CellState {
    /// Background not (yet) reached from the boundary
    Background,
    /// Background reached from the boundary
    VisitedBackground,
    /// Non-zero input
    Foreground,
}

/// Pending seeds; a cell may be pushed more than once
#[derive(Debug, Default)]
struct Frontier {
    stack: Vec<usize>,
}

impl Frontier {
    fn push(&mut self, loc: usize) {
        self.stack.push(loc);
    }

    fn pop(&mut self) -> Option<usize> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    /// Push `loc` only if it starts a background run
    ///
    /// `placed` is true while the current run already has a seed.
    fn seed_run(&mut self, state: CellState, loc: usize, placed: &mut bool) {
        if state == CellState::Background {
            if !*placed {
                self.push(loc);
            }
            *placed = true;
        } else {
            *placed = false;
        }
    }
}

/// "About to need a seed" flags for the four off-row directions
#[derive(Debug)]
struct NeighborSeeds {
    y_minus: bool,
    y_plus: bool,
    z_minus: bool,
    z_plus: bool,
}

impl NeighborSeeds {
    fn armed() -> Self {
        Self {
            y_minus: true,
            y_plus: true,
            z_minus: true,
            z_plus: true,
        }
    }

    #[inline]
    fn check(flag: &mut bool, state: CellState, loc: usize, frontier: &mut Frontier) {
        match state {
            CellState::Background => {
                if *flag {
                    frontier.push(loc);
                    *flag = false;
                }
            }
            CellState::Foreground => *flag = true,
            CellState::VisitedBackground => {}
        }
    }

    /// Inspect the off-row neighbours of the just-visited cell `cur`
    #[inline]
    fn visit(
        &mut self,
        states: &[CellState],
        frontier: &mut Frontier,
        dims: Dims,
        cur: usize,
        y: usize,
        z: usize,
    ) {
        let sx = dims.stride_y();
        let sxy = dims.stride_z();

        if y > 0 {
            Self::check(&mut self.y_minus, states[cur - sx], cur - sx, frontier);
        }
        if y + 1 < dims.sy() {
            Self::check(&mut self.y_plus, states[cur + sx], cur + sx, frontier);
        }
        if z > 0 {
            Self::check(&mut self.z_minus, states[cur - sxy], cur - sxy, frontier);
        }
        if z + 1 < dims.sz() {
            Self::check(&mut self.z_plus, states[cur + sxy], cur + sxy, frontier);
        }
    }
}

fn normalize<T: Voxel>(grid: &[T]) -> Vec<CellState> {
    grid.iter()
        .map(|v| {
            if v.is_foreground() {
                CellState::Foreground
            } else {
                CellState::Background
            }
        })
        .collect()
}

/// Seed every background run that touches the boundary
///
/// Rows lying on a y or z face are boundary along their whole length and
/// get one seed per background run; every other row only has its two end
/// cells on the boundary.
fn seed_boundary(states: &[CellState], dims: Dims, frontier: &mut Frontier) {
    let (sx, sy, sz) = dims.shape();
    for z in 0..sz {
        for y in 0..sy {
            let row = dims.index(0, y, z);
            if dims.is_boundary_row(y, z) {
                let mut placed = false;
                for loc in row..row + sx {
                    frontier.seed_run(states[loc], loc, &mut placed);
                }
            } else {
                if states[row] == CellState::Background {
                    frontier.push(row);
                }
                let last = row + sx - 1;
                if sx > 1 && states[last] == CellState::Background {
                    frontier.push(last);
                }
            }
        }
    }
    trace!("seeded {} boundary runs", frontier.len());
}

/// Mark all background reachable from the boundary as visited
fn sweep(states: &mut [CellState], dims: Dims) {
    let sx = dims.stride_y();
    let sxy = dims.stride_z();

    let mut frontier = Frontier::default();
    seed_boundary(states, dims, &mut frontier);

    while let Some(loc) = frontier.pop() {
        if states[loc] != CellState::Background {
            continue;
        }

        let z = loc / sxy;
        let y = (loc - z * sxy) / sx;
        let row_start = y * sx + z * sxy;
        let row_end = row_start + sx;

        let mut seeds = NeighborSeeds::armed();
        for cur in loc..row_end {
            if states[cur] != CellState::Background {
                break;
            }
            states[cur] = CellState::VisitedBackground;
            seeds.visit(states, &mut frontier, dims, cur, y, z);
        }

        let mut seeds = NeighborSeeds::armed();
        for cur in (row_start..loc).rev() {
            if states[cur] != CellState::Background {
                break;
            }
            states[cur] = CellState::VisitedBackground;
            seeds.visit(states, &mut frontier, dims, cur, y, z);
        }
    }
}

/// Fill enclosed voids in place
///
/// Any non-zero cell is foreground. On return every cell is 0 (background
/// reachable from the boundary) or 1 (original foreground or a filled
/// void). An empty grid is left untouched.
///
/// # Arguments
///
/// * `grid` - Flat grid in x-fastest order
/// * `dims` - Grid shape; the rank decides which faces are boundary
///
/// # Returns
///
/// The number of background cells that were filled.
///
/// # Errors
///
/// Returns [`crate::RegionError::Core`] if `grid.len()` does not match
/// `dims`.
pub fn fill_voids<T: Voxel>(grid: &mut [T], dims: Dims) -> RegionResult<usize> {
    dims.check_len(grid.len())?;
    if dims.is_empty() {
        return Ok(0);
    }

    let mut states = normalize(grid);
    sweep(&mut states, dims);

    let mut filled = 0;
    for (cell, state) in grid.iter_mut().zip(&states) {
        if *state == CellState::Background {
            filled += 1;
        }
        *cell = T::from_flag(*state != CellState::VisitedBackground);
    }

    debug!("fill_voids {:?}: filled {} voxels", dims.shape(), filled);
    Ok(filled)
}

/// Fill enclosed voids in a 2D grid of `sx` × `sy` cells
pub fn fill_voids_2d<T: Voxel>(grid: &mut [T], sx: usize, sy: usize) -> RegionResult<usize> {
    fill_voids(grid, Dims::new_2d(sx, sy)?)
}

/// Fill enclosed voids in a 3D grid of `sx` × `sy` × `sz` cells
pub fn fill_voids_3d<T: Voxel>(
    grid: &mut [T],
    sx: usize,
    sy: usize,
    sz: usize,
) -> RegionResult<usize> {
    fill_voids(grid, Dims::new_3d(sx, sy, sz)?)
}

/// Fill enclosed voids of an owned volume in place
pub fn fill_volume<T: Voxel>(volume: &mut Volume<T>) -> RegionResult<usize> {
    let dims = volume.dims();
    fill_voids(volume.as_mut_slice(), dims)
}

/// Fill enclosed voids into a new volume
///
/// The input is left untouched.
///
/// # Returns
///
/// The filled binary volume and the number of filled cells.
pub fn fill_holes<T: Voxel>(volume: &Volume<T>) -> RegionResult<(Volume<T>, usize)> {
    let mut output = volume.clone();
    let filled = fill_volume(&mut output)?;
    Ok((output, filled))
}

/// Number of background cells that [`fill_voids`] would fill
///
/// The grid is not modified.
pub fn count_voids<T: Voxel>(grid: &[T], dims: Dims) -> RegionResult<usize> {
    dims.check_len(grid.len())?;
    if dims.is_empty() {
        return Ok(0);
    }

    let mut states = normalize(grid);
    sweep(&mut states, dims);
    Ok(states
        .iter()
        .filter(|&&s| s == CellState::Background)
        .count())
}

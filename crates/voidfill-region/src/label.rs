//! Connected component labeling fused with void filling
//!
//! Labels the components of foreground plus absorbed voids. Two cells end
//! up with the same label when they are face-connected through foreground
//! of one value, or through an enclosed void touching both. Background
//! reachable from the boundary is labeled 0.
//!
//! The scan is a classic raster-order union-find labeling over the causal
//! neighbours (x-1, y-1, z-1):
//!
//! 1. Every cell gets a provisional label. Background joins background and
//!    foreground joins foreground of the same value. Boundary background
//!    is unified with label 0.
//! 2. Background classes whose root is not 0 are voids. Each void class is
//!    unified with every foreground class it touches.
//! 3. Roots are renumbered densely from 1 and written to the output.

use crate::error::{RegionError, RegionResult};
use crate::unionfind::DisjointSet;
use log::debug;
use voidfill_core::{Dims, Label, Volume, Voxel, same_class};

/// Summary of a labeling run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LabelStats {
    /// Number of distinct non-zero labels written
    pub num_labels: usize,
    /// Number of background cells absorbed into a component
    pub filled: usize,
}

/// Causal neighbours of the cell at `loc`
#[inline]
pub(crate) fn causal_neighbors(dims: Dims, loc: usize, x: usize, y: usize, z: usize) -> [Option<usize>; 3] {
    [
        (x > 0).then(|| loc - 1),
        (y > 0).then(|| loc - dims.stride_y()),
        (z > 0).then(|| loc - dims.stride_z()),
    ]
}

/// First pass: provisional labels, returns `(labels, max_label, foreground)`
fn provisional_pass<T: Voxel>(
    grid: &[T],
    dims: Dims,
    set: &mut DisjointSet<u32>,
) -> RegionResult<(Vec<u32>, u32, usize)> {
    let (sx, sy, sz) = dims.shape();
    let mut provisional = vec![0u32; grid.len()];
    let mut next = 0u32;
    let mut foreground = 0usize;

    let mut loc = 0;
    for z in 0..sz {
        for y in 0..sy {
            for x in 0..sx {
                let value = grid[loc];
                if value.is_foreground() {
                    foreground += 1;
                }

                let mut label: Option<u32> = None;
                for n in causal_neighbors(dims, loc, x, y, z).into_iter().flatten() {
                    if !same_class(value, grid[n]) {
                        continue;
                    }
                    let neighbor = provisional[n];
                    match label {
                        None => label = Some(neighbor),
                        Some(cur) if cur != neighbor => {
                            set.unify(cur, neighbor)?;
                        }
                        Some(_) => {}
                    }
                }

                let label = match label {
                    Some(l) => l,
                    None => {
                        next += 1;
                        set.add(next)?;
                        next
                    }
                };
                provisional[loc] = label;

                if !value.is_foreground() && dims.is_boundary(x, y, z) {
                    set.unify(label, 0)?;
                }
                loc += 1;
            }
        }
    }

    Ok((provisional, next, foreground))
}

/// Second pass: merge each enclosed background class with its foreground
/// neighbours
///
/// Only void classes take part, and they never join class 0, so a class is
/// exterior before this pass exactly when it is exterior after it.
fn absorb_voids<T: Voxel>(
    grid: &[T],
    dims: Dims,
    provisional: &[u32],
    set: &mut DisjointSet<u32>,
) -> RegionResult<()> {
    let (sx, sy, sz) = dims.shape();
    let mut loc = 0;
    for z in 0..sz {
        for y in 0..sy {
            for x in 0..sx {
                let here = grid[loc].is_foreground();
                for n in causal_neighbors(dims, loc, x, y, z).into_iter().flatten() {
                    if here == grid[n].is_foreground() {
                        continue;
                    }
                    let void_label = if here { provisional[n] } else { provisional[loc] };
                    if set.root(void_label) != 0 {
                        set.unify(provisional[loc], provisional[n])?;
                    }
                }
                loc += 1;
            }
        }
    }
    Ok(())
}

/// Label components with voids absorbed, writing into `out`
///
/// `out` receives the final labels: 0 for background connected to the
/// boundary, `1..=num_labels` for components in order of first
/// appearance.
///
/// # Errors
///
/// - [`RegionError::Core`] if `grid` or `out` does not match `dims`
/// - [`RegionError::LabelsExhausted`] if the grid has more cells than
///   32-bit provisional labels can number
/// - [`RegionError::LabelOverflow`] if `L` cannot hold `num_labels`; `out`
///   is not written in that case
pub fn fill_voids_labeled_into<T: Voxel, L: Label>(
    grid: &[T],
    dims: Dims,
    out: &mut [L],
) -> RegionResult<LabelStats> {
    dims.check_len(grid.len())?;
    dims.check_len(out.len())?;
    if dims.is_empty() {
        return Ok(LabelStats::default());
    }

    let voxels = dims.voxels();
    if voxels >= u32::MAX as usize {
        return Err(RegionError::LabelsExhausted {
            capacity: u32::MAX as usize,
        });
    }
    let mut set: DisjointSet<u32> = DisjointSet::with_capacity(voxels + 1)?;

    let (provisional, max_label, foreground) = provisional_pass(grid, dims, &mut set)?;
    absorb_voids(grid, dims, &provisional, &mut set)?;

    // Smaller roots win, so a class root is never larger than any member
    // and is renumbered before its members are reached.
    let mut final_of = vec![0u32; max_label as usize + 1];
    let mut num_labels = 0u32;
    for p in 1..=max_label {
        let root = set.root(p);
        final_of[p as usize] = if root == 0 {
            0
        } else if root == p {
            num_labels += 1;
            num_labels
        } else {
            final_of[root as usize]
        };
    }

    let num_labels = num_labels as usize;
    if L::from_index(num_labels).is_none() {
        return Err(RegionError::LabelOverflow {
            count: num_labels,
            type_name: std::any::type_name::<L>(),
        });
    }

    let mut labeled = 0usize;
    for (dst, &p) in out.iter_mut().zip(&provisional) {
        let label = final_of[p as usize] as usize;
        if label != 0 {
            labeled += 1;
        }
        *dst = L::from_index(label).unwrap_or_else(L::zero);
    }

    let stats = LabelStats {
        num_labels,
        filled: labeled - foreground,
    };
    debug!(
        "fill_voids_labeled {:?}: {} provisional -> {} labels, filled {} voxels",
        dims.shape(),
        max_label,
        stats.num_labels,
        stats.filled
    );
    Ok(stats)
}

/// Label components with voids absorbed into a newly allocated buffer
pub fn fill_voids_labeled<T: Voxel, L: Label>(
    grid: &[T],
    dims: Dims,
) -> RegionResult<(Vec<L>, LabelStats)> {
    dims.check_len(grid.len())?;
    let mut out = vec![L::zero(); dims.voxels()];
    let stats = fill_voids_labeled_into(grid, dims, &mut out)?;
    Ok((out, stats))
}

/// Label the components of an owned volume
pub fn label_volume<T: Voxel, L: Label>(
    volume: &Volume<T>,
) -> RegionResult<(Volume<L>, LabelStats)> {
    let dims = volume.dims();
    let (labels, stats) = fill_voids_labeled(volume.as_slice(), dims)?;
    Ok((Volume::from_vec(dims, labels)?, stats))
}

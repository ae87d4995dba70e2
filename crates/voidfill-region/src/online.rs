//! Void filling with a bounded label space
//!
//! A single raster scan labels background runs with 8-bit provisional
//! labels, so working memory is one byte per cell, a fixed-size disjoint
//! set and one small translation table per flush, independent of how many
//! background regions are live at once.
//!
//! Label meanings in the scratch buffer:
//!
//! - `0`: foreground, or a void that has already been closed and filled
//! - `1`: the exterior, i.e. background connected to the boundary
//! - `2..=ceiling`: live background classes
//!
//! When a new label is needed past the ceiling the label space is flushed.
//! Only cells within one causal reach of the cursor (the previous plane in
//! 3D, the previous row in 2D) can still be joined by later cells. Classes
//! present there are renumbered from 2. Classes rooted at the exterior
//! collapse to 1. Every other class is closed without touching the
//! boundary, so it is a void and is folded to 0.
//!
//! A flush rewrites only that window. It records a table of the
//! translation instead, and the final pass composes the tables so every
//! cell is resolved exactly once.

use crate::error::{RegionError, RegionResult};
use crate::label::causal_neighbors;
use crate::unionfind::DisjointSet;
use log::debug;
use voidfill_core::{Dims, Voxel};

/// Default ceiling for live provisional labels
pub const DEFAULT_LABEL_CEILING: u8 = u8::MAX;

const FILLED: u8 = 0;
const EXTERIOR: u8 = 1;
const FIRST_LIVE: u8 = 2;

/// Options for [`fill_voids_bounded`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnlineOptions {
    /// Largest provisional label; at least 2
    pub label_ceiling: u8,
}

impl Default for OnlineOptions {
    fn default() -> Self {
        Self {
            label_ceiling: DEFAULT_LABEL_CEILING,
        }
    }
}

impl OnlineOptions {
    /// Create options with the default ceiling
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label ceiling
    pub fn with_label_ceiling(mut self, ceiling: u8) -> Self {
        self.label_ceiling = ceiling;
        self
    }
}

#[derive(Debug)]
struct OnlineLabeler {
    labels: Vec<u8>,
    set: DisjointSet<u8>,
    next: usize,
    ceiling: usize,
    reach: usize,
    /// Cursor of every flush so far
    cursors: Vec<usize>,
    /// One table of `ceiling + 1` entries per flush, taking a label of the
    /// period before the flush to its label in the period after it
    tables: Vec<u8>,
}

impl OnlineLabeler {
    fn new(dims: Dims, ceiling: u8) -> RegionResult<Self> {
        let mut set = DisjointSet::with_capacity(usize::from(ceiling) + 1)?;
        set.add(EXTERIOR)?;
        Ok(Self {
            labels: vec![FILLED; dims.voxels()],
            set,
            next: usize::from(FIRST_LIVE),
            ceiling: usize::from(ceiling),
            reach: dims.causal_reach(),
            cursors: Vec::new(),
            tables: Vec::new(),
        })
    }

    fn width(&self) -> usize {
        self.ceiling + 1
    }

    /// Hand out a fresh label, flushing first if the ceiling is reached
    fn mint(&mut self, cursor: usize) -> RegionResult<u8> {
        if self.next > self.ceiling {
            self.flush(cursor);
        }
        let label = match u8::try_from(self.next) {
            Ok(label) if self.next <= self.ceiling => label,
            _ => {
                return Err(RegionError::LabelsExhausted {
                    capacity: self.ceiling + 1,
                });
            }
        };
        self.set.add(label)?;
        self.next += 1;
        Ok(label)
    }

    /// Start a new label period at `cursor`
    ///
    /// Only the causal window is rewritten in place. Older cells keep the
    /// labels of their period and are translated through the recorded
    /// tables once, when the scan is done.
    fn flush(&mut self, cursor: usize) {
        let window = cursor.saturating_sub(self.reach)..cursor;
        let width = self.width();
        let Self {
            labels,
            set,
            tables,
            next: minted,
            ..
        } = &mut *self;

        let mut remap = [FILLED; 256];
        let mut next = usize::from(FIRST_LIVE);
        for &l in &labels[window.clone()] {
            if l < FIRST_LIVE {
                continue;
            }
            let root = set.root(l);
            if root >= FIRST_LIVE && remap[usize::from(root)] == FILLED {
                // At most ceiling - 1 live roots exist, so this fits.
                remap[usize::from(root)] = next as u8;
                next += 1;
            }
        }

        let start = tables.len();
        let mut folded = 0usize;
        for l in 0..width {
            let label = l as u8;
            let mapped = if label < FIRST_LIVE {
                label
            } else {
                let root = set.root(label);
                if root == EXTERIOR {
                    EXTERIOR
                } else {
                    remap[usize::from(root)]
                }
            };
            if label >= FIRST_LIVE && l < *minted && mapped == FILLED {
                folded += 1;
            }
            tables.push(mapped);
        }

        let table = &tables[start..];
        for l in &mut labels[window] {
            *l = table[usize::from(*l)];
        }

        set.clear();
        self.cursors.push(cursor);
        debug!(
            "online relabel #{} at voxel {}: {} live labels kept, {} void labels folded",
            self.cursors.len(),
            cursor,
            next - usize::from(FIRST_LIVE),
            folded
        );
        self.next = next;
    }

    /// Per-period tables taking a stored label to 1 if it is exterior
    ///
    /// Table `p` serves cells whose label belongs to period `p`. The last
    /// table resolves the final period through the disjoint set; earlier
    /// ones are composed backwards through the flush tables.
    fn exterior_tables(&mut self) -> Vec<u8> {
        let width = self.width();
        let periods = self.cursors.len();
        let mut tables = std::mem::take(&mut self.tables);
        for l in 0..width {
            let label = l as u8;
            let exterior = label != FILLED && self.set.root(label) == EXTERIOR;
            tables.push(u8::from(exterior));
        }
        for p in (0..periods).rev() {
            for l in 0..width {
                let i = p * width + l;
                let target = usize::from(tables[i]);
                tables[i] = tables[(p + 1) * width + target];
            }
        }
        tables
    }

    /// Label period of cell `loc`, scanning forward from period `from`
    ///
    /// A cell carries the labels of this period: it was written during the
    /// scan after every flush at or before `loc`, and rewritten by every
    /// flush whose window reaches back to it.
    fn period_of(&self, loc: usize, from: usize) -> usize {
        let mut period = from;
        while period < self.cursors.len() && self.cursors[period] <= loc + self.reach {
            period += 1;
        }
        period
    }
}

/// Fill enclosed voids in place with a bounded label space
///
/// Produces the same 0/1 grid and count as [`crate::fill_voids`].
///
/// # Errors
///
/// - [`RegionError::Core`] if `grid.len()` does not match `dims`
/// - [`RegionError::InvalidParameters`] if the ceiling is below 2
/// - [`RegionError::LabelsExhausted`] if one causal reach of the grid holds
///   more live background classes than the ceiling allows; the grid is
///   left unmodified
pub fn fill_voids_bounded<T: Voxel>(
    grid: &mut [T],
    dims: Dims,
    options: &OnlineOptions,
) -> RegionResult<usize> {
    dims.check_len(grid.len())?;
    if options.label_ceiling < FIRST_LIVE {
        return Err(RegionError::InvalidParameters(format!(
            "label ceiling must be at least {}, got {}",
            FIRST_LIVE, options.label_ceiling
        )));
    }
    if dims.is_empty() {
        return Ok(0);
    }

    let mut labeler = OnlineLabeler::new(dims, options.label_ceiling)?;
    let (sx, sy, sz) = dims.shape();
    let mut foreground = 0usize;

    let mut loc = 0;
    for z in 0..sz {
        for y in 0..sy {
            for x in 0..sx {
                if grid[loc].is_foreground() {
                    foreground += 1;
                    loc += 1;
                    continue;
                }

                let mut label: Option<u8> = None;
                for n in causal_neighbors(dims, loc, x, y, z).into_iter().flatten() {
                    let neighbor = labeler.labels[n];
                    if neighbor == FILLED {
                        continue;
                    }
                    match label {
                        None => label = Some(neighbor),
                        Some(cur) if cur != neighbor => {
                            labeler.set.unify(cur, neighbor)?;
                        }
                        Some(_) => {}
                    }
                }

                let label = match label {
                    Some(l) => l,
                    None => labeler.mint(loc)?,
                };
                labeler.labels[loc] = label;

                if dims.is_boundary(x, y, z) {
                    labeler.set.unify(label, EXTERIOR)?;
                }
                loc += 1;
            }
        }
    }

    let width = labeler.width();
    let tables = labeler.exterior_tables();
    let mut period = 0;
    let mut enclosed_total = 0usize;
    for (loc, cell) in grid.iter_mut().enumerate() {
        period = labeler.period_of(loc, period);
        let l = usize::from(labeler.labels[loc]);
        let enclosed = tables[period * width + l] == 0;
        if enclosed {
            enclosed_total += 1;
        }
        *cell = T::from_flag(enclosed);
    }

    let filled = enclosed_total - foreground;
    debug!(
        "fill_voids_bounded {:?}: filled {} voxels after {} relabel flushes",
        dims.shape(),
        filled,
        labeler.cursors.len()
    );
    Ok(filled)
}

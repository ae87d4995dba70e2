//! Grid dimensions and flat indexing
//!
//! Grids are stored flat with x varying fastest, then y, then z:
//! `index = x + sx * y + sx * sy * z`. A [`Dims`] also records the grid's
//! [`Rank`], which decides which axes have boundary faces. A 2D grid is
//! not the same thing as a 3D grid one voxel thick: in the slab every
//! voxel lies on a z face, in the 2D grid only the four edges do.

use crate::error::{Error, Result};

/// Number of axes a grid was declared with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Single row (sx)
    One = 1,
    /// Single plane (sx × sy)
    Two = 2,
    /// Volume (sx × sy × sz)
    Three = 3,
}

impl Rank {
    /// Number of axes as an integer
    pub fn axes(self) -> u32 {
        self as u32
    }
}

/// Shape of a flat 1D/2D/3D grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dims {
    sx: usize,
    sy: usize,
    sz: usize,
    rank: Rank,
}

impl Dims {
    fn checked(sx: usize, sy: usize, sz: usize, rank: Rank) -> Result<Self> {
        sx.checked_mul(sy)
            .and_then(|sxy| sxy.checked_mul(sz))
            .ok_or(Error::DimensionOverflow { sx, sy, sz })?;
        Ok(Self { sx, sy, sz, rank })
    }

    /// Dimensions of a 1D grid of `sx` cells
    pub fn new_1d(sx: usize) -> Self {
        Self {
            sx,
            sy: 1,
            sz: 1,
            rank: Rank::One,
        }
    }

    /// Dimensions of a 2D grid
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionOverflow`] if `sx * sy` overflows.
    pub fn new_2d(sx: usize, sy: usize) -> Result<Self> {
        Self::checked(sx, sy, 1, Rank::Two)
    }

    /// Dimensions of a 3D grid
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionOverflow`] if `sx * sy * sz` overflows.
    pub fn new_3d(sx: usize, sy: usize, sz: usize) -> Result<Self> {
        Self::checked(sx, sy, sz, Rank::Three)
    }

    pub fn sx(&self) -> usize {
        self.sx
    }

    pub fn sy(&self) -> usize {
        self.sy
    }

    pub fn sz(&self) -> usize {
        self.sz
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// `(sx, sy, sz)`; missing axes report 1
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.sx, self.sy, self.sz)
    }

    /// Total number of cells
    pub fn voxels(&self) -> usize {
        self.sx * self.sy * self.sz
    }

    /// True if any axis has zero extent
    pub fn is_empty(&self) -> bool {
        self.voxels() == 0
    }

    /// Distance between vertically adjacent cells
    pub fn stride_y(&self) -> usize {
        self.sx
    }

    /// Distance between cells adjacent along z
    pub fn stride_z(&self) -> usize {
        self.sx * self.sy
    }

    /// Largest backward offset of a face neighbour
    ///
    /// A raster scan positioned at index `i` never looks further back than
    /// `i - causal_reach()`.
    pub fn causal_reach(&self) -> usize {
        if self.sz > 1 {
            self.stride_z()
        } else if self.sy > 1 {
            self.stride_y()
        } else {
            1
        }
    }

    pub fn contains(&self, x: usize, y: usize, z: usize) -> bool {
        x < self.sx && y < self.sy && z < self.sz
    }

    /// Flat index of `(x, y, z)`
    ///
    /// The coordinate is not bounds checked; see [`Dims::try_index`].
    #[inline]
    pub fn index(&self, x: usize, y: usize, z: usize) -> usize {
        x + self.sx * (y + self.sy * z)
    }

    /// Flat index of `(x, y, z)` with bounds checking
    pub fn try_index(&self, x: usize, y: usize, z: usize) -> Result<usize> {
        if self.contains(x, y, z) {
            Ok(self.index(x, y, z))
        } else {
            Err(Error::OutOfBounds {
                x,
                y,
                z,
                sx: self.sx,
                sy: self.sy,
                sz: self.sz,
            })
        }
    }

    /// Inverse of [`Dims::index`]
    #[inline]
    pub fn coords(&self, index: usize) -> (usize, usize, usize) {
        let sxy = self.stride_z();
        let z = index / sxy;
        let rem = index - z * sxy;
        let y = rem / self.sx;
        (rem - y * self.sx, y, z)
    }

    /// True if the cell lies on a face of the grid
    ///
    /// Only the axes that exist for the grid's [`Rank`] contribute faces.
    #[inline]
    pub fn is_boundary(&self, x: usize, y: usize, z: usize) -> bool {
        if x == 0 || x + 1 == self.sx {
            return true;
        }
        if self.rank != Rank::One && (y == 0 || y + 1 == self.sy) {
            return true;
        }
        self.rank == Rank::Three && (z == 0 || z + 1 == self.sz)
    }

    /// True if the whole row at `(y, z)` lies on a y or z face
    #[inline]
    pub fn is_boundary_row(&self, y: usize, z: usize) -> bool {
        match self.rank {
            Rank::One => false,
            Rank::Two => y == 0 || y + 1 == self.sy,
            Rank::Three => y == 0 || y + 1 == self.sy || z == 0 || z + 1 == self.sz,
        }
    }

    /// Verify that a flat buffer has exactly one element per cell
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSizeMismatch`] on any other length.
    pub fn check_len(&self, len: usize) -> Result<()> {
        if len == self.voxels() {
            Ok(())
        } else {
            Err(Error::BufferSizeMismatch {
                expected: self.voxels(),
                actual: len,
            })
        }
    }
}

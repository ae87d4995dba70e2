//! Volume - an owned flat grid
//!
//! The algorithms work on borrowed `&mut [T]` buffers plus [`Dims`], so a
//! caller can keep its own allocation. `Volume` is the owned alternative:
//! the buffer and its shape travel together and cannot disagree.

use crate::dims::Dims;
use crate::error::Result;
use crate::voxel::Voxel;
use num_traits::Zero;

/// Owned grid of cells in x-fastest raster order
#[derive(Debug, Clone, PartialEq)]
pub struct Volume<T> {
    dims: Dims,
    data: Vec<T>,
}

impl<T: Copy + Zero> Volume<T> {
    /// Create an all-zero volume
    pub fn new(dims: Dims) -> Self {
        Self {
            dims,
            data: vec![T::zero(); dims.voxels()],
        }
    }
}

impl<T> Volume<T> {
    /// Wrap an existing buffer
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::BufferSizeMismatch`] if `data.len()` is not
    /// `dims.voxels()`.
    pub fn from_vec(dims: Dims, data: Vec<T>) -> Result<Self> {
        dims.check_len(data.len())?;
        Ok(Self { dims, data })
    }

    /// Build a volume by evaluating `f(x, y, z)` in raster order
    pub fn from_fn<F>(dims: Dims, mut f: F) -> Self
    where
        F: FnMut(usize, usize, usize) -> T,
    {
        let (sx, sy, sz) = dims.shape();
        let mut data = Vec::with_capacity(dims.voxels());
        for z in 0..sz {
            for y in 0..sy {
                for x in 0..sx {
                    data.push(f(x, y, z));
                }
            }
        }
        Self { dims, data }
    }

    pub fn dims(&self) -> Dims {
        self.dims
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Apply `f` to every cell, keeping the shape
    pub fn map<U, F: FnMut(&T) -> U>(&self, f: F) -> Volume<U> {
        Volume {
            dims: self.dims,
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl<T: Copy> Volume<T> {
    /// Value at `(x, y, z)`, or `None` outside the grid
    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<T> {
        if self.dims.contains(x, y, z) {
            Some(self.data[self.dims.index(x, y, z)])
        } else {
            None
        }
    }

    /// Set the value at `(x, y, z)`
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] outside the grid.
    pub fn set(&mut self, x: usize, y: usize, z: usize, value: T) -> Result<()> {
        let index = self.dims.try_index(x, y, z)?;
        self.data[index] = value;
        Ok(())
    }
}

impl<T: Voxel> Volume<T> {
    /// Number of non-zero cells
    pub fn count_foreground(&self) -> usize {
        self.data.iter().filter(|v| v.is_foreground()).count()
    }
}

//! Disjoint set (union-find) over provisional labels
//!
//! Every slot starts as its own root. Registration is tracked apart from
//! parentage, so a label attached under 0 is still known to be present.
//! Slot 0 is always registered and stands for the background that touches
//! the grid boundary.
//!
//! Merging always keeps the numerically smaller root. Label 0 therefore
//! stays the root of any class it joins, and each class is represented by
//! its first-minted label, so renumbering in root order follows raster
//! order.

use crate::error::{RegionError, RegionResult};
use voidfill_core::Label;

/// Union-find with path compression and a fixed capacity
#[derive(Debug, Clone)]
pub struct DisjointSet<L: Label = u32> {
    ids: Vec<L>,
    registered: Vec<bool>,
}

impl<L: Label> DisjointSet<L> {
    /// Create a set able to hold labels `0..capacity`
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidParameters`] if `capacity` is zero or
    /// its largest label does not fit in `L`.
    pub fn with_capacity(capacity: usize) -> RegionResult<Self> {
        if capacity == 0 || L::from_index(capacity - 1).is_none() {
            return Err(RegionError::InvalidParameters(format!(
                "disjoint set capacity {} does not fit in {}",
                capacity,
                std::any::type_name::<L>()
            )));
        }
        let mut set = Self {
            ids: vec![L::zero(); capacity],
            registered: vec![false; capacity],
        };
        set.clear();
        Ok(set)
    }

    /// Number of label slots
    pub fn capacity(&self) -> usize {
        self.ids.len()
    }

    /// Number of registered labels, counting 0
    pub fn len(&self) -> usize {
        self.registered.iter().filter(|&&r| r).count()
    }

    /// True if `p` has been added (0 always is)
    pub fn contains(&self, p: L) -> bool {
        self.registered.get(p.index()).copied().unwrap_or(false)
    }

    /// Register `p`; no-op if already present
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::LabelsExhausted`] if `p` is past the capacity.
    pub fn add(&mut self, p: L) -> RegionResult<()> {
        let capacity = self.registered.len();
        let slot = self
            .registered
            .get_mut(p.index())
            .ok_or(RegionError::LabelsExhausted { capacity })?;
        *slot = true;
        Ok(())
    }

    /// Canonical representative of `p`'s class
    ///
    /// Compresses the path it walks. A label that was never added is its
    /// own root.
    ///
    /// # Panics
    ///
    /// Panics if `p` is not below [`capacity`](Self::capacity).
    pub fn root(&mut self, p: L) -> L {
        let mut root = p;
        while self.ids[root.index()] != root {
            root = self.ids[root.index()];
        }

        let mut cur = p;
        while cur != root {
            let next = self.ids[cur.index()];
            self.ids[cur.index()] = root;
            cur = next;
        }
        root
    }

    /// True if `p` and `q` are in the same class
    ///
    /// # Panics
    ///
    /// Panics if either label is not below the capacity.
    pub fn find(&mut self, p: L, q: L) -> bool {
        self.root(p) == self.root(q)
    }

    /// Merge the classes of `p` and `q`, returning the surviving root
    ///
    /// Either label is added first if it was not present.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::LabelsExhausted`] if a label is past the
    /// capacity.
    pub fn unify(&mut self, p: L, q: L) -> RegionResult<L> {
        self.add(p)?;
        self.add(q)?;
        let rp = self.root(p);
        let rq = self.root(q);
        if rp == rq {
            return Ok(rp);
        }
        let (keep, attach) = if rp < rq { (rp, rq) } else { (rq, rp) };
        self.ids[attach.index()] = keep;
        Ok(keep)
    }

    /// Forget every merge and registration except slot 0
    ///
    /// Used to reuse the set between online relabeling flushes without
    /// reallocating.
    pub fn clear(&mut self) {
        for (i, id) in self.ids.iter_mut().enumerate() {
            if let Some(label) = L::from_index(i) {
                *id = label;
            }
        }
        self.registered.fill(false);
        self.registered[0] = true;
    }
}

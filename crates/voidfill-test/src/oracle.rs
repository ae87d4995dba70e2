//! Brute-force reference implementations
//!
//! Plain breadth-first searches over face neighbours with no run-length or
//! union-find tricks. Slow, but obviously correct, which is what the
//! regression and property tests compare against.

use std::collections::{HashMap, VecDeque};
use voidfill_core::{Dims, Volume, Voxel, same_class};

/// Face neighbours of a cell (4 in 2D, 6 in 3D, 2 in 1D)
pub fn face_neighbors(dims: Dims, index: usize) -> Vec<usize> {
    let (sx, sy, sz) = dims.shape();
    let (x, y, z) = dims.coords(index);
    let mut n = Vec::with_capacity(6);
    if x > 0 {
        n.push(index - 1);
    }
    if x + 1 < sx {
        n.push(index + 1);
    }
    if y > 0 {
        n.push(index - sx);
    }
    if y + 1 < sy {
        n.push(index + sx);
    }
    if z > 0 {
        n.push(index - sx * sy);
    }
    if z + 1 < sz {
        n.push(index + sx * sy);
    }
    n
}

/// Background cells reachable from the boundary through background
pub fn exterior_mask<T: Voxel>(volume: &Volume<T>) -> Vec<bool> {
    let dims = volume.dims();
    let data = volume.as_slice();
    let mut exterior = vec![false; data.len()];
    let mut queue = VecDeque::new();

    for (i, v) in data.iter().enumerate() {
        let (x, y, z) = dims.coords(i);
        if !v.is_foreground() && dims.is_boundary(x, y, z) {
            exterior[i] = true;
            queue.push_back(i);
        }
    }

    while let Some(i) = queue.pop_front() {
        for n in face_neighbors(dims, i) {
            if !exterior[n] && !data[n].is_foreground() {
                exterior[n] = true;
                queue.push_back(n);
            }
        }
    }

    exterior
}

/// Binary hole fill: 1 for foreground and voids, 0 for exterior background
pub fn reference_fill<T: Voxel>(volume: &Volume<T>) -> Volume<u8> {
    let exterior = exterior_mask(volume);
    let data: Vec<u8> = exterior.iter().map(|&e| u8::from(!e)).collect();
    Volume::from_fn(volume.dims(), |x, y, z| data[volume.dims().index(x, y, z)])
}

/// Number of background cells not reachable from the boundary
pub fn reference_void_count<T: Voxel>(volume: &Volume<T>) -> usize {
    let exterior = exterior_mask(volume);
    volume
        .as_slice()
        .iter()
        .zip(&exterior)
        .filter(|(v, e)| !v.is_foreground() && !**e)
        .count()
}

/// Component labels of foreground with absorbed voids
///
/// Two cells are connected when they are face neighbours and either
/// share a class (same foreground value, or both void) or one of them is
/// void and the other foreground. Exterior background is 0; components
/// are numbered from 1 in raster order of their first cell.
pub fn reference_components<T: Voxel>(volume: &Volume<T>) -> Vec<usize> {
    let dims = volume.dims();
    let data = volume.as_slice();
    let exterior = exterior_mask(volume);
    let is_void = |i: usize| !data[i].is_foreground() && !exterior[i];
    let linked = |a: usize, b: usize| {
        if exterior[a] || exterior[b] {
            return false;
        }
        same_class(data[a], data[b]) || is_void(a) || is_void(b)
    };

    let mut labels = vec![0usize; data.len()];
    let mut next = 0;
    for start in 0..data.len() {
        if exterior[start] || labels[start] != 0 {
            continue;
        }
        next += 1;
        labels[start] = next;
        let mut queue = VecDeque::from([start]);
        while let Some(i) = queue.pop_front() {
            for n in face_neighbors(dims, i) {
                if labels[n] == 0 && linked(i, n) {
                    labels[n] = next;
                    queue.push_back(n);
                }
            }
        }
    }
    labels
}

/// True if two labelings describe the same partition
///
/// Zero must coincide exactly; non-zero labels may be renamed, but only
/// bijectively.
pub fn same_partition<A, B>(a: &[A], b: &[B]) -> bool
where
    A: Copy + Eq + std::hash::Hash + Default,
    B: Copy + Eq + std::hash::Hash + Default,
{
    if a.len() != b.len() {
        return false;
    }
    let mut forward: HashMap<A, B> = HashMap::new();
    let mut backward: HashMap<B, A> = HashMap::new();
    for (&la, &lb) in a.iter().zip(b) {
        if (la == A::default()) != (lb == B::default()) {
            return false;
        }
        if *forward.entry(la).or_insert(lb) != lb || *backward.entry(lb).or_insert(la) != la {
            return false;
        }
    }
    true
}

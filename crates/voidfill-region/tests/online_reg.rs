//! Bounded-label fill regression test
//!
//! The bounded fill must produce exactly what the run-length fill produces
//! whenever it succeeds, including across many relabel flushes.

use voidfill_core::{Dims, Volume};
use voidfill_region::{OnlineOptions, RegionError, fill_voids, fill_voids_bounded};
use voidfill_test::{
    RegParams, hollow_box, hollow_box_void, hollow_sphere, load_test_volume, random_volume,
};

/// Run both fills on copies of `vol`; `None` if the label space ran out
fn bounded_vs_seedfill(
    rp: &mut RegParams,
    vol: &Volume<u8>,
    options: &OnlineOptions,
) -> Option<usize> {
    let dims = vol.dims();
    let mut expected = vol.as_slice().to_vec();
    let expected_count = fill_voids(&mut expected, dims).expect("fill_voids");

    let mut actual = vol.as_slice().to_vec();
    match fill_voids_bounded(&mut actual, dims, options) {
        Ok(count) => {
            rp.compare_values(expected_count as f64, count as f64, 0.0);
            rp.compare_values(1.0, if actual == expected { 1.0 } else { 0.0 }, 0.0);
            Some(count)
        }
        Err(RegionError::LabelsExhausted { .. }) => {
            rp.compare_values(
                1.0,
                if actual == vol.as_slice() { 1.0 } else { 0.0 },
                0.0,
            );
            None
        }
        Err(e) => panic!("unexpected error: {e}"),
    }
}

/// Tall grid alternating solid rows with rows of two one-cell voids
fn void_ladder(rows: usize) -> Volume<u8> {
    let dims = Dims::new_2d(5, 2 * rows + 1).unwrap();
    Volume::from_fn(dims, |x, y, _| u8::from(y % 2 == 0 || x % 2 == 0))
}

#[test]
fn online_reg() {
    let mut rp = RegParams::new("online");
    let default = OnlineOptions::default();

    // --- Test 1: fixtures with the default ceiling ---
    eprintln!("=== Fixtures ===");
    for name in [
        "center_dot.txt",
        "ring5.txt",
        "hollow_cube3.txt",
        "two_blobs.txt",
        "spiral_open.txt",
        "spiral_closed.txt",
        "nested_rings.txt",
    ] {
        let vol = load_test_volume(name).expect(name);
        let count = bounded_vs_seedfill(&mut rp, &vol, &default);
        rp.compare_values(1.0, if count.is_some() { 1.0 } else { 0.0 }, 0.0);
    }

    // --- Test 2: a large shell needs a single live label ---
    eprintln!("=== Large hollow box ===");
    let dims = Dims::new_3d(64, 64, 64).unwrap();
    let vol = hollow_box(dims, 1);
    let tight = OnlineOptions::new().with_label_ceiling(2);
    let count = bounded_vs_seedfill(&mut rp, &vol, &tight);
    rp.compare_values(hollow_box_void(dims, 1) as f64, count.unwrap_or(0) as f64, 0.0);

    // --- Test 3: stacked voids force repeated flushes ---
    eprintln!("=== Void ladder ===");
    let vol = void_ladder(100);
    let options = OnlineOptions::new().with_label_ceiling(4);
    let count = bounded_vs_seedfill(&mut rp, &vol, &options);
    rp.compare_values(200.0, count.unwrap_or(0) as f64, 0.0);

    // --- Test 4: spheres with the default ceiling ---
    eprintln!("=== Hollow spheres ===");
    for (size, radius, wall) in [(15usize, 6.0, 1.5), (40, 18.0, 2.5)] {
        let vol = hollow_sphere(size, radius, wall);
        let count = bounded_vs_seedfill(&mut rp, &vol, &default);
        rp.compare_values(1.0, if count.is_some() { 1.0 } else { 0.0 }, 0.0);
    }

    // --- Test 5: random volumes over a range of ceilings ---
    eprintln!("=== Random volumes ===");
    let shapes = [
        Dims::new_2d(40, 30).unwrap(),
        Dims::new_3d(16, 14, 12).unwrap(),
        Dims::new_1d(64),
    ];
    for (i, dims) in shapes.into_iter().enumerate() {
        for ceiling in [2u8, 5, 16, 255] {
            let options = OnlineOptions::new().with_label_ceiling(ceiling);
            let mut succeeded = 0;
            for seed in 0..4u64 {
                let vol = random_volume(dims, 0.55, 500 + 10 * i as u64 + seed);
                if bounded_vs_seedfill(&mut rp, &vol, &options).is_some() {
                    succeeded += 1;
                }
            }
            eprintln!(
                "  {:?} ceiling {}: {}/4 within the label space",
                dims.shape(),
                ceiling,
                succeeded
            );
            if ceiling == 255 {
                rp.compare_values(4.0, succeeded as f64, 0.0);
            }
        }
    }

    assert!(rp.cleanup());
}

#[test]
fn test_ladder_exhausts_tiny_ceiling() {
    // Two voids in one row cannot share a single live label
    let vol = void_ladder(3);
    let mut grid = vol.as_slice().to_vec();
    let options = OnlineOptions::new().with_label_ceiling(2);
    let err = fill_voids_bounded(&mut grid, vol.dims(), &options).unwrap_err();
    assert!(matches!(err, RegionError::LabelsExhausted { capacity: 3 }));
    assert_eq!(grid, vol.as_slice());
}

#[test]
fn test_ladder_3d() {
    // Column of one-voxel cavities along z, each sealed by a solid plane
    let dims = Dims::new_3d(3, 3, 41).unwrap();
    let mut grid: Vec<u8> = (0..dims.voxels())
        .map(|i| {
            let (x, y, z) = dims.coords(i);
            u8::from(!(x == 1 && y == 1 && z % 2 == 1))
        })
        .collect();
    let options = OnlineOptions::new().with_label_ceiling(2);
    assert_eq!(fill_voids_bounded(&mut grid, dims, &options).unwrap(), 20);
    assert!(grid.iter().all(|&v| v == 1));
}

#[test]
fn test_many_flushes_over_large_grid() {
    // 13^3 isolated one-voxel cavities, well past one label space
    let dims = Dims::new_3d(40, 40, 40).unwrap();
    let base: Vec<u8> = (0..dims.voxels())
        .map(|i| {
            let (x, y, z) = dims.coords(i);
            u8::from(!(x % 3 == 2 && y % 3 == 2 && z % 3 == 2))
        })
        .collect();

    let mut expected = base.clone();
    assert_eq!(fill_voids(&mut expected, dims).unwrap(), 2197);

    let mut grid = base;
    let count = fill_voids_bounded(&mut grid, dims, &OnlineOptions::default()).unwrap();
    assert_eq!(count, 2197);
    assert_eq!(grid, expected);
}

#[test]
fn test_empty_grid() {
    let mut grid: Vec<u8> = Vec::new();
    let dims = Dims::new_3d(0, 4, 4).unwrap();
    assert_eq!(
        fill_voids_bounded(&mut grid, dims, &OnlineOptions::default()).unwrap(),
        0
    );
}

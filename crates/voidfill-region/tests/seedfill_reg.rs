//! Seedfill regression test
//!
//! Fills the fixture volumes and synthetic shells, then checks the results
//! against the brute-force breadth-first reference fill.

use voidfill_core::{Dims, Volume, Voxel};
use voidfill_region::{
    OnlineOptions, count_voids, fill_holes, fill_voids, fill_voids_2d, fill_voids_3d,
    fill_voids_bounded, fill_voids_labeled, fill_volume,
};
use voidfill_test::{
    RegParams, hollow_box, hollow_box_void, hollow_sphere, load_test_volume, random_volume,
    reference_fill, reference_void_count,
};

/// Fill a copy of `vol` and compare it with the reference fill
fn check_against_reference(rp: &mut RegParams, vol: &Volume<u8>) -> usize {
    let expected = reference_fill(vol);
    let expected_count = reference_void_count(vol);
    let (filled, count) = fill_holes(vol).expect("fill_holes");
    rp.compare_volumes(&expected, &filled);
    rp.compare_values(expected_count as f64, count as f64, 0.0);
    count
}

#[test]
fn seedfill_reg() {
    let mut rp = RegParams::new("seedfill");

    // --- Test 1: fixtures with known counts ---
    eprintln!("=== Fixtures ===");
    for (name, expected) in [
        ("center_dot.txt", 0usize),
        ("ring5.txt", 1),
        ("hollow_cube3.txt", 1),
        ("two_blobs.txt", 1),
        ("spiral_open.txt", 0),
        ("spiral_closed.txt", 15),
        ("nested_rings.txt", 33),
    ] {
        let vol = load_test_volume(name).expect(name);
        let count = check_against_reference(&mut rp, &vol);
        rp.compare_values(expected as f64, count as f64, 0.0);
        eprintln!("  {}: {:?} filled {}", name, vol.dims().shape(), count);
    }

    // --- Test 2: hollow boxes of every rank ---
    eprintln!("=== Hollow boxes ===");
    for dims in [
        Dims::new_1d(9),
        Dims::new_2d(12, 7).unwrap(),
        Dims::new_3d(6, 8, 5).unwrap(),
        Dims::new_3d(16, 16, 16).unwrap(),
    ] {
        for wall in [1usize, 2] {
            let vol = hollow_box(dims, wall);
            let count = check_against_reference(&mut rp, &vol);
            rp.compare_values(hollow_box_void(dims, wall) as f64, count as f64, 0.0);
        }
    }

    // --- Test 3: spherical shells ---
    eprintln!("=== Hollow spheres ===");
    for (size, radius, wall) in [(11usize, 4.5, 1.5), (21, 9.0, 2.0), (32, 14.0, 1.8)] {
        let vol = hollow_sphere(size, radius, wall);
        let count = check_against_reference(&mut rp, &vol);
        rp.compare_values(1.0, if count > 0 { 1.0 } else { 0.0 }, 0.0);
        eprintln!("  sphere {} r={} w={}: filled {}", size, radius, wall, count);
    }

    // --- Test 4: seeded random volumes ---
    eprintln!("=== Random volumes ===");
    let shapes = [
        Dims::new_1d(40),
        Dims::new_2d(33, 17).unwrap(),
        Dims::new_3d(13, 11, 9).unwrap(),
        Dims::new_3d(1, 20, 20).unwrap(),
        Dims::new_3d(20, 1, 20).unwrap(),
    ];
    for (i, dims) in shapes.iter().enumerate() {
        for density in [0.3, 0.5, 0.7] {
            let vol = random_volume(*dims, density, 1000 + i as u64);
            check_against_reference(&mut rp, &vol);
        }
    }

    assert!(rp.cleanup());
}

#[test]
fn test_single_void_scenarios() {
    // 3x3 plane of zeros: nothing is enclosed
    let mut grid = vec![0u8; 9];
    assert_eq!(fill_voids_2d(&mut grid, 3, 3).unwrap(), 0);
    assert!(grid.iter().all(|&v| v == 0));

    // 3x3 plane with a lone foreground cell in the middle
    let mut grid = vec![0u8, 0, 0, 0, 1, 0, 0, 0, 0];
    assert_eq!(fill_voids_2d(&mut grid, 3, 3).unwrap(), 0);
    assert_eq!(grid, vec![0, 0, 0, 0, 1, 0, 0, 0, 0]);

    // 3x3 ring
    let mut grid = vec![1u8, 1, 1, 1, 0, 1, 1, 1, 1];
    assert_eq!(fill_voids_2d(&mut grid, 3, 3).unwrap(), 1);
    assert!(grid.iter().all(|&v| v == 1));

    // 3x3x3 shell around one voxel
    let mut grid = vec![1u8; 27];
    grid[13] = 0;
    assert_eq!(fill_voids_3d(&mut grid, 3, 3, 3).unwrap(), 1);
    assert!(grid.iter().all(|&v| v == 1));
}

#[test]
fn test_boundary_background_is_kept() {
    let dims = Dims::new_3d(9, 7, 6).unwrap();
    for seed in 0..8 {
        let vol = random_volume(dims, 0.55, seed);
        let mut out = vol.clone();
        fill_volume(&mut out).unwrap();
        for (i, (&before, &after)) in vol.as_slice().iter().zip(out.as_slice()).enumerate() {
            let (x, y, z) = dims.coords(i);
            if dims.is_boundary(x, y, z) {
                assert_eq!(before, after, "boundary cell ({}, {}, {}) changed", x, y, z);
            }
            if before != 0 {
                assert_eq!(after, 1, "foreground cell ({}, {}, {}) cleared", x, y, z);
            }
        }
    }
}

#[test]
fn test_fill_is_idempotent() {
    let dims = Dims::new_3d(12, 10, 8).unwrap();
    for seed in 0..6 {
        let mut grid = random_volume(dims, 0.6, seed).into_vec();
        fill_voids(&mut grid, dims).unwrap();
        let once = grid.clone();
        assert_eq!(fill_voids(&mut grid, dims).unwrap(), 0);
        assert_eq!(grid, once);
    }
}

#[test]
fn test_count_matches_fill() {
    let dims = Dims::new_2d(25, 25).unwrap();
    for seed in 0..6 {
        let vol = random_volume(dims, 0.5, seed);
        let counted = count_voids(vol.as_slice(), dims).unwrap();
        let mut grid = vol.into_vec();
        assert_eq!(fill_voids(&mut grid, dims).unwrap(), counted);
    }
}

#[test]
fn test_multivalued_input_is_binarized() {
    let vol = load_test_volume("nested_rings.txt").unwrap();
    let (out, filled) = fill_holes(&vol).unwrap();
    assert_eq!(filled, 33);
    assert!(out.as_slice().iter().all(|&v| v <= 1));
    assert_eq!(out.get(5, 5, 0), Some(1));
    assert_eq!(out.get(3, 3, 0), Some(1));
    assert_eq!(out.get(0, 0, 0), Some(0));
}

/// 3x3x3 shell around one voxel, converted to an element type
fn shell_of<T: Voxel>() -> Vec<T> {
    (0..27).map(|i| T::from_flag(i != 13)).collect()
}

fn check_shell<T: Voxel>() {
    let dims = Dims::new_3d(3, 3, 3).unwrap();
    let mut grid = shell_of::<T>();
    assert_eq!(count_voids(&grid, dims).unwrap(), 1);
    assert_eq!(fill_voids(&mut grid, dims).unwrap(), 1);
    assert!(grid.iter().all(|v| v.is_foreground()));
}

#[test]
fn test_element_types() {
    check_shell::<bool>();
    check_shell::<u8>();
    check_shell::<u16>();
    check_shell::<u32>();
    check_shell::<u64>();
    check_shell::<i8>();
    check_shell::<i16>();
    check_shell::<i32>();
    check_shell::<i64>();
    check_shell::<f32>();
    check_shell::<f64>();
}

#[test]
fn test_bool_mask() {
    let mut mask = vec![
        false, false, false, false, false, //
        false, true, true, true, false, //
        false, true, false, true, false, //
        false, true, true, true, false, //
        false, false, false, false, false,
    ];
    let (labels, stats) =
        fill_voids_labeled::<bool, u8>(&mask, Dims::new_2d(5, 5).unwrap()).unwrap();
    assert_eq!(stats.filled, 1);
    assert_eq!(labels[12], 1);

    let mut bounded = mask.clone();
    let options = OnlineOptions::default();
    assert_eq!(
        fill_voids_bounded(&mut bounded, Dims::new_2d(5, 5).unwrap(), &options).unwrap(),
        1
    );
    assert_eq!(fill_voids_2d(&mut mask, 5, 5).unwrap(), 1);
    assert!(mask[12]);
    assert!(!mask[0]);
    assert_eq!(bounded, mask);
}

#[test]
fn test_float_grid() {
    let mut grid = vec![1.0f32, 1.0, 1.0, 1.0, 0.0, 1.0, 1.0, 1.0, 1.0];
    assert_eq!(fill_voids_2d(&mut grid, 3, 3).unwrap(), 1);
    assert!(grid.iter().all(|&v| v == 1.0));
}

#[test]
fn test_size_mismatch() {
    let mut grid = vec![0u8; 10];
    assert!(fill_voids_2d(&mut grid, 3, 3).is_err());
    assert!(count_voids(&grid, Dims::new_3d(2, 2, 2).unwrap()).is_err());
}

//! Fixture volumes: ASCII files and synthetic generators
//!
//! Fixture text format:
//!
//! ```text
//! ; comment
//! #####
//! #...#
//! #####
//!
//! #####
//! #.2.#
//! #####
//! ```
//!
//! `.` is background, `#` is 1 and `1`-`9` are labeled values. Rows of a
//! slice are consecutive lines; blank lines separate z slices. A file with
//! a single slice is a 2D grid, otherwise it is 3D.

use crate::error::{TestError, TestResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use voidfill_core::{Dims, Rank, Volume};

fn parse_cell(c: char, line: usize) -> TestResult<u8> {
    match c {
        '.' => Ok(0),
        '#' => Ok(1),
        '1'..='9' => Ok(c as u8 - b'0'),
        _ => Err(TestError::FixtureParse {
            line,
            message: format!("unexpected character {:?}", c),
        }),
    }
}

/// Parse fixture text into a volume
///
/// # Errors
///
/// Returns [`TestError::FixtureParse`] for unknown characters, ragged rows,
/// slices of different heights or an empty fixture.
pub fn parse_volume(text: &str) -> TestResult<Volume<u8>> {
    let mut slices: Vec<Vec<Vec<u8>>> = Vec::new();
    let mut current: Vec<Vec<u8>> = Vec::new();
    let mut sx: Option<usize> = None;

    for (n, raw) in text.lines().enumerate() {
        let line_no = n + 1;
        let line = raw.trim();
        if line.starts_with(';') {
            continue;
        }
        if line.is_empty() {
            if !current.is_empty() {
                slices.push(std::mem::take(&mut current));
            }
            continue;
        }

        let row = line
            .chars()
            .map(|c| parse_cell(c, line_no))
            .collect::<TestResult<Vec<u8>>>()?;
        match sx {
            None => sx = Some(row.len()),
            Some(w) if w != row.len() => {
                return Err(TestError::FixtureParse {
                    line: line_no,
                    message: format!("row has {} cells, expected {}", row.len(), w),
                });
            }
            Some(_) => {}
        }
        current.push(row);
    }
    if !current.is_empty() {
        slices.push(current);
    }

    let sx = sx.ok_or(TestError::FixtureParse {
        line: 0,
        message: "fixture contains no rows".to_string(),
    })?;
    let sy = slices[0].len();
    if let Some(bad) = slices.iter().position(|s| s.len() != sy) {
        return Err(TestError::FixtureParse {
            line: 0,
            message: format!("slice {} has {} rows, expected {}", bad, slices[bad].len(), sy),
        });
    }

    let dims = if slices.len() == 1 {
        Dims::new_2d(sx, sy)?
    } else {
        Dims::new_3d(sx, sy, slices.len())?
    };
    let data: Vec<u8> = slices.into_iter().flatten().flatten().collect();
    Ok(Volume::from_vec(dims, data)?)
}

/// Render a volume in fixture format (non-zero values above 9 print as `#`)
pub fn format_volume<T: voidfill_core::Voxel + Into<f64>>(volume: &Volume<T>) -> String {
    let dims = volume.dims();
    let (sx, sy, sz) = dims.shape();
    let mut out = String::with_capacity((sx + 1) * sy * sz + sz);
    for z in 0..sz {
        if z > 0 {
            out.push('\n');
        }
        for y in 0..sy {
            for x in 0..sx {
                let v: f64 = volume.as_slice()[dims.index(x, y, z)].into();
                out.push(match v {
                    v if v == 0.0 => '.',
                    v if v == 1.0 => '#',
                    v if (2.0..=9.0).contains(&v) && v.fract() == 0.0 => {
                        char::from(b'0' + v as u8)
                    }
                    _ => '#',
                });
            }
            out.push('\n');
        }
    }
    out
}

/// Load a fixture from `tests/data/volumes/` at the workspace root
pub fn load_test_volume(name: &str) -> TestResult<Volume<u8>> {
    let path = crate::test_data_path(name);
    let text = std::fs::read_to_string(&path).map_err(|e| TestError::FixtureLoad {
        path: path.clone(),
        message: e.to_string(),
    })?;
    parse_volume(&text)
}

/// Box-shaped shell filling the whole grid
///
/// Cells within `wall` of any face that exists for the grid's rank are 1,
/// everything deeper is 0. The interior is therefore one void.
pub fn hollow_box(dims: Dims, wall: usize) -> Volume<u8> {
    let (sx, sy, sz) = dims.shape();
    let near = |c: usize, s: usize| c < wall || c + wall >= s;
    Volume::from_fn(dims, |x, y, z| {
        let shell = near(x, sx)
            || (dims.rank() != Rank::One && near(y, sy))
            || (dims.rank() == Rank::Three && near(z, sz));
        u8::from(shell)
    })
}

/// Number of cells of [`hollow_box`] that lie in its void
pub fn hollow_box_void(dims: Dims, wall: usize) -> usize {
    let inner = |s: usize| s.saturating_sub(2 * wall);
    match dims.rank() {
        Rank::One => inner(dims.sx()),
        Rank::Two => inner(dims.sx()) * inner(dims.sy()),
        Rank::Three => inner(dims.sx()) * inner(dims.sy()) * inner(dims.sz()),
    }
}

/// Spherical shell centered in a `size`³ cube
///
/// Cells whose center lies at distance `d` with
/// `radius - wall < d <= radius` are 1.
pub fn hollow_sphere(size: usize, radius: f64, wall: f64) -> Volume<u8> {
    let dims = Dims::new_3d(size, size, size).unwrap_or_else(|_| Dims::new_1d(0));
    let c = (size as f64 - 1.0) / 2.0;
    Volume::from_fn(dims, |x, y, z| {
        let (dx, dy, dz) = (x as f64 - c, y as f64 - c, z as f64 - c);
        let d = (dx * dx + dy * dy + dz * dz).sqrt();
        u8::from(d <= radius && d > radius - wall)
    })
}

/// Seeded random binary volume; each cell is 1 with probability `density`
pub fn random_volume(dims: Dims, density: f64, seed: u64) -> Volume<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let p = density.clamp(0.0, 1.0);
    Volume::from_fn(dims, |_, _, _| u8::from(rng.random_bool(p)))
}

/// Seeded random labeled volume with foreground values in `1..=max_value`
pub fn random_labels(dims: Dims, density: f64, max_value: u16, seed: u64) -> Volume<u16> {
    let mut rng = StdRng::seed_from_u64(seed);
    let p = density.clamp(0.0, 1.0);
    let max_value = max_value.max(1);
    Volume::from_fn(dims, |_, _, _| {
        if rng.random_bool(p) {
            rng.random_range(1..=max_value)
        } else {
            0
        }
    })
}

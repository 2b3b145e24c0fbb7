//! Deterministic BGRA test patterns for tools, tests and benchmarks.
use super::BGRA_CHANNELS;

/// Every pixel set to `[b, g, r, a]`.
pub fn uniform_bgra(width: usize, height: usize, bgra: [u8; 4]) -> Vec<u8> {
    bgra.repeat(width * height)
}

/// Expand gray levels into opaque BGRA pixels.
pub fn bgra_from_gray(gray: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(gray.len() * BGRA_CHANNELS);
    for &v in gray {
        out.extend_from_slice(&[v, v, v, 255]);
    }
    out
}

/// High-contrast checkerboard with square cells of `cell` pixels.
pub fn checkerboard_bgra(width: usize, height: usize, cell: usize) -> Vec<u8> {
    let cell = cell.max(1);
    let mut gray = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let sum = x / cell + y / cell;
            gray[y * width + x] = if sum & 1 == 0 { 32 } else { 220 };
        }
    }
    bgra_from_gray(&gray)
}

/// Dark left half, bright right half; the first bright column is `edge_x`.
pub fn vertical_step_bgra(width: usize, height: usize, edge_x: usize) -> Vec<u8> {
    let mut gray = vec![0u8; width * height];
    for y in 0..height {
        for x in edge_x.min(width)..width {
            gray[y * width + x] = 200;
        }
    }
    bgra_from_gray(&gray)
}

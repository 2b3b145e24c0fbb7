mod common;

use common::fixtures::XorShift;
use roi_edges::edges::{canny, hysteresis, non_max_suppression, sobel_gradients, CannyParams};
use roi_edges::image::{GrayImageU8, ImageF32};

/// Fixpoint reference: repeatedly promote weak pixels touching a marked one.
fn reference_hysteresis(nms: &ImageF32, low: f32, high: f32) -> Vec<u8> {
    let (w, h) = (nms.w, nms.h);
    let mut out = vec![0u8; w * h];
    for (o, &m) in out.iter_mut().zip(&nms.data) {
        if m > 0.0 && m >= high {
            *o = 255;
        }
    }
    loop {
        let mut changed = false;
        for y in 0..h {
            for x in 0..w {
                let m = nms.get(x, y);
                if out[y * w + x] != 0 || m <= 0.0 || m < low {
                    continue;
                }
                let touches = (y.saturating_sub(1)..=(y + 1).min(h - 1)).any(|ny| {
                    (x.saturating_sub(1)..=(x + 1).min(w - 1)).any(|nx| out[ny * w + nx] != 0)
                });
                if touches {
                    out[y * w + x] = 255;
                    changed = true;
                }
            }
        }
        if !changed {
            return out;
        }
    }
}

#[test]
fn edge_tracking_equals_reachability() {
    let mut rng = XorShift(0x9e37_79b9);
    for _ in 0..25 {
        let (w, h) = (24, 18);
        let mut nms = ImageF32::new(w, h);
        for v in nms.data.iter_mut() {
            // Mostly empty, some weak, few strong.
            *v = match rng.next_u32() % 10 {
                0..=4 => 0.0,
                5..=8 => 60.0 + (rng.next_u32() % 80) as f32,
                _ => 150.0 + (rng.next_u32() % 200) as f32,
            };
        }
        let out = hysteresis(&nms, 50.0, 150.0);
        assert_eq!(out.mask.data(), reference_hysteresis(&nms, 50.0, 150.0).as_slice());
    }
}

#[test]
fn isolated_strong_pixel_survives_alone() {
    let mut nms = ImageF32::new(9, 9);
    nms.set(4, 4, 999.0);
    let out = hysteresis(&nms, 100.0, 200.0);
    assert_eq!(out.mask.count_nonzero(), 1);
    assert_eq!(out.mask.get(4, 4), 255);
}

#[test]
fn weak_chain_is_all_or_nothing() {
    let chain: Vec<(usize, usize)> = (1..8).map(|i| (i, 1 + i / 2)).collect();
    let mut nms = ImageF32::new(10, 8);
    for &(x, y) in &chain {
        nms.set(x, y, 75.0);
    }
    let dropped = hysteresis(&nms, 50.0, 150.0);
    assert_eq!(dropped.mask.count_nonzero(), 0);

    nms.set(8, 5, 400.0);
    let kept = hysteresis(&nms, 50.0, 150.0);
    assert_eq!(kept.mask.count_nonzero(), chain.len() + 1);
    for &(x, y) in &chain {
        assert_eq!(kept.mask.get(x, y), 255, "chain pixel ({x}, {y})");
    }
}

#[test]
fn flat_interior_has_zero_gradient() {
    for level in [0.0f32, 37.0, 255.0] {
        let mut img = ImageF32::new(11, 8);
        img.data.fill(level);
        let grad = sobel_gradients(&img);
        assert!(grad.mag.data.iter().all(|&m| m == 0.0));
        assert!(non_max_suppression(&grad).data.iter().all(|&m| m == 0.0));
    }
}

#[test]
fn diagonal_binary_edge_stays_on_the_diagonal() {
    // Bright below the main diagonal.
    let n = 16;
    let mut img = GrayImageU8::new(n, n);
    for y in 0..n {
        for x in 0..y {
            img.set(x, y, 255);
        }
    }
    let res = canny(&img.as_view(), &CannyParams::new(50.0, 150.0)).unwrap();
    let edges = &res.edges;
    assert!(res.stats.edge_pixels >= n - 4);
    // Far from the diagonal nothing fires.
    for y in 0..n {
        for x in 0..n {
            if x.abs_diff(y) > 2 {
                assert_eq!(edges.get(x, y), 0, "({x}, {y})");
            }
        }
    }
}

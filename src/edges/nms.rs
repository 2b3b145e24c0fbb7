//! Non‑maximum suppression on gradient magnitude with direction alignment.
//!
//! For each interior pixel the two comparison neighbors are picked from the
//! quantized gradient direction. The pixel survives when its magnitude is
//! strictly greater than the neighbor on the "before" side (left or above)
//! and at least as large as the one on the "after" side. The asymmetry
//! keeps exactly one pixel of a two-pixel plateau, which is what a Sobel
//! response to a hard binary step looks like.
//!
//! The result is dense: suppressed pixels and the 1‑pixel frame hold `0.0`.
use crate::edges::grad::Grad;
use crate::image::{ImageF32, ImageView, ImageViewMut};

pub fn non_max_suppression(grad: &Grad) -> ImageF32 {
    let w = grad.width();
    let h = grad.height();
    let mut out = ImageF32::new(w, h);
    if w < 3 || h < 3 {
        return out;
    }

    let mag = &grad.mag;
    for y in 1..h - 1 {
        let mag_row = mag.row(y);
        let dir_row = &grad.dir[y * w..(y + 1) * w];
        let out_row = out.row_mut(y);
        for x in 1..w - 1 {
            let m = mag_row[x];
            if m <= 0.0 {
                continue;
            }
            let (dx, dy) = dir_row[x].before_offset();
            // Interior pixels always have all eight neighbors in range.
            let bx = x.wrapping_add_signed(dx);
            let by = y.wrapping_add_signed(dy);
            let ax = x.wrapping_add_signed(-dx);
            let ay = y.wrapping_add_signed(-dy);
            let before = mag.get(bx, by);
            let after = mag.get(ax, ay);
            if m > before && m >= after {
                out_row[x] = m;
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::non_max_suppression;
    use crate::edges::grad::sobel_gradients;
    use crate::image::ImageF32;

    fn binary_step(w: usize, h: usize, edge_x: usize) -> ImageF32 {
        let mut img = ImageF32::new(w, h);
        for y in 0..h {
            for x in edge_x..w {
                img.set(x, y, 255.0);
            }
        }
        img
    }

    #[test]
    fn binary_step_thins_to_single_column() {
        let (w, h) = (10, 6);
        let nms = non_max_suppression(&sobel_gradients(&binary_step(w, h, 5)));
        for y in 0..h {
            for x in 0..w {
                let expected = if x == 4 && (1..h - 1).contains(&y) {
                    1020.0
                } else {
                    0.0
                };
                assert_eq!(nms.get(x, y), expected, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn horizontal_step_thins_to_single_row() {
        let (w, h) = (6, 9);
        let mut img = ImageF32::new(w, h);
        for y in 4..h {
            for x in 0..w {
                img.set(x, y, 255.0);
            }
        }
        let nms = non_max_suppression(&sobel_gradients(&img));
        for y in 0..h {
            for x in 1..w - 1 {
                assert_eq!(nms.get(x, y) > 0.0, y == 3, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn ridge_peak_is_kept_and_flanks_suppressed() {
        // Intensity ramp peaking in column 3 gives gradient ridges at 2 and 4.
        let mut img = ImageF32::new(7, 5);
        for y in 0..5 {
            for (x, v) in [0.0, 0.0, 0.0, 100.0, 0.0, 0.0, 0.0].into_iter().enumerate() {
                img.set(x, y, v);
            }
        }
        let g = sobel_gradients(&img);
        let nms = non_max_suppression(&g);
        assert_eq!(nms.get(3, 2), 0.0);
        assert!(nms.get(2, 2) > 0.0);
        assert!(nms.get(4, 2) > 0.0);
        assert_eq!(nms.get(1, 2), 0.0);
        assert_eq!(nms.get(5, 2), 0.0);
    }
}

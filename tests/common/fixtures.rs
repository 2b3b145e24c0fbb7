use roi_edges::image::synthetic::bgra_from_gray;

/// Builds an opaque BGRA frame from ASCII art: `#` is bright (200), anything
/// else dark (20). Rows must have equal length.
pub fn bgra_from_ascii(rows: &[&str]) -> (Vec<u8>, usize, usize) {
    let height = rows.len();
    let width = rows.first().map_or(0, |r| r.len());
    let mut gray = Vec::with_capacity(width * height);
    for row in rows {
        assert_eq!(row.len(), width, "ragged ascii fixture");
        gray.extend(row.bytes().map(|c| if c == b'#' { 200 } else { 20 }));
    }
    (bgra_from_gray(&gray), width, height)
}

/// Coordinates of all 255 pixels, row-major.
pub fn edge_coords(data: &[u8], width: usize) -> Vec<(usize, usize)> {
    data.iter()
        .enumerate()
        .filter(|&(_, &v)| v == 255)
        .map(|(i, _)| (i % width, i / width))
        .collect()
}

/// Copy a sub-rectangle out of a tightly packed BGRA frame.
pub fn copy_bgra_rect(
    data: &[u8],
    width: usize,
    x: usize,
    y: usize,
    w: usize,
    h: usize,
) -> Vec<u8> {
    let mut out = Vec::with_capacity(w * h * 4);
    for row in y..y + h {
        let start = (row * width + x) * 4;
        out.extend_from_slice(&data[start..start + w * 4]);
    }
    out
}

/// Deterministic xorshift stream for reproducible fixtures.
pub struct XorShift(pub u32);

impl XorShift {
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.0 = x;
        x
    }
}

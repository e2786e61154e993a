use square_icons::ImageRgba8;

/// Generates a fully opaque single-color image.
pub fn solid_rgba(width: usize, height: usize, px: [u8; 4]) -> ImageRgba8 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = ImageRgba8::new(width, height);
    for row in img.rows_mut() {
        row.fill(px);
    }
    img
}

/// Generates a simple high-contrast opaque checkerboard image.
pub fn checkerboard_rgba(width: usize, height: usize, cell: usize) -> ImageRgba8 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut img = ImageRgba8::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let sum = (x / cell) + (y / cell);
            let val = if sum & 1 == 0 { 32u8 } else { 220 };
            img.set(x, y, [val, val, val, 255]);
        }
    }
    img
}

use crate::bitmap::PixelGrid;

/// Find the first silhouette pixel, scanning columns left to right and
/// each column top to bottom.
pub fn first_opaque(grid: &PixelGrid, opaque_alpha: u8) -> Option<(i32, i32)> {
    (0..grid.width())
        .flat_map(|x| (0..grid.height()).map(move |y| (x, y)))
        .find(|&(x, y)| grid.is_opaque(x, y, opaque_alpha))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn scans_column_major() {
        let mut img = RgbaImage::new(5, 5);
        // (3,0) comes first in row-major order, (1,4) in column-major order.
        img.put_pixel(3, 0, Rgba([0, 0, 0, 0xFF]));
        img.put_pixel(1, 4, Rgba([0, 0, 0, 0xFF]));
        let grid = PixelGrid::new(img);

        let seed = first_opaque(&grid, 0xFF);
        assert_eq!(seed, Some((1, 4)));
        let (x, y) = seed.unwrap();
        assert!(grid.is_opaque(x, y, 0xFF));
    }

    #[test]
    fn translucent_pixels_are_skipped() {
        let mut img = RgbaImage::new(3, 3);
        img.put_pixel(0, 0, Rgba([255, 255, 255, 0xFE]));
        let grid = PixelGrid::new(img);
        assert_eq!(first_opaque(&grid, 0xFF), None);
    }
}

//! Text dumps of grids and outlines for eyeballing a solve on a terminal.

use crate::bitmap::{alpha, PixelGrid};
use crate::contour::Contour;

/// One line per image row: `0` on contour points, `1` everywhere else.
pub fn outline_mask(grid: &PixelGrid, contour: &Contour) -> String {
    mask(grid, |x, y| if contour.contains(x, y) { '0' } else { '1' })
}

/// One line per image row: `1` where the pixel is the sentinel colour or
/// fully transparent, `0` otherwise.
pub fn fill_mask(grid: &PixelGrid, sentinel: u32) -> String {
    mask(grid, |x, y| {
        let color = grid.color_at(x, y);
        if color == sentinel || alpha(color) == 0 {
            '1'
        } else {
            '0'
        }
    })
}

fn mask(grid: &PixelGrid, cell: impl Fn(i32, i32) -> char) -> String {
    let mut out = String::with_capacity(((grid.width() + 1) * grid.height()) as usize);
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            out.push(cell(x, y));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn outline_marks_contour_points() {
        let grid = PixelGrid::new(RgbaImage::new(3, 2));
        let contour = Contour::new(vec![(0, 0), (1, 0), (0, 0)], (0, 0));
        assert_eq!(outline_mask(&grid, &contour), "001\n111\n");
    }

    #[test]
    fn fill_marks_sentinel_and_transparent() {
        let mut img = RgbaImage::from_pixel(2, 2, Rgba([9, 9, 9, 255]));
        img.put_pixel(0, 0, Rgba([255, 255, 255, 255]));
        img.put_pixel(1, 1, Rgba([9, 9, 9, 0]));
        let grid = PixelGrid::new(img);
        assert_eq!(fill_mask(&grid, 0xFFFF_FFFF), "10\n01\n");
    }
}
